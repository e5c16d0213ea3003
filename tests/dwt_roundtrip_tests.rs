use cdf97_dwt::transform::levels::num_of_levels;
use cdf97_dwt::{Cdf97, DwtError};

/// Per-sample reconstruction tolerance: 1e-10 relative to the sample
/// magnitude, with an absolute floor of 1e-10.
fn assert_reconstructed(orig: &[f64], out: &[f64]) {
    assert_eq!(orig.len(), out.len(), "buffer length changed");
    for (i, (a, b)) in orig.iter().zip(out).enumerate() {
        let tol = 1e-10 * a.abs().max(1.0);
        assert!(
            (a - b).abs() <= tol,
            "sample {} drifted: {} vs {} (tol {})",
            i,
            a,
            b,
            tol
        );
    }
}

/// Small deterministic generator for "arbitrary" sample values.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f64 / (1u64 << 31) as f64) * 8.0 - 4.0
    }
}

/// A flat signal of length 16 must survive the 1D round trip essentially
/// exactly.
#[test]
fn test_1d_roundtrip_constant_len16() {
    let orig = vec![1.0f64; 16];
    let mut engine = Cdf97::new();
    engine.copy_data(&orig, (16, 1, 1)).unwrap();
    engine.dwt1d();
    engine.idwt1d();
    for (i, v) in engine.view_data().iter().enumerate() {
        assert!(
            (v - 1.0).abs() <= 1e-12,
            "sample {} drifted beyond 1e-12: {}",
            i,
            v
        );
    }
}

/// Odd-length 1D ramp exercises the odd-parity kernels at every level.
#[test]
fn test_1d_roundtrip_ramp_len17() {
    let orig: Vec<f64> = (0..17).map(|i| i as f64).collect();
    let mut engine = Cdf97::new();
    engine.copy_data(&orig, (17, 1, 1)).unwrap();
    engine.dwt1d();
    engine.idwt1d();
    assert_reconstructed(&orig, engine.view_data());
}

/// Three samples is the smallest run the odd-length kernel sees.
#[test]
fn test_1d_roundtrip_len3() {
    let orig = vec![0.25, -3.5, 11.0];
    let mut engine = Cdf97::new();
    engine.take_data(orig.clone(), (3, 1, 1)).unwrap();
    engine.dwt1d();
    engine.idwt1d();
    assert_reconstructed(&orig, engine.view_data());
}

/// The 6-level cap must hold on a very long axis, and reconstruction with it.
#[test]
fn test_1d_long_axis_capped_roundtrip() {
    let n = 1_000_000;
    assert_eq!(num_of_levels(n), 6);
    let orig: Vec<f64> = (0..n).map(|i| ((i % 251) as f64) * 0.125 - 16.0).collect();
    let mut engine = Cdf97::new();
    engine.take_data(orig.clone(), (n, 1, 1)).unwrap();
    engine.dwt1d();
    engine.idwt1d();
    assert_reconstructed(&orig, engine.view_data());
}

/// After the full 1D decomposition of a constant signal every level scales
/// the shrinking low band by sqrt(2), so a length-16 input (two levels) ends
/// with a low corner of `2 * c` and nothing anywhere else.
#[test]
fn test_1d_constant_low_band_gain() {
    let c = 5.0;
    let mut engine = Cdf97::new();
    engine.copy_data(&vec![c; 16], (16, 1, 1)).unwrap();
    engine.dwt1d();
    let data = engine.view_data();
    for (i, v) in data.iter().enumerate() {
        if i < 4 {
            assert!(
                (v - 2.0 * c).abs() <= 1e-8,
                "low corner sample {}: {} (want {})",
                i,
                v,
                2.0 * c
            );
        } else {
            assert!(v.abs() <= 1e-8, "detail sample {} not empty: {}", i, v);
        }
    }
}

/// 2D round trip on the i+j plane; also checks that the synthesis axis order
/// (columns, then rows) exactly inverts the analysis order (rows, then
/// columns).
#[test]
fn test_2d_roundtrip_8x8() {
    let orig: Vec<f64> = (0..64).map(|k| ((k / 8) + (k % 8)) as f64).collect();
    let mut engine = Cdf97::new();
    engine.copy_data(&orig, (8, 8, 1)).unwrap();
    engine.dwt2d();

    // One level on 8x8: the energy concentrates in the 4x4 low corner.
    let coeffs = engine.view_data().to_vec();
    let mut ll_sum = 0.0;
    let mut detail_sum = 0.0;
    for y in 0..8 {
        for x in 0..8 {
            if x < 4 && y < 4 {
                ll_sum += coeffs[y * 8 + x];
            } else {
                detail_sum += coeffs[y * 8 + x].abs();
            }
        }
    }
    assert!(
        ll_sum.abs() > 100.0,
        "low corner lost the plane mean: {}",
        ll_sum
    );
    assert!(
        detail_sum < ll_sum.abs(),
        "detail bands outweigh the low corner: {} vs {}",
        detail_sum,
        ll_sum
    );

    engine.idwt2d();
    assert_reconstructed(&orig, engine.view_data());
}

/// One 2D level on a constant plane: the low corner holds `2 * c` (a
/// sqrt(2) gain per axis) and all three detail corners vanish.
#[test]
fn test_2d_constant_subband_structure() {
    let c = 3.0;
    let mut engine = Cdf97::new();
    engine.copy_data(&vec![c; 64], (8, 8, 1)).unwrap();
    engine.dwt2d();
    let coeffs = engine.view_data();
    for y in 0..8 {
        for x in 0..8 {
            let v = coeffs[y * 8 + x];
            if x < 4 && y < 4 {
                assert!(
                    (v - 2.0 * c).abs() <= 1e-8,
                    "LL({},{}) = {} (want {})",
                    x,
                    y,
                    v,
                    2.0 * c
                );
            } else {
                assert!(v.abs() <= 1e-8, "detail({},{}) = {}", x, y, v);
            }
        }
    }
}

/// Odd-length axes in 2D exercise the odd kernels along both directions.
#[test]
fn test_2d_roundtrip_odd_axes() {
    for dims in [(9usize, 11usize), (12, 9), (9, 16)] {
        let n = dims.0 * dims.1;
        let mut rng = Lcg(7);
        let orig: Vec<f64> = (0..n).map(|_| rng.next()).collect();
        let mut engine = Cdf97::new();
        engine.copy_data(&orig, (dims.0, dims.1, 1)).unwrap();
        engine.dwt2d();
        engine.idwt2d();
        assert_reconstructed(&orig, engine.view_data());
    }
}

/// 3D dyadic round trip on a Gaussian bump; a 16^3 volume runs exactly two
/// levels, which shows up as a (sqrt 2)^6 = 8x gain on a constant volume.
#[test]
fn test_3d_dyadic_roundtrip_gaussian_16() {
    let orig: Vec<f64> = (0..16 * 16 * 16)
        .map(|k| {
            let (x, y, z) = (k % 16, (k / 16) % 16, k / 256);
            let r2 = [x, y, z]
                .iter()
                .map(|&v| (v as f64 - 7.5) * (v as f64 - 7.5))
                .sum::<f64>();
            (-r2 / 18.0).exp()
        })
        .collect();
    let mut engine = Cdf97::new();
    engine.copy_data(&orig, (16, 16, 16)).unwrap();
    engine.dwt3d_dyadic();
    engine.idwt3d_dyadic();
    assert_reconstructed(&orig, engine.view_data());

    let c = 1.5;
    engine.copy_data(&vec![c; 16 * 16 * 16], (16, 16, 16)).unwrap();
    engine.dwt3d_dyadic();
    let corner = engine.view_data()[0];
    assert!(
        (corner - 8.0 * c).abs() <= 1e-7,
        "two dyadic levels should scale a constant corner by 8: {}",
        corner
    );
}

/// Mixed-parity axes in 3D dyadic mode.
#[test]
fn test_3d_dyadic_roundtrip_mixed_parity() {
    let dims = (9usize, 8usize, 12usize);
    let n = dims.0 * dims.1 * dims.2;
    let mut rng = Lcg(99);
    let orig: Vec<f64> = (0..n).map(|_| rng.next()).collect();
    let mut engine = Cdf97::new();
    engine.copy_data(&orig, dims).unwrap();
    engine.dwt3d_dyadic();
    engine.idwt3d_dyadic();
    assert_reconstructed(&orig, engine.view_data());
}

/// Axes below eight samples contribute no dyadic levels, so the buffer must
/// come through a dyadic call bit-for-bit unchanged.
#[test]
fn test_3d_dyadic_short_axes_inert() {
    for dims in [(7usize, 7usize, 7usize), (16, 1, 1), (16, 16, 7)] {
        let n = dims.0 * dims.1 * dims.2;
        let mut rng = Lcg(3);
        let orig: Vec<f64> = (0..n).map(|_| rng.next()).collect();
        let mut engine = Cdf97::new();
        engine.copy_data(&orig, dims).unwrap();
        engine.dwt3d_dyadic();
        assert_eq!(
            orig,
            engine.view_data(),
            "dyadic schedule ran on {:?} despite a short axis",
            dims
        );
    }
}

/// Wavelet-packet round trip over shapes that hit odd lengths, single-sample
/// axes, and uneven per-axis depths.
#[test]
fn test_3d_wavelet_packet_roundtrip() {
    for dims in [
        (5usize, 3usize, 2usize),
        (1, 1, 7),
        (4, 4, 4),
        (7, 5, 3),
        (16, 1, 1),
        (2, 2, 2),
        (6, 1, 9),
        (13, 10, 4),
    ] {
        let n = dims.0 * dims.1 * dims.2;
        let mut rng = Lcg(n as u64 + 1);
        let orig: Vec<f64> = (0..n).map(|_| rng.next()).collect();
        let mut engine = Cdf97::new();
        engine.copy_data(&orig, dims).unwrap();
        engine.dwt3d_wavelet_packet();
        engine.idwt3d_wavelet_packet();
        assert_reconstructed(&orig, engine.view_data());
    }
}

/// Shape and buffer length survive any number of transform calls.
#[test]
fn test_shape_and_length_preserved() {
    let dims = (10usize, 9usize, 8usize);
    let n = dims.0 * dims.1 * dims.2;
    let mut engine = Cdf97::new();
    engine.copy_data(&vec![0.5f64; n], dims).unwrap();
    engine.dwt3d_dyadic();
    engine.dwt3d_wavelet_packet();
    engine.idwt3d_wavelet_packet();
    engine.idwt3d_dyadic();
    assert_eq!(engine.get_dims(), dims);
    assert_eq!(engine.view_data().len(), n);
}

/// Ingest validation: a length/shape mismatch is the one reportable error.
#[test]
fn test_wrong_dims_on_ingest() {
    let mut engine = Cdf97::new();
    let err = engine.copy_data(&[1.0f64; 10], (3, 4, 1)).unwrap_err();
    assert_eq!(
        err,
        DwtError::WrongDims {
            expected: 12,
            actual: 10
        }
    );

    let err = engine.take_data(vec![0.0; 5], (2, 2, 2)).unwrap_err();
    assert_eq!(
        err,
        DwtError::WrongDims {
            expected: 8,
            actual: 5
        }
    );

    // A byte buffer that does not describe whole f32 samples.
    let err = engine.copy_data_bytes::<f32>(&[0u8; 9], (2, 1, 1)).unwrap_err();
    assert!(matches!(err, DwtError::WrongDims { .. }));
}

/// Byte-level ingest converts narrower sample types on the way in.
#[test]
fn test_copy_data_bytes_f32() {
    let samples: Vec<f32> = (0..24).map(|i| i as f32 * 0.5).collect();
    let raw: &[u8] = bytemuck::cast_slice(&samples);
    let mut engine = Cdf97::new();
    engine.copy_data_bytes::<f32>(raw, (4, 3, 2)).unwrap();
    assert_eq!(engine.view_data()[5], 2.5);

    engine.dwt3d_wavelet_packet();
    engine.idwt3d_wavelet_packet();
    let expect: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    assert_reconstructed(&expect, engine.view_data());
}

/// Release hands the coefficients out and the engine can be reloaded.
#[test]
fn test_release_and_reingest() {
    let orig: Vec<f64> = (0..32).map(|i| (i as f64).sqrt()).collect();
    let mut engine = Cdf97::new();
    engine.take_data(orig.clone(), (32, 1, 1)).unwrap();
    engine.dwt1d();
    let coeffs = engine.release_data();
    assert_eq!(coeffs.len(), 32);
    assert_eq!(engine.get_dims(), (0, 0, 0));

    engine.take_data(coeffs, (32, 1, 1)).unwrap();
    engine.idwt1d();
    assert_reconstructed(&orig, engine.view_data());
}

/// Integer sample types ride the same value-conversion ingest.
#[test]
fn test_copy_data_integer_sources() {
    let src: Vec<i16> = (0..20).map(|i| i * 3 - 10).collect();
    let mut engine = Cdf97::new();
    engine.copy_data(&src, (20, 1, 1)).unwrap();
    let orig = engine.view_data().to_vec();
    engine.dwt1d();
    engine.idwt1d();
    assert_reconstructed(&orig, engine.view_data());
}
