//! One-level transform passes over runs, planes, and volumes embedded in a
//! flat sample buffer.
//!
//! The x axis is always contiguous and lifts in place row by row. The y and
//! z axes are strided; each pencil is copied into scratch, transformed there,
//! and written back. Wavelet-packet levels instead materialize whole
//! transposed planes so that every pencil of the slow axes becomes a
//! contiguous run.
//!
//! Row passes within one axis sweep are independent work items; with the
//! `rayon` feature they run on a thread pool, one plane per task.

use super::constants::LiftCoeffs;
use super::lifting;
use super::polyphase;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// One analysis level on a contiguous run of length `n`. Lifts in place,
/// then reorders the interleaved result into `[low | high]` through `tmp`
/// (which must hold at least `n` samples). Runs shorter than two samples
/// pass through untouched.
pub fn analyze_run(run: &mut [f64], tmp: &mut [f64], cf: &LiftCoeffs) {
    let n = run.len();
    if n < 2 {
        return;
    }
    if n % 2 == 0 {
        lifting::analyze_even(run, cf);
    } else {
        lifting::analyze_odd(run, cf);
    }
    let tmp = &mut tmp[..n];
    polyphase::gather(run, tmp);
    run.copy_from_slice(tmp);
}

/// One synthesis level on a contiguous run: scatter `[low | high]` back into
/// interleaved order in `tmp`, undo the lifting there, copy back.
pub fn synthesize_run(run: &mut [f64], tmp: &mut [f64], cf: &LiftCoeffs) {
    let n = run.len();
    if n < 2 {
        return;
    }
    let tmp = &mut tmp[..n];
    polyphase::scatter(run, tmp);
    if n % 2 == 0 {
        lifting::synthesize_even(tmp, cf);
    } else {
        lifting::synthesize_odd(tmp, cf);
    }
    run.copy_from_slice(tmp);
}

/// One analysis level on a strided pencil of `len` samples starting at
/// `start`. The pencil is copied into the first half of `scratch` and
/// transformed there; `scratch` must hold at least `2 * len` samples.
pub fn analyze_strided(
    buf: &mut [f64],
    start: usize,
    stride: usize,
    len: usize,
    scratch: &mut [f64],
    cf: &LiftCoeffs,
) {
    if len < 2 {
        return;
    }
    let (pencil, tmp) = scratch.split_at_mut(len);
    for (i, slot) in pencil.iter_mut().enumerate() {
        *slot = buf[start + i * stride];
    }
    analyze_run(pencil, tmp, cf);
    for (i, &v) in pencil.iter().enumerate() {
        buf[start + i * stride] = v;
    }
}

/// Strided counterpart of [`synthesize_run`].
pub fn synthesize_strided(
    buf: &mut [f64],
    start: usize,
    stride: usize,
    len: usize,
    scratch: &mut [f64],
    cf: &LiftCoeffs,
) {
    if len < 2 {
        return;
    }
    let (pencil, tmp) = scratch.split_at_mut(len);
    for (i, slot) in pencil.iter_mut().enumerate() {
        *slot = buf[start + i * stride];
    }
    synthesize_run(pencil, tmp, cf);
    for (i, &v) in pencil.iter().enumerate() {
        buf[start + i * stride] = v;
    }
}

/// Applies `op` to the first `lx` samples of every x row inside the box
/// `(lx, ly, lz)`, where planes are `plane_stride` apart and rows
/// `row_stride` apart. Parallel over planes when `rayon` is enabled.
fn sweep_rows(
    buf: &mut [f64],
    plane_stride: usize,
    row_stride: usize,
    lens: (usize, usize, usize),
    scratch: &mut [f64],
    cf: &LiftCoeffs,
    op: fn(&mut [f64], &mut [f64], &LiftCoeffs),
) {
    let (lx, ly, lz) = lens;
    #[cfg(feature = "rayon")]
    {
        let _ = scratch;
        let region = &mut buf[..lz * plane_stride];
        region.par_chunks_mut(plane_stride).for_each_init(
            || vec![0.0f64; lx],
            |tmp, chunk| {
                for y in 0..ly {
                    op(&mut chunk[y * row_stride..y * row_stride + lx], tmp, cf);
                }
            },
        );
    }
    #[cfg(not(feature = "rayon"))]
    {
        for z in 0..lz {
            for y in 0..ly {
                let row = z * plane_stride + y * row_stride;
                op(&mut buf[row..row + lx], scratch, cf);
            }
        }
    }
}

/// One analysis level over the `(lx, ly)` corner of a plane whose rows are
/// `row_stride` apart: all rows along x, then all columns along y.
pub fn analyze_plane(
    plane: &mut [f64],
    row_stride: usize,
    lx: usize,
    ly: usize,
    scratch: &mut [f64],
    cf: &LiftCoeffs,
) {
    sweep_rows(plane, row_stride, row_stride, (lx, 1, ly), scratch, cf, analyze_run);
    for x in 0..lx {
        analyze_strided(plane, x, row_stride, ly, scratch, cf);
    }
}

/// Exact inverse of [`analyze_plane`]: columns along y first, then rows
/// along x.
pub fn synthesize_plane(
    plane: &mut [f64],
    row_stride: usize,
    lx: usize,
    ly: usize,
    scratch: &mut [f64],
    cf: &LiftCoeffs,
) {
    for x in 0..lx {
        synthesize_strided(plane, x, row_stride, ly, scratch, cf);
    }
    sweep_rows(plane, row_stride, row_stride, (lx, 1, ly), scratch, cf, synthesize_run);
}

/// One analysis level over the `(lx, ly, lz)` corner of a `dims` volume:
/// x rows in place, then the y and z pencils through scratch.
pub fn analyze_volume(
    buf: &mut [f64],
    dims: (usize, usize, usize),
    lens: (usize, usize, usize),
    scratch: &mut [f64],
    cf: &LiftCoeffs,
) {
    let (dx, dy, _) = dims;
    let (lx, ly, lz) = lens;
    let plane = dx * dy;

    sweep_rows(buf, plane, dx, lens, scratch, cf, analyze_run);
    for z in 0..lz {
        for x in 0..lx {
            analyze_strided(buf, z * plane + x, dx, ly, scratch, cf);
        }
    }
    for y in 0..ly {
        for x in 0..lx {
            analyze_strided(buf, y * dx + x, plane, lz, scratch, cf);
        }
    }
}

/// Exact inverse of [`analyze_volume`]: z, then y, then x.
pub fn synthesize_volume(
    buf: &mut [f64],
    dims: (usize, usize, usize),
    lens: (usize, usize, usize),
    scratch: &mut [f64],
    cf: &LiftCoeffs,
) {
    let (dx, dy, _) = dims;
    let (lx, ly, lz) = lens;
    let plane = dx * dy;

    for y in 0..ly {
        for x in 0..lx {
            synthesize_strided(buf, y * dx + x, plane, lz, scratch, cf);
        }
    }
    for z in 0..lz {
        for x in 0..lx {
            synthesize_strided(buf, z * plane + x, dx, ly, scratch, cf);
        }
    }
    sweep_rows(buf, plane, dx, lens, scratch, cf, synthesize_run);
}

/// Copies the `(nx, n)` sub-plane starting at `base` (rows `stride` apart)
/// into `plane`, transposed so each of the `nx` pencils is contiguous.
fn load_transposed(buf: &[f64], base: usize, stride: usize, nx: usize, n: usize, plane: &mut [f64]) {
    for j in 0..n {
        let row = base + j * stride;
        for x in 0..nx {
            plane[x * n + j] = buf[row + x];
        }
    }
}

/// Inverse of [`load_transposed`].
fn store_transposed(buf: &mut [f64], base: usize, stride: usize, nx: usize, n: usize, plane: &[f64]) {
    for j in 0..n {
        let row = base + j * stride;
        for x in 0..nx {
            buf[row + x] = plane[x * n + j];
        }
    }
}

/// One wavelet-packet analysis level over the `(lx, ly, lz)` corner: x rows
/// lift in place; the y and z axes go through `plane` as transposed planes
/// so every pencil is contiguous while it is lifted. Axes already reduced to
/// a single sample are skipped.
pub fn analyze_packet_level(
    buf: &mut [f64],
    dims: (usize, usize, usize),
    lens: (usize, usize, usize),
    scratch: &mut [f64],
    plane: &mut [f64],
    cf: &LiftCoeffs,
) {
    let (dx, dy, _) = dims;
    let (lx, ly, lz) = lens;
    let stride = dx * dy;

    if lx > 1 {
        sweep_rows(buf, stride, dx, lens, scratch, cf, analyze_run);
    }
    if ly > 1 {
        for z in 0..lz {
            let base = z * stride;
            load_transposed(buf, base, dx, lx, ly, plane);
            for x in 0..lx {
                analyze_run(&mut plane[x * ly..(x + 1) * ly], scratch, cf);
            }
            store_transposed(buf, base, dx, lx, ly, plane);
        }
    }
    if lz > 1 {
        for y in 0..ly {
            let base = y * dx;
            load_transposed(buf, base, stride, lx, lz, plane);
            for x in 0..lx {
                analyze_run(&mut plane[x * lz..(x + 1) * lz], scratch, cf);
            }
            store_transposed(buf, base, stride, lx, lz, plane);
        }
    }
}

/// Exact inverse of [`analyze_packet_level`]: z, then y, then x.
pub fn synthesize_packet_level(
    buf: &mut [f64],
    dims: (usize, usize, usize),
    lens: (usize, usize, usize),
    scratch: &mut [f64],
    plane: &mut [f64],
    cf: &LiftCoeffs,
) {
    let (dx, dy, _) = dims;
    let (lx, ly, lz) = lens;
    let stride = dx * dy;

    if lz > 1 {
        for y in 0..ly {
            let base = y * dx;
            load_transposed(buf, base, stride, lx, lz, plane);
            for x in 0..lx {
                synthesize_run(&mut plane[x * lz..(x + 1) * lz], scratch, cf);
            }
            store_transposed(buf, base, stride, lx, lz, plane);
        }
    }
    if ly > 1 {
        for z in 0..lz {
            let base = z * stride;
            load_transposed(buf, base, dx, lx, ly, plane);
            for x in 0..lx {
                synthesize_run(&mut plane[x * ly..(x + 1) * ly], scratch, cf);
            }
            store_transposed(buf, base, dx, lx, ly, plane);
        }
    }
    if lx > 1 {
        sweep_rows(buf, stride, dx, lens, scratch, cf, synthesize_run);
    }
}
