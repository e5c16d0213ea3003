//! Buffer ownership and the multi-level transform drivers.

use log::debug;

use super::constants::lift_coeffs;
use super::levels::{num_of_levels, num_of_partitions, subband_lengths};
use super::pass;
use crate::utils::error::{DwtError, Result};

/// Shape of a loaded volume as `(dx, dy, dz)`, x varying fastest. A 2D plane
/// is `(dx, dy, 1)`, a 1D signal `(dx, 1, 1)`.
pub type Dims = (usize, usize, usize);

/// In-place multi-resolution CDF 9/7 transform engine.
///
/// Owns the sample buffer between ingest and release, plus the scratch space
/// the per-axis passes work through. An instance is not thread-safe; distinct
/// instances are fully independent.
///
/// The transform drivers assume a buffer and matching shape have been
/// installed; calling them on an empty engine is a no-op.
pub struct Cdf97 {
    data: Vec<f64>,
    dims: Dims,
    lift_buf: Vec<f64>,  // one gathered pencil plus a working copy
    plane_buf: Vec<f64>, // transposed planes, wavelet-packet mode only
}

impl Cdf97 {
    /// Creates an empty engine. Ingest a buffer before transforming.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            dims: (0, 0, 0),
            lift_buf: Vec::new(),
            plane_buf: Vec::new(),
        }
    }

    /// Ingests a typed sample buffer, value-converting every sample to `f64`.
    /// Any previously held data is discarded.
    pub fn copy_data<T>(&mut self, src: &[T], dims: Dims) -> Result<()>
    where
        T: Copy + Into<f64>,
    {
        let expected = dims.0 * dims.1 * dims.2;
        if src.len() != expected {
            return Err(DwtError::WrongDims {
                expected,
                actual: src.len(),
            });
        }
        self.data.clear();
        self.data.extend(src.iter().map(|&v| v.into()));
        self.install_dims(dims);
        Ok(())
    }

    /// Ingests samples of type `T` from a raw byte buffer, e.g. one read
    /// straight off a file mapping. A byte slice that does not describe whole
    /// `T` samples, or whose sample count mismatches `dims`, is rejected.
    pub fn copy_data_bytes<T>(&mut self, raw: &[u8], dims: Dims) -> Result<()>
    where
        T: bytemuck::Pod + Into<f64>,
    {
        let src: &[T] = bytemuck::try_cast_slice(raw).map_err(|_| DwtError::WrongDims {
            expected: dims.0 * dims.1 * dims.2,
            actual: raw.len() / std::mem::size_of::<T>(),
        })?;
        self.copy_data(src, dims)
    }

    /// Adopts a ready-made `f64` buffer without copying.
    pub fn take_data(&mut self, buf: Vec<f64>, dims: Dims) -> Result<()> {
        let expected = dims.0 * dims.1 * dims.2;
        if buf.len() != expected {
            return Err(DwtError::WrongDims {
                expected,
                actual: buf.len(),
            });
        }
        self.data = buf;
        self.install_dims(dims);
        Ok(())
    }

    /// Immutable view of the current sample buffer.
    pub fn view_data(&self) -> &[f64] {
        &self.data
    }

    /// Hands the buffer back to the caller and clears the shape. Scratch
    /// space stays allocated for the next ingest.
    pub fn release_data(&mut self) -> Vec<f64> {
        self.dims = (0, 0, 0);
        std::mem::take(&mut self.data)
    }

    /// Current `(dx, dy, dz)` shape.
    pub fn get_dims(&self) -> Dims {
        self.dims
    }

    fn install_dims(&mut self, dims: Dims) {
        self.dims = dims;
        let max_len = dims.0.max(dims.1).max(dims.2);
        if self.lift_buf.len() < 2 * max_len {
            self.lift_buf.resize(2 * max_len, 0.0);
        }
    }

    fn ensure_plane_buf(&mut self) {
        let need = self.dims.0 * self.dims.1.max(self.dims.2);
        if self.plane_buf.len() < need {
            self.plane_buf.resize(need, 0.0);
        }
    }

    /// Multi-level forward transform along x.
    pub fn dwt1d(&mut self) {
        let cf = lift_coeffs();
        let levels = num_of_levels(self.dims.0);
        debug!("dwt1d: {} level(s) over {} samples", levels, self.dims.0);
        let Self { data, lift_buf, dims, .. } = self;
        for len in subband_lengths(dims.0, levels) {
            pass::analyze_run(&mut data[..len], lift_buf, cf);
        }
    }

    /// Multi-level inverse transform along x.
    pub fn idwt1d(&mut self) {
        let cf = lift_coeffs();
        let levels = num_of_levels(self.dims.0);
        let Self { data, lift_buf, dims, .. } = self;
        for &len in subband_lengths(dims.0, levels).iter().rev() {
            pass::synthesize_run(&mut data[..len], lift_buf, cf);
        }
    }

    /// Multi-level forward transform over the xy plane. Both axes halve in
    /// lockstep on the shared low-pass corner.
    pub fn dwt2d(&mut self) {
        let cf = lift_coeffs();
        let levels = num_of_levels(self.dims.0).min(num_of_levels(self.dims.1));
        debug!(
            "dwt2d: {} level(s) over {}x{}",
            levels, self.dims.0, self.dims.1
        );
        let Self { data, lift_buf, dims, .. } = self;
        let plane = dims.0 * dims.1;
        let (mut lx, mut ly) = (dims.0, dims.1);
        for _ in 0..levels {
            pass::analyze_plane(&mut data[..plane], dims.0, lx, ly, lift_buf, cf);
            lx = lx.div_ceil(2);
            ly = ly.div_ceil(2);
        }
    }

    /// Multi-level inverse transform over the xy plane.
    pub fn idwt2d(&mut self) {
        let cf = lift_coeffs();
        let levels = num_of_levels(self.dims.0).min(num_of_levels(self.dims.1));
        let Self { data, lift_buf, dims, .. } = self;
        let plane = dims.0 * dims.1;
        let xs = subband_lengths(dims.0, levels);
        let ys = subband_lengths(dims.1, levels);
        for k in (0..levels).rev() {
            pass::synthesize_plane(&mut data[..plane], dims.0, xs[k], ys[k], lift_buf, cf);
        }
    }

    /// Multi-level dyadic forward transform over the full volume. The
    /// schedule stops as soon as the shortest axis runs out of levels.
    pub fn dwt3d_dyadic(&mut self) {
        let cf = lift_coeffs();
        let levels = self.dyadic_levels_3d();
        debug!("dwt3d_dyadic: {} level(s) over {:?}", levels, self.dims);
        let Self { data, lift_buf, dims, .. } = self;
        let (mut lx, mut ly, mut lz) = *dims;
        for _ in 0..levels {
            pass::analyze_volume(data, *dims, (lx, ly, lz), lift_buf, cf);
            lx = lx.div_ceil(2);
            ly = ly.div_ceil(2);
            lz = lz.div_ceil(2);
        }
    }

    /// Multi-level dyadic inverse transform over the full volume.
    pub fn idwt3d_dyadic(&mut self) {
        let cf = lift_coeffs();
        let levels = self.dyadic_levels_3d();
        let Self { data, lift_buf, dims, .. } = self;
        let xs = subband_lengths(dims.0, levels);
        let ys = subband_lengths(dims.1, levels);
        let zs = subband_lengths(dims.2, levels);
        for k in (0..levels).rev() {
            pass::synthesize_volume(data, *dims, (xs[k], ys[k], zs[k]), lift_buf, cf);
        }
    }

    /// Forward wavelet-packet transform: every axis keeps splitting its low
    /// band until a single sample remains, independent of the other axes.
    pub fn dwt3d_wavelet_packet(&mut self) {
        let cf = lift_coeffs();
        self.ensure_plane_buf();
        let schedule = packet_schedule(self.dims);
        debug!(
            "dwt3d_wavelet_packet: {} level(s) over {:?}",
            schedule.len(),
            self.dims
        );
        let Self { data, lift_buf, plane_buf, dims } = self;
        for &lens in &schedule {
            pass::analyze_packet_level(data, *dims, lens, lift_buf, plane_buf, cf);
        }
    }

    /// Inverse wavelet-packet transform; replays the forward schedule
    /// backwards.
    pub fn idwt3d_wavelet_packet(&mut self) {
        let cf = lift_coeffs();
        self.ensure_plane_buf();
        let schedule = packet_schedule(self.dims);
        let Self { data, lift_buf, plane_buf, dims } = self;
        for &lens in schedule.iter().rev() {
            pass::synthesize_packet_level(data, *dims, lens, lift_buf, plane_buf, cf);
        }
    }

    fn dyadic_levels_3d(&self) -> usize {
        num_of_levels(self.dims.0)
            .min(num_of_levels(self.dims.1))
            .min(num_of_levels(self.dims.2))
    }
}

impl Default for Cdf97 {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-level `(lx, ly, lz)` boxes of the wavelet-packet schedule. An axis of
/// length 1 stays at length 1 while the others keep halving.
fn packet_schedule(dims: Dims) -> Vec<Dims> {
    let levels = num_of_partitions(dims.0)
        .max(num_of_partitions(dims.1))
        .max(num_of_partitions(dims.2));
    let (mut lx, mut ly, mut lz) = dims;
    let mut out = Vec::with_capacity(levels);
    for _ in 0..levels {
        out.push((lx, ly, lz));
        lx = lx.div_ceil(2);
        ly = ly.div_ceil(2);
        lz = lz.div_ceil(2);
    }
    out
}
