//! # CDF 9/7 wavelet transform core
//!
//! In-place, multi-resolution forward and inverse discrete wavelet transform
//! over 1D, 2D, and 3D volumes of `f64` samples, built on the lifting
//! factorization of the Cohen-Daubechies-Feauveau 9/7 filter bank with
//! whole-sample symmetric extension at the boundaries.
//!
//! This library is organized into two modules:
//! - `utils`: error handling shared by the crate surface
//! - `transform`: lifting kernels, polyphase reordering, per-axis passes,
//!   level schedules, and the buffer-owning engine
//!
//! The usual entry point is [`Cdf97`]: ingest a sample buffer together with
//! its `(dx, dy, dz)` shape, run one of the `dwt*`/`idwt*` drivers, and read
//! the coefficients back out of the same buffer.

// Re-export commonly used types at the crate root
pub use transform::engine::{Cdf97, Dims};
pub use utils::error::{DwtError, Result};

pub mod utils {
    pub mod error;
}

pub mod transform {
    pub mod constants;
    pub mod engine;
    pub mod levels;
    pub mod lifting;
    pub mod pass;
    pub mod polyphase;

    #[cfg(test)]
    mod tests;
}
