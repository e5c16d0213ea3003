//! Polyphase reordering between interleaved and `[low | high]` layouts.
//!
//! After a lifting pass the low band occupies even indices and the high band
//! odd indices. `gather` pulls them apart into a low-pass prefix of length
//! `ceil(n/2)` followed by the high-pass suffix; `scatter` is its exact
//! inverse. Both are source-to-destination; the split point handles even and
//! odd lengths alike.

/// Deinterleaves `src` into `dst`: even-indexed samples first, in order,
/// then the odd-indexed samples.
pub fn gather(src: &[f64], dst: &mut [f64]) {
    debug_assert_eq!(src.len(), dst.len());
    let low = src.len().div_ceil(2);
    for i in 0..low {
        dst[i] = src[2 * i];
    }
    for i in 0..src.len() - low {
        dst[low + i] = src[2 * i + 1];
    }
}

/// Re-interleaves `src` laid out as `[low | high]` into `dst`: the low-pass
/// prefix returns to even indices, the high-pass suffix to odd indices.
pub fn scatter(src: &[f64], dst: &mut [f64]) {
    debug_assert_eq!(src.len(), dst.len());
    let low = src.len().div_ceil(2);
    for i in 0..low {
        dst[2 * i] = src[i];
    }
    for i in 0..src.len() - low {
        dst[2 * i + 1] = src[low + i];
    }
}
