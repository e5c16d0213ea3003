//! Level-count rules and sub-band length bookkeeping.

/// Number of dyadic decomposition levels for an axis of `len` samples.
///
/// An axis shorter than 8 samples contributes no levels; very long axes are
/// capped at 6. Equivalent to `min(6, floor(log2(len / 8)) + 1)`, computed in
/// integer arithmetic.
pub fn num_of_levels(len: usize) -> usize {
    let mut n = 0;
    let mut t = len / 8;
    while t > 0 {
        n += 1;
        t /= 2;
    }
    n.min(6)
}

/// Number of wavelet-packet partitions for an axis of `len` samples: how many
/// times the low half can be split off before a single sample remains.
pub fn num_of_partitions(len: usize) -> usize {
    let mut n = 0;
    let mut l = len;
    while l > 1 {
        l -= l / 2;
        n += 1;
    }
    n
}

/// Low-pass prefix lengths for `levels` analysis steps on an axis of `len`
/// samples. Element `k` is the run length the level-`k` pass operates on;
/// synthesis walks the same sequence backwards.
pub fn subband_lengths(len: usize, levels: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(levels);
    let mut l = len;
    for _ in 0..levels {
        out.push(l);
        l = l.div_ceil(2);
    }
    out
}
