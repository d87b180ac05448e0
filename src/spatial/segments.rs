//! Axis segmentation into near-equal integer spans
//!
//! Projects a requested number of evenly spaced points across an axis and
//! rounds them to pixel indices. The rounding rule (nearest integer, ties to
//! even, accumulated in floating point) is load-bearing: grid boundaries and
//! therefore every downstream match are reproducible only if it is preserved
//! exactly.

/// Breakpoints dividing an axis of `initial` samples into `requested` spans
///
/// Returns `requested + 1` non-decreasing indices. The first is always `0`
/// and the last is pinned to `initial` regardless of rounding drift, so the
/// spans always cover the whole axis. Callers should keep
/// `initial > requested`; smaller axes are not rejected but can produce
/// empty spans.
pub fn axis_breakpoints(initial: usize, requested: usize) -> Vec<usize> {
    let step = (initial as f64 - 1.0) / requested as f64;

    let mut breaks = Vec::with_capacity(requested + 1);
    let mut value = 1.0_f64;
    for _ in 0..=requested {
        breaks.push((value.round_ties_even() - 1.0) as usize);
        value += step;
    }

    if let Some(last) = breaks.last_mut() {
        *last = initial;
    }
    breaks
}

/// Consecutive `[from, to)` spans defined by a breakpoint sequence
pub fn spans(breaks: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    breaks.windows(2).map(|pair| match pair {
        [from, to] => (*from, *to),
        _ => (0, 0),
    })
}

/// The `[from, to)` span at `index`, or an empty span when out of range
pub fn span_at(breaks: &[usize], index: usize) -> (usize, usize) {
    match (breaks.get(index), breaks.get(index + 1)) {
        (Some(&from), Some(&to)) => (from, to),
        _ => (0, 0),
    }
}
