//! Amortized growth policy for the ring buffer.

/// Below this many slots the buffer doubles on every reallocation.
pub const DOUBLING_THRESHOLD: usize = 256;

/// Returns the backing size to allocate when `required` slots are needed and
/// the current backing holds `current`.
///
/// Small buffers double. Once past [`DOUBLING_THRESHOLD`] the growth factor
/// eases from 2x towards 1.25x, which keeps the amortized cost of a push O(1)
/// while wasting less memory on large queues. A request larger than twice the
/// current size is honoured exactly.
///
/// The result is always `>= required`.
pub fn grown_capacity(current: usize, required: usize) -> usize {
    let doubled = current.saturating_mul(2);
    if required > doubled {
        return required;
    }
    if current < DOUBLING_THRESHOLD {
        return doubled;
    }
    let mut cap = current;
    while cap < required {
        // (cap + 3 * threshold) / 4, split so it cannot overflow
        cap = cap.saturating_add(cap / 4 + 3 * DOUBLING_THRESHOLD / 4);
    }
    cap
}
