//! Random number generator (xorshift32)
//!
//! Deterministic and allocation free; the whole field is reproducible from a
//! single `u32` seed.

/// Used whenever a caller seeds with 0 (xorshift never leaves the zero state).
pub const DEFAULT_SEED: u32 = 12345;

#[inline]
pub fn seed_state(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in [0, 1)
#[inline]
pub fn next_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Uniform sample in [lo, hi)
#[inline]
pub fn range_f32(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * next_f32(state)
}

/// Sum of three uniforms, recentred: bell-shaped on [-1.5, 1.5]
#[inline]
pub fn bell_f32(state: &mut u32) -> f32 {
    next_f32(state) + next_f32(state) + next_f32(state) - 1.5
}

/// Uniform index in 0..len (len > 0)
#[inline]
pub fn next_index(state: &mut u32, len: usize) -> usize {
    ((next_f32(state) * len as f32) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_replaced() {
        let mut state = seed_state(0);
        assert_ne!(xorshift32(&mut state), 0);
    }

    #[test]
    fn unit_samples_stay_in_range() {
        let mut state = seed_state(7);
        for _ in 0..10_000 {
            let u = next_f32(&mut state);
            assert!((0.0..1.0).contains(&u));
            let b = bell_f32(&mut state);
            assert!((-1.5..=1.5).contains(&b));
            assert!(next_index(&mut state, 7) < 7);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seed_state(99);
        let mut b = seed_state(99);
        for _ in 0..100 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }
}
