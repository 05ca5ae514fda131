//! Rotation counter arithmetic.

/// Byte value of an erased (never written) EEPROM cell.
///
/// A counter byte holding this value marks a slot that has not been written
/// since the last erase. It is never stamped as a rotation counter.
pub const SENTINEL: u8 = 0xFF;

/// Number of distinct rotation counter values (`0..=254`).
pub const COUNTER_CYCLE: usize = SENTINEL as usize;

/// Advance a rotation counter by one, skipping the sentinel.
///
/// The counter wraps from `254` to `0`. Continuing from an empty predecessor
/// (`SENTINEL`) also yields `0`.
///
/// # Examples
///
/// ```
/// use eeprom_wl::domain::{increment, SENTINEL};
///
/// assert_eq!(increment(0), 1);
/// assert_eq!(increment(254), 0);
/// assert_eq!(increment(SENTINEL), 0);
/// ```
#[inline]
pub const fn increment(counter: u8) -> u8 {
    let next = counter.wrapping_add(1);
    if next == SENTINEL { 0 } else { next }
}

/// Check whether a counter byte marks an erased slot.
#[inline]
pub const fn is_erased(counter: u8) -> bool {
    counter == SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_steps_by_one() {
        assert_eq!(increment(0), 1);
        assert_eq!(increment(9), 10);
        assert_eq!(increment(253), 254);
    }

    #[test]
    fn test_increment_skips_sentinel() {
        assert_eq!(increment(254), 0);
        assert_eq!(increment(SENTINEL), 0);
    }

    #[test]
    fn test_increment_never_yields_sentinel() {
        for counter in 0..=u8::MAX {
            assert_ne!(increment(counter), SENTINEL);
        }
    }

    #[test]
    fn test_increment_is_single_cycle() {
        let mut seen = [false; COUNTER_CYCLE];
        let mut counter = 0u8;

        for _ in 0..COUNTER_CYCLE {
            assert!(!seen[counter as usize], "counter {} visited twice", counter);
            seen[counter as usize] = true;
            counter = increment(counter);
        }

        assert!(seen.iter().all(|&v| v));
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_is_erased() {
        assert!(is_erased(0xFF));
        assert!(!is_erased(0));
        assert!(!is_erased(254));
    }
}
