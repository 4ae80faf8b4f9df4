//! Capacity growth policy shared by the vector and the text buffer.
//!
//! Growth doubles the current capacity while the request fits within one
//! doubling step; shrinks and oversized bulk requests reallocate to the
//! exact requested count.

pub(crate) const GROWTH_FACTOR: usize = 2;

/// Smallest capacity handed out when bootstrapping from an empty buffer.
pub(crate) const MIN_CAPACITY: usize = 2;

/// Next capacity for a buffer currently at `current` slots that must hold
/// at least `required`.
///
/// - from zero: exactly `max(required, MIN_CAPACITY)`
/// - shrink: exactly `required`
/// - within one doubling step: `current * GROWTH_FACTOR`
/// - beyond one doubling step: exactly `required`
/// - `required == current`: unchanged
pub(crate) fn resize_to(current: usize, required: usize) -> usize {
    if current == 0 {
        return required.max(MIN_CAPACITY);
    }
    if required < current {
        return required;
    }
    let doubled = current.saturating_mul(GROWTH_FACTOR);
    if required > doubled {
        required
    } else if required > current {
        doubled
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstraps_with_floor() {
        assert_eq!(resize_to(0, 0), MIN_CAPACITY);
        assert_eq!(resize_to(0, 1), MIN_CAPACITY);
        assert_eq!(resize_to(0, 2), 2);
        assert_eq!(resize_to(0, 100), 100);
    }

    #[test]
    fn doubles_within_one_step() {
        assert_eq!(resize_to(4, 5), 8);
        assert_eq!(resize_to(4, 8), 8);
        assert_eq!(resize_to(100, 101), 200);
    }

    #[test]
    fn exact_fit_beyond_one_step() {
        assert_eq!(resize_to(4, 9), 9);
        assert_eq!(resize_to(100, 1000), 1000);
    }

    #[test]
    fn exact_fit_on_shrink() {
        assert_eq!(resize_to(100, 7), 7);
        assert_eq!(resize_to(100, 0), 0);
    }

    #[test]
    fn unchanged_when_request_matches() {
        assert_eq!(resize_to(8, 8), 8);
    }

    #[test]
    fn doubling_saturates_at_the_addressable_limit() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(resize_to(huge, huge + 1), usize::MAX);
    }
}
