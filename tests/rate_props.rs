use std::time::Duration;

use proptest::prelude::*;
use psitop::psi::aggregator::stall_pct;

proptest! {
    /// For any non-regressing counter pair and positive elapsed time the
    /// rate equals the plain arithmetic, with no clamping anywhere.
    #[test]
    fn rate_matches_plain_arithmetic(
        c1 in 0u64..(u64::MAX / 2),
        delta in 0u64..1_000_000_000u64,
        dt_us in 1u64..1_000_000_000u64,
    ) {
        let pct = stall_pct(c1, c1 + delta, Duration::from_micros(dt_us));
        prop_assert!(pct >= 0.0);
        prop_assert_eq!(pct, 100.0 * delta as f64 / dt_us as f64);
    }

    #[test]
    fn zero_elapsed_never_divides(c1 in any::<u64>(), c2 in any::<u64>()) {
        prop_assert_eq!(stall_pct(c1, c2, Duration::ZERO), 0.0);
    }
}
