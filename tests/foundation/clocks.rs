//! Integration tests for clocks

use chrono::{Duration, TimeZone, Utc};
use coursebook_foundation::{Clock, FixedClock};

#[test]
fn fixed_clock_is_strictly_monotonic() {
    let clock = FixedClock::with_step(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        Duration::milliseconds(250),
    );
    let reads: Vec<_> = (0..10).map(|_| clock.now()).collect();
    assert!(reads.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn clock_is_object_safe() {
    let clock: Box<dyn Clock> = Box::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));
    assert_eq!(clock.now().to_rfc3339(), "2024-06-01T00:00:00+00:00");
}
