use chrono::{Duration, TimeZone, Utc};
use std::cell::Cell;
use std::rc::Rc;
use tavalendo::models::{ClockIdGenerator, IdGenerator, RideId, SequentialIdGenerator};

mod common;
use common::t0;

#[test]
fn test_textual_form() {
    let id = RideId::new(t0() + Duration::milliseconds(123), 1);
    assert_eq!(id.to_string(), "2025-10-16T12:00:00.123Z-0001");

    let parsed: RideId = "2025-10-16T12:00:00.123Z-0001".parse().unwrap();
    assert_eq!(parsed, id);
    assert_eq!(parsed.seq(), 1);
}

#[test]
fn test_sub_millisecond_precision_is_dropped() {
    let id = RideId::new(t0() + Duration::microseconds(1_500), 0);
    assert_eq!(id.created_at(), t0() + Duration::milliseconds(1));
}

#[test]
fn test_rejects_malformed_ids() {
    for raw in [
        "",
        "2025-10-16T12:00:00.123Z",
        "2025-10-16T12:00:00.123Z-x",
        "2025-10-16T12:00:00.123Z0.4242",
        "not-an-id",
    ] {
        assert!(raw.parse::<RideId>().is_err(), "accepted {raw:?}");
    }
}

#[test]
fn test_ordering_by_instant_then_sequence() {
    let a = RideId::new(t0(), 5);
    let b = RideId::new(t0() + Duration::milliseconds(1), 0);
    let c = RideId::new(t0() + Duration::milliseconds(1), 1);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_serde_uses_textual_form() {
    let id = RideId::new(t0(), 7);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"2025-10-16T12:00:00.000Z-0007\"");

    let back: RideId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
    assert!(serde_json::from_str::<RideId>("\"garbage\"").is_err());
}

#[test]
fn test_clock_generator_is_monotonic_when_clock_goes_back() {
    let base = Utc.with_ymd_and_hms(2025, 10, 16, 12, 0, 0).unwrap();
    let offsets = Rc::new(Cell::new(0usize));
    let script = [0i64, 5, 5, -10_000, 7];

    let calls = offsets.clone();
    let mut ids = ClockIdGenerator::with_clock(None, move || {
        let i = calls.get();
        calls.set(i + 1);
        base + Duration::milliseconds(script[i.min(script.len() - 1)])
    });

    let generated: Vec<RideId> = (0..5).map(|_| ids.next_id()).collect();

    for pair in generated.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
    }
    assert_eq!(generated[2], RideId::new(base + Duration::milliseconds(5), 1));
    assert_eq!(generated[3], RideId::new(base + Duration::milliseconds(5), 2));
    assert_eq!(generated[4], RideId::new(base + Duration::milliseconds(7), 0));
}

#[test]
fn test_clock_generator_respects_seed() {
    let seed = RideId::new(t0() + Duration::hours(1), 3);
    let mut ids = ClockIdGenerator::with_clock(Some(seed), t0);

    assert_eq!(ids.next_id(), RideId::new(seed.created_at(), 4));
}

#[test]
fn test_sequential_generator_steps() {
    let mut ids = SequentialIdGenerator::new(t0(), Duration::seconds(30));
    assert_eq!(ids.next_id(), RideId::new(t0(), 0));
    assert_eq!(ids.next_id(), RideId::new(t0() + Duration::seconds(30), 0));
}
