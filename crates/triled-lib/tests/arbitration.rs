//! Integration tests: end-to-end arbitration sequences using MockSink.
//!
//! These tests exercise the full request → priority pass → emission cycle
//! through the public API, verifying the resolved winner, the fixed
//! four-phase channel ordering, and that the sequence is never torn by
//! concurrent callers.

use std::sync::Arc;
use std::thread;

use triled_lib::light::{FlashMode, LightKind, LightRequest};
use triled_lib::service::LightService;
use triled_lib::sink::mock::{Led, MockSink, WriteOp};

/// Number of writes in one full RGB emission pass.
const PASS_LEN: usize = 12;

/// Assert that `writes` is a well-formed four-phase pass and return the
/// resolved `(r, g, b, on, off)` it programmed.
fn decode_pass(writes: &[WriteOp]) -> (u32, u32, u32, u32, u32) {
    assert_eq!(writes.len(), PASS_LEN, "pass has wrong length: {writes:?}");
    let (r, g, b) = match (writes[3], writes[4], writes[5]) {
        (
            WriteOp::Brightness(Led::Red, r),
            WriteOp::Brightness(Led::Green, g),
            WriteOp::Brightness(Led::Blue, b),
        ) => (r, g, b),
        other => panic!("brightness phase out of order: {other:?}"),
    };
    let (on, off) = match writes[6] {
        WriteOp::Timeout(Led::Red, on, off) => (on, off),
        other => panic!("timing phase out of order: {other:?}"),
    };
    // Phase 1: locks dropped. Phase 4: locks raised.
    for (i, led) in [Led::Red, Led::Green, Led::Blue].iter().enumerate() {
        assert_eq!(writes[i], WriteOp::Lock(*led, 0));
        assert_eq!(writes[9 + i], WriteOp::Lock(*led, 1));
        assert!(matches!(writes[6 + i], WriteOp::Timeout(l, o, f) if l == *led && o == on && f == off));
    }
    (r, g, b, on, off)
}

// ── Priority resolution ──

#[test]
fn notifications_dominate_regardless_of_order() {
    // Same three requests in every arrival order; notifications always win.
    let requests = [
        (LightKind::Notifications, 0x00FF0000u32),
        (LightKind::Attention, 0x0000FF00),
        (LightKind::Battery, 0x000000FF),
    ];
    let orders: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let service = LightService::new(MockSink::new());
        for idx in order {
            let (kind, color) = requests[idx];
            service.set_light(kind, LightRequest::steady(color)).unwrap();
        }
        let sink = service.into_sink();
        let last = &sink.writes[sink.writes.len() - PASS_LEN..];
        let (r, g, b, _, _) = decode_pass(last);
        assert_eq!((r, g, b), (0xFF, 0, 0), "order {order:?}");
    }
}

#[test]
fn priority_chain_unwinds_as_sources_clear() {
    let service = LightService::new(MockSink::new());
    service
        .set_light(LightKind::Battery, LightRequest::steady(0x000000FF))
        .unwrap();
    service
        .set_light(LightKind::Attention, LightRequest::steady(0x0000FF00))
        .unwrap();
    service
        .set_light(LightKind::Notifications, LightRequest::steady(0x00FF0000))
        .unwrap();

    service
        .set_light(LightKind::Notifications, LightRequest::off())
        .unwrap();
    service
        .set_light(LightKind::Attention, LightRequest::off())
        .unwrap();
    service
        .set_light(LightKind::Battery, LightRequest::off())
        .unwrap();

    let sink = service.into_sink();
    assert_eq!(sink.writes.len(), 6 * PASS_LEN);

    let resolved: Vec<_> = sink
        .writes
        .chunks(PASS_LEN)
        .map(|p| {
            let (r, g, b, _, _) = decode_pass(p);
            (r, g, b)
        })
        .collect();
    assert_eq!(
        resolved,
        vec![
            (0, 0, 0xFF),    // battery alone
            (0, 0xFF, 0),    // attention outranks it
            (0xFF, 0, 0),    // notifications outrank both
            (0, 0xFF, 0),    // notifications cleared → attention
            (0, 0, 0xFF),    // attention cleared → battery
            (0, 0, 0),       // everything dark → explicit off
        ]
    );
}

#[test]
fn off_pass_still_toggles_locks() {
    let service = LightService::new(MockSink::new());
    service
        .set_light(LightKind::Battery, LightRequest::off())
        .unwrap();

    let sink = service.into_sink();
    let (r, g, b, on, off) = decode_pass(&sink.writes);
    assert_eq!((r, g, b, on, off), (0, 0, 0, 0, 0));
}

#[test]
fn blink_timing_rides_along_with_winner() {
    let service = LightService::new(MockSink::new());
    service
        .set_light(
            LightKind::Notifications,
            LightRequest::flashing(0x0000FF00, FlashMode::Timed, 500, 2000),
        )
        .unwrap();

    let sink = service.into_sink();
    assert_eq!(decode_pass(&sink.writes), (0, 0xFF, 0, 500, 2000));
}

#[test]
fn unsupported_kind_leaves_sink_untouched() {
    let service = LightService::new(MockSink::new());
    service
        .set_light(LightKind::Battery, LightRequest::steady(0x000000FF))
        .unwrap();

    let before = PASS_LEN;
    assert!(
        service
            .set_light(LightKind::Keyboard, LightRequest::steady(0x00FF0000))
            .is_err()
    );

    let sink = service.into_sink();
    assert_eq!(sink.writes.len(), before);
}

// ── Idempotence ──

#[test]
fn replaying_the_same_request_replays_the_same_pass() {
    let service = LightService::new(MockSink::new());
    let req = LightRequest::flashing(0x00123456, FlashMode::Hardware, 100, 900);

    service.set_light(LightKind::Attention, req).unwrap();
    service.set_light(LightKind::Attention, req).unwrap();
    service.set_light(LightKind::Attention, req).unwrap();

    let sink = service.into_sink();
    assert_eq!(sink.writes.len(), 3 * PASS_LEN);
    let first = &sink.writes[..PASS_LEN];
    assert_eq!(&sink.writes[PASS_LEN..2 * PASS_LEN], first);
    assert_eq!(&sink.writes[2 * PASS_LEN..], first);
}

// ── Concurrency ──

#[test]
fn concurrent_updates_never_tear_a_pass() {
    let service = Arc::new(LightService::new(MockSink::new()));
    let colors = [
        (LightKind::Notifications, 0x00FF0000u32),
        (LightKind::Attention, 0x0000FF00),
        (LightKind::Battery, 0x000000FF),
    ];

    let mut handles = Vec::new();
    for (kind, color) in colors {
        let service = Arc::clone(&service);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                service
                    .set_light(kind, LightRequest::steady(color))
                    .unwrap();
                service.set_light(kind, LightRequest::off()).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let sink = Arc::into_inner(service)
        .expect("all workers joined")
        .into_sink();
    assert_eq!(sink.writes.len() % PASS_LEN, 0);
    // Every consecutive 12-write window must be a complete, well-formed
    // four-phase sequence; any interleaving would break the decode.
    for pass in sink.writes.chunks(PASS_LEN) {
        decode_pass(pass);
    }
}
