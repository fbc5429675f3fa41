#![allow(missing_docs)]
//! Host-level tests for the debounce engine.

use digit_matrix::button::{ButtonId, DEBOUNCE_WINDOW, Debouncer};
use embassy_time::Instant;

fn at(micros: u64) -> Instant {
    Instant::from_micros(micros)
}

#[test]
fn first_edge_is_accepted() {
    let debouncer = Debouncer::new();
    assert!(!debouncer.is_pending(ButtonId::A));
    assert!(debouncer.register_edge(ButtonId::A, at(0)));
    assert!(debouncer.is_pending(ButtonId::A));
}

#[test]
fn edge_inside_window_is_a_bounce() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::A, at(0)));
    assert!(debouncer.take_pending(ButtonId::A));
    assert!(!debouncer.register_edge(ButtonId::A, at(100_000)));
    assert!(!debouncer.take_pending(ButtonId::A));
}

#[test]
fn edges_outside_window_are_two_presses() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::A, at(0)));
    assert!(debouncer.take_pending(ButtonId::A));
    assert!(debouncer.register_edge(ButtonId::A, at(250_000)));
    assert!(debouncer.take_pending(ButtonId::A));
}

#[test]
fn edge_exactly_at_window_is_rejected() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::B, at(1_000)));
    assert!(!debouncer.register_edge(
        ButtonId::B,
        at(1_000 + DEBOUNCE_WINDOW.as_micros())
    ));
    assert!(debouncer.register_edge(
        ButtonId::B,
        at(1_001 + DEBOUNCE_WINDOW.as_micros())
    ));
}

#[test]
fn bounce_does_not_extend_window() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::A, at(0)));
    assert!(!debouncer.register_edge(ButtonId::A, at(150_000)));
    // Measured from the accepted edge at 0, not the bounce at 150 ms.
    assert!(debouncer.register_edge(ButtonId::A, at(210_000)));
}

#[test]
fn presses_coalesce_until_consumed() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::A, at(0)));
    assert!(debouncer.register_edge(ButtonId::A, at(300_000)));
    assert!(debouncer.take_pending(ButtonId::A));
    assert!(!debouncer.take_pending(ButtonId::A));
}

#[test]
fn buttons_are_independent() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::A, at(0)));
    assert!(debouncer.register_edge(ButtonId::B, at(50_000)));
    assert!(debouncer.is_pending(ButtonId::A));
    assert!(debouncer.is_pending(ButtonId::B));

    assert!(debouncer.take_pending(ButtonId::B));
    assert!(debouncer.is_pending(ButtonId::A));
    assert!(!debouncer.is_pending(ButtonId::B));
}

#[test]
fn time_going_backwards_is_rejected() {
    let debouncer = Debouncer::new();
    assert!(debouncer.register_edge(ButtonId::A, at(500_000)));
    assert!(!debouncer.register_edge(ButtonId::A, at(0)));
}
