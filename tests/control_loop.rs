#![allow(missing_docs)]
//! Host-level tests for the control loop's button handling.

mod common;

use common::{FakeLed, RecordingWire};
use digit_matrix::button::{ButtonId, Debouncer};
use digit_matrix::control::{ControlLoop, DigitCounter, Renders};
use digit_matrix::led2d::PANEL_LEN;
use digit_matrix::led_strip::LedStrip;
use embassy_futures::block_on;
use embassy_time::Instant;

const PRESS_SPACING_US: u64 = 300_000;

/// Feeds well-spaced edges to a debouncer, one press at a time.
struct Presses<'a> {
    debouncer: &'a Debouncer,
    now_us: u64,
}

impl<'a> Presses<'a> {
    const fn new(debouncer: &'a Debouncer) -> Self {
        Self {
            debouncer,
            now_us: 0,
        }
    }

    fn press(&mut self, button: ButtonId) {
        assert!(
            self.debouncer
                .register_edge(button, Instant::from_micros(self.now_us))
        );
        self.now_us += PRESS_SPACING_US;
    }
}

fn control_loop(debouncer: &Debouncer) -> ControlLoop<'_, RecordingWire, FakeLed> {
    ControlLoop::new(
        LedStrip::new(RecordingWire::default()),
        debouncer,
        FakeLed::default(),
    )
}

#[test]
fn counter_clamps_at_both_ends() {
    let mut counter = DigitCounter::new();
    assert_eq!(counter.decrement(), 0);
    for _ in 0..20 {
        counter.increment();
    }
    assert_eq!(counter.value(), 9);
    assert_eq!(counter.increment(), 9);
    assert_eq!(counter.decrement(), 8);
}

#[test]
fn no_presses_means_no_frames() {
    let debouncer = Debouncer::new();
    let mut control_loop = control_loop(&debouncer);
    let renders = block_on(control_loop.poll_buttons()).expect("render succeeds");
    assert_eq!(renders, Renders::default());
    assert_eq!(renders.count(), 0);
    assert!(control_loop.led_strip().wire().bytes.is_empty());
}

#[test]
fn twenty_increments_stop_at_nine() {
    let debouncer = Debouncer::new();
    let mut presses = Presses::new(&debouncer);
    let mut control_loop = control_loop(&debouncer);
    for _ in 0..20 {
        presses.press(ButtonId::A);
        block_on(control_loop.poll_buttons()).expect("render succeeds");
    }
    assert_eq!(control_loop.digit(), 9);
    // Every consumed press sends one frame, including presses at the clamp.
    assert_eq!(control_loop.led_strip().wire().bytes.len(), 20 * 3 * PANEL_LEN);
}

#[test]
fn decrement_at_zero_stays_zero() {
    let debouncer = Debouncer::new();
    let mut presses = Presses::new(&debouncer);
    let mut control_loop = control_loop(&debouncer);
    presses.press(ButtonId::B);
    let renders = block_on(control_loop.poll_buttons()).expect("render succeeds");
    assert_eq!(renders.decremented, Some(0));
    assert_eq!(control_loop.digit(), 0);
}

#[test]
fn up_up_up_down_renders_each_step() {
    let debouncer = Debouncer::new();
    let mut presses = Presses::new(&debouncer);
    let mut control_loop = control_loop(&debouncer);
    let mut rendered = Vec::new();

    for button in [ButtonId::A, ButtonId::A, ButtonId::A, ButtonId::B] {
        presses.press(button);
        let renders = block_on(control_loop.poll_buttons()).expect("render succeeds");
        assert_eq!(renders.count(), 1);
        rendered.extend(renders.incremented);
        rendered.extend(renders.decremented);
    }

    assert_eq!(rendered, [1, 2, 3, 2]);
    assert_eq!(control_loop.digit(), 2);
    assert_eq!(control_loop.led_strip().wire().frames(PANEL_LEN).len(), 4);
}

#[test]
fn both_pending_handles_a_then_b() {
    let debouncer = Debouncer::new();
    let mut presses = Presses::new(&debouncer);
    let mut control_loop = control_loop(&debouncer);

    presses.press(ButtonId::A);
    presses.press(ButtonId::B);
    let renders = block_on(control_loop.poll_buttons()).expect("render succeeds");

    assert_eq!(
        renders,
        Renders {
            incremented: Some(1),
            decremented: Some(0),
        }
    );
    assert_eq!(control_loop.digit(), 0);
    assert_eq!(control_loop.led_strip().wire().frames(PANEL_LEN).len(), 2);
    assert!(!debouncer.is_pending(ButtonId::A));
    assert!(!debouncer.is_pending(ButtonId::B));
}

#[test]
fn digit_without_glyph_blanks_the_panel() {
    let debouncer = Debouncer::new();
    let mut presses = Presses::new(&debouncer);
    let mut control_loop = control_loop(&debouncer);

    presses.press(ButtonId::A);
    block_on(control_loop.poll_buttons()).expect("render succeeds");
    assert!(!control_loop.led_strip().frame().is_blank());

    presses.press(ButtonId::A);
    block_on(control_loop.poll_buttons()).expect("missing glyph is not fatal");
    assert_eq!(control_loop.digit(), 2);
    assert!(control_loop.led_strip().frame().is_blank());

    let frames = control_loop.led_strip().wire().frames(PANEL_LEN);
    assert_eq!(frames.len(), 2);
    assert!(frames[1].iter().all(|&byte| byte == 0));
}

#[test]
fn toggle_status_flips_the_led() {
    let debouncer = Debouncer::new();
    let mut control_loop = control_loop(&debouncer);
    assert!(!control_loop.status_led().high);
    control_loop.toggle_status();
    assert!(control_loop.status_led().high);
    control_loop.toggle_status();
    assert!(!control_loop.status_led().high);
    assert_eq!(control_loop.status_led().toggles, 2);
}
