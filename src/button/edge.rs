//! Edge-triggered button input: the event source feeding the [`Debouncer`].
//!
//! The GPIO edge wait is interrupt driven inside `embassy-rp`, so a button task sleeps until
//! the pin changes and then records the edge.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_time::Instant;

use super::{ButtonId, Debouncer, PressedTo};

/// A button that reports raw press edges.
///
/// No debouncing happens here; every edge is reported and [`Debouncer`] decides.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// # use panic_probe as _;
/// use digit_matrix::button::{ButtonId, Debouncer, PressedTo, edge::{EdgeButton, button_edge_loop}};
///
/// static DEBOUNCER: Debouncer = Debouncer::new();
///
/// #[embassy_executor::task]
/// async fn button_a_task(button: EdgeButton<'static>) -> ! {
///     button_edge_loop(button, &DEBOUNCER).await
/// }
///
/// fn example(p: embassy_rp::Peripherals, spawner: embassy_executor::Spawner) {
///     let button_a = EdgeButton::new(p.PIN_5, PressedTo::Ground, ButtonId::A);
///     spawner.spawn(button_a_task(button_a)).ok();
/// }
/// ```
pub struct EdgeButton<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
    button: ButtonId,
}

impl<'a> EdgeButton<'a> {
    /// Creates a new `EdgeButton` from a pin.
    ///
    /// The pin is configured based on the connection type:
    /// - [`PressedTo::Voltage`]: internal pull-down, press = rising edge
    /// - [`PressedTo::Ground`]: internal pull-up, press = falling edge
    #[must_use]
    pub fn new<P: Pin>(pin: Peri<'a, P>, pressed_to: PressedTo, button: ButtonId) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
            button,
        }
    }

    /// Which button this is.
    #[must_use]
    pub const fn button(&self) -> ButtonId {
        self.button
    }

    /// Waits for the next press edge (not debounced).
    pub async fn wait_for_press_edge(&mut self) {
        match self.pressed_to {
            PressedTo::Voltage => self.input.wait_for_rising_edge().await,
            PressedTo::Ground => self.input.wait_for_falling_edge().await,
        }
    }
}

/// Forward every press edge of `button` to `debouncer`, forever.
///
/// Never returns; spawn it from an `#[embassy_executor::task]`.
pub async fn button_edge_loop(mut button: EdgeButton<'static>, debouncer: &'static Debouncer) -> ! {
    loop {
        button.wait_for_press_edge().await;
        let now = Instant::now();
        if debouncer.register_edge(button.button(), now) {
            info!("button {}: press at {=u64} us", button.button(), now.as_micros());
        } else {
            debug!("button {}: bounce dropped", button.button());
        }
    }
}
