//! The cooperative control loop: consume debounced presses, update the digit, render it,
//! and blink the status LED.
//!
//! See [`ControlLoop`] for the loop and [`DigitCounter`] for the clamped digit.

use core::convert::Infallible;

use embassy_time::{Duration, Timer};
use embedded_hal::digital::StatefulOutputPin;

use crate::button::{ButtonId, Debouncer};
use crate::led2d::{PANEL_LEN, render_digit};
use crate::led_strip::{LedStrip, LedWire};
use crate::{Error, Result};

/// Hold after toggling the status LED (5 Hz blink half-period).
pub const BLINK_HOLD: Duration = Duration::from_millis(200);

/// Extra hold at the end of each pass.
pub const SETTLE_HOLD: Duration = Duration::from_millis(100);

/// Largest digit the counter reaches.
pub const MAX_DIGIT: u8 = 9;

// ============================================================================
// DigitCounter
// ============================================================================

/// The displayed digit, clamped to `0..=9` with no wraparound.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitCounter(u8);

impl DigitCounter {
    /// A counter at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Current digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Add one unless already at [`MAX_DIGIT`]; returns the new value.
    pub const fn increment(&mut self) -> u8 {
        if self.0 < MAX_DIGIT {
            self.0 += 1;
        }
        self.0
    }

    /// Subtract one unless already at 0; returns the new value.
    pub const fn decrement(&mut self) -> u8 {
        if self.0 > 0 {
            self.0 -= 1;
        }
        self.0
    }
}

// ============================================================================
// ControlLoop
// ============================================================================

/// Digits rendered by one [`ControlLoop::poll_buttons`] pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Renders {
    /// Digit rendered after consuming an A press.
    pub incremented: Option<u8>,
    /// Digit rendered after consuming a B press, always after the A render.
    pub decremented: Option<u8>,
}

impl Renders {
    /// Number of frames written in the pass.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.incremented.is_some() as usize + self.decremented.is_some() as usize
    }
}

/// Owns the panel, the digit, and the status LED; reads presses from a shared [`Debouncer`].
///
/// # Example
///
/// ```rust,no_run
/// use core::convert::Infallible;
/// use digit_matrix::Result;
/// use digit_matrix::button::Debouncer;
/// use digit_matrix::control::ControlLoop;
/// use digit_matrix::led_strip::{LedStrip, LedWire};
/// use embedded_hal::digital::StatefulOutputPin;
///
/// static DEBOUNCER: Debouncer = Debouncer::new();
///
/// async fn example<W, P>(wire: W, status_led: P) -> Result<Infallible>
/// where
///     W: LedWire,
///     P: StatefulOutputPin<Error = Infallible>,
/// {
///     let led_strip = LedStrip::new(wire);
///     ControlLoop::new(led_strip, &DEBOUNCER, status_led).run().await
/// }
/// ```
pub struct ControlLoop<'a, W, P> {
    led_strip: LedStrip<W, PANEL_LEN>,
    debouncer: &'a Debouncer,
    status_led: P,
    counter: DigitCounter,
}

impl<'a, W, P> ControlLoop<'a, W, P>
where
    W: LedWire,
    P: StatefulOutputPin<Error = Infallible>,
{
    /// Create the loop with the digit at 0.
    #[must_use]
    pub const fn new(
        led_strip: LedStrip<W, PANEL_LEN>,
        debouncer: &'a Debouncer,
        status_led: P,
    ) -> Self {
        Self {
            led_strip,
            debouncer,
            status_led,
            counter: DigitCounter::new(),
        }
    }

    /// Current digit.
    #[must_use]
    pub const fn digit(&self) -> u8 {
        self.counter.value()
    }

    /// The panel driver.
    #[must_use]
    pub const fn led_strip(&self) -> &LedStrip<W, PANEL_LEN> {
        &self.led_strip
    }

    /// The status LED pin.
    pub const fn status_led(&mut self) -> &mut P {
        &mut self.status_led
    }

    /// Flip the status LED.
    pub fn toggle_status(&mut self) {
        let Ok(()) = self.status_led.toggle();
    }

    /// Consume pending presses (A first, then B), update the digit, and render after each.
    ///
    /// # Errors
    ///
    /// Propagates driver errors from rendering. A digit without a glyph is not an error
    /// here: the panel is blanked instead.
    pub async fn poll_buttons(&mut self) -> Result<Renders> {
        let mut renders = Renders::default();

        if self.debouncer.take_pending(ButtonId::A) {
            let digit = self.counter.increment();
            info!("button A: digit incremented to {=u8}", digit);
            self.show(digit).await?;
            renders.incremented = Some(digit);
        }

        if self.debouncer.take_pending(ButtonId::B) {
            let digit = self.counter.decrement();
            info!("button B: digit decremented to {=u8}", digit);
            self.show(digit).await?;
            renders.decremented = Some(digit);
        }

        Ok(renders)
    }

    async fn show(&mut self, digit: u8) -> Result<()> {
        match render_digit(&mut self.led_strip, digit).await {
            Err(Error::GlyphUndefined { .. }) => {
                warn!("no glyph for digit {=u8}; blanking panel", digit);
                self.led_strip.clear();
                self.led_strip.write().await;
                Ok(())
            }
            other => other,
        }
    }

    /// Run forever: blink, hold, poll the buttons, hold again.
    ///
    /// # Errors
    ///
    /// Returns only if rendering fails with something other than a missing glyph.
    pub async fn run(mut self) -> Result<Infallible> {
        info!("control loop: starting at digit {=u8}", self.digit());
        loop {
            self.toggle_status();
            Timer::after(BLINK_HOLD).await;

            self.poll_buttons().await?;

            Timer::after(SETTLE_HOLD).await;
        }
    }
}
