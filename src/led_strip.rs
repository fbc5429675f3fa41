//! A device abstraction for NeoPixel-style (WS2812) LED strips: the pixel buffer and the
//! serial driver that transmits it.
//!
//! See [`LedStrip`] for the driver and [`Frame1d`] for the buffer. The hardware backend on
//! the Pico is [`PioLedWire`](pio_wire::PioLedWire); anything implementing [`LedWire`] can
//! stand in for it.
//!
//! # Wire format
//!
//! Each LED takes three bytes in the order green, red, blue, most-significant bit first.
//! LEDs are sent in ascending index order. After the last byte the line is held idle for at
//! least [`RESET_INTERVAL`] so the LEDs latch the new colors.
//!
//! ```text
//! LED0: G R B | LED1: G R B | ... | LED(N-1): G R B | idle >= 100 µs
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::{Deref, DerefMut};

use embassy_time::{Duration, Timer};
use fixed::types::U24F8;
use smart_leds::RGB8;

use crate::{Error, Result};

// ============================================================================
// Submodules
// ============================================================================

#[cfg(not(feature = "host"))]
pub mod pio_wire;

// ============================================================================
// Constants
// ============================================================================

/// Bit rate of the WS2812 serial line.
pub const LED_FREQUENCY_HZ: u32 = 800_000;

/// Idle time after a frame before the LEDs latch it (WS2812 reset code).
pub const RESET_INTERVAL: Duration = Duration::from_micros(100);

/// Number of bytes each LED takes on the wire.
pub const BYTES_PER_LED: usize = 3;

/// PIO cycles spent on one bit by [`PioLedWire`](pio_wire::PioLedWire).
pub const CYCLES_PER_BIT: u32 = 10;

/// PIO clock divider that makes one bit last `1 / LED_FREQUENCY_HZ` at `system_hz`.
///
/// ```rust
/// use digit_matrix::led_strip::clock_divider;
/// use fixed::types::U24F8;
///
/// assert_eq!(clock_divider(125_000_000), U24F8::from_num(15.625));
/// ```
#[must_use]
pub fn clock_divider(system_hz: u32) -> U24F8 {
    let system_khz = U24F8::from_num(system_hz / 1000);
    let bit_khz = U24F8::from_num(LED_FREQUENCY_HZ / 1000) * CYCLES_PER_BIT;
    system_khz / bit_khz
}

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

// ============================================================================
// Frame1d - the pixel buffer
// ============================================================================

/// [`Rgb`] pixel data for an LED strip, one entry per LED in wiring order.
///
/// Frames deref to `[Rgb; N]`, so pixels can be read and mutated directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Returns `true` when every pixel is black.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|color| *color == colors::BLACK)
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a frame into wire order: green, red, blue per LED, ascending LED index.
///
/// Always yields exactly `3 * N` bytes.
///
/// ```rust
/// use digit_matrix::led_strip::{Frame1d, Rgb, grb_bytes};
///
/// let frame = Frame1d::from([Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
/// let mut bytes = grb_bytes(&frame);
/// assert_eq!(bytes.next(), Some(2)); // green first
/// assert_eq!(bytes.next(), Some(1));
/// assert_eq!(bytes.next(), Some(3));
/// ```
pub fn grb_bytes<const N: usize>(frame: &Frame1d<N>) -> impl Iterator<Item = u8> + '_ {
    frame.iter().flat_map(|color| [color.g, color.r, color.b])
}

// ============================================================================
// LedWire - the hardware seam
// ============================================================================

/// The one-wire output that clocks bytes out to the LEDs.
///
/// Implementations must send each byte most-significant bit first and must not return
/// until the byte has been accepted for transmission.
pub trait LedWire {
    /// Queue one byte for transmission, waiting while the output is full.
    async fn send_byte(&mut self, byte: u8);
}

// ============================================================================
// LedStrip - the driver
// ============================================================================

/// Serial LED driver: owns the pixel buffer and the wire it is sent over.
///
/// Buffer changes ([`clear`](Self::clear), [`set_pixel`](Self::set_pixel)) are invisible on
/// the LEDs until [`write`](Self::write) is called.
///
/// # Example
///
/// ```rust,no_run
/// use digit_matrix::Result;
/// use digit_matrix::led_strip::{LedStrip, LedWire, colors};
///
/// async fn example<W: LedWire>(wire: W) -> Result<()> {
///     let mut led_strip: LedStrip<W, 25> = LedStrip::new(wire);
///     led_strip.clear();
///     led_strip.set_pixel(0, colors::RED)?;
///     led_strip.write().await;
///     Ok(())
/// }
/// ```
pub struct LedStrip<W, const N: usize> {
    wire: W,
    frame: Frame1d<N>,
}

impl<W, const N: usize> LedStrip<W, N> {
    /// Number of LEDs on this strip.
    pub const LEN: usize = N;

    /// Create a driver over `wire` with an all-black buffer.
    #[must_use]
    pub const fn new(wire: W) -> Self {
        Self {
            wire,
            frame: Frame1d::new(),
        }
    }

    /// Set every pixel to black without transmitting.
    pub fn clear(&mut self) {
        self.frame = Frame1d::new();
    }

    /// Set one pixel without transmitting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelIndexOutOfBounds`] if `index >= N`; the buffer is unchanged.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<()> {
        let pixel = self
            .frame
            .get_mut(index)
            .ok_or(Error::PixelIndexOutOfBounds { index, len: N })?;
        *pixel = color;
        Ok(())
    }

    /// The buffer as it will be sent by the next [`write`](Self::write).
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// The wire this driver sends on.
    #[must_use]
    pub const fn wire(&self) -> &W {
        &self.wire
    }
}

impl<W: LedWire, const N: usize> LedStrip<W, N> {
    /// Send the whole buffer, then hold the line idle for [`RESET_INTERVAL`].
    ///
    /// Returns once the wire has accepted every byte and the reset gap has elapsed, so the
    /// next frame can start immediately.
    pub async fn write(&mut self) {
        for byte in grb_bytes(&self.frame) {
            self.wire.send_byte(byte).await;
        }
        Timer::after(RESET_INTERVAL).await;
    }
}
