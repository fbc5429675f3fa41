//! Crate-wide error type.

/// Errors reported by the digit panel devices.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The PIO block has no instruction memory left for the WS2812 program.
    #[display("no PIO instruction memory left for the LED program")]
    PioProgramSpace,

    /// A pixel index outside the strip was written.
    #[display("pixel index {index} out of bounds for {len} LEDs")]
    PixelIndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of LEDs on the strip.
        len: usize,
    },

    /// The requested digit has no glyph bitmap.
    #[display("no glyph defined for digit {digit}")]
    GlyphUndefined {
        /// Digit that was requested.
        digit: u8,
    },

    /// A background task could not be spawned.
    #[cfg(feature = "arm")]
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),
}

/// Result alias using the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
