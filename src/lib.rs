//! Device abstractions for a Pico driving a 5×5 NeoPixel-style (WS2812) panel that shows
//! a digit counted up and down by two buttons.
//!
//! The pieces, leaves first:
//!
//! - [`led_strip`]: the pixel buffer ([`Frame1d`](led_strip::Frame1d)) and the serial LED
//!   driver ([`LedStrip`](led_strip::LedStrip)) that sends it in green-red-blue order.
//! - [`led2d`]: the panel's serpentine wiring and the digit glyphs rendered through it.
//! - [`button`]: per-button debouncing fed by edge-triggered button tasks.
//! - [`control`]: the cooperative loop that consumes presses, renders, and blinks a status LED.
//!
//! # Glossary
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):** Pico 1 has 2. Pico 2 has 3.
//!   One PIO state machine generates the 800 kHz LED bit timing.
//! - **Frame:** one full transmission of all pixel colors to the panel.
//! - **Debounce window:** minimum time between two accepted edges on the same button.
#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(feature = "host", feature = "defmt"))]
compile_error!("The 'host' feature needs --no-default-features (defmt has no logger on the host)");

// Must come first so the logging macros are visible in every module below.
#[macro_use]
mod fmt;

pub mod button;
pub mod control;
mod error;
pub mod led2d;
pub mod led_strip;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
