//! Host doubles for the LED wire and the status LED.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use core::convert::Infallible;

use digit_matrix::led_strip::LedWire;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// Records every byte sent, in order.
#[derive(Debug, Default)]
pub struct RecordingWire {
    pub bytes: Vec<u8>,
}

impl RecordingWire {
    /// Frames sent so far, split into `3 * len`-byte chunks.
    pub fn frames(&self, len: usize) -> Vec<&[u8]> {
        self.bytes.chunks(3 * len).collect()
    }
}

impl LedWire for RecordingWire {
    async fn send_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }
}

/// An output pin that only remembers its level.
#[derive(Debug, Default)]
pub struct FakeLed {
    pub high: bool,
    pub toggles: usize,
}

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl OutputPin for FakeLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for FakeLed {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.toggles += 1;
        self.high = !self.high;
        Ok(())
    }
}
