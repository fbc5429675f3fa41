#![cfg(not(feature = "host"))]
#![no_std]
#![no_main]
#![allow(missing_docs, reason = "Compile-time verification only")]
#![allow(dead_code, reason = "Compile-time verification only")]
//! Compile-only check: the LED wire works on any PIO block and state machine.

use digit_matrix::Result;
use digit_matrix::led2d::{PANEL_LEN, render_digit};
use digit_matrix::led_strip::{LedStrip, pio_wire::PioLedWire};
use embassy_rp::{
    bind_interrupts,
    peripherals::PIO1,
    pio::{InterruptHandler, Pio},
};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO1_IRQ_0 => InterruptHandler<PIO1>;
});

async fn pio1_sm3(p: embassy_rp::Peripherals) -> Result<()> {
    let Pio {
        mut common, sm3, ..
    } = Pio::new(p.PIO1, Irqs);
    let wire = PioLedWire::new(&mut common, sm3, p.PIN_2)?;
    let mut led_strip: LedStrip<_, PANEL_LEN> = LedStrip::new(wire);
    render_digit(&mut led_strip, 1).await
}

#[cortex_m_rt::entry]
fn main() -> ! {
    // Type-checking `pio1_sm3` is the point; nothing runs.
    let _ = pio1_sm3;
    loop {}
}
