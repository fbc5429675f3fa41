#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

//! Count 0-9 on a 5×5 panel: button A (GPIO5) counts up, button B (GPIO6) counts down,
//! the red status LED (GPIO13) blinks while the loop runs.

use core::{convert::Infallible, panic};

use defmt::info;
use digit_matrix::{
    Error, Result,
    button::{
        ButtonId, Debouncer, PressedTo,
        edge::{EdgeButton, button_edge_loop},
    },
    control::ControlLoop,
    led_strip::{LedStrip, pio_wire::PioLedWire},
};
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    gpio::{Level, Output},
    peripherals::PIO0,
    pio::{InterruptHandler, Pio},
};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

static DEBOUNCER: Debouncer = Debouncer::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    info!("digit counter starting");

    // LED panel data on GPIO7, driven by PIO0 state machine 0.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let wire = PioLedWire::new(&mut common, sm0, p.PIN_7)?;
    let mut led_strip = LedStrip::new(wire);
    led_strip.clear();
    led_strip.write().await;
    info!("LED panel initialized");

    // Buttons wired to ground: pull-up, press on the falling edge.
    let button_a = EdgeButton::new(p.PIN_5, PressedTo::Ground, ButtonId::A);
    spawner
        .spawn(button_task(button_a))
        .map_err(Error::TaskSpawn)?;
    info!("button A configured");

    let button_b = EdgeButton::new(p.PIN_6, PressedTo::Ground, ButtonId::B);
    spawner
        .spawn(button_task(button_b))
        .map_err(Error::TaskSpawn)?;
    info!("button B configured");

    let status_led = Output::new(p.PIN_13, Level::Low);

    ControlLoop::new(led_strip, &DEBOUNCER, status_led)
        .run()
        .await
}

#[embassy_executor::task(pool_size = 2)]
async fn button_task(button: EdgeButton<'static>) -> ! {
    button_edge_loop(button, &DEBOUNCER).await
}
