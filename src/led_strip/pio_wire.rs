//! PIO backend for [`LedWire`]: one PIO state machine generating WS2812 bit timing.
//!
//! Each byte pushed into the TX FIFO is shifted out MSB first. A `1` bit is a long high
//! pulse, a `0` bit a short one; both last [`CYCLES_PER_BIT`] PIO cycles.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, PioPin, ShiftConfig, ShiftDirection, StateMachine,
};
use super::{CYCLES_PER_BIT, LedWire, clock_divider};
use crate::{Error, Result};

// Pulse phases in PIO cycles: T1 always high, T2 high only for a `1`, T3 always low.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;

const _: () = assert!((T1 + T2 + T3) as u32 == CYCLES_PER_BIT);

/// WS2812 output on one PIO state machine.
///
/// Owning the [`StateMachine`] is what reserves the timing resource, so a second strip
/// cannot claim the same one. Loading the program can still fail when the PIO's instruction
/// memory is already full; see [`PioLedWire::new`].
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// # use panic_probe as _;
/// use digit_matrix::Result;
/// use digit_matrix::led_strip::{LedStrip, pio_wire::PioLedWire};
/// use embassy_rp::{bind_interrupts, peripherals::PIO0, pio::{InterruptHandler, Pio}};
///
/// bind_interrupts!(struct Irqs {
///     PIO0_IRQ_0 => InterruptHandler<PIO0>;
/// });
///
/// async fn example(p: embassy_rp::Peripherals) -> Result<()> {
///     let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
///     let wire = PioLedWire::new(&mut common, sm0, p.PIN_7)?;
///     let mut led_strip: LedStrip<_, 25> = LedStrip::new(wire);
///     led_strip.clear();
///     led_strip.write().await;
///     Ok(())
/// }
/// ```
pub struct PioLedWire<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioLedWire<'d, PIO, SM> {
    /// Load the WS2812 program, configure `sm` for 800 kHz output on `pin`, and start it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PioProgramSpace`] if the program does not fit in the PIO's
    /// instruction memory. The device cannot drive its LEDs without it.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin + 'd>,
    ) -> Result<Self> {
        info!("PioLedWire: loading WS2812 program on state machine {}", SM);
        let program = ws2812_program();
        let loaded = common
            .try_load_program(&program)
            .map_err(|_| Error::PioProgramSpace)?;

        let out_pin = common.make_pio_pin(pin);
        let mut config = Config::default();
        config.set_out_pins(&[&out_pin]);
        config.set_set_pins(&[&out_pin]);
        config.use_program(&loaded, &[&out_pin]);
        config.clock_divider = clock_divider(clk_sys_freq());
        config.fifo_join = FifoJoin::TxOnly;
        // Autopull one byte at a time from the top of each pushed word.
        config.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 8,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&config);
        sm.set_enable(true);
        info!("PioLedWire: ready");
        Ok(Self { sm })
    }
}

impl<PIO: Instance, const SM: usize> LedWire for PioLedWire<'_, PIO, SM> {
    async fn send_byte(&mut self, byte: u8) {
        self.sm.tx().wait_push(u32::from(byte) << 24).await;
    }
}

fn ws2812_program() -> pio::Program<32> {
    let side_set = pio::SideSet::new(false, 1, false);
    let mut assembler: pio::Assembler<32> = pio::Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(pio::SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    // Low for T3, fetch the next bit into X.
    assembler.out_with_delay_and_side_set(pio::OutDestination::X, 1, T3 - 1, 0);
    // High for T1 on every bit.
    assembler.jmp_with_delay_and_side_set(pio::JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    // `1`: stay high for T2.
    assembler.jmp_with_delay_and_side_set(pio::JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    // `0`: go low for T2.
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    assembler.assemble_with_wrap(wrap_source, wrap_target)
}
