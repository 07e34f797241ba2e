//! Vernier - Digital Caliper Reader Firmware
//!
//! Main firmware binary for RP2040-based reader boards. Captures the
//! two-wire clock/data bitstream from a digital caliper, decodes the 24-bit
//! measurement frames, streams readings over UART0, and replays the last
//! reading as keystrokes on a button press.
//!
//! Named after the vernier scale - the sliding auxiliary scale that gave
//! the caliper its precision long before the electronics did.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::keyboard::KeyboardSink;

mod channels;
mod keyboard;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vernier firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Caliper interface: clock and data are driven by the device
    let clock = Input::new(p.PIN_14, Pull::None);
    let data = Input::new(p.PIN_12, Pull::None);

    // Capture button, active low
    let button = Input::new(p.PIN_5, Pull::Up);

    // Status LED, toggled per captured frame
    let led = Output::new(p.PIN_15, Level::Low);

    info!("Caliper GPIO initialized");

    // Setup UART0 for the reading stream (to the web bridge)
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    info!("UART initialized for reading stream");

    // Select the keystroke sink once; the replay path never branches again
    #[cfg(feature = "uart-keyboard")]
    let keyboard = {
        use embassy_rp::uart::UartTx;
        let kbd_tx = UartTx::new_blocking(p.UART1, p.PIN_8, UartConfig::default());
        info!("Keystroke sink: UART1 bridge");
        KeyboardSink::Uart(keyboard::UartKeyboard::new(kbd_tx))
    };
    #[cfg(not(feature = "uart-keyboard"))]
    let keyboard = {
        info!("Keystroke sink: none");
        KeyboardSink::Null(vernier_core::NullKeyboard)
    };

    // Spawn tasks
    spawner.spawn(tasks::capture_task(clock, data, led)).unwrap();
    spawner.spawn(tasks::decode_task()).unwrap();
    spawner.spawn(tasks::button_task(button, keyboard)).unwrap();
    spawner.spawn(tasks::stream_task(tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
