//! rectrigger firmware entry point (nRF52840).
//!
//! Single cooperative polling loop: every cycle samples the button,
//! peeks at whatever the UART has buffered without waiting, runs one
//! [`Controller::step`], and flushes any status lines it produced.

#![no_std]
#![no_main]

mod board;

use core::task::Poll;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_futures::poll_once;
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::gpio::{Flex, Input, Level as PinLevel, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, peripherals, uarte};
use embassy_time::{Delay, Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rectrigger::config::{POLL_INTERVAL_MS, SELF_TEST_MS, SERIAL_BAUD, STATUS_QUEUE_DEPTH};
use rectrigger::{Controller, Level, Outbox};

use board::tm1637::Tm1637;

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

const UART_BUF_LEN: usize = 64;

static RX_BUF: StaticCell<[u8; UART_BUF_LEN]> = StaticCell::new();
static TX_BUF: StaticCell<[u8; UART_BUF_LEN]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("rectrigger v{}", env!("CARGO_PKG_VERSION"));

    // Button: active-low, internal pull-up.
    let button = Input::new(p.P0_11, Pull::Up);

    // Display: CLK push-pull, DIO open-drain for the ACK bit.
    let clk = Output::new(p.P0_02, PinLevel::High, OutputDrive::Standard);
    let mut dio = Flex::new(p.P0_03);
    dio.set_as_input_output(Pull::Up, OutputDrive::Standard0Disconnect1);

    let mut controller = Controller::new(Tm1637::new(clk, dio, Delay));
    controller.power_on();
    Timer::after_millis(SELF_TEST_MS).await;
    controller.finish_self_test();

    let mut config = uarte::Config::default();
    config.baudrate = board::uart::baudrate(SERIAL_BAUD);
    config.parity = uarte::Parity::EXCLUDED;
    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        Irqs,
        p.P0_08,
        p.P0_06,
        config,
        RX_BUF.init([0; UART_BUF_LEN]),
        TX_BUF.init([0; UART_BUF_LEN]),
    );
    let (mut rx, mut tx) = uart.split();

    let mut outbox: Outbox<STATUS_QUEUE_DEPTH> = Outbox::new();
    info!("Ready. Waiting for button...");

    loop {
        let now = Instant::now().as_millis();
        let level = Level::from(button.is_high());

        // Bytes the step leaves unread stay in the UART buffer for the next cycle.
        let consumed = match poll_once(rx.fill_buf()) {
            Poll::Ready(Ok(bytes)) => controller.step(now, level, bytes, &mut outbox).consumed,
            Poll::Ready(Err(e)) => {
                warn!("Serial: rx error {:?}", e);
                controller.step(now, level, &[], &mut outbox).consumed
            }
            Poll::Pending => controller.step(now, level, &[], &mut outbox).consumed,
        };
        if consumed > 0 {
            rx.consume(consumed);
        }

        while let Some(status) = outbox.pop() {
            info!("Serial: -> {=str}", status.as_str());
            if let Err(e) = board::uart::write_line(&mut tx, status.as_str()).await {
                warn!("Serial: {} while sending {=str}", e, status.as_str());
            }
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
