//! usbtyper firmware for the nRF52840.
//!
//! Enumerates as a USB boot keyboard and types `config::PAYLOAD` once per
//! `config::TRIGGER_INTERVAL_MS`, or whenever the trigger button is
//! pressed. Each keystroke report is sent only after the host collected
//! the previous one.
//!
//! Tasks:
//! - `usb_device_task`: USB stack, suspend/resume, remote wakeup
//! - `hid_reader_task`: host LED output reports (Caps Lock)
//! - `typer_task`: trigger and report-completion chain
//! - `led_task`, `button_task`, `display_task`: user interface

#![no_std]
#![no_main]

mod ui;
mod usb;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use usbtyper::config;
use usbtyper::typer::{PacerConfig, PayloadBuffer, Typer};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::task]
async fn usb_device_task(device: embassy_usb::UsbDevice<'static, usb::hid_device::UsbDriver>) -> ! {
    usb::hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_reader_task(reader: usb::hid_device::KeyboardReader) -> ! {
    usb::hid_device::run_hid_reader(reader).await
}

#[embassy_executor::task]
async fn typer_task(typer: Typer, writer: usb::hid_device::KeyboardWriter) -> ! {
    usb::transport::run_typer(typer, writer).await
}

#[embassy_executor::task]
async fn led_task(led: Output<'static>) -> ! {
    ui::led::led_task(led).await
}

#[embassy_executor::task]
async fn button_task(button: Input<'static>) -> ! {
    ui::buttons::button_task(button).await
}

#[embassy_executor::task]
async fn display_task(i2c: Twim<'static, peripherals::TWISPI0>, progress: usbtyper::typer::Progress) -> ! {
    ui::display::display_task(i2c, progress).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("usbtyper starting");

    let payload = unwrap!(PayloadBuffer::try_from(config::PAYLOAD));
    let typer = Typer::new(
        payload,
        PacerConfig {
            release_after_last: config::RELEASE_AFTER_LAST,
        },
        config::TRIGGER_INTERVAL_MS,
    );
    let progress = typer.progress();

    let usb = usb::hid_device::init(p.USBD);
    spawner.must_spawn(usb_device_task(usb.device));
    spawner.must_spawn(hid_reader_task(usb.reader));
    spawner.must_spawn(typer_task(typer, usb.writer));

    // LED1 on the nRF52840-DK, active-low: start off.
    let led = Output::new(p.P0_13, Level::High, OutputDrive::Standard);
    spawner.must_spawn(led_task(led));

    let button = Input::new(p.P0_11, Pull::Up);
    spawner.must_spawn(button_task(button));

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    spawner.must_spawn(display_task(i2c, progress));

    info!("All tasks spawned");
}
