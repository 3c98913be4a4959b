//! Typing loop: drives the `Typer` against the keyboard IN endpoint.
//!
//! `HidWriter::write` resolves once the host has collected the report,
//! which is the delivery confirmation the pacer waits for. The loop never
//! submits the next report before the previous write has completed.

use super::hid_device::KeyboardWriter;
use super::status;
use crate::ui;
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};
use usbtyper::config;
use usbtyper::hid::keyboard::{KeyReport, KEYBOARD_REPORT_SIZE};
use usbtyper::typer::{Transport, Typer};
use usbtyper::{Error, Result};

/// Single-slot outbox in front of the HID writer.
pub struct UsbTransport {
    outbox: Option<KeyReport>,
}

impl UsbTransport {
    pub const fn new() -> Self {
        Self { outbox: None }
    }

    fn take(&mut self) -> Option<KeyReport> {
        self.outbox.take()
    }
}

impl Transport for UsbTransport {
    fn is_ready(&self) -> bool {
        status::is_configured() && !status::is_suspended() && self.outbox.is_none()
    }

    fn submit_report(&mut self, report: KeyReport) {
        self.outbox = Some(report);
    }

    fn is_suspended(&self) -> bool {
        status::is_suspended()
    }

    fn request_wakeup(&mut self) {
        status::wakeup_signal().signal(());
    }
}

async fn write_report(writer: &mut KeyboardWriter, report: &KeyReport) -> Result<()> {
    let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
    let n = report.serialize(&mut buf);
    writer.write(&buf[..n]).await.map_err(|_| Error::Usb)
}

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Cooperative poll loop: periodic trigger, button trigger, suspend
/// tracking and the report-completion chain.
pub async fn run_typer(mut typer: Typer, mut writer: KeyboardWriter) -> ! {
    info!("Typer task started - interval {} ms", config::TRIGGER_INTERVAL_MS);

    let mut transport = UsbTransport::new();
    let mut ticker = Ticker::every(Duration::from_millis(config::TASK_POLL_MS));
    let mut was_suspended = false;

    loop {
        let manual = match select(ticker.next(), ui::trigger_signal().wait()).await {
            Either::First(()) => false,
            Either::Second(()) => true,
        };

        let suspended = status::is_suspended();
        if suspended != was_suspended {
            was_suspended = suspended;
            if suspended {
                typer.suspended();
            } else {
                typer.resumed(&mut transport);
            }
        }

        let started = if manual {
            typer.trigger_now(now_ms(), &mut transport)
        } else {
            typer.poll(now_ms(), &mut transport)
        };
        if started {
            info!("Typer: transmission started");
        }

        let mut wrote = false;
        while let Some(report) = transport.take() {
            wrote = true;
            ui::progress_signal().signal(typer.progress());
            match write_report(&mut writer, &report).await {
                Ok(()) => typer.report_delivered(&mut transport),
                Err(e) => {
                    warn!("Typer: {}", e);
                    typer.cancel();
                }
            }
        }

        if wrote {
            ui::progress_signal().signal(typer.progress());
        }
    }
}
