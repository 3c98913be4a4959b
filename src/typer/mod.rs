//! Keystroke injection: payload, encoding, pacing and the trigger that
//! starts each transmission.
//!
//! [`Typer`] is the context object the firmware's poll loop owns. The
//! transport is passed into every call so the same logic runs against
//! the USB HID writer on target and against a recording mock in tests.

pub mod emitter;
pub mod pacer;
pub mod payload;
pub mod trigger;

pub use pacer::{Event, Pacer, PacerConfig, PacerState, Phase};
pub use payload::PayloadBuffer;
pub use trigger::PeriodicTrigger;

use crate::hid::keyboard::KeyReport;

/// Report sink the typer drives.
///
/// `submit_report` is fire-and-forget; completion comes back later as a
/// call to [`Typer::report_delivered`].
pub trait Transport {
    /// The endpoint can accept a report right now.
    fn is_ready(&self) -> bool;
    fn submit_report(&mut self, report: KeyReport);
    /// The host has suspended the bus.
    fn is_suspended(&self) -> bool;
    /// Ask the host to resume the bus.
    fn request_wakeup(&mut self);
}

/// Snapshot of the typing progress, for status output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    pub phase: Phase,
    pub cursor: usize,
    pub length: usize,
    pub held: bool,
}

pub struct Typer {
    pacer: Pacer,
    trigger: PeriodicTrigger,
}

impl Typer {
    pub fn new(payload: PayloadBuffer, config: PacerConfig, interval_ms: u64) -> Self {
        Self {
            pacer: Pacer::with_config(payload, config),
            trigger: PeriodicTrigger::new(interval_ms),
        }
    }

    /// Run the periodic trigger. Returns `true` if a transmission started.
    pub fn poll<T: Transport>(&mut self, now_ms: u64, transport: &mut T) -> bool {
        self.release_hold(transport);
        if !self.trigger.due(now_ms) {
            return false;
        }
        self.start(transport)
    }

    /// Start a transmission outside the periodic schedule.
    ///
    /// The periodic interval restarts from `now_ms` when this succeeds.
    pub fn trigger_now<T: Transport>(&mut self, now_ms: u64, transport: &mut T) -> bool {
        self.release_hold(transport);
        let started = self.start(transport);
        if started {
            self.trigger.rearm(now_ms);
        }
        started
    }

    fn start<T: Transport>(&mut self, transport: &mut T) -> bool {
        // Also for a held sequence: it continues once the bus is back.
        if transport.is_suspended() {
            transport.request_wakeup();
            return false;
        }
        if !self.pacer.is_idle() || self.pacer.is_held() || !transport.is_ready() {
            return false;
        }

        match self.pacer.handle(Event::Start) {
            Some(report) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("typer: start, {} bytes", self.pacer.payload().len());
                transport.submit_report(report);
                true
            }
            None => false,
        }
    }

    /// The transport finished sending the previous report.
    pub fn report_delivered<T: Transport>(&mut self, transport: &mut T) {
        if transport.is_suspended() && !self.pacer.is_held() {
            self.pacer.handle(Event::Suspended);
        }
        let report = self.pacer.handle(Event::ReportDelivered);
        self.submit(report, transport);
        self.release_hold(transport);
    }

    /// Lift a hold once the bus is back, even if no resume edge was seen.
    fn release_hold<T: Transport>(&mut self, transport: &mut T) {
        if self.pacer.is_held() && !transport.is_suspended() {
            self.resumed(transport);
        }
    }

    pub fn suspended(&mut self) {
        self.pacer.handle(Event::Suspended);
    }

    pub fn resumed<T: Transport>(&mut self, transport: &mut T) {
        let report = self.pacer.handle(Event::Resumed);
        self.submit(report, transport);
    }

    /// Abandon the current transmission; the next trigger starts over.
    pub fn cancel(&mut self) {
        self.pacer.handle(Event::Cancel);
    }

    fn submit<T: Transport>(&mut self, report: Option<KeyReport>, transport: &mut T) {
        let Some(report) = report else {
            #[cfg(feature = "defmt")]
            if self.pacer.is_idle() {
                defmt::debug!("typer: idle");
            }
            return;
        };

        if transport.is_ready() {
            transport.submit_report(report);
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("typer: transport not ready at {}, sequence dropped", self.pacer.cursor());
            self.cancel();
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            phase: self.pacer.phase(),
            cursor: self.pacer.cursor(),
            length: self.pacer.payload().len(),
            held: self.pacer.is_held(),
        }
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }
}
