//! Completion-driven keystroke pacer.
//!
//! HID keyboard reports carry key *state*, not key presses. Two
//! consecutive reports with the same usage look like one held key to the
//! host, so the pacer slips an all-zero release in between whenever the
//! next character equals the one just emitted.
//!
//! The pacer never emits on its own. Each report is the answer to one
//! event: `Start` from the trigger, or `ReportDelivered` from the
//! transport once the previous report left the device. That keeps at
//! most one report in flight.
//!
//! ```text
//!            Start                 ReportDelivered (next != last)
//!   Idle ───────────▶ Sending ◀──────────────────────┐
//!    ▲                  │  │                          │
//!    │   end of payload │  │ next == last             │
//!    └──────────────────┘  └──────────▶ Armed ────────┘
//! ```

use super::emitter::encode;
use super::payload::PayloadBuffer;
use crate::hid::keyboard::KeyReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Nothing in flight; waiting for the next `Start`.
    Idle,
    /// A release report is in flight; the next delivery sends a key-down.
    Armed,
    /// A key-down report is in flight.
    Sending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Begin typing the payload from its first character.
    Start,
    /// The transport finished sending the previous report.
    ReportDelivered,
    /// The host suspended the bus.
    Suspended,
    /// The host resumed the bus.
    Resumed,
    /// Drop the current sequence.
    Cancel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PacerConfig {
    /// Follow the last character with one all-zero report.
    pub release_after_last: bool,
}

/// Everything the pacer remembers between events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacerState {
    pub phase: Phase,
    /// Last character sent as a key-down, 0 after a release.
    pub last_emitted: u8,
    /// Set while the host is suspended; no report leaves the pacer.
    pub held: bool,
    /// A delivery arrived while held and is replayed on resume.
    pub pending_delivery: bool,
}

impl PacerState {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            last_emitted: 0,
            held: false,
            pending_delivery: false,
        }
    }
}

impl Default for PacerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one event and return the report to submit, if any.
///
/// Pure with respect to the transport: the caller owns submission.
pub fn transition(
    state: &mut PacerState,
    payload: &mut PayloadBuffer,
    config: &PacerConfig,
    event: Event,
) -> Option<KeyReport> {
    match event {
        Event::Start => start(state, payload),
        Event::ReportDelivered => {
            if state.phase == Phase::Idle {
                return None;
            }
            if state.held {
                state.pending_delivery = true;
                return None;
            }
            deliver(state, payload, config)
        }
        Event::Suspended => {
            state.held = true;
            None
        }
        Event::Resumed => {
            state.held = false;
            let pending = core::mem::take(&mut state.pending_delivery);
            if pending && state.phase != Phase::Idle {
                deliver(state, payload, config)
            } else {
                None
            }
        }
        Event::Cancel => {
            state.pending_delivery = false;
            finish(state, payload);
            None
        }
    }
}

fn start(state: &mut PacerState, payload: &mut PayloadBuffer) -> Option<KeyReport> {
    if state.phase != Phase::Idle || state.held {
        return None;
    }

    payload.rewind();
    state.last_emitted = 0;

    let first = payload.peek()?;
    payload.advance();
    state.last_emitted = first;
    state.phase = Phase::Sending;
    Some(encode(first))
}

fn deliver(
    state: &mut PacerState,
    payload: &mut PayloadBuffer,
    config: &PacerConfig,
) -> Option<KeyReport> {
    let next = payload.peek();

    // Compared by value: any character equal to the last key-down needs a
    // release first, wherever it sits in the payload.
    if state.last_emitted != 0 && next == Some(state.last_emitted) {
        state.last_emitted = 0;
        state.phase = Phase::Armed;
        return Some(KeyReport::release());
    }

    if let Some(ch) = next {
        payload.advance();
        state.last_emitted = ch;
        state.phase = Phase::Sending;
        return Some(encode(ch));
    }

    if config.release_after_last && state.phase == Phase::Sending {
        state.last_emitted = 0;
        state.phase = Phase::Armed;
        return Some(KeyReport::release());
    }

    finish(state, payload);
    None
}

fn finish(state: &mut PacerState, payload: &mut PayloadBuffer) {
    payload.rewind();
    state.last_emitted = 0;
    state.phase = Phase::Idle;
}

/// Pacer state together with the payload it owns.
#[derive(Clone, Debug)]
pub struct Pacer {
    state: PacerState,
    payload: PayloadBuffer,
    config: PacerConfig,
}

impl Pacer {
    pub fn new(payload: PayloadBuffer) -> Self {
        Self::with_config(payload, PacerConfig::default())
    }

    pub fn with_config(payload: PayloadBuffer, config: PacerConfig) -> Self {
        Self {
            state: PacerState::new(),
            payload,
            config,
        }
    }

    pub fn handle(&mut self, event: Event) -> Option<KeyReport> {
        transition(&mut self.state, &mut self.payload, &self.config, event)
    }

    pub fn state(&self) -> &PacerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_idle(&self) -> bool {
        self.state.phase == Phase::Idle
    }

    pub fn is_held(&self) -> bool {
        self.state.held
    }

    pub fn last_emitted(&self) -> u8 {
        self.state.last_emitted
    }

    pub fn cursor(&self) -> usize {
        self.payload.cursor()
    }

    pub fn payload(&self) -> &PayloadBuffer {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacer(text: &str) -> Pacer {
        Pacer::new(PayloadBuffer::try_from(text).unwrap())
    }

    /// Start, then acknowledge every report until the pacer goes idle.
    fn run(pacer: &mut Pacer) -> heapless::Vec<KeyReport, 64> {
        let mut reports = heapless::Vec::new();
        let mut next = pacer.handle(Event::Start);
        while let Some(report) = next {
            reports.push(report).unwrap();
            next = pacer.handle(Event::ReportDelivered);
        }
        reports
    }

    #[test]
    fn distinct_characters_one_report_each() {
        let mut p = pacer("hi");
        let reports = run(&mut p);
        assert_eq!(reports.as_slice(), &[encode(b'h'), encode(b'i')]);
        assert!(p.is_idle());
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.last_emitted(), 0);
    }

    #[test]
    fn doubled_character_gets_release_between() {
        let mut p = pacer("oo");
        let reports = run(&mut p);
        assert_eq!(
            reports.as_slice(),
            &[encode(b'o'), KeyReport::release(), encode(b'o')]
        );
    }

    #[test]
    fn hello_inserts_single_release() {
        let mut p = pacer("hello");
        assert_eq!(p.handle(Event::Start), Some(encode(b'h')));
        assert_eq!(p.handle(Event::ReportDelivered), Some(encode(b'e')));
        assert_eq!(p.handle(Event::ReportDelivered), Some(encode(b'l')));
        assert_eq!(p.last_emitted(), b'l');
        assert_eq!(p.cursor(), 3);

        assert_eq!(p.handle(Event::ReportDelivered), Some(KeyReport::release()));
        assert_eq!(p.phase(), Phase::Armed);
        assert_eq!(p.last_emitted(), 0);
        assert_eq!(p.cursor(), 3);

        assert_eq!(p.handle(Event::ReportDelivered), Some(encode(b'l')));
        assert_eq!(p.handle(Event::ReportDelivered), Some(encode(b'o')));
        assert_eq!(p.handle(Event::ReportDelivered), None);
        assert!(p.is_idle());
    }

    #[test]
    fn report_count_matches_length_without_repeats() {
        let mut p = pacer("The quick brown fox!");
        assert_eq!(run(&mut p).len(), 20);
    }

    #[test]
    fn triple_character_releases_twice() {
        let mut p = pacer("aaa");
        let reports = run(&mut p);
        assert_eq!(reports.len(), 5);
        assert_eq!(reports.iter().filter(|r| r.is_release()).count(), 2);
    }

    #[test]
    fn start_while_busy_is_ignored() {
        let mut p = pacer("abc");
        assert!(p.handle(Event::Start).is_some());
        assert_eq!(p.cursor(), 1);

        assert_eq!(p.handle(Event::Start), None);
        assert_eq!(p.phase(), Phase::Sending);
        assert_eq!(p.cursor(), 1);
    }

    #[test]
    fn start_on_empty_payload_stays_idle() {
        let mut p = pacer("");
        assert_eq!(p.handle(Event::Start), None);
        assert!(p.is_idle());
    }

    #[test]
    fn stray_delivery_while_idle_is_ignored() {
        let mut p = pacer("ab");
        assert_eq!(p.handle(Event::ReportDelivered), None);
        assert!(p.is_idle());
    }

    #[test]
    fn sequence_can_run_again() {
        let mut p = pacer("hi");
        let first = run(&mut p);
        let second = run(&mut p);
        assert_eq!(first, second);
    }

    #[test]
    fn release_after_last_sends_final_key_up() {
        let config = PacerConfig {
            release_after_last: true,
        };
        let mut p = Pacer::with_config(PayloadBuffer::try_from("hi").unwrap(), config);
        let reports = run(&mut p);
        assert_eq!(
            reports.as_slice(),
            &[encode(b'h'), encode(b'i'), KeyReport::release()]
        );
        assert!(p.is_idle());
    }

    #[test]
    fn suspend_holds_delivery_until_resume() {
        let mut p = pacer("abc");
        p.handle(Event::Start);
        assert_eq!(p.handle(Event::ReportDelivered), Some(encode(b'b')));

        assert_eq!(p.handle(Event::Suspended), None);
        assert_eq!(p.handle(Event::ReportDelivered), None);
        assert!(p.is_held());
        assert_eq!(p.cursor(), 2);
        assert!(p.state().pending_delivery);

        assert_eq!(p.handle(Event::Resumed), Some(encode(b'c')));
        assert!(!p.is_held());
        assert_eq!(p.handle(Event::ReportDelivered), None);
        assert!(p.is_idle());
    }

    #[test]
    fn resume_without_pending_delivery_emits_nothing() {
        let mut p = pacer("abc");
        p.handle(Event::Start);
        p.handle(Event::Suspended);
        assert_eq!(p.handle(Event::Resumed), None);
        // The in-flight report is still owed a delivery.
        assert_eq!(p.handle(Event::ReportDelivered), Some(encode(b'b')));
    }

    #[test]
    fn start_blocked_while_suspended() {
        let mut p = pacer("abc");
        p.handle(Event::Suspended);
        assert_eq!(p.handle(Event::Start), None);
        p.handle(Event::Resumed);
        assert_eq!(p.handle(Event::Start), Some(encode(b'a')));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut p = pacer("abc");
        p.handle(Event::Start);
        p.handle(Event::ReportDelivered);
        assert_eq!(p.handle(Event::Cancel), None);
        assert!(p.is_idle());
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.handle(Event::Start), Some(encode(b'a')));
    }

    #[test]
    fn transition_works_on_bare_state() {
        let mut state = PacerState::default();
        let mut payload = PayloadBuffer::try_from("A").unwrap();
        let config = PacerConfig::default();

        let report = transition(&mut state, &mut payload, &config, Event::Start);
        assert_eq!(report, Some(encode(b'A')));
        assert_eq!(state.phase, Phase::Sending);
        assert_eq!(state.last_emitted, b'A');

        let report = transition(&mut state, &mut payload, &config, Event::ReportDelivered);
        assert_eq!(report, None);
        assert_eq!(state, PacerState::new());
    }
}
