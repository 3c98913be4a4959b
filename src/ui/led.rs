//! Status LED task.

use crate::usb::status;
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::{OutputPin, PinState};
use usbtyper::indicator::Indicator;

/// LED update granularity (ms).
const LED_TICK_MS: u64 = 50;

/// Drive an active-low status LED from the device state.
pub async fn led_task<P: OutputPin>(mut led: P) -> ! {
    let mut indicator = Indicator::new();
    let mut ticker = Ticker::every(Duration::from_millis(LED_TICK_MS));

    loop {
        ticker.next().await;
        let now_ms = Instant::now().as_millis();
        if let Some(on) = indicator.update(status::device_state(), status::caps_lock(), now_ms) {
            let _ = led.set_state(PinState::from(!on));
        }
    }
}
