//! GPIO trigger button with async debouncing.
//!
//! One active-low button with internal pull-up. A press starts typing
//! the payload right away; while the host is suspended it requests a
//! remote wakeup instead (the typer decides which).

use super::trigger_signal;
use defmt::info;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;
use usbtyper::config::BUTTON_DEBOUNCE_MS;

/// Run the button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, raises the trigger,
/// then waits for release before repeating.
pub async fn button_task<B>(mut btn: B) -> !
where
    B: Wait + InputPin,
{
    loop {
        // Wait for falling edge (button press, active-low).
        if btn.wait_for_falling_edge().await.is_err() {
            continue;
        }

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low().unwrap_or(false) {
            info!("Button: trigger");
            trigger_signal().signal(());

            // Wait for release to avoid repeat triggers.
            let _ = btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
