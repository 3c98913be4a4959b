//! SSD1306 OLED status screen.

use core::fmt::Write;

use crate::usb::status;
use defmt::warn;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use usbtyper::config::{self, DISPLAY_REFRESH_MS};
use usbtyper::indicator::DeviceState;
use usbtyper::typer::{Phase, Progress};
use usbtyper::{Error, Result};

use super::progress_signal;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Characters per line with the 6×10 font.
const LINE_CHARS: usize = 21;

/// Width of the progress bar in pixels.
const BAR_WIDTH: u32 = 128;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn state_label(state: DeviceState) -> &'static str {
    match state {
        DeviceState::NotMounted => "No host",
        DeviceState::Mounted => "Mounted",
        DeviceState::Suspended => "Host suspended",
    }
}

/// Render device state, payload and typing progress.
pub fn draw_status<I2C>(
    display: &mut Display<I2C>,
    state: DeviceState,
    progress: &Progress,
    payload: &str,
) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("usbtyper", Point::new(0, 10), text_style()).draw(display);
    let _ = Text::new(state_label(state), Point::new(0, 24), text_style()).draw(display);

    let shown = payload.get(..LINE_CHARS).unwrap_or(payload);
    let _ = Text::new(shown, Point::new(0, 38), text_style()).draw(display);

    let mut line: heapless::String<LINE_CHARS> = heapless::String::new();
    let _ = match (progress.phase, progress.held) {
        (Phase::Idle, _) => write!(line, "Idle"),
        (_, true) => write!(line, "Paused {}/{}", progress.cursor, progress.length),
        _ => write!(line, "Typing {}/{}", progress.cursor, progress.length),
    };
    let _ = Text::new(line.as_str(), Point::new(0, 52), text_style()).draw(display);

    if progress.length > 0 && progress.phase != Phase::Idle {
        let filled = BAR_WIDTH * progress.cursor as u32 / progress.length as u32;
        let _ = Rectangle::new(Point::new(0, 58), Size::new(filled, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display);
    }

    display.flush().map_err(|_| Error::Display)
}

/// Redraw the status screen whenever the typer reports progress, and at
/// least every second so bus state changes show up.
pub async fn display_task<I2C>(i2c: I2C, mut progress: Progress) -> !
where
    I2C: embedded_hal::i2c::I2c,
{
    let mut display = match init(i2c) {
        Ok(display) => Some(display),
        Err(e) => {
            warn!("Display: {}", e);
            None
        }
    };

    loop {
        if let Some(display) = display.as_mut() {
            if let Err(e) = draw_status(display, status::device_state(), &progress, config::PAYLOAD) {
                warn!("Display: {}", e);
            }
        }

        let update = progress_signal().wait();
        let timeout = Timer::after(Duration::from_millis(1000));
        if let Either::First(p) = select(update, timeout).await {
            progress = p;
        }
        Timer::after(Duration::from_millis(DISPLAY_REFRESH_MS)).await;
    }
}
