//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one keyboard interface with an LED output
//! report.

use super::status;
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_usb::class::hid::{
    Config as HidConfig, HidReader, HidReaderWriter, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;
use usbtyper::config;
use usbtyper::hid::keyboard::{KeyboardLeds, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use usbtyper::Error;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;
pub type KeyboardWriter = HidWriter<'static, UsbDriver, KEYBOARD_REPORT_SIZE>;
pub type KeyboardReader = HidReader<'static, UsbDriver, 1>;

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_DEVICE_HANDLER: StaticCell<DeviceHandler> = StaticCell::new();

/// Tracks mount and suspend state from USB bus events.
struct DeviceHandler;

impl embassy_usb::Handler for DeviceHandler {
    fn enabled(&mut self, enabled: bool) {
        if !enabled {
            status::set_configured(false);
            info!("USB: disabled");
        }
    }

    fn reset(&mut self) {
        status::set_configured(false);
    }

    fn configured(&mut self, configured: bool) {
        status::set_configured(configured);
        info!("USB: configured={}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        status::set_suspended(suspended);
        info!("USB: suspended={}", suspended);
    }
}

/// Receives the host's keyboard LED output report.
struct LedRequestHandler;

impl RequestHandler for LedRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, data: &[u8]) -> OutResponse {
        if let Some(leds) = KeyboardLeds::from_output_report(data) {
            status::set_caps_lock(leds.caps_lock());
            info!("USB: host LEDs {=u8:#04x}", leds.bits());
        }
        OutResponse::Accepted
    }
}

/// Build result containing the USB device runner and the keyboard endpoints.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub reader: KeyboardReader,
    pub writer: KeyboardWriter,
}

/// Initialise the USB stack and create the keyboard device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbHidDevice {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;
    usb_config.supports_remote_wakeup = true;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 128]),
    );

    builder.handler(USB_DEVICE_HANDLER.init(DeviceHandler));

    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let keyboard = HidReaderWriter::<_, 1, KEYBOARD_REPORT_SIZE>::new(
        &mut builder,
        KB_STATE.init(State::new()),
        kb_config,
    );
    let (reader, writer) = keyboard.split();

    let device = builder.build();

    info!("USB HID keyboard initialised");

    UsbHidDevice {
        device,
        reader,
        writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// Handles enumeration and endpoint servicing. While the bus is suspended
/// it waits for either the host to resume or a remote-wakeup request.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    loop {
        device.run_until_suspend().await;
        match select(device.wait_resume(), status::wakeup_signal().wait()).await {
            Either::First(()) => {}
            Either::Second(()) => {
                info!("USB: requesting remote wakeup");
                if device.remote_wakeup().await.is_err() {
                    warn!("USB: {}", Error::RemoteWakeup);
                }
            }
        }
    }
}

/// Serve the keyboard's OUT endpoint and SET_REPORT requests.
pub async fn run_hid_reader(reader: KeyboardReader) -> ! {
    let mut handler = LedRequestHandler;
    reader.run(false, &mut handler).await
}
