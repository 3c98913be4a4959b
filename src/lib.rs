//! Host-testable core of the usbtyper firmware.
//!
//! Everything here is `no_std`, hardware-free logic: the ASCII scancode
//! table, report encoding, the completion-driven pacer and the status
//! LED policy. The embedded binary (`main.rs`) wires it to Embassy USB.
//!
//! Usage: `cargo test --lib` or `cargo test` on the host.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod hid;
pub mod indicator;
pub mod typer;

pub use error::{Error, Result};
