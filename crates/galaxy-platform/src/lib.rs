//! # galaxy-platform - Galaxy board port mapping and bus selection
//!
//! This crate wires one hardware platform variant ("Galaxy", a chassis
//! board deployed as either a line card or a fabric card) into the switch
//! agent. It owns the static tables mapping front-panel transceiver slots
//! and backplane lane groups to logical ports, the fan-out of each 4-lane
//! quad into logical port records, and the choice of I2C bus
//! implementation used to reach the board's transceivers.
//!
//! ## Responsibilities
//! - Select the front-panel and backplane tables for the board variant
//! - Expand each physical quad into four logical ports (channels 0-3)
//! - Supply the platform's I2C bus handle
//!
//! ## Key properties
//! - Tables are pure data, evaluated once at platform start-up
//! - A board variant outside the Galaxy family is a fatal misconfiguration
//! - No concurrency: initialization is synchronous and run-once

mod platform;
mod port;
mod tables;

pub use platform::{GalaxyPlatform, InitPortMap};
pub use port::GalaxyPort;
pub use tables::*;
