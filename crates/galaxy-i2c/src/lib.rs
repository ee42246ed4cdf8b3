//! I2C bus access layer for Galaxy platform transceivers.
//!
//! The switch agent reaches front-panel QSFP transceivers over a low-level
//! I2C bus whose topology differs per board. This crate provides:
//!
//! - [`I2cBus`]: the bus abstraction the transceiver management code
//!   programs against
//! - [`GalaxyI2cBus`]: the Galaxy board implementation, which routes
//!   transceiver access through two PCA9548 multiplexers
//!
//! The bus *transaction protocol* (controller I/O) lives behind the trait;
//! this crate owns only the deterministic parts: slot-to-multiplexer
//! routing and bus state checks.

mod bus;
mod error;
mod galaxy;

pub use bus::I2cBus;
pub use error::{I2cError, I2cResult};
pub use galaxy::{mux_route, GalaxyI2cBus, MuxRoute};
