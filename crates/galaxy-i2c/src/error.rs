//! Error types for I2C bus operations.

use thiserror::Error;

/// Result type alias for I2C bus operations.
pub type I2cResult<T> = Result<T, I2cError>;

/// Errors that can occur when driving a transceiver I2C bus.
#[derive(Debug, Error)]
pub enum I2cError {
    /// The bus controller has not been opened.
    #[error("I2C bus '{bus}' is not open")]
    NotOpen {
        /// Name of the bus.
        bus: &'static str,
    },

    /// A read or write was issued before selecting a transceiver.
    #[error("no transceiver selected on I2C bus '{bus}'")]
    NoTransceiverSelected {
        /// Name of the bus.
        bus: &'static str,
    },

    /// The transceiver slot is not reachable on this bus.
    #[error("transceiver slot {slot} out of range (0-{max})")]
    InvalidTransceiver {
        /// The requested slot.
        slot: u32,
        /// Highest slot the bus can route to.
        max: u32,
    },

    /// The underlying bus controller reported an error.
    #[error("I2C device error: {0}")]
    Device(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = I2cError::NotOpen { bus: "GalaxyI2CBus" };
        assert_eq!(err.to_string(), "I2C bus 'GalaxyI2CBus' is not open");

        let err = I2cError::InvalidTransceiver { slot: 16, max: 15 };
        assert_eq!(err.to_string(), "transceiver slot 16 out of range (0-15)");
    }
}
