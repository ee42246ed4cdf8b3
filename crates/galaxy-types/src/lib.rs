//! Common types for the Galaxy switch platform layer.
//!
//! This crate provides type-safe representations of the identifiers used
//! when wiring a Galaxy board's physical ports into the switch agent:
//!
//! - [`PortId`]: logical port identifiers
//! - [`HwPortId`]: low-level ASIC port numbers
//! - [`TransceiverId`]: front-panel transceiver slots
//! - [`ChannelId`]: lane index within a 4-lane quad
//! - [`PlatformMode`]: board variants of the chassis family

mod mode;
mod port;

pub use mode::PlatformMode;
pub use port::{ChannelId, HwPortId, PortId, TransceiverId};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid platform mode: {0}")]
    InvalidPlatformMode(String),

    #[error("invalid channel index: {0} (must be 0-3)")]
    InvalidChannelId(u8),

    #[error("invalid port number: {0}")]
    InvalidPortId(String),

    #[error("invalid transceiver slot: {0}")]
    InvalidTransceiverId(String),
}
