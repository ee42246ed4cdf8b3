//! Port identifier types for the Galaxy platform layer.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical port identifier.
///
/// Identifies one logical port object in the switch agent's port
/// collection. On Galaxy boards each 4-lane quad expands into four
/// consecutive logical ports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PortId(u32);

impl PortId {
    /// Creates a new logical port identifier.
    pub const fn new(id: u32) -> Self {
        PortId(id)
    }

    /// Returns the identifier as a u32.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the identifier `delta` lanes after this one.
    pub const fn offset(self, delta: u32) -> Self {
        PortId(self.0 + delta)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u32 = s
            .parse()
            .map_err(|_| ParseError::InvalidPortId(s.to_string()))?;
        Ok(PortId(id))
    }
}

impl From<u32> for PortId {
    fn from(id: u32) -> Self {
        PortId(id)
    }
}

impl From<PortId> for u32 {
    fn from(id: PortId) -> u32 {
        id.0
    }
}

/// Low-level hardware port number, as the switching ASIC numbers its ports.
///
/// On the Galaxy board family this is numerically equal to the logical
/// [`PortId`], but the two identify different things (an ASIC lane group
/// versus a port object) and are kept as distinct types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HwPortId(u32);

impl HwPortId {
    /// Creates a new hardware port number.
    pub const fn new(num: u32) -> Self {
        HwPortId(num)
    }

    /// Returns the port number as a u32.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HwPortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PortId> for HwPortId {
    fn from(id: PortId) -> Self {
        HwPortId(id.as_u32())
    }
}

impl From<HwPortId> for u32 {
    fn from(num: HwPortId) -> u32 {
        num.0
    }
}

/// Front-panel transceiver slot identifier.
///
/// Numbers the user-facing QSFP cages on a line card. Backplane ports have
/// no transceiver slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransceiverId(u32);

impl TransceiverId {
    /// Creates a new transceiver slot identifier.
    pub const fn new(slot: u32) -> Self {
        TransceiverId(slot)
    }

    /// Returns the slot number as a u32.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransceiverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransceiverId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slot: u32 = s
            .parse()
            .map_err(|_| ParseError::InvalidTransceiverId(s.to_string()))?;
        Ok(TransceiverId(slot))
    }
}

impl From<TransceiverId> for u32 {
    fn from(slot: TransceiverId) -> u32 {
        slot.0
    }
}

/// Lane index within a 4-lane quad (0-3).
///
/// # Examples
///
/// ```
/// use galaxy_types::ChannelId;
///
/// let ch = ChannelId::new(2).unwrap();
/// assert_eq!(ch.as_u8(), 2);
///
/// // Channel indices beyond the quad are rejected
/// assert!(ChannelId::new(4).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChannelId(u8);

impl ChannelId {
    /// Highest valid channel index.
    pub const MAX: u8 = 3;

    /// Number of channels in a quad.
    pub const COUNT: usize = 4;

    /// The four channels of a quad, in lane order.
    pub const ALL: [ChannelId; Self::COUNT] =
        [ChannelId(0), ChannelId(1), ChannelId(2), ChannelId(3)];

    /// Creates a new channel index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not in the valid range (0-3).
    pub const fn new(idx: u8) -> Result<Self, ParseError> {
        if idx <= Self::MAX {
            Ok(ChannelId(idx))
        } else {
            Err(ParseError::InvalidChannelId(idx))
        }
    }

    /// Returns the channel index as a u8.
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ChannelId {
    type Error = ParseError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        ChannelId::new(idx)
    }
}

impl From<ChannelId> for u8 {
    fn from(ch: ChannelId) -> u8 {
        ch.0
    }
}
