//! The logical port record produced by platform initialization.

use std::fmt;

use galaxy_types::{ChannelId, PortId, TransceiverId};
use serde::Serialize;

/// One logical port on a Galaxy board.
///
/// Four of these are fanned out per physical quad. Front-panel ports carry
/// the transceiver slot they are cabled to; backplane ports have none, so
/// the backplane flag is derived from slot absence and cannot disagree
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalaxyPort {
    id: PortId,
    transceiver: Option<TransceiverId>,
    channel: ChannelId,
}

impl GalaxyPort {
    /// Creates a logical port record.
    pub const fn new(id: PortId, transceiver: Option<TransceiverId>, channel: ChannelId) -> Self {
        Self {
            id,
            transceiver,
            channel,
        }
    }

    /// The logical port identifier.
    pub const fn id(&self) -> PortId {
        self.id
    }

    /// The owning front-panel transceiver slot, if any.
    pub const fn transceiver(&self) -> Option<TransceiverId> {
        self.transceiver
    }

    /// The lane index of this port within its quad.
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    /// True for ports wired to the chassis backplane rather than a
    /// front-panel transceiver.
    pub const fn is_backplane(&self) -> bool {
        self.transceiver.is_none()
    }
}

impl fmt::Display for GalaxyPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.transceiver {
            Some(slot) => write!(
                f,
                "Port({}, slot={}, channel={})",
                self.id, slot, self.channel
            ),
            None => write!(f, "Port({}, backplane, channel={})", self.id, self.channel),
        }
    }
}
