//! Hardcoded port tables for the Galaxy board family.
//!
//! Each entry names the starting low-level port number of a 4-lane quad.
//! Front-panel quads carry the transceiver slot they belong to; backplane
//! quads have none. Which pair of tables applies depends only on whether
//! the board is a line card or a fabric card.

use galaxy_types::{PlatformMode, PortId, TransceiverId};
use tracing::error;

/// Front-panel transceiver slots on a Galaxy line card.
pub const NUM_FRONT_PANEL_PORTS: usize = 16;

/// Line-card front-panel mapping: transceiver slot to quad start.
pub const LC_FRONT_PANEL_MAPPING: [(TransceiverId, PortId); NUM_FRONT_PANEL_PORTS] = [
    (TransceiverId::new(0), PortId::new(84)),
    (TransceiverId::new(1), PortId::new(88)),
    (TransceiverId::new(2), PortId::new(92)),
    (TransceiverId::new(3), PortId::new(96)),
    (TransceiverId::new(4), PortId::new(102)),
    (TransceiverId::new(5), PortId::new(106)),
    (TransceiverId::new(6), PortId::new(110)),
    (TransceiverId::new(7), PortId::new(114)),
    (TransceiverId::new(8), PortId::new(118)),
    (TransceiverId::new(9), PortId::new(122)),
    (TransceiverId::new(10), PortId::new(126)),
    (TransceiverId::new(11), PortId::new(130)),
    (TransceiverId::new(12), PortId::new(1)),
    (TransceiverId::new(13), PortId::new(5)),
    (TransceiverId::new(14), PortId::new(9)),
    (TransceiverId::new(15), PortId::new(13)),
];

/// Fabric cards expose no user-facing transceivers.
pub const FC_FRONT_PANEL_MAPPING: [(TransceiverId, PortId); 0] = [];

/// Line-card backplane quad starts.
pub const LC_BACKPLANE_PORTS: [PortId; 16] = [
    PortId::new(68),
    PortId::new(72),
    PortId::new(76),
    PortId::new(80),
    PortId::new(50),
    PortId::new(54),
    PortId::new(58),
    PortId::new(62),
    PortId::new(34),
    PortId::new(38),
    PortId::new(42),
    PortId::new(46),
    PortId::new(17),
    PortId::new(21),
    PortId::new(25),
    PortId::new(29),
];

/// Fabric-card backplane quad starts.
pub const FC_BACKPLANE_PORTS: [PortId; 32] = [
    PortId::new(72),
    PortId::new(76),
    PortId::new(68),
    PortId::new(80),
    PortId::new(62),
    PortId::new(58),
    PortId::new(54),
    PortId::new(50),
    PortId::new(110),
    PortId::new(106),
    PortId::new(102),
    PortId::new(114),
    PortId::new(96),
    PortId::new(92),
    PortId::new(84),
    PortId::new(88),
    PortId::new(5),
    PortId::new(9),
    PortId::new(1),
    PortId::new(13),
    PortId::new(130),
    PortId::new(118),
    PortId::new(122),
    PortId::new(126),
    PortId::new(42),
    PortId::new(38),
    PortId::new(29),
    PortId::new(46),
    PortId::new(34),
    PortId::new(21),
    PortId::new(25),
    PortId::new(17),
];

/// Returns the front-panel mapping for the given board variant.
///
/// # Panics
///
/// Panics for any variant outside the Galaxy family. There is no valid
/// partial mapping for unknown hardware, so this is a fatal
/// misconfiguration rather than a recoverable error.
pub fn front_panel_mapping(mode: PlatformMode) -> &'static [(TransceiverId, PortId)] {
    match mode {
        PlatformMode::GalaxyLc => &LC_FRONT_PANEL_MAPPING,
        PlatformMode::GalaxyFc => &FC_FRONT_PANEL_MAPPING,
        other => {
            error!("unhandled platform mode {} on Galaxy", other);
            panic!("unhandled platform mode {} on Galaxy", other);
        }
    }
}

/// Returns the backplane quad starts for the given board variant.
///
/// # Panics
///
/// Panics for any variant outside the Galaxy family, like
/// [`front_panel_mapping`].
pub fn backplane_ports(mode: PlatformMode) -> &'static [PortId] {
    match mode {
        PlatformMode::GalaxyLc => &LC_BACKPLANE_PORTS,
        PlatformMode::GalaxyFc => &FC_BACKPLANE_PORTS,
        other => {
            error!("unhandled platform mode {} on Galaxy", other);
            panic!("unhandled platform mode {} on Galaxy", other);
        }
    }
}
