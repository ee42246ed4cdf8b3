//! Platform construction and port-map initialization.

use std::collections::BTreeMap;

use galaxy_i2c::{GalaxyI2cBus, I2cBus};
use galaxy_types::{ChannelId, HwPortId, PlatformMode, PortId, TransceiverId};
use tracing::{error, info};

use crate::port::GalaxyPort;
use crate::tables;

/// Mapping from low-level hardware port number to its logical port record,
/// as handed to the switch agent at start-up.
pub type InitPortMap = BTreeMap<HwPortId, GalaxyPort>;

/// The Galaxy board platform.
///
/// Owns the logical port collection for the process lifetime. Construction
/// fixes the board variant; [`GalaxyPlatform::init_ports`] populates the
/// collection exactly once, after which the rest of the system treats it
/// as read-only.
pub struct GalaxyPlatform {
    mode: PlatformMode,
    num_front_panel_ports: usize,
    ports: BTreeMap<PortId, GalaxyPort>,
}

impl GalaxyPlatform {
    /// Creates the platform object for a Galaxy board.
    ///
    /// # Panics
    ///
    /// Panics if `mode` is not a Galaxy variant. An unknown board variant
    /// has no valid partial behavior, so this terminates rather than
    /// constructing a half-configured platform.
    pub fn new(mode: PlatformMode) -> Self {
        if !mode.is_galaxy() {
            error!("unhandled platform mode {} on Galaxy", mode);
            panic!("unhandled platform mode {} on Galaxy", mode);
        }
        let num_front_panel_ports = if mode.is_line_card() {
            tables::NUM_FRONT_PANEL_PORTS
        } else {
            0
        };
        Self {
            mode,
            num_front_panel_ports,
            ports: BTreeMap::new(),
        }
    }

    /// The board variant this platform was constructed for.
    pub fn mode(&self) -> PlatformMode {
        self.mode
    }

    /// Number of user-facing transceiver slots on this board.
    pub fn num_front_panel_ports(&self) -> usize {
        self.num_front_panel_ports
    }

    /// Expands every quad of the board variant into logical ports.
    ///
    /// Front-panel quads are processed first, then backplane quads, each
    /// in table order. Every generated port is registered under its
    /// hardware port number in the returned map and inserted into the
    /// platform's owned port collection. Called once at platform start-up.
    pub fn init_ports(&mut self) -> InitPortMap {
        debug_assert!(self.ports.is_empty(), "init_ports called twice");

        let mut map = InitPortMap::new();

        for &(slot, start) in tables::front_panel_mapping(self.mode) {
            self.add_quad(&mut map, start, Some(slot));
        }
        for &start in tables::backplane_ports(self.mode) {
            // Backplane lanes are grouped in quads as well; in practice
            // all four lanes serve a single port.
            self.add_quad(&mut map, start, None);
        }

        info!(
            "initialized {} logical ports for {}",
            map.len(),
            self.mode
        );
        map
    }

    /// Expands the 4-lane quad starting at `start` into logical ports with
    /// channel indices 0-3.
    fn add_quad(
        &mut self,
        map: &mut InitPortMap,
        start: PortId,
        transceiver: Option<TransceiverId>,
    ) {
        for channel in ChannelId::ALL {
            let id = start.offset(channel.as_u8() as u32);
            let port = GalaxyPort::new(id, transceiver, channel);
            map.insert(HwPortId::from(id), port);
            self.ports.insert(id, port);
        }
    }

    /// The I2C bus used to reach this platform's transceivers.
    pub fn i2c_bus(&self) -> Box<dyn I2cBus> {
        Box::new(GalaxyI2cBus::new())
    }

    /// The platform's owned port collection.
    pub fn ports(&self) -> &BTreeMap<PortId, GalaxyPort> {
        &self.ports
    }

    /// Looks up one logical port by its identifier.
    pub fn port(&self, id: PortId) -> Option<&GalaxyPort> {
        self.ports.get(&id)
    }
}
