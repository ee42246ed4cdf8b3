//! Galaxy board I2C bus implementation.

use log::{debug, trace};

use crate::bus::I2cBus;
use crate::error::{I2cError, I2cResult};
use galaxy_types::TransceiverId;

/// I2C address of the PCA9548 in front of transceiver slots 0-7.
const MUX_ADDR_LOW: u8 = 0x70;

/// I2C address of the PCA9548 in front of transceiver slots 8-15.
const MUX_ADDR_HIGH: u8 = 0x71;

/// Channels per PCA9548 multiplexer.
const MUX_CHANNELS: u32 = 8;

/// Highest transceiver slot reachable through the multiplexers.
const MAX_TRANSCEIVER: u32 = 15;

/// Multiplexer routing for one transceiver slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuxRoute {
    /// I2C address of the PCA9548 in front of the slot.
    pub address: u8,
    /// Channel to enable on that multiplexer (0-7).
    pub channel: u8,
}

/// Resolves a transceiver slot to its multiplexer route.
///
/// Slots 0-7 sit behind the PCA9548 at 0x70, slots 8-15 behind the one at
/// 0x71, one slot per channel.
///
/// # Errors
///
/// Returns [`I2cError::InvalidTransceiver`] for slots beyond the 16 the
/// board wires up.
pub fn mux_route(slot: TransceiverId) -> I2cResult<MuxRoute> {
    let n = slot.as_u32();
    if n > MAX_TRANSCEIVER {
        return Err(I2cError::InvalidTransceiver {
            slot: n,
            max: MAX_TRANSCEIVER,
        });
    }
    let address = if n < MUX_CHANNELS {
        MUX_ADDR_LOW
    } else {
        MUX_ADDR_HIGH
    };
    Ok(MuxRoute {
        address,
        channel: (n % MUX_CHANNELS) as u8,
    })
}

/// I2C bus of the Galaxy board family.
///
/// Transceiver access is routed through two PCA9548 multiplexers. The
/// controller handle itself is bound when the bus is opened; every
/// operation on an unopened bus fails with [`I2cError::NotOpen`] rather
/// than touching hardware. Construction never fails.
#[derive(Debug, Default)]
pub struct GalaxyI2cBus {
    open: bool,
    selected: Option<MuxRoute>,
}

impl GalaxyI2cBus {
    /// Creates a new, unopened Galaxy bus handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once `open` has succeeded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The multiplexer route of the currently selected transceiver.
    pub fn selected_route(&self) -> Option<MuxRoute> {
        self.selected
    }

    fn require_open(&self) -> I2cResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(I2cError::NotOpen { bus: self.name() })
        }
    }

    fn require_selected(&self) -> I2cResult<MuxRoute> {
        self.require_open()?;
        self.selected
            .ok_or(I2cError::NoTransceiverSelected { bus: self.name() })
    }
}

impl I2cBus for GalaxyI2cBus {
    fn name(&self) -> &'static str {
        "GalaxyI2CBus"
    }

    fn open(&mut self) -> I2cResult<()> {
        if !self.open {
            debug!("opening {}", self.name());
            self.open = true;
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            debug!("closing {}", self.name());
        }
        self.open = false;
        self.selected = None;
    }

    fn select_transceiver(&mut self, slot: TransceiverId) -> I2cResult<()> {
        self.require_open()?;
        let route = mux_route(slot)?;
        if self.selected != Some(route) {
            debug!(
                "{}: selecting transceiver {} (mux 0x{:02x} channel {})",
                self.name(),
                slot,
                route.address,
                route.channel
            );
            self.selected = Some(route);
        }
        Ok(())
    }

    fn read(&mut self, addr: u8, offset: u8, buf: &mut [u8]) -> I2cResult<()> {
        let route = self.require_selected()?;
        trace!(
            "{}: read {} bytes from 0x{:02x}@{} via mux 0x{:02x}",
            self.name(),
            buf.len(),
            addr,
            offset,
            route.address
        );
        // TODO: issue the transfer once the CP2112 controller binding lands.
        buf.fill(0);
        Ok(())
    }

    fn write(&mut self, addr: u8, offset: u8, buf: &[u8]) -> I2cResult<()> {
        let route = self.require_selected()?;
        trace!(
            "{}: write {} bytes to 0x{:02x}@{} via mux 0x{:02x}",
            self.name(),
            buf.len(),
            addr,
            offset,
            route.address
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mux_route_low_bank() {
        let route = mux_route(TransceiverId::new(3)).unwrap();
        assert_eq!(route.address, 0x70);
        assert_eq!(route.channel, 3);
    }

    #[test]
    fn test_mux_route_high_bank() {
        let route = mux_route(TransceiverId::new(11)).unwrap();
        assert_eq!(route.address, 0x71);
        assert_eq!(route.channel, 3);
    }

    #[test]
    fn test_mux_route_out_of_range() {
        assert!(mux_route(TransceiverId::new(16)).is_err());
    }

    #[test]
    fn test_bus_requires_open() {
        let mut bus = GalaxyI2cBus::new();
        assert!(!bus.is_open());
        assert!(matches!(
            bus.select_transceiver(TransceiverId::new(0)),
            Err(I2cError::NotOpen { .. })
        ));
    }

    #[test]
    fn test_bus_requires_selection() {
        let mut bus = GalaxyI2cBus::new();
        bus.open().unwrap();

        let mut buf = [0u8; 2];
        assert!(matches!(
            bus.read(0x50, 0, &mut buf),
            Err(I2cError::NoTransceiverSelected { .. })
        ));
    }

    #[test]
    fn test_select_then_read() {
        let mut bus = GalaxyI2cBus::new();
        bus.open().unwrap();
        bus.select_transceiver(TransceiverId::new(9)).unwrap();
        assert_eq!(
            bus.selected_route(),
            Some(MuxRoute {
                address: 0x71,
                channel: 1
            })
        );

        let mut buf = [0u8; 4];
        bus.read(0x50, 0, &mut buf).unwrap();
    }

    #[test]
    fn test_close_clears_selection() {
        let mut bus = GalaxyI2cBus::new();
        bus.open().unwrap();
        bus.select_transceiver(TransceiverId::new(0)).unwrap();
        bus.close();
        assert!(!bus.is_open());
        assert_eq!(bus.selected_route(), None);
    }
}
