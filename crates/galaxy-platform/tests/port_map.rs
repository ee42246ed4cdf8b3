//! End-to-end checks of the Galaxy port map against the board tables.

use std::collections::BTreeSet;

use galaxy_platform::{
    backplane_ports, front_panel_mapping, GalaxyPlatform, NUM_FRONT_PANEL_PORTS,
};
use galaxy_types::{ChannelId, HwPortId, PlatformMode, PortId, TransceiverId};

#[test]
fn line_card_front_panel_table_is_complete() {
    let mapping = front_panel_mapping(PlatformMode::GalaxyLc);
    assert_eq!(mapping.len(), NUM_FRONT_PANEL_PORTS);

    let slots: BTreeSet<TransceiverId> = mapping.iter().map(|&(slot, _)| slot).collect();
    let expected: BTreeSet<TransceiverId> =
        (0..NUM_FRONT_PANEL_PORTS as u32).map(TransceiverId::new).collect();
    assert_eq!(slots, expected);

    let starts: BTreeSet<PortId> = mapping.iter().map(|&(_, start)| start).collect();
    assert_eq!(starts.len(), NUM_FRONT_PANEL_PORTS);
}

#[test]
fn fabric_card_has_no_front_panel_ports() {
    assert!(front_panel_mapping(PlatformMode::GalaxyFc).is_empty());
    assert_eq!(backplane_ports(PlatformMode::GalaxyFc).len(), 32);
}

#[test]
fn line_card_port_map_has_128_ports() {
    let mut platform = GalaxyPlatform::new(PlatformMode::GalaxyLc);
    let map = platform.init_ports();

    assert_eq!(map.len(), 128);
    assert_eq!(platform.ports().len(), 128);

    let front_panel = map.values().filter(|p| !p.is_backplane()).count();
    let backplane = map.values().filter(|p| p.is_backplane()).count();
    assert_eq!(front_panel, 64);
    assert_eq!(backplane, 64);
}

#[test]
fn fabric_card_port_map_has_128_backplane_ports() {
    let mut platform = GalaxyPlatform::new(PlatformMode::GalaxyFc);
    let map = platform.init_ports();

    assert_eq!(map.len(), 128);
    assert!(map.values().all(|p| p.is_backplane()));
    assert!(map.values().all(|p| p.transceiver().is_none()));
}

#[test]
fn every_port_has_valid_channel_and_consistent_flag() {
    for mode in [PlatformMode::GalaxyLc, PlatformMode::GalaxyFc] {
        let mut platform = GalaxyPlatform::new(mode);
        let map = platform.init_ports();

        for port in map.values() {
            assert!(port.channel().as_u8() <= ChannelId::MAX);
            assert_eq!(port.is_backplane(), port.transceiver().is_none());
        }
    }
}

#[test]
fn port_ids_are_unique_across_the_map() {
    for mode in [PlatformMode::GalaxyLc, PlatformMode::GalaxyFc] {
        let mut platform = GalaxyPlatform::new(mode);
        let map = platform.init_ports();

        // Map keys are hardware port numbers, unique by construction;
        // logical ids must not collide either.
        let ids: BTreeSet<PortId> = map.values().map(|p| p.id()).collect();
        assert_eq!(ids.len(), map.len(), "duplicate logical port id for {}", mode);
    }
}

#[test]
fn slot_zero_maps_to_quad_at_84() {
    let mut platform = GalaxyPlatform::new(PlatformMode::GalaxyLc);
    let map = platform.init_ports();

    for (channel, num) in [84u32, 85, 86, 87].into_iter().enumerate() {
        let port = map
            .get(&HwPortId::new(num))
            .unwrap_or_else(|| panic!("hardware port {} missing from map", num));
        assert_eq!(port.id(), PortId::new(num));
        assert_eq!(port.channel().as_u8() as usize, channel);
        assert_eq!(port.transceiver(), Some(TransceiverId::new(0)));
        assert!(!port.is_backplane());
    }
}

#[test]
fn owned_collection_matches_returned_map() {
    let mut platform = GalaxyPlatform::new(PlatformMode::GalaxyLc);
    let map = platform.init_ports();

    for port in map.values() {
        assert_eq!(platform.port(port.id()), Some(port));
    }
}

#[test]
fn i2c_bus_is_the_galaxy_bus() {
    let platform = GalaxyPlatform::new(PlatformMode::GalaxyFc);
    assert_eq!(platform.i2c_bus().name(), "GalaxyI2CBus");
}

#[test]
#[should_panic(expected = "unhandled platform mode")]
fn wedge40_is_fatal_at_construction() {
    GalaxyPlatform::new(PlatformMode::Wedge40);
}

#[test]
#[should_panic(expected = "unhandled platform mode")]
fn wedge100_is_fatal_at_construction() {
    GalaxyPlatform::new(PlatformMode::Wedge100);
}

#[test]
#[should_panic(expected = "unhandled platform mode")]
fn wedge40_is_fatal_at_table_selection() {
    front_panel_mapping(PlatformMode::Wedge40);
}

#[test]
#[should_panic(expected = "unhandled platform mode")]
fn wedge100_is_fatal_at_backplane_selection() {
    backplane_ports(PlatformMode::Wedge100);
}
