// SPDX-License-Identifier: Apache-2.0
//
// Control Discovery Tests
//
// TESTING LAYERS:
//
// Layer 1 (Unit Tests - No hardware required):
//   - Catalog integrity (names, bit gates, shared-buffer layouts)
//   - GUID rendering for vendor extension units
//   - Topology matching (present unit, absent unit, clear bit)
//   - Status code and errno mapping
//
// Layer 2 (Hardware Integration - Requires libuvc + a UVC camera):
//   - see tests/device_lifecycle.rs
//
// RUN LAYER 1:
//   cargo test --test control_discovery

use std::collections::BTreeMap;
use uvcstream::catalog::{
    guid_string, ControlSpec, UnitCaps, UnitKind, UnitTopology, ValueDomain, CONTROL_CATALOG,
};
use uvcstream::{Error, Status};

// -----------------------------------------------------------------------------
// Catalog integrity
// -----------------------------------------------------------------------------

#[test]
fn catalog_is_not_empty() {
    assert!(CONTROL_CATALOG.len() >= 20);
}

#[test]
fn catalog_covers_both_standard_units() {
    assert!(CONTROL_CATALOG
        .iter()
        .any(|spec| spec.unit == UnitKind::InputTerminal));
    assert!(CONTROL_CATALOG
        .iter()
        .any(|spec| spec.unit == UnitKind::ProcessingUnit));
}

#[test]
fn catalog_bit_gates_fit_a_u64_bitmask() {
    for spec in CONTROL_CATALOG {
        assert!(spec.bit < 64, "{}: bit {} out of range", spec.name, spec.bit);
        assert_eq!(spec.mask(), 1u64 << spec.bit);
    }
}

#[test]
fn catalog_fields_fit_their_transfer_buffers() {
    for spec in CONTROL_CATALOG {
        let transfer = spec
            .transfer_len
            .expect("every standard catalog entry declares a fallback length");
        assert!(
            spec.offset + spec.len <= transfer,
            "{}: field {}+{} exceeds transfer {}",
            spec.name,
            spec.offset,
            spec.len,
            transfer
        );
    }
}

#[test]
fn pan_and_tilt_share_one_transfer_block() {
    let pan = find_spec("Absolute Pan");
    let tilt = find_spec("Absolute Tilt");
    assert_eq!(pan.selector, tilt.selector);
    assert_eq!(pan.bit, tilt.bit);
    assert_eq!(pan.transfer_len, tilt.transfer_len);
    // Disjoint fields of the shared eight-byte block.
    assert_eq!(pan.offset, 0);
    assert_eq!(tilt.offset, pan.len);
}

#[test]
fn menu_domains_declare_their_codes() {
    let spec = find_spec("Power Line Frequency");
    match spec.domain {
        ValueDomain::Menu(entries) => {
            assert!(entries.contains(&("50Hz", 1)));
            assert!(entries.contains(&("60Hz", 2)));
        }
        other => panic!("expected menu domain, got {:?}", other),
    }
}

fn find_spec(name: &str) -> &'static ControlSpec {
    CONTROL_CATALOG
        .iter()
        .find(|spec| spec.name == name)
        .unwrap_or_else(|| panic!("catalog entry '{}' missing", name))
}

// -----------------------------------------------------------------------------
// GUID rendering
// -----------------------------------------------------------------------------

#[test]
fn guid_renders_canonical_hyphen_groups() {
    let guid: [u8; 16] = [
        0x3a, 0x2f, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
        0x0d,
    ];
    let rendered = guid_string(&guid);
    assert_eq!(rendered, "3a2f0001-0203-0405-0607-08090a0b0c0d");

    // 8-4-4-4-12 hex digit groups.
    let groups: Vec<&str> = rendered.split('-').collect();
    assert_eq!(
        groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
        [8, 4, 4, 4, 12]
    );
    assert!(groups
        .iter()
        .all(|group| group.bytes().all(|b| b.is_ascii_hexdigit())));
}

// -----------------------------------------------------------------------------
// Topology matching
// -----------------------------------------------------------------------------

fn brightness_only_topology() -> UnitTopology {
    UnitTopology {
        processing_unit: Some(UnitCaps {
            id: 2,
            controls: 1 << 0,
        }),
        ..Default::default()
    }
}

#[test]
fn set_bit_yields_bound_candidate() {
    let topo = brightness_only_topology();
    let eligible: Vec<_> = topo.eligible().collect();
    assert_eq!(eligible.len(), 1);
    let (spec, unit_id) = eligible[0];
    assert_eq!(spec.name, "Brightness");
    assert_eq!(unit_id, 2);
}

#[test]
fn clear_bits_and_absent_units_are_skipped() {
    // No input terminal at all, and a processing unit advertising nothing.
    let topo = UnitTopology {
        processing_unit: Some(UnitCaps { id: 2, controls: 0 }),
        ..Default::default()
    };
    assert_eq!(topo.eligible().count(), 0);
}

#[test]
fn extension_unit_lookup_by_guid() {
    let guid = guid_string(&[0xde; 16]);
    let mut extension_units = BTreeMap::new();
    extension_units.insert(guid.clone(), UnitCaps { id: 8, controls: 1 });
    let topo = UnitTopology {
        extension_units,
        ..Default::default()
    };

    let key: &'static str = Box::leak(guid.into_boxed_str());
    assert!(topo.resolve(&UnitKind::Extension(key)).is_some());
    assert!(topo
        .resolve(&UnitKind::Extension("00000000-0000-0000-0000-000000000000"))
        .is_none());
}

// -----------------------------------------------------------------------------
// Status mapping
// -----------------------------------------------------------------------------

#[test]
fn timeout_status_maps_to_etimedout() {
    // -7 is the native timeout status.
    assert_eq!(Status::from_raw(-7).errno(), Some(110));
}

#[test]
fn non_success_status_is_a_driver_error() {
    match Status::check(-9) {
        Err(Error::Driver(status)) => {
            assert_eq!(status.code(), -9);
            assert_eq!(status.errno(), Some(32));
        }
        other => panic!("expected driver error, got {:?}", other),
    }
}

#[test]
fn success_status_is_ok() {
    assert!(Status::check(0).is_ok());
}
