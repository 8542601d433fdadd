// SPDX-License-Identifier: Apache-2.0

//! Static catalog of standard UVC hardware controls.
//!
//! Each entry declares which hardware unit a control lives on, the bit in
//! that unit's capability bitmask that gates whether the control is present
//! on a given device, and the decode/encode parameters for its value. The
//! catalog is matched against a device's discovered unit topology when the
//! device is opened; see [`UnitTopology::eligible`].

use std::collections::BTreeMap;
use uvcstream_sys as ffi;

/// The hardware functional block a control belongs to.
///
/// Unit ids are per-device; the catalog only names the category (or, for
/// vendor extension units, the 128-bit GUID) and the numeric id is resolved
/// from the device topology at discovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    InputTerminal,
    ProcessingUnit,
    /// Vendor extension unit, keyed by its canonical hyphenated GUID string.
    Extension(&'static str),
}

/// Decoded value domain of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    Boolean,
    Integer,
    /// Enumerated mapping of symbolic name to integer code.
    Menu(&'static [(&'static str, i64)]),
}

/// One static control descriptor.
///
/// `min`/`max`/`step`/`default` are fallbacks: a bound control always asks
/// the device first and only uses the catalog value when the native query
/// fails. `transfer_len` plays the same role for the `GET_LEN` request.
#[derive(Debug, Clone, Copy)]
pub struct ControlSpec {
    pub name: &'static str,
    pub unit: UnitKind,
    pub selector: u8,
    /// Bit position in the owning unit's capability bitmask.
    pub bit: u32,
    /// Byte offset of this control's field inside the transfer buffer.
    pub offset: usize,
    /// Byte length of this control's field.
    pub len: usize,
    /// Fallback transfer buffer length for when `GET_LEN` fails.
    pub transfer_len: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub step: Option<i64>,
    pub default: Option<i64>,
    pub domain: ValueDomain,
}

impl ControlSpec {
    /// Capability bitmask with only this control's gate bit set.
    pub fn mask(&self) -> u64 {
        1u64 << self.bit
    }
}

const CT_SCANNING_MODE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_SCANNING_MODE_CONTROL as u8;
const CT_AE_MODE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_AE_MODE_CONTROL as u8;
const CT_AE_PRIORITY: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_AE_PRIORITY_CONTROL as u8;
const CT_EXPOSURE_TIME_ABSOLUTE: u8 =
    ffi::uvc_ct_ctrl_selector_UVC_CT_EXPOSURE_TIME_ABSOLUTE_CONTROL as u8;
const CT_FOCUS_ABSOLUTE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_FOCUS_ABSOLUTE_CONTROL as u8;
const CT_FOCUS_AUTO: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_FOCUS_AUTO_CONTROL as u8;
const CT_IRIS_ABSOLUTE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_IRIS_ABSOLUTE_CONTROL as u8;
const CT_ZOOM_ABSOLUTE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_ZOOM_ABSOLUTE_CONTROL as u8;
const CT_PANTILT_ABSOLUTE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_PANTILT_ABSOLUTE_CONTROL as u8;
const CT_ROLL_ABSOLUTE: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_ROLL_ABSOLUTE_CONTROL as u8;
const CT_PRIVACY: u8 = ffi::uvc_ct_ctrl_selector_UVC_CT_PRIVACY_CONTROL as u8;

const PU_BACKLIGHT_COMPENSATION: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_BACKLIGHT_COMPENSATION_CONTROL as u8;
const PU_BRIGHTNESS: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_BRIGHTNESS_CONTROL as u8;
const PU_CONTRAST: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_CONTRAST_CONTROL as u8;
const PU_GAIN: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_GAIN_CONTROL as u8;
const PU_POWER_LINE_FREQUENCY: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_POWER_LINE_FREQUENCY_CONTROL as u8;
const PU_HUE: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_HUE_CONTROL as u8;
const PU_SATURATION: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_SATURATION_CONTROL as u8;
const PU_SHARPNESS: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_SHARPNESS_CONTROL as u8;
const PU_GAMMA: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_GAMMA_CONTROL as u8;
const PU_WB_TEMPERATURE: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_WHITE_BALANCE_TEMPERATURE_CONTROL as u8;
const PU_WB_TEMPERATURE_AUTO: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_WHITE_BALANCE_TEMPERATURE_AUTO_CONTROL as u8;
const PU_WB_COMPONENT: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_WHITE_BALANCE_COMPONENT_CONTROL as u8;
const PU_WB_COMPONENT_AUTO: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_WHITE_BALANCE_COMPONENT_AUTO_CONTROL as u8;
const PU_DIGITAL_MULTIPLIER: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_DIGITAL_MULTIPLIER_CONTROL as u8;
const PU_DIGITAL_MULTIPLIER_LIMIT: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_DIGITAL_MULTIPLIER_LIMIT_CONTROL as u8;
const PU_HUE_AUTO: u8 = ffi::uvc_pu_ctrl_selector_UVC_PU_HUE_AUTO_CONTROL as u8;
const PU_ANALOG_VIDEO_STANDARD: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_ANALOG_VIDEO_STANDARD_CONTROL as u8;
const PU_ANALOG_LOCK_STATUS: u8 =
    ffi::uvc_pu_ctrl_selector_UVC_PU_ANALOG_LOCK_STATUS_CONTROL as u8;

const AE_MODE_MENU: &[(&str, i64)] = &[
    ("manual mode", 1),
    ("auto mode", 2),
    ("shutter priority mode", 4),
    ("aperture priority mode", 8),
];

const SCANNING_MODE_MENU: &[(&str, i64)] = &[("interlaced", 0), ("progressive", 1)];

const POWER_LINE_MENU: &[(&str, i64)] = &[("Disabled", 0), ("50Hz", 1), ("60Hz", 2)];

const ANALOG_VIDEO_STANDARD_MENU: &[(&str, i64)] = &[
    ("NTSC - 525/60", 1),
    ("PAL - 625/50", 2),
    ("SECAM - 625/50", 3),
    ("NTSC - 625/50", 4),
    ("PAL - 525/60", 5),
];

const ANALOG_LOCK_MENU: &[(&str, i64)] = &[
    ("Video decoder is locked", 0),
    ("Video decoder is not locked", 1),
];

/// Every standard control the binding knows how to discover and bind.
pub static CONTROL_CATALOG: &[ControlSpec] = &[
    ControlSpec {
        name: "Auto Exposure Mode",
        unit: UnitKind::InputTerminal,
        selector: CT_AE_MODE,
        bit: 1,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(1),
        max: Some(8),
        step: None,
        default: None,
        domain: ValueDomain::Menu(AE_MODE_MENU),
    },
    ControlSpec {
        name: "Auto Exposure Priority",
        unit: UnitKind::InputTerminal,
        selector: CT_AE_PRIORITY,
        bit: 2,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: Some(0),
        domain: ValueDomain::Boolean,
    },
    ControlSpec {
        name: "Absolute Exposure Time",
        unit: UnitKind::InputTerminal,
        selector: CT_EXPOSURE_TIME_ABSOLUTE,
        bit: 3,
        offset: 0,
        len: 4,
        transfer_len: Some(4),
        min: None,
        max: Some(500),
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Auto Focus",
        unit: UnitKind::InputTerminal,
        selector: CT_FOCUS_AUTO,
        bit: 17,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: None,
        domain: ValueDomain::Boolean,
    },
    ControlSpec {
        name: "Absolute Focus",
        unit: UnitKind::InputTerminal,
        selector: CT_FOCUS_ABSOLUTE,
        bit: 5,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Absolute Iris",
        unit: UnitKind::InputTerminal,
        selector: CT_IRIS_ABSOLUTE,
        bit: 7,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Scanning Mode",
        unit: UnitKind::InputTerminal,
        selector: CT_SCANNING_MODE,
        bit: 0,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: Some(0),
        domain: ValueDomain::Menu(SCANNING_MODE_MENU),
    },
    ControlSpec {
        name: "Absolute Zoom",
        unit: UnitKind::InputTerminal,
        selector: CT_ZOOM_ABSOLUTE,
        bit: 9,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    // Pan and Tilt share the PANTILT_ABSOLUTE selector and transfer buffer;
    // each field occupies four bytes of the eight-byte block.
    ControlSpec {
        name: "Absolute Pan",
        unit: UnitKind::InputTerminal,
        selector: CT_PANTILT_ABSOLUTE,
        bit: 11,
        offset: 0,
        len: 4,
        transfer_len: Some(8),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Absolute Tilt",
        unit: UnitKind::InputTerminal,
        selector: CT_PANTILT_ABSOLUTE,
        bit: 11,
        offset: 4,
        len: 4,
        transfer_len: Some(8),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Absolute Roll",
        unit: UnitKind::InputTerminal,
        selector: CT_ROLL_ABSOLUTE,
        bit: 13,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Privacy Shutter",
        unit: UnitKind::InputTerminal,
        selector: CT_PRIVACY,
        bit: 18,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: Some(0),
        domain: ValueDomain::Boolean,
    },
    ControlSpec {
        name: "Backlight Compensation",
        unit: UnitKind::ProcessingUnit,
        selector: PU_BACKLIGHT_COMPENSATION,
        bit: 8,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Brightness",
        unit: UnitKind::ProcessingUnit,
        selector: PU_BRIGHTNESS,
        bit: 0,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Contrast",
        unit: UnitKind::ProcessingUnit,
        selector: PU_CONTRAST,
        bit: 1,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Gain",
        unit: UnitKind::ProcessingUnit,
        selector: PU_GAIN,
        bit: 9,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Power Line Frequency",
        unit: UnitKind::ProcessingUnit,
        selector: PU_POWER_LINE_FREQUENCY,
        bit: 10,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(2),
        step: Some(1),
        default: None,
        domain: ValueDomain::Menu(POWER_LINE_MENU),
    },
    ControlSpec {
        name: "Hue",
        unit: UnitKind::ProcessingUnit,
        selector: PU_HUE,
        bit: 2,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Saturation",
        unit: UnitKind::ProcessingUnit,
        selector: PU_SATURATION,
        bit: 3,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Sharpness",
        unit: UnitKind::ProcessingUnit,
        selector: PU_SHARPNESS,
        bit: 4,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Gamma",
        unit: UnitKind::ProcessingUnit,
        selector: PU_GAMMA,
        bit: 5,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "White Balance Temperature",
        unit: UnitKind::ProcessingUnit,
        selector: PU_WB_TEMPERATURE,
        bit: 6,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    // Blue and red components share the WB_COMPONENT transfer buffer.
    ControlSpec {
        name: "White Balance Blue Component",
        unit: UnitKind::ProcessingUnit,
        selector: PU_WB_COMPONENT,
        bit: 7,
        offset: 0,
        len: 2,
        transfer_len: Some(4),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "White Balance Red Component",
        unit: UnitKind::ProcessingUnit,
        selector: PU_WB_COMPONENT,
        bit: 7,
        offset: 2,
        len: 2,
        transfer_len: Some(4),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "White Balance Temperature Auto",
        unit: UnitKind::ProcessingUnit,
        selector: PU_WB_TEMPERATURE_AUTO,
        bit: 12,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "White Balance Component Auto",
        unit: UnitKind::ProcessingUnit,
        selector: PU_WB_COMPONENT_AUTO,
        bit: 13,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Digital Multiplier",
        unit: UnitKind::ProcessingUnit,
        selector: PU_DIGITAL_MULTIPLIER,
        bit: 14,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Digital Multiplier Limit",
        unit: UnitKind::ProcessingUnit,
        selector: PU_DIGITAL_MULTIPLIER_LIMIT,
        bit: 15,
        offset: 0,
        len: 2,
        transfer_len: Some(2),
        min: None,
        max: None,
        step: None,
        default: None,
        domain: ValueDomain::Integer,
    },
    ControlSpec {
        name: "Analog Video Standard",
        unit: UnitKind::ProcessingUnit,
        selector: PU_ANALOG_VIDEO_STANDARD,
        bit: 16,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(255),
        step: Some(1),
        default: Some(0),
        domain: ValueDomain::Menu(ANALOG_VIDEO_STANDARD_MENU),
    },
    ControlSpec {
        name: "Analog Lock Status",
        unit: UnitKind::ProcessingUnit,
        selector: PU_ANALOG_LOCK_STATUS,
        bit: 17,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(255),
        step: Some(1),
        default: Some(0),
        domain: ValueDomain::Menu(ANALOG_LOCK_MENU),
    },
    ControlSpec {
        name: "Hue Auto",
        unit: UnitKind::ProcessingUnit,
        selector: PU_HUE_AUTO,
        bit: 11,
        offset: 0,
        len: 1,
        transfer_len: Some(1),
        min: Some(0),
        max: Some(1),
        step: Some(1),
        default: None,
        domain: ValueDomain::Integer,
    },
];

/// Renders a raw 16-byte extension unit GUID into the canonical hyphenated
/// form used to key vendor units: `8-4-4-4-12` hex-digit groups, lowercase.
pub fn guid_string(guid: &[u8; 16]) -> String {
    let hex: String = guid.iter().map(|byte| format!("{:02x}", byte)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Unit id and capability bitmask copied out of one descriptor node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCaps {
    pub id: u8,
    pub controls: u64,
}

/// Owned snapshot of a device's hardware unit topology.
///
/// Built by copying each descriptor node's id and capability bitmask during
/// traversal; no pointers into the native descriptor lists are retained.
#[derive(Debug, Clone, Default)]
pub struct UnitTopology {
    pub input_terminal: Option<UnitCaps>,
    pub processing_unit: Option<UnitCaps>,
    pub extension_units: BTreeMap<String, UnitCaps>,
}

impl UnitTopology {
    /// Looks up the unit a catalog entry belongs to, if this device has it.
    pub fn resolve(&self, unit: &UnitKind) -> Option<UnitCaps> {
        match unit {
            UnitKind::InputTerminal => self.input_terminal,
            UnitKind::ProcessingUnit => self.processing_unit,
            UnitKind::Extension(guid) => self.extension_units.get(*guid).copied(),
        }
    }

    /// Catalog entries whose owning unit exists on this device and whose
    /// capability bit is set, paired with the resolved unit id.
    ///
    /// Entries whose unit category is absent and entries whose bit is clear
    /// are skipped.
    pub fn eligible(&self) -> impl Iterator<Item = (&'static ControlSpec, u8)> + '_ {
        CONTROL_CATALOG.iter().filter_map(move |spec| {
            let caps = self.resolve(&spec.unit)?;
            if caps.controls & spec.mask() != 0 {
                Some((spec, caps.id))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_rendering() {
        let guid: [u8; 16] = [
            0x3a, 0x01, 0xab, 0xcd, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99,
            0xaa, 0xff,
        ];
        let s = guid_string(&guid);
        assert_eq!(s, "3a01abcd-0011-2233-4455-66778899aaff");
        // Fixed hyphen positions for the 8-4-4-4-12 groups.
        assert_eq!(s.len(), 36);
        for pos in [8, 13, 18, 23] {
            assert_eq!(s.as_bytes()[pos], b'-');
        }
    }

    #[test]
    fn guid_rendering_zeroes() {
        assert_eq!(
            guid_string(&[0u8; 16]),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = CONTROL_CATALOG.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn shared_buffer_entries_fit_their_transfer() {
        for spec in CONTROL_CATALOG {
            if let Some(transfer) = spec.transfer_len {
                assert!(
                    spec.offset + spec.len <= transfer,
                    "{}: field at {}+{} exceeds transfer length {}",
                    spec.name,
                    spec.offset,
                    spec.len,
                    transfer
                );
            }
        }
    }

    fn topology() -> UnitTopology {
        UnitTopology {
            // Brightness (bit 0) and Contrast (bit 1) only.
            processing_unit: Some(UnitCaps {
                id: 3,
                controls: 0b11,
            }),
            // Auto Exposure Mode (bit 1) only.
            input_terminal: Some(UnitCaps {
                id: 1,
                controls: 1 << 1,
            }),
            extension_units: BTreeMap::new(),
        }
    }

    #[test]
    fn eligible_controls_match_bitmask() {
        let topo = topology();
        let names: Vec<&str> = topo.eligible().map(|(spec, _)| spec.name).collect();
        assert_eq!(names, ["Auto Exposure Mode", "Brightness", "Contrast"]);
    }

    #[test]
    fn eligible_resolves_unit_ids() {
        let topo = topology();
        for (spec, unit_id) in topo.eligible() {
            match spec.unit {
                UnitKind::InputTerminal => assert_eq!(unit_id, 1),
                UnitKind::ProcessingUnit => assert_eq!(unit_id, 3),
                UnitKind::Extension(_) => panic!("no extension units in this topology"),
            }
        }
    }

    #[test]
    fn absent_unit_category_skips_its_controls() {
        let topo = UnitTopology {
            processing_unit: Some(UnitCaps {
                id: 3,
                controls: u64::MAX,
            }),
            ..Default::default()
        };
        assert!(topo
            .eligible()
            .all(|(spec, _)| spec.unit == UnitKind::ProcessingUnit));
    }

    #[test]
    fn extension_units_resolve_by_guid() {
        let guid = guid_string(&[0x3a; 16]);
        let mut extension_units = BTreeMap::new();
        extension_units.insert(
            guid.clone(),
            UnitCaps {
                id: 9,
                controls: 0xff,
            },
        );
        let topo = UnitTopology {
            extension_units,
            ..Default::default()
        };
        let leaked: &'static str = Box::leak(guid.into_boxed_str());
        assert_eq!(
            topo.resolve(&UnitKind::Extension(leaked)),
            Some(UnitCaps {
                id: 9,
                controls: 0xff
            })
        );
        assert_eq!(topo.resolve(&UnitKind::Extension("unknown")), None);
    }
}
