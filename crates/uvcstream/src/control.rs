// SPDX-License-Identifier: Apache-2.0

use crate::{
    catalog::{ControlSpec, ValueDomain},
    error::{Error, Status},
    uvc,
};
use std::fmt;
use uvcstream_sys as ffi;

/// One live, bound accessor for a single hardware control on an opened
/// device.
///
/// A `Control` is created during control discovery when the owning unit's
/// capability bit is set for its catalog entry. Range metadata (current,
/// min, max, step, default) is fetched eagerly at bind time; the current
/// value is re-read from the device on every [`Control::value`] call.
///
/// Controls share the device's open handle. Each operation is a single
/// blocking USB control transfer; no internal locking is performed and a
/// `Control` must not outlive its device's `close()`.
pub struct Control {
    devh: *mut ffi::uvc_device_handle,
    spec: &'static ControlSpec,
    unit_id: u8,
    transfer_len: usize,
    domain: ValueDomain,
    info_mask: i64,
    current: i64,
    min: i64,
    max: i64,
    step: i64,
    default: i64,
    range_inverted: bool,
}

unsafe impl Send for Control {}

impl Control {
    /// Binds a catalog entry against the resolved unit id on an open device
    /// handle, fetching the transfer length and range metadata.
    pub(crate) fn bind(
        devh: *mut ffi::uvc_device_handle,
        spec: &'static ControlSpec,
        unit_id: u8,
    ) -> Result<Control, Error> {
        let transfer_len = match query_length(devh, unit_id, spec.selector) {
            Ok(len) => len,
            Err(err) => {
                let fallback = transfer_fallback(&err, spec.transfer_len)?;
                log::warn!(
                    "control '{}': length query failed ({}), using catalog length {}",
                    spec.name,
                    err,
                    fallback
                );
                fallback
            }
        };

        let mut control = Control {
            devh,
            spec,
            unit_id,
            transfer_len,
            domain: spec.domain,
            info_mask: 0,
            current: 0,
            min: 0,
            max: 0,
            step: 0,
            default: 0,
            range_inverted: false,
        };

        control.info_mask = control.request(ffi::uvc_req_code_UVC_GET_INFO)?;
        control.current = control.request(ffi::uvc_req_code_UVC_GET_CUR)?;
        let min = control.request_or(ffi::uvc_req_code_UVC_GET_MIN, spec.min)?;
        let max = control.request_or(ffi::uvc_req_code_UVC_GET_MAX, spec.max)?;
        let (min, max, inverted) = normalize_range(min, max);
        if inverted {
            // Observed device quirk; the negation mirrors what works in the
            // field but is not verified for every control type.
            log::warn!(
                "control '{}': device reported min > max, negating min to {}",
                spec.name,
                min
            );
        }
        control.min = min;
        control.max = max;
        control.range_inverted = inverted;
        control.step = control.request_or(ffi::uvc_req_code_UVC_GET_RES, spec.step)?;
        control.default = control.request_or(ffi::uvc_req_code_UVC_GET_DEF, spec.default)?;
        control.domain = reclassify(control.domain, control.min, control.max, control.step);

        Ok(control)
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn unit_id(&self) -> u8 {
        self.unit_id
    }

    pub fn selector(&self) -> u8 {
        self.spec.selector
    }

    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.domain, ValueDomain::Boolean)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn default(&self) -> i64 {
        self.default
    }

    /// `GET_INFO` capability bitmask reported by the device.
    pub fn info_mask(&self) -> i64 {
        self.info_mask
    }

    /// True when the device reported an inverted range at bind time and the
    /// minimum was normalized by negation.
    pub fn range_inverted(&self) -> bool {
        self.range_inverted
    }

    /// Last value read from the device, without a new transfer.
    pub fn cached_value(&self) -> i64 {
        self.current
    }

    /// Reads the current value from the device.
    pub fn value(&mut self) -> Result<i64, Error> {
        self.refresh()?;
        Ok(self.current)
    }

    /// Re-reads the current value into the cache.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.current = self.request(ffi::uvc_req_code_UVC_GET_CUR)?;
        Ok(())
    }

    /// Validates and writes a value to the device, then refreshes the cache.
    pub fn set_value(&mut self, value: i64) -> Result<(), Error> {
        self.validate(value)?;

        let mut data = vec![0u8; self.transfer_len];
        if self.spec.offset != 0 || self.spec.len < self.transfer_len {
            // The field shares its transfer buffer with a sibling control
            // (e.g. Pan/Tilt); read the current block so the splice below
            // leaves the sibling's bytes intact.
            match self.fetch(ffi::uvc_req_code_UVC_GET_CUR) {
                Ok(current) => {
                    data = current;
                    // Short reads still get a full-length buffer on the wire.
                    data.resize(self.transfer_len, 0);
                }
                Err(err) => log::debug!(
                    "control '{}': could not pre-read shared buffer ({}), writing zeroes",
                    self.spec.name,
                    err
                ),
            }
        }
        // A device-reported transfer length can undercut the catalog layout;
        // a field that does not fit cannot be written.
        if self.spec.offset >= data.len() {
            return Err(Error::Driver(Status::from_raw(
                ffi::uvc_error_UVC_ERROR_INVALID_PARAM,
            )));
        }
        let end = (self.spec.offset + self.spec.len).min(data.len());
        encode_signed_le(value, &mut data[self.spec.offset..end]);

        let ret = uvc!(uvc_set_ctrl(
            self.devh,
            self.unit_id,
            self.spec.selector,
            data.as_mut_ptr() as *mut _,
            self.transfer_len as ::std::os::raw::c_int
        ));
        if ret <= 0 {
            return Err(ctrl_error(ret));
        }

        if let Err(err) = self.refresh() {
            log::debug!(
                "control '{}': readback after set failed: {}",
                self.spec.name,
                err
            );
        }
        Ok(())
    }

    /// Resolves a symbolic menu label to its integer code, for
    /// [`ValueDomain::Menu`] controls.
    pub fn menu_code(&self, label: &str) -> Option<i64> {
        match self.domain {
            ValueDomain::Menu(entries) => entries
                .iter()
                .find(|(name, _)| *name == label)
                .map(|(_, code)| *code),
            _ => None,
        }
    }

    fn validate(&self, value: i64) -> Result<(), Error> {
        match self.domain {
            ValueDomain::Boolean => {
                if value == self.min || value == self.max {
                    Ok(())
                } else {
                    Err(Error::Driver(Status::from_raw(
                        ffi::uvc_error_UVC_ERROR_INVALID_PARAM,
                    )))
                }
            }
            ValueDomain::Integer => {
                if self.min <= value && value <= self.max {
                    Ok(())
                } else {
                    Err(Error::Driver(Status::from_raw(
                        ffi::uvc_error_UVC_ERROR_INVALID_PARAM,
                    )))
                }
            }
            // Devices do not always report menu ranges correctly, so menu
            // writes are sent through unchecked.
            ValueDomain::Menu(_) => Ok(()),
        }
    }

    /// Runs one GET-class request and decodes this control's field.
    fn request(&self, req_code: ffi::uvc_req_code) -> Result<i64, Error> {
        let data = self.fetch(req_code)?;
        Ok(decode_field(&data, self.spec.offset, self.spec.len))
    }

    /// Runs one GET-class request, preferring the native value and falling
    /// back to the catalog value only when the transfer fails.
    fn request_or(&self, req_code: ffi::uvc_req_code, fallback: Option<i64>) -> Result<i64, Error> {
        match self.request(req_code) {
            Ok(value) => Ok(value),
            Err(err) => match fallback {
                Some(value) => {
                    log::debug!(
                        "control '{}': request 0x{:02x} failed ({}), using catalog value {}",
                        self.spec.name,
                        req_code,
                        err,
                        value
                    );
                    Ok(value)
                }
                None => Err(err),
            },
        }
    }

    /// Runs one GET-class request, returning the raw transfer buffer.
    fn fetch(&self, req_code: ffi::uvc_req_code) -> Result<Vec<u8>, Error> {
        let mut data = vec![0u8; self.transfer_len];
        let ret = uvc!(uvc_get_ctrl(
            self.devh,
            self.unit_id,
            self.spec.selector,
            data.as_mut_ptr() as *mut _,
            self.transfer_len as ::std::os::raw::c_int,
            req_code
        ));
        if ret < 1 {
            return Err(ctrl_error(ret));
        }
        data.truncate(ret as usize);
        Ok(data)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n\t value: {}\n\t min: {}\n\t max: {}\n\t step: {}\n\t default: {}",
            self.spec.name, self.current, self.min, self.max, self.step, self.default
        )
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("name", &self.spec.name)
            .field("unit_id", &self.unit_id)
            .field("selector", &self.spec.selector)
            .field("domain", &self.domain)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("default", &self.default)
            .finish()
    }
}

/// Asks the device for the control's transfer length via `GET_LEN`.
fn query_length(
    devh: *mut ffi::uvc_device_handle,
    unit_id: u8,
    selector: u8,
) -> Result<usize, Error> {
    let ret = uvc!(uvc_get_ctrl_len(devh, unit_id, selector));
    if ret < 1 {
        return Err(ctrl_error(ret));
    }
    Ok(ret as usize)
}

/// Picks the catalog fallback for a failed length query, or propagates the
/// query error when the catalog declares none.
fn transfer_fallback(err: &Error, fallback: Option<usize>) -> Result<usize, Error> {
    match fallback {
        Some(len) => Ok(len),
        None => Err(match err {
            Error::Driver(status) => Error::Driver(*status),
            _ => Error::Driver(Status::from_raw(ffi::uvc_error_UVC_ERROR_OTHER)),
        }),
    }
}

/// Maps a negative-or-zero control transfer return into a driver error.
fn ctrl_error(ret: ::std::os::raw::c_int) -> Error {
    if ret < 0 {
        Error::Driver(Status::from_raw(ret))
    } else {
        Error::Driver(Status::from_raw(ffi::uvc_error_UVC_ERROR_OTHER))
    }
}

/// Normalizes an inverted range reported by the device: when min > max the
/// minimum becomes `-max`. Returns (min, max, inverted).
fn normalize_range(min: i64, max: i64) -> (i64, i64, bool) {
    if min > max {
        (-max, max, true)
    } else {
        (min, max, false)
    }
}

/// True when stepping `[min, max]` by `step` yields exactly two values.
fn is_two_point_range(min: i64, max: i64, step: i64) -> bool {
    step > 0 && min.saturating_add(step) <= max && min.saturating_add(2 * step) > max
}

/// Integer controls whose valid domain collapses to two points behave as
/// switches regardless of their nominal width.
fn reclassify(domain: ValueDomain, min: i64, max: i64, step: i64) -> ValueDomain {
    match domain {
        ValueDomain::Integer if is_two_point_range(min, max, step) => ValueDomain::Boolean,
        other => other,
    }
}

/// Decodes the little-endian signed field at `offset..offset+len` from a
/// transfer buffer, tolerating short reads.
fn decode_field(buffer: &[u8], offset: usize, len: usize) -> i64 {
    if offset >= buffer.len() {
        return 0;
    }
    let end = (offset + len).min(buffer.len());
    decode_signed_le(&buffer[offset..end])
}

fn decode_signed_le(bytes: &[u8]) -> i64 {
    if bytes.is_empty() || bytes.len() > 8 {
        return 0;
    }
    let mut out = [0u8; 8];
    out[..bytes.len()].copy_from_slice(bytes);
    if bytes[bytes.len() - 1] & 0x80 != 0 {
        for byte in out.iter_mut().skip(bytes.len()) {
            *byte = 0xff;
        }
    }
    i64::from_le_bytes(out)
}

fn encode_signed_le(value: i64, out: &mut [u8]) {
    let bytes = value.to_le_bytes();
    let len = out.len().min(8);
    out[..len].copy_from_slice(&bytes[..len]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_negates_min() {
        assert_eq!(normalize_range(10, 5), (-5, 5, true));
        assert_eq!(normalize_range(-3, 7), (-3, 7, false));
        assert_eq!(normalize_range(0, 0), (0, 0, false));
    }

    #[test]
    fn two_point_ranges() {
        assert!(is_two_point_range(0, 1, 1));
        assert!(is_two_point_range(2, 4, 2));
        assert!(is_two_point_range(1, 2, 1));
        // Three representable values.
        assert!(!is_two_point_range(0, 2, 1));
        // Only one representable value.
        assert!(!is_two_point_range(0, 0, 1));
        // A continuous control reports step 0.
        assert!(!is_two_point_range(0, 1, 0));
    }

    #[test]
    fn two_point_integer_becomes_boolean() {
        assert_eq!(
            reclassify(ValueDomain::Integer, 0, 1, 1),
            ValueDomain::Boolean
        );
        assert_eq!(
            reclassify(ValueDomain::Integer, 0, 100, 1),
            ValueDomain::Integer
        );
        // Menus are never reclassified, even over two points.
        let menu = ValueDomain::Menu(&[("off", 0), ("on", 1)]);
        assert_eq!(reclassify(menu, 0, 1, 1), menu);
    }

    #[test]
    fn decode_sign_extension() {
        assert_eq!(decode_signed_le(&[0xff]), -1);
        assert_eq!(decode_signed_le(&[0x2c, 0x01]), 300);
        assert_eq!(decode_signed_le(&[0x00, 0x80]), -32768);
        assert_eq!(decode_signed_le(&[]), 0);
    }

    #[test]
    fn decode_shared_buffer_fields() {
        // Pan/Tilt style block: two 4-byte fields in one 8-byte transfer.
        let buffer = [0x01, 0x00, 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff];
        assert_eq!(decode_field(&buffer, 0, 4), 1);
        assert_eq!(decode_field(&buffer, 4, 4), -2);
    }

    #[test]
    fn decode_short_read() {
        // The device answered with fewer bytes than the declared field.
        let buffer = [0x05];
        assert_eq!(decode_field(&buffer, 0, 4), 5);
        assert_eq!(decode_field(&buffer, 4, 4), 0);
    }

    #[test]
    fn encode_round_trip() {
        let mut buf = [0u8; 2];
        encode_signed_le(-1, &mut buf);
        assert_eq!(buf, [0xff, 0xff]);
        encode_signed_le(300, &mut buf);
        assert_eq!(buf, [0x2c, 0x01]);
        assert_eq!(decode_signed_le(&buf), 300);
    }

    #[test]
    fn fallback_length_requires_catalog_entry() {
        let err = Error::Driver(Status::from_raw(ffi::uvc_error_UVC_ERROR_IO));
        assert_eq!(transfer_fallback(&err, Some(2)).unwrap(), 2);
        assert!(transfer_fallback(&err, None).is_err());
    }
}
