// SPDX-License-Identifier: Apache-2.0

use crate::{
    catalog::{guid_string, UnitCaps, UnitTopology},
    control::Control,
    error::{Error, Status},
    format::{StreamFormat, DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    frame::Frame,
    uvc,
};
use std::{
    collections::BTreeMap,
    ffi::CStr,
    fmt,
    marker::PhantomData,
    os::raw::c_void,
    ptr,
};
use uvcstream_sys as ffi;

/// Default one-second poll timeout for [`Device::get_frame`].
pub const DEFAULT_FRAME_TIMEOUT_US: i32 = 1_000_000;

/// Callback invoked by the native capture thread for every received frame.
///
/// The frame argument is borrowed for the duration of the call only; copy
/// any bytes that must be retained. The callback must not block: it runs on
/// a thread owned by the capture library and stalling it stalls the stream.
pub type FrameCallback = Box<dyn FnMut(&Frame<'_>, u64) + Send + 'static>;

struct CallbackSlot {
    callback: FrameCallback,
    token: u64,
}

unsafe extern "C" fn frame_trampoline(frame: *mut ffi::uvc_frame, user_ptr: *mut c_void) {
    if frame.is_null() || user_ptr.is_null() {
        return;
    }
    // The slot outlives the stream: it is boxed in the Device and cannot be
    // replaced while streaming.
    let slot = unsafe { &mut *(user_ptr as *mut CallbackSlot) };
    let view = unsafe { Frame::from_raw(frame) };
    (slot.callback)(&view, slot.token);
}

/// Owned copy of the native USB device descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub vendor_id: u16,
    pub product_id: u16,
    /// UVC compliance level in binary-coded decimal.
    pub bcd_uvc: u16,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub product: Option<String>,
}

impl DeviceDescriptor {
    unsafe fn from_raw(raw: &ffi::uvc_device_descriptor) -> DeviceDescriptor {
        unsafe fn copy_str(ptr: *const ::std::os::raw::c_char) -> Option<String> {
            if ptr.is_null() {
                return None;
            }
            Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
        }

        DeviceDescriptor {
            vendor_id: raw.idVendor,
            product_id: raw.idProduct,
            bcd_uvc: raw.bcdUVC,
            serial_number: unsafe { copy_str(raw.serialNumber) },
            manufacturer: unsafe { copy_str(raw.manufacturer) },
            product: unsafe { copy_str(raw.product) },
        }
    }
}

/// A UVC device: a native device reference plus, once opened, the open
/// handle, discovered controls, and any active stream.
///
/// Devices come from [`crate::context::Context::find_device`] (the wrapper
/// already holds a native reference) or from a [`DeviceList`] (the list owns
/// the enumeration's references; the wrapper acquires its own on
/// [`Device::open`], so an unopened list-vended device must not outlive its
/// list).
///
/// Lifecycle: `open()` -> `start_streaming()` -> `stop_streaming()` ->
/// `close()`. Once closed, the only valid operation is another (no-op)
/// `close()`.
///
/// Calling `close()` or `stop_streaming()` from another thread while a
/// `get_frame` poll is in flight is not supported.
pub struct Device {
    dev: *mut ffi::uvc_device,
    handle: *mut ffi::uvc_device_handle,
    stream: *mut ffi::uvc_stream_handle,
    ref_held: bool,
    closed: bool,
    stream_ctrl: ffi::uvc_stream_ctrl,
    format_set: bool,
    callback: Option<Box<CallbackSlot>>,
    descriptor: Option<DeviceDescriptor>,
    controls: BTreeMap<&'static str, Control>,
}

unsafe impl Send for Device {}

impl Device {
    /// Wraps a device vended by direct lookup; the native reference is
    /// already held.
    pub(crate) fn from_find(dev: *mut ffi::uvc_device) -> Device {
        Device::new(dev, true)
    }

    /// Wraps a device vended by list traversal; a native reference must be
    /// acquired before the wrapper outlives the list, which `open()` does.
    pub(crate) fn from_list(dev: *mut ffi::uvc_device) -> Device {
        Device::new(dev, false)
    }

    fn new(dev: *mut ffi::uvc_device, ref_held: bool) -> Device {
        Device {
            dev,
            handle: ptr::null_mut(),
            stream: ptr::null_mut(),
            ref_held,
            closed: false,
            stream_ctrl: ffi::uvc_stream_ctrl::default(),
            format_set: false,
            callback: None,
            descriptor: None,
            controls: BTreeMap::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.handle.is_null()
    }

    pub fn is_streaming(&self) -> bool {
        !self.stream.is_null()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_not_closed(&self) -> Result<(), Error> {
        if self.closed {
            Err(Error::Closed)
        } else {
            Ok(())
        }
    }

    fn ensure_open(&self) -> Result<(), Error> {
        self.ensure_not_closed()?;
        if self.is_open() {
            Ok(())
        } else {
            Err(Error::NotOpen)
        }
    }

    /// Opens the device and discovers its controls.
    ///
    /// No-op when already open. Acquires the native device reference first
    /// if this wrapper was vended by a list. A discovery failure on an
    /// individual control is logged and that control omitted; it does not
    /// fail the open.
    pub fn open(&mut self) -> Result<(), Error> {
        self.ensure_not_closed()?;
        if self.is_open() {
            return Ok(());
        }

        if !self.ref_held {
            uvc!(uvc_ref_device(self.dev));
            self.ref_held = true;
        }

        let mut handle: *mut ffi::uvc_device_handle = ptr::null_mut();
        Status::check(uvc!(uvc_open(self.dev, &mut handle)))?;
        self.handle = handle;
        log::debug!("device opened");

        self.discover_controls();
        Ok(())
    }

    /// Walks the unit descriptor lists and binds every catalog control whose
    /// capability bit is set.
    fn discover_controls(&mut self) {
        let topology = match self.collect_topology() {
            Ok(topology) => topology,
            Err(err) => {
                log::warn!("control discovery failed: {}", err);
                return;
            }
        };

        for (spec, unit_id) in topology.eligible() {
            match Control::bind(self.handle, spec, unit_id) {
                Ok(control) => {
                    self.controls.insert(spec.name, control);
                }
                Err(err) => {
                    log::warn!("could not bind control '{}': {}", spec.name, err);
                }
            }
        }
        log::debug!("discovered {} controls", self.controls.len());
    }

    /// Copies each descriptor node's unit id and capability bitmask into an
    /// owned topology; no pointers into the native lists are retained past
    /// this traversal.
    fn collect_topology(&self) -> Result<UnitTopology, Error> {
        let lib = ffi::init()?;
        let mut topology = UnitTopology::default();

        unsafe {
            let mut it = lib.uvc_get_input_terminals(self.handle);
            while !it.is_null() {
                let node = &*it;
                topology.input_terminal = Some(UnitCaps {
                    id: node.bTerminalId,
                    controls: node.bmControls,
                });
                it = node.next;
            }

            let mut pu = lib.uvc_get_processing_units(self.handle);
            while !pu.is_null() {
                let node = &*pu;
                topology.processing_unit = Some(UnitCaps {
                    id: node.bUnitId,
                    controls: node.bmControls,
                });
                pu = node.next;
            }

            let mut xu = lib.uvc_get_extension_units(self.handle);
            while !xu.is_null() {
                let node = &*xu;
                topology.extension_units.insert(
                    guid_string(&node.guidExtensionCode),
                    UnitCaps {
                        id: node.bUnitId,
                        controls: node.bmControls,
                    },
                );
                xu = node.next;
            }
        }

        Ok(topology)
    }

    /// Negotiates the stream format.
    ///
    /// Must succeed (or be skipped so the MJPEG 640x480 @ 30 fps defaults
    /// apply) before [`Device::start_streaming`].
    pub fn set_stream_format(
        &mut self,
        format: StreamFormat,
        width: i32,
        height: i32,
        frame_rate: i32,
    ) -> Result<(), Error> {
        self.ensure_open()?;

        let mut ctrl = ffi::uvc_stream_ctrl::default();
        let ret = uvc!(uvc_get_stream_ctrl_format_size(
            self.handle,
            &mut ctrl,
            format.to_raw(),
            width,
            height,
            frame_rate
        ));
        if ret != ffi::uvc_error_UVC_SUCCESS {
            return Err(Error::UnsupportedFormat(Status::from_raw(ret)));
        }

        self.stream_ctrl = ctrl;
        self.format_set = true;
        log::debug!(
            "negotiated {} {}x{} @ {} fps",
            format,
            width,
            height,
            frame_rate
        );
        Ok(())
    }

    /// Registers (or clears, with `None`) the asynchronous frame callback.
    ///
    /// Fails with [`Error::Busy`] while streaming; the callback can only be
    /// changed before `start_streaming()` or after `stop_streaming()`.
    /// Clearing the callback reverts the device to polling mode. `token` is
    /// passed back verbatim on every invocation.
    pub fn set_callback(&mut self, callback: Option<FrameCallback>, token: u64) -> Result<(), Error> {
        self.ensure_not_closed()?;
        if self.is_streaming() {
            return Err(Error::Busy);
        }
        self.callback = callback.map(|callback| Box::new(CallbackSlot { callback, token }));
        Ok(())
    }

    /// Opens the stream and starts frame delivery.
    ///
    /// No-op when already streaming. Applies the default format lazily if
    /// [`Device::set_stream_format`] was never called. Frames are delivered
    /// through the registered callback, or buffered for [`Device::get_frame`]
    /// polling when no callback is set.
    pub fn start_streaming(&mut self) -> Result<(), Error> {
        self.ensure_open()?;
        if self.is_streaming() {
            return Ok(());
        }

        if !self.format_set {
            self.set_stream_format(
                StreamFormat::default(),
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
                DEFAULT_FRAME_RATE,
            )?;
        }

        let mut stream: *mut ffi::uvc_stream_handle = ptr::null_mut();
        Status::check(uvc!(uvc_stream_open_ctrl(
            self.handle,
            &mut stream,
            &mut self.stream_ctrl
        )))?;

        let (cb, user_ptr): (ffi::uvc_frame_callback_t, *mut c_void) = match self.callback.as_mut()
        {
            Some(slot) => (
                Some(frame_trampoline),
                &mut **slot as *mut CallbackSlot as *mut c_void,
            ),
            None => (None, ptr::null_mut()),
        };

        let ret = uvc!(uvc_stream_start(stream, cb, user_ptr, 0));
        if ret != ffi::uvc_error_UVC_SUCCESS {
            // Do not leave a half-opened stream handle behind.
            uvc!(uvc_stream_close(stream));
            return Err(Error::Driver(Status::from_raw(ret)));
        }

        self.stream = stream;
        log::debug!("streaming started");
        Ok(())
    }

    /// Stops frame delivery and releases the stream handle. No-op when not
    /// streaming.
    pub fn stop_streaming(&mut self) -> Result<(), Error> {
        if !self.is_streaming() {
            return Ok(());
        }

        let ret = uvc!(uvc_stream_stop(self.stream));
        // The handle is released even when the stop request failed.
        uvc!(uvc_stream_close(self.stream));
        self.stream = ptr::null_mut();
        log::debug!("streaming stopped");
        Status::check(ret)
    }

    /// Retrieves the next frame in polling mode.
    ///
    /// `timeout_us == 0` blocks indefinitely; a negative timeout returns
    /// immediately if no frame is ready. The returned view borrows the
    /// device, so it must be dropped (or copied) before the next call, which
    /// overwrites the underlying buffer.
    ///
    /// Fails with the mapped callback-exists status when a callback is
    /// registered, [`Error::Timeout`] on poll expiry, and
    /// [`Error::NullFrame`] when the driver reports success without a frame;
    /// the latter two are retryable.
    pub fn get_frame(&mut self, timeout_us: i32) -> Result<Frame<'_>, Error> {
        self.ensure_not_closed()?;
        if !self.is_streaming() {
            return Err(Error::NotStreaming);
        }
        if self.callback.is_some() {
            return Err(Error::Driver(Status::from_raw(
                ffi::uvc_error_UVC_ERROR_CALLBACK_EXISTS,
            )));
        }

        let mut frame: *mut ffi::uvc_frame = ptr::null_mut();
        let ret = uvc!(uvc_stream_get_frame(self.stream, &mut frame, timeout_us));
        if ret == ffi::uvc_error_UVC_ERROR_TIMEOUT {
            return Err(Error::Timeout);
        }
        Status::check(ret)?;

        if frame.is_null() {
            return Err(Error::NullFrame);
        }
        Ok(unsafe { Frame::from_raw(frame) })
    }

    /// Fetches the USB device descriptor, caching it after the first
    /// successful fetch. Works without opening the device.
    pub fn descriptor(&mut self) -> Result<&DeviceDescriptor, Error> {
        self.ensure_not_closed()?;
        if let Some(ref descriptor) = self.descriptor {
            return Ok(descriptor);
        }

        let mut raw: *mut ffi::uvc_device_descriptor = ptr::null_mut();
        Status::check(uvc!(uvc_get_device_descriptor(self.dev, &mut raw)))?;
        if raw.is_null() {
            return Err(Error::Driver(Status::from_raw(
                ffi::uvc_error_UVC_ERROR_OTHER,
            )));
        }
        let descriptor = unsafe { DeviceDescriptor::from_raw(&*raw) };
        uvc!(uvc_free_device_descriptor(raw));

        Ok(self.descriptor.insert(descriptor))
    }

    /// Releases the cached descriptor. Only needed when descriptor data was
    /// fetched on a device that will never be opened and closed; normal
    /// teardown happens in [`Device::close`].
    pub fn free_descriptor(&mut self) {
        self.descriptor = None;
    }

    /// USB bus number of this device.
    pub fn bus_number(&self) -> Result<u8, Error> {
        self.ensure_not_closed()?;
        Ok(uvc!(uvc_get_bus_number(self.dev)))
    }

    /// USB address of this device on its bus.
    pub fn device_address(&self) -> Result<u8, Error> {
        self.ensure_not_closed()?;
        Ok(uvc!(uvc_get_device_address(self.dev)))
    }

    /// Prints device information and diagnostics to stderr. Only valid on an
    /// open device.
    pub fn print_diagnostics(&self) -> Result<(), Error> {
        self.ensure_open()?;
        uvc!(uvc_print_diag(self.handle, ptr::null_mut()));
        Ok(())
    }

    /// Controls discovered on this device, ordered by name.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    /// Reads a control's current value from the device.
    pub fn get_control(&mut self, name: &str) -> Result<i64, Error> {
        let control = self
            .controls
            .get_mut(name)
            .ok_or_else(|| Error::UnknownControl(name.to_string()))?;
        control.value()
    }

    /// Writes a control value, reporting success rather than failing.
    ///
    /// Callers are expected to probe settability defensively across
    /// heterogeneous hardware, so failures (including unknown names) are
    /// logged and reported as `false`.
    // TODO: writing Absolute Exposure Time or White Balance Temperature
    // while their auto modes are enabled fails with a pipe error; disable
    // the auto control first instead of surfacing the failure.
    pub fn set_control(&mut self, name: &str, value: i64) -> bool {
        match self.try_set_control(name, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("failed to set control '{}' to {}: {}", name, value, err);
                false
            }
        }
    }

    fn try_set_control(&mut self, name: &str, value: i64) -> Result<(), Error> {
        let control = self
            .controls
            .get_mut(name)
            .ok_or_else(|| Error::UnknownControl(name.to_string()))?;
        control.set_value(value)
    }

    /// Applies every discovered control's default value.
    pub fn set_control_defaults(&mut self) {
        let defaults: Vec<(&'static str, i64)> = self
            .controls
            .values()
            .map(|control| (control.name(), control.default()))
            .collect();
        for (name, value) in defaults {
            self.set_control(name, value);
        }
    }

    /// Closes the device and releases the reference this wrapper holds.
    ///
    /// Teardown is staged and best-effort: active streaming is stopped
    /// first, the descriptor cache and controls are released next, then the
    /// open handle, and finally the device reference; each stage runs even
    /// if an earlier one failed. Idempotent; a closed device cannot be
    /// reopened.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }

        if self.is_streaming() {
            if let Err(err) = self.stop_streaming() {
                log::warn!("stop_streaming during close failed: {}", err);
            }
        }

        self.descriptor = None;
        self.controls.clear();

        if let Ok(lib) = ffi::init() {
            if !self.handle.is_null() {
                unsafe { lib.uvc_close(self.handle) };
                self.handle = ptr::null_mut();
            }
            if self.ref_held && !self.dev.is_null() {
                unsafe { lib.uvc_unref_device(self.dev) };
            }
            self.ref_held = false;
        }

        self.closed = true;
        log::debug!("device closed");
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("open", &self.is_open())
            .field("streaming", &self.is_streaming())
            .field("closed", &self.closed)
            .field("ref_held", &self.ref_held)
            .field("controls", &self.controls.len())
            .finish()
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        self.close();
    }
}

/// An ordered view over one native device enumeration snapshot.
///
/// The native array is null-terminated; the length is discovered by
/// scanning for the terminator at construction. The list owns the
/// enumeration's device references and releases them on drop, which is why
/// devices vended by [`DeviceList::get`] or iteration acquire their own
/// reference when opened.
///
/// The mutable borrow of the parent context guarantees at most one live
/// snapshot per context: requesting a new list first ends (and thereby
/// frees) the previous one.
pub struct DeviceList<'ctx> {
    list: *mut *mut ffi::uvc_device,
    len: usize,
    _ctx: PhantomData<&'ctx mut crate::context::Context>,
}

impl<'ctx> DeviceList<'ctx> {
    /// # Safety
    ///
    /// `list` must be a valid null-terminated device array from
    /// `uvc_get_device_list`, ownership of which transfers to the wrapper.
    pub(crate) unsafe fn from_raw(list: *mut *mut ffi::uvc_device) -> DeviceList<'ctx> {
        // The native layer reports no count; scan for the terminator.
        let mut len = 0;
        while !unsafe { *list.add(len) }.is_null() {
            len += 1;
        }
        DeviceList {
            list,
            len,
            _ctx: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Vends the device at `index`. The returned wrapper does not yet hold
    /// its own native reference; see [`Device::open`].
    pub fn get(&self, index: usize) -> Result<Device, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(Device::from_list(unsafe { *self.list.add(index) }))
    }

    /// Lazy, restartable iterator over freshly vended devices.
    pub fn iter(&self) -> Devices<'_, 'ctx> {
        Devices {
            list: self,
            index: 0,
        }
    }
}

impl Drop for DeviceList<'_> {
    fn drop(&mut self) {
        if let Ok(lib) = ffi::init() {
            unsafe { lib.uvc_free_device_list(self.list, 1) };
        }
    }
}

impl fmt::Debug for DeviceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceList").field("len", &self.len).finish()
    }
}

/// Iterator returned by [`DeviceList::iter`].
pub struct Devices<'a, 'ctx> {
    list: &'a DeviceList<'ctx>,
    index: usize,
}

impl Iterator for Devices<'_, '_> {
    type Item = Device;

    fn next(&mut self) -> Option<Device> {
        let device = self.list.get(self.index).ok()?;
        self.index += 1;
        Some(device)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Devices<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    // Lifecycle state checks below run against a wrapper with no real
    // native device; every assertion fires before any native call.

    #[test]
    fn close_is_idempotent() {
        let mut device = Device::from_list(ptr::null_mut());
        device.close();
        assert!(device.is_closed());
        // Second close is a no-op, not a double release.
        device.close();
        assert!(device.is_closed());
        assert!(!device.ref_held);
    }

    #[test]
    fn closed_device_rejects_operations() {
        let mut device = Device::from_list(ptr::null_mut());
        device.close();

        assert!(matches!(device.open(), Err(Error::Closed)));
        assert!(matches!(device.get_frame(0), Err(Error::Closed)));
        assert!(matches!(device.descriptor(), Err(Error::Closed)));
        assert!(matches!(device.bus_number(), Err(Error::Closed)));
        assert!(matches!(device.set_callback(None, 0), Err(Error::Closed)));
    }

    #[test]
    fn streaming_requires_open_handle() {
        let mut device = Device::from_find(ptr::null_mut());
        assert!(matches!(device.start_streaming(), Err(Error::NotOpen)));
        assert!(matches!(
            device.set_stream_format(StreamFormat::Mjpeg, 640, 480, 30),
            Err(Error::NotOpen)
        ));
        assert!(matches!(device.get_frame(0), Err(Error::NotStreaming)));
        assert!(matches!(device.print_diagnostics(), Err(Error::NotOpen)));
    }

    #[test]
    fn set_callback_rejected_while_streaming() {
        let mut device = Device::from_find(ptr::null_mut());
        // Fabricated stream handle; reset before drop so no native call can
        // ever see it.
        device.stream = ptr::NonNull::<ffi::uvc_stream_handle>::dangling().as_ptr();

        let result = device.set_callback(Some(Box::new(|_, _| {})), 7);
        assert!(matches!(result, Err(Error::Busy)));

        device.stream = ptr::null_mut();
    }

    #[test]
    fn get_frame_rejected_in_callback_mode() {
        let mut device = Device::from_find(ptr::null_mut());
        device
            .set_callback(Some(Box::new(|_, _| {})), 7)
            .expect("callback registration while idle");
        device.stream = ptr::NonNull::<ffi::uvc_stream_handle>::dangling().as_ptr();

        match device.get_frame(DEFAULT_FRAME_TIMEOUT_US) {
            Err(Error::Driver(status)) => {
                assert_eq!(status.code(), ffi::uvc_error_UVC_ERROR_CALLBACK_EXISTS)
            }
            other => panic!("expected callback-exists error, got {:?}", other),
        }

        device.stream = ptr::null_mut();
    }

    #[test]
    fn clearing_callback_restores_polling_mode() {
        let mut device = Device::from_find(ptr::null_mut());
        device
            .set_callback(Some(Box::new(|_, _| {})), 7)
            .expect("callback registration while idle");
        assert!(device.callback.is_some());

        device.set_callback(None, 0).expect("clearing callback");
        assert!(device.callback.is_none());
    }

    #[test]
    fn unknown_control_name() {
        let mut device = Device::from_find(ptr::null_mut());
        assert!(matches!(
            device.get_control("No Such Control"),
            Err(Error::UnknownControl(_))
        ));
        // set_control downgrades the failure to a boolean result.
        assert!(!device.set_control("No Such Control", 1));
    }

    #[test]
    fn free_descriptor_clears_cache() {
        let mut device = Device::from_find(ptr::null_mut());
        device.descriptor = Some(DeviceDescriptor {
            vendor_id: 0x1234,
            product_id: 0x5678,
            bcd_uvc: 0x0110,
            serial_number: None,
            manufacturer: Some("ACME".into()),
            product: Some("Webcam".into()),
        });

        device.free_descriptor();
        assert!(device.descriptor.is_none());
    }
}
