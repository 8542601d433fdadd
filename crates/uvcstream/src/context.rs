// SPDX-License-Identifier: Apache-2.0

use crate::{
    device::{Device, DeviceList},
    error::{Error, Status},
    uvc,
};
use std::{ffi::CString, fmt, ptr};
use uvcstream_sys as ffi;

/// Process-level handle to the UVC driver library.
///
/// Every other operation requires a live context. A process typically holds
/// exactly one, though nothing enforces a single instance.
///
/// # Examples
///
/// ```no_run
/// use uvcstream::context::Context;
///
/// let mut context = Context::new()?;
/// let mut device = context.find_device(0, 0, None)?;
/// device.open()?;
/// device.start_streaming()?;
/// let frame = device.get_frame(uvcstream::device::DEFAULT_FRAME_TIMEOUT_US)?;
/// println!("got {}x{} frame, {} bytes", frame.width(), frame.height(), frame.len());
/// # Ok::<(), uvcstream::Error>(())
/// ```
pub struct Context {
    ctx: *mut ffi::uvc_context,
}

unsafe impl Send for Context {}

impl Context {
    /// Acquires the native library context.
    pub fn new() -> Result<Context, Error> {
        let mut ctx: *mut ffi::uvc_context = ptr::null_mut();
        let ret = uvc!(uvc_init(&mut ctx, ptr::null_mut()));
        if ret != ffi::uvc_error_UVC_SUCCESS {
            return Err(Error::Init(Status::from_raw(ret)));
        }
        log::debug!("context initialized");
        Ok(Context { ctx })
    }

    /// Finds the first device matching the given filters.
    ///
    /// A zero `vendor_id`/`product_id` or a `None` serial number matches any
    /// value. The returned device already holds its own native reference.
    pub fn find_device(
        &self,
        vendor_id: i32,
        product_id: i32,
        serial_number: Option<&str>,
    ) -> Result<Device, Error> {
        let serial = serial_number.map(CString::new).transpose()?;
        let serial_ptr = serial.as_ref().map_or(ptr::null(), |s| s.as_ptr());

        let mut dev: *mut ffi::uvc_device = ptr::null_mut();
        let ret = uvc!(uvc_find_device(
            self.ctx,
            &mut dev,
            vendor_id,
            product_id,
            serial_ptr
        ));
        if ret != ffi::uvc_error_UVC_SUCCESS {
            return Err(Error::NotFound(Status::from_raw(ret)));
        }
        Ok(Device::from_find(dev))
    }

    /// Enumerates the devices on the system.
    ///
    /// At most one snapshot is live per context: the mutable borrow means a
    /// previous [`DeviceList`] must be dropped (releasing its backing
    /// memory) before a new enumeration can be taken, so a superseded
    /// snapshot can never be dereferenced.
    pub fn list_devices(&mut self) -> Result<DeviceList<'_>, Error> {
        let mut list: *mut *mut ffi::uvc_device = ptr::null_mut();
        let ret = uvc!(uvc_get_device_list(self.ctx, &mut list));
        if ret != ffi::uvc_error_UVC_SUCCESS {
            return Err(Error::Enumeration(Status::from_raw(ret)));
        }
        Ok(unsafe { DeviceList::from_raw(list) })
    }

    /// Releases the native context. Idempotent; also run on drop.
    pub fn close(&mut self) {
        if self.ctx.is_null() {
            return;
        }
        if let Ok(lib) = ffi::init() {
            unsafe { lib.uvc_exit(self.ctx) };
        }
        self.ctx = ptr::null_mut();
        log::debug!("context closed");
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("closed", &self.ctx.is_null())
            .finish()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
    #[test]
    #[serial]
    fn open_and_close_context() -> Result<(), Error> {
        let mut context = Context::new()?;
        context.close();
        // Idempotent.
        context.close();
        Ok(())
    }

    #[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
    #[test]
    #[serial]
    fn enumerate_devices() -> Result<(), Error> {
        let mut context = Context::new()?;
        let list = context.list_devices()?;
        println!("found {} UVC devices", list.len());
        for mut device in list.iter() {
            let desc = device.descriptor()?;
            println!(
                "  {:04x}:{:04x} {}",
                desc.vendor_id,
                desc.product_id,
                desc.product.as_deref().unwrap_or("<unnamed>")
            );
            device.free_descriptor();
        }
        Ok(())
    }
}
