// SPDX-License-Identifier: Apache-2.0

use crate::format::StreamFormat;
use std::{fmt, marker::PhantomData, slice};
use unix_ts::Timestamp;
use uvcstream_sys as ffi;

/// A borrowed, decode-free view over one captured video buffer and its
/// metadata.
///
/// The underlying buffer is owned by the native capture layer. In polling
/// mode the view borrows the device mutably, so the borrow checker enforces
/// that it is gone before the next [`crate::device::Device::get_frame`] call
/// overwrites the buffer. In callback mode the view is only valid for the
/// duration of the callback invocation. Either way, copy the bytes out with
/// [`Frame::to_vec`] if they need to outlive the view.
pub struct Frame<'a> {
    raw: *const ffi::uvc_frame,
    _owner: PhantomData<&'a ()>,
}

impl<'a> Frame<'a> {
    /// Wraps a native frame pointer.
    ///
    /// # Safety
    ///
    /// `raw` must be non-null and point to a frame that stays valid for the
    /// lifetime `'a`.
    pub(crate) unsafe fn from_raw(raw: *const ffi::uvc_frame) -> Frame<'a> {
        debug_assert!(!raw.is_null());
        Frame {
            raw,
            _owner: PhantomData,
        }
    }

    fn inner(&self) -> &ffi::uvc_frame {
        // Non-null by the from_raw contract.
        unsafe { &*self.raw }
    }

    /// Raw frame bytes. Empty when the driver reported a zero-length buffer.
    pub fn data(&self) -> &[u8] {
        let inner = self.inner();
        if inner.data.is_null() || inner.data_bytes == 0 {
            return &[];
        }
        unsafe { slice::from_raw_parts(inner.data as *const u8, inner.data_bytes) }
    }

    /// Size of the frame in bytes.
    pub fn len(&self) -> usize {
        self.inner().data_bytes
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.inner().width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.inner().height
    }

    /// Capture sequence number, incremented by the driver per frame.
    pub fn sequence(&self) -> u32 {
        self.inner().sequence
    }

    /// Pixel format negotiated for the stream this frame came from.
    pub fn format(&self) -> StreamFormat {
        StreamFormat::from_raw(self.inner().frame_format)
    }

    /// Bytes per horizontal line, as reported by the driver.
    pub fn step(&self) -> usize {
        self.inner().step
    }

    /// Capture time reported by the driver.
    pub fn timestamp(&self) -> Timestamp {
        let tv = self.inner().capture_time;
        Timestamp::new(tv.tv_sec as i64, (tv.tv_usec as u32).wrapping_mul(1000))
    }

    /// Copies the frame bytes into an owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data().to_vec()
    }
}

impl fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format())
            .field("len", &self.len())
            .field("sequence", &self.sequence())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn sample_frame(data: &mut [u8]) -> ffi::uvc_frame {
        ffi::uvc_frame {
            data: data.as_mut_ptr() as *mut _,
            data_bytes: data.len(),
            width: 4,
            height: 2,
            frame_format: ffi::uvc_frame_format_UVC_FRAME_FORMAT_MJPEG,
            step: 8,
            sequence: 7,
            capture_time: ffi::timeval {
                tv_sec: 12,
                tv_usec: 500_000,
            },
            source: ptr::null_mut(),
            library_owns_data: 1,
        }
    }

    #[test]
    fn frame_metadata() {
        let mut data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let raw = sample_frame(&mut data);
        let frame = unsafe { Frame::from_raw(&raw) };

        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.len(), 8);
        assert_eq!(frame.sequence(), 7);
        assert_eq!(frame.format(), StreamFormat::Mjpeg);
        assert_eq!(frame.data(), &data);
        assert_eq!(frame.to_vec(), data.to_vec());
    }

    #[test]
    fn frame_timestamp() {
        let mut data = [0u8; 4];
        let raw = sample_frame(&mut data);
        let frame = unsafe { Frame::from_raw(&raw) };

        assert_eq!(frame.timestamp(), Timestamp::new(12, 500_000_000));
    }

    #[test]
    fn empty_frame_data() {
        let mut raw = sample_frame(&mut []);
        raw.data = ptr::null_mut();
        raw.data_bytes = 0;
        let frame = unsafe { Frame::from_raw(&raw) };

        assert!(frame.is_empty());
        assert_eq!(frame.data(), &[] as &[u8]);
    }
}
