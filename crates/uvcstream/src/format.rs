// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use uvcstream_sys as ffi;

/// Default stream negotiation parameters applied when the caller skips
/// explicit [`crate::device::Device::set_stream_format`].
pub const DEFAULT_WIDTH: i32 = 640;
pub const DEFAULT_HEIGHT: i32 = 480;
pub const DEFAULT_FRAME_RATE: i32 = 30;

/// Pixel/frame format requested from or reported by a UVC device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamFormat {
    /// Any format; also what the driver reports for unrecognized formats
    Any,
    Uncompressed,
    Compressed,
    Yuyv,
    Uyvy,
    Rgb,
    Bgr,
    #[default]
    Mjpeg,
    Gray8,
    By8,
}

impl StreamFormat {
    pub(crate) fn to_raw(self) -> ffi::uvc_frame_format {
        match self {
            StreamFormat::Any => ffi::uvc_frame_format_UVC_FRAME_FORMAT_ANY,
            StreamFormat::Uncompressed => ffi::uvc_frame_format_UVC_FRAME_FORMAT_UNCOMPRESSED,
            StreamFormat::Compressed => ffi::uvc_frame_format_UVC_FRAME_FORMAT_COMPRESSED,
            StreamFormat::Yuyv => ffi::uvc_frame_format_UVC_FRAME_FORMAT_YUYV,
            StreamFormat::Uyvy => ffi::uvc_frame_format_UVC_FRAME_FORMAT_UYVY,
            StreamFormat::Rgb => ffi::uvc_frame_format_UVC_FRAME_FORMAT_RGB,
            StreamFormat::Bgr => ffi::uvc_frame_format_UVC_FRAME_FORMAT_BGR,
            StreamFormat::Mjpeg => ffi::uvc_frame_format_UVC_FRAME_FORMAT_MJPEG,
            StreamFormat::Gray8 => ffi::uvc_frame_format_UVC_FRAME_FORMAT_GRAY8,
            StreamFormat::By8 => ffi::uvc_frame_format_UVC_FRAME_FORMAT_BY8,
        }
    }

    pub(crate) fn from_raw(raw: ffi::uvc_frame_format) -> StreamFormat {
        match raw {
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_UNCOMPRESSED => StreamFormat::Uncompressed,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_COMPRESSED => StreamFormat::Compressed,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_YUYV => StreamFormat::Yuyv,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_UYVY => StreamFormat::Uyvy,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_RGB => StreamFormat::Rgb,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_BGR => StreamFormat::Bgr,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_MJPEG => StreamFormat::Mjpeg,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_GRAY8 => StreamFormat::Gray8,
            ffi::uvc_frame_format_UVC_FRAME_FORMAT_BY8 => StreamFormat::By8,
            _ => StreamFormat::Any,
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StreamFormat::Any => write!(f, "any"),
            StreamFormat::Uncompressed => write!(f, "uncompressed"),
            StreamFormat::Compressed => write!(f, "compressed"),
            StreamFormat::Yuyv => write!(f, "YUYV"),
            StreamFormat::Uyvy => write!(f, "UYVY"),
            StreamFormat::Rgb => write!(f, "RGB"),
            StreamFormat::Bgr => write!(f, "BGR"),
            StreamFormat::Mjpeg => write!(f, "MJPEG"),
            StreamFormat::Gray8 => write!(f, "GRAY8"),
            StreamFormat::By8 => write!(f, "BY8"),
        }
    }
}

impl std::str::FromStr for StreamFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(StreamFormat::Any),
            "uncompressed" => Ok(StreamFormat::Uncompressed),
            "compressed" => Ok(StreamFormat::Compressed),
            "yuyv" => Ok(StreamFormat::Yuyv),
            "uyvy" => Ok(StreamFormat::Uyvy),
            "rgb" => Ok(StreamFormat::Rgb),
            "bgr" => Ok(StreamFormat::Bgr),
            "mjpeg" | "mjpg" => Ok(StreamFormat::Mjpeg),
            "gray8" => Ok(StreamFormat::Gray8),
            "by8" => Ok(StreamFormat::By8),
            other => Err(format!("unknown stream format '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_str() {
        assert_eq!("mjpeg".parse::<StreamFormat>(), Ok(StreamFormat::Mjpeg));
        assert_eq!("MJPG".parse::<StreamFormat>(), Ok(StreamFormat::Mjpeg));
        assert_eq!("yuyv".parse::<StreamFormat>(), Ok(StreamFormat::Yuyv));
        assert!("h264".parse::<StreamFormat>().is_err());
    }

    #[test]
    fn raw_round_trip() {
        for fmt in [
            StreamFormat::Yuyv,
            StreamFormat::Mjpeg,
            StreamFormat::Gray8,
        ] {
            assert_eq!(StreamFormat::from_raw(fmt.to_raw()), fmt);
        }
    }

    #[test]
    fn unknown_raw_maps_to_any() {
        assert_eq!(StreamFormat::from_raw(42), StreamFormat::Any);
        assert_eq!(StreamFormat::from_raw(0), StreamFormat::Any);
    }

    #[test]
    fn default_is_mjpeg() {
        assert_eq!(StreamFormat::default(), StreamFormat::Mjpeg);
    }
}
