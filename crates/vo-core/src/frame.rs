use serde::{Deserialize, Serialize};

use crate::Error;
use crate::image::ImageView;

/// Byte layout of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// One 8-bit sample per pixel.
    Grey,
    /// Three 8-bit channel samples per pixel. Channel order does not matter,
    /// only their sum is used.
    Rgb,
}

impl PixelFormat {
    pub fn from_greyscale(greyscale: bool) -> Self {
        if greyscale { Self::Grey } else { Self::Rgb }
    }

    #[inline]
    pub fn channels(self) -> usize {
        match self {
            Self::Grey => 1,
            Self::Rgb => 3,
        }
    }

    /// Largest possible per-pixel intensity sum.
    #[inline]
    pub fn max_sum(self) -> f64 {
        match self {
            Self::Grey => 255.0,
            Self::Rgb => 255.0 * 3.0,
        }
    }
}

/// Borrowed camera frame: raw bytes plus their pixel layout.
///
/// `width()` and `height()` are in pixels; rows returned by [`FrameView::row`]
/// hold `width * channels` bytes.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    view: ImageView<'a, u8>,
    format: PixelFormat,
}

impl<'a> FrameView<'a> {
    /// Tightly packed frame, no row padding.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        format: PixelFormat,
    ) -> Result<Self, Error> {
        let row_bytes = width.checked_mul(format.channels()).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        Self::with_stride(data, width, height, row_bytes, format)
    }

    /// Frame whose rows start every `row_stride` bytes.
    pub fn with_stride(
        data: &'a [u8],
        width: usize,
        height: usize,
        row_stride: usize,
        format: PixelFormat,
    ) -> Result<Self, Error> {
        let row_bytes = width.checked_mul(format.channels()).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        let view = ImageView::from_slice(row_bytes, height, row_stride, data)?;
        Ok(Self { view, format })
    }

    pub fn width(&self) -> usize {
        self.view.width() / self.format.channels()
    }

    pub fn height(&self) -> usize {
        self.view.height()
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn row(&self, y: usize) -> &'a [u8] {
        self.view.row(y)
    }
}
