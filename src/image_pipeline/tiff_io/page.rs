//! Decoded TIFF page types

/// Photometric arrangement of the interleaved samples of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Gray,
    Rgb,
    Rgba,
    Cmyk,
}

impl PageLayout {
    /// Number of samples stored per pixel
    pub fn samples_per_pixel(self) -> usize {
        match self {
            PageLayout::Gray => 1,
            PageLayout::Rgb => 3,
            PageLayout::Rgba | PageLayout::Cmyk => 4,
        }
    }
}

/// Owned sample buffer of a page, typed by the stored sample format
#[derive(Debug, Clone, PartialEq)]
pub enum PageSamples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl PageSamples {
    pub fn len(&self) -> usize {
        match self {
            PageSamples::U8(v) => v.len(),
            PageSamples::U16(v) => v.len(),
            PageSamples::U32(v) => v.len(),
            PageSamples::U64(v) => v.len(),
            PageSamples::I8(v) => v.len(),
            PageSamples::I16(v) => v.len(),
            PageSamples::I32(v) => v.len(),
            PageSamples::I64(v) => v.len(),
            PageSamples::F32(v) => v.len(),
            PageSamples::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of a single sample in bits
    pub fn bits_per_sample(&self) -> u8 {
        match self {
            PageSamples::U8(_) | PageSamples::I8(_) => 8,
            PageSamples::U16(_) | PageSamples::I16(_) => 16,
            PageSamples::U32(_) | PageSamples::I32(_) | PageSamples::F32(_) => 32,
            PageSamples::U64(_) | PageSamples::I64(_) | PageSamples::F64(_) => 64,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, PageSamples::F32(_) | PageSamples::F64(_))
    }

    /// Short name of the sample type, used in log and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            PageSamples::U8(_) => "u8",
            PageSamples::U16(_) => "u16",
            PageSamples::U32(_) => "u32",
            PageSamples::U64(_) => "u64",
            PageSamples::I8(_) => "i8",
            PageSamples::I16(_) => "i16",
            PageSamples::I32(_) => "i32",
            PageSamples::I64(_) => "i64",
            PageSamples::F32(_) => "f32",
            PageSamples::F64(_) => "f64",
        }
    }
}

/// One decoded image directory of a TIFF container
#[derive(Debug, Clone, PartialEq)]
pub struct TiffPage {
    /// Width of the page in pixels
    pub width: u32,
    /// Height of the page in pixels
    pub height: u32,
    /// Photometric layout of the interleaved samples
    pub layout: PageLayout,
    /// Pixel samples, passed through untouched
    pub samples: PageSamples,
}

impl TiffPage {
    /// Number of samples the page dimensions and layout call for
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.layout.samples_per_pixel()
    }
}
