//! Reassembly of planar-separate pages
//!
//! A planar page stores each sample (R, G, B, ...) as its own run of strips.
//! The strips are stitched back into one interleaved buffer so the page can
//! be re-encoded like any chunky page.

use crate::image_pipeline::common::error::{Result, TaggerError};
use crate::image_pipeline::tiff_io::page::PageSamples;

/// Strip layout of a planar-separate page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarGeometry {
    pub width: usize,
    pub height: usize,
    pub planes: usize,
    pub rows_per_strip: usize,
    pub strips_per_plane: usize,
}

impl PlanarGeometry {
    pub fn new(width: usize, height: usize, planes: usize, rows_per_strip: usize) -> Self {
        let strips_per_plane = if rows_per_strip == 0 {
            0
        } else {
            height.div_ceil(rows_per_strip)
        };
        Self {
            width,
            height,
            planes,
            rows_per_strip,
            strips_per_plane,
        }
    }

    pub fn strip_count(&self) -> usize {
        self.planes * self.strips_per_plane
    }
}

/// Interleaves strips given in file order (all strips of plane 0, then
/// plane 1, ...) into chunky pixel order.
pub fn interleave_planes<T: Copy + Default>(strips: Vec<Vec<T>>, geometry: &PlanarGeometry) -> Result<Vec<T>> {
    if strips.len() != geometry.strip_count() {
        return Err(TaggerError::DecodeError(format!(
            "planar page: expected {} strips, got {}",
            geometry.strip_count(),
            strips.len()
        )));
    }

    let width = geometry.width;
    if width == 0 {
        return Ok(Vec::new());
    }
    let mut interleaved = vec![T::default(); width * geometry.height * geometry.planes];

    for (index, strip) in strips.iter().enumerate() {
        let plane = index / geometry.strips_per_plane;
        let first_row = (index % geometry.strips_per_plane) * geometry.rows_per_strip;
        let rows = geometry.rows_per_strip.min(geometry.height - first_row);
        if strip.len() < rows * width {
            return Err(TaggerError::DecodeError(format!(
                "planar page: strip {index} holds {} samples, expected {}",
                strip.len(),
                rows * width
            )));
        }

        for (row, values) in strip.chunks_exact(width).take(rows).enumerate() {
            let row_start = (first_row + row) * width;
            for (column, &value) in values.iter().enumerate() {
                interleaved[(row_start + column) * geometry.planes + plane] = value;
            }
        }
    }

    Ok(interleaved)
}

macro_rules! interleave_variants {
    ($strips:ident, $geometry:ident, $($variant:ident),+) => {{
        let mut strips = $strips.into_iter();
        let Some(first) = strips.next() else {
            return Err(TaggerError::DecodeError("planar page without strips".to_string()));
        };
        match first {
            $(PageSamples::$variant(values) => {
                let mut typed = vec![values];
                for strip in strips {
                    match strip {
                        PageSamples::$variant(values) => typed.push(values),
                        other => {
                            return Err(TaggerError::DecodeError(format!(
                                "planar page: mixed {} and {} strips",
                                stringify!($variant),
                                other.kind()
                            )));
                        }
                    }
                }
                Ok(PageSamples::$variant(interleave_planes(typed, $geometry)?))
            })+
        }
    }};
}

/// Typed dispatch over [`interleave_planes`]; all strips must share one sample type.
pub fn interleave_strips(strips: Vec<PageSamples>, geometry: &PlanarGeometry) -> Result<PageSamples> {
    interleave_variants!(strips, geometry, U8, U16, U32, U64, I8, I16, I32, I64, F32, F64)
}
