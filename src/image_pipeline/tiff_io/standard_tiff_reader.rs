//! TIFF page reader implementation using the tiff library.
//!
//! Every image directory of the container is decoded into an owned sample
//! buffer. Pages whose layout cannot be written back losslessly are rejected
//! here so that a file is never half-rewritten. Planar-separate stripped
//! pages are reassembled into interleaved order.

use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use tiff::ColorType;
use tiff::decoder::{ChunkType, Decoder, DecodingResult, Limits};
use tiff::tags::{PlanarConfiguration, Tag};
use tracing::debug;

use crate::image_pipeline::common::error::{Result, TaggerError};
use crate::image_pipeline::tiff_io::page::{PageLayout, PageSamples, TiffPage};
use crate::image_pipeline::tiff_io::planar::{PlanarGeometry, interleave_strips};
use crate::image_pipeline::tiff_io::reader::TiffPageReader;

/// Multi-page TIFF reader backed by the tiff library's decoder.
pub struct StandardTiffReader;

impl TiffPageReader for StandardTiffReader {
    fn read_pages(&self, data: &[u8]) -> Result<Vec<TiffPage>> {
        debug!("Decoding TIFF container, {} bytes", data.len());

        let mut decoder = open_decoder(data)?;
        let mut pages = Vec::new();
        loop {
            pages.push(read_page(&mut decoder, pages.len())?);
            if !decoder.more_images() {
                break;
            }
            decoder.next_image().map_err(decode_error)?;
        }

        debug!("Decoded {} page(s)", pages.len());
        Ok(pages)
    }
}

/// Returns the `ImageDescription` of the first page of the file at `path`.
pub fn read_description<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| {
        TaggerError::InputReadError(format!("{}: {}", path.display(), e))
    })?;

    let mut decoder = open_decoder(&data)?;
    let value = decoder
        .find_tag(Tag::ImageDescription)
        .map_err(decode_error)?;
    value
        .map(|v| v.into_string().map_err(decode_error))
        .transpose()
}

fn open_decoder(data: &[u8]) -> Result<Decoder<Cursor<&[u8]>>> {
    // scientific stacks routinely exceed the default decoding buffer limit
    Decoder::new(Cursor::new(data))
        .map(|decoder| decoder.with_limits(Limits::unlimited()))
        .map_err(decode_error)
}

fn read_page<R: Read + Seek>(decoder: &mut Decoder<R>, index: usize) -> Result<TiffPage> {
    let (width, height) = decoder.dimensions().map_err(decode_error)?;
    let colortype = decoder.colortype().map_err(decode_error)?;

    let (layout, depth) = match colortype {
        ColorType::Gray(depth) => (PageLayout::Gray, depth),
        ColorType::RGB(depth) => (PageLayout::Rgb, depth),
        ColorType::RGBA(depth) => (PageLayout::Rgba, depth),
        ColorType::CMYK(depth) => (PageLayout::Cmyk, depth),
        other => {
            return Err(TaggerError::UnsupportedFormat(format!(
                "page {index}: color type {other:?}"
            )));
        }
    };

    let planar = decoder
        .find_tag_unsigned::<u16>(Tag::PlanarConfiguration)
        .map_err(decode_error)?
        == Some(PlanarConfiguration::Planar.to_u16());
    let samples = if planar && layout.samples_per_pixel() > 1 {
        read_planar_samples(decoder, width, height, layout, index)?
    } else {
        into_page_samples(decoder.read_image().map_err(decode_error)?, index)?
    };

    // sub-byte and 12/24-bit samples come back widened and cannot be re-encoded as-is
    if samples.bits_per_sample() != depth {
        return Err(TaggerError::UnsupportedFormat(format!(
            "page {index}: {depth}-bit samples"
        )));
    }

    let page = TiffPage {
        width,
        height,
        layout,
        samples,
    };
    if page.samples.len() != page.expected_len() {
        return Err(TaggerError::UnsupportedFormat(format!(
            "page {index}: expected {} samples, decoded {}",
            page.expected_len(),
            page.samples.len()
        )));
    }

    debug!(
        page = index,
        width,
        height,
        layout = ?page.layout,
        samples = page.samples.kind(),
        "Decoded page"
    );
    Ok(page)
}

fn read_planar_samples<R: Read + Seek>(
    decoder: &mut Decoder<R>,
    width: u32,
    height: u32,
    layout: PageLayout,
    index: usize,
) -> Result<PageSamples> {
    if decoder.get_chunk_type() != ChunkType::Strip {
        return Err(TaggerError::UnsupportedFormat(format!(
            "page {index}: planar tiled layout"
        )));
    }

    let geometry = PlanarGeometry::new(
        width as usize,
        height as usize,
        layout.samples_per_pixel(),
        decoder.chunk_dimensions().1 as usize,
    );
    let strip_count = decoder.strip_count().map_err(decode_error)?;
    if strip_count as usize != geometry.strip_count() {
        return Err(TaggerError::DecodeError(format!(
            "page {index}: {strip_count} strips for {} planes of {height} rows",
            geometry.planes
        )));
    }

    let mut strips = Vec::with_capacity(geometry.strip_count());
    for strip in 0..strip_count {
        let chunk = decoder.read_chunk(strip).map_err(decode_error)?;
        strips.push(into_page_samples(chunk, index)?);
    }

    debug!(page = index, strips = strip_count, "Interleaving planar page");
    interleave_strips(strips, &geometry)
}

fn into_page_samples(result: DecodingResult, index: usize) -> Result<PageSamples> {
    let samples = match result {
        DecodingResult::U8(values) => PageSamples::U8(values),
        DecodingResult::U16(values) => PageSamples::U16(values),
        DecodingResult::U32(values) => PageSamples::U32(values),
        DecodingResult::U64(values) => PageSamples::U64(values),
        DecodingResult::I8(values) => PageSamples::I8(values),
        DecodingResult::I16(values) => PageSamples::I16(values),
        DecodingResult::I32(values) => PageSamples::I32(values),
        DecodingResult::I64(values) => PageSamples::I64(values),
        DecodingResult::F32(values) => PageSamples::F32(values),
        DecodingResult::F64(values) => PageSamples::F64(values),
        #[allow(unreachable_patterns)]
        _ => {
            return Err(TaggerError::UnsupportedFormat(format!(
                "page {index}: sample format"
            )));
        }
    };
    Ok(samples)
}

fn decode_error(e: tiff::TiffError) -> TaggerError {
    TaggerError::DecodeError(e.to_string())
}
