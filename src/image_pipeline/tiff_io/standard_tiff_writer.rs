use std::io::{Cursor, Seek, Write};

use tiff::encoder::colortype::{self, ColorType};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder, TiffValue};
use tiff::tags::{Predictor, Tag};
use tracing::debug;

use crate::image_pipeline::common::error::{Result, TaggerError};
use crate::image_pipeline::tiff_io::page::TiffPage;
use crate::image_pipeline::tiff_io::types::{TaggerConfig, TiffCompression};
use crate::image_pipeline::tiff_io::writer::TiffWriter;

pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, pages: &[TiffPage], description: &str, output: &mut dyn Write, config: &TaggerConfig) -> Result<()> {
        if pages.is_empty() {
            return Err(TaggerError::EncodeError("no pages to write".to_string()));
        }
        debug!("Encoding TIFF container: {} page(s)", pages.len());

        let mut buffer = Vec::new();

        {
            let compression = match config.compression {
                TiffCompression::None => Compression::Uncompressed,
                TiffCompression::Lzw => Compression::Lzw,
                TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
                TiffCompression::Packbits => Compression::Packbits,
            };

            let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
                .map_err(encode_error)?
                .with_compression(compression);

            let predictor = match config.predictor {
                Some(2) => Predictor::Horizontal,
                _ => Predictor::None,
            };

            for (index, page) in pages.iter().enumerate() {
                // horizontal differencing is only defined for integer samples
                let page_predictor = if page.samples.is_float() {
                    Predictor::None
                } else {
                    predictor
                };
                encoder = encoder.with_predictor(page_predictor);

                // the description lives in the first image directory only
                let page_description = (index == 0).then_some(description);
                write_page(&mut encoder, page, page_description)?;
            }
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

fn write_page<W: Write + Seek>(
    encoder: &mut TiffEncoder<W>,
    page: &TiffPage,
    description: Option<&str>,
) -> Result<()> {
    use crate::image_pipeline::tiff_io::page::PageLayout::{Cmyk, Gray, Rgb, Rgba};
    use crate::image_pipeline::tiff_io::page::PageSamples as S;

    match (page.layout, &page.samples) {
        (Gray, S::U8(d)) => encode::<colortype::Gray8, _>(encoder, page, d, description),
        (Gray, S::U16(d)) => encode::<colortype::Gray16, _>(encoder, page, d, description),
        (Gray, S::U32(d)) => encode::<colortype::Gray32, _>(encoder, page, d, description),
        (Gray, S::U64(d)) => encode::<colortype::Gray64, _>(encoder, page, d, description),
        (Gray, S::I8(d)) => encode::<colortype::GrayI8, _>(encoder, page, d, description),
        (Gray, S::I16(d)) => encode::<colortype::GrayI16, _>(encoder, page, d, description),
        (Gray, S::I32(d)) => encode::<colortype::GrayI32, _>(encoder, page, d, description),
        (Gray, S::I64(d)) => encode::<colortype::GrayI64, _>(encoder, page, d, description),
        (Gray, S::F32(d)) => encode::<colortype::Gray32Float, _>(encoder, page, d, description),
        (Gray, S::F64(d)) => encode::<colortype::Gray64Float, _>(encoder, page, d, description),
        (Rgb, S::U8(d)) => encode::<colortype::RGB8, _>(encoder, page, d, description),
        (Rgb, S::U16(d)) => encode::<colortype::RGB16, _>(encoder, page, d, description),
        (Rgb, S::U32(d)) => encode::<colortype::RGB32, _>(encoder, page, d, description),
        (Rgb, S::U64(d)) => encode::<colortype::RGB64, _>(encoder, page, d, description),
        (Rgb, S::F32(d)) => encode::<colortype::RGB32Float, _>(encoder, page, d, description),
        (Rgb, S::F64(d)) => encode::<colortype::RGB64Float, _>(encoder, page, d, description),
        (Rgba, S::U8(d)) => encode::<colortype::RGBA8, _>(encoder, page, d, description),
        (Rgba, S::U16(d)) => encode::<colortype::RGBA16, _>(encoder, page, d, description),
        (Rgba, S::U32(d)) => encode::<colortype::RGBA32, _>(encoder, page, d, description),
        (Rgba, S::U64(d)) => encode::<colortype::RGBA64, _>(encoder, page, d, description),
        (Rgba, S::F32(d)) => encode::<colortype::RGBA32Float, _>(encoder, page, d, description),
        (Rgba, S::F64(d)) => encode::<colortype::RGBA64Float, _>(encoder, page, d, description),
        (Cmyk, S::U8(d)) => encode::<colortype::CMYK8, _>(encoder, page, d, description),
        (Cmyk, S::U16(d)) => encode::<colortype::CMYK16, _>(encoder, page, d, description),
        (layout, samples) => Err(TaggerError::UnsupportedFormat(format!(
            "cannot encode {layout:?} page with {} samples",
            samples.kind()
        ))),
    }
}

fn encode<C, W>(
    encoder: &mut TiffEncoder<W>,
    page: &TiffPage,
    data: &[C::Inner],
    description: Option<&str>,
) -> Result<()>
where
    C: ColorType,
    W: Write + Seek,
    [C::Inner]: TiffValue,
{
    let mut image = encoder
        .new_image::<C>(page.width, page.height)
        .map_err(encode_error)?;
    if let Some(description) = description {
        image
            .encoder()
            .write_tag(Tag::ImageDescription, description)
            .map_err(encode_error)?;
    }
    image.write_data(data).map_err(encode_error)
}

fn encode_error(e: tiff::TiffError) -> TaggerError {
    TaggerError::EncodeError(e.to_string())
}
