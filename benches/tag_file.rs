use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tiff::encoder::{TiffEncoder, colortype};
use tiff_channel_tagger::image_pipeline::{
    ChannelMap, MetadataTagger, TaggerConfig, TiffCompression,
};

fn generate_mock_tiff(width: u32, height: u32, pages: usize) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).unwrap();
        for page in 0..pages {
            let data: Vec<u16> = (0..width * height)
                .map(|i| ((i as usize + page * 31) % 65536) as u16)
                .collect();
            encoder
                .write_image::<colortype::Gray16>(width, height, &data)
                .unwrap();
        }
    }
    buffer
}

fn mock_description() -> String {
    let map: ChannelMap = [("0", "DAPI"), ("1", "CD3"), ("2", "CD8"), ("3", "CD20")]
        .into_iter()
        .collect();
    map.to_description().unwrap()
}

fn benchmark_retag_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("retag_by_size");
    let description = mock_description();

    let sizes = vec![
        (100, 100, 1, "100x100x1"),
        (500, 500, 1, "500x500x1"),
        (500, 500, 4, "500x500x4"),
    ];

    for (width, height, pages, label) in sizes {
        let mock_data = generate_mock_tiff(width, height, pages);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                let tagger = MetadataTagger::new(TaggerConfig::default());

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = tagger.retag(black_box(data), &description, &mut output);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_compression_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_methods");
    let mock_data = generate_mock_tiff(500, 500, 1);
    let description = mock_description();

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::Deflate, "deflate"),
        (TiffCompression::Packbits, "packbits"),
    ];

    for (compression, label) in compressions {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                let config = TaggerConfig::builder()
                    .compression(compression)
                    .build();
                let tagger = MetadataTagger::new(config);

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = tagger.retag(black_box(data), &description, &mut output);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_retag_sizes, benchmark_compression_methods);
criterion_main!(benches);
