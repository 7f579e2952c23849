use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tiff_channel_tagger::image_pipeline::{
    FailurePolicy, MetadataTagger, TaggerConfig, TiffCompression,
};
use tiff_channel_tagger::logger;

use tracing::info;

#[derive(Parser)]
#[command(
    name = "tiff-channel-tagger",
    about = "Write a JSON channel map into the description of TIFF images"
)]
struct Cli {
    /// Directory of .tif/.tiff files, or a single image file (default: current directory)
    #[arg(short = 'f', long = "filepath", value_name = "PATH")]
    filepath: Option<PathBuf>,

    /// JSON file mapping channel index to marker name
    #[arg(short = 'c', long = "channels", value_name = "PATH")]
    channels: Option<PathBuf>,

    /// Compression of the rewritten files
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,

    /// Stop at the first file that cannot be tagged
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    Deflate,
    Packbits,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::Deflate => TiffCompression::Deflate,
            CompressionArg::Packbits => TiffCompression::Packbits,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    info!("Starting tiff-channel-tagger...");

    let config = TaggerConfig::builder()
        .compression(cli.compression.into())
        .failure_policy(if cli.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        })
        .build();
    let tagger = MetadataTagger::new(config);

    info!("Compression: {:?}", tagger.config().compression);
    info!("Failure policy: {:?}", tagger.config().failure_policy);

    let report = tagger
        .tag(cli.filepath.as_deref(), cli.channels.as_deref())
        .context("Tagging aborted")?;

    report.ensure_success()?;

    Ok(())
}
