use clap::Parser;
use thiserror::Error;
use tracing::{error, info};

mod location;
mod storage;

use location::{Location, LocationError};
use revolve_core::{decode_jpeg, encode_jpeg, transform, TransformParams};
use storage::StorageError;

/// The tool always exports at maximum JPEG quality.
const JPEG_QUALITY: u8 = 100;

#[derive(Parser)]
#[command(name = "revolve")]
#[command(about = "Scale and rotate a JPEG image between local and object storage")]
#[command(version)]
struct Cli {
    /// Source image location: a file path or s3://bucket/object-path
    src: String,

    /// Destination image location: a file path or s3://bucket/object-path
    dest: String,

    /// Scale factor (1.0 = original size)
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Rotation in degrees, counter-clockwise
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotate: f64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Decode(#[from] revolve_core::DecodeError),

    #[error(transparent)]
    Encode(#[from] revolve_core::EncodeError),
}

#[tokio::main]
async fn main() {
    // missing src/dest is a usage error; clap terminates non-zero here,
    // before any I/O
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let params = TransformParams::new(cli.scale, cli.rotate);
    if let Err(err) = run(&cli.src, &cli.dest, params).await {
        // one structured event per failed invocation; nothing usable was
        // written, there is no partial result to clean up
        error!(error = %err, src = %cli.src, dest = %cli.dest, "transform failed");
    }
}

async fn run(src: &str, dest: &str, params: TransformParams) -> Result<(), RunError> {
    let source: Location = src.parse()?;
    let target: Location = dest.parse()?;

    let bytes = storage::backend_for(&source).await.retrieve().await?;
    let image = decode_jpeg(&bytes)?;
    info!(width = image.width, height = image.height, "Decoded source image");

    let result = transform(&image, params);
    info!(
        width = result.width,
        height = result.height,
        scale = params.scale,
        rotate = params.rotate,
        "Applied transform"
    );

    let encoded = encode_jpeg(&result, JPEG_QUALITY)?;
    storage::backend_for(&target).await.store(&encoded).await?;
    info!(dest = %dest, "Wrote destination image");

    Ok(())
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
