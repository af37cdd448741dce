//! bmpkit - Command-line editor for 24-bit BMP files
//!
//! Each subcommand loads one bitmap, applies one edit and writes the result
//! to `--output`, or back over the input when no output is given.

use anyhow::{Context, Result, anyhow};
use bmpkit_core::Pixel;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "BMPKIT_LOG";

#[derive(Parser)]
#[command(name = "bmpkit")]
#[command(author, version, about = "Edit uncompressed 24-bit BMP files")]
#[command(long_about = "
Edit uncompressed 24-bit BMP files in place or into a new file.

Examples:
  bmpkit info photo.bmp                         # Show header fields
  bmpkit crop photo.bmp 10 10 110 60 -o out.bmp # Crop to a 100x50 region
  bmpkit rotate photo.bmp 90 --pivot-x 0 --pivot-y 0
  bmpkit collage base.bmp overlay.bmp -20 15 -o both.bmp
  bmpkit pixel photo.bmp 3 4 255,0,0            # Paint one pixel red
  bmpkit brightness photo.bmp -40
  bmpkit contrast photo.bmp 64 -o punchy.bmp
  bmpkit title photo.bmp \"Hello\" -x 2 -y 2

Logging is controlled by BMPKIT_LOG (or RUST_LOG), e.g. BMPKIT_LOG=bmpkit_io=trace.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (also lowers the default log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display header fields and layout sizes
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Crop to the rectangle between two corners
    Crop(CropArgs),

    /// Rotate about a pivot, keeping the canvas size
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Place a second image at an offset, growing the canvas
    Collage(CollageArgs),

    /// Set a single pixel
    Pixel(PixelArgs),

    /// Add a constant to every channel
    Brightness(BrightnessArgs),

    /// Stretch or flatten channels around mid-grey
    Contrast(ContrastArgs),

    /// Stamp black text with the built-in 5x7 font
    Title(TitleArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct CropArgs {
    /// Input image
    input: PathBuf,

    /// First corner X
    #[arg(allow_negative_numbers = true)]
    x1: i32,

    /// First corner Y
    #[arg(allow_negative_numbers = true)]
    y1: i32,

    /// Opposite corner X
    #[arg(allow_negative_numbers = true)]
    x2: i32,

    /// Opposite corner Y
    #[arg(allow_negative_numbers = true)]
    y2: i32,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct RotateArgs {
    /// Input image
    input: PathBuf,

    /// Angle in degrees
    #[arg(allow_negative_numbers = true)]
    angle: f64,

    /// Pivot X (default: image center)
    #[arg(long, allow_negative_numbers = true)]
    pivot_x: Option<i32>,

    /// Pivot Y (default: image center)
    #[arg(long, allow_negative_numbers = true)]
    pivot_y: Option<i32>,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CollageArgs {
    /// Base image
    input: PathBuf,

    /// Image placed on top
    overlay: PathBuf,

    /// Overlay X offset relative to the base's top-left corner
    #[arg(allow_negative_numbers = true)]
    x: i32,

    /// Overlay Y offset relative to the base's top-left corner
    #[arg(allow_negative_numbers = true)]
    y: i32,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PixelArgs {
    /// Input image
    input: PathBuf,

    /// Column
    #[arg(allow_negative_numbers = true)]
    x: i32,

    /// Row (0 = top)
    #[arg(allow_negative_numbers = true)]
    y: i32,

    /// Color as R,G,B
    #[arg(value_parser = parse_rgb)]
    color: Pixel,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct BrightnessArgs {
    /// Input image
    input: PathBuf,

    /// Amount added to every channel
    #[arg(allow_negative_numbers = true)]
    delta: i32,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ContrastArgs {
    /// Input image
    input: PathBuf,

    /// Contrast in [-254, 258]; 0 leaves the image unchanged
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct TitleArgs {
    /// Input image
    input: PathBuf,

    /// Text to draw
    text: String,

    /// Left edge of the first glyph
    #[arg(short = 'x', long, default_value = "0", allow_negative_numbers = true)]
    x: i32,

    /// Top edge of the glyphs
    #[arg(short = 'y', long, default_value = "0", allow_negative_numbers = true)]
    y: i32,

    /// Output image (default: overwrite input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Parses `R,G,B` with each channel in `0..=255`.
fn parse_rgb(s: &str) -> std::result::Result<Pixel, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("'{c}': {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match channels[..] {
        [r, g, b] => Ok(Pixel::new(r, g, b)),
        _ => Err(format!("expected R,G,B, got {} value(s)", channels.len())),
    }
}

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive until exit.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid log filter: {directives}"))?,
        Err(_) => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Not a file path: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Crop(args) => commands::crop::run(args, cli.verbose),
        Commands::Rotate(args) => commands::rotate::run(args, cli.verbose),
        Commands::Collage(args) => commands::collage::run(args, cli.verbose),
        Commands::Pixel(args) => commands::pixel::run(args, cli.verbose),
        Commands::Brightness(args) => commands::adjust::run_brightness(args, cli.verbose),
        Commands::Contrast(args) => commands::adjust::run_contrast(args, cli.verbose),
        Commands::Title(args) => commands::title::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("255,0,12"), Ok(Pixel::new(255, 0, 12)));
        assert_eq!(parse_rgb(" 1, 2 ,3"), Ok(Pixel::new(1, 2, 3)));
        assert!(parse_rgb("256,0,0").is_err());
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,3,4").is_err());
        assert!(parse_rgb("red").is_err());
    }

    #[test]
    fn test_negative_arguments() {
        let cli = Cli::try_parse_from(["bmpkit", "collage", "a.bmp", "b.bmp", "-3", "-7"]).unwrap();
        match cli.command {
            Commands::Collage(args) => assert_eq!((args.x, args.y), (-3, -7)),
            _ => panic!("expected collage"),
        }

        let cli = Cli::try_parse_from(["bmpkit", "brightness", "a.bmp", "-40", "-o", "b.bmp"]).unwrap();
        match cli.command {
            Commands::Brightness(args) => {
                assert_eq!(args.delta, -40);
                assert_eq!(args.output.as_deref(), Some(Path::new("b.bmp")));
            }
            _ => panic!("expected brightness"),
        }

        let cli = Cli::try_parse_from(["bmpkit", "title", "a.bmp", "Hi", "-x", "-2"]).unwrap();
        match cli.command {
            Commands::Title(args) => assert_eq!((args.x, args.y), (-2, 0)),
            _ => panic!("expected title"),
        }
    }

    #[test]
    fn test_negative_coordinates_reach_the_library() {
        let cli = Cli::try_parse_from(["bmpkit", "pixel", "a.bmp", "-1", "0", "1,2,3"]).unwrap();
        match cli.command {
            Commands::Pixel(args) => {
                assert_eq!((args.x, args.y), (-1, 0));
                assert_eq!(args.color, Pixel::new(1, 2, 3));
            }
            _ => panic!("expected pixel"),
        }

        let cli = Cli::try_parse_from(["bmpkit", "crop", "a.bmp", "-1", "-2", "3", "-4"]).unwrap();
        match cli.command {
            Commands::Crop(args) => assert_eq!((args.x1, args.y1, args.x2, args.y2), (-1, -2, 3, -4)),
            _ => panic!("expected crop"),
        }

        let cli = Cli::try_parse_from(["bmpkit", "rotate", "a.bmp", "-90", "--pivot-x", "-5"]).unwrap();
        match cli.command {
            Commands::Rotate(args) => {
                assert_eq!(args.angle, -90.0);
                assert_eq!((args.pivot_x, args.pivot_y), (Some(-5), None));
            }
            _ => panic!("expected rotate"),
        }
    }

    #[test]
    fn test_output_defaults_to_none() {
        let cli = Cli::try_parse_from(["bmpkit", "-v", "crop", "a.bmp", "0", "0", "1", "1"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Crop(args) => assert!(args.output.is_none()),
            _ => panic!("expected crop"),
        }
    }
}
