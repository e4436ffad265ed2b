use bmpgray::io::ConvertError;
use bmpgray::paths::{PathError, resolve_paths};
use bmpgray::{ConvertOptions, PixelFormat, convert_with};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum FormatArg {
    /// Follow the header: <= 8 bpp is single-channel, deeper is three-channel
    Auto,
    /// One byte per pixel, copied unchanged
    Single,
    /// Three bytes per pixel, converted to gray
    Three,
}

impl FormatArg {
    fn pixel_format(self) -> Option<PixelFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Single => Some(PixelFormat::SingleChannel),
            FormatArg::Three => Some(PixelFormat::ThreeChannel),
        }
    }
}

/// Convert a bitmap file to grayscale
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source bitmap (.bmp)
    input: PathBuf,

    /// Destination bitmap (.bmp); defaults to <input>_copy.bmp
    output: Option<PathBuf>,

    /// Pixel layout of the source
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let (input, output) = resolve_paths(&args.input, args.output.as_deref())?;
    println!("input: {}", input.display());
    println!("output: {}", output.display());

    let mut options = ConvertOptions::new();
    if let Some(format) = args.format.pixel_format() {
        options = options.with_format(format);
    }

    let stats = convert_with(&input, &output, &options)?;
    println!("{stats}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
