//! # logobin CLI
//!
//! Command-line interface for preparing printer logos.
//!
//! ## Usage
//!
//! ```bash
//! # Convert Logo_in.png to Logo.bin (384 dots wide)
//! logobin convert
//!
//! # Convert a photo, doubling dot height, and keep a preview
//! logobin convert photo.jpg -o photo.bin --double-height --preview photo-preview.png
//!
//! # Show what is inside an existing blob
//! logobin inspect Logo.bin
//!
//! # Render an existing blob back to PNG
//! logobin inspect Logo.bin --png Logo.png
//! ```
//!
//! Set `RUST_LOG=debug` for per-stage logging.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use logobin::{
    LogoConfig, LogoError, PrinterConfig, RasterImage,
    config::{DEFAULT_INPUT, DEFAULT_OUTPUT},
    pipeline,
    preview,
    render::bitmap::MonoBitmap,
};

/// logobin - Thermal printer logo converter
#[derive(Parser, Debug)]
#[command(name = "logobin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an image into a GS v 0 raster command file
    Convert {
        /// Input image (any format the image crate can decode)
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output file (or device node)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Output width in dots (multiple of 8)
        #[arg(long, default_value_t = PrinterConfig::THERMAL_58MM.width_dots as u32)]
        width: u32,

        /// Ask the printer to double each dot horizontally
        #[arg(long)]
        double_width: bool,

        /// Ask the printer to double each dot vertically
        #[arg(long)]
        double_height: bool,

        /// Save the dithered image as PNG
        #[arg(long, value_name = "FILE")]
        preview: Option<PathBuf>,
    },

    /// Decode the header of an existing raster command file
    Inspect {
        /// File produced by `convert`
        file: PathBuf,

        /// Render the bitmap to a PNG file
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LogoError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            width,
            double_width,
            double_height,
            preview,
        } => {
            let mut config = LogoConfig::new(input, output)
                .target_width(width)
                .double_width(double_width)
                .double_height(double_height);
            if let Some(path) = preview {
                config = config.preview_path(path);
            }

            let image = pipeline::run(&config)?;
            println!(
                "Saved {}x{} logo to {} ({} bytes)",
                image.header.width_dots(),
                image.header.height,
                config.output_path.display(),
                image.byte_len()
            );
        }
        Commands::Inspect { file, png } => {
            let bytes = fs::read(&file)?;
            let image = RasterImage::parse(&bytes)?;
            print_summary(&image);

            if let Some(png_path) = png {
                let bitmap = MonoBitmap {
                    width: image.header.width_dots(),
                    height: image.header.height as u32,
                    data: image.data,
                };
                fs::write(&png_path, preview::to_png(&preview::render_bitmap(&bitmap))?)?;
                println!("Saved to {}", png_path.display());
            }
        }
    }

    Ok(())
}

/// Print header fields and ink coverage
fn print_summary(image: &RasterImage) {
    let header = &image.header;
    let ink: u64 = image.data.iter().map(|b| b.count_ones() as u64).sum();
    let dots = header.width_dots() as u64 * header.height as u64;
    let printer = PrinterConfig::THERMAL_58MM;

    println!("Command:       GS v 0");
    println!(
        "Mode:          {} (double width: {}, double height: {})",
        header.mode.code(),
        header.mode.double_width,
        header.mode.double_height
    );
    println!(
        "Size:          {}x{} dots ({} bytes per row)",
        header.width_dots(),
        header.height,
        header.width_bytes
    );
    println!(
        "Length:        {:.1}mm on {}",
        printer.dots_to_mm(header.height as u32),
        printer.name
    );
    println!("Payload:       {} bytes", image.data.len());
    if dots > 0 {
        println!("Ink coverage:  {:.1}%", ink as f64 * 100.0 / dots as f64);
    }
}
