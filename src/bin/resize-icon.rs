use anyhow::Result;
use browseback_icons::{logging, resize, IconError, ResizeConfig, DEFAULT_SIZES};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "resize-icon",
    about = "Resize an existing bitmap into the BrowseBack extension icons"
)]
struct Args {
    /// Source bitmap to resample.
    #[clap(short, long, value_name = "FILE", default_value = "browseback.png")]
    input: PathBuf,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// PNG icon sizes to generate.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[clap(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, &args);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ResizeConfig {
        sizes: args.png.clone().unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
    };

    println!("🎨 BrowseBack Icon Resizer\n");
    resize::resize_icon(&args.input, &args.output, &config)?;

    println!("\n🎉 All icons created successfully!");
    println!("📁 Location: {}/", args.output.display());
    println!("\n📝 Next steps:");
    println!("   1. Check the {} folder", args.output.display());
    println!("   2. Verify all sizes look good");
    println!("   3. Load the extension in the browser to test");
    Ok(())
}

fn report_failure(err: &anyhow::Error, args: &Args) {
    eprintln!("✗ Error: {err:#}");

    match err.downcast_ref::<IconError>() {
        Some(IconError::SourceNotFound { .. }) => {
            eprintln!(
                "   Put {} in the current folder or pass --input <FILE>",
                args.input.display()
            );
            return;
        }
        Some(IconError::CodecUnavailable { .. }) => {
            eprintln!("The image format is not supported by this build.");
            eprintln!("Convert the source to PNG first, or resize manually:");
        }
        _ => eprintln!("\nOr resize manually:"),
    }

    eprintln!("   1. Open {} in an image editor", args.input.display());
    eprintln!("   2. Save as 128x128 → icon128.png");
    eprintln!("   3. Save as 48x48 → icon48.png");
    eprintln!("   4. Save as 16x16 → icon16.png");
}
