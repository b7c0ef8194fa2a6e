use anyhow::Result;
use browseback_icons::{icon_gen, logging, output::icon_file_name, IconError, RenderConfig};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "generate-icons",
    about = "Render the BrowseBack extension icons (16, 48 and 128 px)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// JSON file overriding sizes, gradient colours or corner ratio.
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

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
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let icons = icon_gen::generate_icons(&config, &args.output)?;

    println!("\n🎉 All icons generated successfully!");
    println!("📁 Location: {}/", args.output.display());
    println!("\nFiles created:");
    for icon in &icons {
        println!(
            "   - {:<12} ({}×{})",
            icon_file_name(icon.size),
            icon.size,
            icon.size
        );
    }
    Ok(())
}

fn report_failure(err: &anyhow::Error) {
    eprintln!("✗ Error: {err:#}");

    if let Some(IconError::CodecUnavailable { .. }) = err.downcast_ref::<IconError>() {
        eprintln!("The PNG codec is missing from this build.");
        eprintln!("Reinstall with the image crate's default features:");
        eprintln!("   cargo install --path . --force");
    }

    eprintln!("\nOr draw the icons by hand instead:");
    eprintln!("   Export icon16.png, icon48.png and icon128.png from any image editor into icons/");
}
