use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A non-square source is squashed into exactly square icons.
#[test]
fn test_non_square_source_yields_square_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    create_test_image(&temp_dir.path().join("browseback.png"), 400, 250);

    let output = run_resize_icon(temp_dir.path(), &[]);

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("resize-icon command failed");
    }

    for size in [16, 48, 128] {
        let icon = image::open(temp_dir.path().join("icons").join(format!("icon{size}.png")))
            .unwrap_or_else(|e| panic!("icon{size}.png should decode: {e}"));
        assert_eq!((icon.width(), icon.height()), (size, size));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Original size: 400x250"), "stdout: {stdout}");
    assert!(stdout.contains("KB"), "stdout: {stdout}");
}

/// Without a source bitmap the tool says so and touches nothing.
#[test]
fn test_missing_source_reports_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_resize_icon(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

/// Custom sizes and paths via flags.
#[test]
fn test_custom_sizes_and_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    create_test_image(&temp_dir.path().join("logo.png"), 256, 256);

    let output = run_resize_icon(
        temp_dir.path(),
        &["--input", "logo.png", "--output", "dist", "--png", "32,64"],
    );
    assert!(output.status.success(), "resize-icon with flags failed");

    let dist = temp_dir.path().join("dist");
    assert_eq!(std::fs::read_dir(&dist).unwrap().count(), 2);
    assert_eq!(image::open(dist.join("icon64.png")).unwrap().width(), 64);
}

/// A format the build cannot decode gets the codec hint and the manual steps.
#[test]
fn test_unsupported_format_suggests_manual_resize() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("logo.xyz"), b"not an image at all").unwrap();

    let output = run_resize_icon(temp_dir.path(), &["-i", "logo.xyz"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no image codec available"), "stderr: {stderr}");
    assert!(stderr.contains("not supported by this build"), "stderr: {stderr}");
    assert!(stderr.contains("Save as 128x128"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("icons").exists());
}

/// A corrupt PNG is a processing failure, not a missing codec.
#[test]
fn test_corrupt_source_gets_generic_hint() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("browseback.png"), b"not an image at all").unwrap();

    let output = run_resize_icon(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to process image"), "stderr: {stderr}");
    assert!(stderr.contains("Or resize manually"), "stderr: {stderr}");
    assert!(!stderr.contains("not supported by this build"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("icons").exists());
}

/// Huge sizes are refused up front instead of exhausting memory.
#[test]
fn test_oversized_png_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    create_test_image(&temp_dir.path().join("browseback.png"), 64, 64);

    let output = run_resize_icon(temp_dir.path(), &["--png", "16,4294967295"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds the maximum"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("icons").exists());
}

/// Creates a test image with a blue gradient and a translucent band
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let blue = (255.0 * x as f32 / width as f32) as u8;
        let green = (100.0 * y as f32 / height as f32) as u8;
        let alpha = if y < height / 4 { 128 } else { 255 };

        *pixel = Rgba([50, green, blue, alpha]);
    }

    image.save(path).expect("Failed to save test image");
}

fn run_resize_icon(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resize-icon"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run resize-icon command")
}
