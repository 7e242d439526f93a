// E2E tests against the real external tools.
//
// Each test is skipped when the tool it needs is not on PATH. Fixtures are
// generated with `image` and `lopdf` (no committed files).

use std::path::Path;
use std::process::Command;

use image::{Rgb, RgbImage};
use lopdf::{Document, Object, Stream, dictionary};
use tempfile::tempdir;

// ============================================================
// Guards and helpers
// ============================================================

fn tool_available(program: &str, version_flag: &str) -> bool {
    Command::new(program)
        .arg(version_flag)
        .output()
        .is_ok_and(|o| o.status.success())
}

fn imagemagick_available() -> bool {
    tool_available("convert", "-version")
}

fn ghostscript_available() -> bool {
    tool_available("gs", "--version")
}

/// Write a config that keeps desktop notifications out of test runs.
fn quiet_notifier(dir: &Path) {
    std::fs::write(
        dir.join("scan_tools.yaml"),
        "notifier_program: scan-tools-missing-notifier\n",
    )
    .expect("write settings");
}

/// 40x30 white canvas with a 10x6 black block away from the edges.
fn create_bordered_png(path: &Path) {
    let mut img = RgbImage::from_pixel(40, 30, Rgb([255, 255, 255]));
    for x in 12..22 {
        for y in 9..15 {
            img.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    img.save(path).expect("save test PNG");
}

/// Create a minimal valid 1-page PDF using lopdf.
fn create_single_page_pdf(path: &Path) {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let content_stream = Stream::new(dictionary! {}, b"0 0 m 100 100 l S".to_vec());
    let content_id = doc.add_object(content_stream);

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {},
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save test PDF");
}

// ============================================================
// 1. autocrop with ImageMagick
// ============================================================

#[test]
fn test_e2e_autocrop_trims_border() {
    if !imagemagick_available() {
        eprintln!("Skipping: ImageMagick `convert` not found in PATH");
        return;
    }
    let dir = tempdir().expect("create temp dir");
    quiet_notifier(dir.path());
    let input = dir.path().join("scan.png");
    create_bordered_png(&input);

    let output = Command::new(env!("CARGO_BIN_EXE_autocrop"))
        .arg(&input)
        .output()
        .expect("failed to execute binary");

    assert!(output.status.success());
    let cropped = dir.path().join("scan_cropped.png");
    let (w, h) = image::image_dimensions(&cropped).expect("cropped image should be readable");
    assert_eq!((w, h), (10, 6));
    assert_eq!(image::image_dimensions(&input).unwrap(), (40, 30));
}

// ============================================================
// 2. convert_to_compressed_pdf with Ghostscript
// ============================================================

#[test]
fn test_e2e_compress_pdf() {
    if !ghostscript_available() {
        eprintln!("Skipping: Ghostscript `gs` not found in PATH");
        return;
    }
    let dir = tempdir().expect("create temp dir");
    quiet_notifier(dir.path());
    let input = dir.path().join("report.pdf");
    create_single_page_pdf(&input);
    let original = std::fs::read(&input).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_convert_to_compressed_pdf"))
        .arg(&input)
        .output()
        .expect("failed to execute binary");

    assert!(output.status.success());
    let compressed = dir.path().join("report_compressed.pdf");
    let doc = Document::load(&compressed).expect("compressed PDF should be loadable");
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(std::fs::read(&input).unwrap(), original, "input must be untouched");
}

#[test]
fn test_e2e_compress_pdf_twice_collides() {
    if !ghostscript_available() {
        eprintln!("Skipping: Ghostscript `gs` not found in PATH");
        return;
    }
    let dir = tempdir().expect("create temp dir");
    quiet_notifier(dir.path());
    let input = dir.path().join("report.pdf");
    create_single_page_pdf(&input);

    let run = || {
        Command::new(env!("CARGO_BIN_EXE_convert_to_compressed_pdf"))
            .arg(&input)
            .output()
            .expect("failed to execute binary")
    };

    assert!(run().status.success());
    let second = run();
    assert_eq!(second.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&second.stdout).contains("report_compressed.pdf"));
}
