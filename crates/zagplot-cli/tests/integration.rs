//! Integration tests for zagplot CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn zagplot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zagplot"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Write a blank `width` x `height` PNG into `dir`.
fn test_image(dir: &TempDir, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join("input.png");
    image::RgbImage::new(width, height).save(&path).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

fn corner(value: &serde_json::Value) -> (f64, f64) {
    (value["x"].as_f64().unwrap(), value["y"].as_f64().unwrap())
}

fn assert_corner(value: &serde_json::Value, expected: (f64, f64)) {
    let (x, y) = corner(value);
    assert!(
        (x - expected.0).abs() < 1e-9 && (y - expected.1).abs() < 1e-9,
        "expected {:?}, got ({}, {})",
        expected,
        x,
        y
    );
}

#[test]
fn help_lists_commands() {
    let output = zagplot(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("plot"), "Should list 'plot' command");
    assert!(stdout.contains("config"), "Should list 'config' command");
}

#[test]
fn config_command_prints_defaults() {
    let output = zagplot(&["config"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("line_separation: 0.4"));
    assert!(stdout.contains("plot_angle: 45.0"));
    assert!(stdout.contains("plot_start: STARTPLOT"));
}

#[test]
fn plot_json_runs_corner_to_corner() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);

    let value = json(&zagplot(&["plot", arg(&image), "--width", "50", "--height", "50"]));

    assert_eq!(value["scale"]["x"].as_f64(), Some(0.5));
    assert_eq!(value["scale"]["y"].as_f64(), Some(0.5));

    let points = value["points"].as_array().unwrap();
    assert!(points.len() > 2, "Should have a zigzag, got {} points", points.len());
    assert_corner(&points[0], (0.0, 0.0));
    assert_corner(points.last().unwrap(), (50.0, 50.0));
    assert_corner(&value["start"], (0.0, 0.0));
    assert_corner(&value["end"], (50.0, 50.0));

    for point in points {
        let (x, y) = corner(point);
        assert!((-1e-9..=50.0 + 1e-9).contains(&x), "x {} out of bounds", x);
        assert!((-1e-9..=50.0 + 1e-9).contains(&y), "y {} out of bounds", y);
    }
}

#[test]
fn negative_angle_starts_top_left() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);

    let value = json(&zagplot(&[
        "plot", arg(&image), "--width", "50", "--height", "50", "--angle", "-45",
    ]));

    let points = value["points"].as_array().unwrap();
    assert_corner(&points[0], (0.0, 50.0));
    assert_corner(points.last().unwrap(), (50.0, 0.0));
}

#[test]
fn plot_svg_has_polyline() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);

    let output = zagplot(&["plot", arg(&image), "--width", "50", "--height", "50", "-f", "svg"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains(r#"viewBox="0 0 50 50""#));
    assert!(stdout.contains("<polyline"), "Should have polyline element");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn output_flag_writes_file() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 40, 20);
    let out = dir.path().join("path.json");

    let output = zagplot(&["plot", arg(&image), "-o", arg(&out)]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "Nothing should go to stdout");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    // 40x20 px into 100x100 mm keeps aspect: 100x50 mm.
    assert_corner(&value["end"], (100.0, 50.0));
}

#[test]
fn png_preview_is_written() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);
    let png = dir.path().join("preview.png");

    let output = zagplot(&[
        "plot", arg(&image), "--width", "50", "--height", "50",
        "--png", arg(&png), "--dpi", "100", "-o", arg(&dir.path().join("path.json")),
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let (w, h) = image::image_dimensions(&png).unwrap();
    assert_eq!((w, h), (197, 197));
}

#[test]
fn config_file_is_honored() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);
    let config = dir.path().join("plot.yaml");
    fs::write(&config, "plot_angle: 135\nsize:\n  width: 20\n  height: 10\n").unwrap();

    let value = json(&zagplot(&["plot", arg(&image), "--config", arg(&config)]));

    // 100x100 px fits 20x10 mm at 0.1; 135 degrees runs bottom-right to top-left.
    assert_eq!(value["scale"]["x"].as_f64(), Some(0.1));
    assert_corner(&value["start"], (10.0, 0.0));
    assert_corner(&value["end"], (0.0, 10.0));
}

#[test]
fn flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);
    let config = dir.path().join("plot.yaml");
    fs::write(&config, "plot_angle: 135\nsize:\n  width: 20\n  height: 10\n").unwrap();

    let value = json(&zagplot(&[
        "plot", arg(&image), "--config", arg(&config), "--angle", "45",
    ]));

    assert_corner(&value["start"], (0.0, 0.0));
    assert_corner(&value["end"], (10.0, 10.0));
}

#[test]
fn axis_aligned_angle_fails() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);

    let output = zagplot(&["plot", arg(&image), "--angle", "90"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("plot angle 90"), "stderr: {}", stderr);
}

#[test]
fn missing_image_fails() {
    let output = zagplot(&["plot", "/nonexistent/input.png"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read image"), "stderr: {}", stderr);
}

#[test]
fn point_cap_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let image = test_image(&dir, 100, 100);

    let output = zagplot(&["plot", arg(&image), "--max-points", "3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("within 3 points"), "stderr: {}", stderr);
}
