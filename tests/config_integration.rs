use clap::error::ErrorKind;
use neon_ui::Error;
use neon_ui::config::AppConfig;
use neon_ui::ui::components::{BarColor, RingColor};
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CONFIG_FILE");
        env::remove_var("NEON_GALLERY__MAX");
        env::remove_var("NEON_GALLERY__TITLE");
        env::remove_var("NEON_GALLERY__SAMPLES");
        env::remove_var("NEON_GALLERY__BAR_COLOR");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["neon-gallery"]).expect("defaults should load");
    let gallery = config.gallery;
    assert_eq!(gallery.title, "Neon UI");
    assert!((gallery.max - 100.0).abs() < f64::EPSILON);
    assert_eq!(gallery.samples, vec![0.0, 33.6, 50.0, 75.0, 120.0]);
    assert!(gallery.animated);
    assert!(gallery.output.is_none());
    assert_eq!(gallery.bar_color(), BarColor::Gradient);
    assert_eq!(gallery.ring_color(), RingColor::Cyan);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("NEON_GALLERY__MAX", "250");
        env::set_var("NEON_GALLERY__TITLE", "From Env");
    }

    let config = AppConfig::load_from_args(["neon-gallery"]).expect("Failed to load config");
    assert!((config.gallery.max - 250.0).abs() < f64::EPSILON);
    assert_eq!(config.gallery.title, "From Env");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() -> anyhow::Result<()> {
    clear_env_vars();

    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("gallery.yaml");
    fs::write(
        &file_path,
        r#"
gallery:
  title: "From File"
  samples: [10, 20]
  ring_color: pink
  animated: false
"#,
    )?;

    let path = file_path.to_string_lossy().into_owned();
    let config = AppConfig::load_from_args(["neon-gallery", "--config", path.as_str()])?;
    assert_eq!(config.gallery.title, "From File");
    assert_eq!(config.gallery.samples, vec![10.0, 20.0]);
    assert_eq!(config.gallery.ring_color(), RingColor::Pink);
    assert!(!config.gallery.animated);
    // Untouched keys keep their defaults.
    assert!((config.gallery.max - 100.0).abs() < f64::EPSILON);

    clear_env_vars();
    Ok(())
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["neon-gallery", "--config", "/nonexistent/neon.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("NEON_GALLERY__TITLE", "From Env");
    }

    let config = AppConfig::load_from_args([
        "neon-gallery",
        "--title",
        "From CLI",
        "--max",
        "4",
        "--no-animation",
        "--output",
        "out/gallery.html",
    ])
    .expect("Failed to load config");
    assert_eq!(config.gallery.title, "From CLI");
    assert!((config.gallery.max - 4.0).abs() < f64::EPSILON);
    assert!(!config.gallery.animated);
    assert_eq!(
        config.gallery.output.as_deref(),
        Some(std::path::Path::new("out/gallery.html"))
    );

    clear_env_vars();
}

#[test]
#[serial]
fn test_unknown_color_key_falls_back() {
    clear_env_vars();
    unsafe {
        env::set_var("NEON_GALLERY__BAR_COLOR", "ultraviolet");
    }

    let config = AppConfig::load_from_args(["neon-gallery"]).expect("Failed to load config");
    assert_eq!(config.gallery.bar_color, "ultraviolet");
    assert_eq!(config.gallery.bar_color(), BarColor::Gradient);

    clear_env_vars();
}

#[test]
#[serial]
fn test_write_gallery_to_file() -> anyhow::Result<()> {
    clear_env_vars();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("nested").join("gallery.html");
    let out_str = out.to_string_lossy().into_owned();
    let config = AppConfig::load_from_args(["neon-gallery", "--output", out_str.as_str()])?;

    neon_ui::ui::gallery::write_gallery(&config.gallery)?;
    let written = fs::read_to_string(&out)?;
    assert!(written.contains("<title>Neon UI</title>"));
    assert!(written.contains(r#"role="progressbar""#));
    Ok(())
}

#[test]
#[serial]
fn test_help_and_version_are_not_config_errors() {
    clear_env_vars();

    for (flag, kind) in [
        ("--help", ErrorKind::DisplayHelp),
        ("--version", ErrorKind::DisplayVersion),
    ] {
        match AppConfig::load_from_args(["neon-gallery", flag]) {
            Err(Error::Cli(e)) => assert_eq!(e.kind(), kind),
            other => panic!("{flag}: expected a clap display request, got {other:?}"),
        }
    }
}

#[test]
#[serial]
fn test_bad_flag_is_a_cli_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["neon-gallery", "--no-such-flag"]);
    assert!(matches!(result, Err(Error::Cli(_))));
}
