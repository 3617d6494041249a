use std::path::Path;

use image::{Rgba, RgbaImage};
use pwa_icon_forge::{
    BrandPalette, GenerateError, GeneratorConfig, ICONS, RenderMode, generate, safe_zone_padding,
};

fn write_source(dir: &Path, name: &str, color: [u8; 4]) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(48, 48, Rgba(color)).save(&path).unwrap();
    path
}

fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn source_mode_writes_four_icons_at_exact_sizes() {
    let tmp = tempfile::tempdir().unwrap();
    let source = write_source(tmp.path(), "organic.png", [200, 40, 40, 255]);
    let out = tmp.path().join("public");

    let config = GeneratorConfig::new().with_source(&source).with_output_dir(&out);
    let report = generate(&config).unwrap();

    assert_eq!(report.len(), 4);
    assert!(!out.join("apple-touch-icon.png").exists());
    for icon in &report.icons {
        let img = image::open(&icon.path).unwrap();
        assert_eq!((img.width(), img.height()), (icon.spec.size, icon.spec.size));
        assert_eq!(img.color(), image::ColorType::Rgb8, "{}", icon.spec.name);
    }
}

#[test]
fn opaque_source_leaves_no_background_inside_region() {
    let tmp = tempfile::tempdir().unwrap();
    let source = write_source(tmp.path(), "organic.png", [10, 20, 200, 255]);
    let out = tmp.path().join("out");
    let background = BrandPalette::default().background;

    let config = GeneratorConfig::new().with_source(&source).with_output_dir(&out);
    generate(&config).unwrap();

    let img = image::open(out.join("maskable-icon-512x512.png")).unwrap().to_rgb8();
    let padding = safe_zone_padding(512);
    let bg = [background.r, background.g, background.b];

    for (x, y, p) in img.enumerate_pixels() {
        let inside = (padding..512 - padding).contains(&x) && (padding..512 - padding).contains(&y);
        if inside {
            assert_ne!(p.0, bg, "background inside region at ({x}, {y})");
        } else {
            assert_eq!(p.0, bg, "content in safe-zone border at ({x}, {y})");
        }
    }
}

#[test]
fn gif_source_at_default_name_is_decoded() {
    let tmp = tempfile::tempdir().unwrap();
    let source = write_source(tmp.path(), "organic.gif", [250, 250, 250, 255]);

    let config = GeneratorConfig::new()
        .with_source(&source)
        .with_output_dir(tmp.path().join("public"));

    assert_eq!(generate(&config).unwrap().len(), 4);
}

#[test]
fn missing_source_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public");

    let config = GeneratorConfig::new()
        .with_source(tmp.path().join("organic.gif"))
        .with_output_dir(&out);
    let err = generate(&config).unwrap_err();

    assert!(matches!(err, GenerateError::MissingAsset { .. }));
    assert!(!out.exists());
}

#[test]
fn undecodable_source_is_a_generation_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("organic.gif");
    std::fs::write(&source, b"not an image").unwrap();

    let config = GeneratorConfig::new()
        .with_source(&source)
        .with_output_dir(tmp.path().join("public"));

    assert!(matches!(
        generate(&config).unwrap_err(),
        GenerateError::Decode { .. }
    ));
}

#[test]
fn procedural_mode_writes_every_icon() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public");

    let config = GeneratorConfig::new()
        .with_mode(RenderMode::Procedural)
        .with_source(tmp.path().join("absent.gif"))
        .with_output_dir(&out);
    let report = generate(&config).unwrap();

    assert_eq!(report.len(), ICONS.len());
    let mut expected: Vec<_> = ICONS.iter().map(|i| i.name.to_string()).collect();
    expected.sort();
    assert_eq!(output_files(&out), expected);

    let touch = image::open(out.join("apple-touch-icon.png")).unwrap();
    assert_eq!((touch.width(), touch.height()), (180, 180));
}

#[test]
fn second_run_overwrites_with_identical_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("public");
    let config = GeneratorConfig::new()
        .with_mode(RenderMode::Procedural)
        .with_output_dir(&out);

    let first = generate(&config).unwrap();
    let before: Vec<_> = first.paths().map(|p| std::fs::read(p).unwrap()).collect();

    let second = generate(&config).unwrap();
    let after: Vec<_> = second.paths().map(|p| std::fs::read(p).unwrap()).collect();

    assert_eq!(before, after);
    assert_eq!(output_files(&out).len(), ICONS.len());
}

#[test]
fn config_file_drives_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("icons");
    let config_path = tmp.path().join("icons.json");
    std::fs::write(
        &config_path,
        format!(
            r##"{{"outputDir": {:?}, "mode": "procedural", "colors": {{"background": "#000000"}}}}"##,
            out.display().to_string()
        ),
    )
    .unwrap();

    let config = GeneratorConfig::from_path(&config_path).unwrap();
    generate(&config).unwrap();

    let img = image::open(out.join("pwa-64x64.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
}
