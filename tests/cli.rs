use assert_cmd::Command;
use inpaint_mask::draw::{MASK_BLACK, MASK_WHITE, Raster};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn inpaint_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("inpaint-mask").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_png(dir: &Path, name: &str, raster: &Raster) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, raster.encode_png().unwrap()).unwrap();
    path
}

fn write_script(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("session.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn read_mask(path: &Path) -> Raster {
    Raster::decode_png(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    inpaint_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Paint selection masks for generative image edits",
        ));
}

#[test]
fn long_version_starts_with_package_version() {
    let temp = TempDir::new().unwrap();
    inpaint_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn image_is_required() {
    let temp = TempDir::new().unwrap();
    inpaint_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn scripted_stroke_writes_binary_mask() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(400, 300, 0xFF_33_66_99));
    let script = write_script(
        temp.path(),
        r#"[
            {"op": "brush", "diameter": 40},
            {"op": "stroke", "points": [[100, 100]]},
            {"op": "save"}
        ]"#,
    );
    let output = temp.path().join("out/mask.png");

    inpaint_cmd(temp.path())
        .arg("--image")
        .arg(&image)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved mask to"));

    let mask = read_mask(&output);
    assert_eq!((mask.width(), mask.height()), (400, 300));
    assert_eq!(mask.get(100, 100), Some(MASK_WHITE));
    assert_eq!(mask.get(0, 0), Some(MASK_BLACK));
}

#[test]
fn container_scales_mask_and_prior_is_honoured() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(200, 100, 0xFF_10_20_30));
    let mut prior = Raster::filled(200, 100, MASK_BLACK);
    prior.pixels_mut()[..200 * 10].fill(MASK_WHITE);
    let prior = write_png(temp.path(), "prior.png", &prior);
    let output = temp.path().join("mask.png");

    inpaint_cmd(temp.path())
        .arg("--image")
        .arg(&image)
        .arg("--mask")
        .arg(&prior)
        .args(["--container", "100x100"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let mask = read_mask(&output);
    assert_eq!((mask.width(), mask.height()), (100, 50));
    assert_eq!(mask.get(50, 2), Some(MASK_WHITE));
    assert_eq!(mask.get(50, 30), Some(MASK_BLACK));
}

#[test]
fn close_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(64, 64, 0xFF_FF_FF_FF));
    let script = write_script(
        temp.path(),
        r#"[{"op": "stroke", "points": [[10, 10], [50, 50]]}, {"op": "close"}]"#,
    );
    let output = temp.path().join("mask.png");
    let preview = temp.path().join("preview.png");

    inpaint_cmd(temp.path())
        .arg("--image")
        .arg(&image)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--preview")
        .arg(&preview)
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed without saving"));

    assert!(!output.exists());
    assert!(!preview.exists());
}

#[test]
fn preview_is_written_alongside_mask() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(80, 60, 0xFF_00_00_00));
    let script = write_script(temp.path(), r#"[{"op": "invert"}]"#);
    let output = temp.path().join("mask.png");
    let preview = temp.path().join("preview.png");

    inpaint_cmd(temp.path())
        .arg("--image")
        .arg(&image)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--preview")
        .arg(&preview)
        .assert()
        .success();

    let mask = read_mask(&output);
    assert!(mask.pixels().iter().all(|&p| p == MASK_WHITE));
    let preview = read_mask(&preview);
    assert_eq!((preview.width(), preview.height()), (80, 60));
    assert_ne!(preview.get(40, 30), Some(0xFF_00_00_00));
}

#[test]
fn invalid_container_is_rejected() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(10, 10, 0xFF_00_00_00));

    inpaint_cmd(temp.path())
        .arg("--image")
        .arg(&image)
        .args(["--container", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid container size"));
}

#[test]
fn malformed_script_is_reported() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(10, 10, 0xFF_00_00_00));
    let script = write_script(temp.path(), r#"[{"op": "teleport"}]"#);

    inpaint_cmd(temp.path())
        .arg("--image")
        .arg(&image)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid session script"));
}

#[test]
fn init_config_writes_example_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom/config.toml");

    inpaint_cmd(temp.path())
        .arg("--init-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let contents = std::fs::read_to_string(&config).unwrap();
    assert!(contents.contains("[brush]"));
}

#[test]
fn config_filename_sets_default_output() {
    let temp = TempDir::new().unwrap();
    let image = write_png(temp.path(), "photo.png", &Raster::filled(20, 20, 0xFF_00_00_00));
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[export]\nfilename = \"selection.png\"\n").unwrap();

    inpaint_cmd(temp.path())
        .current_dir(temp.path())
        .arg("--image")
        .arg(&image)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(temp.path().join("selection.png").exists());
}
