use crate::{new_workdir, site_icons};
use base64::{engine::general_purpose::STANDARD, Engine};
use site_icons_core::apple_touch::APPLE_TOUCH_ICON_BASE64;

mod favicon;

#[test]
fn should_write_apple_touch_icon() {
    let workdir = new_workdir();

    site_icons(&workdir)
        .arg("apple-touch-icon")
        .assert()
        .success();

    let png = std::fs::read(workdir.output("apple-touch-icon.png")).unwrap();
    assert_eq!(STANDARD.encode(png), APPLE_TOUCH_ICON_BASE64);
    workdir.assert_invocations(&[]);
}

#[test]
fn should_fail_if_output_dir_is_missing() {
    let workdir = new_workdir();
    std::fs::remove_dir(workdir.output_dir()).unwrap();

    site_icons(&workdir)
        .arg("apple-touch-icon")
        .assert()
        .failure();

    assert!(!workdir.output_dir().exists());
}

#[test]
fn should_write_all_icons() {
    let workdir = new_workdir().with_file("images/favicon.svg", "<svg/>");

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("all")
        .assert()
        .success();

    assert!(workdir.output("apple-touch-icon.png").exists());
    assert!(workdir.output("favicon.ico").exists());
    assert_eq!(workdir.invocations().len(), 5);
    assert!(workdir.leftover_rasters().is_empty());
}

#[test]
fn should_read_config_file_from_env() {
    let workdir = new_workdir().with_file(
        "icons.toml",
        toml::to_string(&toml::toml! {
            converter = "magick"

            [favicon]
            sizes = [24, 64]
            builtin = true
        })
        .unwrap(),
    );

    let assert = site_icons(&workdir)
        .env("SITE_ICONS_CONFIG_FILE", workdir.path().join("icons.toml"))
        .arg("config")
        .assert()
        .success();

    let printed: site_icons_core::appconfig::AppConfig =
        toml::from_str(std::str::from_utf8(&assert.get_output().stdout).unwrap()).unwrap();
    assert_eq!(printed.output_dir, workdir.output_dir());
    assert_eq!(printed.converter, std::path::PathBuf::from("magick"));
    assert_eq!(printed.favicon.sizes, vec![24, 64]);
    assert!(printed.favicon.builtin);
}

#[test]
fn should_pick_up_config_file_in_working_directory() {
    let workdir = new_workdir().with_file("site-icons.toml", "[favicon]\nbuiltin = true\n");

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("favicon")
        .assert()
        .success();

    workdir.assert_invocations(&[]);
    assert!(workdir.output("favicon.ico").exists());
}

#[test]
fn should_fail_for_invalid_config_file() {
    let workdir = new_workdir().with_file("site-icons.toml", "output-dir = [");

    site_icons(&workdir)
        .arg("apple-touch-icon")
        .assert()
        .failure();

    assert!(!workdir.output("apple-touch-icon.png").exists());
}
