use crate::{new_workdir, site_icons};

fn path_str(path: std::path::PathBuf) -> String {
    path.to_str().unwrap().to_owned()
}

fn assert_builtin_ico(ico: &[u8]) {
    assert_eq!(&ico[..6], &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00]);
    // width, height, palette, reserved, planes, bit count
    assert_eq!(&ico[6..14], &[32, 32, 0, 0, 1, 0, 32, 0]);
    assert_eq!(ico.len(), 6 + 16 + 40 + 32 * 32 * 4 + 32 * 32 / 8);
}

#[test]
fn should_convert_svg_with_converter() {
    let workdir = new_workdir().with_file("images/favicon.svg", "<svg/>");

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("favicon")
        .assert()
        .success();

    let svg = path_str(workdir.output("favicon.svg"));
    let png16 = path_str(workdir.output("favicon-16x16.png"));
    let png32 = path_str(workdir.output("favicon-32x32.png"));
    let png48 = path_str(workdir.output("favicon-48x48.png"));
    let ico = path_str(workdir.output("favicon.ico"));
    workdir.assert_invocations(&[
        &["--version"],
        &["-background", "none", "-resize", "16x16", svg.as_str(), png16.as_str()],
        &["-background", "none", "-resize", "32x32", svg.as_str(), png32.as_str()],
        &["-background", "none", "-resize", "48x48", svg.as_str(), png48.as_str()],
        &[png16.as_str(), png32.as_str(), png48.as_str(), ico.as_str()],
    ]);
    let contents = std::fs::read_to_string(workdir.output("favicon.ico")).unwrap();
    assert!(contents.starts_with("converted by fake-convert"));
    assert!(workdir.leftover_rasters().is_empty());
}

#[test]
fn should_build_basic_favicon_without_converter() {
    let workdir = new_workdir();

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.missing_converter())
        .arg("favicon")
        .assert()
        .success();

    assert_builtin_ico(&std::fs::read(workdir.output("favicon.ico")).unwrap());
}

#[test]
fn should_build_basic_favicon_if_converter_probe_fails() {
    let workdir = new_workdir().with_exit_status(1);

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("favicon")
        .assert()
        .success();

    workdir.assert_invocations(&[&["--version"]]);
    assert_builtin_ico(&std::fs::read(workdir.output("favicon.ico")).unwrap());
}

#[test]
fn should_build_basic_favicon_on_request() {
    let workdir = new_workdir();

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .args(["favicon", "--builtin"])
        .assert()
        .success();

    workdir.assert_invocations(&[]);
    assert_builtin_ico(&std::fs::read(workdir.output("favicon.ico")).unwrap());
}

#[test]
fn should_fail_and_clean_up_if_rasterizing_fails() {
    let workdir = new_workdir()
        .with_file("images/favicon.svg", "<svg/>")
        .with_failing_arg("favicon-32x32.png");

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("favicon")
        .assert()
        .failure();

    assert_eq!(workdir.invocations().len(), 3);
    assert!(!workdir.output("favicon.ico").exists());
    assert!(workdir.leftover_rasters().is_empty());
}

#[test]
fn should_fail_and_clean_up_if_combining_fails() {
    let workdir = new_workdir()
        .with_file("images/favicon.svg", "<svg/>")
        .with_failing_arg("favicon.ico");

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("favicon")
        .assert()
        .failure();

    assert_eq!(workdir.invocations().len(), 5);
    assert!(!workdir.output("favicon.ico").exists());
    assert!(workdir.leftover_rasters().is_empty());
}

#[test]
fn should_reject_repeated_sizes_before_converting() {
    let workdir = new_workdir()
        .with_file("images/favicon.svg", "<svg/>")
        .with_file("site-icons.toml", "[favicon]\nsizes = [16, 32, 32]\n");

    site_icons(&workdir)
        .arg("--converter")
        .arg(workdir.converter())
        .arg("favicon")
        .assert()
        .failure();

    workdir.assert_invocations(&[&["--version"]]);
    assert!(!workdir.output("favicon.ico").exists());
}
