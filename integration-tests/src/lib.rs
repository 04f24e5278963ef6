use std::path::{Path, PathBuf};

mod fake_convert;
pub use fake_convert::fake_convert_main;

// Adapted from
// https://github.com/rust-lang/cargo/blob/485670b3983b52289a2f353d589c57fae2f60f82/tests/testsuite/support/mod.rs#L507
// https://github.com/assert-rs/assert_cmd/blob/3ae01c9cf76e8b652c8ed4d2d64ff53149096339/src/cargo.rs#L192
fn target_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .map(|mut path| {
            path.pop();
            if path.ends_with("deps") {
                path.pop();
            }
            path
        })
        .unwrap()
}

fn exe_name(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}

fn cargo_bin(name: &str) -> PathBuf {
    target_dir().join(exe_name(name))
}

/// Scratch directory holding a copy of the fake converter and an empty
/// output directory.
pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    const CONVERTER_NAME: &'static str = "convert";
    const OUTPUT_DIR: &'static str = "images";

    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        // copied rather than symlinked so current_exe() points into the workdir
        std::fs::copy(
            cargo_bin("fake-convert"),
            dir.path().join(exe_name(Self::CONVERTER_NAME)),
        )
        .unwrap();
        std::fs::create_dir(dir.path().join(Self::OUTPUT_DIR)).unwrap();
        Self { dir }
    }

    pub fn with_exit_status(self, exit_status: i32) -> Self {
        std::fs::write(
            self.path().join(fake_convert::EXIT_STATUS_FILE),
            exit_status.to_string(),
        )
        .unwrap();
        self
    }

    /// Makes every converter call with an argument ending in `suffix` fail.
    pub fn with_failing_arg(self, suffix: &str) -> Self {
        std::fs::write(self.path().join(fake_convert::FAILING_ARG_FILE), suffix).unwrap();
        self
    }

    pub fn with_file(self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        std::fs::write(self.path().join(name), contents.as_ref()).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join(Self::OUTPUT_DIR)
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    pub fn converter(&self) -> PathBuf {
        self.path().join(exe_name(Self::CONVERTER_NAME))
    }

    pub fn missing_converter(&self) -> PathBuf {
        self.path().join(exe_name("not-installed"))
    }

    pub fn invocations(&self) -> Vec<Vec<String>> {
        std::fs::read_to_string(self.path().join(fake_convert::INVOCATIONS_FILE))
            .unwrap_or_default()
            .lines()
            .map(|line| line.split('\t').map(|s| s.to_owned()).collect())
            .collect()
    }

    pub fn assert_invocations(&self, expected: &[&[&str]]) -> &Self {
        let expected = expected
            .iter()
            .map(|args| args.iter().map(|s| s.to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(self.invocations(), expected);
        self
    }

    pub fn leftover_rasters(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.output_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().map_or(false, |ext| ext == "png"))
            .filter(|p| !p.ends_with("apple-touch-icon.png"))
            .collect()
    }
}
