use std::path::{Path, PathBuf};
use xshell::Shell;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to start a shell for the converter")]
    Shell(#[source] xshell::Error),
    #[error("failed to rasterize {} at {size}x{size}", .svg.display())]
    Rasterize {
        svg: PathBuf,
        size: u32,
        #[source]
        error: eyre::Report,
    },
    #[error("failed to combine {count} rasters into {}", .ico.display())]
    Combine {
        ico: PathBuf,
        count: usize,
        #[source]
        error: eyre::Report,
    },
}

/// An external tool that turns vector sources into raster icons.
pub trait Converter {
    /// Whether the tool can be run at all.
    fn is_available(&self) -> bool;

    /// Renders `svg` into a square PNG of `size` pixels.
    fn rasterize(&self, svg: &Path, png: &Path, size: u32) -> Result<(), ConvertError>;

    /// Packs the given rasters, in order, into a single ICO file.
    fn combine(&self, pngs: &[PathBuf], ico: &Path) -> Result<(), ConvertError>;
}

/// ImageMagick's `convert`, or anything accepting the same arguments.
pub struct ImageMagick {
    sh: Shell,
    program: PathBuf,
}

impl ImageMagick {
    pub const DEFAULT_PROGRAM: &'static str = "convert";

    pub fn new(program: impl Into<PathBuf>) -> Result<Self, ConvertError> {
        let sh = Shell::new().map_err(ConvertError::Shell)?;
        Ok(ImageMagick {
            sh,
            program: program.into(),
        })
    }
}

impl Converter for ImageMagick {
    fn is_available(&self) -> bool {
        let probe = self
            .sh
            .cmd(&self.program)
            .arg("--version")
            .quiet()
            .ignore_stdout()
            .ignore_stderr();
        match probe.run() {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(program = %self.program.display(), %error, "converter probe failed");
                false
            }
        }
    }

    fn rasterize(&self, svg: &Path, png: &Path, size: u32) -> Result<(), ConvertError> {
        let geometry = format!("{size}x{size}");
        let cmd = self
            .sh
            .cmd(&self.program)
            .args(["-background", "none", "-resize"])
            .arg(&geometry)
            .arg(svg)
            .arg(png)
            .quiet();
        tracing::debug!("running {}", cmd);
        cmd.run().map_err(|error| ConvertError::Rasterize {
            svg: svg.to_owned(),
            size,
            error: error.into(),
        })
    }

    fn combine(&self, pngs: &[PathBuf], ico: &Path) -> Result<(), ConvertError> {
        let cmd = self.sh.cmd(&self.program).args(pngs).arg(ico).quiet();
        tracing::debug!("running {}", cmd);
        cmd.run().map_err(|error| ConvertError::Combine {
            ico: ico.to_owned(),
            count: pngs.len(),
            error: error.into(),
        })
    }
}
