use crate::{appconfig, converter::Converter, ico};
use eyre::WrapErr;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub const FILE_NAME: &str = "favicon.ico";
pub const SOURCE_FILE_NAME: &str = "favicon.svg";
pub const DEFAULT_SIZES: &[u32] = &[16, 32, 48];
pub const BUILTIN_SIZE: u32 = 32;

/// How the favicon ended up being produced.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    Converted { sizes: Vec<u32> },
    Builtin,
}

/// Rasters written next to the output, removed again when dropped.
#[derive(Debug, Default)]
struct Temporaries(Vec<PathBuf>);

impl Temporaries {
    fn push(&mut self, path: PathBuf) {
        self.0.push(path);
    }

    fn paths(&self) -> &[PathBuf] {
        &self.0
    }

    fn remove_all(mut self) -> std::io::Result<()> {
        while let Some(path) = self.0.pop() {
            match std::fs::remove_file(&path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e),
                _ => {}
            }
        }
        Ok(())
    }
}

impl Drop for Temporaries {
    fn drop(&mut self) {
        for path in &self.0 {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[derive(Debug)]
pub struct FaviconBuilder<C> {
    converter: C,
    output_dir: PathBuf,
    source: PathBuf,
    sizes: Vec<u32>,
    builtin: bool,
}

impl<C: Converter> FaviconBuilder<C> {
    pub fn new(converter: C, output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        FaviconBuilder {
            converter,
            source: output_dir.join(SOURCE_FILE_NAME),
            output_dir,
            sizes: DEFAULT_SIZES.to_vec(),
            builtin: false,
        }
    }

    pub fn from_config(converter: C, config: &appconfig::AppConfig) -> Self {
        FaviconBuilder::new(converter, &config.output_dir)
            .source(config.favicon_source())
            .sizes(config.favicon.sizes.clone())
            .builtin(config.favicon.builtin)
    }

    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn builtin(mut self, builtin: bool) -> Self {
        self.builtin = builtin;
        self
    }

    pub fn ico_path(&self) -> PathBuf {
        self.output_dir.join(FILE_NAME)
    }

    fn raster_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(format!("favicon-{size}x{size}.png"))
    }

    pub fn build(&self) -> eyre::Result<Outcome> {
        let ico_path = self.ico_path();
        if self.builtin {
            tracing::debug!("skipping converter, building favicon from the built-in bitmap");
        } else if self.converter.is_available() {
            self.convert(&ico_path)?;
            tracing::info!(path = %ico_path.display(), sizes = ?self.sizes, "created favicon");
            return Ok(Outcome::Converted {
                sizes: self.sizes.clone(),
            });
        } else {
            tracing::warn!("image converter not found, building a basic favicon instead");
        }

        write_builtin(&ico_path)?;
        tracing::info!(path = %ico_path.display(), "created basic favicon");
        Ok(Outcome::Builtin)
    }

    fn convert(&self, ico_path: &Path) -> eyre::Result<()> {
        validate_sizes(&self.sizes)?;

        let mut temporaries = Temporaries::default();
        for &size in &self.sizes {
            let png = self.raster_path(size);
            // registered before running so a partial file is cleaned up too
            temporaries.push(png.clone());
            self.converter.rasterize(&self.source, &png, size)?;
        }
        self.converter.combine(temporaries.paths(), ico_path)?;
        temporaries
            .remove_all()
            .wrap_err("failed to remove temporary favicon rasters")?;
        Ok(())
    }
}

fn validate_sizes(sizes: &[u32]) -> eyre::Result<()> {
    if sizes.is_empty() {
        eyre::bail!("no favicon sizes configured");
    }
    for (index, &size) in sizes.iter().enumerate() {
        if size == 0 || size > ico::MAX_DIMENSION {
            eyre::bail!(
                "favicon size {size} is outside of 1..={}",
                ico::MAX_DIMENSION
            );
        }
        if sizes[..index].contains(&size) {
            eyre::bail!("favicon size {size} is configured more than once");
        }
    }
    Ok(())
}

/// Writes the hand-assembled 32x32 favicon to `path`.
pub fn write_builtin(path: impl AsRef<Path>) -> eyre::Result<()> {
    let path = path.as_ref();
    let dib = ico::Dib::bordered_square(BUILTIN_SIZE)?;
    let mut file = std::io::BufWriter::new(
        std::fs::File::create(path)
            .wrap_err_with(|| format!("failed to create {}", path.display()))?,
    );
    ico::write_single(&dib, &mut file)
        .and_then(|()| file.flush())
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
