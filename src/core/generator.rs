use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::GridConfig;
use crate::core::FragmentBuilder;
use crate::utils::error::Result;

/// Walks the grid row-major and emits one fragment per cell.
pub struct Generator {
    config: GridConfig,
}

impl Generator {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Writes the full grid to `w`, one fragment plus trailing newline
    /// per cell. Returns the number of fragments emitted.
    pub fn write_grid<W: Write>(&self, w: &mut W) -> Result<u32> {
        let mut builder = FragmentBuilder::new();

        for i in 0..self.config.rows {
            for j in 0..self.config.cols {
                let x = self.config.origin + f64::from(j) * self.config.spacing;
                let y = self.config.origin + f64::from(i) * self.config.spacing;

                w.write_all(builder.build(x, y).as_bytes())?;
                w.write_all(b"\n")?;
            }
        }

        Ok(builder.next_id() - 1)
    }

    /// Creates (or truncates) the output file under `dir` and writes
    /// the grid into it. Returns the path of the written file.
    pub fn run(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.config.output_file);
        tracing::debug!(
            "Generating {}x{} dot grid into {}",
            self.config.rows,
            self.config.cols,
            path.display()
        );

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        let emitted = self.write_grid(&mut writer)?;
        writer.flush()?;

        tracing::info!("Emitted {} dot fragments to {}", emitted, path.display());
        Ok(path)
    }
}
