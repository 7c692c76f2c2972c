/// Fixed layout of the dot grid.
///
/// There is no runtime configuration surface; the defaults below are
/// the layout the overlay is generated for, changed by recompiling.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub origin: f64,
    pub spacing: f64,
    pub output_file: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 56,
            origin: 150.0,
            spacing: 66.6666,
            output_file: "dots.txt".to_string(),
        }
    }
}

impl GridConfig {
    /// Total number of fragments a full run emits.
    pub fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_dimensions() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 56);
        assert_eq!(config.cell_count(), 840);
        assert_eq!(config.output_file, "dots.txt");
    }
}
