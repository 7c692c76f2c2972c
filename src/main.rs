use std::path::Path;

use genpac::utils::logger;
use genpac::{Generator, GridConfig};

fn main() {
    logger::init_cli_logger();

    tracing::info!("Starting genpac");

    let generator = Generator::new(GridConfig::default());

    match generator.run(Path::new(".")) {
        Ok(path) => {
            println!("✅ Dot grid generated successfully!");
            println!("📁 Output saved to: {}", path.display());
        }
        Err(e) => {
            tracing::error!("❌ Dot grid generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
