pub mod config;
pub mod core;
pub mod utils;

pub use config::GridConfig;
pub use core::{FragmentBuilder, Generator};
pub use utils::error::{GenError, Result};
