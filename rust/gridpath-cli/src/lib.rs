pub mod config;
pub mod map_file;
pub mod render;

pub use config::{Config, OptionsFile};
pub use map_file::{load_map, parse_map, MapFileError};
