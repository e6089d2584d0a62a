//! Infrastructure layer: platform concerns with no domain knowledge.
//!
//! - `paths`: data directory resolution for the storage file

pub mod paths;

pub use paths::get_data_dir;
