//! Configuration types for size resolution and output.
//!
//! [`SizeOptions`] carries the flags every size computation needs, while
//! [`FileConfig`] holds the optional values read from the user's config file.

pub mod file;
pub mod size;

pub use file::FileConfig;
pub use size::SizeOptions;
