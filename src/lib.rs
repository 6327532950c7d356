//! # path-size
//!
//! Library behind the `path-size` command: report the size of a file or
//! directory, optionally descending into subdirectories, optionally counting
//! hidden entries, and optionally printing the result in human-readable units.
//!
//! ## Main Parts
//!
//! - [`resolver`] - Turns a path into a byte count ([`SizeResolver`], [`get_size`])
//! - [`utils`] - Byte-count formatting ([`format_size`])
//! - [`config`] - Size options and the persistent configuration file
//! - [`output`] - Tab-separated and JSON renderings of a result

use std::path::Path;

use anyhow::Result;

pub mod config;
pub mod output;
pub mod resolver;
pub mod utils;

pub use config::{FileConfig, SizeOptions};
pub use resolver::{Measurement, SizeResolver, get_size, is_hidden};
pub use utils::format_size;

/// Resolve the size of `path` and format it according to `options`.
///
/// # Errors
///
/// Returns an error if `path` does not exist, cannot be stat'ed, or is a
/// directory that cannot be read.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use path_size::{SizeOptions, get_path_size};
/// let options = SizeOptions { human_readable: true, ..SizeOptions::default() };
/// println!("{}", get_path_size(Path::new("Cargo.toml"), &options)?);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_path_size(path: &Path, options: &SizeOptions) -> Result<String> {
    let total = SizeResolver::new(*options).resolve(path)?;
    Ok(format_size(total, options.human_readable))
}
