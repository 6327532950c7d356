//! Rendering of a resolved size.
//!
//! The default output is a single tab-separated line. When the `--json` flag
//! is passed, a [`JsonOutput`] object is printed instead so that scripts can
//! consume the raw byte count alongside the formatted value.

use std::path::Path;

use serde::Serialize;

use crate::{config::SizeOptions, utils::format_size};

/// Build the `"<formatted>\t<path>"` line printed for a result.
#[must_use]
pub fn format_line(formatted: &str, path: &Path) -> String {
    format!("{formatted}\t{}", path.display())
}

/// JSON document emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The path as given on the command line.
    pub path: String,

    /// Total size in bytes.
    pub size: u64,

    /// Size formatted the same way as the plain-text output.
    pub size_formatted: String,

    /// Whether subdirectories were included.
    pub recursive: bool,

    /// Whether hidden entries were included.
    pub include_hidden: bool,

    /// Whether `size_formatted` uses binary units.
    pub human_readable: bool,
}

impl JsonOutput {
    /// Build the JSON representation of a resolved size.
    #[must_use]
    pub fn new(path: &Path, size: u64, options: &SizeOptions) -> Self {
        Self {
            path: path.display().to_string(),
            size,
            size_formatted: format_size(size, options.human_readable),
            recursive: options.recursive,
            include_hidden: options.include_hidden,
            human_readable: options.human_readable,
        }
    }
}
