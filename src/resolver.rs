//! Size resolution for files and directory trees.
//!
//! This module provides the core logic that turns a path into a byte count.
//! A regular file resolves to its own length; a directory resolves to the sum
//! of its children according to the traversal flags in [`SizeOptions`].
//!
//! Failures on the root path are returned to the caller. Failures on entries
//! below the root (unreadable subdirectories, unreadable metadata) only drop
//! that entry from the total; traversal of its siblings continues.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use crate::config::SizeOptions;

/// Result of measuring a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Total size in bytes of everything that was counted
    pub total: u64,

    /// Descriptions of descendant entries excluded because they could not be read
    pub skipped: Vec<String>,
}

/// Resolves the size of a file or directory.
///
/// The resolver holds no state between calls, so measuring the same
/// unchanged tree twice yields the same total.
#[derive(Debug, Clone, Copy)]
pub struct SizeResolver {
    /// Traversal and reporting flags
    options: SizeOptions,
}

impl SizeResolver {
    /// Create a new resolver with the specified options.
    ///
    /// Only `recursive`, `include_hidden` and `verbose` are consulted; the
    /// display flag is ignored here.
    #[must_use]
    pub const fn new(options: SizeOptions) -> Self {
        Self { options }
    }

    /// Resolve the total size of `path` in bytes.
    ///
    /// In verbose mode, entries skipped during traversal are printed to
    /// stderr once the traversal is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist, cannot be stat'ed, or is a
    /// directory that cannot be read.
    pub fn resolve(&self, path: &Path) -> Result<u64> {
        let measurement = self.measure(path)?;

        if self.options.verbose {
            for skipped in &measurement.skipped {
                eprintln!("{}", skipped.red());
            }
        }

        Ok(measurement.total)
    }

    /// Measure `path`, returning the total along with any skipped entries.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SizeResolver::resolve`].
    pub fn measure(&self, path: &Path) -> Result<Measurement> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

        if !metadata.is_dir() {
            return Ok(Measurement {
                total: metadata.len(),
                skipped: Vec::new(),
            });
        }

        // Probe the root so that an unreadable root fails instead of being skipped.
        fs::read_dir(path)
            .with_context(|| format!("Failed to read directory {}", path.display()))?;

        Ok(self.measure_dir(path))
    }

    /// Sum the children of a readable directory.
    fn measure_dir(&self, root: &Path) -> Measurement {
        let include_hidden = self.options.include_hidden;
        let max_depth = if self.options.recursive { usize::MAX } else { 1 };

        let mut measurement = Measurement::default();

        let walker = WalkDir::new(root)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || include_hidden || !is_hidden_entry(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let location = e
                        .path()
                        .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                    measurement
                        .skipped
                        .push(format!("Skipped {location}: {e}"));
                    continue;
                }
            };

            if entry.depth() == 0 || entry.file_type().is_dir() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => measurement.total += metadata.len(),
                Err(e) => measurement
                    .skipped
                    .push(format!("Skipped {}: {e}", entry.path().display())),
            }
        }

        measurement
    }
}

/// Check whether a file or directory name marks a hidden entry.
///
/// A name is hidden when it starts with `.`. The empty name is not hidden.
///
/// # Examples
///
/// ```
/// # use path_size::resolver::is_hidden;
/// assert!(is_hidden(".git"));
/// assert!(!is_hidden("src"));
/// assert!(!is_hidden(""));
/// ```
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn is_hidden_entry(entry: &DirEntry) -> bool {
    is_hidden(&entry.file_name().to_string_lossy())
}

/// Resolve the size of `path` in bytes.
///
/// Shorthand for a non-verbose [`SizeResolver`] built from the two traversal flags.
///
/// # Errors
///
/// Returns an error if `path` does not exist, cannot be stat'ed, or is a
/// directory that cannot be read.
pub fn get_size(path: &Path, recursive: bool, include_hidden: bool) -> Result<u64> {
    SizeResolver::new(SizeOptions {
        recursive,
        include_hidden,
        ..SizeOptions::default()
    })
    .resolve(path)
}
