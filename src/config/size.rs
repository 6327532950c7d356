//! Options controlling how a size is resolved and displayed.

/// Flags for a single size computation.
///
/// The traversal flags (`recursive`, `include_hidden`) only matter when the
/// target is a directory. All combinations are valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SizeOptions {
    /// Descend into subdirectories instead of summing only first-level files
    pub recursive: bool,

    /// Count entries whose name starts with `.`
    pub include_hidden: bool,

    /// Scale the result to binary units (`KB`, `MB`, ...) when formatting
    pub human_readable: bool,

    /// Report entries skipped during traversal on stderr
    pub verbose: bool,
}
