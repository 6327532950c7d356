//! Size formatting utilities.
//!
//! This module turns raw byte counts into the strings printed next to a path,
//! either as an exact byte count (`"1863B"`) or scaled to binary units
//! (`"1.5MB"`).

/// Unit suffixes used for human-readable output, in ascending order.
///
/// Each step is a factor of 1024.
pub const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Scaling factor between two consecutive entries of [`UNITS`].
const STEP: f64 = 1024.0;

/// Format a byte count for display.
///
/// # Arguments
///
/// * `bytes` - The size to format, in bytes
/// * `human_readable` - Whether to scale the value to the largest fitting unit
///
/// # Returns
///
/// - `"<bytes>B"` when `human_readable` is `false` (e.g. `"1863B"`, `"0B"`)
/// - The value scaled by powers of 1024 otherwise. Plain bytes are printed
///   without decimals (`"512B"`), every larger unit with exactly one
///   (`"1.0KB"`, `"1.5MB"`).
///
/// # Examples
///
/// ```
/// # use path_size::utils::format_size;
/// assert_eq!(format_size(1863, false), "1863B");
/// assert_eq!(format_size(1024, true), "1.0KB");
/// assert_eq!(format_size(1536 * 1024, true), "1.5MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return format!("{bytes}{}", UNITS[0]);
    }

    let (value, unit) = scale(bytes);

    if unit == 0 {
        format!("{bytes}{}", UNITS[0])
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}

/// Divide `bytes` by 1024 until it drops below 1024 or the largest unit is reached.
///
/// Returns the scaled value together with the index of its unit in [`UNITS`].
/// A `u64` never exceeds 16 EB, so the loop always stops with a value below 1024.
#[allow(clippy::cast_precision_loss)]
fn scale(bytes: u64) -> (f64, usize) {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    (value, unit)
}
