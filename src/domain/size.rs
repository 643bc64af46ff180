// SPDX-License-Identifier: MPL-2.0
//! Human-readable file sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const STEP: f64 = 1024.0;

/// Formats a byte count with base-1024 units.
///
/// Picks the largest unit in which the value is at least one. Plain bytes
/// are printed as integers (`0 B`, `512 B`); larger units use two decimals
/// (`1.00 KB`, `1.50 KB`). Sizes beyond the terabyte range stay in `TB`.
#[must_use]
pub fn display_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }
    // 1023.999 KB would print as "1024.00 KB".
    if (value * 100.0).round() / 100.0 >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}
