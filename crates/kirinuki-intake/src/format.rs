//! Human-readable file size formatting.

/// Unit table for [`format_size`], in ascending powers of 1024.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Divisor for each entry of [`UNITS`].
const DIVISORS: [f64; 4] = [1.0, 1024.0, 1024.0 * 1024.0, 1024.0 * 1024.0 * 1024.0];

/// Format a byte count as a human-readable size string.
///
/// Picks the largest unit in `[Bytes, KB, MB, GB]` such that the value
/// is at least 1, rounds to 2 decimal places, and trims trailing
/// zeros: `1536` -> `"1.5 KB"`, `16777216` -> `"16 MB"`. Zero is
/// special-cased to `"0 Bytes"`. Counts of 1 TiB and above clamp to
/// the GB unit.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    #[expect(clippy::cast_precision_loss)]
    let value = bytes as f64;

    // log1024(x) == log2(x) / 10, which avoids an ln() ratio and its
    // rounding surprises at exact powers of 1024.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let unit_index = ((value.log2() / 10.0).floor() as usize).min(UNITS.len() - 1);

    let scaled = value / DIVISORS[unit_index];

    let rendered = format!("{scaled:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    format!("{rendered} {}", UNITS[unit_index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn exact_powers_render_without_decimals() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(16 * 1024 * 1024), "16 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractional_values_trim_trailing_zeros() {
        assert_eq!(format_size(1536), "1.5 KB");
        // 1234 / 1024 = 1.205... -> rounds to 1.21
        assert_eq!(format_size(1234), "1.21 KB");
        // 5 MB (decimal) lands just under 4.77 MB binary.
        assert_eq!(format_size(5_000_000), "4.77 MB");
    }

    #[test]
    fn terabyte_counts_clamp_to_gb() {
        assert_eq!(format_size(1024 * 1024 * 1024 * 1024), "1024 GB");
    }
}
