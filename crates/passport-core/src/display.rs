//! Presentation helpers for engine output.

use chrono::{DateTime, Utc};

use crate::constants::BASE_UNIT_DECIMALS;

/// Render a base-unit amount in whole asset units with four decimals.
pub fn format_base_units(amount: u128) -> String {
    let scale = 10u128.pow(BASE_UNIT_DECIMALS);
    let whole = amount / scale;
    // Round half up to 4 dp
    let frac_scale = 10u128.pow(BASE_UNIT_DECIMALS - 4);
    let frac = (amount % scale + frac_scale / 2) / frac_scale;
    if frac >= 10_000 {
        format!("{}.0000", whole + 1)
    } else {
        format!("{whole}.{frac:04}")
    }
}

/// `0x1234...abcd` form of an address. Short strings are returned unchanged.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// UTC rendering of an epoch-millisecond timestamp.
pub fn format_timestamp_ms(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{timestamp_ms}ms"))
}

/// Image URL for a token. Image files are numbered from 1.
///
/// `None` when the file number does not fit in a `u64`.
pub fn image_url(token_index: u64, base_url: &str, offset: u64) -> Option<String> {
    let number = token_index.checked_add(offset)?.checked_add(1)?;
    Some(format!("{base_url}{number}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_base_units() {
        assert_eq!(format_base_units(0), "0.0000");
        assert_eq!(format_base_units(1_000_000_000), "1.0000");
        assert_eq!(format_base_units(1_234_500_000), "1.2345");
        assert_eq!(format_base_units(50_000), "0.0001");
        assert_eq!(format_base_units(2_999_990_000), "3.0000");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x4e91a01313fb9d17a85dd23024aba33f7108aa4b"),
            "0x4e91...aa4b"
        );
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp_ms(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(
            format_timestamp_ms(1_761_523_200_000),
            "2025-10-27 00:00:00 UTC"
        );
    }

    #[test]
    fn test_image_url() {
        assert_eq!(image_url(0, "https://img/", 0).as_deref(), Some("https://img/1.png"));
        assert_eq!(
            image_url(11_018, "https://img/", 0).as_deref(),
            Some("https://img/11019.png")
        );
        assert_eq!(image_url(u64::MAX, "https://img/", 0), None);
        assert_eq!(image_url(5, "https://img/", u64::MAX - 5), None);
    }
}
