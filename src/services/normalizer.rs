//! OEM code normalization service
//!
//! Vendor listings write the same part number with varying spacing,
//! punctuation and casing. Normalizing gives a single lookup key that is
//! substituted into query URLs and matched against listing titles.

/// Normalize an OEM code to canonical form.
///
/// Keeps ASCII letters and digits in their original order and lowercases
/// them; everything else is dropped. Never fails.
///
/// # Examples
/// ```
/// use partprice::services::normalizer::normalize_oem;
///
/// assert_eq!(normalize_oem("1J0 601 025"), "1j0601025");
/// assert_eq!(normalize_oem("357-698-151.A"), "357698151a");
/// ```
pub fn normalize_oem(oem: &str) -> String {
    oem.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Stripping ==========

    #[test]
    fn test_strips_spaces() {
        assert_eq!(normalize_oem("1J0 601 025"), "1j0601025");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize_oem("251-615-301.B"), "251615301b");
        assert_eq!(normalize_oem("(N) 0138492"), "n0138492");
    }

    #[test]
    fn test_strips_non_ascii_letters() {
        // Umlauts and other non-ASCII alphanumerics are not part of OEM codes
        assert_eq!(normalize_oem("Bremsträger 1H0"), "bremstrger1h0");
        assert_eq!(normalize_oem("٣٤5"), "5");
    }

    // ========== No-op cases ==========

    #[test]
    fn test_already_normalized() {
        assert_eq!(normalize_oem("1j0601025"), "1j0601025");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize_oem(""), "");
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(normalize_oem(" - . / "), "");
    }

    // ========== Properties ==========

    #[test]
    fn test_idempotent() {
        let samples = [
            "1J0 601 025",
            "",
            "  ",
            "N-901-234-02",
            "Ä∂ƒ©-xyz_123",
            "251.615.301 B (T3)",
        ];
        for s in samples {
            let once = normalize_oem(s);
            assert_eq!(normalize_oem(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_output_is_lowercase_alphanumeric() {
        let samples = ["AbC-123_ä", "T3 / T25 Syncro!", "\t\n025"];
        for s in samples {
            let out = normalize_oem(s);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
                "unexpected char in {:?}",
                out
            );
        }
    }

    #[test]
    fn test_preserves_order() {
        assert_eq!(normalize_oem("z-9-a-1"), "z9a1");
    }
}
