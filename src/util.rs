//! Text decoding and small string helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (common in older USFM corpora)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    // Try UTF-8 first (handles BOM automatically)
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    // Fallback: Windows-1252 (superset of ISO-8859-1)
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Left-pad a digit string with zeros to `width`.
///
/// Chapter and verse numbers are carried as zero-padded strings so that
/// lexicographic ordering of generated ids matches document order.
pub fn zero_pad(digits: &str, width: usize) -> String {
    let trimmed = digits.trim();
    if trimmed.len() >= width {
        return trimmed.to_string();
    }
    let mut result = String::with_capacity(width);
    for _ in 0..(width - trimmed.len()) {
        result.push('0');
    }
    result.push_str(trimmed);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("Hello, World!".as_bytes()), "Hello, World!");
    }

    #[test]
    fn test_decode_utf8_bom() {
        let bytes = b"\xEF\xBB\xBFHello";
        assert_eq!(decode_text(bytes), "Hello");
    }

    #[test]
    fn test_decode_cp1252_fallback() {
        // 0x93/0x94 are curly quotes in CP1252, invalid UTF-8
        let bytes = b"\x93quoted\x94";
        assert_eq!(decode_text(bytes), "\u{201c}quoted\u{201d}");
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad("1", 3), "001");
        assert_eq!(zero_pad("42", 3), "042");
        assert_eq!(zero_pad("150", 3), "150");
        assert_eq!(zero_pad("1234", 3), "1234");
        assert_eq!(zero_pad(" 7 ", 2), "07");
    }
}
