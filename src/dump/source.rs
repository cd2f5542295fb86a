//! Decoding raw dump bytes into text
//!
//! The allocator writes its JSON dumps as UTF-16LE. Dumps that were re-saved
//! as UTF-8 are accepted too.

use crate::errors::{VisError, VisResult};
use log::debug;

/// Text encoding detected for a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpEncoding {
    Utf16Le,
    Utf8,
}

/// Guess the encoding from the BOM, or from the first code unit when there is none
pub fn detect_encoding(bytes: &[u8]) -> DumpEncoding {
    match bytes {
        [0xFF, 0xFE, ..] => DumpEncoding::Utf16Le,
        [0xEF, 0xBB, 0xBF, ..] => DumpEncoding::Utf8,
        [lo, 0, ..] if lo.is_ascii() && bytes.len() % 2 == 0 => DumpEncoding::Utf16Le,
        _ => DumpEncoding::Utf8,
    }
}

/// Decode dump bytes to a string, dropping any byte order mark
pub fn decode_dump(bytes: &[u8]) -> VisResult<String> {
    let encoding = detect_encoding(bytes);
    debug!("Decoding dump as {:?} ({} bytes)", encoding, bytes.len());

    let text = match encoding {
        DumpEncoding::Utf16Le => {
            if bytes.len() % 2 != 0 {
                return Err(VisError::Encoding(format!(
                    "odd byte count {} for UTF-16LE",
                    bytes.len()
                )));
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).map_err(|e| VisError::Encoding(e.to_string()))?
        }
        DumpEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| VisError::Encoding(e.to_string()))?,
    };

    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str, bom: bool) -> Vec<u8> {
        let mut bytes = Vec::new();
        if bom {
            bytes.extend_from_slice(&[0xFF, 0xFE]);
        }
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_utf16le_with_bom() {
        let bytes = utf16le("{\"a\": 1}", true);
        assert_eq!(detect_encoding(&bytes), DumpEncoding::Utf16Le);
        assert_eq!(decode_dump(&bytes).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_utf16le_without_bom() {
        let bytes = utf16le("{}", false);
        assert_eq!(detect_encoding(&bytes), DumpEncoding::Utf16Le);
        assert_eq!(decode_dump(&bytes).unwrap(), "{}");
    }

    #[test]
    fn test_utf8_plain_and_bom() {
        assert_eq!(decode_dump(b"{}").unwrap(), "{}");
        assert_eq!(decode_dump(b"\xEF\xBB\xBF{}").unwrap(), "{}");
    }

    #[test]
    fn test_invalid_utf8() {
        let result = decode_dump(&[b'{', 0xC3, 0x28]);
        assert!(matches!(result, Err(VisError::Encoding(_))));
    }
}
