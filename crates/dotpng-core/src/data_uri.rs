//! Splitting a `data:` URI and decoding its base64 payload.
//!
//! Only the part after the first comma matters; the descriptor
//! (`data:<mime>;base64`) is kept for logging and never checked.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{DotError, Result};

/// Everything after the first `,`.
pub fn split_payload(uri: &str) -> Result<&str> {
    uri.split_once(',')
        .map(|(_, payload)| payload)
        .ok_or(DotError::MalformedDataUri)
}

/// Everything before the first `,` (e.g. `data:image/gif;base64`).
pub fn descriptor(uri: &str) -> Option<&str> {
    uri.split_once(',').map(|(head, _)| head)
}

/// Split `uri` and decode the payload with the standard padded alphabet.
pub fn decode(uri: &str) -> Result<Vec<u8>> {
    let payload = split_payload(uri)?;
    let bytes = STANDARD.decode(payload)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DOT_DATA_URI;

    #[test]
    fn payload_is_after_first_comma() {
        assert_eq!(split_payload("data:text/plain;base64,aGk=").unwrap(), "aGk=");
        // later commas stay in the payload
        assert_eq!(split_payload("a,b,c").unwrap(), "b,c");
    }

    #[test]
    fn missing_comma_is_malformed() {
        let err = split_payload("data:image/gif;base64").unwrap_err();
        assert!(matches!(err, DotError::MalformedDataUri));
        assert!(descriptor("no separator").is_none());
    }

    #[test]
    fn descriptor_is_before_first_comma() {
        assert_eq!(descriptor(DOT_DATA_URI), Some("data:image/gif;base64"));
    }

    #[test]
    fn decode_short_payload() {
        assert_eq!(decode("data:text/plain;base64,aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn decode_empty_payload() {
        assert!(decode("data:,").unwrap().is_empty());
    }

    #[test]
    fn invalid_base64_is_decode_error() {
        let err = decode("data:image/gif;base64,not*base64!").unwrap_err();
        assert!(matches!(err, DotError::Decode(_)));
    }

    #[test]
    fn embedded_uri_decodes_to_gif() {
        let bytes = decode(DOT_DATA_URI).unwrap();
        assert_eq!(bytes.len(), 43);
        assert_eq!(&bytes[..6], b"GIF89a");
        assert_eq!(bytes.last(), Some(&0x3b));
    }
}
