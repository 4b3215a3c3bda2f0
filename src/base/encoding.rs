use std::borrow::Cow;

use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Declared character encoding of a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {encoding:?} input at byte {offset}")]
pub struct EncodingError {
    pub encoding: Encoding,
    /// Into the original buffer, byte order mark included
    pub offset: usize,
}

impl Encoding {
    /// Decode `bytes` into text, stripping a UTF-8 byte order mark.
    pub fn decode<'a>(self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        match self {
            Encoding::Utf8 => {
                let (skipped, bytes) = match bytes.strip_prefix(UTF8_BOM) {
                    Some(rest) => (UTF8_BOM.len(), rest),
                    None => (0, bytes),
                };
                std::str::from_utf8(bytes)
                    .map(Cow::Borrowed)
                    .map_err(|err| EncodingError {
                        encoding: self,
                        offset: skipped + err.valid_up_to(),
                    })
            }
            Encoding::Latin1 => {
                if bytes.is_ascii() {
                    // ASCII is valid UTF-8 as is
                    return Ok(Cow::Borrowed(std::str::from_utf8(bytes).map_err(|err| {
                        EncodingError {
                            encoding: self,
                            offset: err.valid_up_to(),
                        }
                    })?));
                }
                Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect()))
            }
        }
    }
}
