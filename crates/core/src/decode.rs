//! Conversion between text and code point sequences.
//!
//! `&str` is valid UTF-8 by construction, so the only place malformed input
//! can enter is UTF-16 from a foreign boundary.

use crate::error::{PrepError, Result};

/// Decode UTF-16, joining surrogate pairs into single code points.
///
/// An unpaired surrogate fails with `MalformedInput` carrying its code unit
/// index.
pub fn decode_utf16(units: &[u16]) -> Result<Vec<char>> {
    let mut out = Vec::with_capacity(units.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                index += c.len_utf16();
                out.push(c);
            }
            Err(err) => {
                return Err(PrepError::MalformedInput {
                    unit: err.unpaired_surrogate(),
                    index,
                });
            }
        }
    }
    Ok(out)
}

/// Collect a UTF-8 string into code points.
pub fn decode_str(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Re-encode code points as a `String`.
pub fn encode(chars: &[char]) -> String {
    chars.iter().collect()
}
