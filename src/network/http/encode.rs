//! Form encoding of key/value pairs.
//!
//! Converts an ordered list of key/value string pairs into a single
//! percent-encoded payload suitable as a request body. Keys and values are
//! escaped individually; the structural `=` and `&` separators stay literal,
//! so the output is a conventional `application/x-www-form-urlencoded` body.

use alloc::string::String;
use alloc::vec::Vec;

use crate::network::error::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes that pass through form encoding unchanged.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Escapes one component into `out`. Capacity must already be reserved.
fn escape_into(out: &mut String, component: &str) {
    for &byte in component.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        }
    }
}

/// Encodes an ordered list of key/value pairs as a form payload.
///
/// Terms are assembled as `key=value` in input order, with `&` between
/// successive terms and no separator before the first. Reserved characters
/// inside keys and values become `%XX` with uppercase hex digits.
///
/// # Examples
///
/// ```rust
/// use librequests::network::http::encode;
///
/// let payload = encode::form(&[("a", "1"), ("b", "2")]).unwrap();
/// assert_eq!(payload, "a=1&b=2");
///
/// let payload = encode::form(&[("device name", "sensor&probe")]).unwrap();
/// assert_eq!(payload, "device%20name=sensor%26probe");
/// ```
pub fn form(pairs: &[(&str, &str)]) -> Result<String, Error> {
    // Worst case every byte escapes to three, plus the two separators.
    let mut worst = pairs.len().saturating_mul(2);
    for (key, value) in pairs {
        worst = worst.saturating_add(key.len().saturating_mul(3));
        worst = worst.saturating_add(value.len().saturating_mul(3));
    }

    let mut out = String::new();
    out.try_reserve(worst).map_err(|_| Error::OutOfMemory)?;

    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        escape_into(&mut out, key);
        out.push('=');
        escape_into(&mut out, value);
    }
    Ok(out)
}

/// Reinterprets a flattened key/value list as typed pairs.
///
/// Element `2i` is a key and element `2i + 1` its value. A list with an odd
/// number of elements is rejected with [`Error::InvalidFormData`], never
/// repaired.
///
/// # Examples
///
/// ```rust
/// use librequests::network::error::Error;
/// use librequests::network::http::encode;
///
/// let pairs = encode::pairs_from_flat(&["a", "1", "b", "2"]).unwrap();
/// assert_eq!(pairs, [("a", "1"), ("b", "2")]);
///
/// assert_eq!(
///     encode::pairs_from_flat(&["a", "1", "b"]),
///     Err(Error::InvalidFormData)
/// );
/// ```
pub fn pairs_from_flat<'a>(items: &[&'a str]) -> Result<Vec<(&'a str, &'a str)>, Error> {
    if items.len() % 2 != 0 {
        return Err(Error::InvalidFormData);
    }

    let mut pairs = Vec::new();
    pairs
        .try_reserve(items.len() / 2)
        .map_err(|_| Error::OutOfMemory)?;
    for kv in items.chunks_exact(2) {
        pairs.push((kv[0], kv[1]));
    }
    Ok(pairs)
}
