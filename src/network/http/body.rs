//! Growable response body accumulator.
//!
//! A transport delivers the response body as zero or more chunks in arrival
//! order. [`Body`] assembles them into one contiguous buffer with amortized
//! growth and exact size accounting: after any number of deliveries the
//! buffer equals the in-order concatenation of every chunk, and [`Body::len`]
//! equals the sum of their lengths.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::network::error::Error;

/// Accumulated response body.
///
/// Always present on an exchange, empty until the transport delivers data.
/// Exclusively owned by one exchange; the borrow checker keeps a second
/// in-flight request from touching it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Body {
    bytes: Vec<u8>,
}

impl Body {
    /// Creates an empty body.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Appends one delivered chunk.
    ///
    /// A zero-length chunk is a valid no-op delivery. If the buffer cannot
    /// grow, the partial content accumulated so far is released and the
    /// request aborts with [`Error::OutOfMemory`].
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), Error> {
        if self.bytes.try_reserve(chunk.len()).is_err() {
            self.bytes = Vec::new();
            return Err(Error::OutOfMemory);
        }
        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    /// Total bytes accumulated, the exact sum of all delivered chunk lengths.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The accumulated bytes as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl AsRef<[u8]> for Body {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
