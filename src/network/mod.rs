//! A transport abstraction layer for HTTP exchanges
//!
//! This module defines the seam between the client core and whatever
//! performs the actual network exchange. The core prepares an [`Envelope`]
//! describing one request; a [`Transport`] implementation connects, sends,
//! and receives, handing response body bytes back through a [`Sink`] as they
//! arrive and returning the numeric status code when the exchange completes.
//!
//! Connection establishment, DNS, TLS, redirects, retries, and timeouts all
//! belong to the transport implementation, not to this crate.

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Common error types for client and transport operations
pub mod error;

/// HTTP client core: request dispatch, response accumulation, form encoding
pub mod http;

use self::error::Error;

/// Re-exports of common traits and boundary types
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::AsyncTransport;
    pub use super::{Command, Envelope, Sink, Transport};
}

/// Chunk-delivery callback.
///
/// A transport invokes the sink zero or more times per exchange, once for
/// each contiguous piece of the response body, in arrival order and with
/// exact byte counts. A sink error means the receiver cannot accept more
/// data; the transport must abort the exchange and propagate it.
pub type Sink<'a> = dyn FnMut(&[u8]) -> Result<(), Error> + 'a;

/// The wire command for one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Plain retrieval with no request body.
    Get,
    /// Standard body-bearing submission.
    Post,
    /// Submission with the verb set explicitly rather than via a dedicated
    /// helper. Used for PUT, whose dedicated form in typical transport APIs
    /// does not accept an arbitrary request body.
    Override(&'a str),
}

/// One prepared exchange, handed to the transport as a unit.
///
/// All references borrow from the dispatch call that built the envelope;
/// nothing here outlives the request.
#[derive(Debug)]
pub struct Envelope<'a> {
    /// Target URL.
    pub url: &'a str,
    /// Wire command to issue.
    pub command: Command<'a>,
    /// Pre-encoded request body, if any.
    pub body: Option<&'a str>,
    /// Ordered raw `Name: Value` header lines.
    pub headers: &'a [&'a str],
    /// Client identifier string, if one was built for this exchange.
    pub agent: Option<&'a str>,
}

/// A synchronous transport.
///
/// Implementations perform one complete exchange per [`execute`] call:
/// connect (or reuse a connection), send the request described by the
/// envelope, deliver response body bytes to the sink in arrival order, and
/// return the status code reported by the server. The call blocks until the
/// exchange succeeds or fails.
///
/// [`execute`]: Transport::execute
pub trait Transport {
    /// Perform one exchange, delivering body bytes to `sink`.
    fn execute(&mut self, envelope: &Envelope<'_>, sink: &mut Sink<'_>) -> Result<u16, Error>;

    /// Release the transport handle.
    fn close(self) -> Result<(), Error>;
}

/// An asynchronous transport.
///
/// Mirror of [`Transport`] for async network stacks. The client core itself
/// is synchronous; this seam exists so async transports can share the
/// envelope and sink vocabulary.
#[cfg(feature = "async")]
pub trait AsyncTransport {
    /// Perform one exchange asynchronously, delivering body bytes to `sink`.
    async fn execute(&mut self, envelope: &Envelope<'_>, sink: &mut Sink<'_>)
    -> Result<u16, Error>;

    /// Release the transport handle asynchronously.
    async fn close(self) -> Result<(), Error>;
}
