//! HTTP client core.
//!
//! This module implements the request/response lifecycle on top of the
//! [`Transport`](crate::network::Transport) seam: a dispatcher that unifies
//! GET/POST/PUT with optional form bodies and custom headers, a growable
//! accumulator that assembles the response body out of arriving chunks, a
//! form encoder for key/value payloads, and a client identifier builder.
//!
//! # Usage
//!
//! The main entry point is [`client::Client`], which works with any
//! transport implementing [`Transport`](crate::network::Transport) and any
//! platform provider implementing
//! [`Platform`](crate::system::platform::Platform).
//!
//! ```rust,no_run
//! use librequests::network::error::Error;
//! use librequests::network::http::{Client, Exchange, Options};
//! use librequests::network::{Envelope, Sink, Transport};
//! use librequests::system::platform::StaticPlatform;
//! # struct MockTransport;
//! # impl Transport for MockTransport {
//! #     fn execute(&mut self, _envelope: &Envelope<'_>, _sink: &mut Sink<'_>) -> Result<u16, Error> {
//! #         Ok(200)
//! #     }
//! #     fn close(self) -> Result<(), Error> { Ok(()) }
//! # }
//!
//! let platform = StaticPlatform { name: "linux", release: "6.1.0" };
//! let options = Options { product: "librequests", version: "0.1" };
//! let mut client = Client::new(MockTransport, platform, options);
//!
//! let mut exchange = Exchange::new("http://httpbin.org/get");
//! // client.get(&mut exchange)?;
//! // assert_eq!(exchange.body().text(), "");
//! ```

/// Client identifier builder.
pub mod agent;

/// Growable response body accumulator.
pub mod body;

/// Request dispatcher and per-exchange state.
pub mod client;

/// Form encoding of key/value pairs.
pub mod encode;

pub use body::Body;
pub use client::{Client, Exchange, Method, Options};

/// Maximum number of header lines in one dispatch, the forced
/// `Content-Length: 0` entry included.
pub const MAX_HEADERS: usize = 16;

/// Maximum length of the built client identifier string.
pub const MAX_USER_AGENT_LEN: usize = 128;

/// Header line forced when a body-bearing request carries no payload. An
/// unset content length causes some servers to reject the request.
pub(crate) const CONTENT_LENGTH_ZERO: &str = "Content-Length: 0";
