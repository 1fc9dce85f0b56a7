//! # librequests - Minimal HTTP Client Core
//!
//! A small HTTP client core that issues GET/POST/PUT requests against a URL,
//! streams the response body into an in-memory buffer as it arrives, and
//! reports the numeric status code. The actual network exchange (connect,
//! TLS, redirects, retries) lives behind a pluggable transport trait, so the
//! core runs anywhere from hosted Linux to `no_std` firmware with an
//! allocator.
//!
//! ## Features
//!
//! - **Request dispatch**: GET, POST, and PUT (via method override) with
//!   optional form bodies and custom headers
//! - **Streaming accumulation**: response bodies are assembled chunk by
//!   chunk in arrival order, with exact size accounting
//! - **Form encoding**: ordered key/value pairs become a percent-encoded
//!   request body
//! - **Client identification**: a `product/version platform/release`
//!   identifier built from an injectable platform-info provider
//! - **Transport agnostic**: works with any type implementing
//!   [`network::Transport`]
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! librequests = "0.1.0"
//! ```
//!
//! ### Basic GET Request
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
//! let transport = MockTransport;
//! let platform = StaticPlatform { name: "linux", release: "6.1.0" };
//! let options = Options { product: "librequests", version: "0.1" };
//! let mut client = Client::new(transport, platform, options);
//!
//! let mut exchange = Exchange::new("http://httpbin.org/get");
//! // client.get(&mut exchange)?;
//! // assert_eq!(exchange.status_code(), 200);
//! ```
//!
//! ### Submitting Form Data
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
//! let mut exchange = Exchange::new("http://httpbin.org/post");
//! let form = [("device", "sensor-01"), ("reading", "23.5")];
//! // client.post(&mut exchange, Some(&form))?;
//! // client.put(&mut exchange, Some(&form))?;
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers with a heap allocator (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` and `alloc` libraries
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the host platform provider
//!   (default: disabled)
//! - `async`: Enable the async mirror of the transport trait
//! - `defmt`: Enable defmt formatting of error types for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

/// Network abstraction layer providing the transport seam and the HTTP
/// client core.
///
/// This module defines the [`Transport`](network::Transport) boundary that
/// performs the actual exchange, and the [`http`](network::http) module that
/// dispatches requests and accumulates responses across it.
pub mod network;

/// System utilities backing the client core.
///
/// Contains the platform-info provider consumed by the client identifier
/// builder, with injectable implementations for testing and firmware use.
pub mod system;
