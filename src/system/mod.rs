//! System utilities backing the client core.
//!
//! This module hosts the platform identification seam consumed by the
//! client identifier builder. Keeping OS identification behind a small
//! trait keeps the core portable: firmware supplies fixed values, hosted
//! targets query the standard library, and tests inject fakes.
//!
//! # Usage
//!
//! ```rust
//! use librequests::system::platform::{Platform, StaticPlatform};
//!
//! let platform = StaticPlatform { name: "esp32", release: "5.1.2" };
//! assert_eq!(platform.name(), "esp32");
//! ```

/// Platform identification provider.
///
/// Contains the [`Platform`](platform::Platform) trait together with a
/// fixed-value implementation and, under the `std` feature, a host-querying
/// one.
pub mod platform;
