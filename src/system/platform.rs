//! Platform identification provider.

/// A provider of platform identification.
///
/// Abstracts the OS-level query behind two string accessors, consumed only
/// by the client identifier builder.
pub trait Platform {
    /// The platform name, e.g. `linux` or `esp32`.
    fn name(&self) -> &str;

    /// The platform release identifier.
    fn release(&self) -> &str;
}

/// Fixed identification values supplied at construction.
///
/// Suitable for firmware images where the platform is known at build time,
/// and as the injectable fake for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform<'a> {
    /// Platform name.
    pub name: &'a str,
    /// Platform release identifier.
    pub release: &'a str,
}

impl Platform for StaticPlatform<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn release(&self) -> &str {
        self.release
    }
}

/// Identification of the host the process runs on, from the standard
/// library's compile-time constants.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPlatform;

#[cfg(feature = "std")]
impl Platform for HostPlatform {
    fn name(&self) -> &str {
        std::env::consts::OS
    }

    fn release(&self) -> &str {
        std::env::consts::ARCH
    }
}
