//! Common error types for client and transport operations

/// A common error type for client and transport operations.
///
/// This enum defines the errors the client core can report plus a set of
/// transport-level errors for implementations to map into. It is designed
/// to be simple and portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a transport that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// The target URL is empty or unusable.
    InvalidAddress,
    /// A protocol-specific error occurred.
    ProtocolError,
    /// A flattened key/value list had an odd number of elements.
    InvalidFormData,
    /// A body-bearing dispatch was requested for a method that takes no body.
    UnsupportedMethod,
    /// A fixed-capacity buffer was exceeded (too many header lines, or an
    /// identifier string too long).
    BufferOverflow,
    /// The response buffer could not grow; the request is aborted and the
    /// partial body released.
    OutOfMemory,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
            Error::InvalidFormData => defmt::write!(f, "InvalidFormData"),
            Error::UnsupportedMethod => defmt::write!(f, "UnsupportedMethod"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            Error::OutOfMemory => defmt::write!(f, "OutOfMemory"),
        }
    }
}
