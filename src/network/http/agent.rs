//! Client identifier builder.

use core::fmt::Write;
use heapless::String;

use super::MAX_USER_AGENT_LEN;
use super::client::Options;
use crate::network::error::Error;
use crate::system::platform::Platform;

/// Builds the client identifier string for one exchange.
///
/// The format is `<product>/<version> <name>/<release>`: product and version
/// from [`Options`], platform name and release from the injected
/// [`Platform`] provider. An identifier that does not fit in
/// [`MAX_USER_AGENT_LEN`] bytes is rejected with
/// [`Error::BufferOverflow`].
///
/// # Examples
///
/// ```rust
/// use librequests::network::http::{Options, agent};
/// use librequests::system::platform::StaticPlatform;
///
/// let platform = StaticPlatform { name: "linux", release: "6.1.0" };
/// let options = Options { product: "librequests", version: "0.1" };
///
/// let identifier = agent::user_agent(&platform, &options).unwrap();
/// assert_eq!(identifier.as_str(), "librequests/0.1 linux/6.1.0");
/// ```
pub fn user_agent<P: Platform>(
    platform: &P,
    options: &Options<'_>,
) -> Result<String<MAX_USER_AGENT_LEN>, Error> {
    let mut out = String::new();
    write!(
        out,
        "{}/{} {}/{}",
        options.product,
        options.version,
        platform.name(),
        platform.release()
    )
    .map_err(|_| Error::BufferOverflow)?;
    Ok(out)
}
