//! Request dispatcher and per-exchange state.

use alloc::string::String;
use heapless::Vec;

use super::agent;
use super::body::Body;
use super::encode;
use super::{CONTENT_LENGTH_ZERO, MAX_HEADERS};
use crate::network::error::Error;
use crate::network::{Command, Envelope, Transport};
use crate::system::platform::Platform;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Plain retrieval with no request body.
    Get,
    /// Standard body-bearing submission.
    Post,
    /// Body-bearing submission issued through the method-override mechanism.
    Put,
}

impl Method {
    /// Whether the method carries a request body.
    fn takes_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

/// Client configuration for the identifier string.
///
/// The product name and version reported to servers are configuration, not
/// constants baked into the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options<'a> {
    /// Product name reported in the client identifier.
    pub product: &'a str,
    /// Product version reported in the client identifier.
    pub version: &'a str,
}

/// Per-exchange state: the target URL, the accumulated response body, and
/// the status code of the completed request.
///
/// One exchange serves one logical request/response round trip. Dispatch
/// methods take it by `&mut`, so two in-flight requests cannot share one
/// exchange; dropping it frees the buffer.
///
/// # Examples
///
/// ```rust
/// use librequests::network::http::Exchange;
///
/// let exchange = Exchange::new("http://httpbin.org/get");
/// assert_eq!(exchange.status_code(), 0);
/// assert!(exchange.body().is_empty());
/// ```
#[derive(Debug)]
pub struct Exchange {
    url: String,
    status_code: u16,
    body: Body,
}

impl Exchange {
    /// Creates an exchange for `url` with an empty body and zero status.
    pub fn new(url: &str) -> Self {
        Self {
            url: String::from(url),
            status_code: 0,
            body: Body::new(),
        }
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The transport-reported status code; 0 until a request completes.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The accumulated response body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Splits the exchange into its independently borrowed parts.
    fn parts(&mut self) -> (&str, &mut u16, &mut Body) {
        (self.url.as_str(), &mut self.status_code, &mut self.body)
    }
}

/// HTTP client dispatching requests over a transport.
///
/// Owns the transport handle and the platform provider for the lifetime of
/// the client. Each dispatch call blocks until the transport completes and
/// returns with the response fully accumulated on the exchange.
pub struct Client<'a, T: Transport, P: Platform> {
    transport: T,
    platform: P,
    options: Options<'a>,
}

impl<'a, T: Transport, P: Platform> Client<'a, T, P> {
    /// Creates a client around a transport handle and a platform provider.
    pub fn new(transport: T, platform: P, options: Options<'a>) -> Self {
        Self {
            transport,
            platform,
            options,
        }
    }

    /// Issues a GET request, accumulating the response on `exchange`.
    pub fn get(&mut self, exchange: &mut Exchange) -> Result<(), Error> {
        self.perform(exchange, Method::Get, None, None)
    }

    /// Issues a POST request with an optional form body.
    pub fn post(
        &mut self,
        exchange: &mut Exchange,
        form: Option<&[(&str, &str)]>,
    ) -> Result<(), Error> {
        self.submit(exchange, Method::Post, form, None)
    }

    /// Issues a PUT request with an optional form body.
    pub fn put(
        &mut self,
        exchange: &mut Exchange,
        form: Option<&[(&str, &str)]>,
    ) -> Result<(), Error> {
        self.submit(exchange, Method::Put, form, None)
    }

    /// Issues a POST request with an optional form body and custom headers.
    pub fn post_with_headers(
        &mut self,
        exchange: &mut Exchange,
        form: Option<&[(&str, &str)]>,
        headers: &[&str],
    ) -> Result<(), Error> {
        self.submit(exchange, Method::Post, form, Some(headers))
    }

    /// Issues a PUT request with an optional form body and custom headers.
    pub fn put_with_headers(
        &mut self,
        exchange: &mut Exchange,
        form: Option<&[(&str, &str)]>,
        headers: &[&str],
    ) -> Result<(), Error> {
        self.submit(exchange, Method::Put, form, Some(headers))
    }

    /// Unified body-bearing dispatch behind [`post`](Client::post),
    /// [`put`](Client::put), and their header-carrying variants. Typically
    /// not used directly.
    ///
    /// Fails with [`Error::UnsupportedMethod`] before any transport
    /// interaction if `method` does not carry a body.
    pub fn submit(
        &mut self,
        exchange: &mut Exchange,
        method: Method,
        form: Option<&[(&str, &str)]>,
        headers: Option<&[&str]>,
    ) -> Result<(), Error> {
        if !method.takes_body() {
            return Err(Error::UnsupportedMethod);
        }
        self.perform(exchange, method, form, headers)
    }

    /// The underlying transport handle.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Releases the transport handle.
    pub fn close(self) -> Result<(), Error> {
        self.transport.close()
    }

    /// Validates, assembles headers and body, and drives the transport.
    ///
    /// Every transient this builds (encoded body, header list, identifier
    /// string) lives on this frame and is released on every exit path.
    fn perform(
        &mut self,
        exchange: &mut Exchange,
        method: Method,
        form: Option<&[(&str, &str)]>,
        extra: Option<&[&str]>,
    ) -> Result<(), Error> {
        let (url, status_code, body) = exchange.parts();
        if url.is_empty() {
            return Err(Error::InvalidAddress);
        }

        let identifier = agent::user_agent(&self.platform, &self.options)?;

        let encoded = match form {
            Some(pairs) => Some(encode::form(pairs)?),
            None => None,
        };

        let mut headers: Vec<&str, MAX_HEADERS> = Vec::new();
        if method.takes_body() && encoded.is_none() {
            headers
                .push(CONTENT_LENGTH_ZERO)
                .map_err(|_| Error::BufferOverflow)?;
        }
        if let Some(extra) = extra {
            for &line in extra {
                headers.push(line).map_err(|_| Error::BufferOverflow)?;
            }
        }

        let command = match method {
            Method::Get => Command::Get,
            Method::Post => Command::Post,
            // Dedicated PUT in typical transport APIs rejects an arbitrary
            // request body, so the verb is set explicitly.
            Method::Put => Command::Override("PUT"),
        };

        let envelope = Envelope {
            url,
            command,
            body: encoded.as_deref(),
            headers: &headers,
            agent: Some(identifier.as_str()),
        };

        let code = self
            .transport
            .execute(&envelope, &mut |chunk| body.append(chunk))?;
        *status_code = code;
        Ok(())
    }
}
