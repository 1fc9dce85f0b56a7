//! Mock transport implementation for client testing

use librequests::network::error::Error;
use librequests::network::{Command, Envelope, Sink, Transport};

/// What the transport saw for the last exchange, captured as owned data.
pub struct Seen {
    pub url: String,
    pub verb: String,
    pub body: Option<String>,
    pub headers: Vec<String>,
    pub agent: Option<String>,
}

/// Mock transport with a predefined status and body chunks to deliver.
pub struct MockTransport {
    pub status: u16,
    pub chunks: Vec<Vec<u8>>,
    pub fail: Option<Error>,
    pub seen: Option<Seen>,
}

impl MockTransport {
    /// Create a mock that completes with `status` and delivers no body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            chunks: Vec::new(),
            fail: None,
            seen: None,
        }
    }

    /// Create a mock that completes with `status` after delivering `chunks`
    /// in order.
    pub fn with_chunks(status: u16, chunks: &[&[u8]]) -> Self {
        Self {
            status,
            chunks: chunks.iter().map(|chunk| chunk.to_vec()).collect(),
            fail: None,
            seen: None,
        }
    }
}

impl Transport for MockTransport {
    fn execute(&mut self, envelope: &Envelope<'_>, sink: &mut Sink<'_>) -> Result<u16, Error> {
        let verb = match envelope.command {
            Command::Get => String::from("GET"),
            Command::Post => String::from("POST"),
            Command::Override(verb) => format!("OVERRIDE {verb}"),
        };
        self.seen = Some(Seen {
            url: envelope.url.to_string(),
            verb,
            body: envelope.body.map(str::to_string),
            headers: envelope.headers.iter().map(|line| line.to_string()).collect(),
            agent: envelope.agent.map(str::to_string),
        });

        if let Some(error) = self.fail {
            return Err(error);
        }
        for chunk in &self.chunks {
            sink(chunk)?;
        }
        Ok(self.status)
    }

    fn close(self) -> Result<(), Error> {
        Ok(())
    }
}
