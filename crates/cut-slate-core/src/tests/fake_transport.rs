use crate::{CoreResult, Endpoint, SlateError, Transport};

use std::{io, panic::Location};

use error_location::ErrorLocation;

/// In-memory transport that records payloads and fails on request.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    pub(crate) sent: Vec<(Vec<u8>, Endpoint)>,
    pub(crate) attempts: usize,
    failing_addresses: Vec<String>,
    failing_calls: Vec<usize>,
}

impl FakeTransport {
    /// Fails every payload that starts with `address`.
    pub(crate) fn failing_on_address(mut self, address: &str) -> Self {
        self.failing_addresses.push(address.to_string());
        self
    }

    /// Fails the `call`-th send (zero-based), counting failed attempts too.
    pub(crate) fn failing_on_call(mut self, call: usize) -> Self {
        self.failing_calls.push(call);
        self
    }

    pub(crate) fn stop_failing(&mut self) {
        self.failing_addresses.clear();
        self.failing_calls.clear();
    }

    pub(crate) fn sent_payloads(&self) -> Vec<&[u8]> {
        self.sent.iter().map(|(payload, _)| payload.as_slice()).collect()
    }
}

impl Transport for FakeTransport {
    fn send(&mut self, payload: &[u8], endpoint: &Endpoint) -> CoreResult<usize> {
        let call = self.attempts;
        self.attempts += 1;

        let address_fails = self
            .failing_addresses
            .iter()
            .any(|address| payload.starts_with(address.as_bytes()));

        if address_fails || self.failing_calls.contains(&call) {
            return Err(SlateError::TransportFailure {
                endpoint: endpoint.to_string(),
                source: io::Error::new(io::ErrorKind::NetworkUnreachable, "scripted failure"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.sent.push((payload.to_vec(), endpoint.clone()));
        Ok(payload.len())
    }
}
