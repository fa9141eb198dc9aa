//! HTTP dispatch for resolved requests.

mod http;

pub use http::{HttpTransport, TransportError};
