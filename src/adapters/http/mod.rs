//! HTTP adapters for outbound export requests.

mod reqwest_transport;

pub use reqwest_transport::{ReqwestTransport, DEFAULT_TIMEOUT};
