//! Request pipeline for the FIFA API client
//!
//! - `transport`: the injectable "send a request, get a response" seam
//! - `query`: options record → query string encoding
//! - `http`: [`FifaClient`], which ties configuration, query encoding,
//!   transport and JSON decoding together

pub mod http;
pub mod query;
pub mod transport;

// Re-export commonly used items for convenience
pub use http::{decode_response, FifaClient};
pub use query::{IntoQueryPairs, QueryPairs};
pub use transport::{FixtureTransport, HttpRequest, HttpResponse, ReqwestTransport, Transport};
