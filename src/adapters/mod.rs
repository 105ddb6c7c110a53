// Adapters layer: concrete implementations of the domain ports (flat-file storage,
// HTTP client) and the axum server exposing the lookup service.

pub mod http;
pub mod server;
pub mod storage;
