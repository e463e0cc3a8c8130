// Application layer - the ledger use cases and their error taxonomy.
// Transport concerns (HTTP status codes, JSON bodies) live in `api`.

pub mod error;
mod service;

pub use error::*;
pub use service::*;
