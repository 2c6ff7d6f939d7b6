//! HTTP layer: typed errors, the response envelope, the router, and the
//! server lifecycle. Handlers translate requests into single service
//! calls; everything else is shared plumbing.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
