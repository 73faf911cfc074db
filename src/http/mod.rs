//! HTTP server lifecycle.
//!
//! Binds the listening socket, emits the startup confirmation line, and
//! serves the router until a shutdown signal arrives. A failed bind is fatal;
//! the process must not keep running without a listening socket.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
