//! Lifecycle management subsystem.
//!
//! Startup order: config, then the initial route load (fatal on failure),
//! then the watcher, then the listener. Shutdown reverses it: the server
//! drains on the broadcast signal and the watch handle is stopped last.

pub mod shutdown;

pub use shutdown::Shutdown;
