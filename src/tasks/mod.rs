//! Background Tasks Module
//!
//! Contains background tasks that run alongside the interactive session.
//!
//! # Tasks
//! - Cache sweep: removes stale response bodies once per TTL window

mod sweep;

pub use sweep::spawn_sweep_task;
