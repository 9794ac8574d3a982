//! Application state and logic
//!
//! Organized into focused modules: core state, sub-state structures, async
//! operation plumbing, event handling, and rendering.

mod async_ops;
mod core;
mod events;
mod rendering;
pub mod state;

pub use async_ops::{BatchRequest, DownloadRequest, RetryRequest};
pub use core::App;
