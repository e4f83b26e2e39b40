//! Per-frame environment and collaborator interfaces.
//!
//! The core never talks to audio devices or render targets directly. It
//! consumes a [`Frame`] (clock, randomness, configuration) and emits sound
//! and sprite requests through the [`AudioSink`] and [`Canvas`] traits,
//! which the runtime implements.
mod frame;
mod sinks;

pub use frame::Frame;
pub use sinks::{AudioSink, Canvas};
