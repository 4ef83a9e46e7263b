//! End-to-end test support for the Somnium REST surface
//!
//! The harness runs the real router over a fresh in-memory store, so every
//! test exercises the same code path a deployed server would, minus the
//! listener.

pub mod fixtures;
pub mod harness;
