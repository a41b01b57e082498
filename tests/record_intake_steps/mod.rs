//! Step definitions for record intake scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
