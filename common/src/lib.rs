//! Shared model and state containers for the demo apps.
//!
//! Everything in here is target independent: the frontend compiles it to
//! WASM, the backend uses the wire types, and the unit tests run natively.

pub mod model;
pub mod state;
