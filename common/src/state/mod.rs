//! Reducer-style state containers, one per stateful demo.
//!
//! The Yew components own one of these and route their messages through
//! it, so every transition the UI can make is reachable from plain tests.

pub mod chef;
pub mod meme;
