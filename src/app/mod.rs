// LogClassify - app/mod.rs
//
// Application layer: owned state containers, the transport client and
// the classification lifecycle.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod buffer;
pub mod classify;
pub mod headless;
pub mod state;
pub mod store;
pub mod transport;
