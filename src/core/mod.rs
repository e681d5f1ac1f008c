// LogClassify - core/mod.rs
//
// Core business logic layer: line splitting, payload construction,
// result interpretation and export.
// Must NOT depend on: ui, platform, app, or perform network I/O.

pub mod export;
pub mod lines;
pub mod model;
pub mod payload;
pub mod results;
