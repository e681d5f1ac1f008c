// LogClassify - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and config.toml.
// Dependencies: util, directories crate.
// Must NOT depend on: ui.

pub mod config;
