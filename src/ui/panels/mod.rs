// LogClassify - ui/panels/mod.rs

pub mod about;
pub mod input;
pub mod results;
