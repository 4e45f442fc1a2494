//! Legal process guidance.
//!
//! Browse legal categories, drill into actions, read a step-by-step roadmap
//! for each, or describe an issue to a scripted assistant that walks a fixed
//! intake flow and lands on one of a set of canned roadmaps.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod intake;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod render;
pub mod resolver;
pub mod tui;
