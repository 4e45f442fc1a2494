//! Terminal front end.
//!
//! Owns the terminal for the life of the session; logging goes to a file.

mod app;
mod screens;

pub use app::run;
