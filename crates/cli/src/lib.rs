//! Command-line front end over `assistantkit_agents` and `assistantkit-publish`.

#![deny(unsafe_code)]

mod app;
pub mod cli;
pub mod config;

pub use app::run;
