//! Command-line interface for `assistantkit`.
//!
//! This crate's binary delegates to [`assistantkit::run`].

fn main() -> anyhow::Result<()> {
    assistantkit::run()
}
