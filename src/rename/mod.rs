//! Applying cleaned names to files on disk

pub mod output;
pub mod process;
pub mod result;
pub mod walker;

pub use output::OutputFormat;
pub use process::{RunOptions, process_one};
pub use result::Summary;
pub use walker::walk;
