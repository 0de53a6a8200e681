//! Name cleaning core

pub mod ascii;
pub mod case;
pub mod date;
pub mod pipeline;
pub mod posix;
pub mod reserved;
pub mod unique;

pub use case::CaseMode;
pub use date::{DateMode, DateStyle};
pub use pipeline::{NameCleaner, TransformConfig};
pub use unique::FsProbe;
