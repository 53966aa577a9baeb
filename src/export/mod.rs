// src/export/mod.rs
pub mod error;
pub mod png;
pub use error::ExportError;
pub use png::{render_timeline_png, write_snapshot};
