// Adapter module that surfaces the toolkit-free core kept under `timeline-rs/`.
// The same source files back the standalone `load-timeline-core` package.
#[path = "timeline-rs/src/lib.rs"]
mod timeline_rs;

pub use timeline_rs::*;
