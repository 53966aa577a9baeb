pub mod buffer;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod descriptor;
pub mod geometry;
pub mod mapping;
pub mod path;
#[cfg(test)]
mod recording;
pub mod render;
pub mod widget;
pub use buffer::{Sample, SampleStore};
pub use canvas::{Canvas, HAlign, Stroke, TextAnchor, TextStyle, VAlign};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{TimelineConfig, MAX_TIME_WINDOW_SECS};
pub use descriptor::{load_timeline_descriptor, WidgetDescriptor};
pub use geometry::{Point, Rect, Rgba, Size};
pub use path::{PathSegment, TracePath};
pub use widget::{LoadTimeline, SubscriptionId, TimelineEvent};
