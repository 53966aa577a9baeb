// src/plugin.rs
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use crate::timeline::{load_timeline_descriptor, WidgetDescriptor};
/// Widgets this binary offers to a visual editor.
pub static REGISTERED_WIDGETS: Lazy<Vec<WidgetDescriptor>> =
    Lazy::new(|| vec![load_timeline_descriptor()]);
pub fn find(name: &str) -> Option<&'static WidgetDescriptor> {
    REGISTERED_WIDGETS.iter().find(|d| d.name == name)
}
/// Every registered widget, or only the one called `name`.
pub fn select(name: Option<&str>) -> Result<Vec<&'static WidgetDescriptor>> {
    match name {
        Some(name) => find(name)
            .map(|d| vec![d])
            .ok_or_else(|| anyhow!("no widget named {name:?} is registered")),
        None => Ok(REGISTERED_WIDGETS.iter().collect()),
    }
}
pub fn describe_json(widgets: &[&WidgetDescriptor]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(widgets)
}
pub fn describe_xml(widgets: &[&WidgetDescriptor]) -> String {
    widgets
        .iter()
        .map(|d| d.to_ui_xml())
        .collect::<Vec<_>>()
        .join("\n")
}
