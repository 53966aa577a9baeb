use serde::Serialize;
use super::geometry::Size;
/// Declarative record a visual editor uses to list and instantiate the widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WidgetDescriptor {
    pub name: String,
    pub group: String,
    pub tooltip: String,
    pub whats_this: String,
    pub include_file: String,
    pub extends: String,
    pub default_size: Size,
    pub icon: Option<String>,
    pub is_container: bool,
}
pub fn load_timeline_descriptor() -> WidgetDescriptor {
    WidgetDescriptor {
        name: "LoadTimeline".into(),
        group: "Mental Load Widgets".into(),
        tooltip: "Load trend over a configurable time window".into(),
        whats_this: "Load timeline with high/medium/low zones, configurable ticks and grid".into(),
        include_file: "load_timeline_core::LoadTimeline".into(),
        extends: "Frame".into(),
        default_size: Size::new(400.0, 220.0),
        icon: None,
        is_container: false,
    }
}
impl WidgetDescriptor {
    /// Instance name used in generated forms: the name with a lowercase first letter.
    pub fn instance_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
    /// Designer DOM XML with geometry, tooltip and what's-this defaults.
    pub fn to_ui_xml(&self) -> String {
        format!(
            r#"<ui language="rust">
 <widget class="{class}" name="{instance}">
  <property name="geometry">
   <rect>
    <x>0</x>
    <y>0</y>
    <width>{width}</width>
    <height>{height}</height>
   </rect>
  </property>
  <property name="toolTip">
   <string>{tooltip}</string>
  </property>
  <property name="whatsThis">
   <string>{whats_this}</string>
  </property>
 </widget>
 <customwidgets>
  <customwidget>
   <class>{class}</class>
   <extends>{extends}</extends>
   <header>{header}</header>
  </customwidget>
 </customwidgets>
</ui>
"#,
            class = xml_escape(&self.name),
            instance = xml_escape(&self.instance_name()),
            width = self.default_size.width.round() as i64,
            height = self.default_size.height.round() as i64,
            tooltip = xml_escape(&self.tooltip),
            whats_this = xml_escape(&self.whats_this),
            extends = xml_escape(&self.extends),
            header = xml_escape(&self.include_file),
        )
    }
}
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
