//! Immediate-mode controls emitted by demos from `on_imgui_render`.
//!
//! Demos describe widgets here; the host's UI layer draws them and writes edits back
//! through the same handle before the next frame.

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Text(String),
    Slider { label: String, value: f32, min: f32, max: f32 },
    Checkbox { label: String, value: bool },
    Color { label: String, rgba: [f32; 4] },
}

impl Widget {
    pub fn label(&self) -> Option<&str> {
        match self {
            Widget::Text(_) => None,
            Widget::Slider { label, .. } | Widget::Checkbox { label, .. } | Widget::Color { label, .. } => {
                Some(label.as_str())
            }
        }
    }
}

/// Ordered widgets for the current frame plus edits queued by the UI layer.
#[derive(Clone, Debug, Default)]
pub struct ControlPanel {
    /// Window title; the active demo's name.
    pub title: String,
    pub widgets: Vec<Widget>,
    edits: Vec<Widget>,
}

impl ControlPanel {
    /// Drop this frame's widgets. Pending edits survive until a demo takes them.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    /// Drop queued edits; they belong to the demo that was active when they were made.
    pub fn clear_edits(&mut self) {
        self.edits.clear();
    }

    pub fn pending_edits(&self) -> usize {
        self.edits.len()
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.widgets.push(Widget::Text(text.into()));
    }

    /// Show a slider and return the value to use this frame, applying any queued edit.
    pub fn slider(&mut self, label: &str, value: f32, min: f32, max: f32) -> f32 {
        let value = match self.take_edit(label) {
            Some(Widget::Slider { value, .. }) => value.clamp(min, max),
            _ => value,
        };
        self.widgets.push(Widget::Slider { label: label.to_string(), value, min, max });
        value
    }

    pub fn checkbox(&mut self, label: &str, value: bool) -> bool {
        let value = match self.take_edit(label) {
            Some(Widget::Checkbox { value, .. }) => value,
            _ => value,
        };
        self.widgets.push(Widget::Checkbox { label: label.to_string(), value });
        value
    }

    pub fn color(&mut self, label: &str, rgba: [f32; 4]) -> [f32; 4] {
        let rgba = match self.take_edit(label) {
            Some(Widget::Color { rgba, .. }) => rgba.map(|c| c.clamp(0.0, 1.0)),
            _ => rgba,
        };
        self.widgets.push(Widget::Color { label: label.to_string(), rgba });
        rgba
    }

    /// Queue a user edit. Applied the next time a demo shows the widget with this label.
    pub fn submit_edit(&mut self, edit: Widget) {
        let Some(label) = edit.label().map(str::to_string) else {
            return;
        };
        self.edits.retain(|e| e.label() != Some(label.as_str()));
        self.edits.push(edit);
    }

    pub fn find(&self, label: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.label() == Some(label))
    }

    fn take_edit(&mut self, label: &str) -> Option<Widget> {
        let index = self.edits.iter().position(|e| e.label() == Some(label))?;
        Some(self.edits.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_applies_clamped_edit_once() {
        let mut panel = ControlPanel::default();
        assert_eq!(panel.slider("speed", 1.0, 0.0, 5.0), 1.0);
        panel.submit_edit(Widget::Slider { label: "speed".into(), value: 9.0, min: 0.0, max: 5.0 });
        panel.clear();
        assert_eq!(panel.slider("speed", 1.0, 0.0, 5.0), 5.0);
        panel.clear();
        assert_eq!(panel.slider("speed", 1.0, 0.0, 5.0), 1.0);
    }

    #[test]
    fn edit_of_wrong_kind_is_ignored() {
        let mut panel = ControlPanel::default();
        panel.submit_edit(Widget::Checkbox { label: "tint".into(), value: true });
        assert_eq!(panel.color("tint", [1.0; 4]), [1.0; 4]);
        assert!(matches!(panel.find("tint"), Some(Widget::Color { .. })));
    }

    #[test]
    fn later_edit_replaces_earlier() {
        let mut panel = ControlPanel::default();
        panel.submit_edit(Widget::Checkbox { label: "paused".into(), value: true });
        panel.submit_edit(Widget::Checkbox { label: "paused".into(), value: false });
        panel.submit_edit(Widget::Text("ignored".into()));
        assert!(!panel.checkbox("paused", true));
        assert!(panel.checkbox("paused", true));
        assert_eq!(panel.widgets.len(), 2);
    }

    #[test]
    fn cleared_edits_are_not_applied() {
        let mut panel = ControlPanel::default();
        panel.submit_edit(Widget::Slider { label: "speed".into(), value: 3.0, min: 0.0, max: 5.0 });
        assert_eq!(panel.pending_edits(), 1);
        panel.clear();
        assert_eq!(panel.pending_edits(), 1);
        panel.clear_edits();
        assert_eq!(panel.pending_edits(), 0);
        assert_eq!(panel.slider("speed", 1.0, 0.0, 5.0), 1.0);
    }
}
