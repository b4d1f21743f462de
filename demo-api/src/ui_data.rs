//! Per-frame context the host hands to demos. Host fills one per viewport each frame.

/// Mouse input sampled for the frame, in viewport pixels (origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseState {
    /// Cursor position, `None` when the cursor is outside the viewport.
    pub position: Option<(f32, f32)>,
    pub left_down: bool,
    pub right_down: bool,
}

/// Viewport, timing and input snapshot for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct UiData {
    /// Size of the viewport being rendered into, in physical pixels.
    pub viewport_size: (u32, u32),
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the host started.
    pub elapsed: f32,
    pub frame_index: u64,
    pub mouse: MouseState,
    /// Whether the viewport currently has input focus.
    pub focused: bool,
}

impl UiData {
    /// Width over height; 1.0 for a degenerate viewport.
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.viewport_size;
        if w == 0 || h == 0 {
            1.0
        } else {
            w as f32 / h as f32
        }
    }

    /// Cursor position in normalized device coordinates ([-1, 1], +y up).
    pub fn mouse_ndc(&self) -> Option<[f32; 2]> {
        let (x, y) = self.mouse.position?;
        let (w, h) = self.viewport_size;
        if w == 0 || h == 0 {
            return None;
        }
        Some([x / w as f32 * 2.0 - 1.0, 1.0 - y / h as f32 * 2.0])
    }

    /// Advance timing to the next frame.
    pub fn next_frame(&self, delta_time: f32) -> Self {
        Self {
            delta_time,
            elapsed: self.elapsed + delta_time,
            frame_index: self.frame_index + 1,
            ..self.clone()
        }
    }
}

impl Default for UiData {
    fn default() -> Self {
        Self {
            viewport_size: (800, 600),
            delta_time: 1.0 / 60.0,
            elapsed: 0.0,
            frame_index: 0,
            mouse: MouseState::default(),
            focused: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_handles_zero_height() {
        let ui = UiData { viewport_size: (640, 0), ..UiData::default() };
        assert_eq!(ui.aspect_ratio(), 1.0);
        assert_eq!(UiData::default().aspect_ratio(), 800.0 / 600.0);
    }

    #[test]
    fn mouse_ndc_maps_corners() {
        let mut ui = UiData { viewport_size: (200, 100), ..UiData::default() };
        assert_eq!(ui.mouse_ndc(), None);
        ui.mouse.position = Some((0.0, 0.0));
        assert_eq!(ui.mouse_ndc(), Some([-1.0, 1.0]));
        ui.mouse.position = Some((200.0, 100.0));
        assert_eq!(ui.mouse_ndc(), Some([1.0, -1.0]));
    }

    #[test]
    fn next_frame_accumulates_time() {
        let ui = UiData::default().next_frame(0.5).next_frame(0.25);
        assert_eq!(ui.frame_index, 2);
        assert_eq!(ui.elapsed, 0.75);
        assert_eq!(ui.delta_time, 0.25);
        assert_eq!(ui.viewport_size, (800, 600));
    }
}
