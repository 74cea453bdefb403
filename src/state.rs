use std::time::{Duration, Instant};

/// Host-side view state of the dashboard. Window geometry lives in the
/// window manager; this only tracks what the agent has selected and how the
/// terminal is configured.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    mouse_capture_enabled: bool,
    mouse_capture_dirty: bool,
    dock_mode: bool,
    selected: usize,
    status: Option<(String, Instant)>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            mouse_capture_enabled: true,
            ..Self::default()
        }
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture_enabled
    }

    pub fn set_mouse_capture_enabled(&mut self, enabled: bool) {
        if self.mouse_capture_enabled == enabled {
            return;
        }
        self.mouse_capture_enabled = enabled;
        self.mouse_capture_dirty = true;
    }

    pub fn toggle_mouse_capture(&mut self) {
        let enabled = !self.mouse_capture_enabled;
        self.set_mouse_capture_enabled(enabled);
    }

    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        if self.mouse_capture_dirty {
            self.mouse_capture_dirty = false;
            Some(self.mouse_capture_enabled)
        } else {
            None
        }
    }

    pub fn dock_mode(&self) -> bool {
        self.dock_mode
    }

    pub fn toggle_dock_mode(&mut self) {
        self.dock_mode = !self.dock_mode;
    }

    /// Index into the host's session list. Always within `0..len` once
    /// [`DashboardState::clamp_selection`] has run.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected;
    }

    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.set_status_at(status, Instant::now());
    }

    pub fn set_status_at(&mut self, status: impl Into<String>, at: Instant) {
        self.status = Some((status.into(), at));
    }

    /// Drop the status once it is `ttl` old. Returns whether it was dropped.
    pub fn expire_status(&mut self, now: Instant, ttl: Duration) -> bool {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= ttl);
        if expired {
            self.status = None;
        }
        expired
    }
}
