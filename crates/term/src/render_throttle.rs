//! Decides when the render loop should redraw.

/// Redraws immediately when the board revision changes; otherwise at most
/// once per `min_idle_interval_ms` so the screen still refreshes while idle.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_idle_interval_ms: u64,
    last_render_ms: u64,
    last_revision: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_idle_interval_ms: u64) -> Self {
        Self {
            min_idle_interval_ms,
            last_render_ms: 0,
            last_revision: 0,
            has_rendered: false,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, revision: u64) -> bool {
        let due = !self.has_rendered
            || revision != self.last_revision
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_idle_interval_ms;

        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_revision = revision;
        }
        due
    }

    /// Force the next call to render (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}
