//! Skips redundant redraws while nothing on screen can move.

use crate::core::GameSnapshot;

/// Identifies what a static frame shows; changes whenever a redraw is due.
pub fn fingerprint(snap: &GameSnapshot) -> u64 {
    let flags = u64::from(snap.started) | (u64::from(snap.over) << 1);
    snap.tick
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (u64::from(snap.episode) << 40)
        ^ (u64::from(snap.score) << 8)
        ^ flags
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_render_ms: Option<u64>,
    last_fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: None,
            last_fingerprint: 0,
        }
    }

    /// Whether to draw now.
    ///
    /// Moving frames always render. Static frames render on a fingerprint
    /// change, otherwise at most once per idle interval.
    pub fn should_render(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        let fp = fingerprint(snap);
        let due = match self.last_render_ms {
            None => true,
            Some(_) if !snap.is_static() || fp != self.last_fingerprint => true,
            Some(last) => now_ms.saturating_sub(last) >= self.idle_interval_ms,
        };
        if due {
            self.last_render_ms = Some(now_ms);
            self.last_fingerprint = fp;
        }
        due
    }

    /// Force the next call to render (terminal resize).
    pub fn invalidate(&mut self) {
        self.last_render_ms = None;
    }
}
