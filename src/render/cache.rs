//! Frame cache with explicit dirty-state transitions.

use crate::core::Viewport;
use crate::render::RenderFrame;

/// Holds the last materialized frame and decides when geometry must be
/// rebuilt.
///
/// A redraw rebuilds iff the cache is dirty, no frame exists yet, or the
/// viewport differs from the one the cached frame was built for. Otherwise
/// the cached frame is replayed unchanged, keeping compositor-driven redraws
/// cheap.
#[derive(Debug, Default)]
pub struct RenderCache {
    frame: Option<RenderFrame>,
    dirty: bool,
    built_for: Option<Viewport>,
}

impl RenderCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn needs_rebuild(&self, viewport: Viewport) -> bool {
        self.dirty || self.frame.is_none() || self.built_for != Some(viewport)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the cached frame stale. Called on every element mutation,
    /// configuration change, and selection change.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Stores a freshly built frame and clears the dirty flag.
    pub fn store(&mut self, frame: RenderFrame, viewport: Viewport) {
        self.frame = Some(frame);
        self.built_for = Some(viewport);
        self.dirty = false;
    }

    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderCache;
    use crate::core::Viewport;
    use crate::render::RenderFrame;

    #[test]
    fn rebuild_needed_until_first_store() {
        let viewport = Viewport::new(100, 100);
        let mut cache = RenderCache::new();
        assert!(cache.needs_rebuild(viewport));

        cache.store(RenderFrame::new(viewport), viewport);
        assert!(!cache.needs_rebuild(viewport));
        assert!(!cache.is_dirty());
    }

    #[test]
    fn viewport_change_invalidates_without_dirty_flag() {
        let viewport = Viewport::new(100, 100);
        let mut cache = RenderCache::new();
        cache.store(RenderFrame::new(viewport), viewport);

        assert!(cache.needs_rebuild(Viewport::new(200, 100)));
        assert!(!cache.is_dirty());
    }

    #[test]
    fn mark_dirty_forces_rebuild_with_same_viewport() {
        let viewport = Viewport::new(100, 100);
        let mut cache = RenderCache::new();
        cache.store(RenderFrame::new(viewport), viewport);

        cache.mark_dirty();
        assert!(cache.needs_rebuild(viewport));
    }
}
