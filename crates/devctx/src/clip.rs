use devctx_region::{ClipRegion, Point, Rect, Region};

use crate::{DcError, Result};

/// Nested clipping regions in device coordinates.
///
/// Each entry already holds the intersection with every entry below it, so
/// the top of the stack is the effective clip and popping it restores the
/// previous clip exactly. An empty stack means drawing is unclipped.
#[derive(Debug, Clone)]
pub struct ClipStack<R: ClipRegion = Region> {
    entries: Vec<R>,
    // Bumped by every clear
    generation: u64,
}

impl<R: ClipRegion> Default for ClipStack<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            generation: 0,
        }
    }
}

impl<R: ClipRegion> ClipStack<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intersect `region` with the current clip and make the result the new
    /// effective clip.
    pub fn push(&mut self, region: R) {
        let next = match self.entries.last() {
            Some(top) => top.intersect(&region),
            None => region,
        };
        log::trace!(
            "Pushed clip at depth {}: {:?}",
            self.entries.len() + 1,
            next.bounding_box()
        );
        self.entries.push(next);
    }

    pub fn push_rect(&mut self, rect: Rect) {
        self.push(R::from_rect(rect));
    }

    /// Drop the innermost clip and return it.
    pub fn pop(&mut self) -> Option<R> {
        let popped = self.entries.pop();
        if popped.is_some() {
            log::trace!("Popped clip, depth now {}", self.entries.len());
        }
        popped
    }

    /// Pop entries until at most `depth` remain.
    pub fn truncate(&mut self, depth: usize) {
        self.entries.truncate(depth);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of times the stack has been cleared. Lets a scope tell whether
    /// the entries it pushed were thrown away underneath it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_clipped(&self) -> bool {
        !self.entries.is_empty()
    }

    /// The effective clip, or `None` when unclipped
    pub fn effective(&self) -> Option<&R> {
        self.entries.last()
    }

    /// Bounding rectangle of the effective clip.
    ///
    /// Fails with [`DcError::EmptyClip`] when nothing is clipped; a clip that
    /// excludes everything yields an empty rectangle.
    pub fn clipping_box(&self) -> Result<Rect> {
        let top = self.effective().ok_or(DcError::EmptyClip)?;
        Ok(top.bounding_box().unwrap_or_default())
    }
}

impl ClipStack<Region> {
    /// Whether a device point survives the current clip
    pub fn is_visible(&self, p: Point) -> bool {
        self.effective().is_none_or(|region| region.contains(p))
    }
}
