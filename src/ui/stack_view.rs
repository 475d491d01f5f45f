use std::cell::Cell;
use std::ops::Range;

/// Scroll state of one history list.
///
/// Position is kept as the number of entries hidden below the viewport,
/// counted from the newest end, so a list at `0` follows new entries.
/// The renderer reports the viewport height on every draw; scrolling never
/// moves past the point where the oldest entry is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackView {
    back: usize,
    height: Cell<usize>,
}

impl StackView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the number of rows the list was last drawn with
    pub fn set_viewport(&self, height: usize) {
        self.height.set(height);
    }

    /// Move one entry toward the oldest
    pub fn scroll_up(&mut self, len: usize) {
        self.back = (self.back + 1).min(self.max_back(len, self.height.get()));
    }

    /// Move one entry toward the newest
    pub fn scroll_down(&mut self) {
        self.back = self.back.saturating_sub(1);
    }

    pub fn jump_to_newest(&mut self) {
        self.back = 0;
    }

    pub fn is_at_newest(&self, len: usize) -> bool {
        self.clamped(len, self.height.get()) == 0
    }

    /// Indices of the entries visible in a viewport of `height` rows
    pub fn window(&self, len: usize, height: usize) -> Range<usize> {
        let end = len - self.clamped(len, height);
        let start = end.saturating_sub(height);
        start..end
    }

    fn clamped(&self, len: usize, height: usize) -> usize {
        self.back.min(self.max_back(len, height))
    }

    // Before the first draw the height is unknown; keep at least the newest
    // entry on screen.
    fn max_back(&self, len: usize, height: usize) -> usize {
        len.saturating_sub(height.max(1))
    }
}
