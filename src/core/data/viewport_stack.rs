use crate::core::data::viewport::Viewport;

/// LIFO history of viewports. The root entry is created at construction and
/// can never be removed, so `current()` is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportStack {
    views: Vec<Viewport>,
}

impl Default for ViewportStack {
    fn default() -> Self {
        Self::new(Viewport::identity())
    }
}

impl ViewportStack {
    #[must_use]
    pub fn new(root: Viewport) -> Self {
        Self { views: vec![root] }
    }

    /// The stack top, read once per render pass to snapshot the view before
    /// dispatch. Returns a copy so in-flight workers never alias the stack.
    #[must_use]
    pub fn current(&self) -> Viewport {
        *self
            .views
            .last()
            .expect("viewport stack always holds the root view")
    }

    pub fn push(&mut self, view: Viewport) {
        self.views.push(view);
    }

    /// Removes the top view. Popping the root is a no-op; returns whether a
    /// view was actually removed.
    pub fn pop(&mut self) -> bool {
        if self.views.len() > 1 {
            self.views.pop();
            true
        } else {
            false
        }
    }

    /// Collapses the history back to just the root view.
    pub fn reset(&mut self) {
        self.views.truncate(1);
    }

    /// Swaps the top view for `view` without growing the history. Used by
    /// pan, which adjusts the current view rather than entering a new one.
    pub fn replace_top(&mut self, view: Viewport) {
        let top = self
            .views
            .last_mut()
            .expect("viewport stack always holds the root view");
        *top = view;
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.views.len()
    }
}
