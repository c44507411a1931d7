//! Keyboard focus ring.
//!
//! The ring is rebuilt from the focusable ids of each rendered tree. The
//! active id survives a rebuild when it is still present; otherwise focus
//! falls back to the node marked `auto_focus`, or to nothing.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct FocusContext {
    order: Vec<FocusId>,
    active: Option<usize>,
}

impl FocusContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ring with `ids` in render order.
    pub fn set_order(&mut self, ids: Vec<FocusId>, auto_focus: Option<FocusId>) {
        let previous = self.active_id().cloned();
        self.order = ids;
        self.active = previous
            .and_then(|id| self.position(&id))
            .or_else(|| auto_focus.and_then(|id| self.position(&id)));
    }

    pub fn focus_next(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.active = Some(match self.active {
            Some(i) => (i + 1) % self.order.len(),
            None => 0,
        });
    }

    pub fn focus_prev(&mut self) {
        if self.order.is_empty() {
            return;
        }
        let last = self.order.len() - 1;
        self.active = Some(match self.active {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Focus `id` if it is in the ring. Returns whether it was.
    pub fn focus(&mut self, id: &str) -> bool {
        match self.order.iter().position(|f| f.0 == id) {
            Some(i) => {
                self.active = Some(i);
                true
            }
            None => false,
        }
    }

    pub fn blur(&mut self) {
        self.active = None;
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.active_id().is_some_and(|active| active.0 == id)
    }

    pub fn active_id(&self) -> Option<&FocusId> {
        self.active.and_then(|i| self.order.get(i))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn position(&self, id: &FocusId) -> Option<usize> {
        self.order.iter().position(|f| f == id)
    }
}
