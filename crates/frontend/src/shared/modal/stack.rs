//! Open modals, bottom to top. Escape closes only the topmost one.

use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalStack {
    open: Vec<u64>,
    next_id: u64,
}

impl ModalStack {
    /// Register a newly mounted modal; it becomes the top
    pub fn push(&mut self) -> u64 {
        self.next_id += 1;
        self.open.push(self.next_id);
        self.next_id
    }

    /// Unmounted modals may leave in any order
    pub fn remove(&mut self, id: u64) {
        self.open.retain(|open| *open != id);
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.open.last() == Some(&id)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

/// Shared stack provided at the app root
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<ModalStack>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ModalStack::default()),
        }
    }

    pub fn push(&self) -> u64 {
        let mut id = 0;
        self.stack.update(|s| id = s.push());
        id
    }

    pub fn remove(&self, id: u64) {
        self.stack.update(|s| s.remove(id));
    }

    pub fn is_top(&self, id: u64) -> bool {
        self.stack.with_untracked(|s| s.is_top(id))
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_topmost_modal_handles_escape() {
        let mut stack = ModalStack::default();
        let details = stack.push();
        let validation = stack.push();
        assert!(stack.is_top(validation));
        assert!(!stack.is_top(details));

        // validation modal closes, the form underneath stays and is now on top
        stack.remove(validation);
        assert!(stack.is_top(details));
        assert_eq!(stack.len(), 1);

        stack.remove(details);
        assert!(stack.is_empty());
        assert!(!stack.is_top(details));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = ModalStack::default();
        let first = stack.push();
        stack.remove(first);
        let second = stack.push();
        assert_ne!(first, second);
        assert!(!stack.is_top(first));
        assert!(stack.is_top(second));
    }

    #[test]
    fn test_removing_a_lower_modal_keeps_the_top() {
        let mut stack = ModalStack::default();
        let a = stack.push();
        let b = stack.push();
        stack.remove(a);
        assert!(stack.is_top(b));
    }
}
