use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::view::{Content, Target, View};

#[derive(Default)]
struct State {
    current: HashMap<Target, Content>,
    writes: Vec<(Target, Content)>,
}

/// In-memory view keeping the latest content of every target along with the
/// full write history.
#[derive(Default)]
pub struct MemoryView {
    state: Mutex<State>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn content(&self, target: Target) -> Option<Content> {
        self.state().current.get(&target).cloned()
    }

    /// Current text or markup of `target`, whichever was written last.
    pub fn text(&self, target: Target) -> Option<String> {
        self.content(target).map(|content| content.as_str().to_string())
    }

    pub fn writes(&self) -> Vec<(Target, Content)> {
        self.state().writes.clone()
    }

    fn record(&self, target: Target, content: Content) {
        let mut state = self.state();
        state.writes.push((target, content.clone()));
        state.current.insert(target, content);
    }
}

impl View for MemoryView {
    fn set_text(&self, target: Target, text: &str) {
        self.record(target, Content::Text(text.to_string()));
    }

    fn set_html(&self, target: Target, html: &str) {
        self.record(target, Content::Html(html.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_replaces_content() {
        let view = MemoryView::new();
        view.set_text(Target::Status, "first");
        view.set_html(Target::Status, "<b>second</b>");
        assert_eq!(
            view.content(Target::Status),
            Some(Content::Html("<b>second</b>".into()))
        );
        assert_eq!(view.writes().len(), 2);
        assert_eq!(view.text(Target::Products), None);
    }
}
