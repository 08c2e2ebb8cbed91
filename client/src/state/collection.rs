//! Listing state shared by the events, projects, files and admin pages.
//!
//! DESIGN
//! ======
//! Each listing keeps the full backend list and the visible (filtered)
//! subset. Mutations that succeed on the backend are applied to both lists
//! locally so the page does not refetch after every create, update or
//! delete.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use records::model::Record;
use records::search::FilterOutcome;

#[derive(Clone, Debug)]
pub struct Collection<T> {
    pub all: Vec<T>,
    pub visible: Vec<T>,
    pub loading: bool,
    /// Empty-result or load-failure text shown above the list.
    pub message: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { all: Vec::new(), visible: Vec::new(), loading: false, message: None }
    }
}

impl<T: Record + Clone> Collection<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.message = None;
    }

    /// Replace both lists with a fresh backend listing.
    pub fn load(&mut self, items: Vec<T>) {
        self.visible.clone_from(&items);
        self.all = items;
        self.loading = false;
        self.message = None;
    }

    /// Record a failed load; lists are left as they were.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.message = Some(message);
    }

    /// Show the result of a filter pass.
    pub fn show(&mut self, outcome: FilterOutcome<T>) {
        self.visible = outcome.items;
        self.message = outcome.message;
        self.loading = false;
    }

    pub fn reset_filter(&mut self) {
        self.visible.clone_from(&self.all);
        self.message = None;
    }

    pub fn apply_created(&mut self, item: T) {
        self.all.push(item.clone());
        self.visible.push(item);
        self.message = None;
    }

    /// Replace the item with the same id in both lists.
    pub fn apply_updated(&mut self, item: T) {
        let Some(id) = item.record_id().map(str::to_owned) else {
            return;
        };
        for list in [&mut self.all, &mut self.visible] {
            if let Some(slot) = list.iter_mut().find(|existing| existing.record_id() == Some(id.as_str())) {
                *slot = item.clone();
            }
        }
    }

    /// Update the item in place when its id is known, otherwise append it.
    pub fn apply_saved(&mut self, item: T) {
        let known = item.record_id().is_some_and(|id| self.find(id).is_some());
        if known {
            self.apply_updated(item);
        } else {
            self.apply_created(item);
        }
    }

    pub fn apply_removed(&mut self, id: &str) {
        self.all.retain(|item| item.record_id() != Some(id));
        self.visible.retain(|item| item.record_id() != Some(id));
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.all.iter().find(|item| item.record_id() == Some(id))
    }
}
