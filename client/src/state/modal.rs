//! Create/edit modal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Open flag plus the record being edited; `editing == None` while open
/// means "create".
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState<T> {
    pub open: bool,
    pub editing: Option<T>,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self { open: false, editing: None }
    }
}

impl<T> ModalState<T> {
    pub fn open_create(&mut self) {
        self.open = true;
        self.editing = None;
    }

    pub fn open_edit(&mut self, item: T) {
        self.open = true;
        self.editing = Some(item);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.open && self.editing.is_some()
    }
}
