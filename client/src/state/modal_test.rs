use super::*;

#[test]
fn starts_closed() {
    let m: ModalState<String> = ModalState::default();
    assert!(!m.open);
    assert!(!m.is_editing());
}

#[test]
fn create_clears_previous_edit_target() {
    let mut m = ModalState::default();
    m.open_edit("e1".to_owned());
    assert!(m.is_editing());
    m.open_create();
    assert!(m.open);
    assert_eq!(m.editing, None);
}

#[test]
fn close_resets_everything() {
    let mut m = ModalState::default();
    m.open_edit(7);
    m.close();
    assert_eq!(m, ModalState::default());
}
