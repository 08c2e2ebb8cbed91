use super::*;

#[test]
fn durations_by_kind() {
    assert_eq!(NoticeKind::Success.duration(), Duration::from_secs(2));
    assert_eq!(NoticeKind::Error.duration(), Duration::from_secs(3));
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "Event created successfully");
    let b = state.push(NoticeKind::Error, "Failed to create event");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    let b = state.push(NoticeKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
