use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn server_render_drops_future_without_running_it() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    spawn_browser(async move {
        flag.set(true);
    });
    assert!(!ran.get());
    assert_eq!(Rc::strong_count(&ran), 1);
}
