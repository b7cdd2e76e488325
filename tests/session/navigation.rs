//! Cursor movement and panel lifecycle.

use super::common::{uniform_catalog, BUILTIN};
use docsearch::{Direction, SearchSession, SessionState};

#[test]
fn test_query_opens_with_no_selection() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "camera");
    assert!(session.is_open());
    assert_eq!(session.active_index(), None);
    assert_eq!(session.results()[0].title, "Camera Widget");
}

#[test]
fn test_down_from_nothing_selects_first() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "camera");
    session.move_selection(Direction::Next);
    assert_eq!(session.active_index(), Some(0));
}

#[test]
fn test_down_clamps_at_last() {
    let catalog = uniform_catalog(3);
    let mut session = SearchSession::new();
    session.on_query_changed(&catalog, "common");
    for _ in 0..10 {
        session.move_selection(Direction::Next);
    }
    assert_eq!(session.active_index(), Some(2));
}

#[test]
fn test_up_clamps_at_no_selection() {
    let catalog = uniform_catalog(3);
    let mut session = SearchSession::new();
    session.on_query_changed(&catalog, "common");
    session.move_selection(Direction::Next);
    session.move_selection(Direction::Previous);
    assert_eq!(session.active_index(), None);
    session.move_selection(Direction::Previous);
    assert_eq!(session.active_index_signed(), -1);
}

#[test]
fn test_moves_on_empty_results_stay_unselected() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "qwertyuiop");
    assert!(session.is_open());
    session.move_selection(Direction::Next);
    assert_eq!(session.active_index(), None);
}

#[test]
fn test_moves_ignored_while_closed() {
    let mut session = SearchSession::new();
    session.move_selection(Direction::Next);
    assert_eq!(session.state(), &SessionState::Closed);
}

#[test]
fn test_new_query_resets_cursor() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "camera");
    session.move_selection(Direction::Next);
    session.move_selection(Direction::Next);
    session.on_query_changed(&BUILTIN, "camera w");
    assert_eq!(session.active_index(), None);
}

#[test]
fn test_clearing_query_closes() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "camera");
    session.on_query_changed(&BUILTIN, "  ");
    assert!(!session.is_open());
    assert!(session.results().is_empty());
}

#[test]
fn test_close_resets_everything() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "camera");
    session.move_selection(Direction::Next);
    session.close();
    assert_eq!(session, SearchSession::new());
}
