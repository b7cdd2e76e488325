//! Activation: navigation intents, link targets, engine key routing.

use super::common::{small_catalog, BUILTIN};
use docsearch::{
    Direction, LinkTarget, NavigationAction, SearchEngine, SearchEvent, SearchSession,
};

#[test]
fn test_activate_anchor_scrolls() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "hmac");
    session.move_selection(Direction::Next);

    let action = session.activate_selection();
    assert_eq!(
        action,
        Some(NavigationAction::ScrollTo {
            target_url: "#security".to_string()
        })
    );
    assert!(!session.is_open());
    assert_eq!(session.query(), "");
}

#[test]
fn test_activate_external_opens() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "android");
    session.move_selection(Direction::Next);

    let action = session.activate_selection().expect("selection");
    assert!(!action.is_scroll());
    assert!(action.target_url().starts_with("https://"));
    assert!(action.target_url().ends_with("KINGKIOSK_USER_GUIDE.html"));
}

#[test]
fn test_second_activation_is_noop() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "hmac");
    session.move_selection(Direction::Next);
    assert!(session.activate_selection().is_some());
    assert_eq!(session.activate_selection(), None);
}

#[test]
fn test_activate_without_selection_keeps_panel() {
    let mut session = SearchSession::new();
    session.on_query_changed(&BUILTIN, "hmac");
    assert_eq!(session.activate_selection(), None);
    assert!(session.is_open());
    assert_eq!(session.query(), "hmac");
}

#[test]
fn test_link_targets() {
    let catalog = small_catalog();
    let targets: Vec<LinkTarget> = catalog.entries().iter().map(|e| e.link_target()).collect();
    assert_eq!(
        targets,
        vec![
            LinkTarget::NewContext,
            LinkTarget::NewContext,
            LinkTarget::NewContext,
            LinkTarget::SameContext
        ]
    );
}

#[test]
fn test_engine_keyboard_flow() {
    let mut engine = SearchEngine::new(small_catalog());
    engine.handle(SearchEvent::QueryChanged("volume".into()));

    assert_eq!(engine.handle_key("ArrowDown"), (true, None));
    assert_eq!(engine.handle_key("ArrowDown"), (true, None));
    assert_eq!(engine.handle_key("ArrowUp"), (true, None));

    let (handled, action) = engine.handle_key("Enter");
    assert!(handled);
    assert_eq!(
        action.map(|a| a.target_url().to_string()),
        Some("https://docs.example.com/set_volume".to_string())
    );
    assert!(!engine.session().is_open());
}

#[test]
fn test_engine_ignores_unrelated_keys() {
    let mut engine = SearchEngine::new(small_catalog());
    engine.handle(SearchEvent::QueryChanged("volume".into()));
    assert_eq!(engine.handle_key("a"), (false, None));
    assert_eq!(engine.handle_key("Tab"), (false, None));
    assert!(engine.session().is_open());
}

#[test]
fn test_engine_view_groups_by_section() {
    let mut engine = SearchEngine::new(BUILTIN.clone());
    engine.handle(SearchEvent::QueryChanged("webrtc".into()));
    let view = engine.view();

    let sections: Vec<&str> = view.groups.iter().map(|g| g.section).collect();
    assert_eq!(sections, vec!["Feature Server", "MQTT Reference", "Security"]);
    assert_eq!(view.result_count, 5);
}
