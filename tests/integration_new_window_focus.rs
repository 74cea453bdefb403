use chat_wm::config::WmConfig;
use chat_wm::host::{HostEvent, Session, SessionId, WindowCommands};
use chat_wm::layout::Viewport;
use chat_wm::window::WindowManager;

fn session(id: &str) -> Session<SessionId> {
    Session::new(SessionId::from(id), format!("customer {id}"), "chat")
}

#[test]
fn new_session_window_is_focused() {
    let mut wm = WindowManager::new(WmConfig::default(), Viewport::new(1200, 900));
    assert_eq!(wm.focused(), None);

    wm.sync_sessions(vec![session("c-1")]);
    assert_eq!(wm.focused(), Some(&SessionId::from("c-1")));

    wm.sync_sessions(vec![session("c-1"), session("c-2")]);
    assert_eq!(wm.focused(), Some(&SessionId::from("c-2")));
    let z1 = wm.window(&SessionId::from("c-1")).unwrap().z_index;
    let z2 = wm.window(&SessionId::from("c-2")).unwrap().z_index;
    assert!(z2 > z1);

    // provisioning never talks back to the host
    assert!(wm.take_host_events().is_empty());
}

#[test]
fn restore_round_trips_through_the_event_queue() {
    let mut wm = WindowManager::new(WmConfig::default(), Viewport::new(1200, 900));
    wm.sync_sessions(vec![session("c-1"), session("c-2")]);
    let c1 = SessionId::from("c-1");
    let before = *wm.window(&c1).unwrap();

    wm.minimize_window(&c1);
    wm.hide_all_windows();
    assert!(wm.floating_sessions().is_empty());
    assert!(wm.minimized_sessions().is_empty());

    wm.restore_window(&c1);
    let after = *wm.window(&c1).unwrap();
    assert!(after.visible);
    assert!(!after.minimized);
    assert_eq!(after.position, before.position);
    assert_eq!(after.size, before.size);
    assert_eq!(wm.take_host_events(), vec![HostEvent::Focus(c1)]);
    assert!(wm.take_host_events().is_empty());
}

#[test]
fn ended_sessions_are_collected_on_the_next_sync() {
    let mut wm = WindowManager::new(WmConfig::default(), Viewport::new(1200, 900));
    wm.sync_sessions(vec![session("c-1"), session("c-2")]);
    let c2 = SessionId::from("c-2");

    assert!(wm.end_session(&c2));
    let events = wm.take_host_events();
    assert_eq!(events, vec![HostEvent::RequestEndSession(c2.clone())]);
    // the window stays until the host drops the session
    assert!(wm.window(&c2).is_some());

    wm.sync_sessions(vec![session("c-1")]);
    assert!(wm.window(&c2).is_none());
    assert_eq!(wm.store().len(), 1);
    assert_eq!(wm.focused(), None);
}
