use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use horologist::config::Config;
use horologist::ui::{handle_events, App};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_app_seeds_default_cities() {
    let app = App::new(&Config::default());
    // Six default cities, six distinct timezone identifiers
    assert_eq!(app.engine.len(), 6);
    assert!(app.engine.contains("Asia/Kathmandu"));
    assert!(app.engine.contains("Asia/Tokyo"));
    assert!(!app.should_quit);
}

#[test]
fn test_app_with_empty_default_cities() {
    let mut config = Config::default();
    config.ui.default_cities.clear();
    let app = App::new(&config);
    assert!(app.engine.is_empty());
    assert!(app.rows().is_empty());
    assert!(app.selected_identifier().is_none());
}

#[test]
fn test_rows_use_catalog_names() {
    let app = App::new(&Config::default());
    let rows = app.rows();
    assert_eq!(rows.len(), 6);
    // Alphabetical by identifier: Asia/Beirut comes first
    assert_eq!(rows[0].0, "Asia/Beirut");
    assert_eq!(rows[0].1, "Beirut");
    assert!(!rows[0].2.is_empty());
}

#[test]
fn test_navigation_wraps_around() {
    let mut app = App::new(&Config::default());
    assert_eq!(app.selected_index, 0);

    for _ in 0..6 {
        app.next_city();
    }
    assert_eq!(app.selected_index, 0);

    app.previous_city();
    assert_eq!(app.selected_index, 5);
}

#[test]
fn test_navigation_on_empty_list_is_noop() {
    let mut config = Config::default();
    config.ui.default_cities.clear();
    let mut app = App::new(&config);
    app.next_city();
    app.previous_city();
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_picker_search_and_toggle() {
    let mut app = App::new(&Config::default());
    app.open_picker();
    assert!(app.show_picker);

    for c in "berlin".chars() {
        app.add_char_to_picker_query(c);
    }
    let matches = app.picker_matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Berlin");

    // Toggling an unselected city adds it
    app.toggle_picker_selection();
    assert!(app.engine.contains("Europe/Berlin"));
    assert_eq!(app.engine.len(), 7);

    // Toggling again removes it
    app.toggle_picker_selection();
    assert!(!app.engine.contains("Europe/Berlin"));
    assert_eq!(app.engine.len(), 6);

    app.close_picker();
    assert!(!app.show_picker);
    assert!(app.picker_query.is_empty());
}

#[test]
fn test_picker_aliases_share_one_entry() {
    let mut config = Config::default();
    config.ui.default_cities.clear();
    let mut app = App::new(&config);
    app.open_picker();

    // "Boston" and "New York" both map to America/New_York
    for c in "boston".chars() {
        app.add_char_to_picker_query(c);
    }
    app.toggle_picker_selection();
    assert_eq!(app.engine.len(), 1);

    app.picker_query.clear();
    for c in "new york".chars() {
        app.add_char_to_picker_query(c);
    }
    // The alias toggles the same entry off instead of adding a second one
    app.toggle_picker_selection();
    assert!(app.engine.is_empty());
}

#[test]
fn test_edit_time_flow() {
    let mut app = App::new(&Config::default());
    app.start_edit_time();
    assert!(app.editing_time);
    assert!(app.edit_identifier.is_some());
    // Prefilled with the city's current wall-clock reading
    assert!(!app.edit_buffer.is_empty());

    app.edit_buffer = "2024-01-01 10:00".to_string();
    app.commit_edit_time();
    assert!(!app.editing_time);
    assert!(app.error_message.is_none());
}

#[test]
fn test_edit_time_rejects_invalid_input() {
    let mut app = App::new(&Config::default());
    app.start_edit_time();

    app.edit_buffer = "not a time".to_string();
    app.commit_edit_time();
    assert!(app.error_message.is_some());
    // The editor stays open so the input can be fixed
    assert!(app.editing_time);

    app.cancel_edit_time();
    assert!(!app.editing_time);
    assert!(app.edit_buffer.is_empty());
}

#[test]
fn test_delete_confirmation_flow() {
    let mut app = App::new(&Config::default());
    let before = app.engine.len();

    app.start_delete_city();
    assert!(app.delete_confirmation.is_some());

    app.cancel_delete_city();
    assert!(app.delete_confirmation.is_none());
    assert_eq!(app.engine.len(), before);

    app.start_delete_city();
    app.delete_city();
    assert_eq!(app.engine.len(), before - 1);
    assert!(app.delete_confirmation.is_none());
}

#[test]
fn test_key_events_in_normal_mode() {
    let mut app = App::new(&Config::default());

    assert!(handle_events(key(KeyCode::Char('j')), &mut app).unwrap());
    assert_eq!(app.selected_index, 1);

    assert!(handle_events(key(KeyCode::Char('f')), &mut app).unwrap());
    assert!(app.engine.use_24_hour());

    assert!(handle_events(key(KeyCode::Char('a')), &mut app).unwrap());
    assert!(app.show_picker);

    assert!(handle_events(key(KeyCode::Esc), &mut app).unwrap());
    assert!(!app.show_picker);

    assert!(handle_events(key(KeyCode::Char('q')), &mut app).unwrap());
    assert!(app.should_quit);
}

#[test]
fn test_delete_keys_require_confirmation() {
    let mut app = App::new(&Config::default());
    let before = app.engine.len();

    handle_events(key(KeyCode::Char('d')), &mut app).unwrap();
    assert!(app.delete_confirmation.is_some());
    assert_eq!(app.engine.len(), before);

    handle_events(key(KeyCode::Char('n')), &mut app).unwrap();
    assert!(app.delete_confirmation.is_none());
    assert_eq!(app.engine.len(), before);

    handle_events(key(KeyCode::Char('d')), &mut app).unwrap();
    handle_events(key(KeyCode::Char('y')), &mut app).unwrap();
    assert_eq!(app.engine.len(), before - 1);
}
