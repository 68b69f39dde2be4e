//! Whitelisted persistence round-trips.

#![allow(clippy::expect_used)]

use fleetdesk_admin::store::{AdminIdentity, Store, persistence};
use fleetdesk_core::Theme;

#[test]
fn snapshot_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("fleetdesk-state.json");

    let mut store = Store::new();
    store.auth.sign_in(
        "session-token-abc".to_string(),
        AdminIdentity {
            name: "Fleet Admin".to_string(),
            email: None,
        },
    );
    store.ui.toggle_theme();
    store.ui.toggle_sidebar();
    // Domain state must NOT survive
    store.cars.search_term = "hilux".to_string();

    persistence::save(&store, &path).expect("save failed");

    let mut restarted = Store::new();
    persistence::restore(&mut restarted, &path).expect("restore failed");

    assert!(restarted.auth.is_signed_in());
    assert_eq!(restarted.auth.token.as_deref(), Some("session-token-abc"));
    assert_eq!(restarted.ui.theme, Theme::Dark);
    assert!(restarted.ui.sidebar_collapsed);
    assert!(restarted.cars.search_term.is_empty());
    assert!(restarted.cars.items.is_empty());
}

#[test]
fn foreign_schema_version_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("fleetdesk-state.json");
    std::fs::write(
        &path,
        r#"{"schema_version": 2, "auth": {"token": null, "user": null}, "ui": {"theme": "dark", "sidebar_collapsed": true}}"#,
    )
    .expect("write failed");

    let mut store = Store::new();
    let err = persistence::restore(&mut store, &path).expect_err("expected version refusal");
    assert!(matches!(
        err,
        persistence::PersistenceError::UnsupportedVersion { found: 2, .. }
    ));
    // The store is untouched on refusal
    assert_eq!(store.ui.theme, Theme::Light);
}
