#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

use super::*;

#[test]
fn test_log_lines_reach_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = open_log_file(dir.path()).unwrap();
    let subscriber =
        Registry::default().with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("budget create failed, keeping local state");
    });

    let written = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
    assert!(written.contains("budget create failed"));
}

#[test]
fn test_log_file_appends_across_opens() {
    let dir = tempfile::tempdir().unwrap();

    for message in ["first session", "second session"] {
        let file = open_log_file(dir.path()).unwrap();
        let subscriber =
            Registry::default().with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("{message}");
        });
    }

    let written = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
    assert!(written.contains("first session"));
    assert!(written.contains("second session"));
}
