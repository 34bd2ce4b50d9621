//! End-to-end landing session against a mock CareerBuzz service.

use std::sync::Arc;

use careerbuzz_core::analysis::DemoResultView;
use careerbuzz_core::api::HttpCareerApi;
use careerbuzz_core::preferences::{PreferenceStore, TomlPreferenceStore};
use careerbuzz_core::theme::{THEME_PREFERENCE_KEY, ThemePreference};
use careerbuzz_tui::SessionController;
use careerbuzz_tui::events::{ChatUiEvent, DemoUiEvent, DrawerUiEvent, ThemeUiEvent, UiEvent};
use careerbuzz_tui::features::chat::{CHAT_FAILURE_MESSAGE, ChatMessage};
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_toggle_analyze_and_failed_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(json!({ "skills": ["java"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enteredSkills": ["java"],
            "suggestedCareers": ["Backend Developer"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/send"))
        .and(body_json(json!({ "message": "pricing?" })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let prefs_path = dir.path().join("preferences.toml");
    let store = Arc::new(TomlPreferenceStore::new(&prefs_path));
    let mut session = SessionController::new(
        Arc::new(HttpCareerApi::new(server.uri())),
        Arc::clone(&store) as Arc<dyn PreferenceStore>,
    );
    assert_eq!(session.theme(), ThemePreference::Dark);

    session.dispatch(UiEvent::Theme(ThemeUiEvent::ToggleRequested));
    session.drain_inbox();
    assert_eq!(session.state.tui.theme, ThemePreference::Light);
    assert_eq!(
        store.get(THEME_PREFERENCE_KEY).unwrap().as_deref(),
        Some("light")
    );

    session.dispatch(UiEvent::Demo(DemoUiEvent::InputChanged("java".into())));
    session.dispatch(UiEvent::Demo(DemoUiEvent::Submit));
    session.run_until_idle().await;
    assert_eq!(
        session.state.tui.demo.result_view(),
        Some(DemoResultView::Analysis {
            entered_skills: vec!["java".into()],
            suggested_careers: vec!["Backend Developer".into()],
        })
    );

    session.dispatch(UiEvent::Drawer(DrawerUiEvent::Open));
    session.dispatch(UiEvent::Chat(ChatUiEvent::InputChanged("pricing?".into())));
    session.dispatch(UiEvent::Chat(ChatUiEvent::Send));
    session.run_until_idle().await;

    let messages = session.state.tui.chat.messages();
    assert_eq!(messages[messages.len() - 2], ChatMessage::user("pricing?"));
    assert_eq!(
        messages.last(),
        Some(&ChatMessage::bot(CHAT_FAILURE_MESSAGE))
    );
}

#[tokio::test]
async fn test_stored_theme_survives_new_session() {
    let dir = tempdir().unwrap();
    let prefs_path = dir.path().join("preferences.toml");
    std::fs::write(&prefs_path, "cb_theme = \"light\"\n").unwrap();

    let session = SessionController::new(
        Arc::new(HttpCareerApi::new("http://127.0.0.1:9")),
        Arc::new(TomlPreferenceStore::new(&prefs_path)),
    );

    assert_eq!(session.theme(), ThemePreference::Light);
    assert_eq!(session.state.tui.theme, ThemePreference::Light);
}
