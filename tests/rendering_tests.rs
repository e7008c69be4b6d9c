//! TUI rendering tests
//!
//! Drives the app through key presses and watch events and checks what ends
//! up in a `TestBackend` buffer.

use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use secrets9s::error::DeleteFailure;
use secrets9s::models::ModelDescriptor;
use secrets9s::routing::InspectState;
use secrets9s::tui::state::View;
use secrets9s::tui::{App, AppSettings, Theme};
use secrets9s::{
    DashboardTab, ResourceDeleter, ResourceKind, WatchEvent, WatchTarget, WatchedResource,
};
use serde_json::json;

struct AcceptingDeleter;

#[async_trait]
impl ResourceDeleter for AcceptingDeleter {
    async fn delete(
        &self,
        _model: &ModelDescriptor,
        _resource: &WatchedResource,
    ) -> Result<(), DeleteFailure> {
        Ok(())
    }
}

fn settings(read_only: bool) -> AppSettings {
    AppSettings {
        context: "kind-dev".to_string(),
        namespace: Some("demo".to_string()),
        fallback_namespace: "demo".to_string(),
        read_only,
        no_icons: true,
    }
}

fn cert(name: &str) -> WatchedResource {
    serde_json::from_value(json!({
        "metadata": {"name": name, "namespace": "demo", "labels": {"app": "web"}},
        "spec": {"secretName": format!("{}-secret", name), "dnsNames": ["example.com"]},
        "status": {"conditions": [{"type": "Ready", "status": "True"}]}
    }))
    .unwrap()
}

fn load(app: &mut App, target: WatchTarget, items: Vec<WatchedResource>) {
    app.apply_watch_event(WatchEvent::Restarted(target.clone()));
    for item in items {
        app.apply_watch_event(WatchEvent::Applied(target.clone(), item));
    }
    app.apply_watch_event(WatchEvent::InitDone(target));
}

fn certificates_target() -> WatchTarget {
    WatchTarget::collection(ResourceKind::Certificate, Some("demo".to_string()))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_header_shows_context_namespace_and_tabs() {
    let mut app = App::new(settings(true), Theme::default());
    let screen = render(&mut app);
    assert!(screen.contains("kind-dev"));
    assert!(screen.contains("demo"));
    assert!(screen.contains("[read-only]"));
    for tab in DashboardTab::all() {
        assert!(screen.contains(tab.title()), "{}", tab);
    }
}

#[test]
fn test_loading_then_rows() {
    let mut app = App::new(settings(false), Theme::default());
    assert!(render(&mut app).contains("Loading certificates..."));

    load(&mut app, certificates_target(), vec![cert("web-tls")]);
    let screen = render(&mut app);
    assert!(screen.contains("SECRET"));
    assert!(screen.contains("web-tls-secret"));
    assert!(screen.contains("+ Ready"));
}

#[test]
fn test_empty_state_uses_tab_text() {
    let mut app = App::new(settings(false), Theme::default());
    load(&mut app, certificates_target(), vec![]);
    assert!(render(&mut app).contains("No certificates found"));
}

#[test]
fn test_watch_error_banner() {
    let mut app = App::new(settings(false), Theme::default());
    let targets = WatchTarget::for_tab(DashboardTab::Issuers, Some("demo"));
    load(&mut app, targets[0].clone(), vec![]);
    app.apply_watch_event(WatchEvent::Error(
        targets[1].clone(),
        "clusterissuers is forbidden".to_string(),
    ));

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.current_tab(), DashboardTab::Issuers);
    assert!(render(&mut app).contains("clusterissuers is forbidden"));
}

#[test]
fn test_row_menu_and_delete_confirmation() {
    let mut app = App::new(settings(false), Theme::default());
    load(&mut app, certificates_target(), vec![cert("web-tls")]);

    app.handle_key(key(KeyCode::Enter));
    let screen = render(&mut app);
    assert!(screen.contains("Actions"));
    assert!(screen.contains("Inspect"));
    assert!(screen.contains("Delete"));

    // Second entry is Delete
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    let screen = render(&mut app);
    assert!(screen.contains("Are you sure you want to delete the Certificate \"web-tls\"?"));
    assert!(screen.contains("This action cannot be undone."));

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.controller().delete_state().is_open());
    assert!(!render(&mut app).contains("Are you sure"));
}

#[test]
fn test_read_only_blocks_delete() {
    let mut app = App::new(settings(true), Theme::default());
    load(&mut app, certificates_target(), vec![cert("web-tls")]);

    app.handle_key(key(KeyCode::Char('d')));
    assert!(!app.controller().delete_state().is_open());
    assert!(render(&mut app).contains("Delete is disabled in read-only mode"));
}

#[tokio::test]
async fn test_confirmed_delete_runs_job() {
    let mut app = App::new(settings(false), Theme::default());
    app.set_deleter(Arc::new(AcceptingDeleter));
    load(&mut app, certificates_target(), vec![cert("web-tls")]);

    app.handle_key(key(KeyCode::Char('d')));
    app.handle_key(key(KeyCode::Char('y')));
    assert!(app.controller().delete_state().is_deleting());
    assert!(render(&mut app).contains("Deleting..."));

    let job = app.trigger_delete().unwrap();
    let result = job
        .deleter
        .delete(&job.request.model, &job.request.resource)
        .await;
    job.tx.send(result).unwrap();

    let result = app.try_get_delete_result().unwrap();
    app.complete_delete(result);
    assert!(!app.controller().delete_state().is_open());
    assert!(render(&mut app).contains("Deleted web-tls"));
}

#[test]
fn test_inspect_page_states() {
    let mut app = App::new(settings(false), Theme::default());
    load(&mut app, certificates_target(), vec![cert("web-tls")]);

    app.handle_key(key(KeyCode::Char('i')));
    assert_eq!(app.current_view(), View::Inspect);
    assert!(render(&mut app).contains("Loading Certificate demo/web-tls..."));

    let single = WatchTarget::single(ResourceKind::Certificate, Some("demo".to_string()), "web-tls");
    load(&mut app, single, vec![cert("web-tls")]);
    let screen = render(&mut app);
    assert!(screen.contains("Certificate details"));
    assert!(screen.contains("Metadata"));
    assert!(screen.contains("app=web"));

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.current_view(), View::ResourceList);
}

#[test]
fn test_reopened_inspect_page_ignores_events_from_closed_watch() {
    let mut app = App::new(settings(false), Theme::default());
    let path = "/inspect/certificates/demo/web-tls";
    let single = WatchTarget::single(ResourceKind::Certificate, Some("demo".to_string()), "web-tls");

    app.open_path(path);
    app.close_inspect();
    // Events still queued from the watch that was just stopped
    load(&mut app, single.clone(), vec![cert("web-tls")]);

    app.open_path(path);
    assert!(matches!(app.inspect_state(), Some(InspectState::Loading)));
    assert!(render(&mut app).contains("Loading Certificate demo/web-tls..."));

    load(&mut app, single, vec![cert("web-tls")]);
    assert!(matches!(app.inspect_state(), Some(InspectState::Found(_))));
}

#[test]
fn test_list_events_apply_while_inspecting() {
    let mut app = App::new(settings(false), Theme::default());
    app.open_path("/inspect/certificates/demo/web-tls");
    load(&mut app, certificates_target(), vec![cert("web-tls")]);
    app.close_inspect();
    assert_eq!(app.rows().len(), 1);
}

#[test]
fn test_inspect_not_found_and_invalid_path() {
    let mut app = App::new(settings(false), Theme::default());
    app.open_path("/inspect/certificates/demo/missing");
    let single = WatchTarget::single(ResourceKind::Certificate, Some("demo".to_string()), "missing");
    load(&mut app, single, vec![]);
    assert!(render(&mut app).contains("The Certificate \"missing\" was not found."));

    app.open_path("/inspect/pods/demo/web");
    assert!(render(&mut app).contains("The resource type \"pods\" is not supported."));
}
