//! End-to-end export flow over the real adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pageport_adapters::{ChannelApp, FixedDialog, InMemoryProjectStore, LocalHost, TemplateEngine};
use pageport_core::{
    application::ExportService,
    domain::{AppId, ExportHtmlProject, ExportLocation, HostType, Message, Project, ProjectId},
};
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

struct Fixture {
    root: TempDir,
    templates: PathBuf,
    saves: PathBuf,
    host: Arc<LocalHost>,
    inbox: UnboundedReceiver<Message>,
    service: ExportService,
}

fn fixture(host_type: HostType, dialog: Option<PathBuf>) -> Fixture {
    let root = TempDir::new().unwrap();
    let templates = root.path().join("templates");
    let saves = root.path().join("saves");
    std::fs::create_dir_all(&templates).unwrap();

    let mut host = LocalHost::new(host_type, &saves);
    if let Some(path) = dialog {
        host = host.with_dialog(Arc::new(FixedDialog(path)));
    }
    let host = Arc::new(host);

    let (app, inbox) = ChannelApp::new(AppId::new("main").unwrap());
    host.register_app(app).unwrap();

    let store = InMemoryProjectStore::new();
    store
        .insert(Project::new(ProjectId::new("p-1").unwrap(), "Landing").unwrap())
        .unwrap();

    let service = ExportService::new(
        host.clone(),
        Arc::new(store),
        Arc::new(TemplateEngine::new()),
        Some(ExportLocation::new(&templates)),
    );

    Fixture {
        root,
        templates,
        saves,
        host,
        inbox,
        service,
    }
}

fn request() -> ExportHtmlProject {
    ExportHtmlProject::new(AppId::new("main").unwrap(), ProjectId::new("p-1").unwrap())
}

fn write_template(dir: &Path, body: &str) {
    std::fs::write(dir.join("index.html"), body).unwrap();
}

#[tokio::test]
async fn explicit_path_gets_rendered_page_and_default_copy() {
    let mut fx = fixture(HostType::Headless, None);
    write_template(&fx.templates, "<title>{{PROJECT_NAME}}</title>");
    let target = fx.root.path().join("out").join("site.html");

    fx.service.handle(request().with_path(&target)).await;

    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "<title>Landing</title>"
    );
    assert_eq!(
        std::fs::read_to_string(fx.saves.join("Landing.html")).unwrap(),
        "<title>Landing</title>"
    );
    assert_eq!(fx.host.written(), vec![fx.saves.join("Landing.html"), target]);
    assert!(fx.inbox.try_recv().is_err());
}

#[tokio::test]
async fn headless_without_path_writes_default_name_twice() {
    let fx = fixture(HostType::Headless, None);
    write_template(&fx.templates, "ok");

    fx.service.handle(request()).await;

    let default = fx.saves.join("Landing.html");
    assert_eq!(fx.host.written(), vec![default.clone(), default.clone()]);
    assert_eq!(std::fs::read_to_string(default).unwrap(), "ok");
}

#[tokio::test]
async fn desktop_dialog_answer_is_used() {
    let root = TempDir::new().unwrap();
    let picked = root.path().join("picked.html");
    let fx = fixture(HostType::Desktop, Some(picked.clone()));
    write_template(&fx.templates, "ok");

    fx.service.handle(request()).await;

    assert_eq!(std::fs::read_to_string(picked).unwrap(), "ok");
}

#[tokio::test]
async fn desktop_cancel_writes_nothing() {
    let mut fx = fixture(HostType::Desktop, None);
    write_template(&fx.templates, "ok");

    fx.service.handle(request()).await;

    assert!(fx.host.written().is_empty());
    assert!(fx.inbox.try_recv().is_err());
}

#[tokio::test]
async fn missing_template_sends_one_show_error() {
    let mut fx = fixture(HostType::Headless, None);
    let req = request();
    let transaction = req.transaction.clone();

    fx.service.handle(req).await;

    let Message::ShowError(error) = fx.inbox.try_recv().unwrap() else {
        panic!("expected ShowError");
    };
    assert_eq!(error.transaction, transaction);
    assert_eq!(error.payload.message, "HTML Export for Landing failed.");
    assert!(
        error
            .payload
            .detail
            .starts_with("It threw the following error: template missing: ")
    );
    assert!(fx.inbox.try_recv().is_err());
    assert!(fx.host.written().is_empty());
}

#[tokio::test]
async fn unknown_project_is_dropped_silently() {
    let mut fx = fixture(HostType::Headless, None);
    write_template(&fx.templates, "ok");

    fx.service
        .handle(ExportHtmlProject::new(
            AppId::new("main").unwrap(),
            ProjectId::new("missing").unwrap(),
        ))
        .await;

    assert!(fx.host.written().is_empty());
    assert!(fx.inbox.try_recv().is_err());
}

#[tokio::test]
async fn write_failure_is_reported() {
    let mut fx = fixture(HostType::Headless, None);
    write_template(&fx.templates, "ok");
    // the target is an existing directory
    let target = fx.templates.clone();

    fx.service.handle(request().with_path(&target)).await;

    let Message::ShowError(error) = fx.inbox.try_recv().unwrap() else {
        panic!("expected ShowError");
    };
    assert!(error.payload.detail.contains("Failed to write"));
    assert_eq!(fx.host.written(), vec![fx.saves.join("Landing.html")]);
}
