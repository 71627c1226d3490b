//! End-to-end CLI workflow tests against temporary project files.

use std::path::Path;

use builder_cli::{execute, run, CliArgs, CliConfig};
use builder_core::{ElementId, ElementKind, FeatureConfig, Point, ProjectDocument, Size};
use clap::Parser;
use tempfile::TempDir;

fn config(args: &[&str]) -> CliConfig {
    let argv = std::iter::once("page-builder").chain(args.iter().copied());
    CliConfig::from(CliArgs::try_parse_from(argv).expect("valid arguments"))
}

fn load(path: &Path) -> (FeatureConfig, builder_core::Document) {
    let json = std::fs::read_to_string(path).expect("read project");
    ProjectDocument::load(&json).expect("valid project")
}

#[test]
fn test_templates_listing() {
    let listing = execute(&config(&["templates"])).expect("templates");
    let ids: Vec<_> = listing
        .lines()
        .map(|line| line.split('\t').next().unwrap_or_default())
        .collect();
    assert_eq!(ids, ["landing", "blog", "portfolio", "blank"]);
}

#[test]
fn test_edit_session_round_trips_through_files() {
    let dir = TempDir::new().expect("tempdir");
    let page = dir.path().join("page.json");
    let page_str = page.to_str().expect("utf-8 path");

    run(&config(&["new", "--template", "landing", "--router", "-o", page_str])).expect("new");
    let (features, document) = load(&page);
    assert_eq!(features, FeatureConfig::new(true, false));
    assert!(document.is_empty());

    run(&config(&[
        "place", "-i", page_str, "-o", page_str, "--kind", "button", "--from", "90,50", "--to",
        "10,20",
    ]))
    .expect("place");
    run(&config(&[
        "drop", "-i", page_str, "-o", page_str, "--kind", "image", "--at", "200,0",
    ]))
    .expect("drop");

    let (features, document) = load(&page);
    assert_eq!(features, FeatureConfig::new(true, false));
    assert_eq!(document.len(), 2);
    let button = &document.elements()[0];
    assert_eq!(button.kind, ElementKind::Button);
    assert_eq!(button.position, Point::new(10.0, 20.0));
    assert_eq!(button.size, Size::new(80.0, 30.0));
    assert_eq!(button.content.as_deref(), Some("Click me"));
    let image = &document.elements()[1];
    assert_eq!(image.size, Size::new(160.0, 120.0));

    let id = button.id.as_str().to_string();
    run(&config(&["move", "-i", page_str, "-o", page_str, "--id", &id, "--by", "-5,5"]))
        .expect("move");
    run(&config(&[
        "patch", "-i", page_str, "-o", page_str, "--id", &id, "--patch", r#"{"content":"Buy"}"#,
    ]))
    .expect("patch");

    let (_, document) = load(&page);
    let button = document.get(&ElementId::new(id.as_str())).expect("button kept");
    assert_eq!(button.position, Point::new(5.0, 25.0));
    assert_eq!(button.content.as_deref(), Some("Buy"));

    let html_path = dir.path().join("my-page.html");
    run(&config(&[
        "export", "-i", page_str, "-o", html_path.to_str().expect("utf-8 path"), "--title",
        "Shop",
    ]))
    .expect("export");
    let html = std::fs::read_to_string(&html_path).expect("read html");
    assert!(html.contains("<title>Shop</title>"));
    assert!(html.contains("left:5px;top:25px;width:80px;height:30px;"));
    assert!(html.contains(">Buy</button>"));
}

#[test]
fn test_export_uses_project_features() {
    let dir = TempDir::new().expect("tempdir");
    let page = dir.path().join("page.json");
    let page_str = page.to_str().expect("utf-8 path");
    run(&config(&["new", "--rtk-query", "-o", page_str])).expect("new");

    let tsx = execute(&config(&[
        "export", "-i", page_str, "--format", "tsx", "--component-name", "Dashboard",
    ]))
    .expect("export");
    assert!(tsx.contains("export default function Dashboard() {"));
    assert!(tsx.contains("inject endpoints via createApi()"));
    assert!(!tsx.contains("BrowserRouter"));
}

#[test]
fn test_small_drag_leaves_document_unchanged() {
    let json = execute(&config(&[
        "place", "--kind", "text", "--from", "50,50", "--to", "40,30",
    ]))
    .expect("place");
    let (_, document) = ProjectDocument::load(&json).expect("valid project");
    assert!(document.is_empty());
}

#[test]
fn test_errors_are_reported() {
    assert!(execute(&config(&["new", "--template", "shop"])).is_err());
    assert!(execute(&config(&["patch", "--id", "x", "--patch", r#"{"id":"y"}"#])).is_err());
    assert!(execute(&config(&["export", "--component-name", "lower"])).is_err());

    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("missing.json");
    assert!(execute(&config(&["export", "-i", missing.to_str().expect("utf-8 path")])).is_err());
}
