//! Exporter integration tests.

use builder_core::{
    Document, Element, ElementId, ElementKind, FeatureConfig, Point, ProjectDocument, Rect, Size,
    StyleMap,
};
use builder_export::{render, ExportFormat, PageExporter};
use proptest::prelude::*;

fn element(id: &str, kind: ElementKind, x: f64, y: f64, w: f64, h: f64) -> Element {
    Element::new(
        ElementId::from(id),
        kind,
        Rect::new(Point::new(x, y), Size::new(w, h)),
    )
}

fn single_button() -> Document {
    Document::from_elements(vec![element(
        "b1",
        ElementKind::Button,
        10.0,
        20.0,
        80.0,
        30.0,
    )
    .with_content("Click me")])
    .expect("valid document")
}

#[test]
fn test_button_markup_without_features() {
    let html = render(
        &single_button(),
        FeatureConfig::new(false, false),
        ExportFormat::Markup,
    )
    .expect("markup");

    assert!(html.contains("left:10px;top:20px;width:80px;height:30px;"));
    assert!(html.contains("Click me"));
    assert!(!html.contains("SETUP INSTRUCTIONS"));
}

#[test]
fn test_router_only_source_skips_data_fetching() {
    let tsx = render(
        &single_button(),
        FeatureConfig::new(true, false),
        ExportFormat::TypedSource,
    )
    .expect("typed source");

    assert!(tsx.contains("SETUP INSTRUCTIONS"));
    assert!(tsx.contains("<BrowserRouter>"));
    assert!(tsx.contains("react-router-dom"));
    assert!(tsx.ends_with("*/"));
    assert!(tsx.contains(
        "<button style={{ position: 'absolute', left: 10, top: 20, width: 80, height: 30 }} \
         className=\"bg-blue-500 text-white rounded\">Click me</button>"
    ));
    for forbidden in ["RTK", "Redux", "useGetSomethingQuery", "createApi"] {
        assert!(!tsx.contains(forbidden), "mentions {forbidden}");
    }
}

#[test]
fn test_source_without_features_has_no_annotations() {
    let tsx = render(
        &single_button(),
        FeatureConfig::default(),
        ExportFormat::TypedSource,
    )
    .expect("typed source");

    assert!(!tsx.contains("/*"));
    assert!(!tsx.contains("//"));
    assert!(tsx.starts_with("import React from 'react';\n\nexport default function MyPage() {\n"));
}

#[test]
fn test_elements_are_written_in_document_order() {
    let doc = Document::from_elements(vec![
        element("c1", ElementKind::Container, 0.0, 0.0, 300.0, 200.0),
        element("t1", ElementKind::Text, 20.0, 20.0, 100.0, 30.0).with_content("Title"),
        element("i1", ElementKind::Image, 20.0, 60.0, 160.0, 120.0),
    ])
    .expect("valid document");

    let html = render(&doc, FeatureConfig::default(), ExportFormat::Markup).expect("markup");
    let container = html.find("border:2px dashed").expect("container");
    let title = html.find(">Title<").expect("title");
    let image = html.find("Image Placeholder").expect("image");
    assert!(container < title && title < image);
}

#[test]
fn test_json_layout() {
    let mut style = StyleMap::new();
    style.insert("color".to_string(), serde_json::json!("red"));
    let doc = Document::from_elements(vec![
        element("b1", ElementKind::Button, 10.0, 20.0, 80.0, 30.0).with_content("Click me"),
        element("i1", ElementKind::Image, 0.5, 0.0, 160.0, 120.0).with_style(style),
    ])
    .expect("valid document");

    let json = render(&doc, FeatureConfig::new(true, false), ExportFormat::Json).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(
        value,
        serde_json::json!({
            "config": {"useRouter": true, "useRTKQuery": false},
            "components": [
                {"id": "b1", "type": "button", "x": 10, "y": 20, "width": 80, "height": 30,
                 "content": "Click me"},
                {"id": "i1", "type": "image", "x": 0.5, "y": 0, "width": 160, "height": 120,
                 "content": "", "styles": {"color": "red"}}
            ]
        })
    );
    assert!(!json.contains("null"));
}

fn arb_kind() -> impl Strategy<Value = ElementKind> {
    prop::sample::select(ElementKind::ALL.to_vec())
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(
        (
            arb_kind(),
            -500i32..2000,
            -500i32..2000,
            0u32..800,
            0u32..800,
            prop::option::of("[ -~]{0,16}"),
        ),
        0..8,
    )
    .prop_map(|specs| {
        let elements = specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, x, y, w, h, content))| {
                let mut element = element(
                    &format!("{kind}-{i}"),
                    kind,
                    f64::from(x) / 2.0,
                    f64::from(y),
                    f64::from(w),
                    f64::from(h) / 4.0,
                );
                element.content = content;
                element
            })
            .collect();
        Document::from_elements(elements).expect("indexed ids are unique")
    })
}

fn arb_config() -> impl Strategy<Value = FeatureConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(router, rtk)| FeatureConfig::new(router, rtk))
}

proptest! {
    #[test]
    fn prop_export_is_deterministic(
        doc in arb_document(),
        config in arb_config(),
        format in prop::sample::select(ExportFormat::ALL.to_vec()),
    ) {
        let exporter = PageExporter::with_defaults();
        let first = exporter.render(&doc, config, format).expect("render");
        let second = exporter.render(&doc.clone(), config, format).expect("render");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_json_export_round_trips(doc in arb_document(), config in arb_config()) {
        let json = render(&doc, config, ExportFormat::Json).expect("json");
        let (loaded_config, loaded) = ProjectDocument::load(&json).expect("load");
        prop_assert_eq!(loaded_config, config);
        prop_assert_eq!(loaded, doc);
    }

    #[test]
    fn prop_markup_ignores_feature_flags(doc in arb_document(), config in arb_config()) {
        let plain = render(&doc, FeatureConfig::default(), ExportFormat::Markup).expect("markup");
        let flagged = render(&doc, config, ExportFormat::Markup).expect("markup");
        prop_assert_eq!(plain, flagged);
    }
}
