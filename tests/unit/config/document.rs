use super::*;
use crate::region::model::RegionDescriptor;

const DOC: &str = r#"{
    "enabled": true,
    "scenes": {
        "main": [
            {"type": "item", "item_id": 1, "priority": 0.5},
            {"type": "manual", "x": 0, "y": 0, "width": 32, "height": 32, "priority": -0.5}
        ]
    },
    "items": {
        "main": {
            "1": {"placement": {"matrix": [64.0, 0.0, 0.0, 64.0, 128.0, 128.0]}}
        }
    }
}"#;

#[test]
fn defaults_fill_missing_fields() {
    let doc = RegionDocument::from_json_str("{}").unwrap();
    assert_eq!(doc, RegionDocument::default());
    assert_eq!(doc.opacity, DEFAULT_OPACITY);
    assert!(doc.regions("main").is_empty());
}

#[test]
fn plan_scene_uses_document_items() {
    let doc = RegionDocument::from_json_str(DOC).unwrap();
    doc.validate().unwrap();
    assert!(doc.enabled);
    assert!(matches!(doc.regions("main")[0].region, RegionDescriptor::Item(_)));

    let frame = FrameSize::new(1280, 720).unwrap();
    let plan = doc.plan_scene(&RegionPlanner::default(), "main", frame);
    let rects = plan.rects();
    assert_eq!(rects.len(), 2);
    assert_eq!((rects[0].left, rects[0].top, rects[0].right, rects[0].bottom), (128, 128, 192, 192));
    assert_eq!(rects[1].priority, -0.5);
}

#[test]
fn validate_reports_scene_and_index() {
    let mut doc = RegionDocument::from_json_str(DOC).unwrap();
    if let Some(entries) = doc.scenes.get_mut("main") {
        if let RegionDescriptor::Manual(m) = &mut entries[1].region {
            m.priority = -4.0;
        }
    }
    let err = doc.validate().unwrap_err().to_string();
    assert!(err.contains("scene 'main' region 1"), "{err}");
}

#[test]
fn validate_rejects_opacity_over_100() {
    let doc = RegionDocument {
        opacity: 150,
        ..RegionDocument::default()
    };
    assert!(doc.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RegionDocument::from_json_str("{\"scenes\": 3}").unwrap_err();
    assert!(matches!(err, RoiError::Serde(_)));
}

#[test]
fn documents_roundtrip_through_json() {
    let doc = RegionDocument::from_json_str(DOC).unwrap();
    let text = doc.to_json_pretty().unwrap();
    assert_eq!(RegionDocument::from_json_str(&text).unwrap(), doc);
}

#[test]
fn missing_file_is_reported() {
    let err = RegionDocument::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open region document"));
}
