use super::*;

#[test]
fn entries_parse_from_tagged_json() {
    let json = r#"[
        {"type": "manual", "x": 10, "y": 20, "width": 64, "height": 32, "priority": 0.5},
        {"type": "center_focus", "enabled": false, "priority": 0.4,
         "inner": {"radius": 200, "steps": 4, "circular": true},
         "outer": {"radius": 100, "steps": 2}, "outer_priority": -0.5},
        {"type": "item", "item_id": 7, "priority": -0.2,
         "smoothing": {"mode": "edge", "steps": 3, "edge_priority": 0.0}},
        {"type": "transform", "quad_transform": [100.0, 0.0, 0.0, 50.0, 10.0, 20.0], "priority": 1.0}
    ]"#;
    let entries: Vec<RegionEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(entries.len(), 4);

    assert!(entries[0].enabled);
    let RegionDescriptor::Manual(m) = &entries[0].region else {
        panic!("expected manual region");
    };
    assert_eq!((m.x, m.y, m.width, m.height), (10, 20, 64, 32));
    assert_eq!(m.smoothing, SmoothingSpec::default());

    assert!(!entries[1].enabled);
    let RegionDescriptor::CenterFocus(c) = &entries[1].region else {
        panic!("expected center focus region");
    };
    assert!(c.inner.circular);
    assert!(c.center.is_none());
    assert_eq!(c.outer.steps, 2);

    let RegionDescriptor::Item(i) = &entries[2].region else {
        panic!("expected item region");
    };
    assert_eq!(i.item_id, 7);
    assert_eq!(i.smoothing.mode, SmoothingMode::Edge);

    let RegionDescriptor::Transform(t) = &entries[3].region else {
        panic!("expected transform region");
    };
    assert_eq!(t.quad_transform.as_coeffs(), [100.0, 0.0, 0.0, 50.0, 10.0, 20.0]);
}

#[test]
fn entry_serialization_keeps_tag_and_flag() {
    let entry = RegionEntry::disabled(RegionDescriptor::Manual(ManualRegion {
        x: 0,
        y: 0,
        width: 16,
        height: 16,
        priority: 0.1,
        smoothing: SmoothingSpec::default(),
    }));
    let v = serde_json::to_value(&entry).unwrap();
    assert_eq!(v["type"], "manual");
    assert_eq!(v["enabled"], false);
    let back: RegionEntry = serde_json::from_value(v).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn validate_rejects_out_of_range_priorities() {
    let mut m = ManualRegion {
        x: 0,
        y: 0,
        width: 16,
        height: 16,
        priority: 1.5,
        smoothing: SmoothingSpec::default(),
    };
    assert!(RegionDescriptor::Manual(m).validate().is_err());
    m.priority = 0.5;
    m.smoothing.edge_priority = f32::NAN;
    assert!(RegionDescriptor::Manual(m).validate().is_err());
    m.smoothing.edge_priority = -1.0;
    assert!(RegionDescriptor::Manual(m).validate().is_ok());
}

#[test]
fn validate_rejects_non_finite_transform() {
    let t = TransformRegion {
        quad_transform: Affine::new([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0]),
        priority: 0.0,
        smoothing: SmoothingSpec::default(),
    };
    assert!(RegionDescriptor::Transform(t).validate().is_err());
}

#[test]
fn smoothing_applies_only_when_it_changes_output() {
    let s = SmoothingSpec {
        mode: SmoothingMode::Outside,
        steps: 3,
        edge_priority: 0.0,
    };
    assert!(s.applies_to(0.8));
    assert!(!s.applies_to(0.0));
    assert!(!SmoothingSpec { steps: 1, ..s }.applies_to(0.8));
    assert!(
        !SmoothingSpec {
            mode: SmoothingMode::None,
            ..s
        }
        .applies_to(0.8)
    );
}
