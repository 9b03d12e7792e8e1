use super::*;
use crate::foundation::core::{Affine, Vec2};
use crate::region::model::{
    CenterPoint, ItemRegion, ManualRegion, RingSpec, SmoothingMode, TransformRegion,
};
use crate::region::transform::NoTransforms;

const HD: FrameSize = FrameSize {
    width: 1920,
    height: 1080,
};

fn manual(x: u32, y: u32, w: u32, h: u32, priority: f32) -> RegionDescriptor {
    RegionDescriptor::Manual(ManualRegion {
        x,
        y,
        width: w,
        height: h,
        priority,
        smoothing: SmoothingSpec::default(),
    })
}

fn plan(regions: &[RegionEntry]) -> RegionPlan {
    RegionPlanner::default().plan("scene", regions, HD, &NoTransforms)
}

#[test]
fn manual_region_becomes_one_rect() {
    let out = plan(&[RegionEntry::enabled(manual(10, 20, 30, 40, 0.5))]);
    assert_eq!(out.rects(), &[WeightedRect::new(20, 60, 10, 40, 0.5)]);
}

#[test]
fn disabled_and_empty_regions_contribute_nothing() {
    let out = plan(&[
        RegionEntry::disabled(manual(10, 20, 30, 40, 0.5)),
        RegionEntry::enabled(manual(0, 0, 0, 0, 0.5)),
        RegionEntry::enabled(manual(10, 10, 0, 50, 0.5)),
    ]);
    assert!(out.is_empty());
}

#[test]
fn manual_priority_is_clamped() {
    let out = plan(&[RegionEntry::enabled(manual(0, 0, 16, 16, 3.0))]);
    assert_eq!(out.rects()[0].priority, 1.0);
}

#[test]
fn manual_smoothing_requires_a_priority_change() {
    let mut m = ManualRegion {
        x: 100,
        y: 100,
        width: 200,
        height: 200,
        priority: 0.5,
        smoothing: SmoothingSpec {
            mode: SmoothingMode::Outside,
            steps: 4,
            edge_priority: 0.5,
        },
    };
    assert_eq!(
        plan(&[RegionEntry::enabled(RegionDescriptor::Manual(m))]).len(),
        1
    );
    m.smoothing.edge_priority = 0.0;
    assert_eq!(
        plan(&[RegionEntry::enabled(RegionDescriptor::Manual(m))]).len(),
        4
    );
}

#[test]
fn transform_region_uses_quad_bounds() {
    let t = TransformRegion {
        quad_transform: Affine::translate(Vec2::new(64.0, 32.0)) * Affine::scale(128.0),
        priority: -0.5,
        smoothing: SmoothingSpec::default(),
    };
    let out = plan(&[RegionEntry::enabled(RegionDescriptor::Transform(t))]);
    assert_eq!(out.rects(), &[WeightedRect::new(32, 160, 64, 192, -0.5)]);
}

#[test]
fn offscreen_transform_is_discarded() {
    let t = TransformRegion {
        quad_transform: Affine::translate(Vec2::new(-400.0, 0.0)) * Affine::scale(128.0),
        priority: 1.0,
        smoothing: SmoothingSpec::default(),
    };
    assert!(plan(&[RegionEntry::enabled(RegionDescriptor::Transform(t))]).is_empty());
}

#[test]
fn item_regions_resolve_through_provider() {
    let provider = |scene: &str, id: i64| {
        (scene == "scene" && id == 3).then(|| Affine::translate(Vec2::new(16.0, 16.0)) * Affine::scale(32.0))
    };
    let item = |item_id| {
        RegionEntry::enabled(RegionDescriptor::Item(ItemRegion {
            item_id,
            item_name: String::new(),
            priority: 0.7,
            smoothing: SmoothingSpec::default(),
        }))
    };
    let out = RegionPlanner::default().plan("scene", &[item(3), item(4)], HD, &provider);
    assert_eq!(out.rects(), &[WeightedRect::new(16, 48, 16, 48, 0.7)]);

    let out = RegionPlanner::default().plan("other", &[item(3)], HD, &provider);
    assert!(out.is_empty());
}

#[test]
fn center_focus_emits_inner_before_outer() {
    let c = CenterFocusRegion {
        inner: RingSpec {
            radius: 64,
            steps: 2,
            aspect_correct: false,
            circular: false,
        },
        outer: RingSpec {
            radius: 100,
            steps: 2,
            aspect_correct: false,
            circular: false,
        },
        center: Some(CenterPoint { x: 960, y: 540 }),
        priority: 0.6,
        outer_priority: -0.5,
    };
    let out = plan(&[RegionEntry::enabled(RegionDescriptor::CenterFocus(c))]);
    assert_eq!(out.len(), 5);
    assert!(out.rects()[..2].iter().all(|r| r.priority > 0.0));
    assert_eq!(out.rects()[2].priority, 0.0);
    assert_eq!(out.rects()[4], WeightedRect::new(0, 1080, 0, 1920, -0.5));
}

#[test]
fn input_order_is_preserved() {
    let out = plan(&[
        RegionEntry::enabled(manual(0, 0, 32, 32, 0.1)),
        RegionEntry::enabled(manual(64, 64, 32, 32, 0.2)),
        RegionEntry::enabled(manual(128, 128, 32, 32, 0.3)),
    ]);
    let prio: Vec<f32> = out.iter().map(|r| r.priority).collect();
    assert_eq!(prio, vec![0.1, 0.2, 0.3]);
}

#[test]
fn planning_is_deterministic() {
    let regions = vec![
        RegionEntry::enabled(manual(10, 10, 300, 200, 0.9)),
        RegionEntry::enabled(RegionDescriptor::CenterFocus(CenterFocusRegion {
            inner: RingSpec {
                radius: 300,
                steps: 5,
                aspect_correct: true,
                circular: true,
            },
            outer: RingSpec {
                radius: 200,
                steps: 3,
                aspect_correct: true,
                circular: false,
            },
            center: None,
            priority: 0.8,
            outer_priority: -0.6,
        })),
    ];
    let a = plan(&regions);
    let b = plan(&regions);
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn recommended_limit_is_reported() {
    let rects = vec![WeightedRect::new(0, 16, 0, 16, 0.0); MAX_RECOMMENDED_REGIONS + 1];
    assert!(RegionPlan::from(rects).exceeds_recommended());
    assert!(!RegionPlan::default().exceeds_recommended());
}

#[test]
fn planner_block_size_is_at_least_one() {
    assert_eq!(RegionPlanner::new(0).min_block(), 1);
    assert_eq!(RegionPlanner::default().min_block(), DEFAULT_MIN_BLOCK);
}
