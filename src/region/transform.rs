use std::collections::BTreeMap;

use crate::foundation::core::{Affine, ItemTransform};

/// Supplies the unit-quad transform of a movable item at planning time.
///
/// Returning `None` means the item is missing from the scene or currently hidden; the region
/// following it then contributes nothing.
pub trait TransformProvider {
    fn quad_transform(&self, scene: &str, item_id: i64) -> Option<Affine>;
}

/// Provider for callers without movable items.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTransforms;

impl TransformProvider for NoTransforms {
    fn quad_transform(&self, _scene: &str, _item_id: i64) -> Option<Affine> {
        None
    }
}

impl<F> TransformProvider for F
where
    F: Fn(&str, i64) -> Option<Affine>,
{
    fn quad_transform(&self, scene: &str, item_id: i64) -> Option<Affine> {
        self(scene, item_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How an item's placement is described.
pub enum ItemPlacement {
    /// Translate/rotate/size decomposition.
    Transform(ItemTransform),
    /// Raw unit-quad affine coefficients.
    Matrix(Affine),
}

impl ItemPlacement {
    pub fn to_affine(self) -> Affine {
        match self {
            Self::Transform(t) => t.to_affine(),
            Self::Matrix(m) => m,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Snapshot of one item as seen by the planner.
pub struct ItemState {
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub placement: ItemPlacement,
}

fn default_visible() -> bool {
    true
}

/// Item table keyed by scene id, then item id.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StaticTransforms {
    scenes: BTreeMap<String, BTreeMap<i64, ItemState>>,
}

impl StaticTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item, returning the previous state.
    pub fn insert(
        &mut self,
        scene: impl Into<String>,
        item_id: i64,
        state: ItemState,
    ) -> Option<ItemState> {
        self.scenes
            .entry(scene.into())
            .or_default()
            .insert(item_id, state)
    }

    pub fn get(&self, scene: &str, item_id: i64) -> Option<&ItemState> {
        self.scenes.get(scene).and_then(|items| items.get(&item_id))
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.values().all(BTreeMap::is_empty)
    }
}

impl TransformProvider for StaticTransforms {
    fn quad_transform(&self, scene: &str, item_id: i64) -> Option<Affine> {
        self.get(scene, item_id)
            .filter(|item| item.visible)
            .map(|item| item.placement.to_affine())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/region/transform.rs"]
mod tests;
