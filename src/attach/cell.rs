use std::sync::{Arc, Mutex, PoisonError};

use crate::plan::planner::RegionPlan;

/// Single-slot handoff of the most recent plan between threads.
///
/// A UI thread publishes each new plan; a render or encoder thread reads the latest one. The
/// slot is replaced wholesale, so readers never observe a partially written plan.
#[derive(Debug, Default)]
pub struct PlanCell {
    slot: Mutex<Arc<RegionPlan>>,
}

impl PlanCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current plan, returning the previous one.
    pub fn publish(&self, plan: RegionPlan) -> Arc<RegionPlan> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, Arc::new(plan))
    }

    /// Snapshot of the current plan.
    pub fn latest(&self) -> Arc<RegionPlan> {
        Arc::clone(&self.slot.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/attach/cell.rs"]
mod tests;
