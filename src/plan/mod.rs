pub(crate) mod bounds;
pub(crate) mod planner;
pub(crate) mod quantize;
pub(crate) mod rings;
pub(crate) mod smooth;
