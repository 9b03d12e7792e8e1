pub(crate) mod model;
pub(crate) mod rect;
pub(crate) mod transform;
