pub(crate) mod geometry;
pub(crate) mod pass;
pub(crate) mod providers;
pub(crate) mod query;
