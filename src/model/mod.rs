pub(crate) mod element;
pub(crate) mod snapshot;
pub(crate) mod state;
