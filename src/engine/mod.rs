pub(crate) mod layout_engine;
