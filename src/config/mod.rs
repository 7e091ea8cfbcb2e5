pub(crate) mod layout_config;
