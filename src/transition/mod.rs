pub(crate) mod exit;
