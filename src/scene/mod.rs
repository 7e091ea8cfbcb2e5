pub(crate) mod deck;
