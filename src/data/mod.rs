pub mod datasets;
pub mod error;
pub(crate) mod extractor;
pub(crate) mod loader;
pub mod source;
