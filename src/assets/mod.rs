pub(crate) mod color;
pub(crate) mod decode;
pub(crate) mod loader;
pub(crate) mod picto;
pub(crate) mod sizing;
pub(crate) mod store;
