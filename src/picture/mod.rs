#[cfg(feature = "accelerated")]
pub(crate) mod accelerated;
pub(crate) mod backend;
pub(crate) mod canvas;
pub(crate) mod orientation;
pub(crate) mod portable;
pub(crate) mod slots;
