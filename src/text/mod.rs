//! Caption services consumed by the layout generator: localized strings and fitted fonts.

pub(crate) mod font;
pub(crate) mod translate;
