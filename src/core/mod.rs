pub mod factory;
pub mod flatten;
pub mod format;
pub mod parse;
