//! Utility functions

pub mod natural;
pub mod path;

pub use natural::natural_cmp;
pub use path::sanitize_component;
