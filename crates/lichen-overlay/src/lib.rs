pub mod annotate;
pub mod patch;
pub mod target;
