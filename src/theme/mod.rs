//! Theme for the Converse desktop shell.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
