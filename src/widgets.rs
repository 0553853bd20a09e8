//! Small rendering helpers shared across panes

pub mod popup;
pub mod text;
