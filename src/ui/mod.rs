//! Terminal output for the CLI.
//!
//! Provides 24-bit color rendering of score breakdowns and suggestion lists.

pub mod colors;
pub mod score_view;

pub use colors::Theme;
pub use score_view::ScoreRenderer;
