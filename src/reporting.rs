//! Output for analysis results: console tables and JSON.

pub mod console;
pub mod json;

/// Which tables to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Fields,
    Methods,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub filter: Filter,
    /// Only rows carrying a warning flag.
    pub flagged_only: bool,
    pub show_nested_types: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            flagged_only: false,
            show_nested_types: true,
        }
    }
}
