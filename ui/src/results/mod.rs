mod length;
pub use length::LengthResults;

mod special;
pub use special::SpecialResults;

mod sweeps;
pub use sweeps::{DiversityResults, PositionResults};

mod summary;
pub use summary::SummaryResults;

mod export;
pub use export::{ExportSweep, ResultsExportPanel};

mod utils;
pub(crate) use utils::*;

use crate::datasets::Catalog;
use crate::t;

/// Shared state for the results view: the validated catalog or the reason it
/// was rejected.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    pub catalog: Option<&'static Catalog>,
    pub error: Option<String>,
}

impl ResultsState {
    pub fn load() -> Self {
        match Catalog::shared() {
            Ok(catalog) => Self {
                catalog: Some(catalog),
                error: None,
            },
            Err(err) => Self {
                catalog: None,
                error: Some(t!("results-load-error", reason = err.to_string())),
            },
        }
    }
}

/// Result categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Length,
    Special,
    Diversity,
    Position,
    Summary,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Special,
        Category::Diversity,
        Category::Position,
        Category::Summary,
    ];

    pub fn label(self) -> String {
        match self {
            Category::Length => t!("category-length"),
            Category::Special => t!("category-special"),
            Category::Diversity => t!("category-diversity"),
            Category::Position => t!("category-position"),
            Category::Summary => t!("category-summary"),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Out-of-range indices keep the first tab.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}
