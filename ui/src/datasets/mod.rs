//! Embedded benchmark catalog.
//!
//! Every sweep and all page content ship inside the binary (`ui/data/*.json`)
//! and are validated once on first access. A broken summary fails the whole
//! catalog with a [`DataError`] naming the dataset and category.

mod content;
pub use content::*;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::boxplot::LogScale;
use crate::core::error::DataError;
use crate::core::summary::StatSummary;

#[derive(Embed)]
#[folder = "data"]
struct Resources;

/// Test round a sweep was measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Round {
    Round1,
    Round2,
    #[default]
    Total,
}

impl Round {
    pub const ALL: [Round; 3] = [Round::Round1, Round::Round2, Round::Total];

    pub fn slug(self) -> &'static str {
        match self {
            Round::Round1 => "round1",
            Round::Round2 => "round2",
            Round::Total => "total",
        }
    }
}

/// Per-round payload as stored in the JSON resources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundSet<T> {
    pub round1: T,
    pub round2: T,
    pub total: T,
}

impl<T> RoundSet<T> {
    pub fn get(&self, round: Round) -> &T {
        match round {
            Round::Round1 => &self.round1,
            Round::Round2 => &self.round2,
            Round::Total => &self.total,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (Round, &T)> {
        Round::ALL.into_iter().map(move |round| (round, self.get(round)))
    }
}

/// Value-axis domain of a box-plot chart.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Domain {
    Fixed { y_min: f64, y_max: f64 },
    /// `[y_min, max(series.max) * headroom]`
    Auto { y_min: f64, headroom: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChartPreset {
    /// Desktop height in pixels before the responsive scale is applied.
    pub nominal_height: f64,
    pub domain: Domain,
}

impl ChartPreset {
    pub fn scale_for(&self, series: &[StatSummary]) -> Option<LogScale> {
        match self.domain {
            Domain::Fixed { y_min, y_max } => LogScale::new(y_min, y_max),
            Domain::Auto { y_min, headroom } => LogScale::fit(series, y_min, headroom),
        }
    }

    fn check(&self, dataset: &str) -> Result<(), DataError> {
        let invalid = |reason: &str| DataError::InvalidPreset {
            dataset: dataset.to_string(),
            reason: reason.to_string(),
        };
        if !(self.nominal_height.is_finite() && self.nominal_height > 0.0) {
            return Err(invalid("nominal height must be positive"));
        }
        match self.domain {
            Domain::Fixed { y_min, y_max } => {
                if LogScale::new(y_min, y_max).is_none() {
                    return Err(invalid("fixed domain needs 0 < y_min < y_max"));
                }
            }
            Domain::Auto { y_min, headroom } => {
                if !(y_min.is_finite() && y_min > 0.0) {
                    return Err(invalid("auto domain needs a positive y_min"));
                }
                if !(headroom.is_finite() && headroom >= 1.0) {
                    return Err(invalid("auto domain headroom must be at least 1"));
                }
            }
        }
        Ok(())
    }
}

/// Free-text description attached to one category of a sweep.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryNote {
    pub category: String,
    pub description: String,
    pub example: String,
}

/// Published marginal for one base-length step at a fixed special count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransitionStep {
    pub from: String,
    pub to: String,
    pub marginal_seconds: f64,
    pub growth_percent: f64,
}

impl TransitionStep {
    pub fn label(&self) -> String {
        format!("{}→{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransitionRow {
    pub special: String,
    pub steps: Vec<TransitionStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransitionTable {
    pub source: String,
    pub rows: Vec<TransitionRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LengthDataset {
    pub preset: ChartPreset,
    pub rounds: RoundSet<Vec<StatSummary>>,
    #[serde(default)]
    pub keyspace: BTreeMap<String, u64>,
    pub transitions: TransitionTable,
}

impl LengthDataset {
    pub fn series(&self, round: Round) -> &[StatSummary] {
        self.rounds.get(round)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpecialDataset {
    pub preset: ChartPreset,
    pub base_lengths: Vec<String>,
    pub rounds: RoundSet<BTreeMap<String, Vec<StatSummary>>>,
}

impl SpecialDataset {
    /// Special-count sweep for one base length; empty if the length is unknown.
    pub fn series(&self, round: Round, base_length: &str) -> &[StatSummary] {
        self.rounds
            .get(round)
            .get(base_length)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A single sweep with per-category notes (diversity, position).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SweepDataset {
    pub preset: ChartPreset,
    pub series: Vec<StatSummary>,
    #[serde(default)]
    pub notes: Vec<CategoryNote>,
}

impl SweepDataset {
    pub fn note(&self, category: &str) -> Option<&CategoryNote> {
        self.notes.iter().find(|note| note.category == category)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub length: LengthDataset,
    pub special: SpecialDataset,
    pub diversity: SweepDataset,
    pub position: SweepDataset,
    pub overview: Overview,
    pub design: Design,
    pub findings: Findings,
}

static SHARED: Lazy<Result<Catalog, DataError>> = Lazy::new(|| {
    let loaded = Catalog::load();
    match &loaded {
        Ok(_) => tracing::info!("benchmark catalog loaded"),
        Err(err) => tracing::warn!(%err, "benchmark catalog rejected"),
    }
    loaded
});

impl Catalog {
    /// Parse and validate every embedded resource.
    pub fn load() -> Result<Self, DataError> {
        let catalog = Self {
            length: read("length.json")?,
            special: read("special.json")?,
            diversity: read("diversity.json")?,
            position: read("position.json")?,
            overview: read("overview.json")?,
            design: read("design.json")?,
            findings: read("findings.json")?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Process-wide catalog, loaded on first use.
    pub fn shared() -> Result<&'static Catalog, &'static DataError> {
        SHARED.as_ref()
    }

    pub fn validate(&self) -> Result<(), DataError> {
        self.length.preset.check("length")?;
        for (round, series) in self.length.rounds.iter() {
            check_series(&format!("length/{}", round.slug()), series)?;
        }

        self.special.preset.check("special")?;
        if self.special.base_lengths.is_empty() {
            return Err(DataError::EmptySeries("special".into()));
        }
        for (round, by_length) in self.special.rounds.iter() {
            for base in &self.special.base_lengths {
                let name = format!("special/{}/{base}", round.slug());
                let series = by_length
                    .get(base)
                    .ok_or_else(|| DataError::MissingResource(name.clone()))?;
                check_series(&name, series)?;
            }
        }

        self.diversity.preset.check("diversity")?;
        check_series("diversity", &self.diversity.series)?;
        self.position.preset.check("position")?;
        check_series("position", &self.position.series)?;

        Ok(())
    }
}

fn read<T: DeserializeOwned>(name: &str) -> Result<T, DataError> {
    let file = Resources::get(name).ok_or_else(|| DataError::MissingResource(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| DataError::Parse {
        name: name.to_string(),
        source,
    })
}

fn check_series(dataset: &str, series: &[StatSummary]) -> Result<(), DataError> {
    if series.is_empty() {
        return Err(DataError::EmptySeries(dataset.to_string()));
    }
    for summary in series {
        summary
            .validate()
            .map_err(|problem| DataError::InvalidSummary {
                dataset: dataset.to_string(),
                category: summary.category.clone(),
                problem,
            })?;
    }
    Ok(())
}
