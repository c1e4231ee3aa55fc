//! All-time power rankings with clickable-column style sorting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::stats::lp_avg;
use crate::{error::LeagueError, store::models::Manager};

/// Columns the legacy table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    LegacyPoints,
    LpAvg,
    TotalSeasons,
    Championships,
    LastPlaceFinishes,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Name,
        SortColumn::LegacyPoints,
        SortColumn::LpAvg,
        SortColumn::TotalSeasons,
        SortColumn::Championships,
        SortColumn::LastPlaceFinishes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::LegacyPoints => "legacy_points",
            SortColumn::LpAvg => "lp_avg",
            SortColumn::TotalSeasons => "total_seasons",
            SortColumn::Championships => "championships",
            SortColumn::LastPlaceFinishes => "last_place_finishes",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        SortColumn::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| LeagueError::InvalidSortColumn {
                column: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column and direction. Starts at legacy points, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::LegacyPoints,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Select `column`: the active column flips direction, any other becomes
    /// active sorted descending.
    pub fn select(self, column: SortColumn) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Desc,
            }
        }
    }

    /// Apply a sequence of selections starting from `self`.
    pub fn select_all<I>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = SortColumn>,
    {
        columns.into_iter().fold(self, SortState::select)
    }
}

enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
}

fn sort_key(manager: &Manager, column: SortColumn) -> SortKey<'_> {
    match column {
        SortColumn::Name => SortKey::Text(&manager.name),
        SortColumn::LegacyPoints => SortKey::Number(manager.legacy_points),
        SortColumn::LpAvg => SortKey::Number(lp_avg(manager)),
        SortColumn::TotalSeasons => SortKey::Number(f64::from(manager.total_seasons)),
        SortColumn::Championships => SortKey::Number(f64::from(manager.championships)),
        SortColumn::LastPlaceFinishes => SortKey::Number(f64::from(manager.last_place_finishes)),
    }
}

/// Locale-aware name order: root-locale collation at tertiary strength, with
/// exact text as the final tiebreak.
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!(error = %e, "Collator unavailable, falling back to case-insensitive order");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => {
                let fold = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
                fold(a).cmp(&fold(b))
            }
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off name comparison. Prefer a shared [`NameOrder`] when sorting.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameOrder::new().compare(a, b)
}

fn compare_keys(names: &NameOrder, a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Text(x), SortKey::Text(y)) => names.compare(x, y),
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        _ => Ordering::Equal,
    }
}

/// Sorted copy of `managers`. Ties keep their original relative order in
/// either direction.
pub fn sort_managers(managers: &[Manager], state: SortState) -> Vec<Manager> {
    let names = NameOrder::new();
    let mut sorted = managers.to_vec();
    sorted.sort_by(|a, b| {
        let ka = sort_key(a, state.column);
        let kb = sort_key(b, state.column);
        match state.direction {
            SortDirection::Asc => compare_keys(&names, &ka, &kb),
            SortDirection::Desc => compare_keys(&names, &kb, &ka),
        }
    });
    sorted
}
