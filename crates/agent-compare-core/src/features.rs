//! Feature catalog, feature matching and the features matrix.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::platform::Platform;

/// Where a catalog entry was seen. Used to filter the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    All,
    Core,
    Strengths,
    Technical,
}

impl FromStr for FeatureCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "core" => Ok(Self::Core),
            "strengths" | "strength" => Ok(Self::Strengths),
            "technical" | "tech" | "specs" => Ok(Self::Technical),
            other => Err(format!("unknown feature category: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub core: bool,
    pub strength: bool,
    pub technical: bool,
}

impl CatalogEntry {
    pub fn in_category(&self, category: FeatureCategory) -> bool {
        match category {
            FeatureCategory::All => true,
            FeatureCategory::Core => self.core,
            FeatureCategory::Strengths => self.strength,
            FeatureCategory::Technical => self.technical,
        }
    }
}

/// Lowercase and turn every `_` into a space.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().replace('_', " ")
}

/// All normalized feature strings a platform claims: core features,
/// strengths and technical spec key names. Blank strings are skipped.
pub fn platform_terms(platform: &Platform) -> Vec<String> {
    platform
        .core_features
        .iter()
        .chain(platform.strengths.iter())
        .chain(platform.technical_specs.iter().map(|s| &s.key))
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize(s))
        .collect()
}

/// True when the normalized candidate and one of the platform's normalized
/// terms contain each other, in either direction.
///
/// An empty candidate is a substring of every term, so it matches any
/// platform that has at least one term.
pub fn has_feature(platform: &Platform, candidate: &str) -> bool {
    let candidate = normalize(candidate);
    platform_terms(platform)
        .iter()
        .any(|term| term.contains(&candidate) || candidate.contains(term.as_str()))
}

/// Union of every platform's core features, strengths and spec keys
/// (underscores shown as spaces), deduplicated and sorted.
pub fn catalog(dataset: &Dataset) -> Vec<CatalogEntry> {
    let mut entries: BTreeMap<String, CatalogEntry> = BTreeMap::new();

    let mut add = |name: String, mark: fn(&mut CatalogEntry)| {
        if name.trim().is_empty() {
            return;
        }
        let entry = entries.entry(name.clone()).or_insert_with(|| CatalogEntry {
            name,
            ..Default::default()
        });
        mark(entry);
    };

    for p in &dataset.platforms {
        for f in &p.core_features {
            add(f.clone(), |e| e.core = true);
        }
        for s in &p.strengths {
            add(s.clone(), |e| e.strength = true);
        }
        for spec in &p.technical_specs {
            add(spec.display_key(), |e| e.technical = true);
        }
    }

    entries.into_values().collect()
}

/// Case-insensitive substring search over the catalog. The empty term keeps
/// every entry of the category.
pub fn search<'a>(
    entries: &'a [CatalogEntry],
    term: &str,
    category: FeatureCategory,
) -> Vec<&'a CatalogEntry> {
    let term = term.to_lowercase();
    entries
        .iter()
        .filter(|e| e.in_category(category))
        .filter(|e| e.name.to_lowercase().contains(&term))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixColumn {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixRow {
    pub feature: String,
    /// One cell per column, in column order.
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureMatrix {
    pub columns: Vec<MatrixColumn>,
    pub rows: Vec<MatrixRow>,
}

impl FeatureMatrix {
    /// Number of features each platform covers, in column order.
    pub fn coverage(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|i| self.rows.iter().filter(|r| r.cells[i]).count())
            .collect()
    }
}

pub fn matrix(dataset: &Dataset, term: &str, category: FeatureCategory) -> FeatureMatrix {
    let entries = catalog(dataset);
    let columns = dataset
        .platforms
        .iter()
        .map(|p| MatrixColumn {
            key: p.key.clone(),
            name: p.name.clone(),
        })
        .collect();
    let rows = search(&entries, term, category)
        .into_iter()
        .map(|e| MatrixRow {
            feature: e.name.clone(),
            cells: dataset
                .platforms
                .iter()
                .map(|p| has_feature(p, &e.name))
                .collect(),
        })
        .collect();
    FeatureMatrix { columns, rows }
}

/// Per-platform card: first five core features, first three strengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlights {
    pub key: String,
    pub name: String,
    pub core_features: Vec<String>,
    pub strengths: Vec<String>,
}

pub fn highlights(dataset: &Dataset) -> Vec<Highlights> {
    dataset
        .platforms
        .iter()
        .map(|p| Highlights {
            key: p.key.clone(),
            name: p.name.clone(),
            core_features: p.core_features.iter().take(5).cloned().collect(),
            strengths: p.strengths.iter().take(3).cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_all_underscores() {
        assert_eq!(normalize("Runtime_Uptime_SLA"), "runtime uptime sla");
    }

    #[test]
    fn category_parse() {
        assert_eq!("Core".parse::<FeatureCategory>(), Ok(FeatureCategory::Core));
        assert_eq!("specs".parse::<FeatureCategory>(), Ok(FeatureCategory::Technical));
        assert!("pricing".parse::<FeatureCategory>().is_err());
    }

    #[test]
    fn blank_terms_are_ignored() {
        let p = Platform {
            core_features: vec!["   ".into()],
            ..Default::default()
        };
        assert!(platform_terms(&p).is_empty());
        assert!(!has_feature(&p, "anything"));
    }
}
