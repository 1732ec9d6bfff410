use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{AcError, Result};
use crate::features;
use crate::platform::Platform;

pub const MAX_SELECTED: usize = 4;
pub const DEFAULT_SELECTED: usize = 3;

/// Platforms picked for side-by-side comparison, in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    /// First three platforms of the dataset.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            keys: dataset
                .keys()
                .take(DEFAULT_SELECTED)
                .map(String::from)
                .collect(),
        }
    }

    /// Build a selection from explicit keys. Unknown keys are an error;
    /// keys past the fourth are ignored, as with [`Selection::toggle`].
    pub fn from_keys<S: AsRef<str>>(dataset: &Dataset, keys: &[S]) -> Result<Self> {
        let mut sel = Self::default();
        for key in keys {
            let key = key.as_ref();
            if dataset.get(key).is_none() {
                return Err(AcError::PlatformNotFound(key.to_string()));
            }
            if !sel.contains(key) {
                sel.toggle(key);
            }
        }
        Ok(sel)
    }

    /// Deselect if selected, otherwise select when fewer than
    /// [`MAX_SELECTED`] are picked. Returns whether `key` ends up selected.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
            false
        } else if self.keys.len() < MAX_SELECTED {
            self.keys.push(key.to_string());
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn platforms<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Platform> {
        self.keys.iter().filter_map(|k| dataset.get(k)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    Overview,
    Pricing,
    Features,
    Technical,
}

impl FromStr for ComparisonMode {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(Self::Overview),
            "pricing" => Ok(Self::Pricing),
            "features" => Ok(Self::Features),
            "technical" | "tech" => Ok(Self::Technical),
            other => Err(format!("unknown comparison mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Text(String),
    Check(bool),
    Missing,
}

impl Cell {
    fn text(v: Option<&str>) -> Self {
        match v {
            Some(s) if !s.is_empty() && s != "N/A" => Self::Text(s.to_string()),
            _ => Self::Missing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Platform display names, one per column.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

fn table(platforms: &[&Platform], rows: Vec<Row>) -> Table {
    Table {
        columns: platforms.iter().map(|p| p.name.clone()).collect(),
        rows,
    }
}

/// Tagline, headquarters, founding year, market position and the first
/// three core features.
pub fn overview(dataset: &Dataset, selection: &Selection) -> Table {
    let platforms = selection.platforms(dataset);
    let fields: [(&str, fn(&Platform) -> Option<&str>); 4] = [
        ("Tagline", |p| p.tagline.as_deref()),
        ("Headquarters", |p| p.headquarters.as_deref()),
        ("Founded", |p| p.founded.as_deref()),
        ("Market Position", |p| p.market_position.as_deref()),
    ];

    let mut rows: Vec<Row> = fields
        .iter()
        .map(|(label, get)| Row {
            label: label.to_string(),
            cells: platforms.iter().map(|p| Cell::text(get(p))).collect(),
        })
        .collect();

    for i in 0..3 {
        rows.push(Row {
            label: format!("Core Feature {}", i + 1),
            cells: platforms
                .iter()
                .map(|p| Cell::text(p.core_features.get(i).map(String::as_str)))
                .collect(),
        });
    }

    table(&platforms, rows)
}

pub const TECHNICAL_FIELDS: &[&str] = &["runtime_uptime", "supported_formats", "api_access"];

pub fn technical(dataset: &Dataset, selection: &Selection) -> Table {
    let platforms = selection.platforms(dataset);
    let rows = TECHNICAL_FIELDS
        .iter()
        .map(|field| Row {
            label: field.replace('_', " "),
            cells: platforms
                .iter()
                .map(|p| Cell::text(p.spec(field).map(|v| v.to_string()).as_deref()))
                .collect(),
        })
        .collect();
    table(&platforms, rows)
}

/// One row per distinct core feature among the selected platforms, checked
/// with [`features::has_feature`].
pub fn feature_grid(dataset: &Dataset, selection: &Selection) -> Table {
    let platforms = selection.platforms(dataset);
    let mut names: Vec<&str> = Vec::new();
    for p in &platforms {
        for f in &p.core_features {
            if !names.contains(&f.as_str()) {
                names.push(f);
            }
        }
    }
    let rows = names
        .into_iter()
        .map(|name| Row {
            label: name.to_string(),
            cells: platforms
                .iter()
                .map(|p| Cell::Check(features::has_feature(p, name)))
                .collect(),
        })
        .collect();
    table(&platforms, rows)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierBrief {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformPricing {
    pub key: String,
    pub name: String,
    pub tiers: Vec<TierBrief>,
}

/// Tier list per selected platform with the first two features of each tier.
pub fn pricing(dataset: &Dataset, selection: &Selection) -> Vec<PlatformPricing> {
    selection
        .platforms(dataset)
        .into_iter()
        .map(|p| PlatformPricing {
            key: p.key.clone(),
            name: p.name.clone(),
            tiers: p
                .pricing
                .iter()
                .map(|t| TierBrief {
                    name: t.display_name(),
                    price: t.price_label().to_string(),
                    features: t.features.iter().take(2).cloned().collect(),
                })
                .collect(),
        })
        .collect()
}
