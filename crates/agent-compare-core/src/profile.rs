use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::platform::Platform;
use crate::pricing::{self, PriceSummary};
use crate::route::Route;
use crate::scoring::{self, PerformanceScore, ScoreSeed};

pub const NOT_FOUND_MESSAGE: &str =
    "Platform not found. Please check the URL or go back to the comparison page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Overview,
    Pricing,
    Features,
    Performance,
}

impl FromStr for ProfileTab {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(Self::Overview),
            "pricing" => Ok(Self::Pricing),
            "features" => Ok(Self::Features),
            "performance" => Ok(Self::Performance),
            other => Err(format!("unknown profile tab: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub platform: Platform,
    pub score: PerformanceScore,
    pub price: Option<PriceSummary>,
}

/// Result of resolving `/agent/{id}`. A missing id is a normal outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Lookup {
    Found(Box<Profile>),
    NotFound { id: String, back: String },
}

pub fn lookup(dataset: &Dataset, id: &str, seed: ScoreSeed) -> Lookup {
    match dataset.get(id) {
        Some(p) => Lookup::Found(Box::new(Profile {
            score: scoring::score(p, seed),
            price: pricing::price_summary(&p.pricing),
            platform: p.clone(),
        })),
        None => {
            tracing::debug!(id, "agent profile not found");
            Lookup::NotFound {
                id: id.to_string(),
                back: Route::Comparison.path(),
            }
        }
    }
}
