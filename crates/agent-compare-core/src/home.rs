use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, PricingTrends};

/// Feature-leader categories shown on the landing page, with their labels.
pub const HEADLINE_CATEGORIES: &[(&str, &str)] = &[
    ("technical_capabilities", "Technical Leader"),
    ("automation", "Automation Leader"),
    ("knowledge_management", "Knowledge Leader"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub key: String,
    pub name: String,
    pub tagline: Option<String>,
    pub headquarters: Option<String>,
    pub market_position: Option<String>,
    pub top_features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub platform_count: usize,
    pub sources_verified: Option<u64>,
    pub report_date: Option<String>,
    pub pricing_trends: PricingTrends,
    /// `(label, platform)` for each headline category present in the data.
    pub feature_leaders: Vec<(String, String)>,
    pub cards: Vec<Card>,
}

pub fn summary(dataset: &Dataset) -> Summary {
    let ma = &dataset.market_analysis;
    let feature_leaders = HEADLINE_CATEGORIES
        .iter()
        .filter_map(|(category, label)| {
            ma.feature_leader(category)
                .map(|p| (label.to_string(), p.to_string()))
        })
        .collect();

    let cards = dataset
        .platforms
        .iter()
        .map(|p| Card {
            key: p.key.clone(),
            name: p.name.clone(),
            tagline: p.tagline.clone(),
            headquarters: p.headquarters.clone(),
            market_position: p.market_position.clone(),
            top_features: p.core_features.iter().take(2).cloned().collect(),
        })
        .collect();

    Summary {
        platform_count: dataset.len(),
        sources_verified: dataset.research_metadata.sources_verified,
        report_date: dataset.research_metadata.report_date.clone(),
        pricing_trends: ma.pricing_trends.clone(),
        feature_leaders,
        cards,
    }
}
