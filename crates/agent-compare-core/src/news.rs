use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Every synthesized news item carries this date.
pub const NEWS_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 6, 17) {
    Some(d) => d,
    None => panic!("invalid news date"),
};

pub const MARKET_LABEL: &str = "Market Analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Acquisitions,
    Releases,
    Updates,
}

impl NewsCategory {
    /// Classify a `recent_updates` key by substring.
    pub fn classify(update_key: &str) -> Self {
        if update_key.contains("acquisition") {
            Self::Acquisitions
        } else if update_key.contains("release") {
            Self::Releases
        } else {
            Self::Updates
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Acquisitions => "Acquisitions",
            Self::Releases => "New Releases",
            Self::Updates => "Platform Updates",
        }
    }
}

/// `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilter(pub Option<NewsCategory>);

impl FromStr for CategoryFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self(None)),
            "acquisitions" | "acquisition" => Ok(Self(Some(NewsCategory::Acquisitions))),
            "releases" | "release" => Ok(Self(Some(NewsCategory::Releases))),
            "updates" | "update" => Ok(Self(Some(NewsCategory::Updates))),
            other => Err(format!("unknown news category: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub category: NewsCategory,
    pub date: NaiveDate,
    /// The update key, or `trend` for market trends.
    pub kind: String,
    pub description: String,
    pub impact: Impact,
}

/// Build the news feed: one item per platform update, then one per market
/// trend, newest first. The sort is stable, so with a single shared date the
/// document order is kept.
pub fn feed(dataset: &Dataset) -> Vec<NewsItem> {
    let mut items = Vec::new();

    for p in &dataset.platforms {
        for update in &p.recent_updates {
            items.push(NewsItem {
                id: format!("{}-{}", p.key, update.key),
                title: update.text.clone(),
                platform: p.name.clone(),
                category: NewsCategory::classify(&update.key),
                date: NEWS_DATE,
                kind: update.key.clone(),
                description: format!("{} announces {}", p.name, update.text),
                impact: Impact::High,
            });
        }
    }

    for (i, trend) in dataset.market_analysis.key_trends.iter().enumerate() {
        items.push(NewsItem {
            id: format!("trend-{i}"),
            title: trend.clone(),
            platform: MARKET_LABEL.to_string(),
            category: NewsCategory::Updates,
            date: NEWS_DATE,
            kind: "trend".to_string(),
            description: format!("Industry trend: {trend}"),
            impact: Impact::Medium,
        });
    }

    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}

pub fn filter(items: &[NewsItem], filter: CategoryFilter) -> Vec<&NewsItem> {
    items
        .iter()
        .filter(|item| filter.0.map_or(true, |c| item.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_update_keys() {
        assert_eq!(NewsCategory::classify("funding_acquisition"), NewsCategory::Acquisitions);
        assert_eq!(NewsCategory::classify("model_release"), NewsCategory::Releases);
        assert_eq!(NewsCategory::classify("ai_sheets"), NewsCategory::Updates);
    }

    #[test]
    fn acquisition_wins_over_release() {
        assert_eq!(
            NewsCategory::classify("acquisition_release"),
            NewsCategory::Acquisitions
        );
    }

    #[test]
    fn parse_filter() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter(None)));
        assert_eq!(
            "Releases".parse::<CategoryFilter>(),
            Ok(CategoryFilter(Some(NewsCategory::Releases)))
        );
        assert!("gossip".parse::<CategoryFilter>().is_err());
    }
}
