// Price extraction and usage-based tier recommendation.
//
// Prices in the data file are free text ("$39/month", "Custom", "$0").
// Only the digits and dots are kept, so "Custom" never yields a number and
// such tiers are invisible to the price chart.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::platform::PricingTier;

/// Parse the numeric part of a price string.
///
/// Every character other than an ASCII digit or `.` is dropped, then the
/// longest prefix that reads as a decimal number is parsed.
pub fn parse_price(price: &str) -> Option<f64> {
    let cleaned: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + 1;
    }

    let prefix = &cleaned[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub starting: f64,
    pub mid_tier: f64,
}

/// Starting price is the lowest numeric tier price; mid-tier is the lowest
/// price strictly above it, or twice the starting price when no such tier
/// exists. `None` when no tier has a numeric price.
pub fn price_summary(tiers: &[PricingTier]) -> Option<PriceSummary> {
    let values: Vec<f64> = tiers
        .iter()
        .filter_map(|t| t.price.as_deref())
        .filter_map(parse_price)
        .collect();

    let starting = values.iter().copied().reduce(f64::min)?;
    let mid_tier = values
        .iter()
        .copied()
        .filter(|v| *v > starting)
        .reduce(f64::min)
        .unwrap_or(starting * 2.0);

    Some(PriceSummary { starting, mid_tier })
}

/// One bar of the starting/mid-tier price chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub key: String,
    pub name: String,
    pub starting: f64,
    pub mid_tier: f64,
}

/// Price chart data. Platforms without any numeric price are left out.
pub fn price_chart(dataset: &Dataset) -> Vec<PricePoint> {
    dataset
        .platforms
        .iter()
        .filter_map(|p| {
            let summary = price_summary(&p.pricing)?;
            Some(PricePoint {
                key: p.key.clone(),
                name: p.name.clone(),
                starting: summary.starting,
                mid_tier: summary.mid_tier,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Low,
    Medium,
    High,
}

impl UsageLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Light",
            Self::Medium => "Regular",
            Self::High => "Heavy",
        }
    }

    fn tier_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["free", "starter"],
            Self::Medium => &["pro", "professional", "plus"],
            Self::High => &["team", "enterprise", "business"],
        }
    }
}

impl FromStr for UsageLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "light" => Ok(Self::Low),
            "medium" | "regular" => Ok(Self::Medium),
            "high" | "heavy" => Ok(Self::High),
            other => Err(format!("unknown usage level: {other}")),
        }
    }
}

impl std::fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Pick the tier that fits a usage level.
///
/// The first tier whose name carries one of the level's keywords wins (for
/// `Low`, a price containing `$0` also qualifies). Otherwise the middle tier
/// (`len / 2`) is used. `None` only when there are no tiers at all.
pub fn recommend(tiers: &[PricingTier], usage: UsageLevel) -> Option<&PricingTier> {
    let keywords = usage.tier_keywords();
    tiers
        .iter()
        .find(|t| {
            let name = t.name.to_lowercase();
            keywords.iter().any(|k| name.contains(k))
                || (usage == UsageLevel::Low
                    && t.price.as_deref().is_some_and(|p| p.contains("$0")))
        })
        .or_else(|| tiers.get(tiers.len() / 2))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub key: String,
    pub platform: String,
    pub tier: String,
    pub price: String,
    pub credits: String,
    pub features: Vec<String>,
}

pub fn recommendations(dataset: &Dataset, usage: UsageLevel) -> Vec<Recommendation> {
    dataset
        .platforms
        .iter()
        .filter_map(|p| {
            let tier = recommend(&p.pricing, usage)?;
            Some(Recommendation {
                key: p.key.clone(),
                platform: p.name.clone(),
                tier: tier.name.clone(),
                price: tier.price_label().to_string(),
                credits: tier.credits.clone().unwrap_or_else(|| "N/A".to_string()),
                features: tier.features.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(name: &str, price: Option<&str>) -> PricingTier {
        PricingTier {
            name: name.into(),
            price: price.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn parse_price_strips_currency_and_units() {
        assert_eq!(parse_price("$39/month"), Some(39.0));
        assert_eq!(parse_price("$19.9/month"), Some(19.9));
        assert_eq!(parse_price("$1,000 per year"), Some(1000.0));
        assert_eq!(parse_price("$0"), Some(0.0));
    }

    #[test]
    fn parse_price_rejects_non_numeric() {
        assert_eq!(parse_price("Custom"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("Contact sales."), None);
    }

    #[test]
    fn parse_price_stops_at_second_dot() {
        assert_eq!(parse_price("1.2.3"), Some(1.2));
        assert_eq!(parse_price(".5"), Some(0.5));
    }

    #[test]
    fn mid_tier_defaults_to_double() {
        let s = price_summary(&[tier("pro", Some("$20")), tier("enterprise", Some("Custom"))]).unwrap();
        assert_eq!(s.starting, 20.0);
        assert_eq!(s.mid_tier, 40.0);
    }

    #[test]
    fn mid_tier_is_next_price_up() {
        let s = price_summary(&[
            tier("team", Some("$300")),
            tier("pro", Some("$50")),
            tier("free", Some("$0")),
            tier("plus", Some("$50")),
        ])
        .unwrap();
        assert_eq!(s.starting, 0.0);
        assert_eq!(s.mid_tier, 50.0);
    }

    #[test]
    fn usage_level_parse() {
        assert_eq!("Heavy".parse::<UsageLevel>(), Ok(UsageLevel::High));
        assert_eq!("low".parse::<UsageLevel>(), Ok(UsageLevel::Low));
        assert!("extreme".parse::<UsageLevel>().is_err());
    }

    #[test]
    fn low_usage_matches_zero_price() {
        let tiers = [tier("basic", Some("$0")), tier("premium", Some("$10"))];
        assert_eq!(recommend(&tiers, UsageLevel::Low).unwrap().name, "basic");
    }
}
