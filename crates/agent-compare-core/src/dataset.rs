use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AcError, Result};
use crate::platform::{Platform, PricingTier, Spec, SpecValue, Update};

/// Relative location of the data file under a site's base URL.
pub const DATA_FILE: &str = "data/ai_agents_structured_data.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingTrends {
    pub most_affordable: Option<String>,
    pub best_free_tier: Option<String>,
    pub enterprise_leader: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureLeader {
    pub category: String,
    pub platform: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub region: String,
    pub platforms: Vec<String>,
}

impl Region {
    pub fn display_name(&self) -> String {
        self.region.replace('_', " ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub pricing_trends: PricingTrends,
    pub feature_leaders: Vec<FeatureLeader>,
    pub key_trends: Vec<String>,
    pub geographic_distribution: Vec<Region>,
}

impl MarketAnalysis {
    pub fn feature_leader(&self, category: &str) -> Option<&str> {
        self.feature_leaders
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.platform.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchMetadata {
    pub report_date: Option<String>,
    pub sources_verified: Option<u64>,
    pub platforms_analyzed: Option<u64>,
}

/// The whole data file, validated. Read-only once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub platforms: Vec<Platform>,
    pub market_analysis: MarketAnalysis,
    pub research_metadata: ResearchMetadata,
}

impl Dataset {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        parse_dataset(&value)
    }

    pub fn get(&self, key: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

/// Copy of the data file compiled into the binary.
pub fn bundled_json() -> &'static str {
    include_str!("../../../data/ai_agents_structured_data.json")
}

pub fn load_bundled() -> Result<Dataset> {
    Dataset::from_json_str(bundled_json())
}

/// Validate raw JSON into a [`Dataset`].
///
/// `platforms` must be an object. Platforms without a string `name` are
/// dropped; every other field is optional and defaults to empty.
pub fn parse_dataset(data: &Value) -> Result<Dataset> {
    let platforms_obj = data
        .get("platforms")
        .and_then(|v| v.as_object())
        .ok_or_else(|| AcError::Invalid("`platforms` must be an object".into()))?;

    let mut platforms = Vec::with_capacity(platforms_obj.len());
    for (key, raw) in platforms_obj {
        match parse_platform(key, raw) {
            Some(p) => platforms.push(p),
            None => tracing::warn!(platform = %key, "dropping platform without a name"),
        }
    }

    let market_analysis = data
        .get("market_analysis")
        .map(parse_market_analysis)
        .unwrap_or_default();

    let meta = data.get("research_metadata");
    let research_metadata = ResearchMetadata {
        report_date: meta.and_then(|m| text(m, "report_date")),
        sources_verified: meta.and_then(|m| m.get("sources_verified")).and_then(|v| v.as_u64()),
        platforms_analyzed: meta
            .and_then(|m| m.get("platforms_analyzed"))
            .and_then(|v| v.as_u64()),
    };

    tracing::debug!(platforms = platforms.len(), "dataset parsed");
    Ok(Dataset {
        platforms,
        market_analysis,
        research_metadata,
    })
}

/// Parse one platform record. Returns `None` when `name` is missing.
pub fn parse_platform(key: &str, data: &Value) -> Option<Platform> {
    let name = data.get("name")?.as_str()?.to_string();

    let recent_updates = data
        .get("recent_updates")
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| {
                    Some(Update {
                        key: k.clone(),
                        text: scalar_text(v)?,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let pricing = data
        .get("pricing")
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .map(|(tier, details)| PricingTier {
                    name: tier.clone(),
                    price: text(details, "price"),
                    credits: text(details, "credits"),
                    features: list(details, "features"),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(Platform {
        key: key.to_string(),
        name,
        tagline: text(data, "tagline"),
        headquarters: text(data, "headquarters"),
        founded: text(data, "founded"),
        company_stage: text(data, "company_stage"),
        market_position: text(data, "market_position"),
        website: text(data, "website"),
        core_features: list(data, "core_features"),
        strengths: list(data, "strengths"),
        weaknesses: list(data, "weaknesses"),
        recent_updates,
        pricing,
        technical_specs: specs(data, "technical_specs"),
        performance_metrics: specs(data, "performance_metrics"),
        target_audience: list(data, "target_audience"),
    })
}

fn parse_market_analysis(data: &Value) -> MarketAnalysis {
    let trends = data.get("pricing_trends");
    let pricing_trends = PricingTrends {
        most_affordable: trends.and_then(|t| text(t, "most_affordable")),
        best_free_tier: trends.and_then(|t| text(t, "best_free_tier")),
        enterprise_leader: trends.and_then(|t| text(t, "enterprise_leader")),
    };

    let feature_leaders = data
        .get("feature_leaders")
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| {
                    Some(FeatureLeader {
                        category: k.clone(),
                        platform: scalar_text(v)?,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    // Regions usually map to arrays, but a bare string is accepted as a single entry.
    let geographic_distribution = data
        .get("geographic_distribution")
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .map(|(region, v)| Region {
                    region: region.clone(),
                    platforms: match v {
                        Value::Array(arr) => arr.iter().filter_map(scalar_text).collect(),
                        other => scalar_text(other).into_iter().collect(),
                    },
                })
                .collect()
        })
        .unwrap_or_default();

    MarketAnalysis {
        pricing_trends,
        feature_leaders,
        key_trends: list(data, "key_trends"),
        geographic_distribution,
    }
}

fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(scalar_text)
}

fn list(data: &Value, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}

fn specs(data: &Value, key: &str) -> Vec<Spec> {
    let Some(obj) = data.get(key).and_then(|v| v.as_object()) else {
        return Vec::new();
    };
    obj.iter()
        .filter_map(|(k, v)| {
            let value = match v {
                Value::String(s) => SpecValue::Text(s.clone()),
                Value::Number(n) => SpecValue::Number(n.as_f64()?),
                Value::Bool(b) => SpecValue::Flag(*b),
                Value::Array(arr) => SpecValue::List(arr.iter().filter_map(scalar_text).collect()),
                _ => return None,
            };
            Some(Spec {
                key: k.clone(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bundled_dataset() {
        let ds = load_bundled().expect("bundled dataset should parse");
        assert!(ds.len() >= 5, "expected at least 5 platforms, got {}", ds.len());
        assert!(ds.research_metadata.report_date.is_some());
        assert!(!ds.market_analysis.key_trends.is_empty());
    }

    #[test]
    fn all_bundled_platforms_have_valid_fields() {
        let ds = load_bundled().unwrap();
        for p in &ds.platforms {
            assert!(!p.key.is_empty(), "platform key is empty");
            assert!(!p.name.is_empty(), "{}: name is empty", p.key);
            assert!(!p.core_features.is_empty(), "{}: no core features", p.key);
            assert!(p.has_pricing(), "{}: no pricing tiers", p.key);
        }
    }

    #[test]
    fn tier_order_follows_document() {
        let ds = Dataset::from_json_str(
            r#"{"platforms": {"x": {"name": "X", "pricing": {
                "starter": {"price": "$0"},
                "enterprise": {"price": "Custom"},
                "pro": {"price": "$20"}
            }}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = ds.platforms[0].pricing.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["starter", "enterprise", "pro"]);
    }

    #[test]
    fn missing_platforms_object_is_invalid() {
        let err = Dataset::from_json_str(r#"{"market_analysis": {}}"#).unwrap_err();
        assert!(matches!(err, AcError::Invalid(_)));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let err = Dataset::from_json_str("<html>not found</html>").unwrap_err();
        assert!(matches!(err, AcError::Json(_)));
    }
}
