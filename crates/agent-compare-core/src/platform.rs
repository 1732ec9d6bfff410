use serde::{Deserialize, Serialize};

/// A named pricing plan. Tiers keep the order they have in the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub price: Option<String>,
    pub credits: Option<String>,
    pub features: Vec<String>,
}

impl PricingTier {
    /// "team_plan" -> "team plan".
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }

    pub fn price_label(&self) -> &str {
        self.price.as_deref().unwrap_or("Custom")
    }
}

/// Value of a technical spec or performance metric entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SpecValue {
    Text(String),
    List(Vec<String>),
    Number(f64),
    Flag(bool),
}

impl SpecValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpecValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => write!(f, "{}", items.join(", ")),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(true) => write!(f, "yes"),
            Self::Flag(false) => write!(f, "no"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spec {
    pub key: String,
    pub value: SpecValue,
}

impl Spec {
    pub fn display_key(&self) -> String {
        self.key.replace('_', " ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Update {
    pub key: String,
    pub text: String,
}

/// One AI agent product as described by the dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Platform {
    /// Key of the platform in the `platforms` object; also the `/agent/{id}` route id.
    pub key: String,
    pub name: String,
    pub tagline: Option<String>,
    pub headquarters: Option<String>,
    pub founded: Option<String>,
    pub company_stage: Option<String>,
    pub market_position: Option<String>,
    pub website: Option<String>,
    pub core_features: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recent_updates: Vec<Update>,
    pub pricing: Vec<PricingTier>,
    pub technical_specs: Vec<Spec>,
    pub performance_metrics: Vec<Spec>,
    pub target_audience: Vec<String>,
}

impl Platform {
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.technical_specs
            .iter()
            .find(|s| s.key == key)
            .map(|s| &s.value)
    }

    pub fn market_position(&self) -> &str {
        self.market_position.as_deref().unwrap_or("")
    }

    pub fn has_pricing(&self) -> bool {
        !self.pricing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_value_display() {
        assert_eq!(SpecValue::Text("98%".into()).to_string(), "98%");
        assert_eq!(
            SpecValue::List(vec!["PDF".into(), "CSV".into()]).to_string(),
            "PDF, CSV"
        );
        assert_eq!(SpecValue::Number(128000.0).to_string(), "128000");
        assert_eq!(SpecValue::Number(1.5).to_string(), "1.5");
        assert_eq!(SpecValue::Flag(true).to_string(), "yes");
    }

    #[test]
    fn tier_display_name_replaces_every_underscore() {
        let tier = PricingTier {
            name: "pro_plus_annual".into(),
            ..Default::default()
        };
        assert_eq!(tier.display_name(), "pro plus annual");
        assert_eq!(tier.price_label(), "Custom");
    }
}
