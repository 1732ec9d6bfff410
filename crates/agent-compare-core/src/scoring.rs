//! Synthetic performance scores.
//!
//! Scores are not measurements. Each platform gets a base value in
//! `[70, 90)` plus fixed bonuses read off its market position, feature count
//! and uptime spec. The base comes from an RNG seeded with a hash of the
//! platform key, so by default the same dataset always ranks the same way.
//! [`ScoreSeed::Entropy`] mixes in a caller seed for a fresh shuffle.

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::dataset::Dataset;
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreSeed {
    #[default]
    Stable,
    Entropy(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScore {
    pub key: String,
    pub name: String,
    pub reliability: u8,
    pub speed: u8,
    pub features: u8,
    pub usability: u8,
    pub value: u8,
    pub overall: u8,
}

impl PerformanceScore {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Overall => self.overall,
            Metric::Reliability => self.reliability,
            Metric::Speed => self.speed,
            Metric::Features => self.features,
            Metric::Usability => self.usability,
            Metric::Value => self.value,
        }
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.overall)
    }
}

fn platform_seed(key: &str, seed: ScoreSeed) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    let stable = u64::from_le_bytes(bytes);
    match seed {
        ScoreSeed::Stable => stable,
        ScoreSeed::Entropy(e) => stable ^ e,
    }
}

/// Base score in `[70, 90)` for a platform key.
pub fn base_score(key: &str, seed: ScoreSeed) -> f64 {
    let mut rng = StdRng::seed_from_u64(platform_seed(key, seed));
    rng.gen_range(70.0..90.0)
}

/// Round, then clamp into `[1, 100]`.
fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(1.0, 100.0) as u8
}

/// Apply the fixed bonuses to `base`. Pure; [`score`] supplies the base.
pub fn score_with_base(platform: &Platform, base: f64) -> PerformanceScore {
    let mut reliability = base;
    let mut speed = base;
    let mut features = base;
    let mut usability = base;
    let mut value = base;

    let position = platform.market_position().to_lowercase();
    if position.contains("technical") || position.contains("leader") {
        reliability += 8.0;
        speed += 5.0;
    }
    if position.contains("affordable") || position.contains("accessible") {
        value += 10.0;
        usability += 5.0;
    }
    if platform.core_features.len() > 4 {
        features += 7.0;
    }
    if platform.spec("runtime_uptime").and_then(|v| v.as_text()) == Some("98%") {
        reliability += 5.0;
    }

    let overall = (reliability + speed + features + usability + value) / 5.0;

    PerformanceScore {
        key: platform.key.clone(),
        name: platform.name.clone(),
        reliability: clamp_score(reliability),
        speed: clamp_score(speed),
        features: clamp_score(features),
        usability: clamp_score(usability),
        value: clamp_score(value),
        overall: clamp_score(overall),
    }
}

pub fn score(platform: &Platform, seed: ScoreSeed) -> PerformanceScore {
    score_with_base(platform, base_score(&platform.key, seed))
}

pub fn scores(dataset: &Dataset, seed: ScoreSeed) -> Vec<PerformanceScore> {
    dataset.platforms.iter().map(|p| score(p, seed)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Overall,
    Reliability,
    Speed,
    Features,
    Usability,
    Value,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Reliability => "Reliability",
            Self::Speed => "Speed",
            Self::Features => "Features",
            Self::Usability => "Usability",
            Self::Value => "Value",
        }
    }
}

impl FromStr for Metric {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overall" => Ok(Self::Overall),
            "reliability" => Ok(Self::Reliability),
            "speed" => Ok(Self::Speed),
            "features" => Ok(Self::Features),
            "usability" => Ok(Self::Usability),
            "value" => Ok(Self::Value),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPoint {
    pub key: String,
    pub name: String,
    pub score: u8,
}

pub fn metric_series(scores: &[PerformanceScore], metric: Metric) -> Vec<MetricPoint> {
    scores
        .iter()
        .map(|s| MetricPoint {
            key: s.key.clone(),
            name: s.name.clone(),
            score: s.get(metric),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::Average,
            _ => Self::NeedsImprovement,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Average => write!(f, "Average"),
            Self::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaders {
    pub speed: String,
    pub reliability: String,
    pub overall: String,
}

/// Top platform per headline metric. Ties go to the later platform.
pub fn leaders(scores: &[PerformanceScore]) -> Option<Leaders> {
    let top = |metric: Metric| {
        scores
            .iter()
            .max_by_key(|s| s.get(metric))
            .map(|s| s.name.clone())
    };
    Some(Leaders {
        speed: top(Metric::Speed)?,
        reliability: top(Metric::Reliability)?,
        overall: top(Metric::Overall)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Spec, SpecValue};

    fn platform(position: &str, features: usize, uptime: Option<&str>) -> Platform {
        Platform {
            key: "p".into(),
            name: "P".into(),
            market_position: Some(position.into()),
            core_features: (0..features).map(|i| format!("f{i}")).collect(),
            technical_specs: uptime
                .map(|u| Spec {
                    key: "runtime_uptime".into(),
                    value: SpecValue::Text(u.into()),
                })
                .into_iter()
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn bonuses_apply() {
        let s = score_with_base(&platform("technical leader", 5, Some("98%")), 80.0);
        assert_eq!(s.reliability, 93);
        assert_eq!(s.speed, 85);
        assert_eq!(s.features, 87);
        assert_eq!(s.usability, 80);
        assert_eq!(s.value, 80);
        // (93 + 85 + 87 + 80 + 80) / 5 = 85
        assert_eq!(s.overall, 85);
    }

    #[test]
    fn affordable_bonus() {
        let s = score_with_base(&platform("Affordable and accessible", 2, None), 70.0);
        assert_eq!(s.value, 80);
        assert_eq!(s.usability, 75);
        assert_eq!(s.reliability, 70);
    }

    #[test]
    fn uptime_bonus_needs_exact_match() {
        let s = score_with_base(&platform("", 0, Some("98.0%")), 75.0);
        assert_eq!(s.reliability, 75);
    }

    #[test]
    fn clamps_high_values() {
        let s = score_with_base(&platform("technical leader", 9, Some("98%")), 89.9);
        assert_eq!(s.reliability, 100);
        assert!(s.overall <= 100);
    }

    #[test]
    fn stable_seed_is_deterministic() {
        assert_eq!(
            base_score("manus", ScoreSeed::Stable),
            base_score("manus", ScoreSeed::Stable)
        );
        let b = base_score("manus", ScoreSeed::Entropy(7));
        assert!((70.0..90.0).contains(&b));
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::from_score(90), Rating::Excellent);
        assert_eq!(Rating::from_score(89), Rating::Good);
        assert_eq!(Rating::from_score(70), Rating::Average);
        assert_eq!(Rating::from_score(69), Rating::NeedsImprovement);
    }

    #[test]
    fn leaders_prefer_later_on_tie() {
        let mut a = score_with_base(&platform("", 0, None), 80.0);
        a.name = "A".into();
        let mut b = a.clone();
        b.name = "B".into();
        let l = leaders(&[a, b]).unwrap();
        assert_eq!(l.overall, "B");
        assert!(leaders(&[]).is_none());
    }
}
