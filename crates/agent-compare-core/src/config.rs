// Settings come from `~/.config/agent-compare/config.toml`, then
// `AGENT_COMPARE_*` environment variables, then command-line flags (applied
// by the CLI on top of what `Settings::load` returns).
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dataset::DATA_FILE;
use crate::error::{AcError, Result};
use crate::route::DEFAULT_BASE_PATH;
use crate::scoring::ScoreSeed;

pub const ENV_DATA: &str = "AGENT_COMPARE_DATA";
pub const ENV_BASE_URL: &str = "AGENT_COMPARE_BASE_URL";
pub const ENV_BASE_PATH: &str = "AGENT_COMPARE_BASE_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path or URL of the data file. Wins over `base_url`.
    pub data: Option<String>,
    /// Site root; the data file is read from `{base_url}/data/...`.
    pub base_url: Option<String>,
    /// Route prefix stripped before matching a route.
    pub base_path: String,
    /// Seed scores from platform keys instead of fresh entropy.
    pub stable_scores: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: None,
            base_url: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
            stable_scores: true,
        }
    }
}

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
    /// Synced copy in the cache directory, else the bundled copy.
    Default,
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => write!(f, "{u}"),
            Self::Default => write!(f, "cached or bundled data"),
        }
    }
}

impl Settings {
    /// Config file (if present) overlaid with environment variables.
    pub fn load() -> Result<Self> {
        let mut settings = match Self::config_path() {
            Some(path) if path.exists() => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| AcError::Io(format!("failed to read {}: {e}", path.display())))?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml(&text)?
            }
            _ => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AcError::Config(e.to_string()))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agent-compare").join("config.toml"))
    }

    /// Overlay values from an environment lookup. Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get(ENV_DATA) {
            self.data = Some(v);
        }
        if let Some(v) = get(ENV_BASE_URL) {
            self.base_url = Some(v);
        }
        if let Some(v) = get(ENV_BASE_PATH) {
            self.base_path = v;
        }
    }

    pub fn source(&self) -> DataSource {
        if let Some(data) = &self.data {
            return DataSource::parse(data);
        }
        match &self.base_url {
            Some(base) => DataSource::Url(data_url(base)),
            None => DataSource::Default,
        }
    }

    /// URL `sync` downloads from, if any is configured.
    pub fn sync_url(&self) -> Option<String> {
        match self.source() {
            DataSource::Url(u) => Some(u),
            _ => None,
        }
    }

    pub fn score_seed(&self, entropy: impl FnOnce() -> u64) -> ScoreSeed {
        if self.stable_scores {
            ScoreSeed::Stable
        } else {
            ScoreSeed::Entropy(entropy())
        }
    }
}

/// `https://site/ai_agents` -> `https://site/ai_agents/data/ai_agents_structured_data.json`.
pub fn data_url(base: &str) -> String {
    format!("{}/{DATA_FILE}", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.base_path, "/ai_agents");
        assert!(s.stable_scores);
        assert_eq!(s.source(), DataSource::Default);
    }

    #[test]
    fn toml_partial_keeps_defaults() {
        let s = Settings::from_toml("base_url = \"https://example.com/ai_agents/\"").unwrap();
        assert_eq!(s.base_path, "/ai_agents");
        assert_eq!(
            s.source(),
            DataSource::Url("https://example.com/ai_agents/data/ai_agents_structured_data.json".into())
        );
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = Settings::from_toml("stable_scores = \"maybe\"").unwrap_err();
        assert!(matches!(err, AcError::Config(_)));
    }

    #[test]
    fn env_overrides_file() {
        let mut s = Settings::from_toml("data = \"/srv/a.json\"").unwrap();
        s.apply_env(|k| match k {
            ENV_DATA => Some("https://cdn.example.com/data.json".into()),
            ENV_BASE_PATH => Some("".into()),
            _ => None,
        });
        assert_eq!(s.source(), DataSource::Url("https://cdn.example.com/data.json".into()));
        assert_eq!(s.base_path, "/ai_agents");
    }

    #[test]
    fn data_wins_over_base_url() {
        let s = Settings {
            data: Some("local.json".into()),
            base_url: Some("https://example.com".into()),
            ..Default::default()
        };
        assert_eq!(s.source(), DataSource::File("local.json".into()));
        assert!(s.sync_url().is_none());
    }

    #[test]
    fn unstable_scores_use_entropy() {
        let s = Settings {
            stable_scores: false,
            ..Default::default()
        };
        assert_eq!(s.score_seed(|| 42), ScoreSeed::Entropy(42));
        assert_eq!(Settings::default().score_seed(|| 42), ScoreSeed::Stable);
    }
}
