use serde::{Deserialize, Serialize};

/// Prefix the site is mounted under.
pub const DEFAULT_BASE_PATH: &str = "/ai_agents";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "id", rename_all = "lowercase")]
pub enum Route {
    Home,
    Comparison,
    Pricing,
    Features,
    Performance,
    News,
    Agent(String),
}

/// Navigation bar entries, in display order.
pub const NAV: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Compare", "/comparison"),
    ("Pricing", "/pricing"),
    ("Features", "/features"),
    ("Performance", "/performance"),
    ("Latest News", "/news"),
];

impl Route {
    /// Parse a site-relative path such as `/pricing` or `/agent/manus`.
    /// Query strings and fragments are ignored; a trailing slash is allowed.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_matches('/');
        let mut segments = trimmed.split('/');

        let route = match (segments.next(), segments.next()) {
            (Some(""), None) => Self::Home,
            (Some("comparison"), None) => Self::Comparison,
            (Some("pricing"), None) => Self::Pricing,
            (Some("features"), None) => Self::Features,
            (Some("performance"), None) => Self::Performance,
            (Some("news"), None) => Self::News,
            (Some("agent"), Some(id)) if !id.is_empty() => {
                // Undecodable ids stay raw so they reach the not-found view.
                let id = urlencoding::decode(id)
                    .map(|d| d.into_owned())
                    .unwrap_or_else(|_| id.to_string());
                Self::Agent(id)
            }
            _ => return None,
        };

        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }

    /// Like [`Route::parse`], first stripping `base` when the path starts with it.
    /// A base given without its leading slash is treated as rooted.
    pub fn parse_with_base(path: &str, base: &str) -> Option<Self> {
        let base = base.trim_matches('/');
        let rest = if base.is_empty() {
            path
        } else {
            let base = format!("/{base}");
            match path.strip_prefix(base.as_str()) {
                Some(r) if r.is_empty() || r.starts_with(['/', '?', '#']) => r,
                _ => path,
            }
        };
        Self::parse(rest)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Comparison => "/comparison".to_string(),
            Self::Pricing => "/pricing".to_string(),
            Self::Features => "/features".to_string(),
            Self::Performance => "/performance".to_string(),
            Self::News => "/news".to_string(),
            Self::Agent(id) => format!("/agent/{}", urlencoding::encode(id)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "AI Agents Market Overview",
            Self::Comparison => "Platform Comparison",
            Self::Pricing => "Pricing Comparison & Calculator",
            Self::Features => "Features Comparison Matrix",
            Self::Performance => "Performance Metrics & Benchmarks",
            Self::News => "Latest News & Updates",
            Self::Agent(_) => "Agent Profile",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pages() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/pricing/"), Some(Route::Pricing));
        assert_eq!(Route::parse("/news?cat=releases"), Some(Route::News));
        assert_eq!(Route::parse("/features#matrix"), Some(Route::Features));
    }

    #[test]
    fn parse_agent_decodes_id() {
        assert_eq!(
            Route::parse("/agent/relevance%20ai"),
            Some(Route::Agent("relevance ai".into()))
        );
        assert_eq!(Route::parse("/agent/"), None);
        assert_eq!(Route::parse("/agent/a/b"), None);
    }

    #[test]
    fn unknown_paths_are_none() {
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("/pricing/extra"), None);
    }

    #[test]
    fn base_path_is_stripped() {
        assert_eq!(
            Route::parse_with_base("/ai_agents/agent/manus", DEFAULT_BASE_PATH),
            Some(Route::Agent("manus".into()))
        );
        assert_eq!(Route::parse_with_base("/ai_agents", DEFAULT_BASE_PATH), Some(Route::Home));
        assert_eq!(Route::parse_with_base("/news", DEFAULT_BASE_PATH), Some(Route::News));
        assert_eq!(Route::parse_with_base("/ai_agentsx", DEFAULT_BASE_PATH), None);
    }

    #[test]
    fn undecodable_agent_id_stays_raw() {
        assert_eq!(Route::parse("/agent/%FF"), Some(Route::Agent("%FF".into())));
    }

    #[test]
    fn base_path_without_leading_slash() {
        assert_eq!(Route::parse_with_base("/ai_agents/news", "ai_agents"), Some(Route::News));
        assert_eq!(Route::parse_with_base("/ai_agents/", "ai_agents/"), Some(Route::Home));
    }

    #[test]
    fn path_round_trips_ids() {
        let r = Route::Agent("relevance ai".into());
        assert_eq!(r.path(), "/agent/relevance%20ai");
        assert_eq!(Route::parse(&r.path()), Some(r));
    }

    #[test]
    fn nav_paths_parse() {
        for (label, path) in NAV {
            assert!(Route::parse(path).is_some(), "{label}: {path} should parse");
        }
    }
}
