use serde::Serialize;
use wasm_bindgen::prelude::*;

use agent_compare_core::comparison::{self, ComparisonMode, Selection};
use agent_compare_core::dataset::{self, Dataset};
use agent_compare_core::features::{self, FeatureCategory};
use agent_compare_core::home;
use agent_compare_core::news::{self, CategoryFilter};
use agent_compare_core::pricing::{self, UsageLevel};
use agent_compare_core::profile;
use agent_compare_core::route::{Route, NAV};
use agent_compare_core::scoring::{self, Metric, ScoreSeed};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every export takes the raw data file text as fetched by the page.
fn parse(data: &str) -> Option<Dataset> {
    Dataset::from_json_str(data).ok()
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// JS numbers can't carry a full u64, so a fresh draw arrives as f64.
fn seed_from(seed: Option<f64>) -> ScoreSeed {
    match seed {
        Some(s) if s.is_finite() => ScoreSeed::Entropy(s.abs() as u64),
        _ => ScoreSeed::Stable,
    }
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

/// The data file compiled into the module, for offline use.
#[wasm_bindgen]
pub fn bundled_data() -> String {
    dataset::bundled_json().to_string()
}

/// Parse and validate the data file. Returns the normalized dataset or null.
#[wasm_bindgen]
pub fn load_dataset(data: &str) -> JsValue {
    match parse(data) {
        Some(ds) => to_js(&ds),
        None => JsValue::NULL,
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Resolve a location path (with or without the site base) to a page.
/// Returns `{page, id?}` or null for an unknown path.
#[wasm_bindgen]
pub fn resolve_route(path: &str, base: &str) -> JsValue {
    match Route::parse_with_base(path, base) {
        Some(r) => to_js(&r),
        None => JsValue::NULL,
    }
}

#[derive(Serialize)]
struct NavEntry {
    label: &'static str,
    path: &'static str,
}

#[wasm_bindgen]
pub fn nav_entries() -> JsValue {
    let entries: Vec<NavEntry> = NAV
        .iter()
        .map(|&(label, path)| NavEntry { label, path })
        .collect();
    to_js(&entries)
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub fn home_summary(data: &str) -> JsValue {
    match parse(data) {
        Some(ds) => to_js(&home::summary(&ds)),
        None => JsValue::NULL,
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Selected keys: `keys` if it is a non-empty array, else the default
/// first three.
fn selection(ds: &Dataset, keys: JsValue) -> Option<Selection> {
    let keys: Vec<String> = serde_wasm_bindgen::from_value(keys).unwrap_or_default();
    if keys.is_empty() {
        Some(Selection::initial(ds))
    } else {
        Selection::from_keys(ds, &keys).ok()
    }
}

/// Comparison view for `mode` (overview, pricing, features, technical).
#[wasm_bindgen]
pub fn comparison_view(data: &str, keys: JsValue, mode: &str) -> JsValue {
    let Some(ds) = parse(data) else {
        return JsValue::NULL;
    };
    let Ok(mode) = mode.parse::<ComparisonMode>() else {
        return JsValue::NULL;
    };
    let Some(sel) = selection(&ds, keys) else {
        return JsValue::NULL;
    };
    match mode {
        ComparisonMode::Overview => to_js(&comparison::overview(&ds, &sel)),
        ComparisonMode::Technical => to_js(&comparison::technical(&ds, &sel)),
        ComparisonMode::Features => to_js(&comparison::feature_grid(&ds, &sel)),
        ComparisonMode::Pricing => to_js(&comparison::pricing(&ds, &sel)),
    }
}

/// Toggle `key` in the selection and return the new key list.
#[wasm_bindgen]
pub fn toggle_selection(data: &str, keys: JsValue, key: &str) -> JsValue {
    let Some(ds) = parse(data) else {
        return JsValue::NULL;
    };
    let keys: Vec<String> = serde_wasm_bindgen::from_value(keys).unwrap_or_default();
    let Ok(mut sel) = Selection::from_keys(&ds, &keys) else {
        return JsValue::NULL;
    };
    if ds.get(key).is_some() {
        sel.toggle(key);
    }
    to_js(&sel.keys().to_vec())
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Numeric value of a price string such as "$39/month", or undefined.
#[wasm_bindgen]
pub fn parse_price(price: &str) -> Option<f64> {
    pricing::parse_price(price)
}

#[wasm_bindgen]
pub fn price_chart(data: &str) -> JsValue {
    match parse(data) {
        Some(ds) => to_js(&pricing::price_chart(&ds)),
        None => JsValue::NULL,
    }
}

/// Recommended plan per platform for `usage` (low, medium, high).
#[wasm_bindgen]
pub fn recommendations(data: &str, usage: &str) -> JsValue {
    let Ok(usage) = usage.parse::<UsageLevel>() else {
        return JsValue::NULL;
    };
    match parse(data) {
        Some(ds) => to_js(&pricing::recommendations(&ds, usage)),
        None => JsValue::NULL,
    }
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub fn feature_matrix(data: &str, search: &str, category: &str) -> JsValue {
    let Ok(category) = category.parse::<FeatureCategory>() else {
        return JsValue::NULL;
    };
    match parse(data) {
        Some(ds) => to_js(&features::matrix(&ds, search, category)),
        None => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn feature_highlights(data: &str) -> JsValue {
    match parse(data) {
        Some(ds) => to_js(&features::highlights(&ds)),
        None => JsValue::NULL,
    }
}

// ---------------------------------------------------------------------------
// Performance
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PerformanceView {
    scores: Vec<scoring::PerformanceScore>,
    series: Vec<scoring::MetricPoint>,
    leaders: Option<scoring::Leaders>,
}

/// Synthetic scores for every platform plus the series for `metric`.
/// Pass a `seed` (e.g. `Math.random() * 2**53`) for a fresh draw;
/// omit it for scores that stay put across reloads.
#[wasm_bindgen]
pub fn performance_scores(data: &str, metric: &str, seed: Option<f64>) -> JsValue {
    let Ok(metric) = metric.parse::<Metric>() else {
        return JsValue::NULL;
    };
    let Some(ds) = parse(data) else {
        return JsValue::NULL;
    };
    let scores = scoring::scores(&ds, seed_from(seed));
    let view = PerformanceView {
        series: scoring::metric_series(&scores, metric),
        leaders: scoring::leaders(&scores),
        scores,
    };
    to_js(&view)
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// News items, filtered by `category` ("all", "acquisitions", "updates", "releases").
#[wasm_bindgen]
pub fn news_feed(data: &str, category: &str) -> JsValue {
    let Ok(filter) = category.parse::<CategoryFilter>() else {
        return JsValue::NULL;
    };
    let Some(ds) = parse(data) else {
        return JsValue::NULL;
    };
    let items = news::feed(&ds);
    to_js(&news::filter(&items, filter))
}

// ---------------------------------------------------------------------------
// Agent profile
// ---------------------------------------------------------------------------

/// `{state: "found", ...}` or `{state: "not_found", id, back}`.
#[wasm_bindgen]
pub fn agent_profile(data: &str, id: &str, seed: Option<f64>) -> JsValue {
    match parse(data) {
        Some(ds) => to_js(&profile::lookup(&ds, id, seed_from(seed))),
        None => JsValue::NULL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_defaults_to_stable() {
        assert_eq!(seed_from(None), ScoreSeed::Stable);
        assert_eq!(seed_from(Some(f64::NAN)), ScoreSeed::Stable);
        assert_eq!(seed_from(Some(42.9)), ScoreSeed::Entropy(42));
    }

    #[test]
    fn bundled_data_parses() {
        let ds = parse(&bundled_data()).unwrap();
        assert!(!ds.is_empty());
        assert!(parse("not json").is_none());
    }
}
