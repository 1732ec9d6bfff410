use agent_compare_core::dataset::{parse_dataset, Dataset};
use agent_compare_core::features::{self, FeatureCategory};
use serde_json::json;

fn fixture() -> Dataset {
    parse_dataset(&json!({
        "platforms": {
            "alpha": {
                "name": "Alpha",
                "core_features": ["Web Browsing", "Code execution"],
                "strengths": ["Fast research"],
                "technical_specs": {"runtime_uptime": "98%", "api_access": "REST"}
            },
            "beta": {
                "name": "Beta",
                "core_features": ["Code execution", "Phone calls"],
                "technical_specs": {"supported_formats": ["PDF"]}
            }
        }
    }))
    .unwrap()
}

#[test]
fn catalog_is_deduplicated_and_sorted() {
    let ds = fixture();
    let names: Vec<String> = features::catalog(&ds).into_iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        [
            "Code execution",
            "Fast research",
            "Phone calls",
            "Web Browsing",
            "api access",
            "runtime uptime",
            "supported formats",
        ]
    );
}

#[test]
fn catalog_records_categories() {
    let ds = fixture();
    let entries = features::catalog(&ds);
    let uptime = entries.iter().find(|e| e.name == "runtime uptime").unwrap();
    assert!(uptime.technical && !uptime.core);
    let core: Vec<&str> = features::search(&entries, "", FeatureCategory::Core)
        .into_iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(core, ["Code execution", "Phone calls", "Web Browsing"]);
}

#[test]
fn substring_of_own_feature_matches() {
    let ds = fixture();
    let alpha = ds.get("alpha").unwrap();
    for candidate in ["browsing", "WEB", "code exec", "runtime_uptime", "uptime", "research"] {
        assert!(features::has_feature(alpha, candidate), "{candidate}");
    }
}

#[test]
fn containing_own_feature_matches() {
    let ds = fixture();
    let alpha = ds.get("alpha").unwrap();
    assert!(features::has_feature(alpha, "secure web browsing at scale"));
    assert!(!features::has_feature(alpha, "phone calls"));
}

#[test]
fn empty_candidate_matches_platforms_with_features() {
    let ds = fixture();
    assert!(features::has_feature(ds.get("beta").unwrap(), ""));
    let bare = agent_compare_core::Platform::default();
    assert!(!features::has_feature(&bare, ""));
}

#[test]
fn empty_search_returns_full_list() {
    let ds = fixture();
    let all = features::catalog(&ds);
    let m = features::matrix(&ds, "", FeatureCategory::All);
    assert_eq!(m.rows.len(), all.len());
    assert_eq!(m.columns.len(), 2);
}

#[test]
fn absent_term_returns_no_rows() {
    let ds = fixture();
    let m = features::matrix(&ds, "quantum teleportation", FeatureCategory::All);
    assert!(m.rows.is_empty());
}

#[test]
fn matrix_cells_follow_predicate() {
    let ds = fixture();
    let m = features::matrix(&ds, "phone", FeatureCategory::All);
    assert_eq!(m.rows.len(), 1);
    assert_eq!(m.rows[0].cells, [false, true]);
    assert_eq!(m.coverage(), [0, 1]);
}

#[test]
fn highlights_truncate() {
    let ds = agent_compare_core::dataset::load_bundled().unwrap();
    for h in features::highlights(&ds) {
        assert!(h.core_features.len() <= 5, "{}", h.name);
        assert!(h.strengths.len() <= 3, "{}", h.name);
    }
}
