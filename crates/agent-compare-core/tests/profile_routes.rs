use agent_compare_core::comparison::{self, Cell, ComparisonMode, Selection};
use agent_compare_core::dataset::load_bundled;
use agent_compare_core::home;
use agent_compare_core::profile::{self, Lookup};
use agent_compare_core::route::{Route, DEFAULT_BASE_PATH};
use agent_compare_core::scoring::ScoreSeed;

#[test]
fn unknown_agent_is_not_found() {
    let ds = load_bundled().unwrap();
    let route = Route::parse("/agent/unknown-id").unwrap();
    let Route::Agent(id) = route else {
        panic!("expected agent route");
    };
    match profile::lookup(&ds, &id, ScoreSeed::Stable) {
        Lookup::NotFound { id, back } => {
            assert_eq!(id, "unknown-id");
            assert_eq!(back, "/comparison");
        }
        Lookup::Found(_) => panic!("unknown-id should not resolve"),
    }
}

#[test]
fn malformed_agent_id_renders_not_found() {
    let ds = load_bundled().unwrap();
    let Some(Route::Agent(id)) = Route::parse("/agent/%FF") else {
        panic!("/agent/%FF should still be an agent route");
    };
    assert!(matches!(
        profile::lookup(&ds, &id, ScoreSeed::Stable),
        Lookup::NotFound { ref back, .. } if back == "/comparison"
    ));
}

#[test]
fn known_agent_resolves_with_base_path() {
    let ds = load_bundled().unwrap();
    let route = Route::parse_with_base("/ai_agents/agent/manus", DEFAULT_BASE_PATH).unwrap();
    assert_eq!(route, Route::Agent("manus".into()));
    match profile::lookup(&ds, "manus", ScoreSeed::Stable) {
        Lookup::Found(p) => {
            assert_eq!(p.platform.name, "Manus");
            assert_eq!(p.score.key, "manus");
            assert!(p.price.is_some());
        }
        Lookup::NotFound { .. } => panic!("manus should resolve"),
    }
}

#[test]
fn every_bundled_platform_has_a_profile_route() {
    let ds = load_bundled().unwrap();
    for key in ds.keys() {
        let route = Route::Agent(key.to_string());
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}

#[test]
fn comparison_modes_on_bundled_data() {
    let ds = load_bundled().unwrap();
    let sel = Selection::initial(&ds);
    assert_eq!(sel.keys().len(), 3);

    let overview = comparison::overview(&ds, &sel);
    assert_eq!(overview.columns.len(), 3);
    assert_eq!(overview.rows.len(), 7);

    let technical = comparison::technical(&ds, &sel);
    let uptime = &technical.rows[0];
    assert_eq!(uptime.label, "runtime uptime");
    assert_eq!(uptime.cells[0], Cell::Text("98%".into()));

    let grid = comparison::feature_grid(&ds, &sel);
    assert!(grid.rows.iter().all(|r| r.cells.iter().any(|c| *c == Cell::Check(true))));

    let pricing = comparison::pricing(&ds, &sel);
    assert!(pricing.iter().all(|p| p.tiers.iter().all(|t| t.features.len() <= 2)));

    assert_eq!("technical".parse::<ComparisonMode>(), Ok(ComparisonMode::Technical));
}

#[test]
fn home_summary_counts_platforms() {
    let ds = load_bundled().unwrap();
    let s = home::summary(&ds);
    assert_eq!(s.platform_count, ds.len());
    assert_eq!(s.cards.len(), ds.len());
    assert_eq!(s.feature_leaders.len(), 3);
    assert!(s.cards.iter().all(|c| c.top_features.len() <= 2));
}

#[test]
fn nameless_platform_is_dropped() {
    let ds = agent_compare_core::dataset::parse_dataset(&serde_json::json!({
        "platforms": {
            "ghost": {"tagline": "no name here"},
            "real": {"name": "Real"}
        }
    }))
    .unwrap();
    let keys: Vec<&str> = ds.keys().collect();
    assert_eq!(keys, ["real"]);
    assert!(ds.get("real").unwrap().pricing.is_empty());
}
