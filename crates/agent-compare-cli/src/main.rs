use std::sync::Arc;

use agent_compare_core::{
    comparison::{self, Cell as CmpCell, ComparisonMode, Selection},
    config::Settings,
    dataset::Dataset,
    features::{self, FeatureCategory},
    home,
    loader::Loader,
    news::{self, CategoryFilter, NewsCategory},
    pricing::{self, UsageLevel},
    profile::{self, Lookup, ProfileTab, NOT_FOUND_MESSAGE},
    route::{Route, NAV},
    scoring::{self, Metric, PerformanceScore, Rating, ScoreSeed},
    sync,
};
use clap::{Parser, Subcommand};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use serde::Serialize;

// ── Palette ──────────────────────────────────────────────────────────

fn s_header() -> Style { Style::new().color256(252).bold() }  // bright gray, bold
fn s_dim() -> Style    { Style::new().color256(248) }         // light gray
fn s_tree() -> Style   { Style::new().color256(245) }         // mid gray
fn s_hint() -> Style   { Style::new().color256(243) }         // soft gray
fn s_good() -> Style   { Style::new().color256(114) }         // green
fn s_warm() -> Style   { Style::new().color256(214) }         // amber
fn s_err() -> Style    { Style::new().color256(167) }         // red
fn s_price() -> Style  { Style::new().color256(109) }         // teal
fn s_bold() -> Style   { Style::new().bold() }
fn s_label() -> Style  { Style::new().color256(146) }         // muted lavender
fn s_accent() -> Style { Style::new().color256(139) }         // mauve

const C_HEAD: Color = Color::AnsiValue(243);
const C_TEXT: Color = Color::AnsiValue(252);
const C_DIM: Color = Color::AnsiValue(248);
const C_PRICE: Color = Color::AnsiValue(109);
const C_GOOD: Color = Color::AnsiValue(114);
const C_BAD: Color = Color::AnsiValue(167);
const C_MISSING: Color = Color::AnsiValue(245);

const DASH: &str = "\u{2500}";

fn sep(width: usize) -> String {
    s_tree().apply_to(DASH.repeat(width)).to_string()
}

fn table_with_header(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        header
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = if i == 0 { format!("  {h}") } else { h.to_string() };
                Cell::new(h).fg(C_HEAD)
            })
            .collect::<Vec<_>>(),
    );
    table
}

fn fmt_price(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("${:.0}", v)
    } else {
        format!("${:.2}", v)
    }
}

fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let n = ((value / max) * width as f64).round() as usize;
    "\u{2588}".repeat(n.min(width))
}

fn rating_style(r: Rating) -> Style {
    match r {
        Rating::Excellent => s_good(),
        Rating::Good => s_price(),
        Rating::Average => s_warm(),
        Rating::NeedsImprovement => s_err(),
    }
}

fn score_color(score: u8) -> Color {
    match Rating::from_score(score) {
        Rating::Excellent => C_GOOD,
        Rating::Good => C_PRICE,
        Rating::Average => Color::AnsiValue(214),
        Rating::NeedsImprovement => C_BAD,
    }
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or(DASH)
}

// ── CLI Args ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "agent-compare",
    about = "Compare AI agent platforms: pricing tiers, features, performance and news",
    version,
    after_help = "examples:\n  \
        agent-compare                              (market overview)\n  \
        agent-compare compare manus lindy devin\n  \
        agent-compare compare --mode technical\n  \
        agent-compare pricing --usage high\n  \
        agent-compare features --search browsing\n  \
        agent-compare performance --metric speed\n  \
        agent-compare news --category releases\n  \
        agent-compare agent manus --tab pricing\n  \
        agent-compare open /ai_agents/agent/lindy\n  \
        agent-compare --data ./data.json pricing"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data file path or URL (overrides config and AGENT_COMPARE_DATA).
    #[arg(long, global = true)]
    data: Option<String>,

    /// Print the page projection as JSON.
    #[arg(long, short, global = true)]
    json: bool,

    /// Draw a fresh random base for synthetic scores.
    #[arg(long, global = true)]
    shuffle: bool,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Market overview (the default page).
    Home,
    /// Side-by-side comparison of up to four platforms.
    Compare {
        /// Platform keys; defaults to the first three.
        platforms: Vec<String>,
        #[arg(long, short, default_value = "overview")]
        mode: ComparisonMode,
    },
    /// Price chart, usage-based recommendations and tier tables.
    Pricing {
        #[arg(long, short, default_value = "medium")]
        usage: UsageLevel,
    },
    /// Features matrix.
    Features {
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, short, default_value = "all")]
        category: FeatureCategory,
    },
    /// Synthetic performance scores.
    Performance {
        #[arg(long, short, default_value = "overall")]
        metric: Metric,
    },
    /// Platform updates and market trends.
    News {
        #[arg(long, short, default_value = "all")]
        category: CategoryFilter,
    },
    /// One platform's profile.
    Agent {
        id: String,
        #[arg(long, short, default_value = "overview")]
        tab: ProfileTab,
    },
    /// Render the page a site route points to, e.g. /agent/manus.
    Open { route: String },
    /// Show the navigation routes.
    Routes,
    /// Download the data file from the configured URL into the cache.
    Sync,
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGENT_COMPARE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut settings = Settings::load()?;
    if let Some(data) = &cli.data {
        settings.data = Some(data.clone());
    }
    if cli.shuffle {
        settings.stable_scores = false;
    }
    let seed = settings.score_seed(rand::random);

    let page = match cli.command {
        Some(Commands::Sync) => return cmd_sync(&settings).await,
        Some(Commands::Routes) => {
            print_routes(&settings);
            return Ok(());
        }
        Some(Commands::Open { ref route }) => {
            match Route::parse_with_base(route, &settings.base_path) {
                Some(r) => Page::from_route(r),
                None => {
                    eprintln!("{}", s_err().apply_to(format!("error: no page at '{route}'")));
                    eprintln!("{}", s_dim().apply_to("  agent-compare routes   lists the pages"));
                    return Ok(());
                }
            }
        }
        Some(Commands::Home) | None => Page::Home,
        Some(Commands::Compare { platforms, mode }) => Page::Compare { platforms, mode },
        Some(Commands::Pricing { usage }) => Page::Pricing { usage },
        Some(Commands::Features { search, category }) => Page::Features { search, category },
        Some(Commands::Performance { metric }) => Page::Performance { metric },
        Some(Commands::News { category }) => Page::News { category },
        Some(Commands::Agent { id, tab }) => Page::Agent { id, tab },
    };

    let loader = Loader::new(settings.source())?;
    tracing::debug!(source = %loader.source(), ?seed, "rendering page");
    let ds = load(&loader).await?;

    let opts = Opts {
        json: cli.json,
        seed,
    };
    render(&ds, page, &opts)
}

struct Opts {
    json: bool,
    seed: ScoreSeed,
}

/// A page view with its user-selected options.
enum Page {
    Home,
    Compare { platforms: Vec<String>, mode: ComparisonMode },
    Pricing { usage: UsageLevel },
    Features { search: String, category: FeatureCategory },
    Performance { metric: Metric },
    News { category: CategoryFilter },
    Agent { id: String, tab: ProfileTab },
}

impl Page {
    /// Route targets open with each page's default options.
    fn from_route(route: Route) -> Self {
        match route {
            Route::Home => Self::Home,
            Route::Comparison => Self::Compare {
                platforms: Vec::new(),
                mode: ComparisonMode::Overview,
            },
            Route::Pricing => Self::Pricing {
                usage: UsageLevel::Medium,
            },
            Route::Features => Self::Features {
                search: String::new(),
                category: FeatureCategory::All,
            },
            Route::Performance => Self::Performance {
                metric: Metric::Overall,
            },
            Route::News => Self::News {
                category: CategoryFilter::default(),
            },
            Route::Agent(id) => Self::Agent {
                id,
                tab: ProfileTab::Overview,
            },
        }
    }
}

async fn load(loader: &Loader) -> anyhow::Result<Arc<Dataset>> {
    let term = Term::stderr();
    let spinner = term.is_term();
    if spinner {
        term.write_line(&format!("{}", s_dim().apply_to("loading...")))?;
    }
    let result = loader.dataset().await;
    if spinner {
        term.clear_last_lines(1)?;
    }

    match result {
        Ok(ds) => Ok(ds),
        Err(e) => {
            eprintln!(
                "{}",
                s_err().apply_to("error: failed to load data. Please try again later.")
            );
            eprintln!("{}", s_dim().apply_to(format!("  source: {}", loader.source())));
            Err(e.into())
        }
    }
}

fn render(ds: &Dataset, page: Page, opts: &Opts) -> anyhow::Result<()> {
    match page {
        Page::Home => cmd_home(ds, opts),
        Page::Compare { platforms, mode } => cmd_compare(ds, &platforms, mode, opts),
        Page::Pricing { usage } => cmd_pricing(ds, usage, opts),
        Page::Features { search, category } => cmd_features(ds, &search, category, opts),
        Page::Performance { metric } => cmd_performance(ds, metric, opts),
        Page::News { category } => cmd_news(ds, category, opts),
        Page::Agent { id, tab } => cmd_agent(ds, &id, tab, opts),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_title(route: &Route, subtitle: &str) {
    println!();
    println!("{}  {}", s_header().apply_to(route.title()), s_hint().apply_to(route.path()));
    if !subtitle.is_empty() {
        println!("{}", s_dim().apply_to(subtitle));
    }
    println!("{}", sep(64));
}

// ── Routes ───────────────────────────────────────────────────────────

fn print_routes(settings: &Settings) {
    let base = settings.base_path.trim_end_matches('/');
    println!();
    println!("{}", s_header().apply_to("pages"));
    println!("{}", sep(64));
    for (label, path) in NAV {
        println!(
            "  {:<14} {}",
            s_bold().apply_to(label),
            s_dim().apply_to(format!("{base}{path}"))
        );
    }
    println!(
        "  {:<14} {}",
        s_bold().apply_to("Agent Profile"),
        s_dim().apply_to(format!("{base}/agent/{{id}}"))
    );
    println!("{}", sep(64));
    println!("{}", s_hint().apply_to("  agent-compare open <route>   renders a page"));
    println!();
}

// ── Home ─────────────────────────────────────────────────────────────

fn cmd_home(ds: &Dataset, opts: &Opts) -> anyhow::Result<()> {
    let summary = home::summary(ds);
    if opts.json {
        return print_json(&summary);
    }

    let mut facts = vec![format!("{} platforms", summary.platform_count)];
    if let Some(n) = summary.sources_verified {
        facts.push(format!("{n} sources verified"));
    }
    if let Some(date) = &summary.report_date {
        facts.push(format!("updated {date}"));
    }
    print_title(&Route::Home, &facts.join("  \u{00b7}  "));

    let trends = &summary.pricing_trends;
    println!("  {}", s_label().apply_to("pricing leaders"));
    for (label, value) in [
        ("Most affordable", &trends.most_affordable),
        ("Best free tier", &trends.best_free_tier),
        ("Enterprise leader", &trends.enterprise_leader),
    ] {
        println!("    {:<20} {}", s_dim().apply_to(label), s_price().apply_to(opt(value)));
    }
    if !summary.feature_leaders.is_empty() {
        println!("  {}", s_label().apply_to("feature leaders"));
        for (label, platform) in &summary.feature_leaders {
            println!("    {:<20} {}", s_dim().apply_to(label), s_good().apply_to(platform));
        }
    }
    println!();

    let mut table = table_with_header(&["Key", "Platform", "Position", "Headquarters", "Highlights"]);
    for c in &summary.cards {
        table.add_row(vec![
            Cell::new(format!("  {}", c.key)).fg(C_DIM),
            Cell::new(&c.name).fg(C_TEXT),
            Cell::new(opt(&c.market_position)).fg(Color::AnsiValue(146)),
            Cell::new(opt(&c.headquarters)).fg(C_DIM),
            Cell::new(c.top_features.join("; ")).fg(C_DIM),
        ]);
    }
    println!("{table}");
    println!("{}", sep(64));
    println!(
        "{}",
        s_hint().apply_to("  agent-compare agent <key> for details   agent-compare routes for pages")
    );
    println!();
    Ok(())
}

// ── Compare ──────────────────────────────────────────────────────────

fn cmp_cell(c: &CmpCell) -> Cell {
    match c {
        CmpCell::Text(s) => Cell::new(s).fg(C_TEXT),
        CmpCell::Check(true) => Cell::new("\u{2713}").fg(C_GOOD),
        CmpCell::Check(false) => Cell::new("\u{2717}").fg(C_BAD),
        CmpCell::Missing => Cell::new(DASH).fg(C_MISSING),
    }
}

fn cmd_compare(
    ds: &Dataset,
    platforms: &[String],
    mode: ComparisonMode,
    opts: &Opts,
) -> anyhow::Result<()> {
    let selection = if platforms.is_empty() {
        Selection::initial(ds)
    } else {
        Selection::from_keys(ds, platforms)?
    };
    if platforms.len() > comparison::MAX_SELECTED {
        eprintln!(
            "{}",
            s_warm().apply_to(format!(
                "note: comparing the first {} platforms",
                comparison::MAX_SELECTED
            ))
        );
    }

    if opts.json {
        return match mode {
            ComparisonMode::Overview => print_json(&comparison::overview(ds, &selection)),
            ComparisonMode::Technical => print_json(&comparison::technical(ds, &selection)),
            ComparisonMode::Features => print_json(&comparison::feature_grid(ds, &selection)),
            ComparisonMode::Pricing => print_json(&comparison::pricing(ds, &selection)),
        };
    }

    print_title(&Route::Comparison, &format!("mode: {mode:?}").to_lowercase());

    if selection.is_empty() {
        println!("  {}", s_dim().apply_to("no platforms selected"));
        println!();
        return Ok(());
    }

    if mode == ComparisonMode::Pricing {
        for p in comparison::pricing(ds, &selection) {
            println!();
            println!("  {}", s_bold().apply_to(format!("{} pricing", p.name)));
            let mut table = table_with_header(&["Tier", "Price", "Includes"]);
            for t in &p.tiers {
                table.add_row(vec![
                    Cell::new(format!("  {}", t.name)).fg(C_TEXT),
                    Cell::new(&t.price).fg(C_PRICE),
                    Cell::new(t.features.join("; ")).fg(C_DIM),
                ]);
            }
            println!("{table}");
        }
        println!();
        return Ok(());
    }

    let grid = match mode {
        ComparisonMode::Overview => comparison::overview(ds, &selection),
        ComparisonMode::Technical => comparison::technical(ds, &selection),
        _ => comparison::feature_grid(ds, &selection),
    };

    let mut header: Vec<&str> = vec![if mode == ComparisonMode::Features { "Feature" } else { "Field" }];
    header.extend(grid.columns.iter().map(String::as_str));
    let mut table = table_with_header(&header);
    for row in &grid.rows {
        let mut cells = vec![Cell::new(format!("  {}", row.label)).fg(Color::AnsiValue(146))];
        cells.extend(row.cells.iter().map(cmp_cell));
        table.add_row(cells);
    }
    println!("{table}");
    println!("{}", sep(64));
    println!(
        "{}",
        s_hint().apply_to(format!(
            "  {} of max {} selected   --mode overview|pricing|features|technical",
            selection.keys().len(),
            comparison::MAX_SELECTED
        ))
    );
    println!();
    Ok(())
}

// ── Pricing ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PricingPage<'a> {
    usage: UsageLevel,
    chart: Vec<pricing::PricePoint>,
    recommendations: Vec<pricing::Recommendation>,
    pricing_trends: &'a agent_compare_core::dataset::PricingTrends,
}

fn cmd_pricing(ds: &Dataset, usage: UsageLevel, opts: &Opts) -> anyhow::Result<()> {
    let chart = pricing::price_chart(ds);
    let recs = pricing::recommendations(ds, usage);

    if opts.json {
        return print_json(&PricingPage {
            usage,
            chart,
            recommendations: recs,
            pricing_trends: &ds.market_analysis.pricing_trends,
        });
    }

    print_title(&Route::Pricing, "starting and mid-tier prices per month");

    let max = chart.iter().map(|p| p.mid_tier).fold(0.0_f64, f64::max);
    let mut table = table_with_header(&["Platform", "Starting", "Mid-tier", ""]);
    for p in &chart {
        table.add_row(vec![
            Cell::new(format!("  {}", p.name)).fg(C_TEXT),
            Cell::new(fmt_price(p.starting)).fg(C_PRICE),
            Cell::new(fmt_price(p.mid_tier)).fg(C_PRICE),
            Cell::new(bar(p.mid_tier, max, 24)).fg(Color::AnsiValue(67)),
        ]);
    }
    println!("{table}");

    let custom_only: Vec<&str> = ds
        .platforms
        .iter()
        .filter(|p| !chart.iter().any(|c| c.key == p.key))
        .map(|p| p.name.as_str())
        .collect();
    if !custom_only.is_empty() {
        println!(
            "  {}",
            s_hint().apply_to(format!("no listed price: {}", custom_only.join(", ")))
        );
    }

    println!();
    println!(
        "  {}",
        s_header().apply_to(format!("recommended plans for {} usage", usage.label().to_lowercase()))
    );
    let mut table = table_with_header(&["Platform", "Plan", "Price", "Credits", "Includes"]);
    for (i, r) in recs.iter().enumerate() {
        let marker = if i == 0 { "\u{2605} " } else { "  " };
        table.add_row(vec![
            Cell::new(format!("{marker}{}", r.platform)).fg(C_TEXT),
            Cell::new(r.tier.replace('_', " ")).fg(Color::AnsiValue(146)),
            Cell::new(&r.price).fg(C_PRICE),
            Cell::new(&r.credits).fg(C_DIM),
            Cell::new(r.features.iter().take(3).cloned().collect::<Vec<_>>().join("; ")).fg(C_DIM),
        ]);
    }
    println!("{table}");

    let trends = &ds.market_analysis.pricing_trends;
    println!();
    println!("  {}", s_label().apply_to("pricing leaders"));
    for (label, value) in [
        ("Most affordable", &trends.most_affordable),
        ("Best free tier", &trends.best_free_tier),
        ("Enterprise leader", &trends.enterprise_leader),
    ] {
        println!("    {:<20} {}", s_dim().apply_to(label), s_price().apply_to(opt(value)));
    }

    for p in &ds.platforms {
        println!();
        println!(
            "  {}  {}",
            s_bold().apply_to(format!("{} pricing", p.name)),
            s_dim().apply_to(p.market_position())
        );
        if p.pricing.is_empty() {
            println!("    {}", s_hint().apply_to("no pricing published"));
            continue;
        }
        let mut table = table_with_header(&["Tier", "Price", "Credits", "Features"]);
        for t in &p.pricing {
            table.add_row(vec![
                Cell::new(format!("  {}", t.display_name())).fg(C_TEXT),
                Cell::new(t.price_label()).fg(C_PRICE),
                Cell::new(t.credits.as_deref().unwrap_or("")).fg(C_DIM),
                Cell::new(t.features.join("; ")).fg(C_DIM),
            ]);
        }
        println!("{table}");
    }

    println!("{}", sep(64));
    println!("{}", s_hint().apply_to("  --usage low|medium|high"));
    println!();
    Ok(())
}

// ── Features ─────────────────────────────────────────────────────────

fn cmd_features(
    ds: &Dataset,
    search: &str,
    category: FeatureCategory,
    opts: &Opts,
) -> anyhow::Result<()> {
    let matrix = features::matrix(ds, search, category);
    if opts.json {
        return print_json(&matrix);
    }

    let subtitle = if search.is_empty() {
        format!("category: {category:?}").to_lowercase()
    } else {
        format!("search: {search}   category: {}", format!("{category:?}").to_lowercase())
    };
    print_title(&Route::Features, &subtitle);

    if matrix.rows.is_empty() {
        println!(
            "  {}",
            s_dim().apply_to("no features found matching your search criteria")
        );
        println!();
        return Ok(());
    }

    let mut header: Vec<&str> = vec!["Feature"];
    header.extend(matrix.columns.iter().map(|c| c.name.as_str()));
    let mut table = table_with_header(&header);
    for row in &matrix.rows {
        let mut cells = vec![Cell::new(format!("  {}", row.feature)).fg(C_TEXT)];
        cells.extend(row.cells.iter().map(|has| {
            if *has {
                Cell::new("\u{2713}").fg(C_GOOD)
            } else {
                Cell::new(DASH).fg(C_MISSING)
            }
        }));
        table.add_row(cells);
    }
    println!("{table}");

    let coverage = matrix.coverage();
    println!("{}", sep(64));
    let parts: Vec<String> = matrix
        .columns
        .iter()
        .zip(&coverage)
        .map(|(c, n)| format!("{} {n}", c.name))
        .collect();
    println!(
        "{}",
        s_hint().apply_to(format!("  {} features   {}", matrix.rows.len(), parts.join("  ")))
    );

    if search.is_empty() && category == FeatureCategory::All {
        for h in features::highlights(ds) {
            println!();
            println!("  {}", s_bold().apply_to(&h.name));
            for f in &h.core_features {
                println!("    {} {}", s_good().apply_to("\u{2713}"), s_dim().apply_to(f));
            }
            for s in &h.strengths {
                println!("    {} {}", s_price().apply_to("+"), s_dim().apply_to(s));
            }
        }
    }
    println!();
    Ok(())
}

// ── Performance ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct PerformancePage {
    metric: Metric,
    scores: Vec<PerformanceScore>,
    series: Vec<scoring::MetricPoint>,
    leaders: Option<scoring::Leaders>,
}

fn cmd_performance(ds: &Dataset, metric: Metric, opts: &Opts) -> anyhow::Result<()> {
    let scores = scoring::scores(ds, opts.seed);
    let series = scoring::metric_series(&scores, metric);
    let leaders = scoring::leaders(&scores);

    if opts.json {
        return print_json(&PerformancePage {
            metric,
            scores,
            series,
            leaders,
        });
    }

    print_title(&Route::Performance, "synthetic scores, 1-100");

    let mut table = table_with_header(&[
        "Platform", "Overall", "Reliability", "Speed", "Features", "Usability", "Value", "Rating",
    ]);
    for s in &scores {
        let rating = s.rating();
        let num = |v: u8| Cell::new(v).fg(score_color(v));
        table.add_row(vec![
            Cell::new(format!("  {}", s.name)).fg(C_TEXT),
            num(s.overall),
            num(s.reliability),
            num(s.speed),
            num(s.features),
            num(s.usability),
            num(s.value),
            Cell::new(rating.to_string()).fg(score_color(s.overall)),
        ]);
    }
    println!("{table}");

    println!();
    println!("  {}", s_header().apply_to(format!("{} comparison", metric.label())));
    for p in &series {
        println!(
            "  {:<16} {} {}",
            s_dim().apply_to(&p.name),
            rating_style(Rating::from_score(p.score)).apply_to(bar(p.score as f64, 100.0, 40)),
            s_dim().apply_to(format!("{}/100", p.score))
        );
    }

    if let Some(l) = leaders {
        println!();
        println!("  {}", s_label().apply_to("insights"));
        println!("    {:<16} {}", s_dim().apply_to("Speed leader"), s_good().apply_to(&l.speed));
        println!("    {:<16} {}", s_dim().apply_to("Most reliable"), s_good().apply_to(&l.reliability));
        println!("    {:<16} {}", s_dim().apply_to("Best overall"), s_good().apply_to(&l.overall));
    }

    println!("{}", sep(64));
    let seed_note = match opts.seed {
        ScoreSeed::Stable => "stable per platform   --shuffle for a fresh draw",
        ScoreSeed::Entropy(_) => "shuffled draw   omit --shuffle for stable scores",
    };
    println!("{}", s_hint().apply_to(format!("  heuristic scores, not measurements; {seed_note}")));
    println!();
    Ok(())
}

// ── News ─────────────────────────────────────────────────────────────

fn category_style(c: NewsCategory) -> Style {
    match c {
        NewsCategory::Acquisitions => s_err(),
        NewsCategory::Releases => s_good(),
        NewsCategory::Updates => s_price(),
    }
}

fn cmd_news(ds: &Dataset, category: CategoryFilter, opts: &Opts) -> anyhow::Result<()> {
    let items = news::feed(ds);
    let shown = news::filter(&items, category);
    if opts.json {
        return print_json(&shown);
    }

    let subtitle = match category.0 {
        Some(c) => c.label().to_lowercase(),
        None => "all news".to_string(),
    };
    print_title(&Route::News, &subtitle);

    if shown.is_empty() {
        println!("  {}", s_dim().apply_to("no news in this category"));
    }
    for item in &shown {
        println!(
            "  {}  {}  {}",
            category_style(item.category).apply_to(format!("{:<13}", item.category.label())),
            s_hint().apply_to(item.date),
            s_accent().apply_to(&item.platform)
        );
        println!("    {}", s_bold().apply_to(&item.title));
        println!("    {}", s_dim().apply_to(&item.description));
    }

    let ma = &ds.market_analysis;
    if !ma.key_trends.is_empty() {
        println!();
        println!("  {}", s_label().apply_to("key trends"));
        for t in ma.key_trends.iter().take(3) {
            println!("    {} {}", s_price().apply_to("\u{2197}"), s_dim().apply_to(t));
        }
    }
    if !ma.geographic_distribution.is_empty() {
        println!();
        println!("  {}", s_label().apply_to("geographic distribution"));
        for r in &ma.geographic_distribution {
            println!(
                "    {:<18} {}",
                s_dim().apply_to(r.display_name()),
                r.platforms.join(", ")
            );
        }
    }

    println!("{}", sep(64));
    println!(
        "{}",
        s_hint().apply_to(format!(
            "  {} of {} items   --category all|acquisitions|updates|releases",
            shown.len(),
            items.len()
        ))
    );
    println!();
    Ok(())
}

// ── Agent profile ────────────────────────────────────────────────────

fn cmd_agent(ds: &Dataset, id: &str, tab: ProfileTab, opts: &Opts) -> anyhow::Result<()> {
    let lookup = profile::lookup(ds, id, opts.seed);
    if opts.json {
        return print_json(&lookup);
    }

    let profile = match lookup {
        Lookup::Found(p) => p,
        Lookup::NotFound { id, back } => {
            println!();
            println!("{}", s_err().apply_to(format!("agent '{id}' not found")));
            println!("{}", s_dim().apply_to(NOT_FOUND_MESSAGE));
            println!("{}", s_hint().apply_to(format!("  back: agent-compare open {back}")));
            let keys: Vec<&str> = ds.keys().collect();
            println!("{}", s_hint().apply_to(format!("  known: {}", keys.join(", "))));
            println!();
            return Ok(());
        }
    };
    let p = &profile.platform;

    println!();
    println!("{}  {}", s_header().apply_to(&p.name), s_hint().apply_to(Route::Agent(p.key.clone()).path()));
    if let Some(t) = &p.tagline {
        println!("{}", s_dim().apply_to(t));
    }
    let meta: Vec<&str> = [&p.market_position, &p.headquarters, &p.website]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .collect();
    println!("{}", s_label().apply_to(meta.join("  \u{00b7}  ")));
    println!("{}", sep(64));

    match tab {
        ProfileTab::Overview => {
            for (label, value) in [
                ("Headquarters", &p.headquarters),
                ("Founded", &p.founded),
                ("Stage", &p.company_stage),
                ("Position", &p.market_position),
            ] {
                println!("  {:<14} {}", s_dim().apply_to(label), opt(value));
            }
            print_list("core features", &p.core_features, s_good(), "\u{2713}");
            print_list("strengths", &p.strengths, s_price(), "+");
            print_list("weaknesses", &p.weaknesses, s_err(), "-");
            if !p.recent_updates.is_empty() {
                println!();
                println!("  {}", s_label().apply_to("recent updates"));
                for u in &p.recent_updates {
                    println!(
                        "    {:<22} {}",
                        s_accent().apply_to(u.key.replace('_', " ")),
                        s_dim().apply_to(&u.text)
                    );
                }
            }
        }
        ProfileTab::Pricing => {
            if p.pricing.is_empty() {
                println!("  {}", s_hint().apply_to("no pricing published"));
            } else {
                let mut table = table_with_header(&["Tier", "Price", "Credits", "Features"]);
                for t in &p.pricing {
                    table.add_row(vec![
                        Cell::new(format!("  {}", t.display_name())).fg(C_TEXT),
                        Cell::new(t.price_label()).fg(C_PRICE),
                        Cell::new(t.credits.as_deref().unwrap_or("")).fg(C_DIM),
                        Cell::new(t.features.join("; ")).fg(C_DIM),
                    ]);
                }
                println!("{table}");
            }
            if let Some(s) = profile.price {
                println!(
                    "  {}",
                    s_hint().apply_to(format!(
                        "starting {}   mid-tier {}",
                        fmt_price(s.starting),
                        fmt_price(s.mid_tier)
                    ))
                );
            }
        }
        ProfileTab::Features => {
            if !p.technical_specs.is_empty() {
                println!("  {}", s_label().apply_to("technical specs"));
                for s in &p.technical_specs {
                    println!("    {:<24} {}", s_dim().apply_to(s.display_key()), s.value);
                }
            }
            if !p.performance_metrics.is_empty() {
                println!();
                println!("  {}", s_label().apply_to("performance metrics"));
                for s in &p.performance_metrics {
                    println!("    {:<24} {}", s_dim().apply_to(s.display_key()), s.value);
                }
            }
            print_list("target audience", &p.target_audience, s_accent(), "\u{00b7}");
        }
        ProfileTab::Performance => {
            let s = &profile.score;
            for metric in [
                Metric::Reliability,
                Metric::Speed,
                Metric::Features,
                Metric::Usability,
                Metric::Value,
            ] {
                let v = s.get(metric);
                println!(
                    "  {:<12} {} {}",
                    s_dim().apply_to(metric.label()),
                    rating_style(Rating::from_score(v)).apply_to(bar(v as f64, 100.0, 40)),
                    v
                );
            }
            let rating = s.rating();
            println!(
                "  {:<12} {}  {}",
                s_bold().apply_to("Overall"),
                rating_style(rating).apply_to(s.overall),
                rating_style(rating).apply_to(rating)
            );
        }
    }

    println!("{}", sep(64));
    println!(
        "{}",
        s_hint().apply_to("  --tab overview|pricing|features|performance")
    );
    println!();
    Ok(())
}

fn print_list(title: &str, items: &[String], style: Style, mark: &str) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("  {}", s_label().apply_to(title));
    for item in items {
        println!("    {} {}", style.apply_to(mark), s_dim().apply_to(item));
    }
}

// ── Sync ─────────────────────────────────────────────────────────────

async fn cmd_sync(settings: &Settings) -> anyhow::Result<()> {
    let url = settings.sync_url().ok_or_else(|| {
        anyhow::anyhow!(
            "no data URL configured\n  \
             set base_url in {} or AGENT_COMPARE_BASE_URL, or pass --data <url>",
            Settings::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.toml".into())
        )
    })?;

    let term = Term::stderr();
    let spinner = term.is_term();
    if spinner {
        term.write_line(&format!("{}", s_dim().apply_to(format!("syncing from {url}..."))))?;
    }
    let result = sync::sync_data(&url).await;
    if spinner {
        term.clear_last_lines(1)?;
    }
    let result = result?;

    println!(
        "{}",
        s_good().apply_to(format!(
            "synced {} platforms to {}",
            result.platform_count,
            result.path.display()
        ))
    );
    Ok(())
}
