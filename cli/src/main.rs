use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docnav_core::types::{ApiChanges, AppConfig};
use docnav_core::{
    FilterTag, IndexDocument, IndexStore, NavigatorFilter, NavigatorIndex, filter_children,
};
use docnav_search::{SearchConfig, SearchCorpus, SearchEngine, SearchQuery};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Flatten and search documentation navigator indexes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flat navigator entries of one interface language as JSON
    Flatten {
        #[command(flatten)]
        source: Source,
        /// Keep only entries whose title contains this text
        #[arg(long)]
        filter: Option<String>,
        /// Drop deprecated entries and fully deprecated groups
        #[arg(long, default_value_t = false)]
        hide_deprecated: bool,
        /// JSON map of topic path to change (added, modified, deprecated);
        /// keeps only changed entries
        #[arg(long)]
        api_changes: Option<PathBuf>,
    },
    /// Run a quick navigation query
    Search {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        query: String,
    },
}

#[derive(clap::Args)]
struct Source {
    /// Path to an index.json document
    #[arg(long)]
    input: PathBuf,
    /// Interface language; defaults to the configured fallback language
    #[arg(long)]
    language: Option<String>,
    /// Path to a docnav.toml config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let lines = match cli.command {
        Commands::Flatten {
            source,
            filter,
            hide_deprecated,
            api_changes,
        } => run_flatten(
            &source,
            filter.as_deref(),
            hide_deprecated,
            api_changes.as_deref(),
        )?,
        Commands::Search { source, query } => run_search(&source, &query)?,
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn run_flatten(
    source: &Source,
    filter: Option<&str>,
    hide_deprecated: bool,
    api_changes: Option<&Path>,
) -> Result<Vec<String>> {
    let (_, navigator) = open(source)?;
    let api_changes = api_changes.map(load_api_changes).transpose()?;

    let mut navigator_filter = NavigatorFilter::with_text(filter.unwrap_or_default())?
        .with_api_changes(api_changes.map(Arc::new));
    if hide_deprecated {
        navigator_filter = navigator_filter.with_tags([FilterTag::HideDeprecated]);
    }

    let entries = filter_children(navigator.entries(), &navigator_filter);
    Ok(vec![serde_json::to_string_pretty(&entries)?])
}

fn run_search(source: &Source, query: &str) -> Result<Vec<String>> {
    let (config, navigator) = open(source)?;

    let engine = SearchEngine::new(
        SearchCorpus::from_navigator(&navigator),
        SearchConfig::from(&config.quick_navigation),
    );
    let results = engine.search(&SearchQuery::Fuzzy(query.to_string()));

    Ok(results
        .into_iter()
        .map(|result| {
            let breadcrumbs = result.symbol.relative_path();
            if breadcrumbs.is_empty() {
                format!("{result}  {}", result.symbol.path)
            } else {
                format!("{result}  {}  ({breadcrumbs})", result.symbol.path)
            }
        })
        .collect())
}

/// Loads config and index, returning the navigator of the requested language.
fn open(source: &Source) -> Result<(AppConfig, Arc<NavigatorIndex>)> {
    let config = load_config(source.config.as_deref())?;
    let document = load_index(&source.input)?;

    let store = IndexStore::new();
    let snapshot = store.publish(&document);
    let fallback = &config.index.fallback_language;
    let language = source.language.as_deref().unwrap_or(fallback);

    let navigator = snapshot
        .navigator(language, fallback)
        .cloned()
        .with_context(|| {
            format!("no navigator for language {language:?} or fallback {fallback:?}")
        })?;
    Ok((config, navigator))
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let config = AppConfig::load(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for problem in config.validate() {
        tracing::warn!(path = %path.display(), %problem, "invalid config value, using default");
    }
    Ok(config.with_defaults_for_invalid())
}

fn load_api_changes(path: &Path) -> Result<ApiChanges> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let changes: ApiChanges = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;

    tracing::info!(path = %path.display(), changes = changes.len(), "loaded api changes");
    Ok(changes)
}

fn load_index(path: &Path) -> Result<IndexDocument> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let document = IndexDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        languages = document.interface_languages.len(),
        "loaded index document"
    );
    Ok(document)
}
