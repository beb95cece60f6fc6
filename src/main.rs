use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use log::debug;

use autocomplete::{load_items, Completer, Config, JsonFile, Lines, MatcherKind, Provider, Ranking};

#[derive(Parser)]
#[command(name = "autocomplete")]
#[command(about = "Filters a list of items by a search and highlights the matching parts")]
#[command(version)]
struct Cli {
    /// The search as typed by the user
    search: String,

    /// JSON file with an array of items (strings or {"key", "value"} objects)
    #[arg(long = "items", value_name = "FILE")]
    items: Vec<PathBuf>,

    /// Text file with one item per line
    #[arg(long = "lines", value_name = "FILE")]
    lines: Vec<PathBuf>,

    /// Read items from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// JSON configuration file
    #[arg(long, env = "AUTOCOMPLETE_CONFIG")]
    config: Option<PathBuf>,

    /// Matching algorithm: substring, words or fuzzy
    #[arg(long, env = "AUTOCOMPLETE_MATCHER")]
    matcher: Option<MatcherKind>,

    /// Result order: stable or score
    #[arg(long, env = "AUTOCOMPLETE_RANKING")]
    ranking: Option<Ranking>,

    /// Maximum number of results
    #[arg(long, env = "AUTOCOMPLETE_LIMIT")]
    limit: Option<usize>,

    /// Output the results as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        // flags and environment take precedence over the file
        if let Some(matcher) = self.matcher {
            config.matcher = matcher;
        }

        if let Some(ranking) = self.ranking {
            config.ranking = ranking;
        }

        if self.limit.is_some() {
            config.limit = self.limit;
        }

        Ok(config)
    }

    fn providers(&self) -> Vec<Arc<dyn Provider>> {
        let mut providers: Vec<Arc<dyn Provider>> = Vec::new();

        for path in &self.items {
            providers.push(Arc::new(JsonFile::new(path)));
        }

        for path in &self.lines {
            providers.push(Arc::new(Lines::new(path)));
        }

        if self.stdin {
            providers.push(Arc::new(Lines::stdin()));
        }

        providers
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let providers = cli.providers();
    if providers.is_empty() {
        bail!("no items given, use --items, --lines or --stdin");
    }

    let config = cli.config()?;
    debug!("using {:?}", config);

    let items = load_items(&providers)?;
    let completer = Completer::from_config(&config);
    let results = completer.complete(&cli.search, &items)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}\t{}", result.index, result.marked("[", "]"));
        }
    }

    Ok(())
}
