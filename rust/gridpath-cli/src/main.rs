use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gridpath_cli::config::{Config, OptionsFile};
use gridpath_cli::map_file::load_map;
use gridpath_cli::render::{render_run, render_search_space};
use gridpath_core::{run, run_all, Strategy};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    BestFirst,
    Iddfs,
    Astar,
    All,
}

impl StrategyArg {
    fn strategy(self) -> Option<Strategy> {
        match self {
            StrategyArg::BestFirst => Some(Strategy::BestFirst),
            StrategyArg::Iddfs => Some(Strategy::IterativeDeepening),
            StrategyArg::Astar => Some(Strategy::AStar),
            StrategyArg::All => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gridpath", version, about = "Run informed searches over a weighted terrain map")]
struct Args {
    /// Terrain map: size, start, goal, then one row of costs per line
    #[arg(long = "map", value_name = "PATH")]
    map: PathBuf,

    /// Strategy to run
    #[arg(long = "strategy", value_enum, default_value_t = StrategyArg::All)]
    strategy: StrategyArg,

    /// Wall-clock budget per strategy
    #[arg(long = "budget-ms", value_name = "MS")]
    budget_ms: Option<u64>,

    /// Deepest limit tried by iterative deepening
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<u32>,

    /// JSON file with `budget_ms` / `max_depth`
    #[arg(long = "options", value_name = "PATH")]
    options: Option<PathBuf>,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// Print the map before searching
    #[arg(long = "show-map")]
    show_map: bool,

    /// Emit logs as JSON lines
    #[arg(long = "json-logs")]
    json_logs: bool,
}

fn init_tracing(filter: &str, json: bool) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::from_env()?;
    init_tracing(cfg.log_filter(), args.json_logs);

    let file = args.options.as_deref().map(OptionsFile::load).transpose()?;
    let options = cfg.resolve(file.as_ref(), args.budget_ms, args.max_depth);
    info!(core_version = %gridpath_core::version(), map = %args.map.display(), budget_ms = options.budget_ms, "starting gridpath");

    let grid = load_map(&args.map).with_context(|| format!("loading map {}", args.map.display()))?;
    if args.show_map {
        print!("{}", render_search_space(&grid));
    }

    let runs = match args.strategy.strategy() {
        Some(s) => vec![run(&grid, s, &options)?],
        None => run_all(&grid, &options)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
    } else {
        for r in &runs {
            print!("{}", render_run(r));
        }
    }
    Ok(())
}
