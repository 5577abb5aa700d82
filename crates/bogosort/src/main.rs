use bogosort::{Config, Result, ShuffleStrategy, run};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "bogosort",
    version,
    about = "Sort integers by shuffling them until they happen to be sorted",
    long_about = "Shuffles a sequence of integers until it is in non-decreasing order, then prints it before and after. Without arguments it sorts [5, 3, 2, 4, 1]."
)]
struct Cli {
    /// Values to sort (default: from configuration, or 5 3 2 4 1)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Seed for the shuffle RNG
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Give up after this many shuffles
    #[arg(long, value_name = "N")]
    max_shuffles: Option<u64>,

    /// Shuffle applied between sortedness checks
    #[arg(long, value_enum)]
    shuffle: Option<ShuffleArg>,

    /// Print the shuffle count, comparison count and seed after sorting
    #[arg(long)]
    stats: bool,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print default configuration
    #[arg(long, value_name = "OPTION")]
    print_config: Option<PrintConfig>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PrintConfig {
    Default,
    Current,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ShuffleArg {
    /// Swap each position with a random one (biased)
    Naive,
    /// Unbiased Fisher-Yates
    FisherYates,
}

impl From<ShuffleArg> for ShuffleStrategy {
    fn from(arg: ShuffleArg) -> Self {
        match arg {
            ShuffleArg::Naive => ShuffleStrategy::Naive,
            ShuffleArg::FisherYates => ShuffleStrategy::FisherYates,
        }
    }
}

impl Cli {
    /// Command-line values win over the configuration file.
    fn apply_overrides(&self, config: &mut Config) {
        if !self.values.is_empty() {
            config.values = self.values.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_shuffles) = self.max_shuffles {
            config.max_shuffles = Some(max_shuffles);
        }
        if let Some(shuffle) = self.shuffle {
            config.shuffle = shuffle.into();
        }
    }

    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }
}

fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = try_main(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    if let Some(PrintConfig::Default) = cli.print_config {
        println!("{}", Config::default_toml());
        return Ok(());
    }

    let mut config = load_config(cli)?;
    cli.apply_overrides(&mut config);

    if let Some(PrintConfig::Current) = cli.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Before sorting: {:?}", config.values);
    let run = run(&config)?;
    println!("After sorting: {:?}", run.after);

    if cli.stats {
        println!(
            "Shuffles: {}, comparisons: {}, seed: {}",
            run.report.shuffles, run.report.comparisons, run.seed
        );
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        info!(path = %config_path.display(), "loading config");
        return Ok(Config::from_file(config_path)?);
    }

    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(error = %e, "ignoring unreadable configuration, using defaults");
            Ok(Config::default())
        }
    }
}
