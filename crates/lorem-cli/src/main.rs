use clap::Parser;
use lorem_core::{Generator, GeneratorConfig, Request, Result, config};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "lorem")]
#[command(about = "Generate lorem ipsum placeholder text")]
struct Cli {
    /// Number of words to generate
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    words: i64,

    /// Number of paragraphs to generate (takes priority over --words)
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    paragraphs: i64,

    /// Words per sentence [env: WORDS_PER_SENTENCE]
    #[arg(long)]
    words_per_sentence: Option<usize>,

    /// Sentences per paragraph [env: SENTENCES_PER_PARAGRAPH]
    #[arg(long)]
    sentences_per_paragraph: Option<usize>,

    /// Add a comma with a 1 in N chance at eligible positions [env: COMMA_CHANCE]
    #[arg(long)]
    comma_chance: Option<u32>,

    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> Request {
        Request {
            words: usize::try_from(self.words).unwrap_or(0),
            paragraphs: usize::try_from(self.paragraphs).unwrap_or(0),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env = |var: &str| std::env::var(var).ok();
    match run_command(&cli, config::default_path(), env) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}

fn run_command<F>(cli: &Cli, default_file: Option<PathBuf>, env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let config = resolve_config(cli, default_file, env)?;
    let request = cli.request();
    tracing::debug!(?request, ?config, seed = ?cli.seed, "generating");

    let mut builder = Generator::builder().config(config);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut generator = builder.build()?;

    Ok(generator.generate_from(&request))
}

/// Defaults, then the config file, then the environment, then flags.
///
/// `default_file` is only read when `--config` is absent, and is skipped if
/// it does not exist.
fn resolve_config<F>(
    cli: &Cli,
    default_file: Option<PathBuf>,
    env: F,
) -> Result<GeneratorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file_config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::load_or_default(default_file)?,
    };
    let mut config = file_config.with_env_from(env);

    if let Some(n) = cli.words_per_sentence {
        config.words_per_sentence = n;
    }
    if let Some(n) = cli.sentences_per_paragraph {
        config.sentences_per_paragraph = n;
    }
    if let Some(n) = cli.comma_chance {
        config.comma_chance = n;
    }

    config.validate()?;
    Ok(config)
}
