use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CollectionService, FoodService, StudyService};
use storage::RemoteConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const SEED_ENV: &str = "FLASHCARD_SHUFFLE_SEED";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn collections(&self) -> Arc<CollectionService> {
        self.services.collections()
    }

    fn foods(&self) -> Arc<FoodService> {
        self.services.foods()
    }

    fn study(&self) -> Arc<StudyService> {
        self.services.study()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    api_url: Option<String>,
    seed: Option<u64>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", storage::remote::DEFAULT_BASE_URL);
    eprintln!("  --seed    (random shuffles)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASHCARD_API_URL, FLASHCARD_API_TIMEOUT_SECS, {SEED_ENV}, RUST_LOG");
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Args {
    /// Flags win over `env_seed`, the value of the seed environment variable.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: env_seed.map(parse_seed).transpose()?,
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.api_url = Some(value);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_seed(value)?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var(SEED_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_logging();

    let mut config = RemoteConfig::from_env();
    if let Some(api_url) = parsed.api_url {
        config.base_url = api_url;
    }
    info!(base_url = %config.base_url, seed = ?parsed.seed, "starting flashcards");

    let services = AppServices::new_remote(&config, parsed.seed)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashcards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
