//! Wiring & DI. Entry point: pick a package source, inject the sink, run.
//! No business logic here; processing is delegated to TrackerService.
//!
//! Usage:
//!   fit-tracker                         configured input file, else the built-in batch
//!   fit-tracker workouts.json|.csv      packages from a file
//!   fit-tracker RUN:15000,1,75 ...      packages from arguments
//!   fit-tracker --interactive | -i      prompt for workouts

use dotenv::dotenv;
use fit_tracker::adapters::output::ConsoleSink;
use fit_tracker::adapters::sources::{self, ArgsSource, BuiltinSource};
use fit_tracker::adapters::ui::tui::TuiInputPort;
use fit_tracker::ports::{InputPort, PackageSource, ReportSink};
use fit_tracker::shared::config::AppConfig;
use fit_tracker::usecases::TrackerService;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // stdout carries the report lines; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    let sink: Arc<dyn ReportSink> = Arc::new(ConsoleSink::new(cfg.color_or_default()));
    let policy = cfg.error_policy();
    let service = Arc::new(TrackerService::new(sink, policy));

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--interactive" || a == "-i") {
        fit_tracker::adapters::ui::init_ui(cfg.banner_or_default());
        let input_port: Box<dyn InputPort> = Box::new(TuiInputPort::new(Arc::clone(&service)));
        input_port
            .run()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        return Ok(());
    }

    let source = select_source(&args, &cfg)?;
    info!(source = %source.describe(), ?policy, "processing workouts");

    let packages = source
        .packages()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let stats = service
        .process_batch(&packages)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if stats.failed > 0 {
        warn!(failed = stats.failed, "some workout packages were rejected");
    }
    Ok(())
}

/// Arguments win over the configured file; the built-in batch is the fallback.
fn select_source(args: &[String], cfg: &AppConfig) -> anyhow::Result<Box<dyn PackageSource>> {
    if !args.is_empty() {
        if args.iter().all(|a| ArgsSource::is_package_token(a)) {
            return Ok(Box::new(ArgsSource::new(args.iter().cloned())));
        }
        if let [path] = args {
            return sources::from_path(path).map_err(|e| anyhow::anyhow!("{}", e));
        }
        anyhow::bail!(
            "expected one input file or TAG:p1,p2,... packages, got: {}",
            args.join(" ")
        );
    }

    match cfg.input_path.as_deref() {
        Some(path) => sources::from_path(path).map_err(|e| anyhow::anyhow!("{}", e)),
        None => Ok(Box::new(BuiltinSource)),
    }
}
