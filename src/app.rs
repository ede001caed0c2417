use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::application::StimuliLoader;
use crate::domain::error::Result;
use crate::domain::loader_config::LoaderConfig;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::csv_sources::{CsvSource, HttpCsvSource};
use crate::interfaces::survey::{ConsoleNavigator, ConsoleQuestion, MemoryEmbeddedData, SurveyHost};

/// Run one load cycle against the configured sheet and print the embedded
/// data as JSON on stdout.
pub async fn run() -> ExitCode {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match ConfigService::new().load() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let source = match build_source(&config) {
        Ok(source) => source,
        Err(err) => {
            error!(error = %err, "Failed to build CSV source");
            return ExitCode::FAILURE;
        }
    };

    let mut host = SurveyHost::new(
        MemoryEmbeddedData::new(),
        ConsoleQuestion::default(),
        ConsoleNavigator,
    );
    let mut rng = StdRng::from_entropy();

    let report = StimuliLoader::new(config, source)
        .run(&mut host, &mut rng)
        .await;
    if !report.is_success() {
        return ExitCode::FAILURE;
    }

    match host.data.to_json_pretty() {
        Ok(json) => {
            println!("{}", json);
            info!(slots = report.selection.len(), "Load cycle complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Failed to serialize embedded data");
            ExitCode::FAILURE
        }
    }
}

fn build_source(config: &LoaderConfig) -> Result<Arc<dyn CsvSource>> {
    let source = match config.fetch_timeout_secs {
        Some(secs) => HttpCsvSource::with_timeout(Duration::from_secs(secs))?,
        None => HttpCsvSource::new(),
    };
    Ok(Arc::new(source))
}
