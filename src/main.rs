//! SentinelAI Core - Console Runner
//!
//! Walks the built-in scenarios through the full pipeline, optionally
//! analyzing a WAV file passed on the command line first, then prints
//! the defense log and statistics.

use sentinel_core::api;
use sentinel_core::constants::{self, DEFAULT_SOURCE_ID};
use sentinel_core::logic::scenario::Scenario;
use sentinel_core::{AppState, PipelineConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} core v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let state = AppState::new(PipelineConfig::default());
    log::info!(
        "Extraction timeout: {} ms, history capacity: {}",
        state.config().extraction_timeout_ms,
        state.config().history_capacity
    );

    // A WAV path on the command line gets analyzed as live audio
    if let Some(path) = std::env::args().nth(1) {
        match std::fs::read(&path) {
            Ok(bytes) => {
                match api::analyze_sample(&state, bytes, "audio", DEFAULT_SOURCE_ID, None).await {
                    Ok(report) => {
                        println!(
                            "{}: {} ({:.1}%) -> {}",
                            path,
                            report.detection.classification,
                            report.detection.score,
                            report.outcome.status
                        );
                        match serde_json::to_string_pretty(&report.detection.features) {
                            Ok(json) => println!("{}", json),
                            Err(e) => log::error!("{}", e),
                        }
                    }
                    Err(e) => log::error!("{}", e),
                }
            }
            Err(e) => log::error!("Cannot read {}: {}", path, e),
        }
    }

    println!("Scenario walkthrough:");
    for scenario in Scenario::NAMED {
        let modality = if scenario == Scenario::VideoCommand {
            "video"
        } else {
            "audio"
        };
        match api::run_scenario(&state, scenario.name(), modality, DEFAULT_SOURCE_ID, None).await {
            Ok(report) => println!(
                "  {:<18} {:>5.1}%  {:<10}  {}",
                scenario.name(),
                report.detection.score,
                report.detection.classification.as_str(),
                report.outcome.status
            ),
            Err(e) => log::error!("{}", e),
        }
    }

    println!();
    println!("Defense log:");
    for entry in api::get_defense_log(&state, None) {
        println!(
            "  [{}] {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.summary
        );
    }

    let stats = api::get_statistics(&state);
    println!();
    println!(
        "{} defenses executed, {} alerts raised, {} honeypots engaged",
        stats.total, stats.alerts_raised, stats.honeypots_engaged
    );
}
