//! gallerist — scrapes the archived National Gallery of Art artist
//! directory, enriches each artist with a Wikipedia summary, and writes the
//! result to one CSV file.

mod classifier;
mod config;
mod html;
mod listing;
mod lookup;
mod name_key;
mod pipeline;
mod resolver;
mod sink;
mod wikipedia;

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

use config::Config;
use listing::ArchiveListing;
use pipeline::RunReport;
use sink::CsvSink;
use wikipedia::WikipediaClient;

fn load_config(path: &Path) -> Config {
    if !path.exists() {
        let default_config = Config::default();
        info!(
            "Config file not found. Creating default config. path={}",
            path.display()
        );
        if let Ok(serialized) = toml::to_string(&default_config) {
            if let Err(error) = std::fs::write(path, serialized) {
                warn!("Failed to write default config: {}", error);
            }
        }
        return default_config;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str::<Config>(&content).unwrap_or_else(|error| {
            warn!("Config file unreadable, using defaults: {}", error);
            Config::default()
        }),
        Err(error) => {
            warn!("Failed to read config file, using defaults: {}", error);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gallerist.toml".to_string());
    let config = load_config(Path::new(&config_path));

    let agent = ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(5))
        .timeout_read(Duration::from_secs(15))
        .timeout_write(Duration::from_secs(15))
        .build();

    let directory = ArchiveListing::new(
        agent.clone(),
        config.listing.page_url_template.clone(),
        config.listing.link_prefix.clone(),
        config.lookup.user_agent.clone(),
    );
    let wikipedia = WikipediaClient::new(
        agent,
        config.lookup.api_url.clone(),
        config.lookup.user_agent.clone(),
    );

    let output_path = Path::new(&config.output.csv_path);
    let mut sink = CsvSink::create(output_path)?;
    sink.write_header()?;

    let mut report = RunReport::default();
    for letter in config.listing.letters.chars() {
        let entries = match directory.fetch_listing(letter) {
            Ok(entries) => entries,
            Err(error) => {
                warn!("Skipping listing page for '{}': {}", letter, error);
                continue;
            }
        };
        info!("Letter {}: {} artists listed", letter, entries.len());
        pipeline::process_entries(&entries, &wikipedia, &mut sink, &mut report)?;
    }

    sink.finish()?;
    info!(
        "Done. rows={} without_wikipedia_entry={} skipped_names={} output={}",
        report.rows_written,
        report.sentinel_rows,
        report.skipped.len(),
        output_path.display()
    );

    Ok(())
}
