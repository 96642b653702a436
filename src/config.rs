//! Persistent run configuration model and defaults.
//!
//! Defaults target the archived National Gallery of Art directory snapshot
//! and the English Wikipedia Action API; a config file is only needed to
//! point the tool somewhere else.

/// Root configuration persisted to `gallerist.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Artist directory listing source.
    pub listing: ListingConfig,
    /// Biography lookup service.
    pub lookup: LookupConfig,
    /// Output table destination.
    pub output: OutputConfig,
}

/// Where the per-letter listing pages live.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Page URL with a `{letter}` placeholder.
    pub page_url_template: String,
    /// Prefix joined onto every scraped artist link.
    pub link_prefix: String,
    /// Directory letters to walk, in order.
    pub letters: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            page_url_template: "https://web.archive.org/web/20121007172955/https://www.nga.gov/collection/an{letter}1.htm".to_string(),
            link_prefix: "https://web.archive.org".to_string(),
            letters: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        }
    }
}

/// Biography lookup endpoint.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LookupConfig {
    /// MediaWiki Action API endpoint.
    pub api_url: String,
    /// User-Agent sent with every request (Wikimedia etiquette).
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: "gallerist/0.1 (artist directory enrichment)".to_string(),
        }
    }
}

/// Output file destination.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV file to write.
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            csv_path: "artist_data.csv".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.listing.letters.len(), 26);
        assert!(config.listing.page_url_template.contains("{letter}"));
        assert!(config.lookup.api_url.contains("wikipedia.org"));
        assert_eq!(config.output.csv_path, "artist_data.csv");
    }

    #[test]
    fn test_partial_toml_overrides_one_section() {
        let config: Config = toml::from_str(
            "[output]\ncsv_path = \"out/artists.csv\"\n",
        )
        .unwrap();
        assert_eq!(config.output.csv_path, "out/artists.csv");
        assert_eq!(config.listing, Config::default().listing);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
