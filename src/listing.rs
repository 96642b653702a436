//! Artist directory listing provider.
//!
//! Fetches one per-letter page of the archived National Gallery of Art
//! directory and extracts the artist anchors from its `BodyText` block,
//! in document order. The `AlphaNav` letter-navigation block is dropped
//! first so its links never masquerade as artists.

use std::fmt;
use std::io::Read;

use log::debug;

use crate::html;

/// One artist row scraped from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNameEntry {
    /// Display name exactly as listed, typically "Last, First".
    pub display_name: String,
    /// Absolute link to the artist's directory page.
    pub link: String,
}

/// Why a listing page produced no entries.
#[derive(Debug)]
pub enum ListingError {
    /// Network-level failure fetching the page.
    Fetch(String),
    /// The page came back but its expected structure is missing.
    MissingBodyText(String),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::Fetch(detail) => write!(f, "listing fetch failed: {}", detail),
            ListingError::MissingBodyText(url) => {
                write!(f, "no BodyText block in listing page {}", url)
            }
        }
    }
}

impl std::error::Error for ListingError {}

/// Blocking client for the archived per-letter listing pages.
pub struct ArchiveListing {
    agent: ureq::Agent,
    page_url_template: String,
    link_prefix: String,
    user_agent: String,
}

impl ArchiveListing {
    pub fn new(
        agent: ureq::Agent,
        page_url_template: String,
        link_prefix: String,
        user_agent: String,
    ) -> Self {
        ArchiveListing {
            agent,
            page_url_template,
            link_prefix,
            user_agent,
        }
    }

    /// URL of the listing page for one directory letter.
    fn page_url(&self, letter: char) -> String {
        self.page_url_template
            .replace("{letter}", &letter.to_string())
    }

    /// Fetch and parse the listing page for `letter`.
    ///
    /// Entries come back in document order with links already prefixed with
    /// the archive host; the href itself is passed through verbatim.
    pub fn fetch_listing(&self, letter: char) -> Result<Vec<RawNameEntry>, ListingError> {
        let url = self.page_url(letter);
        debug!("fetching listing page {}", url);

        let response = self
            .agent
            .get(&url)
            .set("User-Agent", &self.user_agent)
            .call()
            .map_err(|error| ListingError::Fetch(error.to_string()))?;
        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|error| ListingError::Fetch(error.to_string()))?;

        self.parse_listing(&body, &url)
    }

    fn parse_listing(&self, body: &str, url: &str) -> Result<Vec<RawNameEntry>, ListingError> {
        let cleaned = html::remove_class_block(body, "AlphaNav");
        let body_text = html::class_block(&cleaned, "BodyText")
            .ok_or_else(|| ListingError::MissingBodyText(url.to_string()))?;

        let entries = html::extract_anchors(body_text)
            .into_iter()
            .map(|anchor| RawNameEntry {
                display_name: anchor.text,
                link: format!("{}{}", self.link_prefix, anchor.href),
            })
            .collect();
        Ok(entries)
    }
}
