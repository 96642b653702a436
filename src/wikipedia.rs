//! Wikipedia biography lookup over the MediaWiki Action API.
//!
//! One blocking query per search key: intro extract, category list, and
//! page props in a single round trip, with redirects followed so common
//! spelling variants still land on the canonical page.

use std::io::Read;

use serde_json::Value;

use crate::lookup::{BiographyCandidate, LookupError, LookupProvider};

/// Blocking Wikipedia client.
pub struct WikipediaClient {
    agent: ureq::Agent,
    api_url: String,
    user_agent: String,
}

impl WikipediaClient {
    pub fn new(agent: ureq::Agent, api_url: String, user_agent: String) -> Self {
        WikipediaClient {
            agent,
            api_url,
            user_agent,
        }
    }

    fn query_url(&self, key: &str) -> String {
        format!(
            "{}?action=query&prop=extracts|categories|pageprops&redirects=1&\
             exintro=1&explaintext=1&cllimit=max&titles={}&format=json&utf8=1",
            self.api_url,
            urlencoding::encode(key)
        )
    }

    fn http_get_json(&self, url: &str) -> Result<Value, LookupError> {
        let response = self
            .agent
            .get(url)
            .set("User-Agent", &self.user_agent)
            .set("Accept", "application/json")
            .call()
            .map_err(|error| LookupError::Transport(format!("request failed: {error}")))?;
        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|error| LookupError::Transport(format!("failed to read response: {error}")))?;
        serde_json::from_str(&body)
            .map_err(|error| LookupError::Transport(format!("invalid JSON response: {error}")))
    }
}

/// Category titles come prefixed with their namespace; only the name is
/// useful for classification.
fn category_name(title: &str) -> &str {
    title.split_once(':').map_or(title, |(_, name)| name)
}

/// Turn one Action API query response into a candidate or a typed failure.
fn parse_query_response(value: &Value) -> Result<BiographyCandidate, LookupError> {
    let pages = value["query"]["pages"]
        .as_object()
        .ok_or_else(|| LookupError::Transport("response missing query.pages".to_string()))?;

    for (page_id, page) in pages {
        if page_id == "-1" || page.get("missing").is_some() {
            continue;
        }

        if !page["pageprops"]["disambiguation"].is_null() {
            return Err(LookupError::Ambiguous);
        }

        let title = page["title"].as_str().unwrap_or_default().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let summary = page["extract"].as_str().unwrap_or_default().trim().to_string();
        let categories = page["categories"]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry["title"].as_str())
                    .map(|title| category_name(title).to_string())
                    .collect()
            })
            .unwrap_or_default();

        return Ok(BiographyCandidate {
            title,
            categories,
            summary,
        });
    }

    Err(LookupError::NotFound)
}

impl LookupProvider for WikipediaClient {
    fn lookup(&self, key: &str) -> Result<BiographyCandidate, LookupError> {
        let url = self.query_url(key);
        let parsed = self.http_get_json(&url)?;
        parse_query_response(&parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::{category_name, parse_query_response};
    use crate::lookup::LookupError;
    use serde_json::json;

    #[test]
    fn test_parse_existing_page() {
        let response = json!({
            "query": {
                "pages": {
                    "24176": {
                        "pageid": 24176,
                        "title": "Pablo Picasso",
                        "extract": "Pablo Picasso was a Spanish painter.",
                        "categories": [
                            { "ns": 14, "title": "Category:Spanish painters" },
                            { "ns": 14, "title": "Category:1881 births" }
                        ]
                    }
                }
            }
        });
        let candidate = parse_query_response(&response).unwrap();
        assert_eq!(candidate.title, "Pablo Picasso");
        assert_eq!(candidate.summary, "Pablo Picasso was a Spanish painter.");
        assert_eq!(
            candidate.categories,
            vec!["Spanish painters".to_string(), "1881 births".to_string()]
        );
    }

    #[test]
    fn test_parse_missing_page_is_not_found() {
        let response = json!({
            "query": {
                "pages": {
                    "-1": { "title": "Nobody Nowhere", "missing": "" }
                }
            }
        });
        assert_eq!(
            parse_query_response(&response).unwrap_err(),
            LookupError::NotFound
        );
    }

    #[test]
    fn test_parse_disambiguation_page_is_ambiguous() {
        let response = json!({
            "query": {
                "pages": {
                    "101": {
                        "title": "John Smith",
                        "extract": "John Smith may refer to:",
                        "pageprops": { "disambiguation": "" }
                    }
                }
            }
        });
        assert_eq!(
            parse_query_response(&response).unwrap_err(),
            LookupError::Ambiguous
        );
    }

    #[test]
    fn test_parse_page_without_categories() {
        let response = json!({
            "query": {
                "pages": {
                    "7": { "title": "Obscure Person", "extract": "Text." }
                }
            }
        });
        let candidate = parse_query_response(&response).unwrap();
        assert!(candidate.categories.is_empty());
    }

    #[test]
    fn test_malformed_response_is_a_transport_error() {
        let response = json!({ "error": { "code": "maxlag" } });
        assert!(matches!(
            parse_query_response(&response),
            Err(LookupError::Transport(_))
        ));
    }

    #[test]
    fn test_category_namespace_prefix_is_dropped() {
        assert_eq!(category_name("Category:Dutch painter"), "Dutch painter");
        assert_eq!(category_name("No namespace"), "No namespace");
    }
}
