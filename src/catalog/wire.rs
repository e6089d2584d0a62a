//! Wire-format models for the catalog's JSON bodies.
//!
//! The catalog reports success through a string marker field (`Response`:
//! `"True"` or `"False"`) rather than HTTP status, and omits the payload
//! fields entirely on a negative answer, so every payload field defaults.
//! Numeric values arrive as strings (`"132 min"`, `"8.2"`, `"N/A"`);
//! validation in [`crate::catalog::lookups`] parses them into the domain
//! models.

use serde::Deserialize;

/// Body of a keyword search: a page of hits or a negative marker.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// `"True"` when `search` holds results, `"False"` otherwise.
    #[serde(rename = "Response", default)]
    pub response: String,

    /// The matching titles; absent on a negative answer.
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,

    /// Catalog-provided reason on a negative answer.
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// One title in a search page.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "Poster", default)]
    pub poster: String,

    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
}

/// Body of a detail lookup for one id.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "Poster", default)]
    pub poster: String,

    /// Runtime as a string, e.g. `"132 min"`.
    #[serde(rename = "Runtime", default)]
    pub runtime: String,

    /// Catalog rating as a decimal string, or `"N/A"`.
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,

    #[serde(rename = "Plot", default)]
    pub plot: String,

    #[serde(rename = "Released", default)]
    pub released: String,

    #[serde(rename = "Actors", default)]
    pub actors: String,

    #[serde(rename = "Director", default)]
    pub director: String,

    #[serde(rename = "Genre", default)]
    pub genre: String,

    /// `"True"` when the payload fields are populated, `"False"` otherwise.
    #[serde(rename = "Response", default)]
    pub response: String,
}

/// The catalog's negative marker value.
pub(crate) const RESPONSE_FALSE: &str = "False";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_deserializes() {
        let body = r#"{
            "Response": "True",
            "Search": [
                {"Title": "Saw", "Year": "2004", "Poster": "p.jpg", "imdbID": "tt0387564"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "True");
        assert_eq!(parsed.search.len(), 1);
        assert_eq!(parsed.search[0].imdb_id, "tt0387564");
    }

    #[test]
    fn negative_search_body_omits_hits() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, RESPONSE_FALSE);
        assert!(parsed.search.is_empty());
        assert_eq!(parsed.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn negative_detail_body_defaults_all_fields() {
        let body = r#"{"Response": "False"}"#;
        let parsed: DetailResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, RESPONSE_FALSE);
        assert!(parsed.title.is_empty());
        assert!(parsed.runtime.is_empty());
    }
}
