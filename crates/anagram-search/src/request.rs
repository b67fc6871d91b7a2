// Wire DTOs for JSON callers: request fields and the response envelope

use serde::{Deserialize, Serialize};

use crate::query::{Mode, Query, QueryError, QueryOptions, QueryOutcome};

/// HTTP-style status for a successful query (results may be empty).
pub const STATUS_OK: u16 = 200;

/// HTTP-style status for a rejected query.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// A query as sent over the wire.
///
/// Include and exclude lists are space-separated strings. Missing numeric
/// fields fall back to the receiving handle's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnagramRequest {
    #[serde(rename = "vorto")]
    pub letters: String,
    #[serde(rename = "inkluzivu")]
    pub include: String,
    #[serde(rename = "ekskluzivu")]
    pub exclude: String,
    #[serde(rename = "maksvortoj", skip_serializing_if = "Option::is_none")]
    pub max_words: Option<usize>,
    #[serde(rename = "maksliteroj", skip_serializing_if = "Option::is_none")]
    pub max_letters: Option<usize>,
    #[serde(rename = "minliteroj", skip_serializing_if = "Option::is_none")]
    pub min_letters: Option<usize>,
    #[serde(rename = "kandidatoj")]
    pub candidates: bool,
}

impl AnagramRequest {
    /// Build a [`Query`], filling unset bounds from `defaults`.
    pub fn to_query(&self, defaults: QueryOptions) -> Query {
        let options = QueryOptions {
            max_words: self.max_words.unwrap_or(defaults.max_words),
            min_letters: self.min_letters.unwrap_or(defaults.min_letters),
            max_letters: self.max_letters.unwrap_or(defaults.max_letters),
            mode: if self.candidates {
                Mode::Candidates
            } else {
                Mode::Phrases
            },
        };
        Query::new(self.letters.as_str())
            .with_options(options)
            .include(self.include.split_whitespace())
            .exclude(self.exclude.split_whitespace())
    }
}

/// Response envelope: a status plus the ordered results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramResponse {
    #[serde(rename = "statusCode")]
    pub status: u16,
    pub results: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub truncated: bool,
}

impl AnagramResponse {
    pub fn ok(outcome: QueryOutcome) -> Self {
        Self {
            status: STATUS_OK,
            results: outcome.results,
            error: None,
            truncated: outcome.truncated,
        }
    }

    /// A rejection carries no results.
    pub fn rejected(error: &QueryError) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            results: Vec::new(),
            error: Some(error.to_string()),
            truncated: false,
        }
    }

    pub fn from_result(result: Result<QueryOutcome, QueryError>) -> Self {
        match result {
            Ok(outcome) => Self::ok(outcome),
            Err(error) => Self::rejected(&error),
        }
    }

    /// Results joined into an HTML fragment, one per line.
    pub fn html_body(&self) -> String {
        self.results.join("<br>\n")
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{abc_dawg, abc_language};
    use crate::query;

    fn respond(request: &AnagramRequest) -> AnagramResponse {
        let query = request.to_query(QueryOptions::default());
        AnagramResponse::from_result(query::run(&abc_dawg(), &abc_language().alphabet, &query))
    }

    #[test]
    fn wire_names_deserialize() {
        let request: AnagramRequest = serde_json::from_str(
            r#"{"vorto":"abc","inkluzivu":"ca","ekskluzivu":"ab abc",
                "maksvortoj":2,"maksliteroj":3,"minliteroj":1,"kandidatoj":true}"#,
        )
        .unwrap();
        assert_eq!(request.letters, "abc");
        assert_eq!(request.max_words, Some(2));
        assert!(request.candidates);

        let query = request.to_query(QueryOptions::default());
        assert_eq!(query.include, vec!["ca"]);
        assert_eq!(query.exclude, vec!["ab", "abc"]);
        assert_eq!(query.options.mode, Mode::Candidates);
        assert_eq!(query.options.max_letters, 3);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let request: AnagramRequest = serde_json::from_str(r#"{"vorto":"abc"}"#).unwrap();
        let defaults = QueryOptions::default().with_max_words(5);
        let query = request.to_query(defaults);
        assert_eq!(query.options, defaults);
        assert!(query.include.is_empty());
        assert!(query.exclude.is_empty());
    }

    #[test]
    fn success_is_200_with_html_body() {
        let request = AnagramRequest {
            letters: "abc".into(),
            candidates: true,
            ..AnagramRequest::default()
        };
        let response = respond(&request);
        assert!(response.is_ok());
        assert_eq!(response.html_body(), "ab<br>\nabc<br>\nca");
    }

    #[test]
    fn empty_results_are_still_200() {
        let request = AnagramRequest {
            letters: "abc".into(),
            include: "ca".into(),
            ..AnagramRequest::default()
        };
        let response = respond(&request);
        assert_eq!(response.status, STATUS_OK);
        assert!(response.results.is_empty());
        assert_eq!(response.html_body(), "");
    }

    #[test]
    fn include_failure_is_400() {
        let request = AnagramRequest {
            letters: "ab".into(),
            include: "ca".into(),
            ..AnagramRequest::default()
        };
        let response = respond(&request);
        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert!(response.results.is_empty());
        assert!(response.error.as_deref().unwrap().contains("\"ca\""));
    }

    #[test]
    fn response_serializes_status_code() {
        let response = AnagramResponse::ok(QueryOutcome {
            results: vec!["abc".into()],
            truncated: false,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["results"][0], "abc");
        assert!(json.get("error").is_none());
    }
}
