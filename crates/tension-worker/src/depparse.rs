//! Dependency-parse service adapter.
//!
//! A generic blocking client for a CoreNLP-style annotation endpoint plus a
//! separate response-transforming function. The transform is composed by
//! the adapter rather than inherited, so the wire shape and the triple
//! extraction stay independently testable.
//!
//! Network or decode failure surfaces as [`TensionError::ParseService`];
//! there is no local fallback parser and no retry policy. Each call is an
//! independent blocking request, cancelable via the client's own timeout.

use std::time::Duration;

use serde::Deserialize;

use tension_core::{DepparseConfig, TensionError, TensionResult};

/// Annotator properties sent with every request.
const ANNOTATE_PROPERTIES: &str = r#"{"annotators":"depparse","outputFormat":"json"}"#;

/// One grammatical relation: the relation type, its governing token, and
/// its dependent token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTriple {
    pub relation: String,
    pub governor: String,
    pub dependent: String,
}

/// Raw annotation-service payload.
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    sentences: Vec<ParsedSentence>,
}

#[derive(Debug, Deserialize)]
struct ParsedSentence {
    #[serde(rename = "basicDependencies", default)]
    basic_dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    dep: String,
    #[serde(rename = "governorGloss")]
    governor_gloss: String,
    #[serde(rename = "dependentGloss")]
    dependent_gloss: String,
}

/// Reshape a raw service payload into per-sentence ordered triples.
#[must_use]
pub fn triples_from_response(response: ParseResponse) -> Vec<Vec<DependencyTriple>> {
    response
        .sentences
        .into_iter()
        .map(|sentence| {
            sentence
                .basic_dependencies
                .into_iter()
                .map(|dep| DependencyTriple {
                    relation: dep.dep,
                    governor: dep.governor_gloss,
                    dependent: dep.dependent_gloss,
                })
                .collect()
        })
        .collect()
}

/// Blocking client for the remote dependency-parse service.
#[derive(Debug)]
pub struct DepparseClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl DepparseClient {
    /// Build a client for the configured endpoint.
    ///
    /// Construction does not contact the service; the first parse call
    /// does.
    pub fn new(config: &DepparseConfig) -> TensionResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TensionError::ParseService {
                message: format!("failed to build parse client: {e}"),
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }

    /// Annotate `text`, returning one ordered triple list per sentence.
    ///
    /// # Errors
    ///
    /// Returns [`TensionError::ParseService`] when the request fails, times
    /// out, returns a non-success status, or yields an undecodable body.
    pub fn dependency_parse(&self, text: &str) -> TensionResult<Vec<Vec<DependencyTriple>>> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("properties", ANNOTATE_PROPERTIES)])
            .body(text.to_string())
            .send()
            .map_err(service_error)?
            .error_for_status()
            .map_err(service_error)?
            .json::<ParseResponse>()
            .map_err(service_error)?;

        Ok(triples_from_response(response))
    }

    /// Endpoint this client annotates against.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn service_error(e: reqwest::Error) -> TensionError {
    TensionError::ParseService {
        message: e.to_string(),
    }
}
