//! Wire types and client state for the optional "Explain with AI" extension.
//!
//! The browser posts an [`ExplainRequest`] to the relay and receives an
//! [`ExplainResponse`]; the relay owns the prompt and the credential.

use crate::content::Publication;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_FIELD_CHARS: usize = 600;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExplainRequest {
    pub fn from_publication(publication: &Publication) -> Self {
        Self {
            title: publication.title.to_string(),
            authors: publication.authors.to_string(),
            journal: publication.journal.to_string(),
            year: publication.year,
            note: publication.note.map(ToString::to_string),
        }
    }

    pub fn validate(&self) -> Result<(), ExplainError> {
        if self.title.trim().is_empty() {
            return Err(ExplainError::Invalid("title is required"));
        }

        let fields = [
            Some(self.title.as_str()),
            Some(self.authors.as_str()),
            Some(self.journal.as_str()),
            self.note.as_deref(),
        ];
        if fields
            .into_iter()
            .flatten()
            .any(|field| field.chars().count() > MAX_FIELD_CHARS)
        {
            return Err(ExplainError::Invalid("field is too long"));
        }

        Ok(())
    }

    pub fn prompt(&self) -> String {
        let mut prompt = format!(
            "Explain the following scientific publication in plain language for a curious \
             non-specialist, in three or four sentences. Say what question it asks, how it \
             answers it and why it matters.\n\nTitle: {}\nAuthors: {}\nJournal: {} ({})",
            self.title.trim(),
            self.authors.trim(),
            self.journal.trim(),
            self.year
        );
        if let Some(note) = self.note.as_deref().map(str::trim).filter(|note| !note.is_empty()) {
            prompt.push_str("\nNote: ");
            prompt.push_str(note);
        }
        prompt
    }

    /// Identical publications share a cache entry regardless of spacing or case.
    pub fn cache_key(&self) -> String {
        fn normalize(value: &str) -> String {
            value
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        }

        format!(
            "{}|{}|{}|{}|{}",
            normalize(&self.title),
            normalize(&self.authors),
            normalize(&self.journal),
            self.year,
            self.note.as_deref().map(normalize).unwrap_or_default()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExplainResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn failure(error: &ExplainError) -> Self {
        Self {
            ok: false,
            text: None,
            error: Some(error.to_string()),
        }
    }

    pub fn into_result(self) -> Result<String, ExplainError> {
        match (self.ok, self.text) {
            (true, Some(text)) if !text.trim().is_empty() => Ok(text),
            (true, _) => Err(ExplainError::EmptyAnswer),
            (false, _) => Err(ExplainError::Upstream(
                self.error.unwrap_or_else(|| "request failed".to_string()),
            )),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplainError {
    #[error("invalid request: {0}")]
    Invalid(&'static str),
    #[error("explanations are not enabled on this server")]
    Disabled,
    #[error("could not reach the explanation service")]
    Network,
    #[error("explanation service answered with status {0}")]
    Status(u16),
    #[error("explanation service failed: {0}")]
    Upstream(String),
    #[error("the explanation service returned no text")]
    EmptyAnswer,
    #[error("could not read the explanation response")]
    Decode,
    #[error("explanation response was too large")]
    TooLarge,
}

impl ExplainError {
    /// Stable identifier for logs.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "invalid_request",
            Self::Disabled => "disabled",
            Self::Network => "network",
            Self::Status(_) => "upstream_status",
            Self::Upstream(_) => "upstream_failed",
            Self::EmptyAnswer => "empty_answer",
            Self::Decode => "decode",
            Self::TooLarge => "too_large",
        }
    }
}

/// Per-publication summary panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryState {
    pub text: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub visible: bool,
}

impl SummaryState {
    /// Starts a request. Returns `false` (and changes nothing) while one is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.visible = true;
        true
    }

    pub fn succeed(&mut self, text: String) {
        self.loading = false;
        self.error = None;
        self.text = Some(text);
        self.visible = true;
    }

    pub fn fail(&mut self, error: &ExplainError) {
        self.loading = false;
        self.error = Some(error.to_string());
        self.visible = true;
    }

    /// Whether a click should hide an existing answer instead of fetching.
    pub fn has_answer(&self) -> bool {
        self.text.is_some() && !self.loading
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn button_label(&self) -> &'static str {
        match (self.loading, self.has_answer(), self.visible) {
            (true, _, _) => "Explaining…",
            (false, true, true) => "Hide explanation",
            (false, true, false) => "Show explanation",
            (false, false, _) => "Explain with AI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PUBLICATIONS;

    #[test]
    fn request_is_built_from_publication_fields() {
        let request = ExplainRequest::from_publication(&PUBLICATIONS[0]);
        assert_eq!(request.title, PUBLICATIONS[0].title);
        assert_eq!(request.year, PUBLICATIONS[0].year);
        assert_eq!(request.note.as_deref(), PUBLICATIONS[0].note);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_json_omits_missing_note() {
        let request = ExplainRequest::from_publication(&PUBLICATIONS[1]);
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "title": PUBLICATIONS[1].title,
                "authors": PUBLICATIONS[1].authors,
                "journal": PUBLICATIONS[1].journal,
                "year": PUBLICATIONS[1].year,
            })
        );
    }

    #[test]
    fn prompt_mentions_every_field() {
        let request = ExplainRequest {
            title: "A title".to_string(),
            authors: "A. Author".to_string(),
            journal: "Journal".to_string(),
            year: 2020,
            note: Some("Cover".to_string()),
        };
        let prompt = request.prompt();
        assert!(prompt.contains("Title: A title"));
        assert!(prompt.contains("Authors: A. Author"));
        assert!(prompt.contains("Journal: Journal (2020)"));
        assert!(prompt.ends_with("Note: Cover"));
    }

    #[test]
    fn validation_rejects_blank_title_and_oversized_fields() {
        let mut request = ExplainRequest::from_publication(&PUBLICATIONS[0]);
        request.title = "   ".to_string();
        assert_eq!(request.validate(), Err(ExplainError::Invalid("title is required")));

        let mut request = ExplainRequest::from_publication(&PUBLICATIONS[0]);
        request.note = Some("n".repeat(MAX_FIELD_CHARS + 1));
        assert_eq!(request.validate(), Err(ExplainError::Invalid("field is too long")));
    }

    #[test]
    fn cache_key_ignores_spacing_and_case() {
        let a = ExplainRequest::from_publication(&PUBLICATIONS[2]);
        let mut b = a.clone();
        b.title = format!("  {}  ", a.title.to_uppercase().replace(' ', "   "));
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn response_maps_back_to_result() {
        assert_eq!(
            ExplainResponse::success("plain words").into_result(),
            Ok("plain words".to_string())
        );
        assert_eq!(
            ExplainResponse::success("  ").into_result(),
            Err(ExplainError::EmptyAnswer)
        );
        assert_eq!(
            ExplainResponse::failure(&ExplainError::Disabled).into_result(),
            Err(ExplainError::Upstream(ExplainError::Disabled.to_string()))
        );
    }

    #[test]
    fn summary_ignores_second_click_while_loading() {
        let mut summary = SummaryState::default();
        assert_eq!(summary.button_label(), "Explain with AI");

        assert!(summary.begin());
        assert!(!summary.begin());
        assert_eq!(summary.button_label(), "Explaining…");

        summary.succeed("text".to_string());
        assert!(summary.has_answer());
        assert_eq!(summary.button_label(), "Hide explanation");

        summary.toggle_visible();
        assert_eq!(summary.button_label(), "Show explanation");
    }

    #[test]
    fn failure_re_enables_and_keeps_message() {
        let mut summary = SummaryState::default();
        summary.begin();
        summary.fail(&ExplainError::Status(502));
        assert!(!summary.loading);
        assert_eq!(
            summary.error.as_deref(),
            Some("explanation service answered with status 502")
        );
        assert_eq!(summary.button_label(), "Explain with AI");
    }
}
