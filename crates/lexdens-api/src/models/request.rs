//! Request model definition

use serde::Deserialize;

use lexdens::models::AnalysisRequest;

/// Query parameters of `GET /complexity`
///
/// Both parameters are optional at the HTTP level. An empty value is
/// treated the same as a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct ComplexityQuery {
  /// Text to analyze
  pub text: Option<String>,
  /// Analysis mode (`verbose` or absent)
  pub mode: Option<String>,
}

impl ComplexityQuery {
  /// Returns the text if it is non-empty
  #[must_use]
  pub fn text(&self) -> Option<&str> {
    self.text.as_deref().filter(|t| !t.is_empty())
  }

  /// Returns the mode if it is non-empty
  #[must_use]
  pub fn mode(&self) -> Option<&str> {
    self.mode.as_deref().filter(|m| !m.is_empty())
  }

  /// Converts into an analysis request, or `None` when no text was supplied
  #[must_use]
  pub fn into_request(self) -> Option<AnalysisRequest> {
    let mode = self.mode().map(str::to_string);
    let text = self.text.filter(|t| !t.is_empty())?;
    Some(AnalysisRequest { text, mode })
  }
}
