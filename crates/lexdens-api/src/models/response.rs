//! Response model definition

use serde::Serialize;

use lexdens::models::AnalysisResult;

/// Successful response of `GET /complexity`
///
/// ```json
/// { "data": { "sentence_ld": ["0.78", "0.75"], "overall_ld": "0.77" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityResponse {
  /// Analysis result
  pub data: AnalysisResult,
}

impl From<AnalysisResult> for ComplexityResponse {
  fn from(data: AnalysisResult) -> Self {
    Self { data }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use lexdens::models::Density;

  #[test]
  fn overall_response_serialization() {
    let response = ComplexityResponse::from(AnalysisResult {
      sentence_ld: None,
      overall_ld: Density::new(7, 9),
    });

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({ "data": { "overall_ld": "0.78" } }));
  }

  #[test]
  fn verbose_response_serialization() {
    let response = ComplexityResponse::from(AnalysisResult {
      sentence_ld: Some(vec![Density::new(7, 9), Density::new(3, 4)]),
      overall_ld: Density::new(10, 13),
    });

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"sentence_ld\":[\"0.78\",\"0.75\"]"));
    assert!(json.contains("\"overall_ld\":\"0.77\""));
  }
}
