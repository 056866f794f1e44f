//! Data Model Definition
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Stored non-lexical word record
///
/// `word` keeps the casing it was inserted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonLexicalWord {
  /// The word as given at seed time
  pub word: String,
}

impl NonLexicalWord {
  /// Constructor for NonLexicalWord
  pub fn new(word: impl Into<String>) -> Self {
    Self { word: word.into() }
  }
}

/// How much detail an analysis returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
  /// Overall lexical density only
  #[default]
  Overall,
  /// Overall lexical density plus one figure per sentence
  Verbose,
}

impl AnalysisMode {
  /// Value of the `mode` parameter selecting [`AnalysisMode::Verbose`]
  pub const VERBOSE: &'static str = "verbose";

  /// Resolves the optional `mode` parameter
  ///
  /// Absent or empty means [`AnalysisMode::Overall`]. Any other value is
  /// treated as verbose; rejecting values other than `verbose` is the
  /// validator's job.
  pub fn from_param(mode: Option<&str>) -> Self {
    match mode {
      Some(m) if !m.is_empty() => Self::Verbose,
      _ => Self::Overall,
    }
  }

  /// Returns true if `mode` names verbose mode, ignoring case
  pub fn is_verbose_param(mode: &str) -> bool {
    mode.to_lowercase() == Self::VERBOSE
  }
}

/// Single analysis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
  /// Text to analyze
  pub text: String,
  /// Raw `mode` parameter, if supplied
  pub mode: Option<String>,
}

impl AnalysisRequest {
  /// Constructor for AnalysisRequest
  pub fn new(text: impl Into<String>, mode: Option<String>) -> Self {
    Self {
      text: text.into(),
      mode,
    }
  }

  /// Builder that sets `mode=verbose`
  #[must_use]
  pub fn verbose(mut self) -> Self {
    self.mode = Some(AnalysisMode::VERBOSE.to_string());
    self
  }

  /// Resolved analysis mode
  pub fn analysis_mode(&self) -> AnalysisMode {
    AnalysisMode::from_param(self.mode.as_deref())
  }
}

/// Lexical density as an exact fraction
///
/// Rendered with two fractional digits from the `f64` ratio: the nearest
/// hundredth to the exact double, the larger one on a tie. A ratio whose
/// double sits just below a half, such as `3/40`, rounds down. A zero
/// denominator renders as `0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Density {
  /// Number of lexical words
  pub lexical: usize,
  /// Number of words
  pub total: usize,
}

impl Density {
  /// Constructor for Density
  pub fn new(lexical: usize, total: usize) -> Self {
    Self { lexical, total }
  }

  /// Ratio as a float, `0.0` when there are no words
  pub fn ratio(&self) -> f64 {
    if self.total == 0 {
      0.0
    } else {
      self.lexical as f64 / self.total as f64
    }
  }

  /// Ratio in hundredths, nearest to the double returned by [`ratio`](Self::ratio)
  pub fn hundredths(&self) -> u64 {
    nearest_hundredths(self.ratio())
  }
}

/// Largest exponent gap for which `100 * x` can still reach one half
const MAX_FRACTION_BITS: u32 = 69;

/// Returns the `n` minimizing `|n / 100 - x|`, taking the larger `n` on a tie
///
/// Works on the exact binary value of `x`: with `x = m / 2^k` the answer is
/// `floor((200m + 2^k) / 2^(k+1))`.
fn nearest_hundredths(x: f64) -> u64 {
  if x.is_nan() || x <= 0.0 {
    return 0;
  }

  let bits = x.to_bits();
  let exponent = ((bits >> 52) & 0x7ff) as i64;
  let fraction = bits & ((1 << 52) - 1);
  let (mantissa, exponent) = if exponent == 0 {
    (fraction, -1074)
  } else {
    (fraction | (1 << 52), exponent - 1075)
  };

  if exponent >= 0 {
    // Integral value, already exact in hundredths
    return (x * 100.0) as u64;
  }

  let shift = exponent.unsigned_abs() as u32;
  if shift > MAX_FRACTION_BITS {
    return 0;
  }

  let m = u128::from(mantissa);
  ((200 * m + (1u128 << shift)) >> (shift + 1)) as u64
}

impl fmt::Display for Density {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let hundredths = self.hundredths();
    write!(f, "{}.{:02}", hundredths / 100, hundredths % 100)
  }
}

impl Serialize for Density {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Result of one analysis
///
/// Serializes as `{"sentence_ld": [...], "overall_ld": "0.78"}`, omitting
/// `sentence_ld` outside verbose mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
  /// Per-sentence densities, in input order (verbose mode only)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sentence_ld: Option<Vec<Density>>,
  /// Density of the whole text
  pub overall_ld: Density,
}

impl AnalysisResult {
  /// Formatted overall density
  pub fn overall(&self) -> String {
    self.overall_ld.to_string()
  }

  /// Formatted per-sentence densities, if computed
  pub fn sentences(&self) -> Option<Vec<String>> {
    self.sentence_ld.as_ref().map(|ds| ds.iter().map(Density::to_string).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn density_formats_two_decimals() {
    assert_eq!(Density::new(7, 9).to_string(), "0.78");
    assert_eq!(Density::new(3, 4).to_string(), "0.75");
    assert_eq!(Density::new(10, 13).to_string(), "0.77");
    assert_eq!(Density::new(1, 1).to_string(), "1.00");
    assert_eq!(Density::new(0, 5).to_string(), "0.00");
    assert_eq!(Density::new(1, 3).to_string(), "0.33");
    assert_eq!(Density::new(2, 3).to_string(), "0.67");
  }

  #[test]
  fn density_rounds_exact_halves_up() {
    assert_eq!(Density::new(1, 8).to_string(), "0.13");
    assert_eq!(Density::new(3, 8).to_string(), "0.38");
    assert_eq!(Density::new(1, 40).to_string(), "0.03");
  }

  #[test]
  fn density_rounds_the_double_not_the_fraction() {
    // 0.075, 0.175 and 0.725 are stored just below the half
    assert_eq!(Density::new(3, 40).to_string(), "0.07");
    assert_eq!(Density::new(7, 40).to_string(), "0.17");
    assert_eq!(Density::new(29, 40).to_string(), "0.72");
    // 0.025 is stored just above it
    assert_eq!(Density::new(1, 40).to_string(), "0.03");
  }

  #[test]
  fn nearest_hundredths_edges() {
    assert_eq!(nearest_hundredths(0.0), 0);
    assert_eq!(nearest_hundredths(1.0), 100);
    assert_eq!(nearest_hundredths(0.5), 50);
    assert_eq!(nearest_hundredths(0.005), 1);
    assert_eq!(nearest_hundredths(0.004_9), 0);
    assert_eq!(nearest_hundredths(1e-30), 0);
    assert_eq!(nearest_hundredths(f64::NAN), 0);
    assert_eq!(nearest_hundredths(2.0), 200);
  }

  #[test]
  fn density_zero_total_is_zero() {
    let d = Density::new(0, 0);
    assert_eq!(d.to_string(), "0.00");
    assert_eq!(d.ratio(), 0.0);
  }

  #[test]
  fn density_serializes_as_string() {
    let json = serde_json::to_string(&Density::new(7, 9)).unwrap();
    assert_eq!(json, "\"0.78\"");
  }

  #[test]
  fn analysis_result_omits_sentences_when_absent() {
    let result = AnalysisResult {
      sentence_ld: None,
      overall_ld: Density::new(7, 9),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "overall_ld": "0.78" }));
  }

  #[test]
  fn analysis_result_serializes_sentences_in_order() {
    let result = AnalysisResult {
      sentence_ld: Some(vec![Density::new(7, 9), Density::new(3, 4)]),
      overall_ld: Density::new(10, 13),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "sentence_ld": ["0.78", "0.75"], "overall_ld": "0.77" })
    );
    assert_eq!(result.sentences(), Some(vec!["0.78".to_string(), "0.75".to_string()]));
    assert_eq!(result.overall(), "0.77");
  }

  #[test]
  fn analysis_mode_from_param() {
    assert_eq!(AnalysisMode::from_param(None), AnalysisMode::Overall);
    assert_eq!(AnalysisMode::from_param(Some("")), AnalysisMode::Overall);
    assert_eq!(AnalysisMode::from_param(Some("verbose")), AnalysisMode::Verbose);
    assert_eq!(AnalysisMode::from_param(Some("VERBOSE")), AnalysisMode::Verbose);
    assert!(AnalysisMode::is_verbose_param("Verbose"));
    assert!(!AnalysisMode::is_verbose_param("INVALID"));
  }

  #[test]
  fn analysis_request_builder() {
    let request = AnalysisRequest::new("A b.", None);
    assert_eq!(request.analysis_mode(), AnalysisMode::Overall);
    assert_eq!(request.verbose().analysis_mode(), AnalysisMode::Verbose);
  }
}
