//! lexdens crate example
//!
//! Seeds a word store in a temporary directory and prints the density of a
//! few texts, overall and per sentence.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p lexdens --example example_lexdens
//! ```

use lexdens::config::{LexdensConfig, StoreConfig};
use lexdens::models::AnalysisResult;
use lexdens::{LexdensError, LexdensService};
use tracing_subscriber::EnvFilter;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Prints one analysis result
fn print_result(text: &str, result: &AnalysisResult) {
  println!("text       : {text}");
  if let Some(sentences) = result.sentences() {
    println!("sentence_ld: {}", sentences.join(", "));
  }
  println!("overall_ld : {}", result.overall());
  println!();
}

fn main() -> AppResult<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let tmp_dir = tempfile::tempdir()?;
  let config = LexdensConfig {
    store: StoreConfig {
      path: Some(tmp_dir.path().join("non_lexical_words.json")),
    },
    ..LexdensConfig::default()
  };

  let service = LexdensService::init(&config)?;

  let texts = [
    "The quick brown fox jumps over the lazy dog.",
    "The quick brown fox jumps over the lazy dog. This is another sentence.",
    "I have got a dog. It is neither big nor small, but it is much loved.",
  ];

  for text in texts {
    let result = service.analyze(text, Some("verbose"))?;
    print_result(text, &result);
  }

  // Validation failures carry the message shown to API callers
  match service.analyze(texts[0], Some("loud")) {
    Err(LexdensError::Validation(err)) => println!("rejected   : {err}"),
    other => println!("unexpected : {other:?}"),
  }

  Ok(())
}
