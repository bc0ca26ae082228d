use thiserror::Error;

/// Failures while loading or validating the dictionary resource.
/// All of these are fatal at startup; wrong answers are never errors.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("The dictionary has no entries. Add at least one word to the dictionary file.")]
    Empty,
    #[error("The term '{term}' has no meaning. Fix the dictionary file.")]
    MissingMeaning { term: String },
    #[error("Could not read the dictionary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("The dictionary file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
