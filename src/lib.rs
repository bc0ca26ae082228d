pub mod dictionary;
pub mod error;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod selector;
pub mod session;
pub mod ui;

// Re-exports for convenience
pub use dictionary::Dictionary;
pub use error::DictionaryError;
pub use models::{AppState, QuizSession, Status};
pub use normalize::normalize;
pub use selector::{IndexSource, PairSelector, ThreadRngSource};
pub use session::{ADVANCE_DELAY, handle_quiz_input};
pub use ui::{draw_quit_confirmation, draw_quiz};
