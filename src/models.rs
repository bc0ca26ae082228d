use crate::dictionary::Dictionary;
use crate::selector::PairSelector;
use std::time::Instant;

/// Outcome of the last submission in the current round. `Idle` means nothing
/// has been submitted since the round started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Correct,
    Wrong,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
}

/// Auto-advance scheduled after a correct answer, bound to the round it was
/// scheduled in so it can never reset a round that superseded it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingAdvance {
    pub(crate) round: u64,
    pub(crate) due: Instant,
}

#[derive(Debug)]
pub struct QuizSession {
    pub(crate) dictionary: Dictionary,
    pub(crate) selector: PairSelector,
    pub current_term: String,
    pub input_buffer: String,
    /// Cursor offset into `input_buffer`, counted in chars.
    pub cursor_position: usize,
    pub status: Status,
    pub hint_visible: bool,
    pub(crate) round: u64,
    pub(crate) pending_advance: Option<PendingAdvance>,
}
