use crate::dictionary::Dictionary;
use crate::logger;
use crate::models::{AppState, PendingAdvance, QuizSession, Status};
use crate::normalize::normalize;
use crate::selector::PairSelector;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Pause between a correct answer and the automatic jump to the next word.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(700);

impl QuizSession {
    /// Starts a session on the given dictionary and immediately opens the
    /// first round. The dictionary is validated (non-empty, every term has a
    /// meaning) before it gets here, so the session itself cannot fail.
    pub fn new(dictionary: Dictionary, selector: PairSelector) -> Self {
        let mut session = Self {
            dictionary,
            selector,
            current_term: String::new(),
            input_buffer: String::new(),
            cursor_position: 0,
            status: Status::Idle,
            hint_visible: false,
            round: 0,
            pending_advance: None,
        };
        session.reset();
        session
    }

    /// Opens a new round: new random term, cleared input, `Idle` status,
    /// hidden hint. Bumping the round counter invalidates any advance that
    /// was scheduled for the previous round.
    pub fn reset(&mut self) {
        self.round += 1;
        self.pending_advance = None;
        self.current_term = self.selector.pick(&self.dictionary).to_string();
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.status = Status::Idle;
        self.hint_visible = false;
        logger::log(&format!(
            "Round {} started with term '{}'",
            self.round, self.current_term
        ));
    }

    /// English meaning of the current term. Always present: `Dictionary::new`
    /// rejects terms without a meaning at load time.
    pub fn meaning(&self) -> &str {
        self.dictionary
            .meaning(&self.current_term)
            .expect("picked term is always in the dictionary")
    }

    /// Hint shown on demand: the first letter of the meaning, uppercased.
    pub fn hint(&self) -> String {
        self.meaning()
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }

    /// Evaluates the current input against the current meaning. A match sets
    /// `Correct` and schedules the delayed advance; a mismatch sets `Wrong`
    /// and waits for the user (edit and resubmit, or skip with next).
    /// Submitting again while already `Correct` is ignored, so at most one
    /// advance is ever pending.
    pub fn submit(&mut self, now: Instant) {
        if self.status == Status::Correct {
            return;
        }

        if normalize(&self.input_buffer) == normalize(self.meaning()) {
            self.status = Status::Correct;
            self.pending_advance = Some(PendingAdvance {
                round: self.round,
                due: now + ADVANCE_DELAY,
            });
            logger::log(&format!("Round {}: correct answer", self.round));
        } else {
            self.status = Status::Wrong;
            logger::log(&format!(
                "Round {}: wrong answer '{}' (expected '{}')",
                self.round,
                self.input_buffer,
                self.meaning()
            ));
        }
    }

    /// Flips hint visibility; status and round are untouched.
    pub fn toggle_hint(&mut self) {
        self.hint_visible = !self.hint_visible;
    }

    /// Skips to a new round immediately, bypassing any pending delay.
    pub fn next(&mut self) {
        self.reset();
    }

    /// Fires the pending advance if its delay has elapsed. An advance left
    /// over from a superseded round is discarded without touching the
    /// current one.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending_advance else {
            return;
        };
        if pending.round != self.round {
            self.pending_advance = None;
            return;
        }
        if now >= pending.due {
            self.reset();
        }
    }

    /// Time left until the pending advance fires, if one is scheduled. Used
    /// by the event loop to size its poll timeout.
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.pending_advance
            .map(|pending| pending.due.saturating_duration_since(now))
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len())
    }

    fn char_count(&self) -> usize {
        self.input_buffer.chars().count()
    }
}

/// Maps key events onto session transitions while the quiz screen is active.
pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            session.submit(Instant::now());
        }
        KeyCode::Tab => {
            session.toggle_hint();
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.next();
        }
        KeyCode::Left => {
            session.cursor_position = session.cursor_position.saturating_sub(1);
        }
        KeyCode::Right => {
            if session.cursor_position < session.char_count() {
                session.cursor_position += 1;
            }
        }
        KeyCode::Backspace => {
            if session.cursor_position > 0 {
                let at = session.byte_index(session.cursor_position - 1);
                session.input_buffer.remove(at);
                session.cursor_position -= 1;
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let at = session.byte_index(session.cursor_position);
            session.input_buffer.insert(at, c);
            session.cursor_position += 1;
        }
        _ => {}
    }
}
