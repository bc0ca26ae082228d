use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use vocab_quiz::{
    AppState, Dictionary, PairSelector, QuizSession, draw_quit_confirmation, draw_quiz,
    handle_quiz_input, logger,
};

const DEFAULT_DICTIONARY: &str = "data/spanish-to-english.json";

/// Upper bound on how long the loop sleeps waiting for input, so the screen
/// stays responsive even when no advance is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY));

    // Dictionary problems abort before the terminal is touched, so the
    // message stays readable on stderr.
    let dictionary = match Dictionary::load(&path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("{}: {}", path.display(), err);
            std::process::exit(1);
        }
    };
    logger::log(&format!(
        "Loaded {} entries from {}",
        dictionary.len(),
        path.display()
    ));

    let mut session = QuizSession::new(dictionary, PairSelector::new());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut QuizSession,
) -> io::Result<()> {
    let mut app_state = AppState::Quiz;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Quiz => draw_quiz(f, session),
            AppState::QuitConfirm => draw_quit_confirmation(f),
        })?;

        // Wake up in time for a pending auto-advance even without input.
        let timeout = session
            .time_until_advance(Instant::now())
            .map(|left| left.min(IDLE_POLL))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                match app_state {
                    AppState::Quiz => handle_quiz_input(session, key, &mut app_state),
                    AppState::QuitConfirm => match key.code {
                        KeyCode::Char('y') => return Ok(()),
                        KeyCode::Char('n') | KeyCode::Esc => app_state = AppState::Quiz,
                        _ => {}
                    },
                }
            }
        }

        session.tick(Instant::now());
    }
}
