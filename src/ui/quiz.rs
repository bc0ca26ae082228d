use crate::models::{QuizSession, Status};
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let header = Paragraph::new("Spanish → English Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut term_text = Text::default();
    term_text.push_line(Line::from(""));
    term_text.push_line(Line::from(Span::styled(
        session.current_term.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if session.hint_visible {
        term_text.push_line(Line::from(""));
        term_text.push_line(Line::from(Span::styled(
            format!("Hint: {}", session.hint()),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let term = Paragraph::new(term_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("What is this in English?"),
        );
    f.render_widget(term, layout.term_area);

    let input_content = if session.input_buffer.is_empty() {
        Text::from(Span::styled(
            "[Type the English meaning...]",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Text::from(session.input_buffer.as_str())
    };
    let input = Paragraph::new(input_content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Answer"),
    );
    f.render_widget(input, layout.input_area);

    // Place the terminal cursor after the typed portion, accounting for
    // double-width characters.
    let cursor_offset: usize = session
        .input_buffer
        .chars()
        .take(session.cursor_position)
        .map(|c| c.width().unwrap_or(1))
        .sum();
    let max_x = layout.input_area.width.saturating_sub(2) as usize;
    let cursor_x = layout.input_area.x + 1 + cursor_offset.min(max_x) as u16;
    let cursor_y = layout.input_area.y + 1;
    f.set_cursor_position((cursor_x, cursor_y));

    let feedback = match session.status {
        Status::Idle => Paragraph::new("Press Enter to submit. Tab shows a hint if you need a nudge.")
            .style(Style::default().add_modifier(Modifier::DIM)),
        Status::Correct => Paragraph::new(Span::styled(
            "✓ Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Status::Wrong => {
            let mut text = Text::default();
            text.push_line(Line::from(vec![
                Span::styled("✗ Not quite. ", Style::default().fg(Color::Red)),
                Span::from("The correct answer is "),
                Span::styled(
                    session.meaning(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::from("."),
            ]));
            text.push_line(Line::from(""));
            text.push_line(Line::from("Edit your answer and submit again, or press Ctrl+N for the next word."));
            Paragraph::new(text)
        }
    };
    f.render_widget(
        feedback.wrap(Wrap { trim: true }).block(Block::default().borders(Borders::ALL)),
        layout.feedback_area,
    );

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Submit  "),
        Span::styled(
            "Tab",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Hint  "),
        Span::styled(
            "Ctrl+N",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Next Word  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Practicing)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
