use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub term_area: Rect,
    pub input_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        term_area: chunks[1],
        input_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.feedback_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.term_area.height >= 5);
    }

    #[test]
    fn test_quiz_layout_small_terminal() {
        let area = Rect::new(0, 0, 40, 12);
        let layout = calculate_quiz_chunks(area);

        // Even cramped terminals get an input row somewhere sane.
        assert!(layout.input_area.y >= layout.term_area.y);
    }
}
