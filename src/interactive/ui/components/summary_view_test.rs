#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::summary_view::SummaryView;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let cell = buffer.cell((x, y)).unwrap();
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_to_string(view: &mut SummaryView, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| view.render(f, f.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let mut view = SummaryView::new();
        view.set_summary("Robot arm control is trending.".to_string());

        let output = render_to_string(&mut view, 80, 6);
        assert!(output.contains("AI Summary"));
        assert!(output.contains("Robot arm control is trending."));
    }

    #[test]
    fn test_long_summary_wraps() {
        let mut view = SummaryView::new();
        view.set_summary("word ".repeat(50));

        let output = render_to_string(&mut view, 40, 12);
        let rows_with_text = output
            .lines()
            .filter(|line| line.contains("word"))
            .count();
        assert!(rows_with_text > 1);
    }

    #[test]
    fn test_set_summary_replaces() {
        let mut view = SummaryView::new();
        view.set_summary("first".to_string());
        view.set_summary("second".to_string());

        assert_eq!(view.summary(), "second");
        let output = render_to_string(&mut view, 80, 4);
        assert!(!output.contains("first"));
    }

    #[test]
    fn test_keys_not_consumed() {
        let mut view = SummaryView::new();
        assert!(view.handle_key(create_key_event(KeyCode::Enter)).is_none());
        assert!(view.handle_key(create_key_event(KeyCode::Down)).is_none());
    }
}
