use crate::constants::{TITLE_WELCOME, WELCOME_BANNER};
use crate::ui::core::{Action, Component, Pane};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Static welcome page with the banner
#[derive(Debug, Default)]
pub struct WelcomeComponent {
    focused: bool,
}

impl WelcomeComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for WelcomeComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Left => Action::FocusPane(Pane::Menu),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let lines: Vec<Line> = WELCOME_BANNER.iter().map(|line| Line::from(*line)).collect();
        let border_color = if self.focused { Color::Cyan } else { Color::White };

        let welcome = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(TITLE_WELCOME),
        );
        f.render_widget(welcome, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
