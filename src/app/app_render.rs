use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;

const EMPTY_HINT: &str = "No document open. Ctrl+N for a new one, Ctrl+O to open a file.";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [tabs_area, editor_area, stats_area, bottom_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        crate::tabs::tab_render::render_strip(&self.tabs, &self.registry, frame, tabs_area);
        self.render_editor(frame, editor_area);
        crate::stats::stats_render::render_bar(&self.stats, frame, stats_area);

        if self.prompt.is_visible() {
            crate::prompt::prompt_render::render_prompt(&self.prompt, frame, bottom_area);
        } else {
            crate::help::help_line_render::render_line(self, frame, bottom_area);
        }

        if self.stats_popup_visible {
            crate::stats::stats_render::render_popup(&self.stats, frame, editor_area);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::editor::BORDER));

        let Some(document) = self.registry.active_document() else {
            let hint = Paragraph::new(Span::styled(
                EMPTY_HINT,
                Style::default()
                    .fg(theme::editor::EMPTY_HINT)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(hint, area);
            return;
        };

        let mut title = vec![Span::styled(
            format!(" {}", document.name()),
            Style::default()
                .fg(theme::editor::TITLE)
                .add_modifier(Modifier::BOLD),
        )];
        if document.is_modified() {
            title.push(Span::styled(
                "*",
                Style::default().fg(theme::editor::MODIFIED_MARKER),
            ));
        }
        title.push(Span::raw(" "));

        let id = document.id();
        if let Some(textarea) = self.editors.get_mut(id) {
            textarea.set_block(block.title(Line::from(title)));
            frame.render_widget(&*textarea, area);
        }
    }
}
