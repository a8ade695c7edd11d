use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use super::PromptState;
use crate::theme;

/// Draw the prompt label and its input line into a one-row `area`
pub fn render_prompt(prompt: &PromptState, frame: &mut Frame, area: Rect) {
    let Some(kind) = prompt.kind() else {
        return;
    };

    let label = kind.label();
    let [label_area, input_area] = Layout::horizontal([
        Constraint::Length(label.chars().count() as u16 + 1),
        Constraint::Min(1),
    ])
    .areas(area);

    let label = Paragraph::new(Span::styled(
        format!(" {}", label),
        Style::default()
            .fg(theme::prompt::LABEL)
            .bg(theme::prompt::BG)
            .add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(theme::prompt::BG));

    frame.render_widget(label, label_area);
    frame.render_widget(prompt.textarea(), input_area);
}
