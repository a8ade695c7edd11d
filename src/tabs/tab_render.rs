use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use super::TabStrip;
use crate::documents::{DocumentId, DocumentRegistry};
use crate::theme;

const EMPTY_STRIP: &str = " No open documents";

/// Tab label: document name with a trailing `*` while unsaved
pub fn tab_title(registry: &DocumentRegistry, id: DocumentId) -> String {
    match registry.get(id) {
        Some(doc) if doc.is_modified() => format!("{}*", doc.name()),
        Some(doc) => doc.name().to_string(),
        None => "?".to_string(),
    }
}

pub fn render_strip(strip: &TabStrip, registry: &DocumentRegistry, frame: &mut Frame, area: Rect) {
    if strip.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_STRIP,
            Style::default()
                .fg(theme::tabs::EMPTY)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let titles: Vec<Line> = strip
        .ids()
        .iter()
        .map(|id| Line::from(tab_title(registry, *id)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(strip.selected_index().unwrap_or(0))
        .style(Style::default().fg(theme::tabs::INACTIVE))
        .highlight_style(
            Style::default()
                .fg(theme::tabs::ACTIVE_FG)
                .bg(theme::tabs::ACTIVE_BG)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(theme::tabs::DIVIDER)));

    frame.render_widget(tabs, area);
}
