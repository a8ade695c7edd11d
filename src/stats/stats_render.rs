use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::StatisticsSnapshot;
use crate::theme;
use crate::widgets::popup;

const POPUP_TITLE: &str = " Most common word ";
const POPUP_MIN_WIDTH: u16 = 24;
const POPUP_HEIGHT: u16 = 4;

fn stat_spans(label: &'static str, value: usize) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(theme::stats::LABEL)),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme::stats::VALUE)
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Render the right-aligned `Words / Sentences / Paragraphs` bar
pub fn render_bar(snapshot: &StatisticsSnapshot, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(7);
    spans.extend(stat_spans("Words: ", snapshot.word_count));
    spans.push(Span::raw("  "));
    spans.extend(stat_spans("Sentences: ", snapshot.sentence_count));
    spans.push(Span::raw("  "));
    spans.extend(stat_spans("Paragraphs: ", snapshot.paragraph_count));
    spans.push(Span::raw(" "));

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(bar, area);
}

/// Render the most-common-word popup centered over `area`
pub fn render_popup(snapshot: &StatisticsSnapshot, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let word = snapshot.most_common_word.as_str();
    // Display cells, not chars; clamped for pathological tokens
    let word_width = u16::try_from(Span::raw(word).width()).unwrap_or(u16::MAX);
    let width = word_width.saturating_add(6).max(POPUP_MIN_WIDTH);

    let popup_area = popup::centered_popup(area, width, POPUP_HEIGHT);
    if popup_area.width < 4 || popup_area.height < 3 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let word_line = if word.is_empty() {
        Line::from(Span::styled(
            "(no words yet)",
            Style::default()
                .fg(theme::stats::POPUP_EMPTY)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            word,
            Style::default()
                .fg(theme::stats::POPUP_WORD)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(POPUP_TITLE)
        .border_style(Style::default().fg(theme::stats::POPUP_BORDER))
        .style(Style::default().bg(theme::stats::POPUP_BG));

    let content = Paragraph::new(vec![word_line, Line::from("")])
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(content, popup_area);
    Some(popup_area)
}
