//! Pseudocode pane with the current line highlighted
//!
//! Procedure headers (lines without indentation) are drawn in the function
//! colour. The extra registers of the current snapshot, such as the pivot,
//! are shown below the listing.

use super::utils::{follow_row, pane_block, register_spans};
use crate::snapshot::Line as CodeLine;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the pseudocode pane
pub struct PseudocodeRenderData<'a> {
    pub pseudocode: &'a [&'static str],
    pub current: CodeLine,
    pub extra: &'a [(&'static str, i32)],
    pub finished: bool,
}

fn code_line(idx: usize, text: &'static str, is_current: bool) -> Line<'static> {
    let is_header = !text.starts_with(' ');
    let (num_style, content_style) = if is_current {
        (
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else if is_header {
        (
            Style::default().fg(DEFAULT_THEME.comment),
            Style::default().fg(DEFAULT_THEME.function),
        )
    } else {
        (
            Style::default().fg(DEFAULT_THEME.comment),
            Style::default().fg(DEFAULT_THEME.fg),
        )
    };

    let marker = if is_current { "▶" } else { " " };
    let number = if is_header { "   ".to_string() } else { format!("{:2} ", idx) };
    Line::from(vec![
        Span::styled(marker, num_style),
        Span::styled(number, num_style),
        Span::styled(text, content_style),
    ])
}

/// Render the pseudocode pane
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    data: PseudocodeRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Pseudocode ".to_string(), is_focused);

    let mut lines: Vec<Line> = data
        .pseudocode
        .iter()
        .enumerate()
        .map(|(idx, &text)| {
            let is_current = !data.current.is_terminal() && idx == data.current.index();
            code_line(idx, text, is_current)
        })
        .collect();

    lines.push(Line::default());
    if data.finished {
        lines.push(Line::styled(
            "  sorted",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ));
    } else if !data.extra.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(register_spans(data.extra));
        lines.push(Line::from(spans));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if !data.current.is_terminal() {
        *scroll_offset = follow_row(*scroll_offset, data.current.index(), visible_height);
    }
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
