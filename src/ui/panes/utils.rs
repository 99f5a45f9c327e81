use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// `name = value` pairs as styled spans separated by commas
pub(crate) fn register_spans(registers: &[(&'static str, i32)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(registers.len() * 4);
    for (n, &(name, value)) in registers.iter().enumerate() {
        if n > 0 {
            spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.comment)));
        }
        spans.push(Span::styled(name, Style::default().fg(DEFAULT_THEME.index_label)));
        spans.push(Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)));
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        ));
    }
    spans
}

/// Keep `offset` such that `row` stays inside a window of `height` rows
pub(crate) fn follow_row(offset: usize, row: usize, height: usize) -> usize {
    if row < offset {
        row
    } else if row >= offset + height {
        row + 1 - height
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_row_scrolls_minimally() {
        assert_eq!(follow_row(0, 3, 5), 0);
        assert_eq!(follow_row(0, 7, 5), 3);
        assert_eq!(follow_row(4, 2, 5), 2);
    }

    #[test]
    fn register_spans_join_pairs() {
        let text: String = register_spans(&[("i", 1), ("p", -4)])
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "i = 1, p = -4");
    }
}
