//! Bucket pane for the bucket-based algorithms

use super::utils::pane_block;
use crate::memory::Buckets;
use crate::ui::sink::TuiSink;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bucket pane, one row per bucket, front element first
pub fn render_buckets_pane(
    frame: &mut Frame,
    area: Rect,
    buckets: &Buckets,
    sink: &TuiSink,
    is_focused: bool,
) {
    let block = pane_block(format!(" Buckets ({}) ", buckets.total_len()), is_focused);
    let active = sink.highlight.and_then(|h| h.bucket());

    let lines: Vec<Line> = buckets
        .iter()
        .enumerate()
        .map(|(b, queue)| {
            let label_style = if active == Some(b) {
                Style::default()
                    .fg(DEFAULT_THEME.moved)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let mut spans = vec![Span::styled(format!("{:>2} │", b), label_style)];
            for value in queue {
                spans.push(Span::styled(
                    format!(" {}", value),
                    Style::default().fg(DEFAULT_THEME.number),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
