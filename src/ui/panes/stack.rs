//! Call stack pane
//!
//! The top entry is the running procedure with its live registers. Below it
//! each saved frame is listed from the innermost caller outwards, with the
//! pseudocode line it resumes at and the registers it will get back.

use super::utils::{pane_block, register_spans};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Data needed to render the stack pane
pub struct StackRenderData<'a> {
    pub snapshot: &'a Snapshot,
    pub pseudocode: &'a [&'static str],
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    data: StackRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let depth = data.snapshot.call_depth();
    let block = pane_block(format!(" Call Stack ({}) ", depth), is_focused);

    let mut all_items = Vec::new();

    // running frame
    let header = Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            format!("Frame {} ", depth),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            "running",
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    all_items.push(ListItem::new(header));
    if data.snapshot.variables().is_empty() {
        all_items.push(ListItem::new("    (no registers)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let registers: Vec<_> = data.snapshot.variables().iter().collect();
        let mut spans = vec![Span::raw("    ")];
        spans.extend(register_spans(&registers));
        all_items.push(ListItem::new(Line::from(spans)));
    }

    for (n, (resume, saved)) in data.snapshot.frames().iter().enumerate() {
        let resume_text = if resume.is_terminal() {
            "return".to_string()
        } else {
            let text = data
                .pseudocode
                .get(resume.index())
                .map_or("???", |t| t.trim());
            format!("{}: {}", resume, text)
        };
        let header = Line::from(vec![
            Span::styled("  ↪ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("[{}] ", depth - 1 - n),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled("resume ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(resume_text, Style::default().fg(DEFAULT_THEME.primary)),
        ]);
        all_items.push(ListItem::new(header));

        let registers: Vec<_> = saved.iter().collect();
        let mut spans = vec![Span::raw("    ")];
        spans.extend(register_spans(&registers));
        all_items.push(ListItem::new(Line::from(spans)));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = all_items.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
