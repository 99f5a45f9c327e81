//! Array pane: one bar per slot
//!
//! Bars inside the current subset use the subset colour, operands of the last
//! operation are highlighted, and a slot whose element sits in a bucket is
//! drawn as an empty bar. The label under each bar is the list of registers
//! pointing at it, or the index when none does.

use super::utils::pane_block;
use crate::memory::SortArray;
use crate::ui::sink::{Highlight, TuiSink};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Data needed to render the array pane
pub struct ArrayRenderData<'a> {
    pub title: &'a str,
    pub array: &'a SortArray,
    pub sink: &'a TuiSink,
}

fn bar_style(index: usize, sink: &TuiSink) -> Style {
    let touched = sink
        .highlight
        .filter(|h| h.positions().contains(&Some(index)));
    match touched {
        Some(h) if h.is_compare() => Style::default().fg(DEFAULT_THEME.compare),
        Some(_) => Style::default().fg(DEFAULT_THEME.moved),
        None => match sink.subset {
            Some((lo, hi)) if (lo..=hi).contains(&index) => {
                Style::default().fg(DEFAULT_THEME.bar_subset)
            }
            _ if sink.finished => Style::default().fg(DEFAULT_THEME.success),
            _ => Style::default().fg(DEFAULT_THEME.bar),
        },
    }
}

fn bar_label(index: usize, sink: &TuiSink) -> Line<'static> {
    match sink.labels.get(&index) {
        Some(names) => Line::styled(
            names.join(","),
            Style::default()
                .fg(DEFAULT_THEME.index_label)
                .add_modifier(Modifier::BOLD),
        ),
        None => Line::styled(index.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
    }
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: ArrayRenderData, is_focused: bool) {
    let title = match data.sink.highlight {
        Some(h) => format!(" {} │ {} ", data.title, h.describe()),
        None => format!(" {} ", data.title),
    };
    let block = pane_block(title, is_focused);

    let slots = data.array.slots();
    if slots.is_empty() {
        let paragraph = Paragraph::new("(empty input)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // bars are drawn from the smallest value up so negative input still shows
    let floor = slots.iter().flatten().copied().min().unwrap_or(0).min(0);
    let height = |v: i32| (i64::from(v) - i64::from(floor) + 1) as u64;
    let max = slots.iter().flatten().map(|&v| height(v)).max().unwrap_or(1);

    let bars: Vec<Bar> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| match slot {
            Some(value) => Bar::default()
                .value(height(*value))
                .text_value(value.to_string())
                .label(bar_label(index, data.sink))
                .style(bar_style(index, data.sink))
                .value_style(
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg),
                ),
            None => Bar::default()
                .value(0)
                .text_value("·".to_string())
                .label(bar_label(index, data.sink))
                .style(Style::default().fg(DEFAULT_THEME.comment)),
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let gap = if inner_width >= slots.len() * 3 { 1 } else { 0 };
    let bar_width = (inner_width.saturating_sub(gap * slots.len()) / slots.len()).clamp(1, 9) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap as u16)
        .max(max);
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn compare_operands_take_precedence_over_subset() {
        let mut sink = TuiSink::new(Duration::ZERO);
        sink.subset = Some((0, 3));
        sink.highlight = Some(Highlight::Compare {
            i: 1,
            j: 2,
            greater: false,
        });
        assert_eq!(bar_style(1, &sink), Style::default().fg(DEFAULT_THEME.compare));
        assert_eq!(bar_style(0, &sink), Style::default().fg(DEFAULT_THEME.bar_subset));
        assert_eq!(bar_style(5, &sink), Style::default().fg(DEFAULT_THEME.bar));
    }
}
