//! Fake terminal pane rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

use crate::sim::feed::Feed;
use crate::ui::theme::DEFAULT_THEME;

/// Render the scrolling log of "attacker" output, pinned to the newest
/// lines.
pub fn render_feed_pane(frame: &mut Frame, area: Rect, feed: &Feed) {
    let block = Block::default()
        .title(" root@victim:~ ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .padding(Padding::new(1, 0, 0, 0));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total = feed.len();
    let skip = total.saturating_sub(visible_height);

    let items: Vec<ListItem> = feed
        .lines()
        .skip(skip)
        .map(|line| {
            ListItem::new(line.text.as_str())
                .style(Style::default().fg(DEFAULT_THEME.tone(line.tone)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
