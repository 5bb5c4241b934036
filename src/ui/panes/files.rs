//! File scanner pane rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem},
    Frame,
};

use crate::sim::files::FileTable;
use crate::ui::theme::DEFAULT_THEME;

/// Render the current scan window of fake paths with their status labels,
/// plus the exfil gauge once the upload stage has started.
pub fn render_scan_pane(frame: &mut Frame, area: Rect, files: &FileTable) {
    let block = Block::default()
        .title(" DATA SCAN (local files) ")
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.header)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let width = rows[0].width as usize;
    let items: Vec<ListItem> = files
        .window()
        .iter()
        .map(|path| {
            let status = files.status_of(path);
            let color = if status.is_flagged() {
                DEFAULT_THEME.file_flagged
            } else {
                DEFAULT_THEME.file_ok
            };
            let label = format!("[{}]", status.label());
            // Path on the left, status flush right
            let path_width = width.saturating_sub(label.len() + 1);
            let shown = path.get(..path_width.min(path.len())).unwrap_or(path);
            let text = format!("{:<pw$} {}", shown, label, pw = path_width);
            ListItem::new(text).style(Style::default().fg(color))
        })
        .collect();
    frame.render_widget(List::new(items), rows[0]);

    if let Some(pct) = files.progress() {
        let gauge = Gauge::default()
            .label(format!("EXFIL {}%", pct))
            .percent(u16::from(pct))
            .gauge_style(
                Style::default()
                    .fg(DEFAULT_THEME.bright)
                    .bg(DEFAULT_THEME.gauge_bg),
            );
        frame.render_widget(gauge, rows[1]);
    }
}
