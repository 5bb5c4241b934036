//! Process monitor pane rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem},
    Frame,
};

use crate::sim::procs::ProcessTable;
use crate::ui::theme::DEFAULT_THEME;

/// Render the fake process list under a simulated system CPU bar.
pub fn render_process_pane(frame: &mut Frame, area: Rect, procs: &ProcessTable) {
    let block = Block::default()
        .title(" PROCESS MONITOR ")
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
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let cpu = procs.system_cpu.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .label(format!("CPU USAGE: {:.1}%", procs.system_cpu))
        .percent(cpu as u16)
        .gauge_style(
            Style::default()
                .fg(DEFAULT_THEME.cpu_bar)
                .bg(DEFAULT_THEME.gauge_bg),
        );
    frame.render_widget(gauge, rows[0]);

    let items: Vec<ListItem> = procs
        .processes()
        .iter()
        .map(|entry| {
            let text = format!(
                "{:<12}  PID {:>5}   CPU {:>4.1}%",
                entry.name, entry.pid, entry.cpu
            );
            ListItem::new(text).style(Style::default().fg(DEFAULT_THEME.proc_text))
        })
        .collect();
    frame.render_widget(List::new(items), rows[1]);
}
