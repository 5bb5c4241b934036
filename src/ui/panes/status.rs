//! Bottom banner rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

const BANNER: &str = "SSH: attacker@darknet ~> connected";

/// Render the one-line fake session banner at the bottom of the screen.
pub fn render_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(BANNER)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(DEFAULT_THEME.banner)
                .add_modifier(Modifier::ITALIC),
        );
    frame.render_widget(banner, area);
}
