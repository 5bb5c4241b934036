//! Matrix rain backdrop rendering.

use rand::Rng;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::sim::rain::Rain;
use crate::ui::theme::DEFAULT_THEME;

/// Advance the rain one frame and draw it. Borderless on purpose; it
/// reads as a backdrop, not a panel.
pub fn render_rain_pane(frame: &mut Frame, area: Rect, rain: &mut Rain, rng: &mut impl Rng) {
    rain.resize(area.width as usize, rng);
    rain.advance(area.height, rng);

    let style = Style::default().fg(DEFAULT_THEME.rain);
    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..i32::from(area.height) {
        let mut text = String::with_capacity(area.width as usize);
        for &drop in rain.drops() {
            text.push(if drop == row { Rain::glyph(rng) } else { ' ' });
        }
        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
