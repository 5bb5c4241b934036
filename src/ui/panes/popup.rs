//! Fake dialog overlay rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::sim::popup::{PopupKind, Popups};
use crate::ui::theme::DEFAULT_THEME;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 7;

/// Render every active popup, newest on top, each nudged off-center by
/// its own random offset.
pub fn render_popups(frame: &mut Frame, area: Rect, popups: &Popups) {
    for popup in popups.iter() {
        let rect = placement(area, popup.offset);
        if rect.width < 10 || rect.height < 4 {
            continue;
        }

        let (bg, title_fg) = match popup.kind {
            PopupKind::Alert => (DEFAULT_THEME.popup_alert_bg, DEFAULT_THEME.popup_alert_title),
            PopupKind::Info => (DEFAULT_THEME.popup_info_bg, DEFAULT_THEME.popup_info_title),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(DEFAULT_THEME.popup_border))
            .style(Style::default().bg(bg));

        let text = vec![
            Line::from(Span::styled(
                popup.title.as_str(),
                Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                popup.body.as_str(),
                Style::default().fg(DEFAULT_THEME.popup_body),
            )),
        ];

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
            rect,
        );
    }
}

/// Center a popup-sized rect in `area`, apply the popup's offset, and
/// clamp it back inside.
fn placement(area: Rect, offset: (i16, i16)) -> Rect {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let max_x = area.width - width;
    let max_y = area.height - height;

    let center_x = i32::from(max_x) / 2 + i32::from(offset.0);
    let center_y = i32::from(max_y) / 2 + i32::from(offset.1);
    let x = center_x.clamp(0, i32::from(max_x)) as u16;
    let y = center_y.clamp(0, i32::from(max_y)) as u16;

    Rect::new(area.x + x, area.y + y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_stays_inside_area() {
        let area = Rect::new(2, 1, 100, 30);
        for &offset in &[(0, 0), (-10, -4), (10, 4), (i16::MIN, i16::MAX)] {
            let rect = placement(area, offset);
            assert!(rect.x >= area.x);
            assert!(rect.y >= area.y);
            assert!(rect.x + rect.width <= area.x + area.width);
            assert!(rect.y + rect.height <= area.y + area.height);
        }
    }

    #[test]
    fn test_placement_shrinks_to_tiny_areas() {
        let area = Rect::new(0, 0, 8, 3);
        let rect = placement(area, (0, 0));
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
