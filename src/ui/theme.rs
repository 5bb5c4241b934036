use ratatui::style::Color;

use crate::sim::feed::Tone;

pub struct Theme {
    pub panel_bg: Color,
    pub border: Color,
    pub header: Color,
    pub rain: Color,
    pub trace: Color,  // routine tooling chatter
    pub bright: Color, // upload progress
    pub warn: Color,   // sensitive-data hits
    pub alert: Color,  // encryption / countdown drama
    pub net: Color,    // fake network gibberish
    pub notice: Color, // the closing prank notice
    pub file_ok: Color,
    pub file_flagged: Color,
    pub proc_text: Color,
    pub cpu_bar: Color,
    pub gauge_bg: Color,
    pub popup_alert_bg: Color,
    pub popup_info_bg: Color,
    pub popup_border: Color,
    pub popup_alert_title: Color,
    pub popup_info_title: Color,
    pub popup_body: Color,
    pub banner: Color,
}

impl Theme {
    /// Resolve a feed tone to its display color.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Trace => self.trace,
            Tone::Bright => self.bright,
            Tone::Warn => self.warn,
            Tone::Alert => self.alert,
            Tone::Net => self.net,
            Tone::Notice => self.notice,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    panel_bg: Color::Rgb(7, 16, 24),
    border: Color::Rgb(40, 70, 60),
    header: Color::Rgb(214, 255, 230),
    rain: Color::Rgb(15, 170, 95),
    trace: Color::Rgb(158, 242, 194),
    bright: Color::Rgb(234, 255, 255),
    warn: Color::Rgb(255, 214, 165),
    alert: Color::Rgb(255, 138, 138),
    net: Color::Rgb(191, 239, 255),
    notice: Color::Rgb(166, 240, 179),
    file_ok: Color::Rgb(102, 255, 102),
    file_flagged: Color::Rgb(255, 76, 76),
    proc_text: Color::Rgb(191, 255, 216),
    cpu_bar: Color::Rgb(255, 107, 107),
    gauge_bg: Color::Rgb(20, 35, 30),
    popup_alert_bg: Color::Rgb(43, 0, 0),
    popup_info_bg: Color::Rgb(34, 34, 51),
    popup_border: Color::Rgb(255, 68, 68),
    popup_alert_title: Color::Rgb(255, 179, 179),
    popup_info_title: Color::Rgb(223, 230, 255),
    popup_body: Color::Rgb(255, 255, 255),
    banner: Color::Rgb(166, 240, 179),
};
