use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::colors;
use super::symbols::SMALL_HEART;

/// Status bar at the bottom of the screen
pub struct StatusBar {
    attempts: u32,
    answered: bool,
    use_unicode: bool,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            attempts: 0,
            answered: false,
            use_unicode: true,
        }
    }

    pub fn attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn answered(mut self, answered: bool) -> Self {
        self.answered = answered;
        self
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Background
        let bg_style = Style::default().bg(colors::STATUS_BG);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        let accent_style = Style::default()
            .fg(colors::YES_BG)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(colors::STATUS_FG);

        // Wordmark
        let mut x = area.x + 1;
        let logo = format!("{} smitten", SMALL_HEART.render(self.use_unicode));
        for ch in logo.chars() {
            if x >= area.x + area.width {
                break;
            }
            buf[(x, area.y)].set_char(ch).set_style(accent_style);
            x += 1;
        }
        x += 2;

        // Dodge count, once the chase has started
        if self.attempts > 0 && !self.answered {
            let count_text = format!("dodges: {}", self.attempts);
            for ch in count_text.chars() {
                if x >= area.x + area.width - 1 {
                    break;
                }
                buf[(x, area.y)].set_char(ch).set_style(label_style);
                x += 1;
            }
        }

        // Right-aligned hint
        let hint = match (self.answered, self.use_unicode) {
            (true, _) => "q quits",
            (false, true) => "answer with the mouse \u{00B7} q quits",
            (false, false) => "answer with the mouse - q quits",
        };
        let hint_len = hint.chars().count() as u16;
        if area.width > hint_len + 1 {
            let mut hx = area.x + area.width - hint_len - 1;
            for ch in hint.chars() {
                buf[(hx, area.y)].set_char(ch).set_style(label_style);
                hx += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_wordmark_and_hint() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new().render(area, &mut buf);
        let row = row_text(&buf, 0);
        assert!(row.contains("smitten"));
        assert!(row.contains("q quits"));
    }

    #[test]
    fn test_status_bar_shows_dodge_count() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new().attempts(7).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("dodges: 7"));
    }

    #[test]
    fn test_status_bar_hides_count_after_answer() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new().attempts(7).answered(true).render(area, &mut buf);
        assert!(!row_text(&buf, 0).contains("dodges"));
    }

    #[test]
    fn test_status_bar_survives_tiny_area() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new().render(area, &mut buf);
    }
}
