use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::colors;
use super::colors::dim_color;

/// Height of every button, border rows included
pub const BUTTON_HEIGHT: u16 = 3;

/// Width a button with this label occupies: the label, one space of
/// breathing room per side, and the border columns
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Screen rect for a button with this label, anchored at its top-left
pub fn button_rect(x: u16, y: u16, label: &str) -> Rect {
    Rect::new(x, y, button_width(label), BUTTON_HEIGHT)
}

/// A small bordered button drawn at an absolute position
pub struct ButtonWidget<'a> {
    label: &'a str,
    fg: Color,
    bg: Color,
    border: Color,
    brightness: f32,
    bold: bool,
    use_unicode: bool,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            fg: colors::CARD_TEXT,
            bg: colors::CARD_BG,
            border: colors::CARD_BORDER,
            brightness: 1.0,
            bold: false,
            use_unicode: true,
        }
    }

    pub fn colors(mut self, fg: Color, bg: Color, border: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self.border = border;
        self
    }

    /// Scale the fill and border brightness; the glow pulse drives this
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < BUTTON_HEIGHT {
            return;
        }

        let bg = dim_color(self.bg, self.brightness);
        let fill_style = Style::default().bg(bg);
        let border_style = Style::default()
            .fg(dim_color(self.border, self.brightness))
            .bg(bg);
        let mut label_style = Style::default().fg(self.fg).bg(bg);
        if self.bold {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let (tl, tr, bl, br, h, v) = if self.use_unicode {
            ('╭', '╮', '╰', '╯', '─', '│')
        } else {
            ('+', '+', '+', '+', '-', '|')
        };

        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        // Fill
        for y in area.y..=bottom {
            for x in area.x..=right {
                buf[(x, y)].set_char(' ').set_style(fill_style);
            }
        }

        // Border
        for x in area.x + 1..right {
            buf[(x, area.y)].set_char(h).set_style(border_style);
            buf[(x, bottom)].set_char(h).set_style(border_style);
        }
        for y in area.y + 1..bottom {
            buf[(area.x, y)].set_char(v).set_style(border_style);
            buf[(right, y)].set_char(v).set_style(border_style);
        }
        buf[(area.x, area.y)].set_char(tl).set_style(border_style);
        buf[(right, area.y)].set_char(tr).set_style(border_style);
        buf[(area.x, bottom)].set_char(bl).set_style(border_style);
        buf[(right, bottom)].set_char(br).set_style(border_style);

        // Label, centered on the middle row
        let label_len = self.label.chars().count() as u16;
        let mut x = area.x + (area.width.saturating_sub(label_len)) / 2;
        let y = area.y + area.height / 2;
        for ch in self.label.chars() {
            if x >= right {
                break;
            }
            buf[(x, y)].set_char(ch).set_style(label_style);
            x += 1;
        }
    }
}
