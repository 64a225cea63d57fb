use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::colors;
use super::symbols::{ENVELOPE, SMALL_HEART, SPARKLE_SYMBOLS};
use super::{draw_centered, wrap_text};

/// The letter itself: paper, border, letterhead, the valentine's name
/// and the current prompt line. The buttons are drawn separately so
/// the No button can roam the card freely.
pub struct CardWidget<'a> {
    name: &'a str,
    prompt: &'a str,
    use_unicode: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(name: &'a str, prompt: &'a str) -> Self {
        Self {
            name,
            prompt,
            use_unicode: true,
        }
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 9 {
            return;
        }

        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        // Paper
        let paper_style = Style::default().bg(colors::CARD_BG);
        for y in area.y..=bottom {
            for x in area.x..=right {
                buf[(x, y)].set_char(' ').set_style(paper_style);
            }
        }

        // Border
        let border_style = Style::default().fg(colors::CARD_BORDER).bg(colors::CARD_BG);
        let (tl, tr, bl, br, h, v) = if self.use_unicode {
            ('╭', '╮', '╰', '╯', '─', '│')
        } else {
            ('+', '+', '+', '+', '-', '|')
        };
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

        // Letterhead
        let twinkle = SPARKLE_SYMBOLS.fresh.render(self.use_unicode);
        let letterhead = format!(
            "{} {} {}",
            twinkle,
            ENVELOPE.render(self.use_unicode),
            twinkle
        );
        let letterhead_style = Style::default().fg(colors::CARD_BORDER).bg(colors::CARD_BG);
        draw_centered(buf, area, area.y + 1, &letterhead, letterhead_style);

        // The valentine's name
        let name_line = if self.use_unicode {
            let heart = SMALL_HEART.render(true);
            format!("{} {} {}", heart, self.name, heart)
        } else {
            self.name.to_string()
        };
        let name_style = Style::default()
            .fg(colors::NAME_COLOR)
            .bg(colors::CARD_BG)
            .add_modifier(Modifier::BOLD);
        draw_centered(buf, area, area.y + 3, &name_line, name_style);

        // Prompt, wrapped to the paper width and kept clear of the
        // button zone at the bottom
        let inner_width = (area.width - 4) as usize;
        let prompt_style = Style::default().fg(colors::CARD_TEXT).bg(colors::CARD_BG);
        let max_y = area.y + area.height.saturating_sub(5);
        let mut y = area.y + 5;
        for line in wrap_text(self.prompt, inner_width) {
            if y >= max_y {
                break;
            }
            draw_centered(buf, area, y, &line, prompt_style);
            y += 1;
        }
    }
}
