use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::animation::pulse::heartbeat;
use crate::animation::{ConfettiRain, HeartBurst};
use crate::i18n::Strings;

use super::colors::{self, dim_color, get_confetti_color, mix_color};
use super::symbols::{get_confetti_glyph, SMALL_HEART};
use super::{draw_centered, wrap_text};

/// The big heart, as a mask; `#` cells become heart glyphs
const BIG_HEART_ROWS: [&str; 6] = [
    " ## ## ",
    "#######",
    "#######",
    " ##### ",
    "  ###  ",
    "   #   ",
];

/// Everything shown once YES lands: confetti rain, the beating heart,
/// the celebration copy and the one-shot heart burst.
pub struct CelebrationWidget<'a> {
    strings: &'a Strings,
    name: &'a str,
    rain: &'a ConfettiRain,
    burst: Option<&'a HeartBurst>,
    time: f32,
    use_unicode: bool,
}

impl<'a> CelebrationWidget<'a> {
    pub fn new(strings: &'a Strings, name: &'a str, rain: &'a ConfettiRain) -> Self {
        Self {
            strings,
            name,
            rain,
            burst: None,
            time: 0.0,
            use_unicode: true,
        }
    }

    pub fn burst(mut self, burst: Option<&'a HeartBurst>) -> Self {
        self.burst = burst;
        self
    }

    /// Wall-clock seconds since the app started, for the heartbeat
    pub fn time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }
}

impl Widget for CelebrationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 16 || area.height < 12 {
            return;
        }

        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        // Night backdrop
        let bg_style = Style::default().bg(colors::BACKGROUND);
        for y in area.y..=bottom {
            for x in area.x..=right {
                buf[(x, y)].set_char(' ').set_style(bg_style);
            }
        }

        // Confetti first; text paints over it
        for piece in self.rain.pieces() {
            let Some(progress) = self.rain.progress(piece) else {
                continue;
            };
            // start above the top edge so pieces drift in
            let drop = progress * (area.height + 4) as f32 - 2.0;
            if drop < 0.0 {
                continue;
            }
            let x = area.x + (piece.x * (area.width - 1) as f32) as u16;
            let y = area.y + drop as u16;
            if x > right || y > bottom {
                continue;
            }
            // tumble through the glyph table as the piece falls
            let glyph = get_confetti_glyph(piece.glyph_index + (progress * 6.0) as usize);
            buf[(x, y)]
                .set_char(glyph.render(self.use_unicode))
                .set_style(Style::default().fg(get_confetti_color(piece.color_index)));
        }

        // The beating heart
        let beat = heartbeat(self.time, 64.0);
        let heart_style = Style::default()
            .fg(dim_color(colors::BIG_HEART_COLOR, 0.7 + beat * 0.3))
            .add_modifier(Modifier::BOLD);
        let heart_ch = SMALL_HEART.render(self.use_unicode);
        let art_top = area.y + area.height / 6;
        for (dy, row) in BIG_HEART_ROWS.iter().enumerate() {
            let y = art_top + dy as u16;
            if y > bottom {
                break;
            }
            let start_x = area.x + area.width.saturating_sub(row.len() as u16) / 2;
            for (dx, ch) in row.chars().enumerate() {
                let x = start_x + dx as u16;
                if ch == '#' && x <= right {
                    buf[(x, y)].set_char(heart_ch).set_style(heart_style);
                }
            }
        }

        // Copy
        let yay_style = Style::default()
            .fg(colors::YES_BG)
            .add_modifier(Modifier::BOLD);
        let thanks_style = Style::default().fg(colors::CARD_BG);
        let happiest_style = Style::default().fg(colors::STATUS_FG);

        let mut y = art_top + BIG_HEART_ROWS.len() as u16 + 1;
        draw_centered(buf, area, y, self.strings.yay, yay_style);
        y += 2;

        let width = (area.width - 4) as usize;
        for line in wrap_text(&self.strings.thanks_line(self.name), width) {
            draw_centered(buf, area, y, &line, thanks_style);
            y += 1;
        }
        y += 1;
        for line in wrap_text(self.strings.happiest, width) {
            draw_centered(buf, area, y, &line, happiest_style);
            y += 1;
        }

        // Burst hearts fly over everything, but only through blank cells
        if let Some(burst) = self.burst {
            let cx = (area.x + area.width / 2) as f32;
            let cy = (area.y + area.height / 2) as f32;
            let max_radius = (area.height as f32 / 2.0).min(area.width as f32 / 4.0);
            for heart in burst.hearts() {
                let Some(progress) = burst.progress(heart) else {
                    continue;
                };
                let radius = progress * max_radius;
                // terminal cells are taller than wide; double x to keep
                // the ring round
                let x = cx + heart.angle.cos() * radius * 2.0;
                let y = cy + heart.angle.sin() * radius;
                if x < area.x as f32 || y < area.y as f32 {
                    continue;
                }
                let (x, y) = (x as u16, y as u16);
                if x > right || y > bottom || buf[(x, y)].symbol() != " " {
                    continue;
                }
                let color = mix_color(colors::BIG_HEART_COLOR, colors::BACKGROUND, progress * 0.6);
                buf[(x, y)]
                    .set_char(heart_ch)
                    .set_style(Style::default().fg(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_celebration_shows_the_copy() {
        let mut rng = StdRng::seed_from_u64(42);
        let rain = ConfettiRain::new(&mut rng);
        let area = Rect::new(0, 0, 70, 24);
        let mut buf = Buffer::empty(area);
        CelebrationWidget::new(Locale::En.strings(), "Noor", &rain).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("YAY!"));
        assert!(text.contains("Noor"));
        assert!(text.contains("Qubool hai"));
    }

    #[test]
    fn test_celebration_rains_confetti() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rain = ConfettiRain::new(&mut rng);
        rain.tick(10.0);
        let area = Rect::new(0, 0, 70, 24);
        let mut buf = Buffer::empty(area);
        CelebrationWidget::new(Locale::En.strings(), "Noor", &rain)
            .use_unicode(false)
            .render(area, &mut buf);

        let text = screen_text(&buf);
        // the square and spark glyphs never occur in the copy
        let confetti_cells = text.matches(['#', '^']).count();
        assert!(confetti_cells > 0);
    }

    #[test]
    fn test_celebration_skips_degenerate_area() {
        let mut rng = StdRng::seed_from_u64(42);
        let rain = ConfettiRain::new(&mut rng);
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        CelebrationWidget::new(Locale::En.strings(), "Noor", &rain).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
