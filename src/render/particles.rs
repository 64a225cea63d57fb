use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::animation::{HeartField, SparkleTrail};

use super::colors::{self, dim_color, mix_color};
use super::symbols::{get_heart_glyph, SPARKLE_SYMBOLS};

/// How long a sparkle takes to fade from fresh to spent, seconds
const SPARKLE_FADE_SECS: f32 = 1.5;

/// The drifting hearts behind the card
pub struct HeartsWidget<'a> {
    field: &'a HeartField,
    use_unicode: bool,
}

impl<'a> HeartsWidget<'a> {
    pub fn new(field: &'a HeartField) -> Self {
        Self {
            field,
            use_unicode: true,
        }
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }
}

impl Widget for HeartsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let time = self.field.time();
        for heart in self.field.hearts() {
            // hearts waiting below the bottom edge are not visible yet
            if heart.y < 0.0 || heart.y > 1.0 {
                continue;
            }
            let x = area.x + (heart.display_x(time) * (area.width - 1) as f32) as u16;
            let y = area.y + (heart.y * (area.height - 1) as f32) as u16;
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }
            let glyph = get_heart_glyph(heart.glyph_index);
            let color = dim_color(colors::get_heart_color(heart.color_index), heart.dim);
            buf[(x, y)]
                .set_char(glyph.render(self.use_unicode))
                .set_style(Style::default().fg(color));
        }
    }
}

/// The glitter trail behind the pointer
pub struct SparklesWidget<'a> {
    trail: &'a SparkleTrail,
    use_unicode: bool,
}

impl<'a> SparklesWidget<'a> {
    pub fn new(trail: &'a SparkleTrail) -> Self {
        Self {
            trail,
            use_unicode: true,
        }
    }

    pub fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }
}

impl Widget for SparklesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for sparkle in self.trail.iter() {
            let (x, y) = (sparkle.x, sparkle.y);
            if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height
            {
                continue;
            }
            // glitter must never cover text or borders, only blank cells
            if buf[(x, y)].symbol() != " " {
                continue;
            }
            let age = (sparkle.age / SPARKLE_FADE_SECS).clamp(0.0, 1.0);
            let glyph = SPARKLE_SYMBOLS.get_by_age(age);
            let color = mix_color(colors::SPARKLE_COLOR, colors::BACKGROUND, age * 0.8);
            buf[(x, y)]
                .set_char(glyph.render(self.use_unicode))
                .set_style(Style::default().fg(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hearts_widget_draws_something() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = HeartField::new(&mut rng);
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        HeartsWidget::new(&field).render(area, &mut buf);

        let drawn = (0..20)
            .flat_map(|y| (0..40).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].symbol() != " ")
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn test_sparkles_respect_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut trail = SparkleTrail::new();
        while trail.is_empty() {
            trail.pointer_moved(5, 5, &mut rng);
        }

        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        buf[(5, 5)].set_char('X');
        SparklesWidget::new(&trail).render(area, &mut buf);
        assert_eq!(buf[(5, 5)].symbol(), "X");
    }

    #[test]
    fn test_sparkles_outside_area_are_skipped() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut trail = SparkleTrail::new();
        while trail.is_empty() {
            trail.pointer_moved(99, 99, &mut rng);
        }

        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        SparklesWidget::new(&trail).render(area, &mut buf);
    }
}
