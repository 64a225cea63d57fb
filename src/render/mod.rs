pub mod buttons;
pub mod card;
pub mod celebration;
pub mod colors;
pub mod particles;
pub mod symbols;
pub mod ui;

pub use buttons::{button_rect, button_width, ButtonWidget, BUTTON_HEIGHT};
pub use card::CardWidget;
pub use celebration::CelebrationWidget;
pub use particles::{HeartsWidget, SparklesWidget};
pub use ui::StatusBar;

// Re-export colors module items
pub use colors::{dim_color, get_confetti_color, get_heart_color, mix_color};

// Re-export symbols module items
pub use symbols::{
    detect_unicode, get_confetti_glyph, get_heart_glyph, Symbol, CONFETTI_GLYPHS, HEART_GLYPHS,
    SPARKLE_SYMBOLS,
};

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Draw one line of text centered within the area, clipped clear of the
/// left and right border columns
pub(crate) fn draw_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if area.width < 2 || y < area.y || y >= area.y + area.height {
        return;
    }
    let len = text.chars().count() as u16;
    let mut x = area.x + area.width.saturating_sub(len) / 2;
    let right = area.x + area.width - 1;
    for ch in text.chars() {
        if x >= right {
            break;
        }
        if x > area.x {
            buf[(x, y)].set_char(ch).set_style(style);
        }
        x += 1;
    }
}

/// Greedy word wrap on character counts
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut count = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if count == 0 {
            line.push_str(word);
            count = word_len;
        } else if count + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            count += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            count = word_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
