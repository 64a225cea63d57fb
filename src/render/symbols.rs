//! Symbol system with Unicode and ASCII fallbacks
//!
//! Every decorative glyph the card draws comes from here, so limited
//! terminals degrade to plain ASCII instead of mojibake.

/// Symbol with Unicode and ASCII fallback
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    /// Unicode character for modern terminals
    pub unicode: char,
    /// ASCII fallback for limited terminals
    pub ascii: char,
    /// Human-readable name for the symbol
    pub name: &'static str,
}

impl Symbol {
    /// Create a new symbol with Unicode and ASCII variants
    pub const fn new(unicode: char, ascii: char, name: &'static str) -> Self {
        Self {
            unicode,
            ascii,
            name,
        }
    }

    /// Render the appropriate character based on Unicode support
    pub fn render(&self, use_unicode: bool) -> char {
        if use_unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Heart shapes for the drifting background field, cycled per heart
pub const HEART_GLYPHS: [Symbol; 5] = [
    Symbol::new('\u{2665}', 'v', "heart"),         // U+2665 Black Heart Suit (♥)
    Symbol::new('\u{2661}', 'u', "heart_open"),    // U+2661 White Heart Suit (♡)
    Symbol::new('\u{2765}', 'v', "heart_bud"),     // U+2765 Rotated Heavy Heart Bullet (❥)
    Symbol::new('\u{2763}', '!', "heart_ardent"),  // U+2763 Heavy Heart Exclamation (❣)
    Symbol::new('\u{2766}', '&', "heart_floral"),  // U+2766 Floral Heart (❦)
];

/// Sparkle character set for the pointer trail
pub struct SparkleCharset {
    pub fresh: Symbol,
    pub dimming: Symbol,
    pub dying: Symbol,
}

impl SparkleCharset {
    /// Get sparkle symbol based on age (0.0 = fresh, 1.0 = spent)
    pub fn get_by_age(&self, age: f32) -> &Symbol {
        if age < 0.33 {
            &self.fresh
        } else if age < 0.66 {
            &self.dimming
        } else {
            &self.dying
        }
    }
}

/// Sparkle characters, brightest first
pub const SPARKLE_SYMBOLS: SparkleCharset = SparkleCharset {
    fresh: Symbol::new('\u{2726}', '*', "sparkle_fresh"),     // U+2726 Black Four Pointed Star (✦)
    dimming: Symbol::new('\u{2727}', '+', "sparkle_dimming"), // U+2727 White Four Pointed Star (✧)
    dying: Symbol::new('\u{00B7}', '.', "sparkle_dying"),     // U+00B7 Middle Dot (·)
};

/// Confetti shapes for the celebration rain
pub const CONFETTI_GLYPHS: [Symbol; 4] = [
    Symbol::new('\u{25AA}', '#', "confetti_square"),  // U+25AA Black Small Square (▪)
    Symbol::new('\u{2022}', 'o', "confetti_dot"),     // U+2022 Bullet (•)
    Symbol::new('\u{25C6}', '*', "confetti_diamond"), // U+25C6 Black Diamond (◆)
    Symbol::new('\u{25B4}', '^', "confetti_spark"),   // U+25B4 Black Small Up Triangle (▴)
];

/// Envelope for the card's letterhead
pub const ENVELOPE: Symbol = Symbol::new('\u{2709}', '=', "envelope"); // U+2709 Envelope (✉)

/// The single heart used on buttons and in the celebration burst
pub const SMALL_HEART: Symbol = Symbol::new('\u{2665}', 'v', "heart"); // U+2665 Black Heart Suit (♥)

/// Detect if the terminal supports Unicode characters
///
/// Checks environment variables for UTF-8 support indicators:
/// - LC_ALL, LC_CTYPE and LANG for a UTF-8 locale
/// - TERM_PROGRAM for known Unicode-capable terminals
pub fn detect_unicode() -> bool {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if value.to_lowercase().contains("utf") {
                return true;
            }
        }
    }

    // Check for known Unicode-capable terminals
    if let Ok(term_program) = std::env::var("TERM_PROGRAM") {
        let unicode_terminals = [
            "iTerm.app",
            "Apple_Terminal",
            "vscode",
            "Hyper",
            "Alacritty",
            "kitty",
            "WezTerm",
        ];
        if unicode_terminals.iter().any(|t| term_program.contains(t)) {
            return true;
        }
    }

    // Check TERM for common Unicode-capable terminal types
    if let Ok(term) = std::env::var("TERM") {
        let unicode_terms = ["xterm", "screen", "tmux", "rxvt"];
        if unicode_terms.iter().any(|t| term.contains(t)) {
            return true;
        }
    }

    // Default to false if we can't determine Unicode support
    false
}

/// Get the heart glyph for a given index, wrapping past the table end
pub fn get_heart_glyph(index: usize) -> &'static Symbol {
    &HEART_GLYPHS[index % HEART_GLYPHS.len()]
}

/// Get the confetti glyph for a given index, wrapping past the table end
pub fn get_confetti_glyph(index: usize) -> &'static Symbol {
    &CONFETTI_GLYPHS[index % CONFETTI_GLYPHS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_render() {
        let sym = Symbol::new('\u{2665}', 'v', "heart");
        assert_eq!(sym.render(true), '\u{2665}');
        assert_eq!(sym.render(false), 'v');
    }

    #[test]
    fn test_heart_glyphs_count() {
        assert_eq!(HEART_GLYPHS.len(), 5);
    }

    #[test]
    fn test_get_heart_glyph_wraps() {
        let glyph0 = get_heart_glyph(0);
        let glyph5 = get_heart_glyph(5);
        assert_eq!(glyph0.name, glyph5.name);
    }

    #[test]
    fn test_get_confetti_glyph_wraps() {
        let glyph1 = get_confetti_glyph(1);
        let glyph5 = get_confetti_glyph(5);
        assert_eq!(glyph1.name, glyph5.name);
    }

    #[test]
    fn test_sparkle_by_age() {
        assert_eq!(SPARKLE_SYMBOLS.get_by_age(0.1).name, "sparkle_fresh");
        assert_eq!(SPARKLE_SYMBOLS.get_by_age(0.5).name, "sparkle_dimming");
        assert_eq!(SPARKLE_SYMBOLS.get_by_age(0.9).name, "sparkle_dying");
    }

    #[test]
    fn test_ascii_fallbacks_are_ascii() {
        for glyph in HEART_GLYPHS.iter().chain(CONFETTI_GLYPHS.iter()) {
            assert!(glyph.ascii.is_ascii());
        }
        assert!(ENVELOPE.ascii.is_ascii());
        assert!(SMALL_HEART.ascii.is_ascii());
    }
}
