//! Copy tables for the card, keyed by locale. English ships built in;
//! any unrecognized locale key quietly falls back to it.

use crate::state::PromptStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
}

impl Locale {
    /// Parse a deployment-supplied locale key. Unknown keys fall back
    /// to English rather than erroring; the card must always render.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Locale::En,
            _ => Locale::En,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &EN,
        }
    }
}

/// Every line of copy one locale needs
#[derive(Debug)]
pub struct Strings {
    pub opening: &'static str,
    pub double_checking: &'static str,
    pub pleading_nicely: &'static str,
    pub holding_firm: &'static str,
    pub teasing_shy: &'static str,
    pub last_nudge: &'static str,
    pub yes_label: &'static str,
    pub no_label: &'static str,
    pub yay: &'static str,
    pub thanks_template: &'static str,
    pub happiest: &'static str,
}

impl Strings {
    /// The prompt line for the current escalation stage
    pub fn prompt_line(&self, stage: PromptStage) -> &'static str {
        match stage {
            PromptStage::Opening => self.opening,
            PromptStage::DoubleChecking => self.double_checking,
            PromptStage::PleadingNicely => self.pleading_nicely,
            PromptStage::HoldingFirm => self.holding_firm,
            PromptStage::TeasingShy => self.teasing_shy,
            PromptStage::LastNudge => self.last_nudge,
        }
    }

    /// The celebration thank-you with the valentine's name filled in
    pub fn thanks_line(&self, name: &str) -> String {
        self.thanks_template.replace("{name}", name)
    }
}

const EN: Strings = Strings {
    opening: "Will you be my Valentine?",
    double_checking: "You sure about that?",
    pleading_nicely: "Okay… just checking once more",
    holding_firm: "Still standing by my question",
    teasing_shy: "That NO button seems a little shy",
    last_nudge: "Just say YES already na",
    yes_label: "YES",
    no_label: "No",
    yay: "YAY!",
    thanks_template: "Shukriya for the YES, {name}!",
    happiest: "Next time say 'Qubool hai' <3 Anyways thank you for making my day... \
               Gonna be spending all my life making it up to you",
};
