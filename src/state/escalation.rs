/// Which line of copy the card is showing, keyed off how many times the
/// No button has dodged. Stages only ever move forward as the count
/// grows, and the top stage holds from fifteen dodges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PromptStage {
    /// No dodges yet: the opening question
    Opening,
    /// 1-2 dodges: a gentle double-check
    DoubleChecking,
    /// 3-5 dodges
    PleadingNicely,
    /// 6-9 dodges
    HoldingFirm,
    /// 10-14 dodges: calling the button out
    TeasingShy,
    /// 15 or more dodges
    LastNudge,
}

impl PromptStage {
    pub fn for_attempts(attempts: u32) -> Self {
        if attempts == 0 {
            PromptStage::Opening
        } else if attempts < 3 {
            PromptStage::DoubleChecking
        } else if attempts < 6 {
            PromptStage::PleadingNicely
        } else if attempts < 10 {
            PromptStage::HoldingFirm
        } else if attempts < 15 {
            PromptStage::TeasingShy
        } else {
            PromptStage::LastNudge
        }
    }
}

/// The No button's temperament, shown as a little face on its label.
/// It starts out tearful and turns mischievous once it has dodged more
/// than five times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMood {
    Tearful,
    Mischievous,
}

impl ButtonMood {
    pub fn for_attempts(attempts: u32) -> Self {
        if attempts > 5 {
            ButtonMood::Mischievous
        } else {
            ButtonMood::Tearful
        }
    }

    pub fn face(&self) -> &'static str {
        match self {
            ButtonMood::Tearful => ":(",
            ButtonMood::Mischievous => ">:)",
        }
    }
}
