use crate::RipenessStage;

/// Visual weight of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "alert-success",
            Tone::Info => "alert-info",
            Tone::Warning => "alert-warning",
            Tone::Error => "alert-error",
        }
    }
}

/// Shelf-life advisory banded on `days_until_rotten`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    Fresh,
    EatSoon,
    UseNow,
    Spoiled,
}

impl Advisory {
    pub fn for_days(days_until_rotten: i64) -> Self {
        match days_until_rotten {
            d if d > 5 => Advisory::Fresh,
            3..=5 => Advisory::EatSoon,
            1..=2 => Advisory::UseNow,
            _ => Advisory::Spoiled,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Advisory::Fresh => Tone::Success,
            Advisory::EatSoon => Tone::Info,
            Advisory::UseNow => Tone::Warning,
            Advisory::Spoiled => Tone::Error,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Fresh => "✅ This banana will stay fresh for a while!",
            Advisory::EatSoon => "🍽️ Enjoy this banana soon!",
            Advisory::UseNow => "⚠️ Use this banana immediately!",
            Advisory::Spoiled => "❌ This banana is already rotten!",
        }
    }
}

impl RipenessStage {
    pub fn recommendation(&self) -> &'static str {
        match self {
            RipenessStage::Unripe => {
                "This banana is still unripe. Best for cooking or waiting until it ripens."
            }
            RipenessStage::Ripe => "Perfectly ripe! Enjoy now for best flavor and nutrition.",
            RipenessStage::Overripe => "Overripe — great for banana bread or smoothies.",
            RipenessStage::Rotten => "Already rotten. Best to compost it.",
        }
    }

    pub fn recommendation_tone(&self) -> Tone {
        match self {
            RipenessStage::Unripe => Tone::Info,
            RipenessStage::Ripe => Tone::Success,
            RipenessStage::Overripe => Tone::Warning,
            RipenessStage::Rotten => Tone::Error,
        }
    }
}
