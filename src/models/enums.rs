//! Enums used by the front-end for state management and rendering.

/// What the headline currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadlinePhase {
    #[default]
    Asking,    // Fresh question: "what?"
    Rolling,   // Display loop is drawing dishes
    Picked,    // Stopped on a dish
    NoOptions, // Empty pool, nothing to pick
}

impl HeadlinePhase {
    /// Punctuation closing the headline
    pub fn punctuation(&self) -> &'static str {
        match self {
            HeadlinePhase::Asking | HeadlinePhase::Rolling => "?",
            HeadlinePhase::Picked => "!",
            HeadlinePhase::NoOptions => " QAQ",
        }
    }

    /// Label of the start/stop button for this phase
    pub fn button_label(&self) -> &'static str {
        match self {
            HeadlinePhase::Asking | HeadlinePhase::NoOptions => "Start",
            HeadlinePhase::Rolling => "Stop",
            HeadlinePhase::Picked => "Another one",
        }
    }
}
