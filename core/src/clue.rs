use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::RevealOutcome;

/// What a clue cell currently displays. Only ever advances `Hidden -> Question -> Answer`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showing {
    Hidden,
    Question,
    Answer,
}

impl Showing {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }

    const fn next(self) -> Self {
        use Showing::*;
        match self {
            Hidden => Question,
            Question => Answer,
            Answer => Answer,
        }
    }
}

impl Default for Showing {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Text the cell should display, `None` while still hidden.
    pub fn displayed_text(&self) -> Option<&str> {
        match self.showing {
            Showing::Hidden => None,
            Showing::Question => Some(&self.question),
            Showing::Answer => Some(&self.answer),
        }
    }

    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealOutcome::*;

        if self.showing.is_terminal() {
            return NoChange;
        }

        self.showing = self.showing.next();
        match self.showing {
            Showing::Question => QuestionShown,
            Showing::Answer => AnswerShown,
            Showing::Hidden => NoChange,
        }
    }
}
