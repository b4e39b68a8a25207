use std::fmt;
use std::str::FromStr;

use crate::game::catalog::Specimen;
use crate::game::mode::{Hint, Mode};


pub const REVEAL_LABEL: &str = "Reveal Answer";
pub const NEXT_LABEL: &str = "Next Card";

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from_name(s))
    }
}

impl CategoryFilter {
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(name.to_owned())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Category(category) => f.write_str(category),
        }
    }
}

/// Everything disclosed about a specimen once its round is over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealInfo {
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub category: String,
    pub key_facts: String,
    pub source_url: Option<String>,
}

impl From<&Specimen> for RevealInfo {
    fn from(specimen: &Specimen) -> Self {
        RevealInfo {
            common_name: specimen.common_name.clone(),
            scientific_name: specimen.scientific_name.clone(),
            category: specimen.category.clone(),
            key_facts: specimen.key_facts.clone(),
            source_url: specimen.source_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GradeResult {
    Ignored,
    Incorrect,
    Correct(RevealInfo),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Controls {
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub hint_enabled: bool,
    pub reveal_label: &'static str,
}

impl Controls {
    pub fn disabled() -> Self {
        Controls {
            input_enabled: false,
            submit_enabled: false,
            hint_enabled: false,
            reveal_label: REVEAL_LABEL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub specimen: Specimen,
    pub mode: Mode,
    pub category_filter: CategoryFilter,
    pub revealed: bool,
}

impl RoundState {
    pub fn new(specimen: Specimen, mode: Mode, category_filter: CategoryFilter) -> Self {
        RoundState {
            specimen,
            mode,
            category_filter,
            revealed: false,
        }
    }

    pub fn guess(&mut self, guess: &str) -> GradeResult {
        if self.revealed || guess.trim().is_empty() {
            return GradeResult::Ignored;
        }

        if self.mode.is_guess_correct(&self.specimen, guess) {
            self.revealed = true;
            GradeResult::Correct(self.reveal_info())
        } else {
            GradeResult::Incorrect
        }
    }

    pub fn hint(&self) -> Option<Hint> {
        if self.revealed {
            return None;
        }
        Some(self.mode.hint(&self.specimen))
    }

    pub fn reveal(&mut self) -> RevealInfo {
        self.revealed = true;
        self.reveal_info()
    }

    pub fn reveal_info(&self) -> RevealInfo {
        RevealInfo::from(&self.specimen)
    }

    pub fn controls(&self) -> Controls {
        let active = !self.revealed;
        Controls {
            input_enabled: active,
            submit_enabled: active,
            hint_enabled: active,
            reveal_label: if active { REVEAL_LABEL } else { NEXT_LABEL },
        }
    }
}
