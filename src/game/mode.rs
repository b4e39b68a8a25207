use std::fmt;
use std::str::FromStr;

use crate::game::catalog::Specimen;
use crate::game::error::Error;

const PROMPT_CATEGORY: &str = "Identify the Category!";
const PROMPT_SPECIMEN: &str = "Identify the Specimen!";
const PLACEHOLDER_CATEGORY: &str = "Enter category (e.g. Igneous)...";
const PLACEHOLDER_NAME: &str = "Enter mineral/rock name...";
pub const IMAGE_ALT: &str = "Mystery Specimen";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    Category,
    Easy,
    Hard,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Hard
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_ref() {
            "category" => Ok(Mode::Category),
            "easy" => Ok(Mode::Easy),
            "hard" => Ok(Mode::Hard),
            other => Err(Error::UnknownMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Category => "category",
            Mode::Easy => "easy",
            Mode::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Hint {
    CategoryInitial(String),
    Category(String),
    NameInitial(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: &'static str,
    pub subtitle: Option<String>,
    pub placeholder: &'static str,
    pub image: String,
    pub image_alt: &'static str,
}

fn initial(answer: &str) -> String {
    answer.chars().take(1).collect()
}

impl Mode {
    pub fn is_guess_correct(&self, specimen: &Specimen, guess: &str) -> bool {
        match self {
            Mode::Category => specimen.is_category(guess),
            Mode::Easy | Mode::Hard => specimen.is_name(guess),
        }
    }

    pub fn hint(&self, specimen: &Specimen) -> Hint {
        match self {
            Mode::Category => Hint::CategoryInitial(initial(&specimen.category)),
            Mode::Easy => Hint::NameInitial(initial(&specimen.common_name)),
            Mode::Hard => Hint::Category(specimen.category.clone()),
        }
    }

    pub fn question(&self, specimen: &Specimen, placeholder_image: &str) -> Question {
        let (prompt, subtitle, placeholder) = match self {
            Mode::Category => (PROMPT_CATEGORY, None, PLACEHOLDER_CATEGORY),
            Mode::Easy => (
                PROMPT_SPECIMEN,
                Some(format!("(Category: {})", specimen.category)),
                PLACEHOLDER_NAME,
            ),
            Mode::Hard => (PROMPT_SPECIMEN, None, PLACEHOLDER_NAME),
        };
        let image = specimen
            .image_url
            .clone()
            .unwrap_or_else(|| placeholder_image.to_owned());
        Question {
            prompt,
            subtitle,
            placeholder,
            image,
            image_alt: IMAGE_ALT,
        }
    }
}
