use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Lowercases an answer, collapses whitespace runs into a single space and trims it.
pub fn normalize(answer: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(&answer.to_lowercase(), " ")
        .trim()
        .to_owned()
}

// Blank strings in the data files mean the field is absent.
fn non_blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawSpecimen {
    #[serde(default, deserialize_with = "non_blank_string")]
    pub id: Option<String>,
    pub common_name: String,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub scientific_name: Option<String>,
    pub category: String,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub key_facts: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank_string")]
    pub source_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Specimen {
    pub id: Option<String>,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub category: String,
    pub key_facts: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
}

impl Specimen {
    pub fn is_name(&self, guess: &str) -> bool {
        normalize(guess) == normalize(&self.common_name)
    }

    pub fn is_category(&self, guess: &str) -> bool {
        normalize(guess) == normalize(&self.category)
    }
}

impl From<RawSpecimen> for Specimen {
    fn from(raw_specimen: RawSpecimen) -> Self {
        Specimen {
            id: raw_specimen.id,
            common_name: raw_specimen.common_name,
            scientific_name: raw_specimen.scientific_name,
            category: raw_specimen.category,
            key_facts: raw_specimen.key_facts.unwrap_or_default(),
            image_url: raw_specimen.image_url,
            source_url: raw_specimen.source_url,
        }
    }
}
