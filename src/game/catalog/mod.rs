use anyhow::{anyhow, Context};
use itertools::Itertools;
use std::fs::File;
use std::path::Path;

use crate::game::error::{Error, Result};
use crate::game::round::CategoryFilter;

pub mod specimen;

pub use specimen::{normalize, RawSpecimen, Specimen};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug)]
pub struct Catalog {
    specimens: Vec<Specimen>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn open(source: &Path) -> Result<Catalog> {
        let raw_specimens = read_raw_specimens(source)
            .with_context(|| format!("Could not read catalog {:?}", source))
            .map_err(|e| Error::DataLoad(format!("{:#}", e)))?;
        Catalog::from_raw_specimens(raw_specimens)
    }

    pub fn from_raw_specimens(raw_specimens: Vec<RawSpecimen>) -> Result<Catalog> {
        if raw_specimens.is_empty() {
            return Err(Error::DataLoad("catalog contains no specimens".to_owned()));
        }

        let specimens: Vec<Specimen> = raw_specimens.into_iter().map(Specimen::from).collect();
        let categories = specimens
            .iter()
            .map(|s| s.category.as_str())
            .filter(|c| !c.is_empty())
            .unique()
            .sorted()
            .map(str::to_owned)
            .collect();

        Ok(Catalog {
            specimens,
            categories,
        })
    }

    pub fn get_specimens(&self) -> &Vec<Specimen> {
        &self.specimens
    }

    pub fn get_categories(&self) -> &Vec<String> {
        &self.categories
    }

    pub fn filter(&self, category_filter: &CategoryFilter) -> Vec<&Specimen> {
        match category_filter {
            CategoryFilter::All => self.specimens.iter().collect(),
            CategoryFilter::Category(category) => self
                .specimens
                .iter()
                .filter(|s| s.category == *category)
                .collect(),
        }
    }
}

fn read_raw_specimens(source: &Path) -> anyhow::Result<Vec<RawSpecimen>> {
    let extension = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let file = File::open(source)?;
    match extension.as_deref() {
        Some("json") => {
            let raw_specimens = serde_json::from_reader(file).context("Invalid JSON catalog")?;
            Ok(raw_specimens)
        }
        Some("csv") => {
            let mut raw_specimens = Vec::new();
            let mut csv_reader = csv::Reader::from_reader(file);
            for specimen in csv_reader.deserialize() {
                let raw_specimen: RawSpecimen = specimen.context("Invalid CSV catalog")?;
                raw_specimens.push(raw_specimen);
            }
            Ok(raw_specimens)
        }
        _ => Err(anyhow!("Unsupported catalog format (expected .json or .csv)")),
    }
}
