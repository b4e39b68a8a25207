use anyhow::{Context, Result};
use directories_next::BaseDirs;
use std::path::PathBuf;

use crate::game::mode::Mode;
use crate::game::round::CategoryFilter;

const DATA_DIR_NAME: &str = "rock-quiz";
const CATALOG_FILE_NAME: &str = "rocks_data.json";

#[derive(Clone, Debug)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub mode: Mode,
    pub category_filter: CategoryFilter,
    pub placeholder_image: String,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog_path: None,
            mode: Mode::default(),
            category_filter: CategoryFilter::default(),
            placeholder_image: "placeholder.png".to_owned(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn get_catalog_path(&self) -> Result<PathBuf> {
        match &self.catalog_path {
            Some(path) => Ok(path.clone()),
            None => default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> Result<PathBuf> {
    let mut path = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    path.push(DATA_DIR_NAME);
    path.push(CATALOG_FILE_NAME);
    Ok(path)
}
