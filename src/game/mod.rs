use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::Path;

pub mod catalog;
pub mod error;
pub mod mode;
pub mod round;
pub mod settings;

use self::catalog::{Catalog, RawSpecimen};
use self::error::{Error, Result};
use self::mode::{Hint, Mode, Question};
use self::round::{CategoryFilter, Controls, GradeResult, RevealInfo, RoundState};
use self::settings::Settings;


/// Raised when a category filter matches nothing and the full catalog was used instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoMatchWarning {
    pub category: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundStart {
    pub round: RoundState,
    pub warning: Option<NoMatchWarning>,
}

#[derive(Debug)]
enum Phase {
    Uninitialized,
    Failed(Error),
    Ready,
    Round(RoundState),
}

pub struct Game {
    catalog: Option<Catalog>,
    current_phase: Phase,
    mode: Mode,
    category_filter: CategoryFilter,
    placeholder_image: String,
    rng: StdRng,
}

impl Game {
    pub fn new(settings: &Settings) -> Game {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game {
            catalog: None,
            current_phase: Phase::Uninitialized,
            mode: settings.mode,
            category_filter: settings.category_filter.clone(),
            placeholder_image: settings.placeholder_image.clone(),
            rng,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        match &phase {
            Phase::Round(round) => info!(
                "Entering round: {} [{}] ({} mode, specimen id {})",
                round.specimen.common_name,
                round.specimen.category,
                round.mode,
                round.specimen.id.as_deref().unwrap_or("none")
            ),
            Phase::Failed(e) => error!("Game is unavailable: {}", e),
            other => info!("Entering game phase: {:?}", other),
        }
        self.current_phase = phase;
    }

    pub fn load_catalog(&mut self, raw_specimens: Vec<RawSpecimen>) -> Result<&Catalog> {
        let catalog = Catalog::from_raw_specimens(raw_specimens);
        self.accept_catalog(catalog)
    }

    pub fn open_catalog(&mut self, source: &Path) -> Result<&Catalog> {
        let catalog = Catalog::open(source);
        self.accept_catalog(catalog)
    }

    fn accept_catalog(&mut self, catalog: Result<Catalog>) -> Result<&Catalog> {
        match catalog {
            Ok(catalog) => {
                info!(
                    "Loaded {} specimens in {} categories",
                    catalog.get_specimens().len(),
                    catalog.get_categories().len()
                );
                self.set_current_phase(Phase::Ready);
                Ok(&*self.catalog.insert(catalog))
            }
            Err(e) => {
                self.catalog = None;
                self.set_current_phase(Phase::Failed(e.clone()));
                Err(e)
            }
        }
    }

    pub fn get_categories(&self) -> &[String] {
        match &self.catalog {
            Some(catalog) => catalog.get_categories().as_slice(),
            None => &[],
        }
    }

    pub fn start_round(
        &mut self,
        category_filter: CategoryFilter,
        mode: Mode,
    ) -> Result<RoundStart> {
        let catalog = match (&self.current_phase, &self.catalog) {
            (Phase::Failed(e), _) => return Err(e.clone()),
            (_, Some(catalog)) => catalog,
            (_, None) => return Err(Error::NotLoaded),
        };

        let mut candidates = catalog.filter(&category_filter);
        let mut warning = None;
        let mut category_filter = category_filter;
        if candidates.is_empty() {
            warn!("No specimens found for category filter `{}`", category_filter);
            warning = Some(NoMatchWarning {
                category: category_filter.to_string(),
            });
            category_filter = CategoryFilter::All;
            candidates = catalog.filter(&category_filter);
        }

        let specimen = candidates
            .choose(&mut self.rng)
            .map(|s| (*s).clone())
            .ok_or(Error::NotLoaded)?;

        self.mode = mode;
        self.category_filter = category_filter.clone();
        let round = RoundState::new(specimen, mode, category_filter);
        self.set_current_phase(Phase::Round(round.clone()));
        Ok(RoundStart { round, warning })
    }

    pub fn next_round(&mut self) -> Result<RoundStart> {
        self.start_round(self.category_filter.clone(), self.mode)
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<RoundStart> {
        self.start_round(self.category_filter.clone(), mode)
    }

    pub fn set_category_filter(&mut self, category_filter: CategoryFilter) -> Result<RoundStart> {
        self.start_round(category_filter, self.mode)
    }

    pub fn submit_guess(&mut self, guess: &str) -> GradeResult {
        match &mut self.current_phase {
            Phase::Round(round) => {
                let result = round.guess(guess);
                if let GradeResult::Correct(_) = result {
                    info!("Correct guess: {}", guess.trim());
                }
                result
            }
            _ => GradeResult::Ignored,
        }
    }

    pub fn request_hint(&self) -> Option<Hint> {
        match &self.current_phase {
            Phase::Round(round) => round.hint(),
            _ => None,
        }
    }

    pub fn reveal_answer(&mut self) -> Option<RevealInfo> {
        match &mut self.current_phase {
            Phase::Round(round) => Some(round.reveal()),
            _ => None,
        }
    }

    pub fn get_round(&self) -> Option<&RoundState> {
        match &self.current_phase {
            Phase::Round(round) => Some(round),
            _ => None,
        }
    }

    pub fn get_question(&self) -> Option<Question> {
        self.get_round()
            .map(|round| round.mode.question(&round.specimen, &self.placeholder_image))
    }

    pub fn get_controls(&self) -> Controls {
        match self.get_round() {
            Some(round) => round.controls(),
            None => Controls::disabled(),
        }
    }

    pub fn get_error(&self) -> Option<&Error> {
        match &self.current_phase {
            Phase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn get_category_filter(&self) -> &CategoryFilter {
        &self.category_filter
    }
}
