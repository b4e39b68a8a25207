use log::debug;

use crate::commands::Command;
use crate::game::error::Result;
use crate::game::mode::Mode;
use crate::game::round::{CategoryFilter, GradeResult};
use crate::game::{Game, RoundStart};
use crate::output::{GameOutput, Message};


pub struct Frontend<O: GameOutput> {
    game: Game,
    output: O,
    is_over: bool,
}

impl<O: GameOutput> Frontend<O> {
    pub fn new(game: Game, output: O) -> Self {
        Frontend {
            game,
            output,
            is_over: false,
        }
    }

    pub fn begin(&mut self) -> Result<()> {
        self.output.say(&Message::QuizRules);
        if let Some(e) = self.game.get_error() {
            let e = e.clone();
            self.output.say(&Message::DataLoadFailed(e.to_string()));
            return Err(e);
        }
        let category_filter = self.game.get_category_filter().clone();
        let mode = self.game.get_mode();
        let round_start = self.game.start_round(category_filter, mode);
        self.announce_round(round_start)
    }

    pub fn handle_line(&mut self, line: &str) {
        self.handle(Command::parse(line));
    }

    pub fn handle(&mut self, command: Command) {
        debug!("Handling command: {:?}", command);
        match command {
            Command::Guess(guess) => self.guess(&guess),
            Command::Continue => {
                if self.is_round_revealed() {
                    self.next_round();
                }
            }
            Command::Hint => {
                if let Some(hint) = self.game.request_hint() {
                    self.output.say(&Message::Hint(hint));
                }
            }
            Command::Reveal => {
                if self.is_round_revealed() {
                    self.next_round();
                } else if let Some(info) = self.game.reveal_answer() {
                    self.output.say(&Message::AnswerReveal(info));
                }
            }
            Command::Next => self.next_round(),
            Command::Mode(name) => match name.parse::<Mode>() {
                Ok(mode) => {
                    let round_start = self.game.set_mode(mode);
                    self.announce_round(round_start).ok();
                }
                Err(e) => self.output.say(&Message::CommandFailed(e.to_string())),
            },
            Command::Filter(name) => {
                let round_start = self
                    .game
                    .set_category_filter(CategoryFilter::from_name(&name));
                self.announce_round(round_start).ok();
            }
            Command::Categories => {
                let categories = self.game.get_categories().to_vec();
                self.output.say(&Message::Categories(categories));
            }
            Command::Quit => self.is_over = true,
            Command::Unknown(command) => self.output.say(&Message::UnknownCommand(command)),
        }
    }

    pub fn prompt(&self) -> String {
        let controls = self.game.get_controls();
        if controls.input_enabled {
            let placeholder = self
                .game
                .get_question()
                .map(|q| q.placeholder)
                .unwrap_or_default();
            format!("[{}] {} > ", controls.reveal_label, placeholder)
        } else {
            format!("[{}] press Enter > ", controls.reveal_label)
        }
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn get_game(&self) -> &Game {
        &self.game
    }

    fn guess(&mut self, guess: &str) {
        match self.game.submit_guess(guess) {
            GradeResult::Ignored => (),
            GradeResult::Incorrect => self.output.say(&Message::GuessIncorrect),
            GradeResult::Correct(info) => {
                let mode = self.game.get_mode();
                self.output.say(&Message::GuessCorrect(mode, info));
            }
        }
    }

    fn next_round(&mut self) {
        let round_start = self.game.next_round();
        self.announce_round(round_start).ok();
    }

    fn is_round_revealed(&self) -> bool {
        self.game.get_round().map_or(false, |round| round.revealed)
    }

    fn announce_round(&mut self, round_start: Result<RoundStart>) -> Result<()> {
        match round_start {
            Ok(round_start) => {
                if let Some(warning) = round_start.warning {
                    self.output.say(&Message::NoMatchWarning(warning.category));
                }
                if let Some(question) = self.game.get_question() {
                    self.output.say(&Message::QuestionBegins(question));
                }
                Ok(())
            }
            Err(e) => {
                self.output.say(&Message::DataLoadFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
