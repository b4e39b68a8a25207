use crate::game::mode::{Hint, Mode, Question};
use crate::game::round::RevealInfo;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerReveal(RevealInfo),
    Categories(Vec<String>),
    CommandFailed(String),
    DataLoadFailed(String),
    GuessCorrect(Mode, RevealInfo),
    GuessIncorrect,
    Hint(Hint),
    NoMatchWarning(String),
    QuestionBegins(Question),
    QuizRules,
    UnknownCommand(String),
}

pub trait GameOutput {
    fn say(&self, message: &Message);
}
