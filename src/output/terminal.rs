use std::io::{self, Write};

use crate::game::mode::{Hint, Mode};
use crate::game::round::RevealInfo;
use crate::output::{GameOutput, Message};

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        match message {
            Message::QuizRules => "Rock & mineral quiz!\n\nCommands:\n- Type a guess and press Enter to submit it.\n- `:hint` shows a hint, `:reveal` shows the answer and `:next` loads the next card.\n- `:mode category|easy|hard` and `:filter <category>|all` change the game.\n- `:categories` lists the categories, `:quit` exits.\n- Press Enter on an empty line after a round is over to load the next card.".into(),
            Message::DataLoadFailed(reason) => format!("Error loading game data. Please refresh.\n({})", reason),
            Message::NoMatchWarning(category) => format!("No specimens found for this filter! ({}). Showing all specimens.", category),
            Message::QuestionBegins(question) => {
                let mut text = format!("\n{}", question.prompt);
                if let Some(subtitle) = &question.subtitle {
                    text += &format!("\n{}", subtitle);
                }
                text += &format!("\n[{}: {}]", question.image_alt, question.image);
                text
            }
            Message::GuessCorrect(mode, info) => {
                let headline = match mode {
                    Mode::Category => format!("✅ Correct! It is {}.", info.category),
                    Mode::Easy | Mode::Hard => format!("✅ Correct!\nSpecimen: {}", info.common_name),
                };
                format!("{}\nCategory: {}{}", headline, info.category, describe(info))
            }
            Message::GuessIncorrect => "❌ Incorrect. Try again or use :hint / :reveal.".into(),
            Message::Hint(Hint::CategoryInitial(initial)) => format!("Hint: Category starts with '{}'.", initial),
            Message::Hint(Hint::Category(category)) => format!("Hint: It is a type of {}.", category),
            Message::Hint(Hint::NameInitial(initial)) => format!("Hint: Starts with '{}'.", initial),
            Message::AnswerReveal(info) => format!("Specimen: {}\nCategory: {}{}", info.common_name, info.category, describe(info)),
            Message::Categories(categories) => {
                let mut text = "Categories:".to_owned();
                for category in categories {
                    text += &format!("\n- {}", category);
                }
                text
            }
            Message::UnknownCommand(command) => format!("Unknown command `{}`.", command),
            Message::CommandFailed(reason) => reason.clone(),
        }
    }
}

fn describe(info: &RevealInfo) -> String {
    let mut text = String::new();
    if let Some(scientific_name) = &info.scientific_name {
        if scientific_name != &info.common_name {
            text += &format!("\nScientific name: {}", scientific_name);
        }
    }
    if !info.key_facts.is_empty() {
        text += &format!("\n{}", info.key_facts);
    }
    if let Some(source_url) = &info.source_url {
        text += &format!("\nView on Wikipedia: {}", source_url);
    }
    text
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", self.interpret_message(message)) {
            log::error!("Could not write to terminal: {}", e);
        }
    }
}
