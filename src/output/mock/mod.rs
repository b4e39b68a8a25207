use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{GameOutput, Message};

#[derive(Clone, Default)]
pub struct MockGameOutput {
    text_output: Arc<RwLock<Vec<Message>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::take(&mut *self.text_output.write())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.text_output.read().iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.text_output.read().is_empty()
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) {
        self.text_output.write().push(message.clone());
    }
}
