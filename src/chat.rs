use crate::expr;
use crate::knowledge::KnowledgeStore;
use crate::personality;
use rand::seq::SliceRandom;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Normal,
    /// Waiting for the user to answer the question stored in
    /// `ChatEngine::last_question`.
    Learning,
}

/// One conversation: a knowledge store plus the learning state machine.
pub struct ChatEngine {
    store: KnowledgeStore,
    state: ConversationState,
    last_question: Option<String>,
}

fn math_request(message: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"(policz|oblicz)\s*([\d\+\-\*/\(\)\^\s]+)").unwrap()
    });
    pattern
        .captures(&message.to_lowercase())
        .map(|captures| captures[2].to_string())
}

impl ChatEngine {
    pub fn new(store: KnowledgeStore) -> Self {
        Self {
            store,
            state: ConversationState::Normal,
            last_question: None,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Produces the bot's reply to one message, updating the learning
    /// state machine and the store as a side effect.
    pub fn process_message(&mut self, message: &str) -> String {
        if self.state == ConversationState::Learning {
            self.state = ConversationState::Normal;
            if message.eq_ignore_ascii_case("skip") {
                return "Okej, nie ma sprawy! 😊".to_string();
            }
            if let Some(question) = self.last_question.take() {
                self.store.learn(&question, message);
            }
            return personality::gratitude().to_string();
        }

        if let Some(expression) = math_request(message) {
            // The evaluator reports failure as absence of a result; the
            // specific reason never reaches the conversation.
            return match expr::evaluate(&expression) {
                Some(result) => {
                    format!("Wynik działania {} = {} 📊", expression.trim(), result)
                }
                None => "Przepraszam, ale nie mogę wykonać tego działania 😅".to_string(),
            };
        }

        if let Some(answers) = self.store.answers(message) {
            if let Some(answer) = answers.choose(&mut rand::thread_rng()) {
                return answer.clone();
            }
        }

        self.state = ConversationState::Learning;
        self.last_question = Some(message.to_string());
        personality::learning_request().to_string()
    }
}
