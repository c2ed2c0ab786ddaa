use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the learned-answer file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    knowledge_base: HashMap<String, Vec<String>>,
}

/// Learned question -> answers map, persisted as pretty-printed JSON.
///
/// A missing or unreadable file is not an error: the store starts empty
/// and the problem is logged. Save failures are logged too, so a broken
/// disk never takes the conversation down.
pub struct KnowledgeStore {
    path: PathBuf,
    base: HashMap<String, Vec<String>>,
}

impl KnowledgeStore {
    pub fn load(path: &Path) -> Self {
        let base = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<StoreData>(&content) {
                Ok(data) => data.knowledge_base,
                Err(e) => {
                    error!("could not parse {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            base,
        }
    }

    fn save(&self) {
        let data = StoreData {
            knowledge_base: self.base.clone(),
        };
        let result = serde_json::to_string_pretty(&data)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&self.path, json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            error!("could not save {}: {}", self.path.display(), e);
        }
    }

    /// Stores `answer` under the cleaned form of `question` and writes
    /// the store back to disk. Duplicate answers are kept once.
    pub fn learn(&mut self, question: &str, answer: &str) {
        let key = clean_question(question);
        let answers = self.base.entry(key.clone()).or_default();
        if !answers.iter().any(|a| a == answer) {
            answers.push(answer.to_string());
        }
        self.save();
        info!("learned answer: {} -> {}", key, answer);
    }

    /// Learned answers for `question`, if it was taught before.
    pub fn answers(&self, question: &str) -> Option<&[String]> {
        self.base
            .get(&clean_question(question))
            .map(|answers| answers.as_slice())
    }
}

/// Normalizes a question for lookup: lowercased, punctuation stripped,
/// surrounding whitespace trimmed.
fn clean_question(question: &str) -> String {
    question
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .trim()
        .to_string()
}
