use rand::seq::SliceRandom;

const GREETING_TEMPLATES: [&str; 6] = [
    "Hej! 😊",
    "Cześć!",
    "Dzień dobry! 👋",
    "Siema!",
    "Witaj! ✨",
    "Co słychać? 😊",
];

const LEARNING_TEMPLATES: [&str; 6] = [
    "Nie wiem, nauczysz mnie? 🤔",
    "Pierwsze słyszę! Co to?",
    "Opowiesz mi o tym? 😊",
    "A co to takiego?",
    "Nie znam tego jeszcze!",
    "Wyjaśnisz? 🤗",
];

const GRATITUDE_TEMPLATES: [&str; 6] = [
    "Dzięki! 💖",
    "Super, że mi powiedziałeś!",
    "O, fajnie! 😊",
    "Świetnie! Zapamiętam!",
    "Dzięki za wyjaśnienie! ✨",
    "Ekstra! 🌟",
];

fn pick(templates: &'static [&'static str]) -> &'static str {
    templates
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("")
}

pub fn greeting() -> &'static str {
    pick(&GREETING_TEMPLATES)
}

pub fn learning_request() -> &'static str {
    pick(&LEARNING_TEMPLATES)
}

pub fn gratitude() -> &'static str {
    pick(&GRATITUDE_TEMPLATES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_come_from_their_set() {
        for _ in 0..20 {
            assert!(GREETING_TEMPLATES.contains(&greeting()));
            assert!(LEARNING_TEMPLATES.contains(&learning_request()));
            assert!(GRATITUDE_TEMPLATES.contains(&gratitude()));
        }
    }
}
