//! Keyword based topic check that runs before any request is sent to
//! the LLM.
//!
//! This is a heuristic. A word counts as a match when it *contains*
//! the keyword, so "barcode" is off-topic (it contains "code") and
//! "birdie" is on-topic (it contains "bird").

pub const REFUSAL_MESSAGE: &str =
    "I'm a species chatbot specialized in animals and wildlife. Please ask about an animal or species!";

const OFF_TOPIC_KEYWORDS: [&str; 23] = [
    "weather",
    "politics",
    "sports",
    "cooking",
    "recipe",
    "music",
    "movie",
    "book",
    "math",
    "programming",
    "code",
    "computer",
    "phone",
    "car",
    "house",
    "job",
    "school",
    "university",
    "travel",
    "vacation",
    "money",
    "finance",
    "stock",
];

const ON_TOPIC_KEYWORDS: [&str; 30] = [
    "animal",
    "species",
    "wildlife",
    "habitat",
    "diet",
    "behavior",
    "conservation",
    "mammal",
    "bird",
    "fish",
    "reptile",
    "amphibian",
    "insect",
    "endangered",
    "extinct",
    "predator",
    "prey",
    "ecosystem",
    "migration",
    "breeding",
    "nocturnal",
    "diurnal",
    "camouflage",
    "adaptation",
    "taxonomy",
    "carnivore",
    "herbivore",
    "omnivore",
    "invertebrate",
    "vertebrate",
];

fn mentions_any(words: &[&str], keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| words.iter().any(|word| word.contains(keyword)))
}

/// Returns true when the message mentions an off-topic keyword
/// without also mentioning an animal related one.
pub fn is_off_topic(message: &str) -> bool {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    mentions_any(&words, &OFF_TOPIC_KEYWORDS) && !mentions_any(&words, &ON_TOPIC_KEYWORDS)
}
