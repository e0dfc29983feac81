// Synthetic news payloads for exercising the server.
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::news::NewsInfo;

const WORDS: &[&str] = &[
    "river", "council", "market", "storm", "vote", "bridge", "harvest", "festival", "school",
    "record", "museum", "train", "budget", "forest", "summit", "league", "port", "strike",
    "launch", "discovery", "report", "border", "clinic", "factory", "election", "drought",
];

const QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do.",
    "Nothing in life is to be feared, it is only to be understood.",
    "Well done is better than well said.",
    "The future depends on what you do today.",
    "It always seems impossible until it's done.",
    "Simplicity is the ultimate sophistication.",
    "Whatever you are, be a good one.",
    "What we know is a drop, what we don't know is an ocean.",
];

const FIRST_NAMES: &[&str] = &[
    "Amara", "Bjorn", "Carmen", "Dmitri", "Emeka", "Farah", "Gustavo", "Hana", "Ivan", "Julia",
    "Kenji", "Leila", "Mateo", "Nadia", "Oscar", "Priya",
];

const LAST_NAMES: &[&str] = &[
    "Okafor", "Lindqvist", "Alvarez", "Petrov", "Nwosu", "Haddad", "Ribeiro", "Sato",
    "Kowalski", "Moreau", "Tanaka", "Rahimi", "Silva", "Novak", "Jensen", "Iyer",
];

const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Canada", "Egypt", "Finland", "Ghana", "India", "Indonesia",
    "Mexico", "Morocco", "New Zealand", "Poland", "Portugal", "South Korea", "Turkey", "Vietnam",
];

// 1900-01-01T00:00:00Z
const EARLIEST_TIMESTAMP: i64 = -2_208_988_800;

fn pick<R: Rng>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

/// A sentence of `words` random words, capitalized and ending with a period.
pub fn sentence<R: Rng>(rng: &mut R, words: usize) -> String {
    let words: Vec<String> = (0..words).map(|_| pick(rng, WORDS)).collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get(..1) {
        let upper = first.to_uppercase();
        sentence.replace_range(..1, &upper);
    }
    sentence.push('.');
    sentence
}

/// A random second-precision instant between 1900-01-01 and now.
pub fn date<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    let now = Utc::now().timestamp();
    let secs = rng.gen_range(EARLIEST_TIMESTAMP..=now);
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}

pub fn random_info<R: Rng>(rng: &mut R) -> NewsInfo {
    NewsInfo {
        title: sentence(rng, 3),
        context: pick(rng, QUOTES),
        reporter: format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        country: pick(rng, COUNTRIES),
        time: date(rng),
    }
}
