//! Built-in catalog characters.
//!
//! These records are always listed before any user-created character.

use super::model::{Character, CharacterSource, Visibility};

/// Ids of the characters highlighted in the "featured" strip.
const FEATURED_IDS: [&str; 4] = ["f1", "f2", "f3", "f4"];

#[allow(clippy::too_many_arguments)]
fn system(
    id: &str,
    name: &str,
    description: &str,
    image_url: &str,
    creator: &str,
    interactions: u64,
    category: &str,
    greeting: &str,
) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        creator: creator.to_string(),
        interactions,
        category: Some(category.to_string()),
        greeting: Some(greeting.to_string()),
        tagline: None,
        visibility: Visibility::Public,
        source: CharacterSource::System,
    }
}

/// Returns the built-in catalog in display order.
pub fn default_characters() -> Vec<Character> {
    vec![
        system(
            "1",
            "Math Tutor",
            "I can help you with any math problem, from basic arithmetic to advanced calculus.",
            "/math.jpeg",
            "Education Team",
            75_000,
            "Education",
            "Ready to solve some math problems?",
        ),
        system(
            "2",
            "The Rock",
            "Can you smell what The Rock is cooking? Let's talk about wrestling, movies, and motivation!",
            "/rock.jpg",
            "WWE Team",
            250_000,
            "Entertainment",
            "Finally... The Rock has come back to chat with you!",
        ),
        system(
            "3",
            "Neil deGrasse Tyson",
            "Let's explore the cosmos together and unravel the mysteries of the universe.",
            "/neil.jpeg",
            "Science Team",
            180_000,
            "Science",
            "The cosmos is within us. Let's explore it together!",
        ),
        system(
            "4",
            "Joke Master",
            "Need a laugh? I've got jokes for days! Let me brighten your day with humor.",
            "/joke.jpg",
            "Comedy Team",
            120_000,
            "Entertainment",
            "Why did I become a comedian? Because I wanted to stand up for myself! 😄",
        ),
        system(
            "5",
            "Writing Coach",
            "From essays to novels, I'll help you improve your writing skills.",
            "/writing.webp",
            "Writing Team",
            95_000,
            "Education",
            "Let's craft some amazing stories together!",
        ),
        system(
            "6",
            "Sports Analyst",
            "Deep dive into sports statistics, analysis, and predictions across all major leagues.",
            "/sports.jpg",
            "Sports Team",
            150_000,
            "Sports",
            "Game on! What sports shall we discuss today?",
        ),
        system(
            "7",
            "News Anchor",
            "Stay updated with the latest news and current events from around the world.",
            "/news.webp",
            "News Team",
            200_000,
            "News",
            "Breaking news! What would you like to know about today's events?",
        ),
        system(
            "8",
            "Riddle Master",
            "Challenge your mind with brain-teasers, riddles, and logical puzzles.",
            "/riddler.jpg",
            "Puzzle Team",
            130_000,
            "Entertainment",
            "I speak without a mouth and hear without ears. What am I? Let's solve some riddles!",
        ),
        system(
            "9",
            "Tech Guru",
            "Your go-to expert for all things technology, from coding to gadgets.",
            "/tech.png",
            "Tech Team",
            180_000,
            "Technology",
            "Have you tried turning it off and on again? Just kidding! What tech questions do you have?",
        ),
        system(
            "10",
            "Philosophy Prof",
            "Explore deep questions about existence, knowledge, values, and reality.",
            "/philosophy.jpeg",
            "Philosophy Team",
            90_000,
            "Education",
            "I think, therefore I am. What philosophical questions shall we ponder?",
        ),
        system(
            "f1",
            "Einstein AI",
            "Explore physics and relativity with Einstein",
            "/einstein.jpg",
            "Science Team",
            150_000,
            "Science",
            "E=mc², and that's just the beginning! What would you like to learn about physics?",
        ),
        system(
            "f2",
            "Shakespeare",
            "Discuss literature and poetry with the Bard",
            "/Shakespeare.jpg",
            "Literature Team",
            120_000,
            "Literature",
            "To chat or not to chat, that is the question! What literary matters shall we discuss?",
        ),
        system(
            "f3",
            "Chef Gordon",
            "Learn cooking from a master chef",
            "/chef2.jpg",
            "Culinary Team",
            90_000,
            "Cooking",
            "Right then, you donut! Let's make something spectacular in the kitchen!",
        ),
        system(
            "f4",
            "Detective Holmes",
            "Solve mysteries with the legendary detective",
            "/sherlock.jpg",
            "Mystery Team",
            100_000,
            "Mystery",
            "Elementary, my dear friend! What mystery shall we solve today?",
        ),
        system(
            "beethoven",
            "Beethoven",
            "Explore classical music and composition with the legendary composer.",
            "/beethoven.jpeg",
            "Music Team",
            280_000,
            "Music",
            "Hello, I am Beethoven. Let us compose something beautiful together!",
        ),
        system(
            "picasso",
            "Picasso",
            "Discover modern art and cubism with the revolutionary artist.",
            "/picasso.jpg",
            "Art Team",
            320_000,
            "Art",
            "Every act of creation is first an act of destruction. Let us create art!",
        ),
        system(
            "ada",
            "Ada Lovelace",
            "Learn about computing history and algorithms with the first programmer.",
            "/ada.jpg",
            "AI Team",
            290_000,
            "Technology",
            "Hello, I am Ada Lovelace. Let us discuss the poetry of numbers and logic!",
        ),
        system(
            "tesla",
            "Nikola Tesla",
            "Explore electricity and innovation with the brilliant inventor.",
            "/tesla.avif",
            "Science Team",
            275_000,
            "Science",
            "Greetings! I am Nikola Tesla. Let us spark some innovation together.",
        ),
        system(
            "davinci",
            "Leonardo da Vinci",
            "Discover the intersection of art and science with the Renaissance master.",
            "/davinci.webp",
            "Renaissance Team",
            310_000,
            "Art & Science",
            "Learning never exhausts the mind. What shall we explore today?",
        ),
        system(
            "curie",
            "Marie Curie",
            "Learn about radioactivity and pioneering research in physics and chemistry.",
            "/curie.jpg",
            "Science Team",
            295_000,
            "Science",
            "Hello, I am Marie Curie. Let us discover something new in science!",
        ),
    ]
}

pub fn featured_character_ids() -> &'static [&'static str] {
    &FEATURED_IDS
}

/// Featured characters in strip order, taken from the built-in catalog.
pub fn featured_characters() -> Vec<Character> {
    let catalog = default_characters();
    FEATURED_IDS
        .iter()
        .filter_map(|id| catalog.iter().find(|c| c.id == *id).cloned())
        .collect()
}
