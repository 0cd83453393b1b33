//! Randomly templated mock characters.
//!
//! Every call produces a fresh set: each kind contributes a fixed number of
//! records built from word lists, ids run sequentially across kinds in
//! generation order, and the final list is shuffled.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;
use url::Url;

use super::model::{MockCharacter, MockKind};
use crate::error::{CharmError, Result};

const AVATAR_BASE: &str = "https://source.boringavatars.com";
const AVATAR_SIZE: u32 = 120;

const AI_PREFIXES: &[&str] = &[
    "Quantum", "Cyber", "Data", "Logic", "Binary", "Code", "Tech", "Algo", "Flux",
];
const AI_SUFFIXES: &[&str] = &[
    "mind", "core", "tron", "byte", "bot", "wave", "net", "sync", "flex", "node",
];
const AI_RACES: &[&str] = &[
    "AI Assistant",
    "Neural Network",
    "Expert System",
    "Quantum AI",
    "Hybrid AI",
    "Autonomous Agent",
    "Deep Learning Model",
    "Language Model",
];
const AI_ROLES: &[&str] = &[
    "Data Analyst",
    "Code Generator",
    "Pattern Recognizer",
    "Knowledge Assistant",
    "Language Processor",
    "Vision Analyzer",
    "Decision Maker",
    "Problem Solver",
];
const AI_CAPABILITIES: &[&str] = &[
    "Natural Language Processing",
    "Computer Vision",
    "Machine Learning",
    "Data Analysis",
    "Code Generation",
    "Speech Recognition",
    "Image Generation",
    "Text-to-Speech",
];
const AI_SPECIALIZATIONS: &[&str] = &[
    "Scientific Research",
    "Creative Writing",
    "Mathematics",
    "Programming",
    "Art Generation",
    "Music Composition",
    "Problem Solving",
    "Education",
];

const SPORTS_FIRST: &[&str] = &[
    "LeBron", "Cristiano", "Lionel", "Serena", "Roger", "Tiger", "Usain",
];
const SPORTS_LAST: &[&str] = &[
    "James", "Ronaldo", "Messi", "Williams", "Federer", "Woods", "Bolt",
];
const SPORTS: &[&str] = &[
    "Football",
    "Basketball",
    "Tennis",
    "Soccer",
    "Baseball",
    "Boxing",
    "MMA",
    "Cricket",
];
const SPORTS_ROLES: &[&str] = &[
    "Forward",
    "Guard",
    "Striker",
    "Pitcher",
    "Quarterback",
    "Champion",
    "All-Star",
    "MVP",
];

const ANIME_FIRST: &[&str] = &["Yuki", "Kai", "Akira", "Nova"];
const ANIME_LAST: &[&str] = &["Shinigami", "Uzumaki", "Uchiha", "Akatsuki"];
const ANIME_CLASSES: &[&str] = &[
    "Ninja",
    "Saiyan",
    "Soul Reaper",
    "Alchemist",
    "Hero",
    "Mage",
    "Warrior",
    "Demon Slayer",
];
const ANIME_POWERS: &[&str] = &[
    "Chakra",
    "Ki",
    "Reiatsu",
    "Alchemy",
    "Quirk",
    "Magic",
    "Spirit Energy",
    "Breathing Technique",
];
const ANIME_RANKS: &[&str] = &[
    "S-Class",
    "A-Class",
    "SSS-Rank",
    "Supreme",
    "Legendary",
    "Ultimate",
    "Grand Master",
    "Elite",
];
const ANIME_MOVES: &[&str] = &[
    "Ultimate Dragon Fist",
    "Shadow Clone Jutsu",
    "Spirit Gun",
    "Final Flash",
    "Bankai",
    "Detroit Smash",
    "Thunder Cross Split Attack",
    "Flame Breathing",
];

const PERSON_FIRST: &[&str] = &[
    "Amelia", "Marcus", "Sofia", "Daniel", "Hannah", "Oliver", "Priya", "Mateo", "Chloe", "Elliot",
];
const PERSON_LAST: &[&str] = &[
    "Bennett", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Alvarez", "Whitfield", "Kowalski",
    "Fischer", "Reyes",
];

const VEHICLES: &[&str] = &[
    "Tesla Model S",
    "Ford Mustang",
    "BMW M3",
    "Toyota Supra",
    "Porsche 911",
    "Audi R8",
    "Mercedes-Benz AMG GT",
    "Chevrolet Corvette",
];
const MOTORCYCLES: &[&str] = &[
    "Yamaha YZF-R1",
    "Ducati Panigale V4",
    "Kawasaki Ninja ZX-10R",
    "Suzuki Hayabusa",
    "Honda CBR1000RR",
    "BMW S1000RR",
];

const MYTH_NAMES: &[&str] = &[
    "Zeus", "Thor", "Odin", "Ra", "Athena", "Apollo", "Isis", "Anubis",
];
const MYTH_SEEDS: &[&str] = &["Zeus", "Thor", "Odin", "Ra"];
const HISTORICAL_NAMES: &[&str] = &[
    "Leonardo da Vinci",
    "Cleopatra",
    "Alexander",
    "Joan of Arc",
    "Napoleon",
    "Gandhi",
];
const HISTORICAL_SEEDS: &[&str] = &["davinci", "cleopatra", "alexander", "joan"];
const SCIENTIST_NAMES: &[&str] = &["Einstein", "Newton", "Tesla", "Curie", "Darwin", "Hawking"];
const SCIENTIST_SEEDS: &[&str] = &["einstein", "newton", "tesla", "curie"];

/// Produces the full shuffled mock set.
pub fn generate_characters<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<MockCharacter>> {
    let total: usize = MockKind::ALL.iter().map(MockKind::group_size).sum();
    let mut characters = Vec::with_capacity(total);
    let mut next_id: u32 = 1;

    for kind in MockKind::ALL {
        for _ in 0..kind.group_size() {
            characters.push(generate_one(kind, next_id, rng)?);
            next_id += 1;
        }
    }

    characters.shuffle(rng);
    Ok(characters)
}

/// Builds a single record of the given kind.
pub fn generate_one<R: Rng + ?Sized>(kind: MockKind, id: u32, rng: &mut R) -> Result<MockCharacter> {
    let mut attrs = Attributes::default();

    let (name, seed, style, palette) = match kind {
        MockKind::Ai => {
            let name = format!("{}{}", pick(rng, AI_PREFIXES), pick(rng, AI_SUFFIXES));
            attrs.text("race", pick(rng, AI_RACES));
            attrs.text("role", pick(rng, AI_ROLES));
            attrs.text("capability", pick(rng, AI_CAPABILITIES));
            attrs.text("specialization", pick(rng, AI_SPECIALIZATIONS));
            attrs.text("version", semver(rng));
            attrs.text("uptime", format!("{}%", rng.gen_range(95..=100)));
            (name.clone(), name, "beam", "264653,2a9d8f,e9c46a,f4a261,e76f51")
        }
        MockKind::Sports => {
            let name = format!("{} {}", pick(rng, SPORTS_FIRST), pick(rng, SPORTS_LAST));
            attrs.text("sport", pick(rng, SPORTS));
            attrs.text("role", pick(rng, SPORTS_ROLES));
            attrs.text("achievements", format!("{} Championships", rng.gen_range(1..=5)));
            attrs.text("experience", years(rng));
            attrs.text("rating", format!("{}/100", rng.gen_range(85..=99)));
            (name.clone(), name, "pixel", "003f5c,58508d,bc5090,ff6361,ffa600")
        }
        MockKind::Anime => {
            let name = format!("{} {}", pick(rng, ANIME_FIRST), pick(rng, ANIME_LAST));
            attrs.text("class", pick(rng, ANIME_CLASSES));
            attrs.text("power", pick(rng, ANIME_POWERS));
            attrs.text("rank", pick(rng, ANIME_RANKS));
            attrs.text("specialMove", pick(rng, ANIME_MOVES));
            attrs.text("powerLevel", group_thousands(rng.gen_range(9_000..=100_000)));
            attrs.number("transformations", rng.gen_range(1..=5));
            (name.clone(), name, "marble", "ff0a54,ff477e,ff7096,ff85a1,ff99ac")
        }
        MockKind::Music => {
            let name = full_name(rng);
            attrs.text("genre", pick(rng, &["Classical", "Jazz", "Rock", "Pop"]));
            attrs.text(
                "role",
                pick(rng, &["Composer", "Singer", "Instrumentalist", "Conductor"]),
            );
            attrs.text("achievements", format!("{} Albums", rng.gen_range(1..=10)));
            attrs.text("experience", years(rng));
            (name.clone(), name, "sunset", "004b23,006400,007200,008000,38b000")
        }
        MockKind::Cooking => {
            let name = full_name(rng);
            attrs.text("style", pick(rng, &["Italian", "French", "Chinese", "Indian"]));
            attrs.text(
                "role",
                pick(rng, &["Chef", "Sous Chef", "Pastry Chef", "Line Cook"]),
            );
            attrs.text("achievements", format!("{} Awards", rng.gen_range(1..=5)));
            attrs.text("experience", years(rng));
            (name.clone(), name, "ring", "590d22,800f2f,a4133c,c9184a,ff4d6d")
        }
        MockKind::Cars => {
            let name = pick(rng, VEHICLES).to_string();
            attrs.text("brand", pick(rng, &["Tesla", "BMW", "Mercedes", "Toyota"]));
            attrs.text("bodyType", pick(rng, &["Sedan", "SUV", "Truck", "Coupe"]));
            attrs.text("speed", speed(rng, 100..=300));
            attrs.text("price", price(rng, 20_000..=100_000));
            attrs.text(
                "description",
                "A high-performance car with magical attributes and ultimate rank.",
            );
            attrs.text(
                "generalInfo",
                "This car is equipped with advanced features and a unique special move for unparalleled performance.",
            );
            (name.clone(), name, "bauhaus", "001219,005f73,0a9396,94d2bd,e9d8a6")
        }
        MockKind::Bikes => {
            let name = pick(rng, MOTORCYCLES).to_string();
            attrs.text("brand", pick(rng, &["Yamaha", "Ducati", "Kawasaki", "Suzuki"]));
            attrs.text(
                "bodyType",
                pick(rng, &["Sport", "Touring", "Standard", "Adventure"]),
            );
            attrs.text("speed", speed(rng, 80..=250));
            attrs.text("price", price(rng, 10_000..=50_000));
            (name.clone(), name, "bauhaus", "582f0e,7f4f24,936639,a68a64,b6ad90")
        }
        MockKind::Mythology => {
            let name = pick(rng, MYTH_NAMES).to_string();
            attrs.text(
                "domain",
                pick(
                    rng,
                    &["Sky", "Thunder", "Wisdom", "Sun", "War", "Death", "Nature", "Love"],
                ),
            );
            attrs.text(
                "powers",
                pick(
                    rng,
                    &[
                        "Lightning",
                        "Storm Control",
                        "Divine Wisdom",
                        "Solar Energy",
                        "Battle Strategy",
                        "Life and Death",
                        "Nature Control",
                        "Emotional Influence",
                    ],
                ),
            );
            attrs.text(
                "realm",
                pick(rng, &["Olympus", "Asgard", "Heliopolis", "Elysium"]),
            );
            attrs.text(
                "weapon",
                pick(
                    rng,
                    &[
                        "Thunderbolt",
                        "Mjolnir",
                        "Gungnir",
                        "Solar Staff",
                        "Aegis",
                        "Bow of Light",
                    ],
                ),
            );
            let seed = pick(rng, MYTH_SEEDS).to_string();
            (name, seed, "crystal", "ff7b00,ff8800,ff9500,ffa200,ffaa00")
        }
        MockKind::Historical => {
            let name = pick(rng, HISTORICAL_NAMES).to_string();
            attrs.text(
                "era",
                pick(
                    rng,
                    &["Renaissance", "Ancient Egypt", "Classical", "Medieval", "Modern"],
                ),
            );
            attrs.text(
                "achievements",
                pick(
                    rng,
                    &[
                        "Art & Science",
                        "Egyptian Dynasty",
                        "Empire Building",
                        "Military Leadership",
                        "Civil Rights",
                    ],
                ),
            );
            attrs.text("impact", format!("{}/10", rng.gen_range(8..=10)));
            attrs.text(
                "legacy",
                pick(
                    rng,
                    &[
                        "Cultural Revolution",
                        "Political Reform",
                        "Scientific Progress",
                        "Social Change",
                    ],
                ),
            );
            let seed = pick(rng, HISTORICAL_SEEDS).to_string();
            (name, seed, "marble", "8338ec,3a86ff,ff006e,fb5607,ffbe0b")
        }
        MockKind::Scientist => {
            let name = pick(rng, SCIENTIST_NAMES).to_string();
            attrs.text(
                "field",
                pick(
                    rng,
                    &["Physics", "Mathematics", "Chemistry", "Biology", "Astronomy"],
                ),
            );
            attrs.text(
                "discovery",
                pick(
                    rng,
                    &["Relativity", "Gravity", "Radioactivity", "Evolution", "Black Holes"],
                ),
            );
            attrs.text("awards", format!("{} Nobel Prizes", rng.gen_range(1..=5)));
            attrs.text("influence", format!("{} Citations", rng.gen_range(90..=100)));
            let seed = pick(rng, SCIENTIST_SEEDS).to_string();
            (name, seed, "pixel", "390099,9e0059,ff0054,ff5400,ffbd00")
        }
    };

    Ok(MockCharacter {
        id,
        kind,
        name,
        avatar: avatar_url(style, &seed, palette)?,
        attributes: attrs.0,
    })
}

#[derive(Default)]
struct Attributes(BTreeMap<String, Value>);

impl Attributes {
    fn text(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), Value::String(value.into()));
    }

    fn number(&mut self, key: &str, value: u64) {
        self.0.insert(key.to_string(), Value::from(value));
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    // Word lists are non-empty constants
    options.choose(rng).copied().unwrap_or_default()
}

fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, PERSON_FIRST), pick(rng, PERSON_LAST))
}

fn years<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} years", rng.gen_range(5..=20))
}

fn speed<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> String {
    format!("{} km/h", rng.gen_range(range))
}

fn price<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u64>) -> String {
    format!("${}", group_thousands(rng.gen_range(range)))
}

fn semver<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}",
        rng.gen_range(0..10),
        rng.gen_range(0..20),
        rng.gen_range(0..20)
    )
}

/// Formats an integer with `,` thousands separators (`100000` → `100,000`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn avatar_url(style: &str, seed: &str, palette: &str) -> Result<String> {
    let mut url = Url::parse(AVATAR_BASE)
        .map_err(|e| CharmError::internal(format!("invalid avatar base url: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| CharmError::internal("avatar base url cannot hold a path"))?
        .clear()
        .push(style)
        .push(&AVATAR_SIZE.to_string())
        .push(seed);
    // Palettes are hex codes joined by literal commas
    url.set_query(Some(&format!("colors={palette}")));
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generates_all_groups_with_unique_ids() {
        let mut rng = StdRng::seed_from_u64(3);
        let characters = generate_characters(&mut rng).unwrap();
        assert_eq!(characters.len(), 57);

        let ids: HashSet<u32> = characters.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 57);
        assert_eq!(ids.iter().min(), Some(&1));
        assert_eq!(ids.iter().max(), Some(&57));

        for kind in MockKind::ALL {
            let count = characters.iter().filter(|c| c.kind == kind).count();
            assert_eq!(count, kind.group_size(), "{kind}");
        }
    }

    #[test]
    fn test_output_is_shuffled() {
        let mut rng = StdRng::seed_from_u64(11);
        let characters = generate_characters(&mut rng).unwrap();
        let ids: Vec<u32> = characters.iter().map(|c| c.id).collect();
        let sorted: Vec<u32> = (1..=57).collect();
        assert_ne!(ids, sorted);
    }

    #[test]
    fn test_ai_record_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let ai = generate_one(MockKind::Ai, 1, &mut rng).unwrap();
        for key in ["race", "role", "capability", "specialization", "version", "uptime"] {
            assert!(ai.attribute(key).is_some(), "missing {key}");
        }
        let uptime = ai.attribute("uptime").and_then(Value::as_str).unwrap();
        let pct: u32 = uptime.trim_end_matches('%').parse().unwrap();
        assert!((95..=100).contains(&pct));
        assert!(ai.avatar.starts_with("https://source.boringavatars.com/beam/120/"));
        assert!(ai.avatar.ends_with("?colors=264653,2a9d8f,e9c46a,f4a261,e76f51"));
    }

    #[test]
    fn test_avatar_seed_is_percent_encoded() {
        let url = avatar_url("pixel", "Lionel Messi", "003f5c").unwrap();
        assert_eq!(
            url,
            "https://source.boringavatars.com/pixel/120/Lionel%20Messi?colors=003f5c"
        );
    }

    #[test]
    fn test_avatar_palette_keeps_commas() {
        let url = avatar_url("ring", "Goku", "ff6b6b,4ecdc4").unwrap();
        assert_eq!(
            url,
            "https://source.boringavatars.com/ring/120/Goku?colors=ff6b6b,4ecdc4"
        );
        assert!(!url.contains("%2C"));
    }

    #[test]
    fn test_json_flattens_attributes() {
        let mut rng = StdRng::seed_from_u64(9);
        let anime = generate_one(MockKind::Anime, 18, &mut rng).unwrap();
        let json = serde_json::to_value(&anime).unwrap();
        assert_eq!(json["type"], "Anime");
        assert_eq!(json["id"], 18);
        assert!(json["transformations"].is_u64());
        assert!(json["specialMove"].is_string());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(9_000), "9,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
