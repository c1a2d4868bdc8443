// src/seed/generator.rs
//
// Randomized bootstrap catalog
//
// One diagram per catalog entry. Only subject, uploader, tags, likes,
// approval, timestamps, provenance and discussion are drawn at random.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use regex::Regex;

use super::catalog::{CatalogEntry, DIAGRAM_CATALOG, SUBJECTS, TAG_VOCABULARY};
use crate::domain::{Comment, Diagram, Reply};

const APPROVAL_RATE: f64 = 0.9;
const REPLY_RATE: f64 = 0.3;
const PROVENANCE_RATE: f64 = 0.7;
const MAX_COMMENTS: usize = 4;
const MAX_TITLE_TAGS: usize = 2;

const CREATED_SPREAD_MS: i64 = 10_000_000_000;
const UPDATED_SPREAD_MS: i64 = 1_000_000_000;
const COMMENT_SPREAD_MS: i64 = 1_000_000_000;
const REPLY_SPREAD_MS: i64 = 100_000_000;

/// Anything that can produce a starting catalog
pub trait SeedSource: Send + Sync {
    fn generate(&self) -> Vec<Diagram>;
}

pub struct MockDataGenerator {
    rng: Mutex<StdRng>,
    title_words: Regex,
}

impl MockDataGenerator {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator; the same seed and `now` yield the same catalog
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            title_words: Regex::new(r"[A-Za-z]+").expect("static regex"),
        }
    }

    pub fn generate_at(&self, now: DateTime<Utc>) -> Vec<Diagram> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let diagrams: Vec<Diagram> = DIAGRAM_CATALOG
            .iter()
            .enumerate()
            .map(|(index, entry)| self.build_diagram(&mut *rng, index + 1, entry, now))
            .collect();

        log::info!(
            "Generated {} mock diagrams ({} approved)",
            diagrams.len(),
            diagrams.iter().filter(|d| d.approved).count()
        );
        diagrams
    }

    fn build_diagram(
        &self,
        rng: &mut StdRng,
        number: usize,
        entry: &CatalogEntry,
        now: DateTime<Utc>,
    ) -> Diagram {
        let subject = *SUBJECTS.choose(rng).unwrap_or(&SUBJECTS[0]);
        let category = entry.category.as_str().to_lowercase();
        let id = format!("diagram-{}", number);

        let likes: u32 = rng.gen_range(0..100);
        let liked_by_user_ids = (1..=likes).map(|n| format!("fan-{}", n)).collect();

        let comments = (0..rng.gen_range(0..=MAX_COMMENTS))
            .map(|j| build_comment(rng, number, j, subject, &category, now))
            .collect();

        Diagram {
            id,
            title: entry.title.to_string(),
            description: format!(
                "A detailed {} level diagram showing {} of {}.",
                entry.complexity.as_str().to_lowercase(),
                category,
                subject
            ),
            image_url: entry.image_url(),
            thumbnail_url: entry.thumbnail_url(),
            category: entry.category.clone(),
            complexity: entry.complexity.clone(),
            uploader_id: format!("user-{}", rng.gen_range(1..=10)),
            uploader_name: format!("Researcher {}", rng.gen_range(1..=10)),
            subject: subject.to_string(),
            tags: self.build_tags(rng, entry.title, subject, &category),
            likes,
            liked_by_user_ids,
            comments,
            approved: rng.gen_bool(APPROVAL_RATE),
            created_at: now - Duration::milliseconds(rng.gen_range(0..CREATED_SPREAD_MS)),
            updated_at: now - Duration::milliseconds(rng.gen_range(0..UPDATED_SPREAD_MS)),
            source: rng
                .gen_bool(PROVENANCE_RATE)
                .then(|| "Journal of Microbiology".to_string()),
            author: rng
                .gen_bool(PROVENANCE_RATE)
                .then(|| format!("Dr. {}. Smith", (b'A' + rng.gen_range(0..26u8)) as char)),
            year: rng
                .gen_bool(PROVENANCE_RATE)
                .then(|| 2020 + rng.gen_range(0..4)),
        }
    }

    /// Base tags, then 1-3 vocabulary draws (repeats skipped), then up to
    /// two title words longer than three letters
    fn build_tags(&self, rng: &mut StdRng, title: &str, subject: &str, category: &str) -> Vec<String> {
        let mut tags = vec![
            "bacteria".to_string(),
            subject.to_lowercase(),
            category.to_string(),
        ];

        for _ in 0..rng.gen_range(1..=3) {
            if let Some(tag) = TAG_VOCABULARY.choose(rng) {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }

        let title_tags: Vec<String> = self
            .title_words
            .find_iter(title)
            .map(|m| m.as_str().to_lowercase())
            .filter(|word| word.len() > 3)
            .filter(|word| !tags.contains(word))
            .fold(Vec::new(), |mut picked, word| {
                if picked.len() < MAX_TITLE_TAGS && !picked.contains(&word) {
                    picked.push(word);
                }
                picked
            });
        tags.extend(title_tags);

        tags
    }
}

fn build_comment(
    rng: &mut StdRng,
    diagram_number: usize,
    index: usize,
    subject: &str,
    category: &str,
    now: DateTime<Utc>,
) -> Comment {
    let id = format!("comment-{}-{}", diagram_number, index);

    let replies = if rng.gen_bool(REPLY_RATE) {
        (0..rng.gen_range(1..=2))
            .map(|k| Reply {
                id: format!("reply-{}-{}-{}", diagram_number, index, k),
                user_id: format!("user-{}", rng.gen_range(1..=10)),
                user_name: format!("User {}", rng.gen_range(1..=100)),
                text: format!("I agree! The {} detail for {} is very useful.", category, subject),
                timestamp: now - Duration::milliseconds(rng.gen_range(0..REPLY_SPREAD_MS)),
                parent_id: id.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Comment {
        user_id: format!("user-{}", rng.gen_range(1..=10)),
        user_name: format!("User {}", rng.gen_range(1..=100)),
        text: format!(
            "This is a great diagram of {}! It really helps understand the {}.",
            subject, category
        ),
        timestamp: now - Duration::milliseconds(rng.gen_range(0..COMMENT_SPREAD_MS)),
        replies,
        id,
    }
}

impl SeedSource for MockDataGenerator {
    fn generate(&self) -> Vec<Diagram> {
        self.generate_at(Utc::now())
    }
}

/// A fixed catalog, handed out as-is on every call
impl SeedSource for Vec<Diagram> {
    fn generate(&self) -> Vec<Diagram> {
        self.clone()
    }
}
