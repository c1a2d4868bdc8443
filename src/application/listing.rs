// src/application/listing.rs
//
// Ordering and narrowing of diagram result sets
//
// Operates on whatever the façade returned. Sorting is stable, so equal
// keys keep store order.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::{Complexity, Diagram, DomainError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagramSort {
    #[default]
    Newest,
    Oldest,
    MostLiked,
    MostCommented,
    TitleAsc,
    TitleDesc,
}

impl DiagramSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramSort::Newest => "newest",
            DiagramSort::Oldest => "oldest",
            DiagramSort::MostLiked => "most-liked",
            DiagramSort::MostCommented => "most-commented",
            DiagramSort::TitleAsc => "title-asc",
            DiagramSort::TitleDesc => "title-desc",
        }
    }

    pub fn apply(&self, diagrams: &mut [Diagram]) {
        match self {
            DiagramSort::Newest => diagrams.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            DiagramSort::Oldest => diagrams.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            DiagramSort::MostLiked => diagrams.sort_by(|a, b| b.likes.cmp(&a.likes)),
            // Top-level comments only
            DiagramSort::MostCommented => {
                diagrams.sort_by(|a, b| b.comments.len().cmp(&a.comments.len()))
            }
            DiagramSort::TitleAsc => diagrams.sort_by(|a, b| compare_titles(&a.title, &b.title)),
            DiagramSort::TitleDesc => diagrams.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        }
    }
}

impl FromStr for DiagramSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(DiagramSort::Newest),
            "oldest" => Ok(DiagramSort::Oldest),
            "most-liked" => Ok(DiagramSort::MostLiked),
            "most-commented" => Ok(DiagramSort::MostCommented),
            "title-asc" => Ok(DiagramSort::TitleAsc),
            "title-desc" => Ok(DiagramSort::TitleDesc),
            other => Err(DomainError::UnknownValue(format!("sort order '{}'", other))),
        }
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Keep diagrams of one complexity
///
/// An empty name keeps everything. A name outside the known levels is
/// treated as Basic.
pub fn filter_by_complexity(diagrams: Vec<Diagram>, complexity: &str) -> Vec<Diagram> {
    if complexity.is_empty() {
        return diagrams;
    }

    let wanted = match Complexity::from(complexity) {
        Complexity::Other(_) => Complexity::Basic,
        known => known,
    };

    diagrams
        .into_iter()
        .filter(|d| d.complexity == wanted)
        .collect()
}

/// Sort, narrow and truncate in one pass
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub sort: DiagramSort,
    pub complexity: Option<String>,
    pub limit: Option<usize>,
}

impl ListingQuery {
    pub fn apply(&self, diagrams: Vec<Diagram>) -> Vec<Diagram> {
        let mut diagrams = match &self.complexity {
            Some(level) => filter_by_complexity(diagrams, level),
            None => diagrams,
        };

        self.sort.apply(&mut diagrams);

        if let Some(limit) = self.limit {
            diagrams.truncate(limit);
        }
        diagrams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::entity::test_support::payload;
    use chrono::{Duration, Utc};

    fn diagram(title: &str, age_days: i64, likes: u32, comments: usize, complexity: Complexity) -> Diagram {
        let mut d = Diagram::new(payload(title));
        d.created_at = Utc::now() - Duration::days(age_days);
        d.likes = likes;
        d.complexity = complexity;
        for n in 0..comments {
            d.add_comment(format!("u{}", n), "User".into(), "text".into());
        }
        d
    }

    fn sample() -> Vec<Diagram> {
        vec![
            diagram("beta", 3, 10, 0, Complexity::Basic),
            diagram("Alpha", 1, 2, 3, Complexity::Advanced),
            diagram("gamma", 2, 7, 1, Complexity::Basic),
        ]
    }

    fn titles(diagrams: &[Diagram]) -> Vec<&str> {
        diagrams.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn test_sort_orders() {
        let cases = [
            (DiagramSort::Newest, vec!["Alpha", "gamma", "beta"]),
            (DiagramSort::Oldest, vec!["beta", "gamma", "Alpha"]),
            (DiagramSort::MostLiked, vec!["beta", "gamma", "Alpha"]),
            (DiagramSort::MostCommented, vec!["Alpha", "gamma", "beta"]),
            (DiagramSort::TitleAsc, vec!["Alpha", "beta", "gamma"]),
            (DiagramSort::TitleDesc, vec!["gamma", "beta", "Alpha"]),
        ];

        for (sort, expected) in cases {
            let mut diagrams = sample();
            sort.apply(&mut diagrams);
            assert_eq!(titles(&diagrams), expected, "{}", sort.as_str());
        }
    }

    #[test]
    fn test_sort_parses_kebab_names() {
        assert_eq!("most-liked".parse::<DiagramSort>().unwrap(), DiagramSort::MostLiked);
        assert_eq!("title-desc".parse::<DiagramSort>().unwrap(), DiagramSort::TitleDesc);
        assert!("popular".parse::<DiagramSort>().is_err());
    }

    #[test]
    fn test_unknown_complexity_falls_back_to_basic() {
        let basic = filter_by_complexity(sample(), "Expert");
        assert_eq!(titles(&basic), vec!["beta", "gamma"]);

        assert_eq!(filter_by_complexity(sample(), "").len(), 3);
        assert_eq!(filter_by_complexity(sample(), "Advanced").len(), 1);
    }

    #[test]
    fn test_listing_query_filters_sorts_and_limits() {
        let query = ListingQuery {
            sort: DiagramSort::MostLiked,
            complexity: Some("Basic".into()),
            limit: Some(1),
        };
        assert_eq!(titles(&query.apply(sample())), vec!["beta"]);
    }
}
