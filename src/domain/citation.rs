// src/domain/citation.rs
//
// Citation strings for a diagram. Pure formatting, no store access.

use serde::{Deserialize, Serialize};

use super::diagram::Diagram;
use super::DomainError;

const DEFAULT_SOURCE: &str = "Diagram Encyclopedia";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CitationFormat {
    Apa,
    Mla,
    Ieee,
}

/// Format a citation for `diagram`
///
/// Missing author falls back to the uploader, missing year to `current_year`,
/// missing source to the encyclopedia itself.
pub fn generate_citation(diagram: &Diagram, format: CitationFormat, current_year: i32) -> String {
    let author = diagram.author.as_deref().unwrap_or(&diagram.uploader_name);
    let year = diagram.year.unwrap_or(current_year);
    let title = &diagram.title;
    let source = diagram.source.as_deref().unwrap_or(DEFAULT_SOURCE);

    match format {
        CitationFormat::Apa => format!("{}. ({}). {} [Diagram]. {}.", author, year, title, source),
        CitationFormat::Mla => format!("{}. \"{}.\" {}, {}.", author, title, source, year),
        CitationFormat::Ieee => format!("[1] {}, \"{},\" {}, {}.", author, title, source, year),
    }
}

impl CitationFormat {
    pub const ALL: [CitationFormat; 3] = [CitationFormat::Apa, CitationFormat::Mla, CitationFormat::Ieee];
}

impl std::str::FromStr for CitationFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "APA" => Ok(CitationFormat::Apa),
            "MLA" => Ok(CitationFormat::Mla),
            "IEEE" => Ok(CitationFormat::Ieee),
            other => Err(DomainError::UnknownValue(format!("citation format '{}'", other))),
        }
    }
}

impl std::fmt::Display for CitationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CitationFormat::Apa => write!(f, "APA"),
            CitationFormat::Mla => write!(f, "MLA"),
            CitationFormat::Ieee => write!(f, "IEEE"),
        }
    }
}
