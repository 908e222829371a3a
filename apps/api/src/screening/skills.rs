//! Skill vocabulary and matcher.
//!
//! Matching is case-insensitive on both sides: the document text and each
//! vocabulary term go through the same tokenizer, and a term matches when its
//! token sequence appears consecutively in the document's tokens. Multi-word
//! entries ("Machine Learning", "Power BI") and punctuated entries
//! ("Node.js", "C++", "CI/CD") therefore match real running text.
//!
//! No fuzzy matching, no stemming, no synonyms.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Skills recognized out of the box.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "SQL",
    "HTML",
    "CSS",
    "React",
    "Node.js",
    "Django",
    "Flask",
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "NLP",
    "TensorFlow",
    "PyTorch",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Git",
    "Linux",
    "Agile",
    "Scrum",
    "Jenkins",
    "Tableau",
    "Power BI",
    "REST API",
    "GraphQL",
    "MongoDB",
    "PostgreSQL",
    "Spark",
    "Hadoop",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "FastAPI",
    "TypeScript",
    "Vue.js",
    "Angular",
    "CI/CD",
];

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9#+./-]+").unwrap());

/// Lowercases and tokenizes text into word tokens.
///
/// Tokens keep interior punctuation that carries meaning in skill names
/// (`c++`, `c#`, `node.js`, `ci/cd`) but shed sentence punctuation stuck to
/// word edges, so "shipped Node.js services." yields the token `node.js`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| {
            m.as_str()
                .trim_matches(|c| matches!(c, '.' | '-' | '/'))
                .to_string()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// A vocabulary entry: the display surface plus its token sequence,
/// precomputed when the vocabulary is built.
#[derive(Debug, Clone)]
struct SkillTerm {
    surface: String,
    tokens: Vec<String>,
}

/// Fixed skill vocabulary, built once at startup and shared read-only by all
/// screening runs.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<SkillTerm>,
}

impl SkillVocabulary {
    /// Builds the stock vocabulary from [`DEFAULT_SKILLS`].
    pub fn builtin() -> Self {
        Self::from_terms(DEFAULT_SKILLS.iter().map(|s| s.to_string()))
            .expect("built-in skill list is non-empty and tokenizable")
    }

    /// Loads a vocabulary from a newline-separated file. Blank lines and `#`
    /// comment lines are ignored. Fails fast on a missing file or an empty
    /// list; there is no download-on-miss fallback.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read skills file {}", path.display()))?;
        Self::from_terms(
            raw.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(String::from),
        )
        .with_context(|| format!("invalid skills file {}", path.display()))
    }

    fn from_terms(terms: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for raw in terms {
            let surface = raw.trim().to_string();
            if surface.is_empty() {
                continue;
            }
            let tokens = tokenize(&surface);
            if tokens.is_empty() {
                bail!("skill term {surface:?} has no matchable tokens");
            }
            if seen.insert(surface.to_lowercase()) {
                out.push(SkillTerm { surface, tokens });
            }
        }
        if out.is_empty() {
            bail!("skill vocabulary is empty");
        }
        Ok(SkillVocabulary { terms: out })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Display surfaces in vocabulary order.
    pub fn surfaces(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.surface.clone()).collect()
    }

    /// Returns the vocabulary terms whose token sequence appears consecutively
    /// in the tokenized text. The result is always a subset of the
    /// vocabulary's display surfaces.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let tokens = tokenize(text);
        let mut found = BTreeSet::new();
        for term in &self.terms {
            if contains_phrase(&tokens, &term.tokens) {
                found.insert(term.surface.clone());
            }
        }
        found
    }
}

fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return false;
    }
    tokens.windows(phrase.len()).any(|window| window == phrase)
}
