//! Substitution engine
//!
//! Rules run one after another in mapping order, each on the output of the
//! previous one. Phrase keys are replaced as plain substrings; single-token
//! keys are wrapped in `\b` so they never match inside a larger word.

use crate::mapping::Mapping;
use crate::rule::Rule;
use regex::{NoExpand, Regex};

/// A rule prepared for matching
#[derive(Debug, Clone)]
enum Matcher {
    Phrase,
    Word(Regex),
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: Rule,
    matcher: Matcher,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Option<Self> {
        let matcher = if rule.is_phrase() {
            Matcher::Phrase
        } else {
            let pattern = format!(r"\b{}\b", regex::escape(&rule.incorrect));
            match Regex::new(&pattern) {
                Ok(regex) => Matcher::Word(regex),
                Err(e) => {
                    log::warn!("Skipping rule '{}': {}", rule.incorrect, e);
                    return None;
                }
            }
        };

        Some(Self {
            rule: rule.clone(),
            matcher,
        })
    }

    /// Apply to `text`, returning the new text and the number of replacements
    fn apply(&self, text: &str) -> (String, usize) {
        match &self.matcher {
            Matcher::Phrase => {
                let count = text.matches(self.rule.incorrect.as_str()).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                (text.replace(&self.rule.incorrect, &self.rule.correct), count)
            }
            Matcher::Word(regex) => {
                let count = regex.find_iter(text).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                let replaced = regex.replace_all(text, NoExpand(&self.rule.correct));
                (replaced.into_owned(), count)
            }
        }
    }
}

/// Replacement count for one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCount {
    /// Key that matched
    pub incorrect: String,
    /// Text it was replaced with
    pub correct: String,
    /// Number of replacements performed
    pub count: usize,
}

/// Summary of a substitution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    counts: Vec<RuleCount>,
}

impl Report {
    /// Total number of replacements across all rules
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Rules that replaced at least once, in application order
    pub fn applied(&self) -> impl Iterator<Item = &RuleCount> + '_ {
        self.counts.iter().filter(|c| c.count > 0)
    }
}

#[cfg(test)]
impl Report {
    /// Count for a specific key (0 when the key is unknown or never matched)
    fn count_for(&self, incorrect: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.incorrect == incorrect)
            .map_or(0, |c| c.count)
    }
}

/// Applies a mapping to text.
///
/// Compiling once and reusing the substituter avoids rebuilding the word
/// patterns for every input.
#[derive(Debug, Clone)]
pub struct Substituter {
    rules: Vec<CompiledRule>,
}

impl Substituter {
    /// Prepare `mapping` for substitution
    pub fn new(mapping: &Mapping) -> Self {
        let rules = mapping.iter().filter_map(CompiledRule::compile).collect();
        Self { rules }
    }

    /// Number of rules that will be applied
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule will be applied
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order
    pub fn apply(&self, text: &str) -> String {
        self.apply_with_report(text).0
    }

    /// Apply every rule in order and report how often each one fired
    pub fn apply_with_report(&self, text: &str) -> (String, Report) {
        let mut current = text.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());

        for compiled in &self.rules {
            let (next, count) = compiled.apply(&current);
            if count > 0 {
                log::trace!(
                    "'{}' -> '{}' ({} times)",
                    compiled.rule.incorrect,
                    compiled.rule.correct,
                    count
                );
            }
            current = next;
            counts.push(RuleCount {
                incorrect: compiled.rule.incorrect.clone(),
                correct: compiled.rule.correct.clone(),
                count,
            });
        }

        (current, Report { counts })
    }
}

/// Apply `mapping` to `text`
pub fn apply(text: &str, mapping: &Mapping) -> String {
    Substituter::new(mapping).apply(text)
}
