//! Report-only story format checks.
//!
//! The prompt asks the model for a particular script format, but nothing
//! forces the model to comply. [`lint_story`] compares a story against those
//! rules and lists every deviation. It never edits or rejects the story.

use crate::Story;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^Title\s+"(.*)"$"#).expect("title pattern is valid")
});

static PAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Pause for\s+(\d+(?:\.\d+)?)(?:\s*(?:s|sec|secs|seconds?))?\.?$")
        .expect("pause pattern is valid")
});

const MIN_LINES: usize = 10;
const MAX_LINES: usize = 20;
const MAX_PAUSE_SECS: f64 = 2.0;

/// One way a story departs from the requested format.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum LintFinding {
    /// Story has no non-blank lines
    #[display("story is empty")]
    Empty,
    /// First line is not a Title marker
    #[display("story does not open with a Title line")]
    MissingOpeningTitle,
    /// Last line is not a Title marker
    #[display("story does not close with a Title line")]
    MissingClosingTitle,
    /// Non-blank line count outside 10-20
    #[display("story has {} lines, expected {}-{}", _0, MIN_LINES, MAX_LINES)]
    LineCount(usize),
    /// A character never speaks
    #[display("{} never speaks", _0)]
    Silent(String),
    /// No "A walks to B" line
    #[display("no character walks to another")]
    NoMovement,
    /// No pause line
    #[display("story has no pause")]
    NoPause,
    /// Pause longer than two seconds
    #[display("line {}: pause of {}s exceeds {}s", line, seconds, MAX_PAUSE_SECS)]
    PauseTooLong {
        /// 1-based line number
        line: usize,
        /// Requested pause length
        seconds: f64,
    },
    /// Speaker or mover not in the character list
    #[display("line {}: unknown character '{}'", line, name)]
    UnknownCharacter {
        /// 1-based line number
        line: usize,
        /// Name as written
        name: String,
    },
    /// A character walks a second time
    #[display("line {}: {} moves more than once", line, name)]
    MovedTwice {
        /// 1-based line number
        line: usize,
        /// Character name
        name: String,
    },
    /// Line matches no known line form
    #[display("line {}: unrecognized line '{}'", line, text)]
    Unrecognized {
        /// 1-based line number
        line: usize,
        /// Line text
        text: String,
    },
}

enum Line<'a> {
    Title,
    Movement { from: &'a str, to: &'a str },
    Pause(f64),
    Dialogue { speaker: &'a str },
    Other,
}

fn classify(text: &str) -> Line<'_> {
    if TITLE.is_match(text) {
        return Line::Title;
    }
    if let Some(caps) = PAUSE.captures(text) {
        let seconds = caps[1].parse().unwrap_or(f64::INFINITY);
        return Line::Pause(seconds);
    }
    if !text.contains(':') {
        if let Some((from, to)) = text.split_once(" walks to ") {
            return Line::Movement {
                from: from.trim(),
                to: to.trim(),
            };
        }
    }
    match text.split_once(':') {
        Some((speaker, said)) if !speaker.trim().is_empty() && !said.trim().is_empty() => {
            Line::Dialogue {
                speaker: speaker.trim(),
            }
        }
        _ => Line::Other,
    }
}

/// Check a story against the prompt's formatting rules.
///
/// Returns an empty list when the story conforms.
///
/// # Examples
///
/// ```
/// use fabula_core::{LintFinding, Story, lint_story};
///
/// let findings = lint_story(&Story::new("Alice: hi"), &["Alice"]);
/// assert!(findings.contains(&LintFinding::MissingOpeningTitle));
/// assert!(findings.contains(&LintFinding::NoPause));
/// ```
#[instrument(skip_all, fields(characters = characters.len()))]
pub fn lint_story<S: AsRef<str>>(story: &Story, characters: &[S]) -> Vec<LintFinding> {
    let known: HashSet<&str> = characters.iter().map(|c| c.as_ref()).collect();
    let lines: Vec<(usize, &str)> = story
        .as_str()
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return vec![LintFinding::Empty];
    }

    let mut findings = Vec::new();
    let classified: Vec<(usize, &str, Line<'_>)> = lines
        .iter()
        .map(|(n, text)| (*n, *text, classify(text)))
        .collect();

    if !matches!(classified.first(), Some((_, _, Line::Title))) {
        findings.push(LintFinding::MissingOpeningTitle);
    }
    if !matches!(classified.last(), Some((_, _, Line::Title))) {
        findings.push(LintFinding::MissingClosingTitle);
    }
    if !(MIN_LINES..=MAX_LINES).contains(&lines.len()) {
        findings.push(LintFinding::LineCount(lines.len()));
    }

    let mut speakers = HashSet::new();
    let mut movers = HashSet::new();
    let mut moved = false;
    let mut paused = false;

    for (line, text, kind) in &classified {
        let line = *line;
        match kind {
            Line::Title => {}
            Line::Pause(seconds) => {
                paused = true;
                if *seconds > MAX_PAUSE_SECS {
                    findings.push(LintFinding::PauseTooLong {
                        line,
                        seconds: *seconds,
                    });
                }
            }
            Line::Movement { from, to } => {
                moved = true;
                for name in [*from, *to] {
                    if !known.contains(name) {
                        findings.push(LintFinding::UnknownCharacter {
                            line,
                            name: name.to_string(),
                        });
                    }
                }
                if !movers.insert(*from) {
                    findings.push(LintFinding::MovedTwice {
                        line,
                        name: from.to_string(),
                    });
                }
            }
            Line::Dialogue { speaker } => {
                if known.contains(speaker) {
                    speakers.insert(*speaker);
                } else {
                    findings.push(LintFinding::UnknownCharacter {
                        line,
                        name: speaker.to_string(),
                    });
                }
            }
            Line::Other => findings.push(LintFinding::Unrecognized {
                line,
                text: text.to_string(),
            }),
        }
    }

    for name in characters.iter().map(|c| c.as_ref()) {
        if !speakers.contains(name) {
            findings.push(LintFinding::Silent(name.to_string()));
        }
    }
    if !moved {
        findings.push(LintFinding::NoMovement);
    }
    if !paused {
        findings.push(LintFinding::NoPause);
    }

    debug!(findings = findings.len(), "Linted story");
    findings
}
