//! Heuristic extraction of course records from transcript text.
//!
//! The text layer of a transcript PDF is wildly inconsistent: course codes,
//! credit units, and grades appear in no fixed order, interleaved with page
//! furniture and ambiguous numeric tokens (a bare `3` could be a credit
//! unit, a grade point, or a page number). Extraction is therefore a ranked
//! rule list, not a grammar: for each course-code match we carve a bounded
//! context window and try an ordered cascade of patterns per field, where
//! the first candidate that passes range validation and adjacency guards
//! wins and everything else degrades to a flagged default.
//!
//! The whole pipeline is a deterministic pure function of
//! `(text, scale, options)`. There is no error path; malformed or
//! adversarial input yields fewer (or zero) records, never a failure.

use std::collections::HashSet;

use regex::Regex;

use crate::course::{DEFAULT_CREDIT_UNITS, ExtractedCourse, GradingScale};
use crate::grade::letter_to_points;
use crate::normalize::normalize;

/// Course-code shape: 2-4 letters, optional separator, 3-4 digits with an
/// optional trailing letter. Matches `COMP202`, `ABC-1234X`, `MAT 101`.
const COURSE_CODE: &str = r"\b([A-Z]{2,4})\s?-?\s?(\d{3,4}[A-Z]?)\b";

/// Course-status tokens (`in progress`, `withdrawn`, `audit`, ...) that are
/// easily mistaken for letter grades.
const STATUS_TOKENS: &str = r"\b(?:IP|W|I|AU|TR|CR|NC)\b";

/// Tuning knobs for one extraction run.
///
/// The window sizes and unit bounds are heuristic constants calibrated
/// against real transcript samples, not hard invariants; they only need to
/// stay consistent within a single run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Context window bytes kept before each course-code match (default: 150).
    pub context_before: usize,
    /// Context window bytes kept after each course-code match (default: 250).
    /// Larger than `context_before` because unit and grade labels
    /// conventionally trail the course code.
    pub context_after: usize,
    /// Largest credit-unit value accepted by any cascade tier (default: 12).
    pub max_credit_units: u32,
    /// Largest value accepted by the weakest standalone-digit fallback tier
    /// (default: 6).
    pub max_fallback_units: u32,
    /// Skip grade recovery entirely; every record gets grade `0.0` with
    /// `grade_found = false` (default: false).
    pub ignore_grades: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            context_before: 150,
            context_after: 250,
            max_credit_units: 12,
            max_fallback_units: 6,
            ignore_grades: false,
        }
    }
}

/// One tier of the credit-unit cascade.
///
/// `reject_after` stands in for a negative lookahead (the `regex` crate
/// has no lookaround): a candidate is rejected when the text immediately
/// following its capture matches the guard. Anchored tiers search only the
/// window tail after the course code;
/// unanchored tiers search the whole window.
struct UnitTier {
    pattern: &'static str,
    reject_after: Option<&'static str>,
    anchored: bool,
    fallback: bool,
}

/// Rejects ordinals (`1ST`, `2 ND`) and digits running on into a larger
/// number.
const ORDINAL_OR_DIGIT: &str = r"^\s*(?:ST|ND|RD|TH|\d)";
/// Fallback-tier guard: additionally rejects percentages, decimals, and
/// comma-grouped numbers.
const ORDINAL_PERCENT_DECIMAL: &str = r"^\s*(?:ST|ND|RD|TH|\d|%|\.|,\d)";

/// Credit-unit cascade, strongest evidence first. A candidate outside the
/// valid range falls through to the next tier rather than aborting.
const UNIT_TIERS: &[UnitTier] = &[
    // Number immediately followed by a unit keyword, after the code.
    UnitTier {
        pattern: r"(\d{1,2})\s*(?:UNITS?|CREDITS?|CU|CR|HOURS?)\b",
        reject_after: None,
        anchored: true,
        fallback: false,
    },
    // Unit keyword, then = or :, then number.
    UnitTier {
        pattern: r"(?:UNITS?|CREDITS?|CU|CR|HOURS?)\s*(?:=|:)?\s*(\d{1,2})\b",
        reject_after: None,
        anchored: true,
        fallback: false,
    },
    // Explicit "course unit" / "credit hour" labelled phrase.
    UnitTier {
        pattern: r"(?:COURSE\s+UNIT|CREDIT\s+UNIT|CREDIT\s+HOUR)S?\s*(?:=|:)?\s*(\d{1,2})\b",
        reject_after: None,
        anchored: true,
        fallback: false,
    },
    // Parenthesized bare number, optionally with a unit keyword.
    UnitTier {
        pattern: r"\(\s*(\d{1,2})\s*(?:UNITS?|CREDITS?|CU|CR|HOURS?)?\s*\)",
        reject_after: None,
        anchored: false,
        fallback: false,
    },
    // Lone single digit directly after the code, not part of an ordinal or
    // a larger number.
    UnitTier {
        pattern: r"\b(\d)\b",
        reject_after: Some(ORDINAL_OR_DIGIT),
        anchored: true,
        fallback: false,
    },
    // Single digit fused with CR/CU.
    UnitTier {
        pattern: r"\b(\d)\s*(?:CR|CU)\b",
        reject_after: None,
        anchored: true,
        fallback: false,
    },
    // General unanchored forms, anywhere in the window.
    UnitTier {
        pattern: r"\b(\d{1,2})\s*(?:UNITS?|CREDITS?|CU|CR|HOURS?)\b",
        reject_after: None,
        anchored: false,
        fallback: false,
    },
    UnitTier {
        pattern: r"\b(?:UNITS?|CREDITS?|CU|CR|HOURS?)\s*(?:=|:)?\s*(\d{1,2})\b",
        reject_after: None,
        anchored: false,
        fallback: false,
    },
    // Weakest fallback: a standalone small digit after the code.
    UnitTier {
        pattern: r"\s\b([1-6])\b",
        reject_after: Some(ORDINAL_PERCENT_DECIMAL),
        anchored: true,
        fallback: true,
    },
];

/// One tier of the grade cascade.
struct GradeTier {
    pattern: &'static str,
    anchored: bool,
}

/// Grade cascade. The anchored tiers run first; the unanchored variants
/// repeat them across the whole window, ending with the bare standalone
/// letter grade, which is the most false-positive-prone and deliberately
/// last.
const GRADE_TIERS: &[GradeTier] = &[
    GradeTier {
        pattern: r"(?:GRADE|COURSE\s+GRADE|GRADE\s+VALUE|MARK|SCORE)\s*(?:=|:)?\s*([A-F][+-]?)\b",
        anchored: true,
    },
    GradeTier {
        pattern: r"(?:GRADE\s+POINT|GP|GPA)\s*(?:=|:)?\s*(\d\.?\d*)\b",
        anchored: true,
    },
    GradeTier {
        pattern: r"\b([A-F][+-]?)\b",
        anchored: true,
    },
    // Numeric score fused with a letter grade, transcript style "75A".
    GradeTier {
        pattern: r"\b\d+\s*([A-F][+-]?)\b",
        anchored: true,
    },
    GradeTier {
        pattern: r"(?:GRADE|COURSE\s+GRADE|GRADE\s+VALUE|MARK|SCORE)\s*(?:=|:)?\s*([A-F][+-]?)\b",
        anchored: false,
    },
    GradeTier {
        pattern: r"(?:GRADE\s+POINT|GP|GPA)\s*(?:=|:)?\s*(\d\.?\d*)\b",
        anchored: false,
    },
    GradeTier {
        pattern: r"\b\d+\s*([A-F][+-]?)\b",
        anchored: false,
    },
    GradeTier {
        pattern: r"\b([A-F][+-]?)\b",
        anchored: false,
    },
];

/// Extract course records from raw transcript text.
///
/// Normalizes the text, scans left-to-right for course-code matches,
/// deduplicates on the canonical code (first occurrence wins), and for each
/// accepted match recovers credit units and grade from a bounded context
/// window around it. Output order follows first-occurrence order.
///
/// An empty result means no recognizable course codes were found; that is a
/// valid terminal outcome, not an error.
pub fn extract_courses(
    text: &str,
    scale: GradingScale,
    options: &ExtractOptions,
) -> Vec<ExtractedCourse> {
    let normalized = normalize(text);
    let Ok(code_re) = Regex::new(COURSE_CODE) else {
        return Vec::new();
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut courses = Vec::new();

    for caps in code_re.captures_iter(&normalized) {
        let (Some(m), Some(letters), Some(digits)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let code = format!("{} {}", letters.as_str(), digits.as_str());
        if !seen.insert(code.clone()) {
            continue;
        }

        // Window bounds are byte offsets; normalize() guarantees pure ASCII,
        // so every offset is a char boundary.
        let start = m.start().saturating_sub(options.context_before);
        let end = (m.end() + options.context_after).min(normalized.len());
        let window = &normalized[start..end];
        let tail = &normalized[m.end()..end];

        let (credit_units, credit_unit_found) = recover_credit_units(window, tail, options);
        let (grade_point, grade_found) = recover_grade(window, tail, scale, options);

        courses.push(ExtractedCourse {
            name: code,
            credit_units,
            grade_point,
            credit_unit_found,
            grade_found,
        });
    }

    courses
}

/// Run the credit-unit cascade over one context window.
///
/// Returns `(DEFAULT_CREDIT_UNITS, false)` when no tier produced an
/// in-range value; the default is a placeholder, never authoritative.
fn recover_credit_units(window: &str, tail: &str, options: &ExtractOptions) -> (u32, bool) {
    for tier in UNIT_TIERS {
        let haystack = if tier.anchored { tail } else { window };
        let Ok(re) = Regex::new(tier.pattern) else {
            continue;
        };
        let max = if tier.fallback {
            options.max_fallback_units
        } else {
            options.max_credit_units
        };
        for caps in re.captures_iter(haystack) {
            let Some(group) = caps.get(1) else { continue };
            if let Some(guard) = tier.reject_after {
                if suffix_matches(haystack, group.end(), guard) {
                    continue;
                }
            }
            let Ok(units) = group.as_str().parse::<u32>() else {
                continue;
            };
            if (1..=max).contains(&units) {
                return (units, true);
            }
        }
    }
    (DEFAULT_CREDIT_UNITS, false)
}

/// Run the grade cascade over one context window.
///
/// Short-circuits to `(0.0, false)` when grade recovery is suppressed, or
/// when the window contains a course-status token (which would otherwise be
/// mistaken for a letter grade).
fn recover_grade(
    window: &str,
    tail: &str,
    scale: GradingScale,
    options: &ExtractOptions,
) -> (f64, bool) {
    if options.ignore_grades {
        return (0.0, false);
    }
    if let Ok(re) = Regex::new(STATUS_TOKENS) {
        if re.is_match(window) {
            return (0.0, false);
        }
    }

    for tier in GRADE_TIERS {
        let haystack = if tier.anchored { tail } else { window };
        let Ok(re) = Regex::new(tier.pattern) else {
            continue;
        };
        for caps in re.captures_iter(haystack) {
            let Some(group) = caps.get(1) else { continue };
            if let Some(points) = resolve_grade_token(group.as_str(), scale) {
                return (points, true);
            }
        }
    }
    (0.0, false)
}

/// Resolve one matched grade token to a point value.
///
/// Numeric tokens are taken directly as grade points and accepted only
/// within `[0, max_points]`; out-of-range values fall through to the next
/// candidate. Letter tokens always resolve via the conversion table.
fn resolve_grade_token(token: &str, scale: GradingScale) -> Option<f64> {
    if is_numeric_token(token) {
        let value: f64 = token.parse().ok()?;
        if (0.0..=scale.max_points()).contains(&value) {
            Some(value)
        } else {
            None
        }
    } else {
        Some(letter_to_points(token, scale))
    }
}

/// Whether a token is a numeric grade point (`4`, `3.5`, `4.`).
fn is_numeric_token(token: &str) -> bool {
    !token.is_empty()
        && token.starts_with(|c: char| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().filter(|&c| c == '.').count() <= 1
}

/// Whether the text following byte offset `from` matches an anchored guard
/// pattern.
fn suffix_matches(haystack: &str, from: usize, guard: &str) -> bool {
    let Ok(re) = Regex::new(guard) else {
        return false;
    };
    re.is_match(&haystack[from..])
}
