//! Transcript text normalization.
//!
//! Transcripts vary in casing and carry decorative punctuation and line
//! breaks that would otherwise fragment pattern matches. Normalization
//! reduces a raw text-layer dump to a single uppercase ASCII line that the
//! pattern cascades can scan with plain byte offsets.

use unicode_normalization::UnicodeNormalization;

/// Punctuation that survives normalization; everything else non-alphanumeric
/// is stripped.
const KEPT_PUNCTUATION: &[char] = &['.', ',', '(', ')', ':', ';', '-'];

/// Normalize raw extracted text for pattern scanning.
///
/// Applies, in order:
/// 1. NFKC compatibility normalization, so full-width digits and letters
///    from CJK-locale text layers fold to their ASCII forms.
/// 2. Strip every character that is not ASCII alphanumeric, whitespace, or
///    one of `. , ( ) : ; -`.
/// 3. Collapse whitespace runs into a single space and trim.
/// 4. Uppercase.
///
/// Stripping happens before whitespace collapsing so that removing a
/// character can never leave a fresh double space behind; the function is
/// idempotent. The output is pure ASCII, so byte offsets into it are
/// always character boundaries.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfkc()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(c))
        .collect();

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
