// File: ./src/model/parser.rs
// Handles free-text list parsing. Generated recipe text arrives in whatever
// shape the model felt like that day: numbered lines, dashes, bullets, one
// long comma run, or soft-wrapped prose. Everything here is total; bad input
// degrades to fewer (or zero) items, never to an error.
use crate::model::item::Recipe;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Line starts a new list item: "1." / "2" / "-" / "*" / "•"
    static ref LIST_MARKER: Regex =
        Regex::new(r"^\s*(\d+\.?|-|\*|•)\s*").expect("list marker pattern should be valid");
    // Shopping lines additionally allow "3)" and keep trailing spacing rules
    static ref SHOPPING_MARKER: Regex =
        Regex::new(r"^\s*(\d+\.?\s*|\d+\)\s*|-\s*|\*\s*|•\s*)")
            .expect("shopping marker pattern should be valid");
    static ref HEADER_LINE: Regex = Regex::new(r"(?i)^(ingredients?:?|recipe:?|shopping\s*list:?)$")
        .expect("header pattern should be valid");
    static ref INGREDIENTS_PREFIX: Regex =
        Regex::new(r"(?i)^\s*ingredients?:?\s*").expect("prefix pattern should be valid");
    // Inline enumerations like "1. eggs 2. milk 3. flour" on a single line
    static ref INLINE_NUMBERED: Regex =
        Regex::new(r"\d+\.\s*[^0-9]+").expect("inline numbered pattern should be valid");
}

/// Splits a free-text block into ordered items.
///
/// Line markers win; a line without one continues the previous item
/// (soft-wrapped text). If markers produce at most one item, the whole text
/// is re-split on `;` (preferred) or `,`. As a last resort the trimmed text
/// itself is the single item.
pub fn parse_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut result: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if LIST_MARKER.is_match(trimmed) {
            if !current.is_empty() {
                result.push(current.trim().to_string());
            }
            current = LIST_MARKER.replace(trimmed, "").to_string();
        } else if !trimmed.is_empty() {
            current.push(' ');
            current.push_str(trimmed);
        }
    }
    if !current.is_empty() {
        result.push(current.trim().to_string());
    }

    if result.len() > 1 {
        return result.into_iter().filter(|i| !i.trim().is_empty()).collect();
    }

    // No usable markers. Prefer semicolons over commas so "a; b, c" keeps
    // "b, c" together.
    let separator = if text.contains(';') { ';' } else { ',' };
    if text.contains(separator) {
        let parts: Vec<String> = text
            .split(separator)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts;
        }
    }

    vec![text.trim().to_string()]
}

/// Raw line split for shopping-list construction. Distinct from
/// [`parse_list`]: historical saved lists depend on its two-character
/// separators and inline-enumeration handling, so the heuristics are kept
/// as-is. Returned lines still carry markers; see [`clean_shopping_line`].
pub fn split_ingredient_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect();

    if lines.len() == 1 {
        let single = lines[0].clone();
        for sep in [", ", "; ", " • ", " - "] {
            if single.contains(sep) {
                return single.split(sep).map(|s| s.to_string()).collect();
            }
        }
        if INLINE_NUMBERED.is_match(&single) {
            lines = INLINE_NUMBERED
                .find_iter(&single)
                .map(|m| m.as_str().to_string())
                .collect();
        }
    }

    lines
}

/// Normalizes one raw shopping line. `None` means the line is noise: blank,
/// a bare header ("Ingredients:", "Shopping list"), or too short to be an
/// item once markers are gone.
pub fn clean_shopping_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || HEADER_LINE.is_match(trimmed) {
        return None;
    }

    let cleaned = SHOPPING_MARKER.replace(trimmed, "");
    let cleaned = INGREDIENTS_PREFIX.replace(&cleaned, "");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() <= 1 {
        return None;
    }
    Some(cleaned.to_string())
}

impl Recipe {
    /// Ingredients as discrete items, source order preserved.
    pub fn ingredient_items(&self) -> Vec<String> {
        parse_list(&self.ingredients)
    }

    /// Instructions as discrete steps, source order preserved.
    pub fn instruction_steps(&self) -> Vec<String> {
        parse_list(&self.instructions)
    }
}
