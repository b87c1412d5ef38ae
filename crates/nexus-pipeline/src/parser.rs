//! Recover structured output from loosely formatted model text
//!
//! Extraction happens in two layers. A [`JsonExtractor`] turns raw provider
//! text into a `serde_json::Value`; the `decode_*` functions then check that
//! the value has exactly the shape the caller asked for. Failure at either
//! layer rejects the provider's output as a whole.

use crate::error::ExtractError;
use nexus_domain::{CarouselSlide, PostVariation, POST_VARIATION_COUNT};
use serde_json::{Map, Value};
use tracing::debug;

/// Recovers a JSON value from raw provider output
///
/// Implementations are pure text transformations with no I/O.
pub trait JsonExtractor: Send + Sync {
    /// Extract a JSON value from `raw`
    fn extract(&self, raw: &str) -> Result<Value, ExtractError>;
}

/// Default extractor: strip fences, slice to the outermost brackets, parse,
/// and on failure reparse after escaping control characters inside strings.
///
/// Slicing from the first `[` to the last `]` assumes a single top-level
/// array and no stray brackets in the surrounding prose.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketSliceExtractor;

impl JsonExtractor for BracketSliceExtractor {
    fn extract(&self, raw: &str) -> Result<Value, ExtractError> {
        extract_json(raw)
    }
}

/// Extract a JSON value from raw model output
pub fn extract_json(raw: &str) -> Result<Value, ExtractError> {
    let unfenced = strip_code_fences(raw);
    let candidate = slice_to_array(unfenced.trim());
    if candidate.is_empty() {
        return Err(ExtractError::NoJson);
    }

    match serde_json::from_str(candidate) {
        Ok(value) => Ok(value),
        Err(first) => {
            debug!("Strict parse failed ({}), retrying with sanitized strings", first);
            let sanitized = sanitize_json_strings(candidate);
            serde_json::from_str(&sanitized).map_err(|e| {
                ExtractError::Parse(format!("{} (after sanitizing: {})", first, e))
            })
        }
    }
}

/// Remove markdown code-fence markers anywhere in the text
///
/// An opening fence's language tag (```` ```json ````) is removed with it
/// when the tag runs to the end of its line.
fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];

        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        let after_tag = &rest[tag_len..];
        if tag_len > 0 && (after_tag.is_empty() || after_tag.starts_with(['\n', '\r'])) {
            rest = after_tag;
        }
    }

    out.push_str(rest);
    out
}

/// Slice from the first `[` to the last `]`, or return the text unchanged
fn slice_to_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Escape characters that are illegal inside JSON string literals
///
/// Raw newlines, carriage returns and tabs become `\n`, `\r` and `\t`; other
/// control characters become `\u00XX`; a backslash that does not start a valid
/// escape is doubled. Text outside string literals is left untouched.
fn sanitize_json_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut in_string = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = false;
                out.push(c);
            }
            '\\' => match chars.peek().copied() {
                Some(next) if matches!(next, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                Some('u') if is_unicode_escape(chars.clone()) => out.push('\\'),
                _ => out.push_str("\\\\"),
            },
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }

    out
}

/// True when `chars` starts with `u` followed by four hex digits
fn is_unicode_escape<I: Iterator<Item = char>>(mut chars: I) -> bool {
    chars.next() == Some('u') && chars.take(4).filter(char::is_ascii_hexdigit).count() == 4
}

/// Decode exactly [`POST_VARIATION_COUNT`] post variations
pub fn decode_posts(value: Value) -> Result<Vec<PostVariation>, ExtractError> {
    let entries = decode_entries(value, POST_VARIATION_COUNT)?;
    Ok(entries
        .into_iter()
        .zip(1u32..)
        .map(|((title, content), id)| PostVariation { id, title, content })
        .collect())
}

/// Decode exactly `expected` carousel slides
pub fn decode_slides(value: Value, expected: usize) -> Result<Vec<CarouselSlide>, ExtractError> {
    let entries = decode_entries(value, expected)?;
    Ok(entries
        .into_iter()
        .zip(1u32..)
        .map(|((title, content), id)| CarouselSlide { id, title, content })
        .collect())
}

/// Check the array length and pull `(title, content)` out of every element
///
/// Ids are reassigned by position, so whatever ids the model produced are
/// ignored.
fn decode_entries(value: Value, expected: usize) -> Result<Vec<(String, String)>, ExtractError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ExtractError::Shape(format!(
                "Expected JSON array, got {}",
                value_kind(&other)
            )))
        }
    };

    if items.len() != expected {
        return Err(ExtractError::Shape(format!(
            "Expected {} items, got {}",
            expected,
            items.len()
        )));
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let obj = item
                .as_object()
                .ok_or_else(|| ExtractError::Shape(format!("Item {} is not an object", idx + 1)))?;
            Ok((
                text_field(obj, "title", idx)?,
                text_field(obj, "content", idx)?,
            ))
        })
        .collect()
}

fn text_field(obj: &Map<String, Value>, field: &str, idx: usize) -> Result<String, ExtractError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ExtractError::Shape(format!("Item {} has missing or empty '{}'", idx + 1, field))
        })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
