//! Wire types for the public trivia API the board is filled from.
//!
//! The API returns more fields than listed here; anything not named is ignored while decoding.

use serde::{Deserialize, Serialize};

/// Identifier the API uses for a category.
pub type CategoryId = u64;

/// One entry of `GET /categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    pub clues_count: u32,
}

/// Body of `GET /category`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ApiClue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClue {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub const DEFAULT_API_BASE: &str = "https://jservice.io/api";

pub fn categories_path(count: u16) -> String {
    format!("/categories?count={}", count)
}

pub fn category_path(id: CategoryId) -> String {
    format!("/category?id={}", id)
}

pub fn decode_categories(body: &str) -> serde_json::Result<Vec<CategorySummary>> {
    serde_json::from_str(body)
}

pub fn decode_category(body: &str) -> serde_json::Result<CategoryDetail> {
    serde_json::from_str(body)
}

/// Turns an API string into plain display text.
///
/// Clue text comes with inline markup (`<i>Hamlet</i>`), HTML entities and backslash-escaped quotes, and category
/// titles are sometimes padded. The string is parsed as an HTML fragment and only its text kept, escapes are
/// resolved and runs of whitespace collapsed to a single space.
pub fn clean_text(raw: &str) -> String {
    let fragment = scraper::Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();
    unescape(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.extend(chars.next()),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES_BODY: &str = r#"[
        {"id": 11531, "title": "mixed bag", "clues_count": 5},
        {"id": 11532, "title": "let's \"ch\"at", "clues_count": 3},
        {"id": 5412, "title": "prehistoric times", "clues_count": 10}
    ]"#;

    const CATEGORY_BODY: &str = r#"{
        "id": 11531,
        "title": "mixed bag",
        "clues_count": 2,
        "clues": [
            {
                "id": 87470, "answer": "<i>Hamlet</i>", "question": "Shakespeare's Danish prince",
                "value": 200, "airdate": "1996-09-03T12:00:00.000Z", "category_id": 11531,
                "game_id": 5209, "invalid_count": null
            },
            {"id": 87471, "answer": "Plath", "question": null, "value": null}
        ]
    }"#;

    #[test]
    fn decodes_category_pool_and_ignores_extra_fields() {
        let pool = decode_categories(CATEGORIES_BODY).unwrap();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].id, 11531);
        assert_eq!(pool[1].clues_count, 3);
        assert_eq!(pool[2].title, "prehistoric times");
    }

    #[test]
    fn decodes_category_detail_with_null_fields() {
        let detail = decode_category(CATEGORY_BODY).unwrap();

        assert_eq!(detail.title, "mixed bag");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].answer, "<i>Hamlet</i>");
        assert_eq!(detail.clues[1].question, "");
    }

    #[test]
    fn missing_clue_list_decodes_as_empty() {
        let detail = decode_category(r#"{"id": 3, "title": "empty"}"#).unwrap();

        assert!(detail.clues.is_empty());
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(decode_categories(r#"{"error": "rate limited"}"#).is_err());
    }

    #[test]
    fn paths_carry_query_parameters() {
        assert_eq!(categories_path(100), "/categories?count=100");
        assert_eq!(category_path(11531), "/category?id=11531");
    }

    #[test]
    fn clean_text_strips_markup_and_escapes() {
        assert_eq!(clean_text("<i>Hamlet</i>"), "Hamlet");
        assert_eq!(clean_text(r#"the \"Bard\""#), r#"the "Bard""#);
        assert_eq!(clean_text(r"it\'s"), "it's");
        assert_eq!(clean_text("  two   words \n"), "two words");
        assert_eq!(clean_text(r"back\\slash"), r"back\slash");
    }

    #[test]
    fn clean_text_keeps_bare_angle_brackets() {
        assert_eq!(clean_text("Is 2 < 3 true?"), "Is 2 < 3 true?");
        assert_eq!(clean_text("x < y and y > z means"), "x < y and y > z means");
    }

    #[test]
    fn clean_text_decodes_entities() {
        assert_eq!(clean_text("Simon &amp; Garfunkel"), "Simon & Garfunkel");
        assert_eq!(clean_text("<i>Rock &amp; Roll</i> Hall"), "Rock & Roll Hall");
    }
}
