//! Keyword suggestions for the listing description and posts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ports::{CompletionRequest, TextGenerator};
use crate::upstream::complete_json;

/// Maximum description length the business profile accepts.
pub const MAX_DESCRIPTION_CHARS: usize = 750;
const MAX_TOKENS: u32 = 1000;

const SYSTEM_PROMPT: &str = "You are a local SEO expert specializing in Google Business Profile optimization for Indian businesses. Generate keyword suggestions in JSON format.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordSuggestions {
    pub primary_keywords: Vec<String>,
    pub long_tail_keywords: Vec<String>,
    pub local_keywords: Vec<String>,
    pub description_suggestion: String,
    pub post_keywords: Vec<String>,
}

/// What the advisor knows about the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordInput<'a> {
    pub business_name: &'a str,
    pub category: &'a str,
    pub description: Option<&'a str>,
    pub address: &'a str,
}

/// City and area pulled out of a comma-separated address.
///
/// City is the second-to-last segment (the last is usually the country),
/// area the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality<'a> {
    pub city: &'a str,
    pub area: Option<&'a str>,
}

impl<'a> Locality<'a> {
    #[must_use]
    pub fn from_address(address: &'a str) -> Self {
        let parts: Vec<&str> = address.split(',').map(str::trim).collect();
        let n = parts.len();
        let city = if n >= 2 {
            parts[n - 2]
        } else {
            parts.first().copied().filter(|p| !p.is_empty()).unwrap_or("your city")
        };
        let area = if n >= 3 {
            Some(parts[n - 3]).filter(|a| !a.is_empty())
        } else {
            None
        };
        Self { city, area }
    }
}

/// Suggest keywords through the generator, or from templates when it is
/// absent or fails.
pub async fn suggest_keywords(
    generator: Option<&dyn TextGenerator>,
    input: &KeywordInput<'_>,
    deadline: Duration,
) -> KeywordSuggestions {
    let Some(generator) = generator else {
        return fallback_keywords(input);
    };

    match complete_json::<KeywordSuggestions>(generator, &prompt(input), deadline).await {
        Ok(mut suggestions) => {
            suggestions.description_suggestion =
                truncate_chars(&suggestions.description_suggestion, MAX_DESCRIPTION_CHARS);
            suggestions
        }
        Err(e) => {
            tracing::warn!(error = %e, "keyword generation failed, using templates");
            fallback_keywords(input)
        }
    }
}

fn prompt(input: &KeywordInput<'_>) -> CompletionRequest {
    let user = format!(
        r#"Generate keyword optimization suggestions for this business:
- Business Name: {name}
- Category: {category}
- Location: {address}
- Current Description: {description}

Return a JSON object with these fields:
{{
  "primaryKeywords": ["5-7 main keywords for this business type"],
  "longTailKeywords": ["5-7 long-tail search phrases customers would use"],
  "localKeywords": ["5-7 location-specific keywords"],
  "descriptionSuggestion": "A 750-character optimized description for GBP",
  "postKeywords": ["5-7 keywords to use in GBP posts"]
}}

Focus on high-intent, local search terms that real customers would use. Include both English and Hindi transliterated terms if applicable."#,
        name = input.business_name,
        category = input.category,
        address = input.address,
        description = input.description.unwrap_or("No description set"),
    );

    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        user,
        expect_json: true,
        max_tokens: MAX_TOKENS,
    }
}

/// Template suggestions. Pure: identical input gives identical output.
#[must_use]
pub fn fallback_keywords(input: &KeywordInput<'_>) -> KeywordSuggestions {
    let Locality { city, area } = Locality::from_address(input.address);
    let cat = input.category.to_lowercase().replace('_', " ");
    let name = input.business_name;

    KeywordSuggestions {
        primary_keywords: vec![
            format!("best {cat}"),
            format!("{cat} near me"),
            format!("top {cat}"),
            format!("{cat} in {city}"),
            name.to_lowercase(),
        ],
        long_tail_keywords: vec![
            format!("best {cat} in {city}"),
            format!("affordable {cat} near me"),
            format!("{cat} with good reviews"),
            format!("{cat} open now"),
            format!("top rated {cat} in {}", area.unwrap_or(city)),
        ],
        local_keywords: vec![
            format!("{cat} in {city}"),
            area.map_or_else(|| format!("{cat} nearby"), |a| format!("{cat} in {a}")),
            format!("{cat} {city}"),
            format!("near me {cat}"),
            format!("local {cat}"),
        ],
        description_suggestion: truncate_chars(
            &format!(
                "{name} is a leading {cat} located in {address}. We offer quality services with a focus on customer satisfaction. Visit us today or call to learn more about our offerings.",
                address = input.address,
            ),
            MAX_DESCRIPTION_CHARS,
        ),
        post_keywords: vec![
            hashtag("", &cat),
            hashtag("", city),
            hashtag("best", &cat),
            hashtag("local", &cat),
            area.map_or_else(|| "#localbusiness".to_string(), |a| hashtag("", a)),
        ],
    }
}

fn hashtag(prefix: &str, words: &str) -> String {
    let compact: String = words.chars().filter(|c| !c.is_whitespace()).collect();
    format!("#{prefix}{compact}")
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpstreamError;
    use async_trait::async_trait;

    struct Scripted(Result<&'static str, ()>);

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
            assert!(request.expect_json);
            self.0
                .map(ToString::to_string)
                .map_err(|()| UpstreamError::Unavailable("503".to_string()))
        }
    }

    fn input() -> KeywordInput<'static> {
        KeywordInput {
            business_name: "Sharma's Kitchen",
            category: "indian_restaurant",
            description: None,
            address: "12 MG Road, Indiranagar, Bengaluru, India",
        }
    }

    #[test]
    fn locality_from_address_segments() {
        let l = Locality::from_address("12 MG Road, Indiranagar, Bengaluru, India");
        assert_eq!(l.city, "Bengaluru");
        assert_eq!(l.area, Some("Indiranagar"));

        let l = Locality::from_address("Springfield, USA");
        assert_eq!(l.city, "Springfield");
        assert_eq!(l.area, None);

        assert_eq!(Locality::from_address("Springfield").city, "Springfield");
        assert_eq!(Locality::from_address("").city, "your city");
    }

    #[test]
    fn fallback_interpolates_category_city_and_area() {
        let k = fallback_keywords(&input());
        assert_eq!(k.primary_keywords[0], "best indian restaurant");
        assert_eq!(k.primary_keywords[3], "indian restaurant in Bengaluru");
        assert_eq!(k.primary_keywords[4], "sharma's kitchen");
        assert_eq!(k.long_tail_keywords[4], "top rated indian restaurant in Indiranagar");
        assert_eq!(k.local_keywords[1], "indian restaurant in Indiranagar");
        assert_eq!(
            k.post_keywords,
            vec![
                "#indianrestaurant",
                "#Bengaluru",
                "#bestindianrestaurant",
                "#localindianrestaurant",
                "#Indiranagar"
            ]
        );
        assert!(k.description_suggestion.starts_with(
            "Sharma's Kitchen is a leading indian restaurant located in 12 MG Road"
        ));
    }

    #[test]
    fn fallback_without_area_uses_generic_entries() {
        let k = fallback_keywords(&KeywordInput {
            address: "Springfield, USA",
            ..input()
        });
        assert_eq!(k.local_keywords[1], "indian restaurant nearby");
        assert_eq!(k.post_keywords[4], "#localbusiness");
        assert_eq!(k.long_tail_keywords[4], "top rated indian restaurant in Springfield");
    }

    #[test]
    fn fallback_is_deterministic_and_bounded() {
        let long_address = "x".repeat(2000);
        let input = KeywordInput {
            address: &long_address,
            ..input()
        };
        let a = fallback_keywords(&input);
        assert_eq!(a, fallback_keywords(&input));
        assert_eq!(a.description_suggestion.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[tokio::test]
    async fn generated_json_passes_through_with_missing_fields_defaulted() {
        let generator = Scripted(Ok(r#"{"primaryKeywords":["biryani bengaluru"],"descriptionSuggestion":"Best biryani."}"#));
        let k = suggest_keywords(Some(&generator), &input(), Duration::from_secs(1)).await;
        assert_eq!(k.primary_keywords, vec!["biryani bengaluru"]);
        assert_eq!(k.description_suggestion, "Best biryani.");
        assert!(k.long_tail_keywords.is_empty());
        assert!(k.post_keywords.is_empty());
    }

    #[tokio::test]
    async fn generated_description_is_truncated() {
        let body: &'static str = Box::leak(
            format!(r#"{{"descriptionSuggestion":"{}"}}"#, "é".repeat(900)).into_boxed_str(),
        );
        let k = suggest_keywords(Some(&Scripted(Ok(body))), &input(), Duration::from_secs(1)).await;
        assert_eq!(k.description_suggestion.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[tokio::test]
    async fn invalid_json_or_failure_falls_back() {
        let expected = fallback_keywords(&input());
        for generator in [
            Scripted(Ok("not json")),
            Scripted(Ok(r#"{"primaryKeywords":"oops"}"#)),
            Scripted(Err(())),
        ] {
            let k = suggest_keywords(Some(&generator), &input(), Duration::from_secs(1)).await;
            assert_eq!(k, expected);
        }
        assert_eq!(
            suggest_keywords(None, &input(), Duration::from_secs(1)).await,
            expected
        );
    }
}
