//! Predicted review sentiment.
//!
//! The places API does not return review text, so the analysis is a
//! prediction from rating, review volume and business type.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ports::{CompletionRequest, TextGenerator};
use crate::upstream::complete_json;

const MAX_TOKENS: u32 = 1200;

const SYSTEM_PROMPT: &str = "You are a review analysis expert for local businesses in India. Based on business metadata, predict likely review themes and generate actionable insights. Return JSON format.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Mixed,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            Self::Positive
        } else if rating >= 3.0 {
            Self::Mixed
        } else {
            Self::Negative
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Mixed => "mixed",
            Self::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedResponse {
    pub theme: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub overall_sentiment: Sentiment,
    /// 0-100.
    pub sentiment_score: u8,
    pub positive_themes: Vec<String>,
    pub negative_themes: Vec<String>,
    pub common_praises: Vec<String>,
    pub common_complaints: Vec<String>,
    pub suggested_responses: Vec<SuggestedResponse>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentInput<'a> {
    pub business_name: &'a str,
    pub category: &'a str,
    pub rating: f64,
    pub review_count: u32,
    pub address: &'a str,
}

/// Generator reply; anything missing is filled from the rating.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SentimentPayload {
    overall_sentiment: Option<Sentiment>,
    sentiment_score: Option<f64>,
    positive_themes: Vec<String>,
    negative_themes: Vec<String>,
    common_praises: Vec<String>,
    common_complaints: Vec<String>,
    suggested_responses: Vec<SuggestedResponse>,
    summary: String,
}

pub async fn analyze_review_sentiment(
    generator: Option<&dyn TextGenerator>,
    input: &SentimentInput<'_>,
    deadline: Duration,
) -> SentimentAnalysis {
    let Some(generator) = generator else {
        return fallback_sentiment(input.rating, input.review_count);
    };

    match complete_json::<SentimentPayload>(generator, &prompt(input), deadline).await {
        Ok(payload) => SentimentAnalysis {
            overall_sentiment: payload
                .overall_sentiment
                .unwrap_or_else(|| Sentiment::from_rating(input.rating)),
            sentiment_score: payload
                .sentiment_score
                .filter(|s| s.is_finite() && *s > 0.0)
                .map_or_else(|| score_from_rating(input.rating), clamp_score),
            positive_themes: payload.positive_themes,
            negative_themes: payload.negative_themes,
            common_praises: payload.common_praises,
            common_complaints: payload.common_complaints,
            suggested_responses: payload.suggested_responses,
            summary: payload.summary,
        },
        Err(e) => {
            tracing::warn!(error = %e, "sentiment generation failed, using templates");
            fallback_sentiment(input.rating, input.review_count)
        }
    }
}

fn prompt(input: &SentimentInput<'_>) -> CompletionRequest {
    let user = format!(
        r#"Analyze the likely review sentiment for this business:
- Name: {name}
- Category: {category}
- Location: {address}
- Average Rating: {rating}/5
- Total Reviews: {reviews}

Based on the rating and business type, predict the likely review themes.
Return a JSON object:
{{
  "overallSentiment": "positive" | "mixed" | "negative",
  "sentimentScore": 0-100,
  "positiveThemes": ["3-5 likely positive themes based on business type and good rating"],
  "negativeThemes": ["3-5 likely negative themes based on common complaints for this business type"],
  "commonPraises": ["3-5 specific things customers likely praise"],
  "commonComplaints": ["3-5 specific things customers might complain about"],
  "suggestedResponses": [
    {{ "theme": "complaint theme", "response": "professional response template" }}
  ],
  "summary": "A 2-3 sentence analysis summary"
}}

Make themes specific to the {category} business type. Be realistic based on the {rating} rating."#,
        name = input.business_name,
        category = input.category,
        address = input.address,
        rating = input.rating,
        reviews = input.review_count,
    );

    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        user,
        expect_json: true,
        max_tokens: MAX_TOKENS,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

fn score_from_rating(rating: f64) -> u8 {
    clamp_score(rating * 20.0)
}

/// Template analysis from rating and review count. Pure.
#[must_use]
pub fn fallback_sentiment(rating: f64, review_count: u32) -> SentimentAnalysis {
    let overall_sentiment = Sentiment::from_rating(rating);
    let to_strings = |items: &[&str]| items.iter().map(ToString::to_string).collect::<Vec<_>>();

    let summary = if review_count > 0 {
        let outlook = if rating >= 4.0 {
            "Customers generally appreciate the quality and service."
        } else {
            "There are areas for improvement in customer experience."
        };
        format!(
            "Based on {review_count} reviews with an average rating of {rating:.1}, the overall sentiment is {}. {outlook}",
            overall_sentiment.as_str()
        )
    } else {
        "Insufficient review data for detailed analysis. Focus on collecting more reviews."
            .to_string()
    };

    SentimentAnalysis {
        overall_sentiment,
        sentiment_score: score_from_rating(rating),
        positive_themes: to_strings(&[
            "Quality of service",
            "Staff friendliness",
            "Value for money",
            "Convenient location",
        ]),
        negative_themes: to_strings(&["Wait times", "Inconsistent quality", "Cleanliness concerns"]),
        common_praises: to_strings(&[
            "Great customer service experience",
            "Good quality products/services",
            "Friendly and helpful staff",
        ]),
        common_complaints: to_strings(&[
            "Long waiting times during peak hours",
            "Pricing could be more competitive",
            "Parking availability issues",
        ]),
        suggested_responses: vec![
            SuggestedResponse {
                theme: "Long wait times".to_string(),
                response: "Thank you for your feedback. We apologize for the wait and are actively working on improving our service speed. We value your patience and hope to serve you better next time!".to_string(),
            },
            SuggestedResponse {
                theme: "Quality concerns".to_string(),
                response: "We appreciate you bringing this to our attention. Quality is our top priority, and we'd love to make this right. Please contact us directly so we can address your specific concerns.".to_string(),
            },
        ],
        summary,
    }
}
