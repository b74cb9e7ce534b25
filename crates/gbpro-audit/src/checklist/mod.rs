//! 47-point premium checklist.
//!
//! Every item is static data (see [`items`]) paired with a [`Rule`] over the
//! profile signals. Some checks need data a read-only listing does not carry
//! (posting cadence, Q&A activity, messaging); those are
//! [`Rule::Undeterminable`] with a fixed assumed outcome and are reported with
//! `determinable: false`, so a richer source can replace them later without
//! reinterpreting existing failures.

mod items;

use std::collections::BTreeMap;

use gbpro_core::ProfileSignals;
use serde::Serialize;

pub use items::ITEM_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistCategory {
    BasicInfo,
    Contact,
    Visual,
    Content,
    Reviews,
    Engagement,
    Seo,
    Technical,
}

impl ChecklistCategory {
    pub const ALL: [Self; 8] = [
        Self::BasicInfo,
        Self::Contact,
        Self::Visual,
        Self::Content,
        Self::Reviews,
        Self::Engagement,
        Self::Seo,
        Self::Technical,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info",
            Self::Contact => "contact",
            Self::Visual => "visual",
            Self::Content => "content",
            Self::Reviews => "reviews",
            Self::Engagement => "engagement",
            Self::Seo => "seo",
            Self::Technical => "technical",
        }
    }

    /// Display label for report headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Contact => "Contact & Access",
            Self::Visual => "Visual Content",
            Self::Content => "Posts & Content",
            Self::Reviews => "Reviews",
            Self::Engagement => "Engagement",
            Self::Seo => "SEO & Discovery",
            Self::Technical => "Technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weight {
    Critical,
    Important,
    NiceToHave,
}

impl Weight {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::NiceToHave => "nice-to-have",
        }
    }

    /// Sort rank, most urgent first.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Important => 1,
            Self::NiceToHave => 2,
        }
    }
}

/// Outcome of one rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Evaluated(bool),
    /// Not observable from listing metadata; `assumed` stands in.
    Undeterminable { assumed: bool },
}

impl Evaluation {
    #[must_use]
    pub fn passed(self) -> bool {
        match self {
            Self::Evaluated(passed) | Self::Undeterminable { assumed: passed } => passed,
        }
    }

    #[must_use]
    pub fn is_determinable(self) -> bool {
        matches!(self, Self::Evaluated(_))
    }
}

/// Predicate over profile signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    NameSet,
    NameShorterThan(usize),
    AddressSet,
    AddressLongerThan(usize),
    CategoriesMoreThan(usize),
    DescriptionLongerThan(usize),
    /// Open, or status unknown.
    Operational,
    PhoneSet,
    WebsiteSet,
    HttpsWebsite,
    HoursSet,
    PhotosAtLeast(u32),
    ReviewsAtLeast(u32),
    RatingAtLeast(f64),
    /// Name, address and phone all present.
    NapComplete,
    Undeterminable { assumed: bool },
}

impl Rule {
    #[must_use]
    pub fn evaluate(self, signals: &ProfileSignals) -> Evaluation {
        let name = signals.business_name.trim();
        let passed = match self {
            Self::Undeterminable { assumed } => return Evaluation::Undeterminable { assumed },
            Self::NameSet => !name.is_empty(),
            Self::NameShorterThan(max) => !name.is_empty() && name.chars().count() < max,
            Self::AddressSet => signals.address.is_some(),
            Self::AddressLongerThan(min) => signals
                .address
                .as_deref()
                .is_some_and(|a| a.chars().count() > min),
            Self::CategoriesMoreThan(min) => signals.categories.len() > min,
            Self::DescriptionLongerThan(min) => signals
                .description
                .as_deref()
                .is_some_and(|d| d.chars().count() > min),
            Self::Operational => signals
                .business_status
                .as_deref()
                .is_none_or(|s| s == "OPERATIONAL"),
            Self::PhoneSet => signals.phone.is_some(),
            Self::WebsiteSet => signals.website.is_some(),
            Self::HttpsWebsite => signals
                .website
                .as_deref()
                .is_some_and(|w| w.starts_with("https")),
            Self::HoursSet => signals.has_hours,
            Self::PhotosAtLeast(min) => signals.photo_count >= min,
            Self::ReviewsAtLeast(min) => signals.review_count >= min,
            Self::RatingAtLeast(min) => signals.rating_or_zero() >= min,
            Self::NapComplete => {
                !name.is_empty() && signals.address.is_some() && signals.phone.is_some()
            }
        };
        Evaluation::Evaluated(passed)
    }
}

/// One evaluated checklist entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: &'static str,
    pub category: ChecklistCategory,
    pub label: &'static str,
    pub passed: bool,
    /// `false` when `passed` is an assumption rather than an observation.
    pub determinable: bool,
    pub weight: Weight,
    pub fix_guide: &'static str,
    pub estimated_time: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub passed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResult {
    pub items: Vec<ChecklistItem>,
    pub passed_count: usize,
    pub total_count: usize,
    pub category_scores: BTreeMap<ChecklistCategory, CategoryScore>,
}

/// Evaluate all 47 checks against `signals`. Pure and deterministic.
#[must_use]
pub fn run_premium_checklist(signals: &ProfileSignals) -> ChecklistResult {
    let mut category_scores: BTreeMap<ChecklistCategory, CategoryScore> = ChecklistCategory::ALL
        .into_iter()
        .map(|c| (c, CategoryScore::default()))
        .collect();

    let items: Vec<ChecklistItem> = items::DEFINITIONS
        .iter()
        .map(|def| {
            let outcome = def.rule.evaluate(signals);
            ChecklistItem {
                id: def.id,
                category: def.category,
                label: def.label,
                passed: outcome.passed(),
                determinable: outcome.is_determinable(),
                weight: def.weight,
                fix_guide: def.fix_guide,
                estimated_time: def.estimated_time,
            }
        })
        .collect();

    for item in &items {
        let tally = category_scores.entry(item.category).or_default();
        tally.total += 1;
        if item.passed {
            tally.passed += 1;
        }
    }

    let passed_count = items.iter().filter(|i| i.passed).count();

    ChecklistResult {
        total_count: items.len(),
        passed_count,
        items,
        category_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_signals() -> ProfileSignals {
        ProfileSignals {
            place_id: Some("p1".to_string()),
            business_name: "Sharma's Kitchen".to_string(),
            address: Some("12 MG Road, Indiranagar, Bengaluru, India".to_string()),
            phone: Some("080 1234 5678".to_string()),
            website: Some("https://sharmaskitchen.in".to_string()),
            categories: vec![
                "indian_restaurant".to_string(),
                "restaurant".to_string(),
                "food".to_string(),
            ],
            description: Some(
                "Family-run North Indian kitchen serving biryani and tandoor since 1998."
                    .to_string(),
            ),
            photo_count: 25,
            has_hours: true,
            business_status: Some("OPERATIONAL".to_string()),
            rating: Some(4.6),
            review_count: 120,
            response_rate: 50,
            recent_post_count: None,
        }
    }

    fn item<'a>(result: &'a ChecklistResult, id: &str) -> &'a ChecklistItem {
        result.items.iter().find(|i| i.id == id).expect("item exists")
    }

    #[test]
    fn always_47_items_with_fixed_category_counts() {
        for signals in [ProfileSignals::default(), strong_signals()] {
            let result = run_premium_checklist(&signals);
            assert_eq!(result.items.len(), 47);
            assert_eq!(result.total_count, 47);
            let totals: Vec<usize> = ChecklistCategory::ALL
                .iter()
                .map(|c| result.category_scores[c].total)
                .collect();
            assert_eq!(totals, vec![7, 5, 6, 6, 5, 5, 7, 6]);
            assert_eq!(totals.iter().sum::<usize>(), 47);
        }
    }

    #[test]
    fn passed_count_matches_items_and_category_tallies() {
        let result = run_premium_checklist(&strong_signals());
        let passed = result.items.iter().filter(|i| i.passed).count();
        assert_eq!(result.passed_count, passed);
        let by_category: usize = result.category_scores.values().map(|s| s.passed).sum();
        assert_eq!(by_category, passed);
    }

    #[test]
    fn ids_are_unique() {
        let result = run_premium_checklist(&ProfileSignals::default());
        let mut ids: Vec<&str> = result.items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ITEM_COUNT);
    }

    #[test]
    fn deterministic_for_identical_signals() {
        let a = serde_json::to_string(&run_premium_checklist(&strong_signals())).unwrap();
        let b = serde_json::to_string(&run_premium_checklist(&strong_signals())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_signals_pass_only_assumed_and_unknown_status_items() {
        let result = run_premium_checklist(&ProfileSignals::default());
        let passed: Vec<&str> = result
            .items
            .iter()
            .filter(|i| i.passed)
            .map(|i| i.id)
            .collect();
        assert_eq!(passed, vec!["bi-7", "tc-1", "tc-2"]);
    }

    #[test]
    fn strong_signals_fail_only_what_a_listing_cannot_show() {
        let result = run_premium_checklist(&strong_signals());
        for i in &result.items {
            if i.determinable {
                assert!(i.passed, "{} should pass", i.id);
            }
        }
        assert_eq!(result.passed_count, 47 - 15);
    }

    #[test]
    fn undeterminable_items_are_tagged() {
        let result = run_premium_checklist(&strong_signals());
        let undeterminable: Vec<&str> = result
            .items
            .iter()
            .filter(|i| !i.determinable)
            .map(|i| i.id)
            .collect();
        assert_eq!(
            undeterminable,
            vec![
                "ct-5", "cn-1", "cn-2", "cn-3", "cn-4", "cn-5", "cn-6", "en-1", "en-2", "en-3",
                "en-4", "en-5", "se-3", "se-5", "tc-1", "tc-2", "tc-6"
            ]
        );
        assert!(item(&result, "tc-1").passed);
        assert!(!item(&result, "cn-2").passed);
    }

    #[test]
    fn name_length_limit() {
        let mut signals = strong_signals();
        signals.business_name = "x".repeat(80);
        let result = run_premium_checklist(&signals);
        assert!(item(&result, "bi-1").passed);
        assert!(!item(&result, "bi-2").passed);
    }

    #[test]
    fn closed_business_fails_operational_check() {
        let mut signals = strong_signals();
        signals.business_status = Some("CLOSED_TEMPORARILY".to_string());
        assert!(!item(&run_premium_checklist(&signals), "bi-7").passed);
    }

    #[test]
    fn http_website_fails_ssl_check_only() {
        let mut signals = strong_signals();
        signals.website = Some("http://sharmaskitchen.in".to_string());
        let result = run_premium_checklist(&signals);
        assert!(item(&result, "ct-2").passed);
        assert!(item(&result, "tc-3").passed);
        assert!(!item(&result, "tc-5").passed);
    }

    #[test]
    fn thresholds_on_photos_reviews_and_rating() {
        let mut signals = strong_signals();
        signals.photo_count = 9;
        signals.review_count = 10;
        signals.rating = Some(4.0);
        let result = run_premium_checklist(&signals);
        assert!(item(&result, "vs-2").passed);
        assert!(!item(&result, "vs-3").passed);
        assert!(item(&result, "rv-2").passed);
        assert!(!item(&result, "rv-3").passed);
        assert!(item(&result, "rv-4").passed);
        assert!(!item(&result, "rv-5").passed);
    }

    #[test]
    fn category_keys_and_weight_serialise_in_wire_form() {
        let json = serde_json::to_value(run_premium_checklist(&ProfileSignals::default())).unwrap();
        assert_eq!(json["categoryScores"]["basic_info"]["total"], 7);
        assert_eq!(json["items"][3]["weight"], "critical");
        assert_eq!(json["items"][4]["weight"], "important");
        let ct4 = &json["items"][10];
        assert_eq!(ct4["id"], "ct-4");
        assert_eq!(ct4["weight"], "nice-to-have");
        assert_eq!(ct4["estimatedTime"], "5 min");
    }

    #[test]
    fn category_labels() {
        assert_eq!(ChecklistCategory::Contact.label(), "Contact & Access");
        assert_eq!(ChecklistCategory::Seo.label(), "SEO & Discovery");
    }
}
