use serde::Serialize;

use crate::checklist::{ChecklistCategory, ChecklistItem, Weight};

/// One remediation step, derived from a failed checklist item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixStep {
    pub id: &'static str,
    pub label: &'static str,
    pub category: ChecklistCategory,
    pub fix_guide: &'static str,
    pub estimated_time: &'static str,
    pub impact: Weight,
}

/// Failed items ordered critical → important → nice-to-have, keeping
/// checklist order within a weight.
#[must_use]
pub fn generate_fix_guide(items: &[ChecklistItem]) -> Vec<FixStep> {
    let mut failed: Vec<&ChecklistItem> = items.iter().filter(|i| !i.passed).collect();
    // sort_by_key is stable
    failed.sort_by_key(|i| i.weight.rank());
    failed
        .into_iter()
        .map(|i| FixStep {
            id: i.id,
            label: i.label,
            category: i.category,
            fix_guide: i.fix_guide,
            estimated_time: i.estimated_time,
            impact: i.weight,
        })
        .collect()
}
