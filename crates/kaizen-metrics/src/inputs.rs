//! Input cost aggregation and the heuristic category classifier.

use kaizen_model::{Category, CategoryTotals, ResourceTable};

/// Total input cost: sum(quantity x unit_cost) over all rows.
///
/// No absent-handling is needed here; after normalization `quantity` and
/// `unit_cost` are always present.
pub fn compute_input_cost(resources: &ResourceTable) -> f64 {
    resources
        .rows
        .iter()
        .map(|row| row.quantity * row.unit_cost)
        .sum()
}

/// Keyword-based resource classifier.
///
/// A prioritized list of `(category, keywords)` pairs evaluated in fixed
/// order: labor, machine, materials, energy, overhead. Matching is a
/// case-insensitive substring test on the trimmed resource name; the first
/// matching category wins, and a name that matches nothing falls to
/// overhead.
///
/// This is a best-effort heuristic, not a guaranteed-correct mapping. The
/// default keyword table carries common English and Indonesian synonyms;
/// callers can extend it with [`Classifier::with_keywords`], or bypass it
/// per row by pre-labeling the `category` field.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<(Category, Vec<String>)>,
}

impl Default for Classifier {
    fn default() -> Self {
        let keywords = |words: &[&str]| words.iter().map(|w| (*w).to_owned()).collect();
        Self {
            rules: vec![
                (
                    Category::Labor,
                    keywords(&["labor", "labour", "tenaga kerja", "manhours", "jam kerja"]),
                ),
                (
                    Category::Machine,
                    keywords(&["machine", "mesin", "machine hour", "mh", "jam mesin"]),
                ),
                (
                    Category::Materials,
                    keywords(&["material", "materials", "bahan"]),
                ),
                (
                    Category::Energy,
                    keywords(&["energy", "energi", "listrik", "bbm"]),
                ),
                (
                    Category::Overhead,
                    keywords(&["overhead", "sewa", "depresiasi", "admin"]),
                ),
            ],
        }
    }
}

impl Classifier {
    /// Extend one category's keyword set without touching call sites.
    #[must_use]
    pub fn with_keywords(mut self, category: Category, keywords: &[&str]) -> Self {
        if let Some((_, words)) = self.rules.iter_mut().find(|(c, _)| *c == category) {
            words.extend(keywords.iter().map(|w| (*w).to_owned()));
        }
        self
    }

    /// Classify a resource name. Unmatched names land in overhead.
    pub fn classify(&self, resource: &str) -> Category {
        let name = resource.trim().to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword.as_str())))
            .map_or(Category::Overhead, |(category, _)| *category)
    }
}

/// Accumulate each row's cost into exactly one category.
///
/// A row's pre-label wins over the heuristic; everything else goes through
/// the classifier. Nothing is dropped, so the totals always cover the full
/// input cost.
pub fn categorize_inputs(resources: &ResourceTable, classifier: &Classifier) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for row in &resources.rows {
        let category = row
            .category
            .unwrap_or_else(|| classifier.classify(&row.resource));
        totals.add(category, row.quantity * row.unit_cost);
    }
    totals
}
