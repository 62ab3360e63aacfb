//! Input cost categories for partial productivity.

use std::fmt;

/// The five fixed input categories.
///
/// Order is significant: the heuristic classifier tests categories in this
/// order and the first match wins. Unclassified resources fall to
/// `Overhead`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Labor,
    Machine,
    Materials,
    Energy,
    Overhead,
}

impl Category {
    /// All categories in classification order.
    pub const ALL: [Self; 5] = [
        Self::Labor,
        Self::Machine,
        Self::Materials,
        Self::Energy,
        Self::Overhead,
    ];

    /// Lower-case wire name, matching the original column vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Labor => "labor",
            Self::Machine => "machine",
            Self::Materials => "materials",
            Self::Energy => "energy",
            Self::Overhead => "overhead",
        }
    }

    /// Parse a pre-label cell (case-insensitive), e.g. from a `category`
    /// column supplied by the caller.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated cost per category, in currency units.
///
/// Every resource row's cost lands in exactly one category, so the totals
/// always sum to the table's total input cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryTotals {
    pub labor: f64,
    pub machine: f64,
    pub materials: f64,
    pub energy: f64,
    pub overhead: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Labor => self.labor,
            Category::Machine => self.machine,
            Category::Materials => self.materials,
            Category::Energy => self.energy,
            Category::Overhead => self.overhead,
        }
    }

    pub fn add(&mut self, category: Category, cost: f64) {
        match category {
            Category::Labor => self.labor += cost,
            Category::Machine => self.machine += cost,
            Category::Materials => self.materials += cost,
            Category::Energy => self.energy += cost,
            Category::Overhead => self.overhead += cost,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> f64 {
        Category::ALL
            .into_iter()
            .map(|category| self.get(category))
            .sum()
    }
}
