//! Keyword-based chart classification.
//!
//! An ordered rule table replaces the ad-hoc "if label mentions X" chain:
//! each rule pairs a keyword list with a chart kind and palette, rules are
//! evaluated top-down on the lowercased label, and the first hit wins. The
//! dashboard has shipped with two rule tables over time, so both stay
//! available behind a config switch.

use serde::{Deserialize, Serialize};

use super::{ChartKind, Palette};

/// One classification rule: any keyword hit selects the chart.
#[derive(Debug, Clone)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub kind: ChartKind,
    pub palette: Palette,
}

/// Outcome of classifying a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: ChartKind,
    pub palette: Palette,
}

/// Which built-in rule table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RulesetKind {
    /// Discount questions get a pie, revenue/profit a coolwarm bar,
    /// everything else a viridis bar.
    #[default]
    Standard,
    /// Every question gets a bar; revenue/profit keep the coolwarm palette.
    BarOnly,
}

impl RulesetKind {
    pub fn rules(&self) -> RuleSet {
        match self {
            RulesetKind::Standard => RuleSet::standard(),
            RulesetKind::BarOnly => RuleSet::bar_only(),
        }
    }
}

/// Ordered rule table with a fallback.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: Classification,
}

impl RuleSet {
    /// The full rule table: pie for discounts, then bars.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule {
                    keywords: &["discount"],
                    kind: ChartKind::Pie,
                    palette: Palette::Coolwarm,
                },
                Rule {
                    keywords: &["revenue", "profit"],
                    kind: ChartKind::Bar,
                    palette: Palette::Coolwarm,
                },
            ],
            fallback: Classification {
                kind: ChartKind::Bar,
                palette: Palette::Viridis,
            },
        }
    }

    /// The bar-only table used by the extended catalog's original form.
    pub fn bar_only() -> Self {
        Self {
            rules: vec![Rule {
                keywords: &["revenue", "profit"],
                kind: ChartKind::Bar,
                palette: Palette::Coolwarm,
            }],
            fallback: Classification {
                kind: ChartKind::Bar,
                palette: Palette::Viridis,
            },
        }
    }

    /// Classify a label. Pure: same label, same answer.
    pub fn classify(&self, label: &str) -> Classification {
        let label = label.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| label.contains(kw)) {
                return Classification {
                    kind: rule.kind,
                    palette: rule.palette,
                };
            }
        }
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogVariant, QueryCatalog};

    #[test]
    fn test_discount_labels_classify_as_pie() {
        let rules = RuleSet::standard();
        for label in [
            "3. Total discount given for each category",
            "8. Average discount percentage given per region",
            "TOTAL DISCOUNT BY SEGMENT",
        ] {
            let c = rules.classify(label);
            assert_eq!(c.kind, ChartKind::Pie, "label: {label}");
        }
    }

    #[test]
    fn test_revenue_and_profit_get_coolwarm_bars() {
        let rules = RuleSet::standard();
        for label in [
            "1. Top 10 highest revenue-generating products",
            "6. Total profit per category",
            "10. Total revenue generated per year",
        ] {
            let c = rules.classify(label);
            assert_eq!(c.kind, ChartKind::Bar, "label: {label}");
            assert_eq!(c.palette, Palette::Coolwarm, "label: {label}");
        }
    }

    #[test]
    fn test_discount_outranks_revenue() {
        // Both keywords present: the discount rule is first, so pie wins.
        let c = RuleSet::standard().classify("Discounted revenue per region");
        assert_eq!(c.kind, ChartKind::Pie);
    }

    #[test]
    fn test_fallback_is_viridis_bar() {
        let c = RuleSet::standard().classify("5. Region with the highest average sale price");
        assert_eq!(c.kind, ChartKind::Bar);
        assert_eq!(c.palette, Palette::Viridis);
    }

    #[test]
    fn test_bar_only_never_yields_pie() {
        let rules = RuleSet::bar_only();
        let catalog = QueryCatalog::new(CatalogVariant::Extended);
        for label in catalog.labels() {
            assert_eq!(rules.classify(label).kind, ChartKind::Bar, "label: {label}");
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let rules = RuleSet::standard();
        let label = "10. Total revenue generated per year";
        assert_eq!(rules.classify(label), rules.classify(label));
    }
}
