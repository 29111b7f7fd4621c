//! Destination search.
//!
//! Filters the catalog by the criteria a traveller supplies and returns the
//! survivors ranked by popularity.

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::domain::{BudgetLevel, Climate, Destination, DestinationType};

use super::rank::rank_by_popularity;

/// Search filters. Every field is optional; an absent field does not filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Free text matched against name, country and description.
    pub query: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<DestinationType>,

    pub budget: Option<BudgetLevel>,

    pub climate: Option<Climate>,

    /// Inclusive lower bound on rating.
    pub min_rating: Option<f64>,
}

impl SearchCriteria {
    /// Criteria that match every destination.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_kind(mut self, kind: DestinationType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_budget(mut self, budget: BudgetLevel) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_climate(mut self, climate: Climate) -> Self {
        self.climate = Some(climate);
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// True when no filter is set.
    pub fn is_unfiltered(&self) -> bool {
        self == &Self::default()
    }

    /// Compile the criteria into a predicate over destinations.
    ///
    /// The query is lowercased once here rather than per destination.
    pub fn predicate(&self) -> impl Fn(&Destination) -> bool + '_ {
        let needle = self.query.as_deref().map(str::to_lowercase);

        move |d: &Destination| {
            self.kind.is_none_or(|k| d.kind == k)
                && self.budget.is_none_or(|b| d.budget_level == b)
                && self.climate.is_none_or(|c| d.climate == c)
                && self.min_rating.is_none_or(|r| d.rating >= r)
                && needle.as_deref().is_none_or(|q| d.mentions(q))
        }
    }
}

/// Search the catalog.
///
/// Returns every destination satisfying all provided filters, sorted by
/// popularity (highest first). Destinations with equal popularity keep
/// their catalog order. Never fails; an empty result is valid.
pub fn search<'a>(catalog: &'a Catalog, criteria: &SearchCriteria) -> Vec<&'a Destination> {
    let matches = criteria.predicate();
    let found: Vec<&Destination> = catalog.iter().filter(|&d| matches(d)).collect();
    rank_by_popularity(found)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::fixtures::destination;
    use proptest::prelude::*;

    fn arb_destination(index: usize) -> impl Strategy<Value = Destination> {
        (
            prop::sample::select(DestinationType::ALL.to_vec()),
            prop::sample::select(Climate::ALL.to_vec()),
            prop::sample::select(BudgetLevel::ALL.to_vec()),
            10u32..50,
            1u32..=100,
            "[a-z ]{0,20}",
        )
            .prop_map(move |(kind, climate, budget, rating10, popularity, text)| {
                let mut d = destination(&format!("d{index}"));
                d.kind = kind;
                d.climate = climate;
                d.budget_level = budget;
                d.rating = f64::from(rating10) / 10.0;
                d.popularity_score = popularity;
                d.description = text;
                d
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        (0usize..12)
            .prop_flat_map(|n| (0..n).map(arb_destination).collect::<Vec<_>>())
            .prop_map(|ds| Catalog::new(ds).unwrap())
    }

    fn arb_criteria() -> impl Strategy<Value = SearchCriteria> {
        (
            prop::option::of("[a-z]{1,3}"),
            prop::option::of(prop::sample::select(DestinationType::ALL.to_vec())),
            prop::option::of(prop::sample::select(BudgetLevel::ALL.to_vec())),
            prop::option::of(prop::sample::select(Climate::ALL.to_vec())),
            prop::option::of(10u32..50),
        )
            .prop_map(|(query, kind, budget, climate, rating10)| SearchCriteria {
                query,
                kind,
                budget,
                climate,
                min_rating: rating10.map(|r| f64::from(r) / 10.0),
            })
    }

    proptest! {
        /// Without filters the whole catalog comes back, most popular first,
        /// ties in catalog order
        #[test]
        fn unfiltered_is_stable_popularity_order(catalog in arb_catalog()) {
            let found = search(&catalog, &SearchCriteria::any());
            prop_assert_eq!(found.len(), catalog.len());

            let position = |d: &Destination| catalog.iter().position(|c| c.id == d.id).unwrap();
            for pair in found.windows(2) {
                prop_assert!(pair[0].popularity_score >= pair[1].popularity_score);
                if pair[0].popularity_score == pair[1].popularity_score {
                    prop_assert!(position(pair[0]) < position(pair[1]));
                }
            }
        }

        /// Every result satisfies every provided filter
        #[test]
        fn results_satisfy_all_filters(catalog in arb_catalog(), criteria in arb_criteria()) {
            for d in search(&catalog, &criteria) {
                prop_assert!(criteria.kind.is_none_or(|k| d.kind == k));
                prop_assert!(criteria.budget.is_none_or(|b| d.budget_level == b));
                prop_assert!(criteria.climate.is_none_or(|c| d.climate == c));
                prop_assert!(criteria.min_rating.is_none_or(|r| d.rating >= r));
            }
        }

        /// Nothing that satisfies the filters is left out
        #[test]
        fn results_are_complete(catalog in arb_catalog(), criteria in arb_criteria()) {
            let found = search(&catalog, &criteria);
            let matches = criteria.predicate();
            let expected = catalog.iter().filter(|&d| matches(d)).count();
            prop_assert_eq!(found.len(), expected);
        }

        /// A query matches exactly the destinations mentioning it in name,
        /// country or description, ignoring case
        #[test]
        fn query_matches_text_fields(catalog in arb_catalog(), query in "[a-zA-Z]{1,2}") {
            let found = search(&catalog, &SearchCriteria::any().with_query(query.clone()));
            let needle = query.to_lowercase();
            let expected: Vec<&str> = catalog
                .iter()
                .filter(|d| {
                    d.name.to_lowercase().contains(&needle)
                        || d.country.to_lowercase().contains(&needle)
                        || d.description.to_lowercase().contains(&needle)
                })
                .map(|d| d.id.as_str())
                .collect();

            let mut got: Vec<&str> = found.iter().map(|d| d.id.as_str()).collect();
            let mut expected = expected;
            got.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(got, expected);
        }
    }
}
