//! Candidate store: the ordered in-memory restaurant collection

use std::collections::BTreeSet;

use shared::{BudgetFilter, PriceRange, Restaurant};

use crate::core::overlap::overlaps;
use crate::error::PickerResult;

/// Ordered collection of restaurant records.
///
/// Insertion order is significant only for display; the sole structural
/// invariant is id uniqueness. Exclusively owned by the running session —
/// the persistence side only ever sees snapshots of it.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<Restaurant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a previously persisted collection as the initial state.
    pub fn from_records(records: Vec<Restaurant>) -> Self {
        Self { records }
    }

    /// Append a new record, assigning the next id.
    ///
    /// Ids are `max(existing) + 1`, or 1 on an empty roster. Deleting the
    /// highest id and re-adding reuses it; uniqueness within the session is
    /// the invariant, not monotonic history. Rejects empty name/category
    /// (after trimming) and inverted bounded price ranges.
    pub fn add(
        &mut self,
        name: &str,
        category: &str,
        min_price: u32,
        max_price: Option<u32>,
    ) -> PickerResult<Restaurant> {
        let price = PriceRange::new(min_price, max_price)?;
        let id = self.records.iter().map(|r| r.id).max().map_or(1, |m| m + 1);
        let record = Restaurant::new(id, name, category, price)?;
        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove the record with the given id.
    ///
    /// Returns whether a removal occurred; idempotent on absence. The
    /// confirmation step belongs to the presentation boundary.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Records passing the category and budget-overlap filters, in store
    /// order (no relevance sorting).
    pub fn query(&self, filter: &BudgetFilter) -> Vec<&Restaurant> {
        let budget = filter.budget_range();
        self.records
            .iter()
            .filter(|r| filter.matches_category(&r.category))
            .filter(|r| overlaps(&r.price, &budget))
            .collect()
    }

    /// Distinct category labels, for filter and suggestion options.
    pub fn distinct_categories(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.category.clone()).collect()
    }

    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clone of the current state for a full-replace persistence write.
    pub fn snapshot(&self) -> Vec<Restaurant> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add("Lucky Noodles", "Noodles", 50, Some(100)).unwrap();
        roster.add("Stone Oven", "Pizza", 200, Some(400)).unwrap();
        roster
    }

    #[test]
    fn first_id_is_one_then_max_plus_one() {
        let mut roster = Roster::new();

        let first = roster.add("Lucky Noodles", "Noodles", 50, Some(100)).unwrap();
        assert_eq!(first.id, 1);

        let second = roster.add("Stone Oven", "Pizza", 200, Some(400)).unwrap();
        assert_eq!(second.id, 2);

        // Deleting the highest id frees it for reuse.
        assert!(roster.delete(2));
        let third = roster.add("Night Curry", "Curry", 90, None).unwrap();
        assert_eq!(third.id, 2);
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster.add(&format!("Place {i}"), "Misc", 10, Some(20)).unwrap();
        }
        roster.delete(2);
        roster.delete(4);
        roster.add("Late Addition", "Misc", 10, Some(20)).unwrap();

        let mut ids: Vec<u32> = roster.records().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.records().len());
    }

    #[test]
    fn add_rejects_blank_fields_without_state_change() {
        let mut roster = Roster::new();

        let err = roster.add("   ", "Noodles", 0, None).unwrap_err();
        assert!(matches!(err, PickerError::Validation { .. }));
        let err = roster.add("Lucky Noodles", "  ", 0, None).unwrap_err();
        assert!(matches!(err, PickerError::Validation { .. }));

        assert!(roster.is_empty());
    }

    #[test]
    fn add_rejects_inverted_bounded_range() {
        let mut roster = Roster::new();

        let err = roster.add("Stone Oven", "Pizza", 400, Some(200)).unwrap_err();
        assert!(matches!(err, PickerError::Validation { .. }));
        assert!(roster.is_empty());

        // An open upper bound never inverts, whatever the minimum.
        assert!(roster.add("Stone Oven", "Pizza", 400, None).is_ok());
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let mut roster = sample_roster();

        assert!(!roster.delete(99));
        assert_eq!(roster.records().len(), 2);

        assert!(roster.delete(1));
        assert!(!roster.delete(1));
        assert_eq!(roster.records().len(), 1);
    }

    #[test]
    fn unfiltered_query_includes_every_added_record() {
        let mut roster = sample_roster();
        let added = roster.add("Night Curry", "Curry", 90, None).unwrap();

        let all = roster.query(&BudgetFilter::default());
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|r| r.id == added.id));
    }

    #[test]
    fn query_intersects_budget_with_both_price_ranges() {
        let roster = sample_roster();

        // 50~100 overlaps 80..=250 at 80..=100; 200~400 overlaps at 200..=250.
        let filter = BudgetFilter {
            min_budget: Some(80),
            max_budget: Some(250),
            category: None,
        };
        let hits = roster.query(&filter);
        assert_eq!(hits.len(), 2);

        // Store order is preserved.
        assert_eq!(hits[0].name, "Lucky Noodles");
        assert_eq!(hits[1].name, "Stone Oven");
    }

    #[test]
    fn query_filters_by_category() {
        let roster = sample_roster();

        let filter = BudgetFilter {
            min_budget: None,
            max_budget: None,
            category: Some("Pizza".to_string()),
        };
        let hits = roster.query(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Stone Oven");
    }

    #[test]
    fn distinct_categories_deduplicates() {
        let mut roster = sample_roster();
        roster.add("Second Noodle Bar", "Noodles", 60, Some(120)).unwrap();

        let categories = roster.distinct_categories();
        assert_eq!(
            categories.into_iter().collect::<Vec<_>>(),
            vec!["Noodles".to_string(), "Pizza".to_string()]
        );
    }
}
