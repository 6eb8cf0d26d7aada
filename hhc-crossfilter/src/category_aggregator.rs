//! Grouping and counting of survey records.
//!
//! Both aggregations are total: an empty working set gives an empty result.

use chrono::NaiveDate;
use hhc_survey::{SurveyField, SurveyRecord};
use indexmap::IndexMap;
use serde::Serialize;

/// A group key and the number of working-set records that map to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedGroup<K> {
    pub key: K,
    pub count: usize,
}

impl<K> AggregatedGroup<K> {
    pub fn new(key: K, count: usize) -> Self {
        Self { key, count }
    }
}

/// Count records per value of `field`, most frequent first.
///
/// Records without a value are counted under [`hhc_survey::UNKNOWN_CATEGORY`].
/// Equal counts keep the order in which their keys were first seen.
pub fn aggregate_by_field<'a, I>(records: I, field: SurveyField) -> Vec<AggregatedGroup<String>>
where
    I: IntoIterator<Item = &'a SurveyRecord>,
{
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(field.group_key(record)).or_insert(0) += 1;
    }
    let mut groups: Vec<AggregatedGroup<String>> = counts
        .into_iter()
        .map(|(key, count)| AggregatedGroup::new(key.to_string(), count))
        .collect();
    // sort_by is stable
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Count records per survey date, earliest first.
///
/// Records without a valid date are skipped.
pub fn aggregate_by_date<'a, I>(records: I) -> Vec<AggregatedGroup<NaiveDate>>
where
    I: IntoIterator<Item = &'a SurveyRecord>,
{
    let mut counts: IndexMap<NaiveDate, usize> = IndexMap::new();
    let mut skipped = 0usize;
    for record in records {
        match record.survey {
            Some(date) => *counts.entry(date).or_insert(0) += 1,
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("aggregate_by_date: skipped {} records without a date", skipped);
    }
    let mut groups: Vec<AggregatedGroup<NaiveDate>> = counts
        .into_iter()
        .map(|(key, count)| AggregatedGroup::new(key, count))
        .collect();
    groups.sort_by_key(|g| g.key);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhc_survey::UNKNOWN_CATEGORY;

    fn record(date: Option<(i32, u32, u32)>, latrine: Option<&str>) -> SurveyRecord {
        SurveyRecord {
            survey: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            latrine: latrine.map(str::to_string),
            ..SurveyRecord::default()
        }
    }

    #[test]
    fn test_by_field_sorts_descending() {
        let records: Vec<SurveyRecord> = ["Pit", "Flush", "Flush", "None", "Flush", "Pit"]
            .iter()
            .map(|v| record(None, Some(v)))
            .collect();
        let groups = aggregate_by_field(&records, SurveyField::Latrine);
        assert_eq!(
            groups,
            vec![
                AggregatedGroup::new("Flush".to_string(), 3),
                AggregatedGroup::new("Pit".to_string(), 2),
                AggregatedGroup::new("None".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_by_field_ties_keep_first_seen_order() {
        let records: Vec<SurveyRecord> = ["B", "A", "C", "A", "B", "C"]
            .iter()
            .map(|v| record(None, Some(v)))
            .collect();
        let keys: Vec<String> = aggregate_by_field(&records, SurveyField::Latrine)
            .into_iter()
            .map(|g| g.key)
            .collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn test_by_field_buckets_missing_values() {
        let records = vec![record(None, Some("Pit")), record(None, None), record(None, None)];
        let groups = aggregate_by_field(&records, SurveyField::Latrine);
        assert_eq!(groups[0], AggregatedGroup::new(UNKNOWN_CATEGORY.to_string(), 2));
        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_by_date_ascending_and_skips_undated() {
        let records = vec![
            record(Some((2016, 7, 20)), None),
            record(Some((2016, 7, 16)), None),
            record(None, None),
            record(Some((2016, 7, 20)), None),
        ];
        let groups = aggregate_by_date(&records);
        assert_eq!(
            groups,
            vec![
                AggregatedGroup::new(NaiveDate::from_ymd_opt(2016, 7, 16).unwrap(), 1),
                AggregatedGroup::new(NaiveDate::from_ymd_opt(2016, 7, 20).unwrap(), 2),
            ]
        );
    }

    #[test]
    fn test_empty_working_set() {
        let records: Vec<SurveyRecord> = Vec::new();
        assert!(aggregate_by_field(&records, SurveyField::OwnRent).is_empty());
        assert!(aggregate_by_date(&records).is_empty());
    }
}
