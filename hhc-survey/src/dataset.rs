//! The survey dataset and its CSV loader.
//!
//! # CSV Format
//!
//! Headers are required and matched by name. The loader needs `survey`
//! (`YYYY-MM-DD`) plus the four categorical columns; any other columns are
//! ignored.
//!
//! ```text
//! survey,ownrent,electricity,latrine,hohreligion
//! 2016-07-16,Own,Yes,Flush,Christian
//! ```

use crate::field::SurveyField;
use crate::record::{SurveyRecord, SurveyRow};
use crate::selection_range::SelectionRange;
use anyhow::{bail, Context};
use chrono::NaiveDate;

/// Name of the date column.
pub const SURVEY_DATE_COLUMN: &str = "survey";

/// The full, immutable set of survey records loaded at startup.
///
/// Panels share it read-only (typically behind an `Rc`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SurveyRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SurveyRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a CSV string.
    ///
    /// Fails when a required column is missing or a row is not valid CSV.
    /// Rows whose `survey` value is not a valid date are kept without a date
    /// and reported with `log::warn!`; they never appear in a date-filtered
    /// working set.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers().context("reading survey CSV headers")?.clone();
        let required = std::iter::once(SURVEY_DATE_COLUMN)
            .chain(SurveyField::ALL.iter().map(|f| f.column()));
        for column in required {
            if !headers.iter().any(|h| h == column) {
                bail!("survey CSV is missing required column '{}'", column);
            }
        }

        let mut records = Vec::new();
        let mut undated = 0u32;
        for (index, result) in rdr.deserialize::<SurveyRow>().enumerate() {
            // header is line 1
            let line = index + 2;
            let row = result.with_context(|| format!("parsing survey CSV line {}", line))?;
            let (record, rejected) = row.into_record();
            if let Some(raw) = rejected {
                log::warn!(
                    "survey line {}: unparseable date '{}', excluded from date views",
                    line,
                    raw
                );
            }
            if record.survey.is_none() {
                undated += 1;
            }
            records.push(record);
        }
        log::info!(
            "dataset: loaded {} survey records ({} without a date)",
            records.len(),
            undated
        );
        Ok(Self { records })
    }

    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest survey dates, or `None` when no record has a date.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(|r| r.survey);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// The records active for `selection`: every record when there is no
    /// selection, otherwise those dated inside the range (in dataset order).
    pub fn working_set(&self, selection: Option<&SelectionRange>) -> Vec<&SurveyRecord> {
        match selection {
            None => self.records.iter().collect(),
            Some(range) => self
                .records
                .iter()
                .filter(|r| r.survey.is_some_and(|date| range.contains(date)))
                .collect(),
        }
    }
}
