use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One household from the survey.
///
/// `survey` is `None` when the CSV value could not be parsed as `YYYY-MM-DD`.
/// Categorical fields are `None` when the cell was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyRecord {
    pub survey: Option<NaiveDate>,
    pub ownrent: Option<String>,
    pub electricity: Option<String>,
    pub latrine: Option<String>,
    pub hohreligion: Option<String>,
}

/// Raw CSV row as deserialized by `csv` + `serde`, before date parsing and trimming.
/// Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SurveyRow {
    #[serde(default)]
    pub survey: Option<String>,
    #[serde(default)]
    pub ownrent: Option<String>,
    #[serde(default)]
    pub electricity: Option<String>,
    #[serde(default)]
    pub latrine: Option<String>,
    #[serde(default)]
    pub hohreligion: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SurveyRow {
    /// Convert into a record. The raw survey value is returned alongside when it
    /// was present but not a valid date, so the caller can report it.
    pub(crate) fn into_record(self) -> (SurveyRecord, Option<String>) {
        let raw_date = non_empty(self.survey);
        let survey = raw_date
            .as_deref()
            .and_then(|raw| hhc_utils::dates::parse_date(raw).ok());
        let rejected = match (&survey, raw_date) {
            (None, Some(raw)) => Some(raw),
            _ => None,
        };
        let record = SurveyRecord {
            survey,
            ownrent: non_empty(self.ownrent),
            electricity: non_empty(self.electricity),
            latrine: non_empty(self.latrine),
            hohreligion: non_empty(self.hohreligion),
        };
        (record, rejected)
    }
}
