use crate::record::SurveyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Group key used for records that have no value for the requested field.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A categorical column of the survey that a bar chart can be bound to.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyField {
    /// Own or rent the dwelling (`ownrent`)
    OwnRent,
    /// Electricity access (`electricity`)
    Electricity,
    /// Latrine type (`latrine`)
    Latrine,
    /// Religion of the household head (`hohreligion`)
    #[serde(rename = "hohreligion")]
    Religion,
}

impl SurveyField {
    /// Every categorical field, in the order the dashboard shows them.
    pub const ALL: [SurveyField; 4] = [
        SurveyField::OwnRent,
        SurveyField::Electricity,
        SurveyField::Latrine,
        SurveyField::Religion,
    ];

    /// CSV column name for this field.
    pub fn column(&self) -> &'static str {
        match self {
            SurveyField::OwnRent => "ownrent",
            SurveyField::Electricity => "electricity",
            SurveyField::Latrine => "latrine",
            SurveyField::Religion => "hohreligion",
        }
    }

    /// The raw value of this field on `record`, if present.
    pub fn value_of<'a>(&self, record: &'a SurveyRecord) -> Option<&'a str> {
        let value = match self {
            SurveyField::OwnRent => &record.ownrent,
            SurveyField::Electricity => &record.electricity,
            SurveyField::Latrine => &record.latrine,
            SurveyField::Religion => &record.hohreligion,
        };
        value.as_deref()
    }

    /// The group key for `record`: its value, or [`UNKNOWN_CATEGORY`].
    pub fn group_key<'a>(&self, record: &'a SurveyRecord) -> &'a str {
        self.value_of(record).unwrap_or(UNKNOWN_CATEGORY)
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_key_falls_back_to_unknown() {
        let record = SurveyRecord {
            electricity: Some("yes".to_string()),
            ..SurveyRecord::default()
        };
        assert_eq!(SurveyField::Electricity.group_key(&record), "yes");
        assert_eq!(SurveyField::Latrine.group_key(&record), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_display_matches_column() {
        let columns: Vec<String> = SurveyField::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(columns, ["ownrent", "electricity", "latrine", "hohreligion"]);
    }
}
