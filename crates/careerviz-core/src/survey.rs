//! Survey records appended to the results spreadsheet.

use chrono::NaiveDate;
use serde::Serialize;

/// Day-month-year, zero padded: `05-01-2024`.
pub const SURVEY_DATE_FORMAT: &str = "%d-%m-%Y";

/// One row of the career survey: who, what career, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyRecord {
    pub name: String,
    pub career: String,
    /// Already formatted with [`SURVEY_DATE_FORMAT`].
    pub date: String,
}

impl SurveyRecord {
    pub fn new(name: impl Into<String>, career: impl Into<String>, date: NaiveDate) -> Self {
        SurveyRecord {
            name: name.into(),
            career: career.into(),
            date: format_survey_date(date),
        }
    }

    /// Cells in spreadsheet column order.
    pub fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.career.clone(), self.date.clone()]
    }
}

pub fn format_survey_date(date: NaiveDate) -> String {
    date.format(SURVEY_DATE_FORMAT).to_string()
}
