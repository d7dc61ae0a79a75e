use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{Platform, ProgressStatus, ResourceKind};
use super::HistoryImportError;

#[derive(Debug)]
pub(crate) struct HistoryRecord {
    pub(crate) skill_name: String,
    pub(crate) category: Option<String>,
    pub(crate) skill_difficulty: Option<String>,
    pub(crate) target_hours: f64,
    pub(crate) title: String,
    pub(crate) kind: ResourceKind,
    pub(crate) platform: Platform,
    pub(crate) url: Option<String>,
    pub(crate) progress: Option<ProgressFields>,
}

#[derive(Debug)]
pub(crate) struct ProgressFields {
    pub(crate) status: ProgressStatus,
    pub(crate) hours_spent: f64,
    pub(crate) notes: Option<String>,
    pub(crate) difficulty_rating: Option<u8>,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) completed_at: Option<DateTime<Utc>>,
    pub(crate) updated_at: DateTime<Utc>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<HistoryRecord>, HistoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<HistoryRow>().enumerate() {
        let row_number = index + 1;
        let row = record?;
        records.push(row.into_record(row_number)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Skill")]
    skill: String,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(
        rename = "Skill Difficulty",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    skill_difficulty: Option<String>,
    #[serde(
        rename = "Target Hours",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    target_hours: Option<String>,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Type", default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(rename = "Platform", default, deserialize_with = "empty_string_as_none")]
    platform: Option<String>,
    #[serde(rename = "URL", default, deserialize_with = "empty_string_as_none")]
    url: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(
        rename = "Hours Spent",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    hours_spent: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(
        rename = "Difficulty Rating",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    difficulty_rating: Option<String>,
    #[serde(
        rename = "Started At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    started_at: Option<String>,
    #[serde(
        rename = "Completed At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    completed_at: Option<String>,
    #[serde(
        rename = "Updated At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    updated_at: Option<String>,
}

impl HistoryRow {
    fn into_record(self, row: usize) -> Result<HistoryRecord, HistoryImportError> {
        if self.skill.is_empty() {
            return Err(invalid(row, "missing skill name"));
        }
        if self.title.is_empty() {
            return Err(invalid(row, "missing resource title"));
        }

        let target_hours = match self.target_hours.as_deref() {
            Some(raw) => parse_hours(raw).ok_or_else(|| invalid(row, "invalid target hours"))?,
            None => 0.0,
        };

        let progress = match self.status.as_deref() {
            Some(raw_status) => Some(self.progress_fields(row, raw_status)?),
            None => None,
        };

        Ok(HistoryRecord {
            skill_name: self.skill,
            category: self.category,
            skill_difficulty: self.skill_difficulty,
            target_hours,
            title: self.title,
            kind: self.kind.as_deref().map(ResourceKind::parse).unwrap_or(ResourceKind::Other),
            platform: self
                .platform
                .as_deref()
                .map(Platform::parse)
                .unwrap_or(Platform::Other),
            url: self.url,
            progress,
        })
    }

    fn progress_fields(
        &self,
        row: usize,
        raw_status: &str,
    ) -> Result<ProgressFields, HistoryImportError> {
        let status = parse_status(raw_status)
            .ok_or_else(|| invalid(row, &format!("unknown progress status '{raw_status}'")))?;

        let hours_spent = match self.hours_spent.as_deref() {
            Some(raw) => parse_hours(raw).ok_or_else(|| invalid(row, "invalid hours spent"))?,
            None => 0.0,
        };

        let difficulty_rating = match self.difficulty_rating.as_deref() {
            Some(raw) => Some(
                raw.parse::<u8>()
                    .ok()
                    .filter(|rating| (1..=5).contains(rating))
                    .ok_or_else(|| invalid(row, "difficulty rating must be 1-5"))?,
            ),
            None => None,
        };

        let updated_at = self
            .updated_at
            .as_deref()
            .and_then(parse_datetime)
            .ok_or_else(|| invalid(row, "progress rows require a valid 'Updated At'"))?;

        Ok(ProgressFields {
            status,
            hours_spent,
            notes: self.notes.clone(),
            difficulty_rating,
            started_at: self.started_at.as_deref().and_then(parse_datetime),
            completed_at: self.completed_at.as_deref().and_then(parse_datetime),
            updated_at,
        })
    }
}

fn invalid(row: usize, message: &str) -> HistoryImportError {
    HistoryImportError::InvalidRow {
        row,
        message: message.to_string(),
    }
}

fn parse_status(value: &str) -> Option<ProgressStatus> {
    match value.trim().to_ascii_lowercase().as_str() {
        "not_started" => Some(ProgressStatus::NotStarted),
        "started" => Some(ProgressStatus::Started),
        "in_progress" => Some(ProgressStatus::InProgress),
        "completed" => Some(ProgressStatus::Completed),
        _ => None,
    }
}

fn parse_hours(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    None
}
