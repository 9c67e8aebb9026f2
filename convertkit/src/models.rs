use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, fmt::Display};

/// Normalized error returned whenever ConvertKit answers with an error status.
///
/// The wire shape is `{"error": "...", "message": "..."}`. `status_code` is the
/// observed HTTP status and `raw_body` keeps the response body verbatim.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status_code: u16,
    #[serde(rename = "error", default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(skip)]
    pub raw_body: String,
}

impl ErrorResponse {
    pub const NOT_FOUND_TYPE: &'static str = "not_found_error";

    pub(crate) fn not_found(method: &reqwest::Method, path: &str) -> Self {
        Self {
            status_code: 404,
            error_type: Self::NOT_FOUND_TYPE.to_string(),
            message: format!("resource not found or path invalid: {method} {path}"),
            raw_body: String::new(),
        }
    }
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.status_code, self.error_type, self.message
        )
    }
}

/// A calendar date as understood by the ConvertKit API (`yyyy-mm-dd`).
///
/// Anything finer than a day is dropped when converting from a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Returns `None` when the triple is not a valid calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberState {
    Active,
    Cancelled,
}

/// A label applied to subscribers, used to filter and customize list actions.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// An entry point for joining a mailing list, usually an HTML form.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Form {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub embed_js: Option<String>,
    #[serde(default)]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sign_up_button_text: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
}

/// A series of emails a subscriber receives over time (formerly "course").
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Sequence {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Subscriber {
    pub id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    // The subscribe endpoints only send back the id.
    #[serde(rename = "email_address", default)]
    pub email: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Custom fields. ConvertKit reports unset fields as `null`.
    #[serde(default)]
    pub fields: BTreeMap<String, Option<String>>,
}

/// Join entity between a subscriber and a form, sequence or tag.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Subscription {
    pub id: u64,
    pub state: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub source: serde_json::Value,
    #[serde(default)]
    pub referrer: serde_json::Value,
    pub subscribable_id: u64,
    pub subscribable_type: String,
    pub subscriber: Subscriber,
}
