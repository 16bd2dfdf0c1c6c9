use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Format used for every timestamp leaving the API.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub info: String,
    #[serde(serialize_with = "serialize_date")]
    pub created_on: DateTime<Utc>,
    #[serde(serialize_with = "serialize_date")]
    pub updated_on: DateTime<Utc>,
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn serialize_date<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<<{}>> {}, url: {}, details: {}, created on: {}",
            self.id,
            self.name,
            self.url,
            self.info,
            format_date(&self.created_on)
        )
    }
}
