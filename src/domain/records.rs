//! Records as the backend returns them.
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "createdAt", default, deserialize_with = "created_at")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub designation: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "createdAt", default, deserialize_with = "created_at")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    #[serde(rename = "createdAt", default, deserialize_with = "created_at")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscriber {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "createdAt", default, deserialize_with = "created_at")]
    pub created_at: Option<NaiveDateTime>,
}

// The backend writes naive ISO-8601 timestamps; anything with an offset is
// normalised to UTC. Unreadable values, strings or not, are dropped rather than
// failing the list.
fn created_at<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(timestamp)) => parse_timestamp(&timestamp),
        _ => None,
    })
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}
