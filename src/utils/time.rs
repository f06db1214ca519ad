//! Time utilities: break duration rounding, ISO-8601 timestamps, display formats.

use chrono::{DateTime, Local, SecondsFormat, Utc};

const MS_PER_MINUTE: i64 = 60_000;

/// Whole minutes elapsed between `start` and `end`, rounded half-up to the
/// nearest minute. A clock that went backwards yields 0, never a negative value.
pub fn rounded_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let ms = (end - start).num_milliseconds().max(0);
    (ms + MS_PER_MINUTE / 2) / MS_PER_MINUTE
}

/// RFC 3339 UTC with millisecond precision, e.g. `2025-01-01T09:00:00.000Z`.
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Local wall-clock rendering used by the CLI tables.
pub fn to_local_display(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Serde adapter writing timestamps through [`to_iso`]; reading accepts any RFC 3339 value.
pub mod iso {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Same as [`iso`] for `badge → timestamp` maps.
pub mod iso_map {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize)]
    struct Iso(#[serde(with = "super::iso")] DateTime<Utc>);

    pub fn serialize<K, S>(map: &BTreeMap<K, DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize + Ord,
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(k, v)| (k, Iso(*v))))
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<BTreeMap<K, DateTime<Utc>>, D::Error>
    where
        K: Deserialize<'de> + Ord,
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<K, Iso>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(k, Iso(v))| (k, v)).collect())
    }
}
