//! Wire schemas for the dashboard backend.
//!
//! This module defines explicit serde types for the four remote responses:
//! - `GET /api/states`
//! - `GET /api/districts?state={id}`
//! - `GET /api/mnrega?state={id}&district={name}`
//! - `GET /api/nearest-district?lat={f}&lon={f}`
//!
//! Payloads are validated before acceptance: a response missing a required
//! field is rejected whole as `ApiError::Invalid`, never partially applied.
//! The backend is loose about id types (numbers in some tables, strings in
//! others), so ids are normalized to strings on decode.

use catalog::{District, Region};
use metrics::{HistoryPoint, MetricsSnapshot, MonthMetrics};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connect, status, timeout).
    Http(String),
    /// Body was not the expected JSON shape.
    Decode(String),
    /// JSON decoded but required fields were missing or empty.
    Invalid(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(msg) => write!(f, "request failed: {msg}"),
            ApiError::Decode(msg) => write!(f, "malformed response: {msg}"),
            ApiError::Invalid(msg) => write!(f, "response missing required fields: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Id fields arrive as JSON numbers or strings depending on the table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Num(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawId::deserialize(de)?.into_string())
}

fn opt_id_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(de)?.map(RawId::into_string))
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatePayload {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_hi: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistrictPayload {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub code: Option<String>,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_hi: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestDistrictPayload {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub state_id: Option<String>,
    #[serde(default)]
    pub state_name_en: String,
    #[serde(default)]
    pub district_name_en: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub district_id: Option<String>,
}

/// A nearest-region lookup that passed validation: both routing fields are
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestRegion {
    pub state_id: String,
    pub state_name_en: String,
    pub district_id: Option<String>,
    pub district_name_en: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthPayload {
    #[serde(default)]
    pub families_worked: Option<i64>,
    #[serde(default)]
    pub avg_wage: Option<f64>,
    #[serde(default)]
    pub total_days: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPayload {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub month: Option<String>,
    #[serde(default)]
    pub families: Option<i64>,
}

/// The mnrega response carries extra fields (e.g. `districtName_hi`); they
/// are ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsPayload {
    #[serde(default, rename = "currentMonth")]
    pub current_month: Option<MonthPayload>,
    #[serde(default, rename = "prevMonth")]
    pub prev_month: Option<MonthPayload>,
    #[serde(default)]
    pub history: Option<Vec<HistoryPayload>>,
}

pub fn parse_states(body: &str) -> Result<Vec<Region>, ApiError> {
    let payload: Vec<StatePayload> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    validate_states(payload)
}

pub fn validate_states(payload: Vec<StatePayload>) -> Result<Vec<Region>, ApiError> {
    payload
        .into_iter()
        .map(|p| {
            if p.id.trim().is_empty() {
                return Err(ApiError::Invalid("state row without id".to_string()));
            }
            if p.name_en.trim().is_empty() {
                return Err(ApiError::Invalid(format!("state {} without name_en", p.id)));
            }
            Ok(Region {
                id: p.id,
                name_en: p.name_en,
                name_hi: p.name_hi,
            })
        })
        .collect()
}

pub fn parse_districts(body: &str) -> Result<Vec<District>, ApiError> {
    let payload: Vec<DistrictPayload> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    validate_districts(payload)
}

pub fn validate_districts(payload: Vec<DistrictPayload>) -> Result<Vec<District>, ApiError> {
    payload
        .into_iter()
        .map(|p| {
            // The server keys districts by `id` in one table and `code` in
            // another; either satisfies the schema.
            let code = p
                .id
                .filter(|c| !c.trim().is_empty())
                .or_else(|| p.code.filter(|c| !c.trim().is_empty()))
                .ok_or_else(|| ApiError::Invalid("district row without id or code".to_string()))?;
            if p.name_en.trim().is_empty() {
                return Err(ApiError::Invalid(format!(
                    "district {code} without name_en"
                )));
            }
            Ok(District {
                code,
                name_en: p.name_en,
                name_hi: p.name_hi,
            })
        })
        .collect()
}

pub fn parse_nearest(body: &str) -> Result<NearestRegion, ApiError> {
    let payload: NearestDistrictPayload =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    validate_nearest(payload)
}

/// An empty or partial object signals "no match"; both routing fields must be
/// non-empty for the lookup to count as resolved.
pub fn validate_nearest(payload: NearestDistrictPayload) -> Result<NearestRegion, ApiError> {
    let state_id = payload
        .state_id
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Invalid("nearest-district without state_id".to_string()))?;
    if payload.district_name_en.trim().is_empty() {
        return Err(ApiError::Invalid(
            "nearest-district without district_name_en".to_string(),
        ));
    }
    Ok(NearestRegion {
        state_id,
        state_name_en: payload.state_name_en,
        district_id: payload.district_id,
        district_name_en: payload.district_name_en,
    })
}

pub fn parse_metrics(body: &str) -> Result<MetricsSnapshot, ApiError> {
    let payload: MetricsPayload =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    validate_metrics(payload)
}

pub fn validate_metrics(payload: MetricsPayload) -> Result<MetricsSnapshot, ApiError> {
    let current_month = month(payload.current_month, "currentMonth")?;
    let prev_month = month(payload.prev_month, "prevMonth")?;
    let history = payload
        .history
        .ok_or_else(|| ApiError::Invalid("metrics without history".to_string()))?
        .into_iter()
        .map(|p| {
            Ok(HistoryPoint {
                month: p
                    .month
                    .filter(|m| !m.trim().is_empty())
                    .ok_or_else(|| ApiError::Invalid("history point without month".to_string()))?,
                families: p
                    .families
                    .ok_or_else(|| ApiError::Invalid("history point without families".to_string()))?,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(MetricsSnapshot {
        current_month,
        prev_month,
        history,
    })
}

fn month(payload: Option<MonthPayload>, field: &str) -> Result<MonthMetrics, ApiError> {
    let p = payload.ok_or_else(|| ApiError::Invalid(format!("metrics without {field}")))?;
    Ok(MonthMetrics {
        families_worked: p
            .families_worked
            .ok_or_else(|| ApiError::Invalid(format!("{field} without families_worked")))?,
        avg_wage: p
            .avg_wage
            .ok_or_else(|| ApiError::Invalid(format!("{field} without avg_wage")))?,
        total_days: p
            .total_days
            .ok_or_else(|| ApiError::Invalid(format!("{field} without total_days")))?,
    })
}

#[cfg(test)]
mod tests {
    use super::{ApiError, parse_districts, parse_metrics, parse_nearest, parse_states};
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_state_ids_are_normalized_to_strings() {
        let states =
            parse_states(r#"[{"id": 29, "name_en": "Karnataka", "name_hi": "कर्नाटक"}]"#).unwrap();
        assert_eq!(states[0].id, "29");
        assert_eq!(states[0].name_en, "Karnataka");
    }

    #[test]
    fn state_without_name_is_invalid() {
        let err = parse_states(r#"[{"id": "29"}]"#).unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[test]
    fn district_accepts_id_or_code() {
        let by_id = parse_districts(r#"[{"id": 7, "name_en": "Mysuru", "name_hi": "x"}]"#).unwrap();
        assert_eq!(by_id[0].code, "7");

        let by_code =
            parse_districts(r#"[{"code": "MYS", "name_en": "Mysuru", "name_hi": "x"}]"#).unwrap();
        assert_eq!(by_code[0].code, "MYS");
    }

    #[test]
    fn district_without_any_id_is_invalid() {
        let err = parse_districts(r#"[{"name_en": "Mysuru"}]"#).unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[test]
    fn nearest_with_empty_state_id_is_invalid() {
        let err = parse_nearest(r#"{"state_id": "", "district_name_en": "X"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[test]
    fn nearest_empty_object_is_invalid_not_a_crash() {
        let err = parse_nearest("{}").unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[test]
    fn nearest_full_payload_resolves() {
        let near = parse_nearest(
            r#"{"state_id": 29, "state_name_en": "Karnataka",
                "district_name_en": "Mysuru", "district_id": 7}"#,
        )
        .unwrap();
        assert_eq!(near.state_id, "29");
        assert_eq!(near.district_name_en, "Mysuru");
        assert_eq!(near.district_id.as_deref(), Some("7"));
    }

    #[test]
    fn metrics_payload_round_trips_with_extra_fields() {
        let snap = parse_metrics(
            r#"{
                "districtName_hi": "मैसूरु",
                "currentMonth": {"families_worked": 120, "avg_wage": 245.5, "total_days": 900,
                                 "year": 2025, "month": 11},
                "prevMonth": {"families_worked": 100, "avg_wage": 240.0, "total_days": 850},
                "history": [{"month": "Jun", "families": 80}, {"month": 7, "families": 90}]
            }"#,
        )
        .unwrap();
        assert_eq!(snap.current_month.families_worked, 120);
        assert_eq!(snap.prev_month.avg_wage, 240.0);
        assert_eq!(snap.history.len(), 2);
        // Numeric month labels are normalized like ids.
        assert_eq!(snap.history[1].month, "7");
    }

    #[test]
    fn metrics_missing_prev_month_is_invalid() {
        let err = parse_metrics(
            r#"{"currentMonth": {"families_worked": 1, "avg_wage": 1.0, "total_days": 1},
                "history": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = parse_states("<html>502</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
