use crate::error::{BurnError, Result};
use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: f64 = 60_000.0;
// Keeps `now + ttl` far away from i64 overflow (about 31,000 years).
const MAX_TTL_MS: f64 = 1e15;

/// The persisted form of a document.
///
/// Stored as JSON with camelCase keys. Earlier deployments wrote `markdown`,
/// `views` and `expiration`; those names are still accepted on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(alias = "markdown")]
    pub content: String,
    /// `None` means unlimited views.
    #[serde(default, alias = "views")]
    pub remaining_views: Option<u64>,
    /// Absolute expiry in epoch milliseconds. `None` means it never expires.
    #[serde(default, alias = "expiration")]
    pub expires_at: Option<i64>,
}

impl DocumentRecord {
    pub fn new(content: String, limits: &Limits, now_ms: i64) -> Self {
        Self {
            content,
            remaining_views: limits.max_views,
            expires_at: limits.ttl.map(|ttl| now_ms.saturating_add(ttl.as_millis())),
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        matches!(self.expires_at, Some(at) if now_ms > at)
    }

    pub fn remaining_time_ms(&self, now_ms: i64) -> Option<i64> {
        self.expires_at.map(|at| (at - now_ms).max(0))
    }

    /// Counts one view against the limit. Returns true when this was the last one.
    pub fn consume_view(&mut self) -> bool {
        match self.remaining_views.as_mut() {
            Some(views) => {
                *views = views.saturating_sub(1);
                *views == 0
            }
            None => false,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(BurnError::Serialization)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(BurnError::Serialization)
    }
}

/// A validated time-to-live, in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtlMinutes(f64);

impl TtlMinutes {
    pub fn new(minutes: f64) -> Result<Self> {
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(BurnError::Validation(
                "ttlMinutes must be a positive number".to_string(),
            ));
        }
        if minutes * MS_PER_MINUTE > MAX_TTL_MS {
            return Err(BurnError::Validation("ttlMinutes is too large".to_string()));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> f64 {
        self.0
    }

    pub fn as_millis(&self) -> i64 {
        ((self.0 * MS_PER_MINUTE).round() as i64).max(1)
    }
}

/// Consumption limits requested at create time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Limits {
    pub max_views: Option<u64>,
    pub ttl: Option<TtlMinutes>,
}

impl Limits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn views(max_views: u64) -> Self {
        Self {
            max_views: Some(max_views),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: TtlMinutes) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Parses raw form input. Missing or blank values mean "no limit";
    /// `"0"` is a real (if degenerate) view limit.
    pub fn parse(max_views: Option<&str>, ttl_minutes: Option<&str>) -> Result<Self> {
        Ok(Self {
            max_views: parse_max_views(max_views)?,
            ttl: parse_ttl_minutes(ttl_minutes)?,
        })
    }
}

fn blank_to_none(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_max_views(raw: Option<&str>) -> Result<Option<u64>> {
    let Some(raw) = blank_to_none(raw) else {
        return Ok(None);
    };
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BurnError::Validation(format!(
            "maxViews must be a non-negative integer, got {:?}",
            raw
        )));
    }
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| BurnError::Validation(format!("maxViews is out of range: {}", raw)))
}

fn parse_ttl_minutes(raw: Option<&str>) -> Result<Option<TtlMinutes>> {
    let Some(raw) = blank_to_none(raw) else {
        return Ok(None);
    };
    let minutes: f64 = raw.parse().map_err(|_| {
        BurnError::Validation(format!("ttlMinutes must be a positive number, got {:?}", raw))
    })?;
    TtlMinutes::new(minutes).map(Some)
}

/// What a successful read hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub content: String,
    pub remaining_views: Option<u64>,
    pub remaining_time_ms: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_blank_means_unlimited() {
        assert_eq!(Limits::parse(None, None).unwrap(), Limits::unlimited());
        assert_eq!(Limits::parse(Some(""), Some("  ")).unwrap(), Limits::unlimited());
    }

    #[test]
    fn parse_zero_views_is_a_limit() {
        let limits = Limits::parse(Some("0"), None).unwrap();
        assert_eq!(limits.max_views, Some(0));
    }

    #[test]
    fn parse_rejects_bad_view_counts() {
        for raw in ["-1", "1.5", "3abc", "abc", "+2"] {
            assert!(
                matches!(Limits::parse(Some(raw), None), Err(BurnError::Validation(_))),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn parse_ttl_accepts_fractions() {
        let limits = Limits::parse(None, Some("0.5")).unwrap();
        assert_eq!(limits.ttl.unwrap().as_millis(), 30_000);
    }

    #[test]
    fn parse_rejects_bad_ttl() {
        for raw in ["0", "-5", "soon", "NaN", "inf", "1e20"] {
            assert!(
                matches!(Limits::parse(None, Some(raw)), Err(BurnError::Validation(_))),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn new_record_computes_absolute_expiry() {
        let limits = Limits::views(3).with_ttl(TtlMinutes::new(2.0).unwrap());
        let record = DocumentRecord::new("hi".into(), &limits, 1_000);
        assert_eq!(record.remaining_views, Some(3));
        assert_eq!(record.expires_at, Some(121_000));
    }

    #[test]
    fn expiry_is_strictly_after_deadline() {
        let record = DocumentRecord {
            content: "x".into(),
            remaining_views: None,
            expires_at: Some(5_000),
        };
        assert!(!record.is_expired(5_000));
        assert!(record.is_expired(5_001));
        assert_eq!(record.remaining_time_ms(4_000), Some(1_000));
        assert_eq!(record.remaining_time_ms(9_000), Some(0));
    }

    #[test]
    fn consume_view_reports_exhaustion() {
        let mut record = DocumentRecord::new("x".into(), &Limits::views(2), 0);
        assert!(!record.consume_view());
        assert!(record.consume_view());
        assert_eq!(record.remaining_views, Some(0));

        let mut zero = DocumentRecord::new("x".into(), &Limits::views(0), 0);
        assert!(zero.consume_view());
        assert_eq!(zero.remaining_views, Some(0));

        let mut unlimited = DocumentRecord::new("x".into(), &Limits::unlimited(), 0);
        assert!(!unlimited.consume_view());
        assert_eq!(unlimited.remaining_views, None);
    }

    #[test]
    fn encodes_with_camel_case_keys() {
        let record = DocumentRecord::new("body".into(), &Limits::views(1), 0);
        let json: serde_json::Value = serde_json::from_slice(&record.encode().unwrap()).unwrap();
        assert_eq!(json["content"], "body");
        assert_eq!(json["remainingViews"], 1);
        assert!(json["expiresAt"].is_null());
    }

    #[test]
    fn decodes_legacy_records() {
        let raw = br##"{"markdown":"# hi","views":2,"expiration":1700000000000}"##;
        let record = DocumentRecord::decode(raw).unwrap();
        assert_eq!(record.content, "# hi");
        assert_eq!(record.remaining_views, Some(2));
        assert_eq!(record.expires_at, Some(1_700_000_000_000));

        let nulls = br#"{"markdown":"x","views":null,"expiration":null}"#;
        let record = DocumentRecord::decode(nulls).unwrap();
        assert_eq!(record.remaining_views, None);
        assert_eq!(record.expires_at, None);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            DocumentRecord::decode(b"not json"),
            Err(BurnError::Serialization(_))
        ));
    }
}
