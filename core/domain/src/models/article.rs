use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::validation::{FieldError, Validate, ValidationError, ValidationResult};

/// Article stored in the `articulos` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Article {
    /// Store-assigned identifier, never changes
    pub id: i64,
    pub name: String,
    /// Retirement date (YYYY-MM-DD)
    pub retirement_date: NaiveDate,
    /// Units in stock
    pub units: i64,
    /// SAP material code, not unique
    pub sap_code: String,
}

/// Request body for creating an article and for replacing one in full
///
/// Every field is required; a partial update is rejected during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateArticle {
    pub name: String,
    /// Retirement date (YYYY-MM-DD)
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub retirement_date: NaiveDate,
    pub units: i64,
    pub sap_code: String,
}

impl Validate for CreateArticle {
    fn validate(&self) -> ValidationResult {
        let mut errors = ValidationError::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(
                ["body", "name"],
                "name must not be blank",
                "string_too_short",
            ));
        }

        errors.into_result()
    }
}

/// Only the zero-padded `YYYY-MM-DD` form; chrono alone also accepts `2025-1-1`
fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(serde::de::Error::custom(format!(
            "invalid date `{}`, expected YYYY-MM-DD",
            s
        )));
    }
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| {
        serde::de::Error::custom(format!("invalid date `{}`: {}", s, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateArticle {
        CreateArticle {
            name: "Widget".to_string(),
            retirement_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            units: 10,
            sap_code: "SAP1".to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(widget().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let payload = CreateArticle {
            name: "   ".to_string(),
            ..widget()
        };

        let err = payload.validate().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].loc, vec!["body", "name"]);
    }

    #[test]
    fn test_empty_sap_code_allowed() {
        let payload = CreateArticle {
            sap_code: String::new(),
            ..widget()
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_deserialize_iso_date() {
        let payload: CreateArticle = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "retirement_date": "2025-01-01",
            "units": 10,
            "sap_code": "SAP1"
        }))
        .unwrap();

        assert_eq!(payload, widget());
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<CreateArticle, _> = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "retirement_date": "2025-01-01",
            "units": 10
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_non_integer_units_rejected() {
        let result: Result<CreateArticle, _> = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "retirement_date": "2025-01-01",
            "units": "ten",
            "sap_code": "SAP1"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_article_serializes_date_as_iso() {
        let article = Article {
            id: 1,
            name: "Widget".to_string(),
            retirement_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            units: 10,
            sap_code: "SAP1".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&article).unwrap(),
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "retirement_date": "2025-01-01",
                "units": 10,
                "sap_code": "SAP1"
            })
        );
    }

    #[test]
    fn test_unpadded_or_non_iso_dates_rejected() {
        for date in ["2025-1-1", "2025-01-1", "01/01/2025", "2025-01-01T00:00:00", "+999-01-01", "2025-02-30"] {
            let result: Result<CreateArticle, _> = serde_json::from_value(serde_json::json!({
                "name": "Widget",
                "retirement_date": date,
                "units": 10,
                "sap_code": "SAP1"
            }));

            assert!(result.is_err(), "{} should be rejected", date);
        }
    }
}
