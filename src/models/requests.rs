use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to rank the catalog for a visitor
///
/// Every field carries the reference defaults the mobile client relies
/// on: the Pashupatinath Temple forecourt as the position and
/// "Hindu Temple" as the preferred category. `at` pins the evaluation
/// instant; when absent the server uses its current wall-clock time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[serde(default = "default_latitude")]
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    #[validate(custom(function = "validate_longitude"))]
    pub longitude: f64,
    #[serde(default = "default_category")]
    #[serde(alias = "preferredCategory", rename = "preferred_category")]
    #[validate(length(min = 1))]
    pub preferred_category: String,
    #[serde(default)]
    pub at: Option<chrono::NaiveDateTime>,
}

impl Default for RecommendationsRequest {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            preferred_category: default_category(),
            at: None,
        }
    }
}

fn default_latitude() -> f64 {
    27.7104
}

fn default_longitude() -> f64 {
    85.3487
}

fn default_category() -> String {
    "Hindu Temple".to_string()
}

pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if !lat.is_finite() || lat < -90.0 || lat > 90.0 {
        return Err(ValidationError::new("latitude"));
    }
    Ok(())
}

pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if !lon.is_finite() || lon < -180.0 || lon > 180.0 {
        return Err(ValidationError::new("longitude"));
    }
    Ok(())
}
