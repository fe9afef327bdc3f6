use serde::Deserialize;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub rating: f64,
    pub comment: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFeedbackRequest {
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

/// 评分必须在 [MIN_RATING, MAX_RATING] 区间内
pub fn validate_rating(rating: f64) -> Result<(), String> {
    if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        ))
    }
}

impl CreateFeedbackRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_rating(self.rating)
    }
}

impl UpdateFeedbackRequest {
    pub fn validate(&self) -> Result<(), String> {
        match self.rating {
            Some(rating) => validate_rating(rating),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.5).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(-0.5).is_err());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_update_without_rating_is_valid() {
        let req = UpdateFeedbackRequest {
            rating: None,
            comment: Some("better now".into()),
        };
        assert!(req.validate().is_ok());
    }
}
