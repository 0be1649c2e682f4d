use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::v1::movies::Genre;
use crate::errors::Validation;
use crate::prelude::NaiveDate;
use crate::security::Validator;

pub const TITLE_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 2000;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieStoreRequest {
    #[schema(example = "Alien")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "The crew of a commercial spacecraft encounters a deadly lifeform.")]
    pub description: String,
    #[schema(example = "1979-05-25")]
    pub date_of_release: NaiveDate,
    pub genre: Genre,
    /// Minutes
    #[schema(example = 117)]
    pub duration: i32,
    #[schema(example = 1)]
    pub director_id: Option<i64>,
}

impl MovieStoreRequest {
    pub fn validate(&self) -> Result<(), Validation> {
        let mut validation = Validation::new();

        if let Err(e) = Validator::validate_text("Title", &self.title, 1, TITLE_MAX) {
            validation.add("title", e);
        }

        if let Err(e) = Validator::validate_text("Description", &self.description, 0, DESCRIPTION_MAX) {
            validation.add("description", e);
        }

        if self.duration <= 0 {
            validation.add("duration", "Duration must be greater than 0");
        }

        if matches!(self.director_id, Some(id) if id <= 0) {
            validation.add("directorId", "Director id must be greater than 0");
        }

        if validation.is_empty() { Ok(()) } else { Err(validation) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MovieStoreRequest {
        MovieStoreRequest {
            title: "Alien".to_string(),
            description: "In space no one can hear you scream.".to_string(),
            date_of_release: NaiveDate::from_ymd_opt(1979, 5, 25).unwrap(),
            genre: Genre::Horror,
            duration: 117,
            director_id: Some(1),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
        assert!(
            MovieStoreRequest {
                director_id: None,
                description: String::new(),
                ..request()
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_invalid_fields_are_collected() {
        let errors = MovieStoreRequest {
            title: "  ".to_string(),
            description: "x".repeat(DESCRIPTION_MAX + 1),
            duration: 0,
            director_id: Some(-1),
            ..request()
        }
        .validate()
        .unwrap_err();

        assert!(errors.get("title").is_some());
        assert!(errors.get("description").is_some());
        assert!(errors.get("duration").is_some());
        assert!(errors.get("directorId").is_some());
    }

    #[test]
    fn test_title_length_bound() {
        let at_limit = MovieStoreRequest {
            title: "t".repeat(TITLE_MAX),
            ..request()
        };
        let over = MovieStoreRequest {
            title: "t".repeat(TITLE_MAX + 1),
            ..request()
        };

        assert!(at_limit.validate().is_ok());
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let request: MovieStoreRequest = serde_json::from_str(
            r#"{"title":"Heat","dateOfRelease":"1995-12-15","genre":"CRIME","duration":170}"#,
        )
        .unwrap();

        assert_eq!(request.genre, Genre::Crime);
        assert_eq!(request.director_id, None);
        assert_eq!(request.description, "");
    }
}
