pub mod access_test;
pub mod auth_flow;
pub mod catalog_test;
pub mod directors_test;
pub mod health_test;
pub mod movies_test;

use movie_catalog::entities::v1::movies::Genre;
use movie_catalog::prelude::NaiveDate;
use movie_catalog::requests::v1::movie::MovieStoreRequest;

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

pub fn movie(title: &str) -> MovieStoreRequest {
    MovieStoreRequest {
        title: title.to_string(),
        description: format!("{title} description"),
        date_of_release: NaiveDate::from_ymd_opt(1979, 5, 25).unwrap(),
        genre: Genre::ScienceFiction,
        duration: 117,
        director_id: None,
    }
}
