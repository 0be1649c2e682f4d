pub mod sql_injection_test;

pub mod support {
    use movie_catalog::entities::v1::movies::Genre;
    use movie_catalog::prelude::NaiveDate;
    use movie_catalog::requests::v1::movie::MovieStoreRequest;

    pub fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {token}"))
    }

    pub fn movie(title: &str) -> MovieStoreRequest {
        MovieStoreRequest {
            title: title.to_string(),
            description: String::new(),
            date_of_release: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            genre: Genre::Crime,
            duration: 170,
            director_id: None,
        }
    }
}
