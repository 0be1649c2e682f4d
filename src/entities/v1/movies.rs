use std::fmt;
use std::str::FromStr;

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::Error;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date_of_release: Date,
    pub genre: Genre,
    /// Minutes
    pub duration: i32,
    pub director_id: Option<i64>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    #[sea_orm(string_value = "ACTION")]
    Action,
    #[sea_orm(string_value = "ADVENTURE")]
    Adventure,
    #[sea_orm(string_value = "ANIMATION")]
    Animation,
    #[sea_orm(string_value = "COMEDY")]
    Comedy,
    #[sea_orm(string_value = "CRIME")]
    Crime,
    #[sea_orm(string_value = "DOCUMENTARY")]
    Documentary,
    #[sea_orm(string_value = "DRAMA")]
    Drama,
    #[sea_orm(string_value = "FANTASY")]
    Fantasy,
    #[sea_orm(string_value = "HORROR")]
    Horror,
    #[sea_orm(string_value = "MUSICAL")]
    Musical,
    #[sea_orm(string_value = "ROMANCE")]
    Romance,
    #[sea_orm(string_value = "SCIENCE_FICTION")]
    ScienceFiction,
    #[sea_orm(string_value = "THRILLER")]
    Thriller,
    #[sea_orm(string_value = "WESTERN")]
    Western,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Adventure => "ADVENTURE",
            Self::Animation => "ANIMATION",
            Self::Comedy => "COMEDY",
            Self::Crime => "CRIME",
            Self::Documentary => "DOCUMENTARY",
            Self::Drama => "DRAMA",
            Self::Fantasy => "FANTASY",
            Self::Horror => "HORROR",
            Self::Musical => "MUSICAL",
            Self::Romance => "ROMANCE",
            Self::ScienceFiction => "SCIENCE_FICTION",
            Self::Thriller => "THRILLER",
            Self::Western => "WESTERN",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, accepts `science-fiction` as well as `SCIENCE_FICTION`
impl FromStr for Genre {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_uppercase().replace('-', "_");

        Self::iter()
            .find(|genre| genre.as_str() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown genre {value}")))
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::directors::Entity",
        from = "Column::DirectorId",
        to = "super::directors::Column::Id",
        on_delete = "SetNull"
    )]
    Director,
    #[sea_orm(has_many = "super::actor_casts::Entity")]
    ActorCasts,
    #[sea_orm(has_many = "super::feedbacks::Entity")]
    Feedbacks,
}

impl Related<super::directors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Director.def()
    }
}

impl Related<super::actor_casts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActorCasts.def()
    }
}

impl Related<super::feedbacks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feedbacks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
