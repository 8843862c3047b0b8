use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_date: Option<String>,
    pub length: Option<f64>,
    pub genre: Option<String>,
    pub poster: String,
    pub director: String,
    pub rating: Option<String>,
    pub watch_again: bool,
    pub cast: Json, // array of cast member names
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
