use sea_orm::entity::prelude::*;

/// Aircraft codes live in `aircrafts_data`; the `aircrafts` view in the demo
/// schema only adds a localized model name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircrafts_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub aircraft_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
