use sea_orm::entity::prelude::*;

/// One appended sheet row. `row` is the append position; the other columns
/// are the 24 sheet cells in order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub row: i32,
    pub id: String,
    pub parent1_title: String,
    pub parent1_full_name: String,
    pub parent1_phone: String,
    pub parent2_title: String,
    pub parent2_full_name: String,
    pub parent2_phone: String,
    pub parent3_title: String,
    pub parent3_full_name: String,
    pub parent3_phone: String,
    pub student1_title: String,
    pub student1_full_name: String,
    pub student1_program: String,
    pub student1_class_name: String,
    pub student2_title: String,
    pub student2_full_name: String,
    pub student2_program: String,
    pub student2_class_name: String,
    pub student3_title: String,
    pub student3_full_name: String,
    pub student3_program: String,
    pub student3_class_name: String,
    pub attendance: String,
    pub submission_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
