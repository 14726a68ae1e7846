use anyhow::Result;
use async_trait::async_trait;
use rsvp_core::sheet::SheetRow;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::entity::sheet_row;

/// Append-only table of flat rows, read back in append order.
#[async_trait]
pub trait SheetRepository: Send + Sync {
    async fn append(&self, row: SheetRow) -> Result<()>;
    async fn rows(&self) -> Result<Vec<SheetRow>>;
    /// Deletes the first row whose id cell equals `id` exactly. Returns
    /// `false` when no row matches.
    async fn delete_first(&self, id: &str) -> Result<bool>;
}

#[derive(Clone)]
pub struct SeaOrmSheetRepository {
    db: DatabaseConnection,
}

impl SeaOrmSheetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: sheet_row::Model) -> SheetRow {
        SheetRow::from_cells([
            model.id,
            model.parent1_title,
            model.parent1_full_name,
            model.parent1_phone,
            model.parent2_title,
            model.parent2_full_name,
            model.parent2_phone,
            model.parent3_title,
            model.parent3_full_name,
            model.parent3_phone,
            model.student1_title,
            model.student1_full_name,
            model.student1_program,
            model.student1_class_name,
            model.student2_title,
            model.student2_full_name,
            model.student2_program,
            model.student2_class_name,
            model.student3_title,
            model.student3_full_name,
            model.student3_program,
            model.student3_class_name,
            model.attendance,
            model.submission_date,
        ])
    }

    fn map_row(row: SheetRow) -> sheet_row::ActiveModel {
        let mut cells = row.into_cells().into_iter();
        // Fields are evaluated in source order, which is sheet order.
        let mut next = || Set(cells.next().unwrap_or_default());

        sheet_row::ActiveModel {
            id: next(),
            parent1_title: next(),
            parent1_full_name: next(),
            parent1_phone: next(),
            parent2_title: next(),
            parent2_full_name: next(),
            parent2_phone: next(),
            parent3_title: next(),
            parent3_full_name: next(),
            parent3_phone: next(),
            student1_title: next(),
            student1_full_name: next(),
            student1_program: next(),
            student1_class_name: next(),
            student2_title: next(),
            student2_full_name: next(),
            student2_program: next(),
            student2_class_name: next(),
            student3_title: next(),
            student3_full_name: next(),
            student3_program: next(),
            student3_class_name: next(),
            attendance: next(),
            submission_date: next(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl SheetRepository for SeaOrmSheetRepository {
    async fn append(&self, row: SheetRow) -> Result<()> {
        Self::map_row(row).insert(&self.db).await?;
        Ok(())
    }

    async fn rows(&self) -> Result<Vec<SheetRow>> {
        let models = sheet_row::Entity::find()
            .order_by_asc(sheet_row::Column::Row)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn delete_first(&self, id: &str) -> Result<bool> {
        let Some(model) = sheet_row::Entity::find()
            .filter(sheet_row::Column::Id.eq(id))
            .order_by_asc(sheet_row::Column::Row)
            .one(&self.db)
            .await?
        else {
            return Ok(false);
        };

        model.delete(&self.db).await?;
        Ok(true)
    }
}
