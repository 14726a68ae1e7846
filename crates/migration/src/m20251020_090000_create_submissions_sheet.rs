use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    // Append order of the sheet. Rows are never renumbered.
                    .col(pk_auto(Submissions::Row))
                    // Not unique: a hand-edited sheet may repeat an id.
                    .col(text(Submissions::Id).default(""))
                    .col(text(Submissions::Parent1Title).default(""))
                    .col(text(Submissions::Parent1FullName).default(""))
                    .col(text(Submissions::Parent1Phone).default(""))
                    .col(text(Submissions::Parent2Title).default(""))
                    .col(text(Submissions::Parent2FullName).default(""))
                    .col(text(Submissions::Parent2Phone).default(""))
                    .col(text(Submissions::Parent3Title).default(""))
                    .col(text(Submissions::Parent3FullName).default(""))
                    .col(text(Submissions::Parent3Phone).default(""))
                    .col(text(Submissions::Student1Title).default(""))
                    .col(text(Submissions::Student1FullName).default(""))
                    .col(text(Submissions::Student1Program).default(""))
                    .col(text(Submissions::Student1ClassName).default(""))
                    .col(text(Submissions::Student2Title).default(""))
                    .col(text(Submissions::Student2FullName).default(""))
                    .col(text(Submissions::Student2Program).default(""))
                    .col(text(Submissions::Student2ClassName).default(""))
                    .col(text(Submissions::Student3Title).default(""))
                    .col(text(Submissions::Student3FullName).default(""))
                    .col(text(Submissions::Student3Program).default(""))
                    .col(text(Submissions::Student3ClassName).default(""))
                    .col(text(Submissions::Attendance).default(""))
                    .col(text(Submissions::SubmissionDate).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_id")
                    .table(Submissions::Table)
                    .col(Submissions::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Row,
    Id,
    Parent1Title,
    Parent1FullName,
    Parent1Phone,
    Parent2Title,
    Parent2FullName,
    Parent2Phone,
    Parent3Title,
    Parent3FullName,
    Parent3Phone,
    Student1Title,
    Student1FullName,
    Student1Program,
    Student1ClassName,
    Student2Title,
    Student2FullName,
    Student2Program,
    Student2ClassName,
    Student3Title,
    Student3FullName,
    Student3Program,
    Student3ClassName,
    Attendance,
    SubmissionDate,
}
