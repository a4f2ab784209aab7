use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employees { Table, Id, FullName, BirthDate, Gender }

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Employees::Table)
                .if_not_exists()
                .col(ColumnDef::new(Employees::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Employees::FullName).string_len(200).not_null())
                .col(ColumnDef::new(Employees::BirthDate).date().not_null())
                .col(ColumnDef::new(Employees::Gender).string_len(6).not_null())
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_employees_gender_full_name")
                .table(Employees::Table)
                .col(Employees::Gender)
                .col(Employees::FullName)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_employees_full_name_birth_date")
                .table(Employees::Table)
                .col(Employees::FullName)
                .col(Employees::BirthDate)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}
