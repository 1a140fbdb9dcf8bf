use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{
    ColumnDef, ForeignKeyAction, ForeignKeyCreateStatement, Index, Table,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Couples {
    Table,
    Id,
    WeddingDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    CoupleId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserCredentials {
    Table,
    Id,
    UserId,
    Email,
    PasswordHash,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Todos {
    Table,
    Id,
    CoupleId,
    Content,
    DueDate,
    IsCompleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Vendors {
    Table,
    Id,
    CoupleId,
    Name,
    Category,
    Contact,
    Cost,
    Pros,
    Cons,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BudgetItems {
    Table,
    Id,
    CoupleId,
    Category,
    Item,
    Amount,
    PaidBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum WishlistItems {
    Table,
    Id,
    CoupleId,
    ItemName,
    ItemUrl,
    Price,
    IsPurchased,
    CreatedAt,
    UpdatedAt,
}

fn created_at<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

fn big_id<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn couple_fk<T: Iden + 'static>(table: T, col: T, name: &str) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Couples::Table, Couples::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // couples
        manager
            .create_table(
                Table::create()
                    .table(Couples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Couples::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Couples::WeddingDate).date().null())
                    .col(created_at(Couples::CreatedAt))
                    .col(created_at(Couples::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::CoupleId).string().null())
                    .col(created_at(Users::CreatedAt))
                    .col(created_at(Users::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_couple_id")
                            .from(Users::Table, Users::CoupleId)
                            .to(Couples::Table, Couples::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_users_couple_id")
                    .table(Users::Table)
                    .col(Users::CoupleId)
                    .to_owned(),
            )
            .await?;

        // user_credentials
        manager
            .create_table(
                Table::create()
                    .table(UserCredentials::Table)
                    .if_not_exists()
                    .col(big_id(UserCredentials::Id))
                    .col(ColumnDef::new(UserCredentials::UserId).string().not_null())
                    .col(
                        ColumnDef::new(UserCredentials::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserCredentials::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserCredentials::LastLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(created_at(UserCredentials::CreatedAt))
                    .col(created_at(UserCredentials::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_credentials_user_id")
                            .from(UserCredentials::Table, UserCredentials::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_user_credentials_user_id")
                    .table(UserCredentials::Table)
                    .col(UserCredentials::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // todos
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(big_id(Todos::Id))
                    .col(ColumnDef::new(Todos::CoupleId).string().not_null())
                    .col(ColumnDef::new(Todos::Content).text().not_null())
                    .col(ColumnDef::new(Todos::DueDate).date().null())
                    .col(
                        ColumnDef::new(Todos::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(created_at(Todos::CreatedAt))
                    .col(created_at(Todos::UpdatedAt))
                    .foreign_key(&mut couple_fk(
                        Todos::Table,
                        Todos::CoupleId,
                        "fk_todos_couple_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // vendors
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(big_id(Vendors::Id))
                    .col(ColumnDef::new(Vendors::CoupleId).string().not_null())
                    .col(ColumnDef::new(Vendors::Name).string().not_null())
                    .col(ColumnDef::new(Vendors::Category).string_len(32).not_null())
                    .col(ColumnDef::new(Vendors::Contact).string().null())
                    .col(ColumnDef::new(Vendors::Cost).big_integer().null())
                    .col(ColumnDef::new(Vendors::Pros).text().null())
                    .col(ColumnDef::new(Vendors::Cons).text().null())
                    .col(ColumnDef::new(Vendors::Status).string().not_null())
                    .col(created_at(Vendors::CreatedAt))
                    .col(created_at(Vendors::UpdatedAt))
                    .foreign_key(&mut couple_fk(
                        Vendors::Table,
                        Vendors::CoupleId,
                        "fk_vendors_couple_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // budget_items
        manager
            .create_table(
                Table::create()
                    .table(BudgetItems::Table)
                    .if_not_exists()
                    .col(big_id(BudgetItems::Id))
                    .col(ColumnDef::new(BudgetItems::CoupleId).string().not_null())
                    .col(ColumnDef::new(BudgetItems::Category).string().not_null())
                    .col(ColumnDef::new(BudgetItems::Item).string().not_null())
                    .col(ColumnDef::new(BudgetItems::Amount).big_integer().not_null())
                    .col(ColumnDef::new(BudgetItems::PaidBy).string().not_null())
                    .col(created_at(BudgetItems::CreatedAt))
                    .col(created_at(BudgetItems::UpdatedAt))
                    .foreign_key(&mut couple_fk(
                        BudgetItems::Table,
                        BudgetItems::CoupleId,
                        "fk_budget_items_couple_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // wishlist_items
        manager
            .create_table(
                Table::create()
                    .table(WishlistItems::Table)
                    .if_not_exists()
                    .col(big_id(WishlistItems::Id))
                    .col(ColumnDef::new(WishlistItems::CoupleId).string().not_null())
                    .col(ColumnDef::new(WishlistItems::ItemName).string().not_null())
                    .col(ColumnDef::new(WishlistItems::ItemUrl).text().null())
                    .col(ColumnDef::new(WishlistItems::Price).big_integer().null())
                    .col(
                        ColumnDef::new(WishlistItems::IsPurchased)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(created_at(WishlistItems::CreatedAt))
                    .col(created_at(WishlistItems::UpdatedAt))
                    .foreign_key(&mut couple_fk(
                        WishlistItems::Table,
                        WishlistItems::CoupleId,
                        "fk_wishlist_items_couple_id",
                    ))
                    .to_owned(),
            )
            .await?;

        // Every group-scoped list is read as "this couple, newest first".
        manager
            .create_index(
                Index::create()
                    .name("ix_todos_couple_created")
                    .table(Todos::Table)
                    .col(Todos::CoupleId)
                    .col(Todos::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_vendors_couple_created")
                    .table(Vendors::Table)
                    .col(Vendors::CoupleId)
                    .col(Vendors::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_budget_items_couple_created")
                    .table(BudgetItems::Table)
                    .col(BudgetItems::CoupleId)
                    .col(BudgetItems::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_wishlist_items_couple_created")
                    .table(WishlistItems::Table)
                    .col(WishlistItems::CoupleId)
                    .col(WishlistItems::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // reverse dependency order
        manager
            .drop_table(Table::drop().table(WishlistItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BudgetItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vendors::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Todos::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserCredentials::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Couples::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
