use sea_orm_migration::prelude::*;
use uuid::Uuid;

use crate::m20241129_000001_create_users::Users;

/// Password shared by every development account.
pub const SEED_PASSWORD: &str = "password123";

const SEED_HASH_COST: u32 = 10;

struct SeedUser {
    username: &'static str,
    name: &'static str,
    email: &'static str,
    home_address: &'static str,
}

const SEED_USERS: [SeedUser; 5] = [
    SeedUser {
        username: "jsmith",
        name: "John Smith",
        email: "john.smith@example.com",
        home_address: "123 Main St, Miami, FL 33101",
    },
    SeedUser {
        username: "agarcia",
        name: "Ana Garcia",
        email: "ana.garcia@example.com",
        home_address: "456 Oak Ave, Orlando, FL 32801",
    },
    SeedUser {
        username: "mwilson",
        name: "Mike Wilson",
        email: "mike.wilson@example.com",
        home_address: "789 Palm Blvd, Tampa, FL 33601",
    },
    SeedUser {
        username: "slee",
        name: "Sarah Lee",
        email: "sarah.lee@example.com",
        home_address: "321 Pine Rd, Jacksonville, FL 32099",
    },
    SeedUser {
        username: "dchen",
        name: "David Chen",
        email: "david.chen@example.com",
        home_address: "654 Maple Dr, Gainesville, FL 32601",
    },
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let password_hash = bcrypt::hash(SEED_PASSWORD, SEED_HASH_COST)
            .map_err(|e| DbErr::Custom(format!("failed to hash seed password: {}", e)))?;

        let mut insert = Query::insert()
            .into_table(Users::Table)
            .columns([
                Users::Id,
                Users::Username,
                Users::PasswordHash,
                Users::Name,
                Users::Email,
                Users::HomeAddress,
            ])
            .on_conflict(OnConflict::column(Users::Username).do_nothing().to_owned())
            .to_owned();

        for user in &SEED_USERS {
            insert
                .values([
                    Uuid::now_v7().into(),
                    user.username.into(),
                    password_hash.as_str().into(),
                    user.name.into(),
                    user.email.into(),
                    user.home_address.into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::Username).is_in(SEED_USERS.iter().map(|u| u.username)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
