//! User repository: insert and read-back of user records.
//!
//! There is no update or delete path. Every read goes to the database.

use crate::Result as DbErrorResult;

use ur_core::{NewUser, User};

use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
        }
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record and return it with its assigned id.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (name, email)
                VALUES (?, ?)
                RETURNING id, name, email
            "#,
        )
        .bind(new_user.name())
        .bind(new_user.email())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// All records, most recently created first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email
                FROM users
                ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
