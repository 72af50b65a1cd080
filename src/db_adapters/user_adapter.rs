use std::future::Future;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    Select, Set, SqlErr,
};
use uuid::Uuid;

use entities::user::{ActiveModel, Column, Entity, Model};

pub const DEFAULT_ORIGIN: &str = "uaa";

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_zone(self, zone_id: &str) -> Self;
    fn filter_eq_is_verified(self, is_verified: bool) -> Self;
}

impl UserFilter for UserAdapter<'_> {
    fn filter_eq_zone(mut self, zone_id: &str) -> Self {
        self.query = self.query.filter(Column::ZoneId.eq(zone_id));
        self
    }

    fn filter_eq_is_verified(mut self, is_verified: bool) -> Self {
        self.query = self.query.filter(Column::IsVerified.eq(is_verified));
        self
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl UserQuery for UserAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_email(self, email: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(normalize_email(&email)))
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub zone_id: String,
    pub email: String,
    /// Plain text; hashed before it is stored.
    pub password: String,
    pub given_name: String,
    pub family_name: String,
    pub origin: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateUserOutcome {
    Created(Model),
    /// The email is already registered in the zone; carries the stored record.
    Conflict(Model),
}

pub trait UserMutation {
    fn create(
        self,
        params: CreateUserParams,
    ) -> impl Future<Output = Result<CreateUserOutcome, DbErr>>;
    fn verify(self, user_id: Uuid) -> impl Future<Output = Result<Model, DbErr>>;
}

impl UserMutation for UserAdapter<'_> {
    async fn create(self, params: CreateUserParams) -> Result<CreateUserOutcome, DbErr> {
        let email = normalize_email(&params.email);
        let now = Utc::now();
        let inserted = ActiveModel {
            id: Set(Uuid::now_v7()),
            zone_id: Set(params.zone_id.clone()),
            email: Set(email.clone()),
            password: Set(hash_password(params.password.as_bytes())?),
            given_name: Set(params.given_name),
            family_name: Set(params.family_name),
            origin: Set(params.origin),
            is_verified: Set(false),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(user) => Ok(CreateUserOutcome::Created(user)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Entity::find()
                    .filter(Column::ZoneId.eq(params.zone_id))
                    .filter(Column::Email.eq(email))
                    .one(self.db)
                    .await?
                    .map(CreateUserOutcome::Conflict)
                    .ok_or(e),
                _ => Err(e),
            },
        }
    }

    async fn verify(self, user_id: Uuid) -> Result<Model, DbErr> {
        let user = Entity::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("user {}", user_id)))?;
        let mut user = user.into_active_model();
        user.is_verified = Set(true);
        user.is_active = Set(true);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }
}

/// Addresses are stored lowercased so one mailbox maps to one identity per zone.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[tracing::instrument(name = "Hashing user password", skip(password))]
fn hash_password(password: &[u8]) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password, &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Unable to hash password: {}", e)))
}
