use std::future::Future;

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Select};

use entities::identity_zone::{Column, Entity, Model};

#[derive(Clone)]
pub struct IdentityZoneAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> IdentityZoneAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait IdentityZoneQuery {
    fn get_by_subdomain(
        self,
        subdomain: &str,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl IdentityZoneQuery for IdentityZoneAdapter<'_> {
    async fn get_by_subdomain(self, subdomain: &str) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Subdomain.eq(subdomain.to_lowercase()))
            .one(self.db)
            .await
    }
}
