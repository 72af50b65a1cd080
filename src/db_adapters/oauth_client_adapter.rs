use std::future::Future;

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, Select};

use entities::oauth_client::{Column, Entity, Model};

#[derive(Clone)]
pub struct OauthClientAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> OauthClientAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait OauthClientQuery {
    fn get_by_client_id(
        self,
        client_id: String,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl OauthClientQuery for OauthClientAdapter<'_> {
    async fn get_by_client_id(self, client_id: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::ClientId.eq(client_id))
            .one(self.db)
            .await
    }
}
