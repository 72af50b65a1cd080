use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::init_db, redis::init_redis_pool, settings::types::Settings};
use sea_orm::DbConn;
use server::{get_public_routes, get_routes};
use web_adapters::Mailer;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = init_db(&settings).await.map_err(std::io::Error::other)?;
        let redis_pool = init_redis_pool(&settings).map_err(std::io::Error::other)?;
        let mailer = Mailer::init(&settings.email).map_err(std::io::Error::other)?;

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );
        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, redis_pool, mailer, settings)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: std::net::TcpListener,
    db: DbConn,
    redis_pool: Option<deadpool_redis::Pool>,
    mailer: Mailer,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Compress::default())
            .service(get_routes())
            .configure(get_public_routes)
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(mailer.clone()))
            .app_data(Data::new(settings.clone()));
        match &redis_pool {
            Some(pool) => app.app_data(Data::new(pool.clone())),
            None => app,
        }
    })
    .listen(listener)?
    .run();

    Ok(server)
}
