use std::net::TcpListener;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use tracing_actix_web::TracingLogger;

use crate::api_client::ApiClient;
use crate::configuration::Settings;
use crate::render::AssetOrigin;
use crate::routes;

// Cookie signing keys are derived from at least this many bytes.
const MIN_SECRET_LENGTH: usize = 64;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        if configuration.application.hmac_secret.expose_secret().len() < MIN_SECRET_LENGTH {
            anyhow::bail!(
                "application.hmac_secret must be at least {} bytes long",
                MIN_SECRET_LENGTH
            );
        }

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        // The OS picks the port when 0 is configured.
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            configuration.backend.client(),
            configuration.backend.asset_origin(),
            configuration.application.hmac_secret,
            configuration.application.secure_cookies,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    api_client: ApiClient,
    asset_origin: AssetOrigin,
    hmac_secret: Secret<String>,
    secure_cookies: bool,
) -> Result<Server, std::io::Error> {
    let api_client = web::Data::new(api_client);
    let asset_origin = web::Data::new(asset_origin);
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(secure_cookies)
                    .build(),
            )
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check::health_check))
            .route(
                "/health_check/backend",
                web::get().to(routes::health_check::backend_health),
            )
            .route("/", web::get().to(routes::home::home))
            .route("/contact", web::post().to(routes::home::submit_contact))
            .route("/newsletter", web::post().to(routes::home::subscribe_newsletter))
            .service(
                web::scope("/admin")
                    .route("", web::get().to(routes::admin::admin_root))
                    .route("/projects", web::get().to(routes::admin::projects_tab))
                    .route("/projects", web::post().to(routes::admin::submit_project))
                    .route("/clients", web::get().to(routes::admin::clients_tab))
                    .route("/clients", web::post().to(routes::admin::submit_client))
                    .route("/contacts", web::get().to(routes::admin::contacts_tab))
                    .route("/newsletters", web::get().to(routes::admin::newsletters_tab))
                    .route("/{form}/add", web::post().to(routes::admin::add_record))
                    .route("/{form}/cancel", web::post().to(routes::admin::cancel_form))
                    .route("/{form}/{id}/edit", web::post().to(routes::admin::edit_record))
                    .route("/{tab}/{id}/delete", web::get().to(routes::admin::confirm_delete))
                    .route("/{tab}/{id}/delete", web::post().to(routes::admin::delete_record)),
            )
            .app_data(api_client.clone())
            .app_data(asset_origin.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
