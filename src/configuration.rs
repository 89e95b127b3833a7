use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::api_client::ApiClient;
use crate::render::AssetOrigin;
use crate::transport::TransportMode;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Signs the session and flash-message cookies. Must be at least 64 bytes.
    pub hmac_secret: Secret<String>,
    #[serde(default)]
    pub secure_cookies: bool,
}

#[derive(serde::Deserialize, Clone)]
pub struct BackendSettings {
    /// Root of the upstream REST API, `/api` prefix included.
    pub base_url: String,
    pub deployment: Deployment,
    /// Prefix for image paths the backend returns without a scheme.
    #[serde(default)]
    pub asset_origin: String,
}

impl BackendSettings {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone(), self.deployment.transport_mode())
    }

    pub fn asset_origin(&self) -> AssetOrigin {
        AssetOrigin::new(self.asset_origin.clone())
    }
}

/// Where the backend runs. Serverless hosting cannot take streamed multipart
/// uploads, so uploads are inlined into JSON there.
#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Deployment {
    Local,
    Serverless,
}

impl Deployment {
    pub fn transport_mode(&self) -> TransportMode {
        match self {
            Deployment::Local => TransportMode::Multipart,
            Deployment::Serverless => TransportMode::Json,
        }
    }
}

impl TryFrom<String> for Deployment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "serverless" => Ok(Self::Serverless),
            other => Err(format!(
                "{} is not a supported deployment. Use either `local` or `serverless`.",
                other
            )),
        }
    }
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Read the "default" configuration file
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    // Layer on the environment-specific values.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // E.g. `APP_BACKEND__DEPLOYMENT=serverless` would set `Settings.backend.deployment`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}
