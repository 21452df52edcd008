use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_events::CloudinaryConfig;

pub use core_config::Environment;

/// Everything the server reads from the environment at start-up
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `None` when no `CLOUDINARY_*` variables are set; image uploads then fail per request
    pub cloudinary: Option<CloudinaryConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let cloudinary = if cloudinary_configured() {
            Some(CloudinaryConfig::from_env()?)
        } else {
            None
        };

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            cloudinary,
        })
    }
}

fn cloudinary_configured() -> bool {
    env_optional("CLOUDINARY_URL").is_some() || env_optional("CLOUDINARY_CLOUD_NAME").is_some()
}
