use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Environment overrides come from a .env file when present
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Reads `configuration.{json,toml,yaml,yml}` from the working directory
    settings.merge(config::File::with_name("configuration"))?;

    settings.try_deserialize()
}
