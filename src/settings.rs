use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub db_path: String,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_settings() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .set_default("db_path", "trivia.sqlite")?
        .add_source(config::Environment::with_prefix("TRIVIA"))
        .build()?
        .try_deserialize()
}
