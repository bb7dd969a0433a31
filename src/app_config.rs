use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    devices: Devices,
    templates: Templates,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("PANEL").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn devices(&self) -> &Devices {
        &self.devices
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    url: String,
    #[serde(default)]
    accept_invalid_certs: bool,
}

impl Server {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

#[derive(Debug, Deserialize)]
pub struct Devices {
    file: String,
}

impl Devices {
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[derive(Debug, Deserialize)]
pub struct Templates {
    directory: String,
    extension: String,
}

impl Templates {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    url: "http://panel.local".to_string(),
                    accept_invalid_certs: false,
                },
                devices: Devices {
                    file: "devices.json".to_string(),
                },
                templates: Templates {
                    directory: "templates".to_string(),
                    extension: "html".to_string(),
                },
            },
        }
    }

    pub fn server_url(mut self, url: String) -> Self {
        self.config.server.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
