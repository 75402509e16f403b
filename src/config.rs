use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, resolved from defaults and the process environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    /// Create the `users` table on connect when it does not exist yet.
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data.db".to_string(),
            loglevel: "info".to_string(),
            init_schema: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["DATABASE_URL", "LOGLEVEL", "INIT_SCHEMA"]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite_file() {
        let cfg = Config::from_figment(Figment::from(Serialized::defaults(Config::default())))
            .expect("defaults should extract");
        assert_eq!(cfg, Config::default());
        assert!(cfg.database_url.starts_with("sqlite:"));
        assert!(cfg.init_schema);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Serialized::default("database_url", "sqlite::memory:"))
            .merge(Serialized::default("init_schema", false));
        let cfg = Config::from_figment(figment).expect("merged config should extract");
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert!(!cfg.init_schema);
        assert_eq!(cfg.loglevel, "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("DATABASE_URL", "sqlite:/tmp/users.db");
            jail.set_env("LOGLEVEL", "debug");
            jail.set_env("INIT_SCHEMA", "false");
            jail.set_env("UNRELATED", "ignored");

            let cfg = Config::load()?;
            assert_eq!(
                cfg,
                Config {
                    database_url: "sqlite:/tmp/users.db".to_string(),
                    loglevel: "debug".to_string(),
                    init_schema: false,
                }
            );
            Ok(())
        });
    }

    #[test]
    fn missing_environment_keeps_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("LOGLEVEL", "warn");

            let cfg = Config::load()?;
            assert_eq!(cfg.loglevel, "warn");
            assert_eq!(cfg.database_url, Config::default().database_url);
            assert!(cfg.init_schema);
            Ok(())
        });
    }
}
