use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub audio_dir: PathBuf,
    pub db_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| "BOT_TOKEN must be set".to_string())?;

        Ok(Self {
            bot_token,
            audio_dir: lookup("AUDIO_DIR")
                .unwrap_or_else(|| "./audio".to_string())
                .into(),
            db_file: lookup("DB_FILE")
                .unwrap_or_else(|| "./audio_db.json".to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.audio_dir, PathBuf::from("./audio"));
        assert_eq!(config.db_file, PathBuf::from("./audio_db.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "123:abc"),
            ("AUDIO_DIR", "/var/clips"),
            ("DB_FILE", "/var/clips/db.json"),
        ]))
        .unwrap();
        assert_eq!(config.audio_dir, PathBuf::from("/var/clips"));
        assert_eq!(config.db_file, PathBuf::from("/var/clips/db.json"));
    }

    #[test]
    fn test_missing_token() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("BOT_TOKEN", "  ")])).is_err());
    }
}
