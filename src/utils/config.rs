use dotenv::dotenv;
use rustyline::EditMode;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub name: String,
    pub theme: String,
    pub editor_mode: String,
    pub logger_level: String,
    pub logger_dir: PathBuf,
}

impl Config {
    fn get_config_dir() -> PathBuf {
        if let Ok(home) = env::var("HOME") {
            PathBuf::from(home).join(".config/techsh")
        } else {
            PathBuf::from("tmp")
        }
    }

    fn default() -> Self {
        let config_dir = Self::get_config_dir();
        Config {
            name: env!("CARGO_PKG_NAME").to_string(),
            theme: String::from("default"),
            editor_mode: String::from("emacs"),
            logger_level: String::from("warn"),
            logger_dir: config_dir.join("logs"),
        }
    }

    pub fn new() -> Self {
        // 优先加载 .env 文件
        if cfg!(debug_assertions) {
            dotenv::from_filename(".env.development").ok();
        } else {
            dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 在默认配置上叠加 `TECHSH_*` 变量
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(theme) = lookup("TECHSH_THEME") {
            config.theme = theme;
        }

        if let Some(editor) = lookup("TECHSH_EDITOR") {
            config.editor_mode = editor;
        }

        if let Some(level) = lookup("TECHSH_LOG_LEVEL") {
            config.logger_level = level;
        }

        if let Some(dir) = lookup("TECHSH_LOG_DIR") {
            config.logger_dir = PathBuf::from(shellexpand::tilde(&dir).as_ref());
        }

        config
    }

    pub fn get_edit_mode(&self) -> EditMode {
        match self.editor_mode.to_lowercase().as_str() {
            "vi" => EditMode::Vi,
            _ => EditMode::Emacs,
        }
    }
}
