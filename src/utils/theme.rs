use colored::Colorize;

pub struct Theme {
    pub welcome_message: String,
    pub exit_message: String,
    pub prompt_style: Box<dyn Fn(String) -> String>,
    pub error_style: Box<dyn Fn(String) -> String>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            welcome_message: String::new(),
            exit_message: String::new(),
            prompt_style: Box::new(|s| s.bright_cyan().to_string()),
            error_style: Box::new(|s| s.bright_red().to_string()),
        }
    }
}

impl Theme {
    pub fn load_theme(theme_name: &str) -> Theme {
        match theme_name {
            "default" => Theme::default(),
            // 无颜色，适合管道和日志
            "plain" => Theme {
                prompt_style: Box::new(|s| s),
                error_style: Box::new(|s| s),
                ..Theme::default()
            },
            "verbose" => Theme {
                welcome_message: "Welcome to techsh. Type `exit` to leave."
                    .bright_green()
                    .to_string(),
                exit_message: "Bye.".bright_blue().to_string(),
                ..Theme::default()
            },
            _ => {
                log::warn!("未知主题 {}，使用默认主题", theme_name);
                Theme::default()
            }
        }
    }

    pub fn prompt(&self, cwd: &str) -> String {
        (self.prompt_style)(format!("{}$ ", cwd))
    }

    pub fn error(&self, message: String) -> String {
        (self.error_style)(message)
    }
}
