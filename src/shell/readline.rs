use crate::utils::config::Config;
use log::{debug, error};
pub use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use rustyline::Config as RLConfig;

/// 不保存历史记录，只负责读一行
pub struct ReadlineManager {
    editor: Editor<(), DefaultHistory>,
}

impl ReadlineManager {
    pub fn new(config: &Config) -> Result<Self, ReadlineError> {
        let rl_config = RLConfig::builder()
            .auto_add_history(false)
            .edit_mode(config.get_edit_mode())
            .build();

        let editor = Editor::with_config(rl_config).map_err(|err| {
            error!("无法初始化 readline: {}", err);
            err
        })?;
        debug!("readline 初始化完成, 编辑模式: {}", config.editor_mode);
        Ok(Self { editor })
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.editor.readline(prompt)
    }
}
