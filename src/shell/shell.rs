use log::{debug, error, warn};
use std::error::Error;
use std::io::Write;

use crate::shell::executor::{Executor, Flow};
use crate::shell::parser::parse;
use crate::shell::readline::{ReadlineError, ReadlineManager};
use crate::utils::config::Config;
use crate::utils::path::prompt_dir;
use crate::utils::theme::Theme;

pub struct Shell<'a> {
    theme: &'a Theme,
    readline: ReadlineManager,
    executor: Executor<'a>,
}

impl<'a> Shell<'a> {
    pub fn new(config: &'a Config, theme: &'a Theme) -> Result<Self, ReadlineError> {
        Ok(Self {
            theme,
            readline: ReadlineManager::new(config)?,
            executor: Executor::new(theme),
        })
    }

    /// 返回进程的退出码
    pub fn run(&mut self) -> Result<i32, Box<dyn Error>> {
        debug!("初始化 techsh...");
        if !self.theme.welcome_message.is_empty() {
            println!("{}", self.theme.welcome_message);
        }

        let code = self.run_loop()?;

        if !self.theme.exit_message.is_empty() {
            println!("{}", self.theme.exit_message);
        }
        debug!("退出 techsh, 退出码 {}", code);
        Ok(code)
    }

    fn run_loop(&mut self) -> Result<i32, Box<dyn Error>> {
        loop {
            std::io::stdout().flush()?;
            let prompt = self.theme.prompt(&prompt_dir());

            match self.readline.readline(&prompt) {
                Ok(line) => {
                    if let Flow::Exit(code) = self.handle_input(&line) {
                        return Ok(code);
                    }
                }
                Err(ReadlineError::Eof) => {
                    warn!("接收到 EOF，退出 techsh...");
                    return Ok(0);
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("接收到中断信号，丢弃当前输入");
                }
                Err(err) => {
                    error!("读取输入失败: {}", err);
                    eprintln!("{}", self.theme.error(format!("techsh: {}", err)));
                    return Err(err.into());
                }
            }
        }
    }

    fn handle_input(&self, line: &str) -> Flow {
        self.executor.execute(&parse(line))
    }
}
