use log::{debug, warn};
use nix::unistd;
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::process::{self, Stdio};

use crate::shell::error::ShellError;
use crate::shell::parser::Command;
use crate::utils::theme::Theme;

/// 执行一条命令后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub struct Executor<'a> {
    theme: &'a Theme,
}

impl<'a> Executor<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// 除 `exit` 外的所有分支都返回 `Flow::Continue`，错误在这里直接上报
    pub fn execute(&self, command: &Command) -> Flow {
        let Some(program) = command.program() else {
            return Flow::Continue;
        };

        match program {
            "cd" => {
                debug!("执行内建命令: {}", command);
                if let Err(e) = self.builtin_cd(command) {
                    self.report(&e);
                }
                Flow::Continue
            }
            "exit" => {
                debug!("执行内建命令: {}", command);
                Flow::Exit(0)
            }
            _ => {
                debug!("执行外部命令: {}", command);
                if let Err(e) = self.execute_external(program, command) {
                    self.report(&e);
                }
                Flow::Continue
            }
        }
    }

    fn builtin_cd(&self, command: &Command) -> Result<(), ShellError> {
        let path = command
            .arguments
            .get(1)
            .ok_or_else(|| ShellError::MissingOperand {
                command: "cd".to_string(),
            })?;
        unistd::chdir(path.as_str()).map_err(|source| ShellError::ChangeDirectory {
            path: path.clone(),
            source,
        })
    }

    fn execute_external(&self, program: &str, command: &Command) -> Result<(), ShellError> {
        // 先开输出再开输入，打开失败只上报，退回继承父进程的流
        let stdout = match &command.output_redirect {
            Some(path) => self.redirect_or_inherit(open_output(path)),
            None => Stdio::inherit(),
        };
        let stdin = match &command.input_redirect {
            Some(path) => self.redirect_or_inherit(open_input(path)),
            None => Stdio::inherit(),
        };

        let mut child = process::Command::new(program)
            .args(&command.arguments[1..])
            .stdin(stdin)
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ShellError::Spawn {
                program: program.to_string(),
                source,
            })?;
        debug!("子进程已启动: pid={}", child.id());

        let status = child.wait().map_err(|source| ShellError::Wait {
            program: program.to_string(),
            source,
        })?;
        debug!("子进程 {} 已结束: {}", child.id(), status);
        Ok(())
    }

    fn redirect_or_inherit(&self, file: Result<File, ShellError>) -> Stdio {
        match file {
            Ok(file) => Stdio::from(file),
            Err(e) => {
                self.report(&e);
                Stdio::inherit()
            }
        }
    }

    fn report(&self, err: &ShellError) {
        warn!("{}", err);
        eprintln!("{}", self.theme.error(err.to_string()));
    }
}

fn open_output(path: &str) -> Result<File, ShellError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
        .map_err(|source| ShellError::Redirect {
            path: path.to_string(),
            source,
        })
}

fn open_input(path: &str) -> Result<File, ShellError> {
    File::open(path).map_err(|source| ShellError::Redirect {
        path: path.to_string(),
        source,
    })
}
