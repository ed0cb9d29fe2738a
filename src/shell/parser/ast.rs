use std::fmt;

/// 一行输入解析出的命令：参数列表加上可选的输入/输出重定向目标。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub arguments: Vec<String>,
    pub input_redirect: Option<String>,
    pub output_redirect: Option<String>,
}

impl Command {
    /// 命令名，即 arguments[0]
    pub fn program(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arguments.join(" "))?;
        if let Some(input) = &self.input_redirect {
            write!(f, " < {}", input)?;
        }
        if let Some(output) = &self.output_redirect {
            write!(f, " > {}", output)?;
        }
        Ok(())
    }
}
