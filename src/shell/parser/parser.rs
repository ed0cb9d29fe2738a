use log::debug;

use super::ast::Command;
use super::lexer::{Lexer, RedirectOp, Token};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        // 去掉换行符及其后的内容
        let line = input.split('\n').next().unwrap_or_default();
        let mut lexer = Lexer::new(line);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    fn next_token(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    pub fn parse_command(&mut self) -> Command {
        let mut command = Command::default();

        loop {
            match &self.current_token {
                Token::EOF => break,
                Token::Redirect(op) => {
                    let op = *op;
                    self.parse_redirection(op, &mut command);
                }
                Token::Word(word) => {
                    command.arguments.push(word.clone());
                }
            }
            self.next_token();
        }

        debug!(
            "解析结果: args={:?} input={:?} output={:?}",
            command.arguments, command.input_redirect, command.output_redirect
        );
        command
    }

    /// 行尾悬空的操作符会把对应字段重置为空，重复出现时以最后一个为准
    fn parse_redirection(&mut self, operator: RedirectOp, command: &mut Command) {
        let target = self.lexer.next_word();
        match operator {
            RedirectOp::Input => command.input_redirect = target,
            RedirectOp::Output => command.output_redirect = target,
        }
    }
}

pub fn parse(line: &str) -> Command {
    Parser::new(line).parse_command()
}
