use std::str::Split;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Word(String),
    Redirect(RedirectOp),
    EOF,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RedirectOp {
    Input,  // <
    Output, // >
}

/// 只按空格切分，不支持制表符、引号和转义
pub struct Lexer<'a> {
    input: Split<'a, char>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.split(' '),
        }
    }

    pub fn next_token(&mut self) -> Token {
        match self.next_raw() {
            None => Token::EOF,
            Some(word) => match word {
                "<" => Token::Redirect(RedirectOp::Input),
                ">" => Token::Redirect(RedirectOp::Output),
                _ => Token::Word(word.to_string()),
            },
        }
    }

    /// 重定向目标按原文读取，即使它本身是 `<` 或 `>`
    pub fn next_word(&mut self) -> Option<String> {
        self.next_raw().map(str::to_string)
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        // 连续空格会切出空串，跳过
        self.input.by_ref().find(|word| !word.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_command() {
        let mut lexer = Lexer::new("ls -l");
        assert_eq!(lexer.next_token(), Token::Word("ls".to_string()));
        assert_eq!(lexer.next_token(), Token::Word("-l".to_string()));
        assert_eq!(lexer.next_token(), Token::EOF);
    }

    #[test]
    fn test_runs_of_spaces() {
        let mut lexer = Lexer::new("   echo    hi  ");
        assert_eq!(lexer.next_token(), Token::Word("echo".to_string()));
        assert_eq!(lexer.next_token(), Token::Word("hi".to_string()));
        assert_eq!(lexer.next_token(), Token::EOF);
        assert_eq!(lexer.next_token(), Token::EOF);
    }

    #[test]
    fn test_redirections() {
        let mut lexer = Lexer::new("sort < in.txt > out.txt");
        assert_eq!(lexer.next_token(), Token::Word("sort".to_string()));
        assert_eq!(lexer.next_token(), Token::Redirect(RedirectOp::Input));
        assert_eq!(lexer.next_token(), Token::Word("in.txt".to_string()));
        assert_eq!(lexer.next_token(), Token::Redirect(RedirectOp::Output));
        assert_eq!(lexer.next_token(), Token::Word("out.txt".to_string()));
        assert_eq!(lexer.next_token(), Token::EOF);
    }

    #[test]
    fn test_operator_must_be_whole_token() {
        let mut lexer = Lexer::new("echo a>b <c >>d");
        assert_eq!(lexer.next_token(), Token::Word("echo".to_string()));
        assert_eq!(lexer.next_token(), Token::Word("a>b".to_string()));
        assert_eq!(lexer.next_token(), Token::Word("<c".to_string()));
        assert_eq!(lexer.next_token(), Token::Word(">>d".to_string()));
        assert_eq!(lexer.next_token(), Token::EOF);
    }

    #[test]
    fn test_tabs_and_quotes_are_not_special() {
        let mut lexer = Lexer::new("echo \"a\tb\" 'c'");
        assert_eq!(lexer.next_token(), Token::Word("echo".to_string()));
        assert_eq!(lexer.next_token(), Token::Word("\"a\tb\"".to_string()));
        assert_eq!(lexer.next_token(), Token::Word("'c'".to_string()));
        assert_eq!(lexer.next_token(), Token::EOF);
    }

    #[test]
    fn test_next_word_reads_operator_verbatim() {
        let mut lexer = Lexer::new("> >");
        assert_eq!(lexer.next_token(), Token::Redirect(RedirectOp::Output));
        assert_eq!(lexer.next_word(), Some(">".to_string()));
        assert_eq!(lexer.next_word(), None);
    }
}
