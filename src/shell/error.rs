use std::io;

use nix::errno::Errno;

/// 用户命令层面的错误，全部在检测处上报，不会终止解释器
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("{command}: missing operand")]
    MissingOperand { command: String },

    #[error("cd: {path}: {}", describe_errno(*source))]
    ChangeDirectory {
        path: String,
        #[source]
        source: Errno,
    },

    #[error("{path}: {}", describe_io(source))]
    Redirect {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{program}: {}", describe_io(source))]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program}: wait failed: {}", describe_io(source))]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// `Error <errno> (<描述>)`
fn describe_errno(errno: Errno) -> String {
    format!("Error {} ({})", errno as i32, errno.desc())
}

fn describe_io(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => describe_errno(Errno::from_raw(code)),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_operand() {
        let err = ShellError::MissingOperand {
            command: "cd".to_string(),
        };
        assert_eq!(err.to_string(), "cd: missing operand");
    }

    #[test]
    fn test_chdir_error_carries_errno() {
        let err = ShellError::ChangeDirectory {
            path: "/nonexistent".to_string(),
            source: Errno::ENOENT,
        };
        assert_eq!(
            err.to_string(),
            "cd: /nonexistent: Error 2 (No such file or directory)"
        );
    }

    #[test]
    fn test_io_error_without_errno() {
        let err = ShellError::Spawn {
            program: "x".to_string(),
            source: io::Error::other("custom"),
        };
        assert_eq!(err.to_string(), "x: custom");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error;

        let err = ShellError::ChangeDirectory {
            path: "/etc/passwd".to_string(),
            source: Errno::ENOTDIR,
        };
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some(Errno::ENOTDIR.to_string())
        );
        let err = ShellError::MissingOperand {
            command: "cd".to_string(),
        };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_with_errno() {
        let err = ShellError::Redirect {
            path: "out.txt".to_string(),
            source: io::Error::from_raw_os_error(13),
        };
        assert_eq!(err.to_string(), "out.txt: Error 13 (Permission denied)");
    }
}
