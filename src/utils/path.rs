use std::env;
use std::path::Path;

use log::error;

/// 提示符里显示的目录，位于 `$HOME` 之下时缩写为 `~`
pub fn prompt_dir() -> String {
    let current_dir = match env::current_dir() {
        Ok(x) => x,
        Err(e) => {
            error!("techsh: PROMPT: env current_dir error: {}", e);
            return String::from("?");
        }
    };
    let home = env::var_os("HOME");
    abbreviate_home(&current_dir, home.as_deref().map(Path::new))
}

pub fn abbreviate_home(dir: &Path, home: Option<&Path>) -> String {
    let home = match home {
        Some(h) if !h.as_os_str().is_empty() && h != Path::new("/") => h,
        _ => return dir.display().to_string(),
    };

    match dir.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => String::from("~"),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => dir.display().to_string(),
    }
}
