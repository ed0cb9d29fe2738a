use crate::utils::config::Config;
use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, File};
use std::io::{self, Write};
use std::process;

fn parse_level(level: &str) -> LevelFilter {
    match level {
        level if level.eq_ignore_ascii_case("off") => LevelFilter::Off,
        level if level.eq_ignore_ascii_case("error") => LevelFilter::Error,
        level if level.eq_ignore_ascii_case("warn") => LevelFilter::Warn,
        level if level.eq_ignore_ascii_case("info") => LevelFilter::Info,
        level if level.eq_ignore_ascii_case("debug") => LevelFilter::Debug,
        level if level.eq_ignore_ascii_case("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// 日志只写文件，stdout 留给用户命令
pub fn init_logger(config: &Config) -> io::Result<()> {
    let level = parse_level(&config.logger_level);

    fs::create_dir_all(&config.logger_dir)?;
    let date = Local::now().format("%Y-%m-%d");
    let log_file = config.logger_dir.join(format!("{}_{}.log", config.name, date));
    let file = File::options().create(true).append(true).open(log_file)?;

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[PID:{}][{}] {} - {}",
                process::id(),
                record.level(),
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .filter(None, LevelFilter::Warn)
        .filter(Some(&config.name), level)
        .try_init()
        .map_err(io::Error::other)?;

    log::debug!("日志级别设置为: {}", level);
    Ok(())
}
