// diacritics 命令行工具
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use diacritics::config::Config;
use diacritics::value::handle_line;
use diacritics::DiacriticsEngine;

#[derive(Parser, Debug)]
#[command(name = "diacritics", version, about = "Strip diacritical marks from text")]
struct Args {
    /// 配置文件路径（默认位于系统配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 去除变音符号
    Remove {
        text: String,
        /// 被改动的字符转为小写（不保留大小写）
        #[arg(long)]
        lowercase_changed: bool,
    },
    /// 判断是否含有变音符号
    Check { text: String },
    /// 列出字符的全部变音变体
    Variations {
        #[arg(value_name = "CHAR")]
        ch: String,
    },
    /// 从 stdin 逐行读取 JSON 请求，向 stdout 逐行写出 JSON 响应
    Serve,
    /// 写出默认配置文件
    InitConfig,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let (config, existed) = Config::load_from(&config_path)?;

    init_tracing(&config);
    if !existed {
        tracing::debug!("No config file at {:?}, using defaults", config_path);
    }

    let engine = DiacriticsEngine::new();

    match args.command {
        Command::Remove {
            text,
            lowercase_changed,
        } => {
            let preserve_case = config.preserve_case && !lowercase_changed;
            println!("{}", engine.remove(&text, preserve_case)?);
        }
        Command::Check { text } => {
            println!("{}", engine.has_diacritics(&text)?);
        }
        Command::Variations { ch } => {
            for variant in engine.get_diacritic_variations(&ch)? {
                println!("{}", variant);
            }
        }
        Command::Serve => serve(&engine, config.preserve_case)?,
        Command::InitConfig => {
            Config::default().save_to(&config_path)?;
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

fn serve(engine: &DiacriticsEngine, default_preserve_case: bool) -> Result<()> {
    engine.init_map()?;
    tracing::info!("Serving JSON requests on stdin");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut handled = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(engine, &line, default_preserve_case);
        serde_json::to_writer(&mut out, &response)?;
        out.write_all(b"\n")?;
        out.flush()?;
        handled += 1;
    }

    tracing::info!("stdin closed after {} requests", handled);
    Ok(())
}
