//! Tenza CLI - Command line interface
//!
//! Takes a single expression argument, prints the AST (pretty or JSON) or a
//! positioned diagnostic. Optional configuration from a tenza.json file.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod logging;
mod platform;

use crate::platform::print_error_with_source;
use logging::LogFormat;
use tenza_api::{init_config, parse_with_config, tokenize, RunConfig};
use tenza_config::{LexerConfig, ParserConfig};

/// tenza.json 结构
#[derive(Debug, serde::Deserialize)]
struct TenzaJson {
    /// 解析器限制
    parser: Option<ParserConfig>,
    /// 词法器配置
    lexer: Option<LexerConfig>,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    log_level: Option<String>,
}

#[derive(Parser)]
#[command(
    name = "tenza",
    about = "Tenza expression parser - tensor algebra notation front end",
    version = "0.1.0"
)]
struct Cli {
    /// Expression to parse
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Print the token sequence instead of the AST
    #[arg(long)]
    tokens: bool,

    /// Print output as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path (default: no config file)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, default_value = "silent")]
    log_level: String,

    /// Log format: pretty, compact, json
    #[arg(long, default_value = "compact")]
    log_format: String,
}

fn main() {
    let cli = Cli::parse();

    // Read tenza.json if given
    let file_config = match cli.config.as_deref().map(read_tenza_json) {
        Some(Ok(cfg)) => Some(cfg),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        None => None,
    };

    // CLI flag wins over config file for log level
    let level_name = match (&cli.log_level, &file_config) {
        (level, _) if level != "silent" => level.clone(),
        (_, Some(cfg)) => cfg.log_level.clone().unwrap_or_else(|| "silent".to_string()),
        _ => "silent".to_string(),
    };
    logging::init(
        logging::parse_level(&level_name),
        LogFormat::from_name(&cli.log_format),
    );

    // Build run configuration
    let run_config = build_run_config(file_config);

    // Initialize API config (global singleton for convenience)
    init_config(run_config.clone());

    if cli.tokens {
        run_tokens(&cli, &run_config);
        return;
    }

    match parse_with_config(&cli.expression, &run_config) {
        Ok(Some(ast)) => {
            if cli.json {
                match serde_json::to_string_pretty(&ast) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: cannot serialize AST: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", ast);
            }
        }
        Ok(None) => {
            // 空输入：什么也不打印
        }
        Err(e) => {
            print_error_with_source(&e, &cli.expression);
            process::exit(1);
        }
    }
}

/// 打印 Token 序列
fn run_tokens(cli: &Cli, _config: &RunConfig) {
    match tokenize(&cli.expression) {
        Ok(tokens) => {
            if cli.json {
                match serde_json::to_string_pretty(&tokens) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: cannot serialize tokens: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                for token in &tokens {
                    println!("{:>4}  {:?} {:?}", token.position, token.kind, token.lexeme);
                }
            }
        }
        Err(e) => {
            print_error_with_source(&e, &cli.expression);
            process::exit(1);
        }
    }
}

/// 读取并反序列化 tenza.json
fn read_tenza_json(path: &Path) -> Result<TenzaJson, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config file '{}': {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid config file '{}': {}", path.display(), e))
}

/// 从配置文件构造运行配置
fn build_run_config(file_config: Option<TenzaJson>) -> RunConfig {
    let mut config = RunConfig::default();
    if let Some(file) = file_config {
        if let Some(parser) = file.parser {
            config.parser = parser;
        }
        if let Some(lexer) = file.lexer {
            config.lexer = lexer;
        }
    }
    config
}
