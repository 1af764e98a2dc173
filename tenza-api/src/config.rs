//! 运行配置
//!
//! 为 CLI 提供一个进程级的只读配置单例；库用户应优先使用
//! `parse_with_config(source, &config)` 显式传参。

use once_cell::sync::OnceCell;
use tenza_config::{LexerConfig, ParserConfig};

/// 一次解析调用的完整配置
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub lexer: LexerConfig,
    pub parser: ParserConfig,
}

static CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// 初始化全局配置（只允许一次；重复调用保留首次的值）
pub fn init(config: RunConfig) {
    let _ = CONFIG.set(config);
}

/// 获取全局配置；未初始化时返回默认配置
pub fn config() -> RunConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// 全局配置是否已初始化
pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}
