//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和表达式上下文打印。

use tenza_api::TenzaError;

/// 打印错误并显示表达式上下文
pub fn print_error_with_source(e: &TenzaError, source: &str) {
    eprintln!("❌ [{}] {}", e.phase().as_str(), e);

    if let Some(offset) = e.position() {
        print_source_context(source, offset);
    }
}

/// 打印表达式与指向出错偏移的标记
pub fn print_source_context(source: &str, offset: usize) {
    eprintln!("  | {}", source);

    // 标记列按字符偏移计算，越界时夹到行尾
    let marker_offset = offset.min(source.chars().count());
    let marker: String = std::iter::repeat(' ').take(marker_offset).collect();
    eprintln!("  | {}^", marker);
}
