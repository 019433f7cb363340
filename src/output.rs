//! 結果の表示と保存

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use quickaid_common::{pretty_json, RenderedResult};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// 通信中のスピナー
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn print_result(title: &str, data: &Value) {
    let rendered = RenderedResult::new(title, data);
    println!("📋 {}\n", rendered.title);
    println!("{}", rendered.body);
}

/// 結果JSONをファイルに保存
pub fn save_result(path: &Path, data: &Value) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, pretty_json(data))?;
    Ok(())
}
