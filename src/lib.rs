//! QuickAid CLIクライアント
//!
//! Web版と同じ検証ルールで入力を確認してからバックエンドへ送る。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
