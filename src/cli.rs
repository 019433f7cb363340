use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quickaid")]
#[command(about = "QuickAid - AI first aid assistant client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先サーバーURL（設定ファイルより優先）
    #[arg(long, global = true, env = "QUICKAID_SERVER")]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// サーバーの稼働確認
    Health,

    /// 緊急連絡先を表示
    Contacts,

    /// 応急手当ガイドを表示
    Guide,

    /// 怪我の写真を解析
    Image {
        /// 画像ファイル（JPEG/PNG/GIF/WebP、16MBまで）
        #[arg(required = true)]
        path: PathBuf,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 症状の説明を解析
    Symptoms {
        /// 症状の説明（10文字以上）
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 緊急通報の案内と連絡先を表示
    Emergency {
        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定の表示・変更
    Config {
        /// 接続先サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
