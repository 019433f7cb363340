//! 通知の表示と自動削除

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use quickaid_common::{Notification, NotificationQueue, Severity};

/// 通知キューへのハンドル
///
/// 追加と同時に重要度ごとの削除タイマーを仕掛ける。
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        console::log!(format!("Notification ({}): {}", severity.as_str(), message));

        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return;
        };

        let queue = self.queue;
        Timeout::new(severity.duration_ms() as u32, move || {
            // クリックで既に消えていれば何もしない
            let _ = queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn emergency(&self, message: impl Into<String>) {
        self.show(message, Severity::Emergency);
    }

    /// 表示中の通知（作成順）
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue.with(|q| q.iter().cloned().collect())
    }

    /// 通知の上端位置(px)
    pub fn top_offset(&self, id: u64) -> Option<u32> {
        self.queue.with(|q| q.top_offset(id))
    }
}
