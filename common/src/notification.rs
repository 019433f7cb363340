//! 通知キュー
//!
//! 表示中の通知を作成順に保持する。タイマーやDOMは持たず、
//! 呼び出し側（WASM側）が`Severity::duration_ms`経過後に`dismiss`を呼ぶ。

use serde::{Deserialize, Serialize};

/// 先頭通知の上端位置(px)
pub const STACK_TOP_PX: u32 = 20;

/// 通知1件あたりの縦方向の間隔(px)
pub const STACK_STEP_PX: u32 = 80;

/// 通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
    Emergency,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Emergency => "emergency",
        }
    }

    /// 自動で消えるまでの時間(ms)
    pub fn duration_ms(&self) -> u64 {
        match self {
            Severity::Error => 8_000,
            Severity::Emergency => 10_000,
            _ => 5_000,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
            Severity::Emergency => "🚨",
        }
    }
}

/// 表示中の通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// 作成順に並んだ通知の集合
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知を追加し、そのIDを返す
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// 通知を削除。既に無い場合は`false`
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 通知の上端位置(px)。現在の並び順から計算するので削除後は詰まる
    pub fn top_offset(&self, id: u64) -> Option<u32> {
        self.items
            .iter()
            .position(|n| n.id == id)
            .map(|index| STACK_TOP_PX + STACK_STEP_PX * index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(Severity::Success.duration_ms(), 5_000);
        assert_eq!(Severity::Info.duration_ms(), 5_000);
        assert_eq!(Severity::Warning.duration_ms(), 5_000);
        assert_eq!(Severity::Error.duration_ms(), 8_000);
        assert_eq!(Severity::Emergency.duration_ms(), 10_000);
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("first", Severity::Info);
        let b = queue.push("second", Severity::Error);
        assert!(b > a);
        assert_eq!(queue.len(), 2);

        let second = queue.iter().nth(1).unwrap();
        assert_eq!(second.message, "second");
        assert_eq!(second.severity, Severity::Error);
    }

    #[test]
    fn test_stacking_and_reflow() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("a", Severity::Info);
        let b = queue.push("b", Severity::Info);
        let c = queue.push("c", Severity::Info);
        assert_eq!(queue.top_offset(a), Some(20));
        assert_eq!(queue.top_offset(b), Some(100));
        assert_eq!(queue.top_offset(c), Some(180));

        assert!(queue.dismiss(a));
        assert_eq!(queue.top_offset(a), None);
        assert_eq!(queue.top_offset(b), Some(20));
        assert_eq!(queue.top_offset(c), Some(100));
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("click me", Severity::Success);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("a", Severity::Info);
        queue.dismiss(a);
        let b = queue.push("b", Severity::Info);
        assert_ne!(a, b);
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Emergency).unwrap();
        assert_eq!(json, "\"emergency\"");
    }
}
