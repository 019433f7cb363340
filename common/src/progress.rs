//! 解析中の擬似プログレス
//!
//! サーバーは進捗を返さないので、一定間隔でステップを進めるだけ。

/// ステップを進める間隔(ms)
pub const STEP_INTERVAL_MS: u32 = 800;

pub const STEPS: &[&str] = &["Uploading", "Processing", "Analyzing", "Generating Response"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSimulation {
    completed: usize,
}

impl ProgressSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1ステップ進める。最後まで進んでいたら`false`
    pub fn tick(&mut self) -> bool {
        if self.completed < STEPS.len() {
            self.completed += 1;
            true
        } else {
            false
        }
    }

    /// 0.0〜1.0
    pub fn fraction(&self) -> f32 {
        self.completed as f32 / STEPS.len() as f32
    }

    /// ステップが有効表示か（最初のステップは開始時から有効）
    pub fn is_step_active(&self, index: usize) -> bool {
        index == 0 || index < self.completed
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= STEPS.len()
    }
}
