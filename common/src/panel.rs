//! 入力パネルの切り替えとキーボードショートカット

/// 入力パネル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Image,
    Symptoms,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Image => "image",
            Panel::Symptoms => "symptoms",
        }
    }

    /// ショートカットで切り替えたときの通知文
    pub fn switch_notice(&self) -> &'static str {
        match self {
            Panel::Image => "Switched to image upload mode",
            Panel::Symptoms => "Switched to symptoms input mode",
        }
    }
}

/// 表示中のパネル（同時に表示されるのは最大1つ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    active: Option<Panel>,
}

impl PanelState {
    pub fn active(&self) -> Option<Panel> {
        self.active
    }

    /// 他を全て隠してから指定パネルを表示
    pub fn show(&mut self, panel: Panel) {
        self.hide_all();
        self.active = Some(panel);
    }

    pub fn hide_all(&mut self) {
        self.active = None;
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.active == Some(panel)
    }
}

/// キーボードショートカット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+1
    ShowImage,
    /// Ctrl+2
    ShowSymptoms,
    /// Ctrl+Enter
    Submit,
    /// Escape
    HideAll,
    /// F1
    Help,
}

impl Shortcut {
    /// `KeyboardEvent.key`とCtrl押下状態から判定
    pub fn from_key(ctrl: bool, key: &str) -> Option<Self> {
        match (ctrl, key) {
            (true, "1") => Some(Shortcut::ShowImage),
            (true, "2") => Some(Shortcut::ShowSymptoms),
            (true, "Enter") => Some(Shortcut::Submit),
            (_, "Escape") => Some(Shortcut::HideAll),
            (_, "F1") => Some(Shortcut::Help),
            _ => None,
        }
    }

    /// ヘルプに表示する一覧
    pub fn help_entries() -> &'static [(&'static str, &'static str)] {
        &[
            ("Ctrl + 1", "Image upload"),
            ("Ctrl + 2", "Symptoms input"),
            ("Ctrl + Enter", "Analyze current input"),
            ("Esc", "Hide all sections"),
            ("F1", "Show this help"),
        ]
    }
}
