//! 症状テキストの検証と文字数カウンタ

use crate::error::ValidationError;

/// 最小文字数（trim後）
pub const MIN_SYMPTOMS_LENGTH: usize = 10;

/// カウンタ表示上の上限
pub const MAX_SYMPTOMS_LENGTH: usize = 1000;

/// 入力例（空欄時のプレースホルダに1つ表示）
pub const EXAMPLE_HINTS: &[&str] = &[
    "Person is bleeding from a cut on their hand",
    "Someone fell and hurt their ankle",
    "Child is choking on food",
    "Person burned their hand on stove",
    "Someone is having trouble breathing",
];

/// 症状テキストを検証し、trim済みのテキストを返す
///
/// 文字数はUnicodeスカラー値で数える。
pub fn validate_symptoms(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySymptoms);
    }

    let length = trimmed.chars().count();
    if length < MIN_SYMPTOMS_LENGTH {
        return Err(ValidationError::SymptomsTooShort {
            length,
            min: MIN_SYMPTOMS_LENGTH,
        });
    }

    Ok(trimmed)
}

/// 送信ボタンを有効にできるか
pub fn is_submittable(text: &str) -> bool {
    validate_symptoms(text).is_ok()
}

/// 入力欄が空のときのプレースホルダ
///
/// `seed`は0.0以上1.0未満の乱数（ブラウザでは`Math.random()`）。
pub fn placeholder_with_hint(seed: f64) -> String {
    let index = ((seed.clamp(0.0, 1.0) * EXAMPLE_HINTS.len() as f64) as usize)
        .min(EXAMPLE_HINTS.len() - 1);
    format!(
        "Describe what happened, symptoms, or the emergency situation...\n\nExample: \"{}\"",
        EXAMPLE_HINTS[index]
    )
}

/// カウンタの状態（表示色の切り替えに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    TooShort,
    Ok,
    TooLong,
}

impl CounterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterState::TooShort => "short",
            CounterState::Ok => "ok",
            CounterState::TooLong => "long",
        }
    }
}

/// 文字数カウンタ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomCounter {
    pub length: usize,
    pub state: CounterState,
}

impl SymptomCounter {
    /// 入力値そのもの（trim前）の文字数で数える
    pub fn new(text: &str) -> Self {
        let length = text.chars().count();
        let state = if length < MIN_SYMPTOMS_LENGTH {
            CounterState::TooShort
        } else if length > MAX_SYMPTOMS_LENGTH {
            CounterState::TooLong
        } else {
            CounterState::Ok
        };
        Self { length, state }
    }

    pub fn label(&self) -> String {
        let mut label = format!("{}/{} characters", self.length, MAX_SYMPTOMS_LENGTH);
        if self.state == CounterState::TooShort {
            label.push_str(&format!(" (minimum {} characters)", MIN_SYMPTOMS_LENGTH));
        }
        label
    }
}
