//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header,
    image_panel::ImagePanel,
    notification_stack::NotificationStack,
    progress_bar::LoadingIndicator,
    results_panel::ResultsPanel,
    shortcuts_help::ShortcutsHelp,
    symptoms_panel::SymptomsPanel,
};
use crate::dispatch;
use crate::file_reader::{file_info, read_data_url};
use crate::notify::Notifier;
use gloo::console;
use gloo::events::EventListener;
use leptos::prelude::*;
use quickaid_common::upload::validate_file;
use quickaid_common::{
    Endpoint, FileInfo, Panel, PanelState, RenderedResult, RequestTracker, Shortcut,
};
use wasm_bindgen::JsCast;
use web_sys::{File, KeyboardEvent};

/// 選択中の画像
#[derive(Clone)]
pub struct SelectedFile {
    pub file: File,
    pub info: FileInfo,
}

/// プレビュー表示用の画像
#[derive(Clone, PartialEq)]
pub struct Preview {
    pub file_name: String,
    pub data_url: String,
}

/// アプリケーションの状態
///
/// 全てシグナルのハンドルなのでCopyでコンポーネントに配れる。
#[derive(Clone, Copy)]
pub struct AppContext {
    pub panels: RwSignal<PanelState>,
    pub selected: RwSignal<Option<SelectedFile>, LocalStorage>,
    pub preview: RwSignal<Option<Preview>>,
    pub symptoms: RwSignal<String>,
    pub tracker: RwSignal<RequestTracker>,
    pub result: RwSignal<Option<RenderedResult>>,
    pub show_help: RwSignal<bool>,
    pub notifier: Notifier,
}

impl AppContext {
    fn new() -> Self {
        Self {
            panels: RwSignal::new(PanelState::default()),
            selected: RwSignal::new_local(None),
            preview: RwSignal::new(None),
            symptoms: RwSignal::new(String::new()),
            tracker: RwSignal::new(RequestTracker::new()),
            result: RwSignal::new(None),
            show_help: RwSignal::new(false),
            notifier: Notifier::new(),
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panels.with(|p| p.is_visible(panel))
    }

    /// 他のパネルと結果を隠して指定パネルを表示
    pub fn show_panel(&self, panel: Panel) {
        console::log!(format!("Showing {} section", panel.as_str()));
        self.panels.update(|p| p.show(panel));
        self.result.set(None);
    }

    pub fn hide_all(&self) {
        self.panels.update(|p| p.hide_all());
        self.result.set(None);
        self.show_help.set(false);
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.with(|t| t.is_busy())
    }

    /// 読み込み表示の対象（未完了のリクエスト）
    pub fn loading_endpoint(&self) -> Option<Endpoint> {
        self.tracker.with(|t| t.in_flight())
    }

    /// ファイルを検証し、通ればプレビューを読み込む
    ///
    /// 不正なファイルは通知を出して`false`を返す。選択済みのファイルは残す。
    pub fn select_file(&self, file: File) -> bool {
        let info = file_info(&file);
        console::log!(format!("File selected: {} Size: {} bytes", info.name, info.size));

        if let Err(e) = validate_file(&info) {
            self.notifier.show(e.to_string(), e.severity());
            return false;
        }

        let preview = self.preview;
        let selected = self.selected;
        let expected = info.clone();
        let read = read_data_url(&file, move |data_url| {
            // 読み込み中に別のファイルが選ばれていたら捨てる
            let still_selected =
                selected.with_untracked(|s| s.as_ref().is_some_and(|s| s.info == expected));
            if still_selected {
                preview.set(Some(Preview {
                    file_name: expected.name.clone(),
                    data_url,
                }));
            }
        });
        if let Err(e) = read {
            console::warn!("Preview unavailable:", e);
        }

        self.preview.set(None);
        self.selected.set(Some(SelectedFile { file, info }));
        true
    }

    pub fn clear_file(&self) {
        self.selected.set(None);
        self.preview.set(None);
    }

    /// 表示中のパネルを送信
    pub fn submit_active(&self) {
        match self.panels.get_untracked().active() {
            Some(Panel::Image) => dispatch::submit_image(*self),
            Some(Panel::Symptoms) => dispatch::submit_symptoms(*self),
            None => {}
        }
    }

    fn handle_shortcut(&self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::ShowImage => {
                self.show_panel(Panel::Image);
                self.notifier.info(Panel::Image.switch_notice());
            }
            Shortcut::ShowSymptoms => {
                self.show_panel(Panel::Symptoms);
                self.notifier.info(Panel::Symptoms.switch_notice());
            }
            Shortcut::Submit => self.submit_active(),
            Shortcut::HideAll => self.hide_all(),
            Shortcut::Help => self.show_help.set(true),
        }
    }
}

/// windowのkeydownでショートカットを処理
fn bind_shortcuts(ctx: AppContext) {
    let listener = EventListener::new(&window(), "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(shortcut) = Shortcut::from_key(event.ctrl_key(), &event.key()) else {
            return;
        };
        if shortcut != Shortcut::HideAll {
            event.prevent_default();
        }
        ctx.handle_shortcut(shortcut);
    });
    listener.forget();
}

/// ドロップ領域の外に落としたファイルでページが遷移しないようにする
fn block_page_drop() {
    let Some(body) = document().body() else {
        return;
    };
    for event_name in ["dragover", "drop"] {
        EventListener::new(&body, event_name, |event| event.prevent_default()).forget();
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    bind_shortcuts(ctx);
    block_page_drop();
    dispatch::health_check(ctx);

    view! {
        <div class="container">
            <Header />

            <Show when=move || ctx.is_visible(Panel::Image)>
                <ImagePanel />
            </Show>

            <Show when=move || ctx.is_visible(Panel::Symptoms)>
                <SymptomsPanel />
            </Show>

            <Show when=move || ctx.is_loading()>
                <LoadingIndicator />
            </Show>

            <ResultsPanel />

            <NotificationStack />

            <Show when=move || ctx.show_help.get()>
                <ShortcutsHelp />
            </Show>
        </div>
    }
}

/// コンテキストから状態を取得
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
