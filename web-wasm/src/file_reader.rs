//! ブラウザの`File`の読み取り

use quickaid_common::FileInfo;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

/// 検証用のメタデータを取り出す
pub fn file_info(file: &File) -> FileInfo {
    FileInfo::new(file.name(), file.type_(), file.size() as u64)
}

/// 読み込み完了時に`on_load`へData URLを渡す
pub fn read_data_url<F>(file: &File, on_load: F) -> Result<(), JsValue>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new()?;

    let reader_clone = reader.clone();
    let closure = Closure::once(move |_: ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_load(data_url);
        }
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_data_url(file)
}
