// src/logger.rs
//! `log` クレートのマクロ (info! とか warn!) をブラウザのコンソールに出すロガー。
//!
//! web_sys は wasm の上でしか動かないので、`init()` を呼ぶのは
//! `#[wasm_bindgen(start)]` の中だけ。ネイティブのテストではロガー無しで動くよ。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

#[cfg(debug_assertions)]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = match record.module_path() {
            Some(module) => format!("[{}] [{}] {}", record.level(), module, record.args()),
            None => format!("[{}] {}", record.level(), record.args()),
        };
        let line = JsValue::from_str(&line);
        // レベルごとにコンソールの色分けが効くメソッドを使う
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// ロガーを登録する。2 回目以降はエラーが返るけど、呼び出し側で無視して大丈夫。
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(MAX_LOG_LEVEL);
    Ok(())
}
