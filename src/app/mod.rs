// src/app/mod.rs
//! JS とゲームのロジックをつなぐ部分を、役割ごとに分割して置くモジュールだよ！

pub mod layout_calculator;
pub mod renderer;
pub mod drag_handler;
pub mod event_handler;
pub mod game_controller;
pub mod game_app;

#[cfg(all(test, target_arch = "wasm32"))]
mod game_app_tests;
