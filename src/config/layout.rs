// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! 全部「ボードの幅」か「カードの高さ」に対する比率なので、
//! 画面サイズが変わっても同じ見た目になるんだ。

/// ボードの幅をこの数で割った値がカードの幅
pub const CARDS_PER_BOARD_WIDTH: f64 = 13.0;
/// カードの縦横比 (高さ / 幅) = 29 / 20
pub const CARD_HEIGHT_RATIO: f64 = 29.0 / 20.0;
/// ボードを縦に 7 列のグリッドに分けて、それぞれにスタックを置くよ
pub const GRID_COLUMNS: f64 = 7.0;

// --- 各エリアの位置 (カードの高さに対する比率) ---
pub const TOP_ROW_Y_RATIO: f64 = 0.25; // 山札・捨て札・組札の Y
pub const TABLEAU_Y_RATIO: f64 = 1.5; // 場札の Y
pub const TABLEAU_CARD_STEP_RATIO: f64 = 0.2; // 場札で 1 枚ごとにずらす量
pub const BOARD_HEIGHT_RATIO: f64 = 5.5; // ボードの高さ
pub const BOARD_MARGIN_BOTTOM_RATIO: f64 = 0.5;

// --- グリッドの何列目に置くか ---
pub const STOCK_GRID_COLUMN: usize = 0;
pub const WASTE_GRID_COLUMN: usize = 1;
pub const FOUNDATION_FIRST_GRID_COLUMN: usize = 3;

/// ドロップ後にカードが落ち着くまでのアニメーション時間 (ms)。描画側で使うよ。
pub const SETTLE_ANIMATION_MS: u32 = 250;
