// src/app/renderer.rs
//! 描画側 (JS) に「何が起きたか」を伝えるイベントと、その送り先。
//!
//! Rust 側は DOM に触らない。盤面が変わるたびに RenderEvent を作って
//! RenderSink に渡すだけ。アニメーションは描画側の仕事で、
//! イベントを出した瞬間に盤面 (GameState) はもう新しい状態になってるよ。

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use serde::Serialize;

use crate::app::layout_calculator::{LayoutSnapshot, Position};
use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;

/// 描画側に送るイベント。JSON では `"type"` フィールドで種類を見分ける。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    /// ボードのサイズが変わった。全部のカードを置き直してね。
    LayoutChanged { layout: LayoutSnapshot },
    /// 新しいゲームを配った。盤面を丸ごと描き直す。
    Dealt { state: GameState },
    /// カードが `to` の `index` 番目に移動した。`position` はその左上の座標。
    CardMoved { card: Card, from: StackType, to: StackType, index: usize, position: Option<Position> },
    CardFlipped { card: Card, face_up: bool },
    /// 捨て札を全部山札に戻した。
    StockRecycled { count: usize },
    /// ドラッグ中のカードの下にある移動先候補。None ならハイライトを消す。
    Highlight { target: Option<StackType> },
    /// 置けなかったので元の場所に戻す。
    Reverted { card: Card, origin: StackType, position: Option<Position> },
    Won,
}

/// RenderEvent の送り先。
pub trait RenderSink {
    fn render(&mut self, event: &RenderEvent);
}

/// ログに出すだけの送り先。描画コールバックが登録されるまではこれ。
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn render(&mut self, event: &RenderEvent) {
        debug!("App::Renderer: {:?}", event);
    }
}

/// 受け取ったイベントを全部覚えておく送り先。テストで順番を確認するのに使う。
///
/// 中身は Rc で共有しているので、clone したものを手元に残しておけば
/// コントローラに渡した後でも読めるよ。
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<RenderEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// 溜まったイベントを取り出して空にする。
    pub fn take(&self) -> Vec<RenderEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, event: &RenderEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn events_serialize_with_type_tag() {
        let event = RenderEvent::CardFlipped { card: Card::new(Suit::Spade, Rank::Queen), face_up: true };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "CardFlipped");
        assert_eq!(json["face_up"], true);
        assert_eq!(json["card"]["suit"], "Spade");

        let won = serde_json::to_string(&RenderEvent::Won).unwrap();
        assert_eq!(won, r#"{"type":"Won"}"#);
    }

    #[test]
    fn recording_sink_shares_events_between_clones() {
        let sink = RecordingSink::new();
        let mut handle: Box<dyn RenderSink> = Box::new(sink.clone());
        handle.render(&RenderEvent::StockRecycled { count: 3 });
        handle.render(&RenderEvent::Highlight { target: None });

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.take()[0], RenderEvent::StockRecycled { count: 3 });
        assert!(sink.events().is_empty());
    }
}
