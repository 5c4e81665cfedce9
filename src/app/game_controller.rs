// src/app/game_controller.rs
//! ゲーム 1 回分の状態を全部持っているコントローラ。
//!
//! GameState (盤面)、DragState (保留中の移動)、BoardLayout (座標計算) を持っていて、
//! 変化があるたびに RenderSink に RenderEvent を送るよ。
//! wasm-bindgen には依存しないので、ネイティブのテストからそのまま使える！

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::drag_handler::{self, DropResult};
use crate::app::layout_calculator::{BoardLayout, LayoutSnapshot, Position};
use crate::app::renderer::{LogSink, RenderEvent, RenderSink};
use crate::components::card::Card;
use crate::components::dragging_info::DragState;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules;
use crate::systems::deal_system::DealInitialCardsSystem;
use crate::systems::move_card_system::{MoveCardSystem, MoveOutcome};
use crate::systems::stock_system::{draw_one, StockAction};

pub struct GameController {
    config: GameConfig,
    rng: StdRng,
    layout: Option<BoardLayout>,
    state: Option<GameState>,
    drag: DragState,
    sink: Box<dyn RenderSink>,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            layout: None,
            state: None,
            drag: DragState::Idle,
            sink: Box::new(LogSink),
            deal_system: DealInitialCardsSystem,
            move_system: MoveCardSystem,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_render_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sink = sink;
    }

    fn emit(&mut self, event: RenderEvent) {
        self.sink.render(&event);
    }

    // --- ボード ---

    /// ボードのサイズを決める。これをしないとゲームを始められないよ。
    pub fn set_game_board(&mut self, width: f64, height: f64) -> Result<(), GameError> {
        let layout = BoardLayout::new(width, height)?;
        info!("Board set: {}x{} (card {}x{})", width, height, layout.card_width, layout.card_height);
        self.layout = Some(layout);
        self.emit(RenderEvent::LayoutChanged { layout: layout.snapshot() });
        Ok(())
    }

    /// ウィンドウサイズが変わった時。盤面はそのままで、座標だけ計算し直す。
    pub fn resize_board(&mut self, width: f64, height: f64) -> Result<(), GameError> {
        if self.layout.is_none() {
            warn!("resize_board called before set_game_board");
        }
        self.set_game_board(width, height)
    }

    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    pub fn layout_snapshot(&self) -> Option<LayoutSnapshot> {
        self.layout.map(|layout| layout.snapshot())
    }

    // --- ゲームの開始 ---

    /// 新しいゲームを配る。ボードが決まっていなければ `UninitializedBoard`。
    /// 途中のゲームやドラッグは捨てて最初からになるよ。
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.layout.is_none() {
            error!("start_game called before set_game_board");
            return Err(GameError::UninitializedBoard);
        }
        self.drag = DragState::Idle;
        let state = self.deal_system.new_game(&mut self.rng);
        info!("New game dealt ({} cards in stock)", state.stock.len());
        self.emit(RenderEvent::Dealt { state: state.clone() });
        self.state = Some(state);
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        info!("Restarting game");
        self.start_game()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_won(&self) -> bool {
        self.state.as_ref().map_or(false, |state| state.status == GameStatus::Won)
    }

    pub fn can_place(&self, card: Card, target: StackType) -> bool {
        self.state.as_ref().map_or(false, |state| rules::can_place(state, card, target))
    }

    // --- 山札 ---

    /// 山札をクリックした。ドラッグ中は受け付けない。
    pub fn click_stock(&mut self) -> Result<StockAction, GameError> {
        if self.drag.is_dragging() {
            return Err(GameError::GestureInProgress);
        }
        let state = self.state.as_mut().ok_or(GameError::GameNotStarted)?;
        let action = draw_one(state);
        let waste_index = state.waste.len().saturating_sub(1);

        match action {
            StockAction::Drew(card) => {
                let position = self.layout.map(|l| l.card_position(StackType::Waste, waste_index));
                self.emit(RenderEvent::CardMoved {
                    card,
                    from: StackType::Stock,
                    to: StackType::Waste,
                    index: waste_index,
                    position,
                });
                self.emit(RenderEvent::CardFlipped { card, face_up: true });
            }
            StockAction::Recycled(count) => self.emit(RenderEvent::StockRecycled { count }),
            StockAction::Nothing => {}
        }
        Ok(action)
    }

    // --- ドラッグ ---

    /// カードを掴む。成功したら元のスタックを返す。
    pub fn begin_drag(&mut self, card: Card, x: f64, y: f64) -> Result<StackType, GameError> {
        let state = self.state.as_ref().ok_or(GameError::GameNotStarted)?;
        drag_handler::handle_drag_start(&mut self.drag, state, card, x, y)
    }

    /// ドラッグ中にマウスが動いた。下にある移動先の候補を返す。
    /// 候補が変わった時だけ Highlight イベントを出すよ。
    pub fn update_drag(&mut self, x: f64, y: f64) -> Option<StackType> {
        let info = drag_handler::update_dragged_position(&mut self.drag, x, y)?;
        let hovered = match (&self.layout, &self.state) {
            (Some(layout), Some(state)) => layout.resolve_target(state, info),
            _ => None,
        };
        if info.hovered != hovered {
            info.hovered = hovered;
            self.emit(RenderEvent::Highlight { target: hovered });
        }
        hovered
    }

    /// マウスを離した。座標から移動先を探して、置けるなら確定、置けないなら元に戻す。
    /// 移動が確定したら true。
    pub fn end_drag(&mut self, x: f64, y: f64) -> Result<bool, GameError> {
        let Some(info) = drag_handler::update_dragged_position(&mut self.drag, x, y) else {
            warn!("end_drag called without a drag in progress");
            return Ok(false);
        };
        let target = match (&self.layout, &self.state) {
            (Some(layout), Some(state)) => layout.resolve_target(state, info),
            _ => None,
        };
        self.end_drag_at_target(target)
    }

    /// 移動先を直接指定してドラッグを終える。None なら元に戻すだけ。
    pub fn end_drag_at_target(&mut self, target: Option<StackType>) -> Result<bool, GameError> {
        let Some(info) = drag_handler::handle_drag_end(&mut self.drag) else {
            warn!("end_drag_at_target called without a drag in progress");
            return Ok(false);
        };
        let state = self.state.as_mut().ok_or(GameError::GameNotStarted)?;
        let result = drag_handler::resolve_drop(&self.move_system, state, &info, target);

        if info.hovered.is_some() {
            self.emit(RenderEvent::Highlight { target: None });
        }
        match result {
            DropResult::Committed(outcome) => {
                self.apply_outcome(outcome);
                Ok(true)
            }
            DropResult::Reverted { card, origin } => {
                let position = self.position_of(card);
                self.emit(RenderEvent::Reverted { card, origin, position });
                Ok(false)
            }
        }
    }

    /// ダブルクリックされたカードを、置ける組札があれば自動で移動する。
    pub fn auto_move(&mut self, card: Card) -> Result<bool, GameError> {
        if self.drag.is_dragging() {
            return Err(GameError::GestureInProgress);
        }
        let state = self.state.as_mut().ok_or(GameError::GameNotStarted)?;
        let Some(target) = find_automatic_foundation_move(state, card) else {
            return Ok(false);
        };
        let outcome = self.move_system.commit(state, card, target)?;
        self.apply_outcome(outcome);
        Ok(true)
    }

    /// 確定した移動を描画側に伝える。順番は 移動 → 裏返し → 勝利。
    /// 勝ったらすぐに次のゲームを配るよ。
    fn apply_outcome(&mut self, outcome: MoveOutcome) {
        let position = self.layout.map(|l| l.card_position(outcome.to, outcome.index));
        self.emit(RenderEvent::CardMoved {
            card: outcome.card,
            from: outcome.from,
            to: outcome.to,
            index: outcome.index,
            position,
        });
        if let Some(flipped) = outcome.flipped {
            self.emit(RenderEvent::CardFlipped { card: flipped, face_up: true });
        }
        if outcome.won {
            info!("🏆 Game won!");
            self.emit(RenderEvent::Won);
            if let Err(e) = self.start_game() {
                error!("Failed to deal a new game after winning: {}", e);
            }
        }
    }

    fn position_of(&self, card: Card) -> Option<Position> {
        let layout = self.layout.as_ref()?;
        let (stack_type, index) = self.state.as_ref()?.locate(card)?;
        Some(layout.card_position(stack_type, index))
    }

    /// テスト用: 好きな盤面をそのまま読み込む。
    #[cfg(test)]
    pub(crate) fn load_state(&mut self, state: GameState) {
        self.drag = DragState::Idle;
        self.state = Some(state);
    }
}
