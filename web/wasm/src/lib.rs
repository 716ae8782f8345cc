use serde::Serialize;
use wasm_bindgen::prelude::*;
use wulong::{
    Card, Chip, DealerStep, Game, GameOptions, Hand, Outcome, RoundResult, Snapshot, Status,
    Suit,
};

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn start_new_game(&self) -> Result<(), JsValue> {
        self.game.start_new_game().map_err(js_err)
    }

    pub fn place_bet(&self, amount: u32) -> Result<(), JsValue> {
        let chip = Chip::try_from(amount).map_err(js_err)?;
        self.game.place_bet(chip).map_err(js_err)
    }

    pub fn available_chips(&self) -> Vec<u32> {
        self.game
            .available_chips()
            .into_iter()
            .map(Chip::amount)
            .collect()
    }

    pub fn start_dealing(&self) -> Result<(), JsValue> {
        self.game.start_dealing().map_err(js_err)
    }

    pub fn hit(&self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    /// Runs one dealer step. The page calls this on a timer until it returns
    /// `finished: true`.
    pub fn dealer_step(&self) -> Result<JsValue, JsValue> {
        let step = self.game.dealer_step().map_err(js_err)?;
        to_js_value(&JsDealerStep::from(step))
    }

    pub fn last_result(&self) -> Result<JsValue, JsValue> {
        let result = self.game.last_result().map(JsRoundResult::from);
        to_js_value(&result)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    status: &'static str,
    player: JsHand,
    dealer: JsHand,
    chips: u32,
    current_bet: u32,
    message: String,
    version: u64,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            status: status_to_str(snapshot.status),
            player: JsHand::from(&snapshot.player_hand),
            dealer: JsHand::from(&snapshot.dealer_hand),
            chips: snapshot.chips,
            current_bet: snapshot.current_bet,
            message: snapshot.message.to_string(),
            version: snapshot.version,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsHand {
    /// Face-down cards are `null`.
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand
                .cards()
                .iter()
                .map(|card| (!card.is_hidden()).then(|| card_to_js(*card)))
                .collect(),
            visible_value: hand.visible_value(),
        }
    }
}

#[derive(Serialize)]
struct JsDealerStep {
    finished: bool,
    drawn: Option<JsCard>,
    reason: Option<String>,
    result: Option<JsRoundResult>,
}

impl From<DealerStep> for JsDealerStep {
    fn from(step: DealerStep) -> Self {
        match step {
            DealerStep::Drew(card) => Self {
                finished: false,
                drawn: Some(card_to_js(card)),
                reason: None,
                result: None,
            },
            DealerStep::Stood { reason, result } => Self {
                finished: true,
                drawn: None,
                reason: Some(reason.to_string()),
                result: Some(JsRoundResult::from(result)),
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    bet: u32,
    payout: u32,
    net: i64,
    player_value: u8,
    dealer_value: u8,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet,
            payout: result.payout,
            net: result.net,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn status_to_str(status: Status) -> &'static str {
    match status {
        Status::Idle => "idle",
        Status::Betting => "betting",
        Status::Playing => "playing",
        Status::DealerTurn => "dealer-turn",
        Status::GameOver => "game-over",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "player-bust",
        Outcome::DealerBust => "dealer-bust",
        Outcome::DragonWin => "dragon-win",
        Outcome::DragonBust => "dragon-bust",
        Outcome::DealerHigher => "dealer-higher",
        Outcome::PlayerHigher => "player-higher",
        Outcome::Tie => "tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
