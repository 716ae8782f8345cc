//! Five Dragon in the terminal.
//!
//! Set `WULONG_LOG=debug` (or `trace`) to print engine logs to stderr.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use wulong::{Card, Chip, DealerStep, Game, GameOptions, Hand, Status, Suit};

const DEALER_PAUSE: Duration = Duration::from_millis(800);

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let Ok(level) = std::env::var("WULONG_LOG") else {
        return;
    };
    let filter = level.parse().unwrap_or(LevelFilter::Debug);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}

fn main() {
    init_logging();
    println!("Five Dragon CLI (type 'q' to quit)");
    println!("Five cards without going over 21 pays five times the bet.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        if game.start_new_game().is_err() {
            break;
        }

        if game.available_chips().is_empty() {
            println!("You are out of chips. Game over.");
            break;
        }

        if !take_bets(&game) {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.start_dealing() {
            println!("Deal error: {err}");
            continue;
        }

        while game.status() == Status::Playing {
            print_table(&game);

            let result = match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => game.hit().map(|card| println!("You draw {}", format_card(&card))),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while game.status() == Status::DealerTurn {
            print_table(&game);
            thread::sleep(DEALER_PAUSE);
            match game.dealer_step() {
                Ok(DealerStep::Drew(card)) => println!("Dealer draws {}", format_card(&card)),
                Ok(DealerStep::Stood { reason, .. }) => println!("Dealer stands ({reason})"),
                Err(err) => {
                    println!("Dealer error: {err}");
                    break;
                }
            }
        }

        print_table(&game);
        if let Some(result) = game.last_result() {
            println!("Outcome: {:?} | payout {} (net {})", result.outcome, result.payout, result.net);
        }
    }
}

/// Collects chips until the player deals. Returns `false` to quit.
fn take_bets(game: &Game) -> bool {
    loop {
        let chips = game.available_chips();
        let labels: Vec<String> = chips.iter().map(ToString::to_string).collect();
        println!(
            "\nChips: {} | Bet: {} | add [{}], [d]eal",
            game.chips(),
            game.current_bet(),
            labels.join("/")
        );

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => return false,
            "d" | "deal" if game.current_bet() > 0 => return true,
            "d" | "deal" => println!("Place a bet first."),
            other => match other.parse::<u32>().map(Chip::try_from) {
                Ok(Ok(chip)) => {
                    if let Err(err) = game.place_bet(chip) {
                        println!("Bet error: {err}");
                    }
                }
                Ok(Err(err)) => println!("Bet error: {err}"),
                Err(_) => println!("Enter a chip amount, 'd' or 'q'."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let snapshot = game.snapshot();
    let dealer = &snapshot.dealer_hand;
    let player = &snapshot.player_hand;

    println!(
        "\nDealer: {} (value {})",
        format_hand(dealer),
        dealer.visible_value()
    );
    println!(
        "You:    {} (value {}, {} cards)",
        format_hand(player),
        player.value(),
        player.len()
    );
    println!(
        "Chips: {} | Bet: {} | {}",
        snapshot.chips, snapshot.current_bet, snapshot.message
    );
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if card.is_hidden() {
        return "??".to_string();
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
