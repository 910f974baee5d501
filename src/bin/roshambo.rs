//! Interactive terminal front-end.
//!
//! Renders the scoreboard and outcome after every round; the three hands
//! (and quitting) are offered through a selection menu. All human-readable
//! text lives here, on top of the core's enumerated values.

use clap::Parser;
use dialoguer::Select;

use roshambo::core::{GameState, Hand, Outcome};
use roshambo::session::Session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the computer's hand sequence. Replaying a seed replays
    /// the identical game; a random seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn hand_label(hand: Hand) -> &'static str {
    match hand {
        Hand::Scissors => "Scissors",
        Hand::Rock => "Rock",
        Hand::Paper => "Paper",
    }
}

fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You win the round!",
        Outcome::Lose => "The computer wins the round.",
        Outcome::Draw => "A draw.",
        Outcome::None => "No rounds played yet.",
    }
}

fn render(state: &GameState) {
    println!();
    println!(
        "Round {} | you {} : {} computer | {} draws",
        state.round,
        state.user_score,
        state.computer_score,
        state.draws()
    );
    if let (Some(user), Some(computer)) = (state.user_hand, state.computer_hand) {
        println!(
            "You played {}, the computer played {}.",
            hand_label(user),
            hand_label(computer)
        );
    }
    println!("{}", outcome_line(state.outcome));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed} (pass --seed {seed} to replay this game)");

    let mut session = Session::seeded(seed);
    render(session.state());

    let mut items: Vec<&str> = Hand::ALL.iter().copied().map(hand_label).collect();
    items.push("Quit");

    loop {
        let selection = Select::new()
            .with_prompt("Your hand")
            .report(false)
            .items(items.as_slice())
            .default(0)
            .interact()
            .expect("interactive terminal");

        let Some(&hand) = Hand::ALL.get(selection) else {
            break;
        };

        match session.play(hand) {
            Ok(state) => render(state),
            Err(e) => {
                eprintln!("round failed: {e}");
                break;
            }
        }
    }

    let state = session.state();
    println!(
        "Final score after {} rounds: you {} : {} computer.",
        state.rounds_resolved(),
        state.user_score,
        state.computer_score
    );
}
