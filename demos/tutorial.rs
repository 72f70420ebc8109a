use escape_engine::{FinishedReason, Game, TurnOrder};
use std::io::{stdin, stdout, Write};

fn main() {
    let mut input = String::new();
    print!("Who moves first, 'runner-first' or 'blocker-first'? ");
    stdout().flush().unwrap();
    stdin().read_line(&mut input).unwrap();

    let turn_order = TurnOrder::parse(&input);
    let replay_filename = "/tmp/escape_replay.json".to_string();

    let mut game = Game::new(3, turn_order, 20, 0, Some(replay_filename));
    let state = game.run();

    match state.finished_reason.unwrap() {
        FinishedReason::RunnerReachedGoal => {
            println!("The runner reached the goal on turn {}!", state.turn)
        }
        FinishedReason::TurnLimitReached => {
            println!("Turn limit reached. The runner could not escape.")
        }
    }
}
