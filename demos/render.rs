use escape_engine::{Game, TurnOrder};
use std::thread;
use std::time::Duration;

fn main() {
    let mut game = Game::new(5, TurnOrder::RunnerFirst, 20, 42, None);

    let mut state = game.start();
    game.draw();

    while !state.finished {
        thread::sleep(Duration::from_millis(300));
        state = game.update();
        game.draw();
    }

    println!(
        "\nGame finished due to: {:?}",
        state.finished_reason.unwrap()
    );
}
