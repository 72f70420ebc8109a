use crate::game::GameState;
use crate::grid::Position;
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Write};

/// Draws a game state snapshot to the console as a colored textual grid.
///
/// The runner is drawn as a red `R`, the blocker as a yellow `B`, the goal as
/// a green `G` and empty cells as `.`. When two of them share a cell the
/// runner wins the spot, then the blocker.
pub fn draw(state: &GameState) {
    let mut stdout = stdout();

    // Display information about the game
    execute!(
        stdout,
        Clear(ClearType::All),
        Hide,
        Print("Board: "),
        Print(state.board_size.to_string()),
        Print("x"),
        Print(state.board_size.to_string()),
        Print("\nTurn: "),
        Print(state.turn.to_string()),
        Print("\n\n")
    )
    .unwrap();

    // Display the board
    for row in 0..state.board_size {
        for col in 0..state.board_size {
            let cell = Position::new(row, col);
            let (marker, color) = if cell == state.runner {
                ('R', Color::Red)
            } else if cell == state.blocker {
                ('B', Color::Yellow)
            } else if cell == state.goal {
                ('G', Color::Green)
            } else {
                ('.', Color::Reset)
            };

            execute!(
                stdout,
                SetForegroundColor(color),
                Print(marker),
                SetForegroundColor(Color::Reset)
            )
            .unwrap();
        }
        execute!(stdout, Print("\n")).unwrap();
    }

    stdout.flush().unwrap();
}
