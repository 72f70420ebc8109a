use crate::agents::{Blocker, Runner};
use crate::grid::Position;
use crate::render;
use crate::replay::{create_replay_logger, ReplayLogger};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The pursuit-evasion game.
/// Main entry point for running the game.
pub struct Game {
    board_size: usize,
    goal: Position,
    runner: Runner,
    blocker: Blocker,
    turn: usize,
    turn_order: TurnOrder,
    max_turns: usize,
    started: bool,
    finished: bool,
    finished_reason: Option<FinishedReason>,
    replay_logger: Box<dyn ReplayLogger>,
    rng: StdRng,
}

/// Represents the state of the game.
#[derive(Clone)]
pub struct GameState {
    /// The current turn.
    pub turn: usize,
    /// The runner's position.
    pub runner: Position,
    /// The blocker's position.
    pub blocker: Position,
    /// The goal cell the runner is trying to reach.
    pub goal: Position,
    /// The width and height of the square board.
    pub board_size: usize,
    /// Whether the game has finished.
    pub finished: bool,
    /// The reason the game finished. `None` if the game has not finished.
    pub finished_reason: Option<FinishedReason>,
}

/// Represents the reason the game finished.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FinishedReason {
    /// The runner reached the goal cell.
    RunnerReachedGoal,
    /// The maximum number of turns was reached before the runner escaped.
    TurnLimitReached,
}

/// Represents the order in which the two agents act within a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnOrder {
    RunnerFirst,
    BlockerFirst,
}

impl TurnOrder {
    /// Parses a turn order from its configuration value, case-insensitively.
    /// Unrecognized values default to `RunnerFirst`.
    pub fn parse(value: &str) -> TurnOrder {
        match value.trim().to_lowercase().as_str() {
            "blocker-first" => TurnOrder::BlockerFirst,
            _ => TurnOrder::RunnerFirst,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TurnOrder::RunnerFirst => "runner-first",
            TurnOrder::BlockerFirst => "blocker-first",
        }
    }
}

impl Game {
    /// Creates a new game.
    ///
    /// The goal is fixed at the top-right corner. The runner starts at the
    /// bottom-left corner and the blocker starts at the top-right corner, on
    /// the goal cell itself.
    ///
    /// # Arguments
    /// * `board_size` - The width and height of the square board. Must be at least 2.
    /// * `turn_order` - Which agent acts first within each round.
    /// * `max_turns` - The maximum number of rounds before the game ends.
    /// * `seed` - The seed for the random number generator.
    /// * `replay_filename` - The filename to save the replay of the game to. If `None`, no replay will be saved.
    pub fn new(
        board_size: usize,
        turn_order: TurnOrder,
        max_turns: usize,
        seed: u64,
        replay_filename: Option<String>,
    ) -> Game {
        if board_size < 2 {
            // On a 1x1 board both agents and the goal share the single cell
            panic!("Board size must be at least 2, got {}", board_size);
        }

        let goal = Position::new(0, board_size - 1);

        Game {
            board_size,
            goal,
            runner: Runner::new(Position::new(board_size - 1, 0), goal, board_size),
            blocker: Blocker::new(Position::new(0, board_size - 1), board_size),
            turn: 0,
            turn_order,
            max_turns,
            started: false,
            finished: false,
            finished_reason: None,
            replay_logger: create_replay_logger(replay_filename, board_size, goal, turn_order),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Starts the game.
    ///
    /// Must be called once before updating the game state. A zero turn limit
    /// finishes the game right here, before any round is played.
    pub fn start(&mut self) -> GameState {
        self.turn = 0;
        self.started = true;
        self.finished = false;
        self.finished_reason = None;
        self.runner = Runner::new(
            Position::new(self.board_size - 1, 0),
            self.goal,
            self.board_size,
        );
        self.blocker = Blocker::new(Position::new(0, self.board_size - 1), self.board_size);
        self.replay_logger.clear();

        self.check_for_endgame();

        self.replay_logger
            .log_turn(self.turn, self.runner.position(), self.blocker.position());

        // If the game finished, log the end game and save the replay
        if self.finished {
            self.replay_logger
                .log_end_game(format!("{:?}", self.finished_reason.as_ref().unwrap()));
            self.replay_logger.save();
        }

        self.game_state()
    }

    /// Updates the game state by playing one full round.
    ///
    /// Both agents move exactly once, in the configured order. The second
    /// mover sees the first mover's post-move position, so it reacts to the
    /// just-completed move. The win condition is checked before the turn limit.
    pub fn update(&mut self) -> GameState {
        if !self.started {
            panic!("Game has not started! Call `start` to start the game.");
        }

        if self.finished {
            panic!("Game is finished! Call `start` to start a new game.");
        }

        self.turn += 1;

        match self.turn_order {
            TurnOrder::RunnerFirst => {
                self.move_runner();
                self.move_blocker();
            }
            TurnOrder::BlockerFirst => {
                self.move_blocker();
                self.move_runner();
            }
        }

        self.check_for_endgame();

        self.replay_logger
            .log_turn(self.turn, self.runner.position(), self.blocker.position());

        // If the game finished, log the end game and save the replay
        if self.finished {
            self.replay_logger
                .log_end_game(format!("{:?}", self.finished_reason.as_ref().unwrap()));
            self.replay_logger.save();
        }

        self.game_state()
    }

    /// Runs the game from the start until the runner escapes or the turn
    /// limit is reached, and returns the final state.
    pub fn run(&mut self) -> GameState {
        let mut state = self.start();

        while !state.finished {
            state = self.update();
        }

        state
    }

    /// Draws the game to the console.
    pub fn draw(&self) {
        render::draw(&self.game_state());
    }
}

impl Game {
    fn move_runner(&mut self) {
        let location = self.runner.position();
        let destination = self.runner.decide_move(self.blocker.position(), &mut self.rng);

        // The runner stays put when boxed in, which is not a move
        if destination != location {
            self.replay_logger.log_move(
                self.turn,
                self.runner.name().to_string(),
                self.runner.id().to_string(),
                location,
                destination,
            );
        }
    }

    fn move_blocker(&mut self) {
        let location = self.blocker.position();
        let destination = self
            .blocker
            .decide_move(self.runner.position(), self.goal, &mut self.rng);

        self.replay_logger.log_move(
            self.turn,
            self.blocker.name().to_string(),
            self.blocker.id().to_string(),
            location,
            destination,
        );
    }

    fn check_for_endgame(&mut self) {
        if self.runner.position() == self.goal {
            self.finished = true;
            self.finished_reason = Some(FinishedReason::RunnerReachedGoal);

            return;
        }

        if self.turn >= self.max_turns {
            self.finished = true;
            self.finished_reason = Some(FinishedReason::TurnLimitReached);
        }
    }

    fn game_state(&self) -> GameState {
        GameState {
            turn: self.turn,
            runner: self.runner.position(),
            blocker: self.blocker.position(),
            goal: self.goal,
            board_size: self.board_size,
            finished: self.finished,
            finished_reason: self.finished_reason.clone(),
        }
    }
}
