use crate::game::TurnOrder;
use crate::grid::Position;
use serde_json::json;
use std::{collections::HashMap, fs::File, io::BufWriter};

pub fn create_replay_logger(
    filename: Option<String>,
    board_size: usize,
    goal: Position,
    turn_order: TurnOrder,
) -> Box<dyn ReplayLogger> {
    match filename {
        None => Box::new(NoOpReplayLogger {}),
        Some(filename) => Box::new(JsonReplayLogger::new(filename, board_size, goal, turn_order)),
    }
}

pub trait ReplayLogger: Send + Sync {
    #[allow(unused_variables)]
    fn log_turn(&mut self, turn: usize, runner: Position, blocker: Position) {}

    #[allow(unused_variables)]
    fn log_end_game(&mut self, reason: String) {}

    #[allow(unused_variables)]
    fn log_move(
        &mut self,
        turn: usize,
        entity: String,
        entity_id: String,
        location: Position,
        destination: Position,
    ) {
    }

    fn clear(&mut self) {}

    fn save(&self) {}
}

#[derive(serde::Serialize)]
struct Event {
    entity: String,
    entity_id: String,
    location: Position,
    destination: Position,
}

struct Turn {
    turn: usize,
    runner: Position,
    blocker: Position,
}

struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

struct JsonReplayLogger {
    filename: String,
    board_size: usize,
    goal: Position,
    turn_order: TurnOrder,
    turns: Vec<Turn>,
    events: HashMap<usize, Vec<Event>>,
    finished_reason: Option<String>,
}

impl JsonReplayLogger {
    pub fn new(
        filename: String,
        board_size: usize,
        goal: Position,
        turn_order: TurnOrder,
    ) -> JsonReplayLogger {
        JsonReplayLogger {
            filename,
            board_size,
            goal,
            turn_order,
            turns: Vec::new(),
            events: HashMap::new(),
            finished_reason: None,
        }
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_turn(&mut self, turn: usize, runner: Position, blocker: Position) {
        self.turns.push(Turn {
            turn,
            runner,
            blocker,
        });
    }

    fn log_end_game(&mut self, reason: String) {
        self.finished_reason = Some(reason);
    }

    fn log_move(
        &mut self,
        turn: usize,
        entity: String,
        entity_id: String,
        location: Position,
        destination: Position,
    ) {
        self.events.entry(turn).or_default().push(Event {
            entity,
            entity_id,
            location,
            destination,
        });
    }

    fn clear(&mut self) {
        self.turns.clear();
        self.events.clear();
        self.finished_reason = None;
    }

    fn save(&self) {
        let file = File::create(&self.filename).unwrap();
        let turns: Vec<_> = self
            .turns
            .iter()
            .map(|turn| {
                json!({
                    "turn": turn.turn,
                    "runner": turn.runner,
                    "blocker": turn.blocker,
                    "events": self.events.get(&turn.turn).unwrap_or(&Vec::new()),
                })
            })
            .collect();

        let data = json!({
            "board": {
                "size": self.board_size,
                "goal": self.goal,
                "turn_order": self.turn_order.as_str(),
            },
            "turns": turns,
            "finished_reason": self.finished_reason,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data).unwrap();
    }
}
