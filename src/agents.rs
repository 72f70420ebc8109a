use crate::grid::Position;
use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Represents the vertical direction the blocker can patrol in.
#[derive(Clone, Copy, PartialEq)]
pub enum Vertical {
    Up,
    Down,
}

impl Distribution<Vertical> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vertical {
        match rng.gen_range(0..2) {
            0 => Vertical::Up,
            _ => Vertical::Down,
        }
    }
}

/// The runner agent.
/// Tries to reach the goal cell using shortest-path greedy movement.
pub struct Runner {
    id: String,
    position: Position,
    goal: Position,
    board_size: usize,
}

impl Runner {
    pub fn new(position: Position, goal: Position, board_size: usize) -> Runner {
        Runner {
            id: Uuid::new_v4().to_string(),
            position,
            goal,
            board_size,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        "Runner"
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Decides the runner's move for this turn and updates its position.
    ///
    /// The candidates are the orthogonal neighbors that are in-bounds and not
    /// occupied by the blocker. Among those, the runner picks one of the cells
    /// closest to the goal by Manhattan distance, breaking ties uniformly at
    /// random. If every candidate is blocked the runner is boxed in and stays
    /// put for the turn.
    pub fn decide_move(&mut self, blocker_position: Position, rng: &mut impl Rng) -> Position {
        let candidates: Vec<Position> = self
            .position
            .neighbors(self.board_size)
            .into_iter()
            .filter(|candidate| *candidate != blocker_position)
            .collect();

        let min_distance = candidates
            .iter()
            .map(|candidate| candidate.manhattan(self.goal))
            .min();

        if let Some(min_distance) = min_distance {
            let best: Vec<Position> = candidates
                .into_iter()
                .filter(|candidate| candidate.manhattan(self.goal) == min_distance)
                .collect();

            // `best` holds at least the candidate that produced `min_distance`
            self.position = *best.choose(rng).unwrap();
        }

        self.position
    }
}

/// The blocker agent.
/// Moves along a fixed column trying to intercept the runner.
pub struct Blocker {
    id: String,
    position: Position,
    column: usize,
    board_size: usize,
}

impl Blocker {
    /// Creates a new blocker. The column of `position` becomes the blocker's
    /// fixed column for its lifetime.
    pub fn new(position: Position, board_size: usize) -> Blocker {
        Blocker {
            id: Uuid::new_v4().to_string(),
            column: position.col,
            position,
            board_size,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        "Blocker"
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Decides the blocker's move for this turn and updates its position.
    ///
    /// The blocker only ever changes its row. If the runner is within one row
    /// of the goal, or currently inside the blocker's fixed column, the blocker
    /// steps one row toward the runner. Otherwise it patrols: one row in a
    /// random direction, forced away from the boundary when pinned against it.
    /// The blocker never stays put. It does not check for collisions with the
    /// runner's cell and may step straight onto it.
    pub fn decide_move(
        &mut self,
        runner_position: Position,
        goal: Position,
        rng: &mut impl Rng,
    ) -> Position {
        let new_row = if runner_position.row.abs_diff(goal.row) <= 1 {
            // The runner is one step away from the goal's row, close in on it
            self.row_toward(runner_position.row, rng)
        } else if runner_position.col == self.column {
            // The runner is crossing the blocker's column, chase it
            self.row_toward(runner_position.row, rng)
        } else {
            self.patrol_row(rng)
        };

        self.position = Position::new(new_row, self.column);
        self.position
    }

    // One row toward `target_row`, falling back to a patrol step when already
    // aligned or pinned against the boundary in the target's direction.
    fn row_toward(&self, target_row: usize, rng: &mut impl Rng) -> usize {
        let row = self.position.row;

        if target_row < row && row > 0 {
            row - 1
        } else if target_row > row && row < self.board_size - 1 {
            row + 1
        } else {
            self.patrol_row(rng)
        }
    }

    // The blocker must keep moving even without a directed target: one row in a
    // random direction, except at a boundary where the direction is forced.
    fn patrol_row(&self, rng: &mut impl Rng) -> usize {
        let row = self.position.row;

        if row == 0 {
            row + 1
        } else if row == self.board_size - 1 {
            row - 1
        } else {
            match rng.gen::<Vertical>() {
                Vertical::Up => row - 1,
                Vertical::Down => row + 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn when_the_runner_has_a_single_best_candidate_it_is_always_chosen() {
        // From (0, 1) the goal (0, 2) itself is the unique closest candidate
        let mut runner = Runner::new(Position::new(0, 1), Position::new(0, 2), 3);
        let new_position = runner.decide_move(Position::new(2, 0), &mut rng());

        assert_eq!(new_position, Position::new(0, 2));
        assert_eq!(runner.position(), Position::new(0, 2));
    }

    #[test]
    fn when_multiple_candidates_are_equally_close_one_of_them_is_chosen() {
        let goal = Position::new(0, 2);

        // From (2, 0), the cells (1, 0) and (2, 1) are both at distance 3
        for seed in 0..20 {
            let mut runner = Runner::new(Position::new(2, 0), goal, 3);
            let mut rng = StdRng::seed_from_u64(seed);
            let new_position = runner.decide_move(Position::new(0, 2), &mut rng);

            assert!(new_position == Position::new(1, 0) || new_position == Position::new(2, 1));
        }
    }

    #[test]
    fn when_the_runner_moves_it_never_leaves_the_board() {
        let mut runner = Runner::new(Position::new(2, 0), Position::new(0, 2), 3);
        let mut rng = rng();

        for _ in 0..100 {
            let new_position = runner.decide_move(Position::new(1, 1), &mut rng);
            assert!(new_position.in_bounds(3));
        }
    }

    #[test]
    fn when_a_candidate_is_occupied_by_the_blocker_the_runner_never_selects_it() {
        // From (1, 2) the goal (0, 2) would be the unique closest candidate, but
        // the blocker is sitting on it
        let goal = Position::new(0, 2);

        for seed in 0..50 {
            let mut runner = Runner::new(Position::new(1, 2), goal, 3);
            let mut rng = StdRng::seed_from_u64(seed);
            let new_position = runner.decide_move(goal, &mut rng);

            assert_ne!(new_position, goal);
        }
    }

    #[test]
    fn when_the_runner_is_boxed_in_it_stays_put() {
        // A 1x1 board has no candidate cells at all
        let mut runner = Runner::new(Position::new(0, 0), Position::new(0, 0), 1);
        let new_position = runner.decide_move(Position::new(0, 0), &mut rng());

        assert_eq!(new_position, Position::new(0, 0));
    }

    #[test]
    fn when_the_blocker_moves_its_column_never_changes() {
        let goal = Position::new(0, 4);
        let mut blocker = Blocker::new(Position::new(0, 4), 5);
        let mut rng = rng();

        for _ in 0..100 {
            let new_position = blocker.decide_move(Position::new(4, 0), goal, &mut rng);
            assert_eq!(new_position.col, 4);
            assert!(new_position.in_bounds(5));
        }
    }

    #[test]
    fn when_the_blocker_moves_it_never_stays_put() {
        let goal = Position::new(0, 2);
        let mut blocker = Blocker::new(Position::new(0, 2), 3);
        let mut rng = rng();

        for _ in 0..100 {
            let before = blocker.position();
            let after = blocker.decide_move(Position::new(2, 0), goal, &mut rng);

            assert_ne!(after, before);
        }
    }

    #[test]
    fn when_the_runner_is_near_the_goal_row_the_blocker_chases_its_row() {
        let goal = Position::new(0, 3);

        // The runner at row 1 is within one row of the goal
        let mut blocker = Blocker::new(Position::new(3, 3), 4);
        let new_position = blocker.decide_move(Position::new(1, 0), goal, &mut rng());

        assert_eq!(new_position, Position::new(2, 3));
    }

    #[test]
    fn when_the_runner_is_in_the_blockers_column_the_blocker_chases_its_row() {
        let goal = Position::new(0, 3);

        // The runner at (3, 3) is not near the goal row but inside the fixed column
        let mut blocker = Blocker::new(Position::new(0, 3), 4);
        let new_position = blocker.decide_move(Position::new(3, 3), goal, &mut rng());

        assert_eq!(new_position, Position::new(1, 3));
    }

    #[test]
    fn when_the_blocker_patrols_at_the_top_boundary_it_is_forced_down() {
        let goal = Position::new(0, 3);

        // The runner at (2, 0) is neither near the goal row nor in the column
        let mut blocker = Blocker::new(Position::new(0, 3), 4);
        let new_position = blocker.decide_move(Position::new(2, 0), goal, &mut rng());

        assert_eq!(new_position, Position::new(1, 3));
    }

    #[test]
    fn when_the_blocker_patrols_at_the_bottom_boundary_it_is_forced_up() {
        let goal = Position::new(0, 3);

        let mut blocker = Blocker::new(Position::new(3, 3), 4);
        let new_position = blocker.decide_move(Position::new(2, 0), goal, &mut rng());

        assert_eq!(new_position, Position::new(2, 3));
    }

    #[test]
    fn when_the_blocker_is_already_aligned_with_the_target_row_it_still_moves() {
        let goal = Position::new(0, 2);

        // The runner at (1, 0) triggers the near-goal chase with the blocker
        // already on the runner's row, which falls back to a patrol step
        for seed in 0..20 {
            let mut blocker = Blocker::new(Position::new(1, 2), 3);
            let mut rng = StdRng::seed_from_u64(seed);
            let new_position = blocker.decide_move(Position::new(1, 0), goal, &mut rng);

            assert!(new_position == Position::new(0, 2) || new_position == Position::new(2, 2));
        }
    }

    #[test]
    fn when_chasing_the_blocker_may_step_onto_the_runners_cell() {
        let goal = Position::new(0, 2);

        // The blocker does not check for collisions with the runner
        let mut blocker = Blocker::new(Position::new(0, 2), 3);
        let new_position = blocker.decide_move(Position::new(1, 2), goal, &mut rng());

        assert_eq!(new_position, Position::new(1, 2));
    }
}
