//! Game state module - owns the snake and advances it one tick at a time
//!
//! This module ties together the board, the RNG and food placement. The only
//! mutating operations are [`GameState::set_heading`] and
//! [`GameState::step`]; everything else is a read-only accessor or snapshot.
//!
//! Step order matters and is kept exactly:
//!
//! 1. translate the head one block in the current heading
//! 2. insert the new head in front of the body
//! 3. check collision against the board bounds and every *previous* segment,
//!    including the tail that would be vacated this step
//! 4. on food: score and place new food, keeping the tail; otherwise drop it

use std::collections::VecDeque;

use crate::board::Board;
use crate::error::ConfigError;
use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Outcome of a single [`GameState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Session is over; further steps are no-ops
    pub terminal: bool,
    /// Score after this step
    pub score: u32,
    /// Food was eaten this step
    pub ate: bool,
    /// Set once the session is terminal
    pub end: Option<EndReason>,
}

impl StepResult {
    /// The `(terminal, score)` pair hosts usually need
    pub fn as_tuple(&self) -> (bool, u32) {
        (self.terminal, self.score)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Head at the front, tail at the back
    snake: VecDeque<Cell>,
    heading: Direction,
    food: Option<Cell>,
    score: u32,
    steps: u32,
    end: Option<EndReason>,
    rng: SimpleRng,
    seed: u32,
}

impl GameState {
    /// Create a game on a `width x height` board with the default block size
    pub fn new(width: i32, height: i32, seed: u32) -> Result<Self, ConfigError> {
        Ok(Self::with_board(Board::new(width, height, DEFAULT_BLOCK_SIZE)?, seed))
    }

    /// Create a game on the default 640x480 board
    pub fn with_seed(seed: u32) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Create a game on an already validated board
    ///
    /// The snake starts centered, heading right, three segments long.
    pub fn with_board(mut board: Board, seed: u32) -> Self {
        board.clear();
        let initial = board.initial_snake();
        let mut snake = VecDeque::with_capacity(board.cell_count() + 1);
        for cell in initial {
            board.set_occupied(cell, true);
            snake.push_back(cell);
        }

        let mut state = Self {
            board,
            snake,
            heading: Direction::Right,
            food: None,
            score: 0,
            steps: 0,
            end: None,
            rng: SimpleRng::new(seed),
            seed,
        };
        state.food = place_food(&state.board, &mut state.rng);
        log::debug!("new game seed={} food={:?}", seed, state.food);
        state
    }

    /// Create a game with an explicit body (head first) and heading
    ///
    /// Segments must be on the grid, distinct and orthogonally adjacent.
    pub fn from_segments(
        mut board: Board,
        segments: &[Cell],
        heading: Direction,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::InvalidSnake("snake has no segments"));
        }

        board.clear();
        let block = board.block_size();
        for (i, &cell) in segments.iter().enumerate() {
            if !board.is_aligned(cell) {
                return Err(ConfigError::InvalidSnake("segment is off the board grid"));
            }
            if board.is_occupied(cell) {
                return Err(ConfigError::InvalidSnake("segments overlap"));
            }
            if i > 0 {
                let prev = segments[i - 1];
                let dist = (cell.x - prev.x).abs() + (cell.y - prev.y).abs();
                if dist != block {
                    return Err(ConfigError::InvalidSnake("segments are not adjacent"));
                }
            }
            board.set_occupied(cell, true);
        }

        let mut snake = VecDeque::with_capacity(board.cell_count() + 1);
        snake.extend(segments.iter().copied());

        let mut rng = SimpleRng::new(seed);
        let food = place_food(&board, &mut rng);
        let end = food.is_none().then_some(EndReason::BoardFilled);

        Ok(Self {
            board,
            snake,
            heading,
            food,
            score: 0,
            steps: 0,
            end,
            rng,
            seed,
        })
    }

    /// Set the heading applied at the next step
    ///
    /// No reversal guard: turning back into the body is legal and ends the
    /// game on the next step.
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> StepResult {
        if let Some(end) = self.end {
            return self.result(false, Some(end));
        }

        let new_head = self.head().translated(self.heading, self.board.block_size());

        // The whole previous body (tail included) counts for self-collision.
        let hits_body = self.board.is_occupied(new_head);
        self.snake.push_front(new_head);
        self.steps += 1;

        let collision = if !self.board.in_bounds(new_head) {
            Some(EndReason::Wall)
        } else if hits_body {
            Some(EndReason::SelfCollision)
        } else {
            None
        };
        if let Some(reason) = collision {
            return self.finish(reason, false);
        }

        self.board.set_occupied(new_head, true);

        if Some(new_head) == self.food {
            self.score += 1;
            self.food = place_food(&self.board, &mut self.rng);
            log::debug!("ate food score={} next={:?}", self.score, self.food);
            if self.food.is_none() {
                return self.finish(EndReason::BoardFilled, true);
            }
            return self.result(true, None);
        }

        if let Some(tail) = self.snake.pop_back() {
            self.board.set_occupied(tail, false);
        }
        self.result(false, None)
    }

    fn finish(&mut self, reason: EndReason, ate: bool) -> StepResult {
        self.end = Some(reason);
        log::info!(
            "game over: {} heading={} score={} steps={} length={}",
            reason.as_str(),
            self.heading,
            self.score,
            self.steps,
            self.snake.len()
        );
        self.result(ate, Some(reason))
    }

    fn result(&self, ate: bool, end: Option<EndReason>) -> StepResult {
        StepResult {
            terminal: end.is_some(),
            score: self.score,
            ate,
            end,
        }
    }

    /// Put food on a specific free cell
    ///
    /// Returns false (and leaves the food alone) if the cell is off the grid,
    /// covered by the snake, or the game is over.
    pub fn force_food(&mut self, cell: Cell) -> bool {
        if self.end.is_some() || !self.board.is_aligned(cell) || self.board.is_occupied(cell) {
            return false;
        }
        self.food = Some(cell);
        true
    }

    pub fn head(&self) -> Cell {
        // The snake is never empty: constructors reject empty bodies and
        // step only pops after pushing.
        self.snake[0]
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn game_over(&self) -> bool {
        self.end.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Snapshot for rendering (allocates)
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its segment buffer
    ///
    /// The buffer is sized for a full board on first use, so later calls
    /// do not allocate.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.width = self.board.width();
        snap.height = self.board.height();
        snap.block_size = self.board.block_size();
        snap.segments.clear();
        let cap = self.board.cell_count() + 1;
        if snap.segments.capacity() < cap {
            snap.segments.reserve_exact(cap);
        }
        snap.segments.extend(self.snake.iter().copied());
        snap.food = self.food;
        snap.heading = self.heading;
        snap.score = self.score;
        snap.steps = self.steps;
        snap.game_over = self.end.is_some();
        snap.end = self.end;
        snap.seed = self.seed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
        v.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn body(state: &GameState) -> Vec<Cell> {
        state.segments().iter().copied().collect()
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(640, 480, 1).unwrap();
        assert_eq!(state.head(), Cell::new(320, 240));
        assert_eq!(body(&state), cells(&[(320, 240), (300, 240), (280, 240)]));
        assert_eq!(state.heading(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.steps(), 0);
        assert!(!state.game_over());

        let food = state.food().unwrap();
        assert!(!state.segments().contains(&food));
        assert!(state.board().is_aligned(food));
    }

    #[test]
    fn test_new_rejects_misaligned_board() {
        assert!(matches!(
            GameState::new(645, 480, 1),
            Err(ConfigError::Misaligned { axis: "width", .. })
        ));
        assert!(matches!(
            GameState::new(640, 0, 1),
            Err(ConfigError::NonPositiveDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn test_move_without_food_keeps_length() {
        let mut state = GameState::with_seed(1);
        assert!(state.force_food(Cell::new(0, 0)));

        let r = state.step();
        assert_eq!(r.as_tuple(), (false, 0));
        assert!(!r.ate);
        assert_eq!(body(&state), cells(&[(340, 240), (320, 240), (300, 240)]));
        assert!(!state.board().is_occupied(Cell::new(280, 240)));
        assert_eq!(state.board().free_count(), state.board().cell_count() - 3);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = GameState::with_seed(1);
        assert!(state.force_food(Cell::new(340, 240)));

        let r = state.step();
        assert!(r.ate);
        assert_eq!(r.as_tuple(), (false, 1));
        assert_eq!(state.len(), 4);
        assert_eq!(state.head(), Cell::new(340, 240));
        assert_eq!(*state.segments().back().unwrap(), Cell::new(280, 240));

        let food = state.food().unwrap();
        assert_ne!(food, Cell::new(340, 240));
        assert!(!state.segments().contains(&food));
    }

    #[test]
    fn test_reversal_is_allowed_and_collides() {
        let mut state = GameState::with_seed(1);
        assert!(state.force_food(Cell::new(0, 0)));
        state.step();

        state.set_heading(Direction::Left);
        assert_eq!(state.heading(), Direction::Left);
        let r = state.step();
        assert!(r.terminal);
        assert_eq!(r.end, Some(EndReason::SelfCollision));
        // Head stays inserted after the terminal check.
        assert_eq!(state.len(), 4);
        assert_eq!(state.head(), Cell::new(320, 240));
    }

    #[test]
    fn test_terminal_game_does_not_mutate() {
        let mut state = GameState::with_seed(1);
        state.set_heading(Direction::Left);
        let r = state.step();
        assert!(r.terminal);

        let before = state.snapshot();
        state.set_heading(Direction::Up);
        let again = state.step();
        assert!(again.terminal);
        assert_eq!(again.score, r.score);
        assert_eq!(state.steps(), before.steps);
        assert_eq!(body(&state), before.segments);
        assert!(!state.force_food(Cell::new(0, 0)));
    }

    #[test]
    fn test_from_segments_validation() {
        let board = Board::new(200, 200, 20).unwrap();
        assert_eq!(
            GameState::from_segments(board.clone(), &[], Direction::Right, 1).unwrap_err(),
            ConfigError::InvalidSnake("snake has no segments")
        );
        assert_eq!(
            GameState::from_segments(
                board.clone(),
                &cells(&[(40, 40), (20, 40), (20, 0)]),
                Direction::Right,
                1
            )
            .unwrap_err(),
            ConfigError::InvalidSnake("segments are not adjacent")
        );
        assert_eq!(
            GameState::from_segments(
                board.clone(),
                &cells(&[(40, 40), (20, 40), (20, 20), (40, 20), (40, 40)]),
                Direction::Right,
                1
            )
            .unwrap_err(),
            ConfigError::InvalidSnake("segments overlap")
        );
        assert_eq!(
            GameState::from_segments(board.clone(), &cells(&[(200, 0)]), Direction::Right, 1)
                .unwrap_err(),
            ConfigError::InvalidSnake("segment is off the board grid")
        );
        assert_eq!(
            GameState::from_segments(board.clone(), &cells(&[(40, 40), (10, 40)]), Direction::Right, 1)
                .unwrap_err(),
            ConfigError::InvalidSnake("segment is off the board grid")
        );

        let ok = GameState::from_segments(
            board,
            &cells(&[(40, 40), (20, 40), (20, 60)]),
            Direction::Up,
            1,
        )
        .unwrap();
        assert_eq!(ok.len(), 3);
        assert_eq!(ok.heading(), Direction::Up);
        assert_eq!(ok.board().free_count(), 100 - 3);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let state = GameState::with_seed(9);
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        let cap = snap.segments.capacity();
        assert!(cap >= state.board().cell_count() + 1);

        state.snapshot_into(&mut snap);
        assert_eq!(snap.segments.capacity(), cap);
        assert_eq!(snap, state.snapshot());
        assert_eq!(snap.head(), Some(Cell::new(320, 240)));
        assert_eq!(snap.seed, 9);
    }
}
