mod config;
mod evaluate;
mod positions;

pub use config::{validate_levels, LevelConfig, LEVELS, LEVEL_DURATION, MAX_ATTEMPTS};
pub use evaluate::Evaluation;
pub use positions::Positions;

use evaluate::evaluate;
use rand::prelude::*;
use std::collections::BTreeSet;
use yew::Reducible;

pub const TARGET_EMOJI: char = '🐺';
pub const DECOY_EMOJI: char = '🦝';

/// Milliseconds the wolves stay visible before hiding.
pub const REVEAL_MILLIS: i32 = 2000;
/// Pause between a passed level and the next reveal.
pub const ADVANCE_MILLIS: i32 = 2500;
pub const TICK_MILLIS: i32 = 1000;

const LAST_LEVEL: usize = LEVELS.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Reveal,
    Selecting,
    Evaluating,
    Advancing,
    Won,
    Lost,
}

/// End-state (or level-passed) cause, keyed to a fixed message set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    TimeUp,
    NoAttempts,
    DecoyHit,
    LevelPassed(usize),
    GameWon,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::TimeUp => "⏱ Time's up!".to_string(),
            Outcome::NoAttempts => "🎮 No attempts left!".to_string(),
            Outcome::DecoyHit => "🦝 A raccoon! The wolves slip past.".to_string(),
            Outcome::LevelPassed(level) => format!("🎯 Level {} passed!", level),
            Outcome::GameWon => "🏆 You spotted every wolf!".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct Game {
    rng: StdRng,
    pub level: usize,
    pub phase: Phase,
    pub positions: Positions,
    pub selected: BTreeSet<usize>,
    pub time_left: u32,
    pub attempts_left: u32,
    pub last_evaluation: Option<Evaluation>,
    pub outcome: Option<Outcome>,
}

pub enum GameAction {
    Restart,
    RevealOver,
    Toggle(usize),
    Submit,
    Tick,
    Advance,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Game {
            rng: StdRng::seed_from_u64(seed),
            level: 1,
            phase: Phase::Idle,
            positions: Positions::default(),
            selected: BTreeSet::new(),
            time_left: LEVEL_DURATION,
            attempts_left: MAX_ATTEMPTS,
            last_evaluation: None,
            outcome: None,
        }
    }

    pub fn config(&self) -> &'static LevelConfig {
        &LEVELS[self.level - 1]
    }

    /// Counters reset here, at level start, never inside the timer.
    fn start_level(&mut self) {
        let config = self.config();
        self.selected.clear();
        self.attempts_left = MAX_ATTEMPTS;
        self.time_left = LEVEL_DURATION;
        self.last_evaluation = None;
        self.positions = Positions::generate(&mut self.rng, config);
        self.phase = Phase::Reveal;
    }

    pub fn restart(&mut self) {
        if !matches!(self.phase, Phase::Idle | Phase::Won | Phase::Lost) {
            return;
        }
        self.level = 1;
        self.outcome = None;
        self.start_level();
    }

    pub fn reveal_over(&mut self) {
        if self.phase == Phase::Reveal {
            self.phase = Phase::Selecting;
        }
    }

    pub fn toggle_selection(&mut self, index: usize) {
        if self.phase != Phase::Selecting || index >= self.config().total_cells() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn submit(&mut self) {
        if self.phase != Phase::Selecting || self.attempts_left == 0 {
            return;
        }
        self.phase = Phase::Evaluating;
        self.attempts_left -= 1;

        let evaluation = evaluate(&self.selected, &self.positions);
        self.last_evaluation = Some(evaluation);

        if evaluation.decoy_hit {
            self.finish(Outcome::DecoyHit);
        } else if evaluation.is_exact_match(self.positions.targets.len()) {
            if self.level < LAST_LEVEL {
                self.outcome = Some(Outcome::LevelPassed(self.level));
                self.phase = Phase::Advancing;
            } else {
                self.finish(Outcome::GameWon);
            }
        } else if self.attempts_left == 0 {
            self.finish(Outcome::NoAttempts);
        } else {
            // Failed attempt: the selection stays, the player adjusts and
            // resubmits.
            self.phase = Phase::Selecting;
        }
    }

    pub fn tick(&mut self) {
        if self.phase != Phase::Selecting {
            return;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            self.phase = Phase::Evaluating;
            self.last_evaluation = Some(evaluate(&self.selected, &self.positions));
            self.finish(Outcome::TimeUp);
        }
    }

    pub fn advance(&mut self) {
        if self.phase != Phase::Advancing {
            return;
        }
        self.level += 1;
        self.outcome = None;
        self.start_level();
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = match outcome {
            Outcome::GameWon => Phase::Won,
            _ => Phase::Lost,
        };
    }
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut game = (*self).clone();

        match action {
            GameAction::Restart => game.restart(),
            GameAction::RevealOver => game.reveal_over(),
            GameAction::Toggle(index) => game.toggle_selection(index),
            GameAction::Submit => game.submit(),
            GameAction::Tick => game.tick(),
            GameAction::Advance => game.advance(),
        }

        game.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn positions(targets: &[usize], decoys: &[usize]) -> Positions {
        Positions {
            targets: targets.iter().copied().collect(),
            decoys: decoys.iter().copied().collect(),
        }
    }

    /// Level 1 game in `Selecting` with a wolf at 5 and a raccoon at 9.
    fn selecting_game() -> Game {
        let mut game = Game::new(1);
        game.restart();
        game.reveal_over();
        game.positions = positions(&[5], &[9]);
        game
    }

    #[test]
    fn test_new_game_is_idle() {
        let game = Game::new(1);
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.level, 1);
        assert!(game.selected.is_empty());
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn test_restart_enters_reveal_with_fresh_counters() {
        let mut game = Game::new(1);
        game.restart();
        assert_eq!(game.phase, Phase::Reveal);
        assert_eq!(game.time_left, LEVEL_DURATION);
        assert_eq!(game.attempts_left, MAX_ATTEMPTS);
        assert_eq!(game.positions.targets.len(), 1);
        assert_eq!(game.positions.decoys.len(), 1);
    }

    #[test]
    fn test_restart_ignored_mid_level() {
        let mut game = selecting_game();
        game.restart();
        assert_eq!(game.phase, Phase::Selecting);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut game = selecting_game();
        let before = game.selected.clone();
        game.toggle_selection(3);
        assert!(game.selected.contains(&3));
        game.toggle_selection(3);
        assert_eq!(game.selected, before);
    }

    #[test]
    fn test_toggle_disabled_during_reveal() {
        let mut game = Game::new(1);
        game.restart();
        game.toggle_selection(3);
        assert!(game.selected.is_empty());
    }

    #[test]
    fn test_toggle_out_of_range_ignored() {
        let mut game = selecting_game();
        game.toggle_selection(16);
        assert!(game.selected.is_empty());
    }

    #[test]
    fn test_exact_match_advances() {
        let mut game = selecting_game();
        game.toggle_selection(5);
        game.submit();
        assert_eq!(game.phase, Phase::Advancing);
        assert_eq!(game.outcome, Some(Outcome::LevelPassed(1)));

        game.advance();
        assert_eq!(game.level, 2);
        assert_eq!(game.phase, Phase::Reveal);
        assert_eq!(game.outcome, None);
        assert!(game.selected.is_empty());
        assert_eq!(game.attempts_left, MAX_ATTEMPTS);
        assert_eq!(game.time_left, LEVEL_DURATION);
        assert_eq!(game.positions.targets.len(), 4);
        assert_eq!(game.positions.decoys.len(), 2);
    }

    #[test]
    fn test_exact_match_on_last_level_wins() {
        let mut game = selecting_game();
        game.level = 3;
        game.toggle_selection(5);
        game.submit();
        assert_eq!(game.phase, Phase::Won);
        assert_eq!(game.outcome, Some(Outcome::GameWon));
    }

    #[test]
    fn test_decoy_hit_loses_immediately() {
        let mut game = selecting_game();
        game.toggle_selection(5);
        game.toggle_selection(9);
        game.submit();
        assert_eq!(game.phase, Phase::Lost);
        assert_eq!(game.outcome, Some(Outcome::DecoyHit));
        assert!(game.attempts_left > 0);
    }

    #[test]
    fn test_failed_attempt_returns_to_selecting() {
        let mut game = selecting_game();
        game.toggle_selection(2);
        game.submit();
        assert_eq!(game.phase, Phase::Selecting);
        assert_eq!(game.attempts_left, MAX_ATTEMPTS - 1);
        assert!(game.selected.contains(&2));
        assert_eq!(
            game.last_evaluation,
            Some(Evaluation {
                correct: 0,
                wrong: 1,
                decoy_hit: false,
            })
        );
    }

    #[test]
    fn test_exhausting_attempts_loses() {
        let mut game = selecting_game();
        for _ in 0..MAX_ATTEMPTS {
            game.submit();
        }
        assert_eq!(game.phase, Phase::Lost);
        assert_eq!(game.outcome, Some(Outcome::NoAttempts));
        assert_eq!(game.attempts_left, 0);

        // Terminal: further submits change nothing.
        game.submit();
        assert_eq!(game.phase, Phase::Lost);
    }

    #[test]
    fn test_timeout_forces_evaluation() {
        let mut game = selecting_game();
        for _ in 0..LEVEL_DURATION - 1 {
            game.tick();
        }
        assert_eq!(game.phase, Phase::Selecting);
        assert_eq!(game.time_left, 1);

        game.tick();
        assert_eq!(game.phase, Phase::Lost);
        assert_eq!(game.outcome, Some(Outcome::TimeUp));
        assert_eq!(game.last_evaluation, Some(Evaluation::default()));
    }

    #[test]
    fn test_timeout_beats_pending_exact_selection() {
        let mut game = selecting_game();
        game.toggle_selection(5);
        game.time_left = 1;
        game.tick();
        assert_eq!(game.phase, Phase::Lost);
        assert_eq!(game.outcome, Some(Outcome::TimeUp));
    }

    #[test]
    fn test_tick_ignored_outside_selecting() {
        let mut game = Game::new(1);
        game.restart();
        game.tick();
        assert_eq!(game.time_left, LEVEL_DURATION);
    }

    #[test]
    fn test_restart_after_loss_resets_to_level_one() {
        let mut game = selecting_game();
        game.level = 2;
        game.toggle_selection(9);
        game.submit();
        assert_eq!(game.phase, Phase::Lost);

        game.restart();
        assert_eq!(game.level, 1);
        assert_eq!(game.phase, Phase::Reveal);
        assert_eq!(game.outcome, None);
        assert_eq!(game.attempts_left, MAX_ATTEMPTS);
        assert!(game.selected.is_empty());
    }

    #[test]
    fn test_each_level_start_regenerates_from_its_config() {
        let mut game = Game::new(42);
        game.restart();

        for level in 1..=LEVELS.len() {
            assert_eq!(game.level, level);
            let config = game.config();
            assert_eq!(game.positions.targets.len(), config.target_count);
            assert_eq!(game.positions.decoys.len(), config.decoy_count);
            assert!(game.positions.targets.is_disjoint(&game.positions.decoys));

            game.reveal_over();
            game.selected = game.positions.targets.clone();
            game.submit();
            if level < LEVELS.len() {
                game.advance();
            }
        }
        assert_eq!(game.phase, Phase::Won);
    }

    #[test]
    fn test_reduce_dispatches_commands() {
        use std::rc::Rc;

        let game = Rc::new(selecting_game())
            .reduce(GameAction::Toggle(5))
            .reduce(GameAction::Submit);
        assert_eq!(game.phase, Phase::Advancing);

        let game = game.reduce(GameAction::Advance);
        assert_eq!(game.level, 2);
        assert_eq!(game.phase, Phase::Reveal);
    }
}
