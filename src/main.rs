//! Mini Arcade entry point
//!
//! The browser build drives the games from JS through the library crate. The
//! native binary runs a short scripted demo of each game headless, which
//! doubles as a smoke test of the whole stack.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use mini_arcade::audio::NullSink;
    use mini_arcade::balloon::{self, BalloonIntent, BalloonPhase, BalloonState};
    use mini_arcade::core::{
        FixedTimestep, IntentQueue, KeyLatch, OverlayKind, Presenter, sync_overlay,
    };
    use mini_arcade::melody::{self, MelodyIntent, MelodyPhase, MelodyState};
    use mini_arcade::runner::{self, ObstacleKind, RunnerInput, RunnerPhase, RunnerState};
    use mini_arcade::snake::{self, Direction, SnakeIntent, SnakePhase, SnakeState};
    use mini_arcade::storage::MemoryStore;
    use mini_arcade::{BestScores, GameId, Settings};

    const DEMO_SEED: u64 = 0xC0FFEE;

    /// Presenter that narrates overlay changes to the log.
    struct LogPresenter {
        name: &'static str,
    }

    impl Presenter for LogPresenter {
        fn render(&mut self) {}

        fn show_overlay(&mut self, kind: OverlayKind) {
            log::info!("[{}] overlay up: {kind:?}", self.name);
        }

        fn hide_overlay(&mut self, kind: OverlayKind) {
            log::info!("[{}] overlay down: {kind:?}", self.name);
        }

        fn update_scoreboard(&mut self, score: u32, lives: u8) {
            log::debug!("[{}] score {score} lives {lives}", self.name);
        }
    }

    pub fn run() {
        let mut store = MemoryStore::new();
        let settings = Settings::load(&store);
        let mut best = BestScores::load(&store);

        let score = runner_demo(settings.character);
        if best.record(GameId::Runner, score) {
            best.save(&mut store);
        }
        log::info!("runner demo finished with {score}");

        let score = snake_demo(settings.grade);
        if best.record(GameId::Snake, score) {
            best.save(&mut store);
        }
        log::info!("snake demo finished with {score}");

        let score = balloon_demo();
        if best.record(GameId::Balloon, score) {
            best.save(&mut store);
        }
        log::info!("balloon demo finished with {score}");

        let score = melody_demo();
        if best.record(GameId::Melody, score) {
            best.save(&mut store);
        }
        log::info!("melody demo reached level {score}");

        for game in [GameId::Runner, GameId::Snake, GameId::Balloon, GameId::Melody] {
            log::info!("best {}: {}", game.as_str(), best.best(game));
        }
    }

    /// Run the endless runner with a jump-when-close autopilot.
    fn runner_demo(character: mini_arcade::runner::Character) -> u32 {
        let mut state = RunnerState::new(DEMO_SEED, character);
        let mut presenter = LogPresenter { name: "runner" };
        let mut shown = None;
        let mut timestep = FixedTimestep::new(1.0 / 60.0);

        let mut keys: KeyLatch<char> = KeyLatch::new();
        let mut input = RunnerInput {
            start: true,
            ..Default::default()
        };
        for _frame in 0..3600 {
            // Hold the jump key while a ground obstacle is closing in.
            let player_edge = state.player.body.x + state.player.body.w;
            let threat = state.obstacles.iter().any(|o| {
                o.kind == ObstacleKind::Ground
                    && o.body.x > player_edge
                    && o.body.x < player_edge + 90.0
            });
            if threat {
                keys.press(' ');
            } else {
                keys.release(' ');
            }
            input.jump = keys.is_held(' ');

            for _ in 0..timestep.accumulate(1.0 / 60.0) {
                runner::tick(&mut state, &input);
                input.start = false;
            }
            shown = sync_overlay(shown, runner::overlay_for(state.phase), &mut presenter);
            runner::present(&state, &mut presenter);

            if state.phase == RunnerPhase::GameOver {
                break;
            }
        }
        state.final_score()
    }

    /// Run the quiz snake with food-chasing steering and perfect answers.
    fn snake_demo(grade: mini_arcade::snake::Grade) -> u32 {
        let mut state = SnakeState::new(DEMO_SEED, grade);
        let mut presenter = LogPresenter { name: "snake" };
        let mut shown = None;
        let mut intents: IntentQueue<SnakeIntent> = IntentQueue::new();

        intents.push(SnakeIntent::Start);
        for _frame in 0..4000 {
            match state.phase {
                SnakePhase::Playing => {
                    if let Some(turn) = steer(&state) {
                        intents.push(SnakeIntent::SetDirection(turn));
                    }
                }
                SnakePhase::AwaitingAnswer => {
                    let correct = state.question.as_ref().map(|q| q.correct).unwrap_or(0);
                    intents.push(SnakeIntent::Answer(correct));
                }
                // One milestone is enough for a demo.
                SnakePhase::Victory => intents.push(SnakeIntent::Stop),
                SnakePhase::GameOver => break,
                _ => {}
            }
            for intent in intents.drain() {
                snake::apply(&mut state, intent);
            }
            if state.phase == SnakePhase::Menu {
                // Stopped at the victory screen.
                break;
            }
            snake::advance(&mut state, 1.0 / 60.0);
            shown = sync_overlay(shown, snake::overlay_for(state.phase), &mut presenter);
            snake::present(&state, &mut presenter);
        }
        state.final_score()
    }

    /// Turn toward the food, one right angle at a time.
    fn steer(state: &SnakeState) -> Option<Direction> {
        let head = state.head();
        let food = state.food;
        let wanted = match state.dir {
            Direction::Left | Direction::Right => {
                if food.y < head.y {
                    Direction::Up
                } else if food.y > head.y {
                    Direction::Down
                } else {
                    return None;
                }
            }
            Direction::Up | Direction::Down => {
                if food.x < head.x {
                    Direction::Left
                } else if food.x > head.x {
                    Direction::Right
                } else {
                    return None;
                }
            }
        };
        Some(wanted)
    }

    /// Pop every problem balloon and answer it correctly.
    fn balloon_demo() -> u32 {
        let mut state = BalloonState::new(DEMO_SEED);
        let mut presenter = LogPresenter { name: "balloon" };
        let mut shown = None;

        balloon::apply(&mut state, BalloonIntent::Start);
        for _frame in 0..1200 {
            match state.phase {
                BalloonPhase::Playing => {
                    let target = state.balloons.iter().find(|b| !b.trap).map(|b| b.id);
                    if let Some(id) = target {
                        balloon::apply(&mut state, BalloonIntent::Pop(id));
                    }
                }
                BalloonPhase::AwaitingAnswer => {
                    let answer = state.active.map(|a| a.problem.answer()).unwrap_or(0);
                    balloon::apply(&mut state, BalloonIntent::Submit(answer));
                }
                BalloonPhase::GameOver => break,
                _ => {}
            }
            balloon::advance(&mut state, 0.1);
            shown = sync_overlay(shown, balloon::overlay_for(state.phase), &mut presenter);
            balloon::present(&state, &mut presenter);
        }
        state.final_score()
    }

    /// Echo each sequence back perfectly until level 5.
    fn melody_demo() -> u32 {
        let mut state = MelodyState::new(DEMO_SEED);
        let mut presenter = LogPresenter { name: "melody" };
        let mut shown = None;
        let mut sink = NullSink;

        melody::apply(&mut state, MelodyIntent::Start, &mut sink);
        for _frame in 0..4000 {
            if state.phase == MelodyPhase::Listening {
                for note in state.sequence.clone() {
                    melody::apply(&mut state, MelodyIntent::PressKey(note), &mut sink);
                }
            }
            melody::advance(&mut state, 0.05, &mut sink);
            shown = sync_overlay(shown, melody::overlay_for(state.phase), &mut presenter);
            melody::present(&state, &mut presenter);

            if state.level > 5 {
                break;
            }
        }
        state.final_score()
    }
}
