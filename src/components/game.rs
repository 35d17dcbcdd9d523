use super::board::{Board, CellView};
use super::cell::Glyph;
use crate::game::{self, GameAction, Phase};
use crate::timer::TimerHandle;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub board_size: f64,
    pub left: f64,
    pub top: f64,
}

#[function_component(Game)]
pub fn game_component(props: &Props) -> Html {
    let Props {
        board_size,
        left,
        top,
    } = props.clone();

    let game = use_reducer(|| {
        let random = js_sys::Math::random();
        game::Game::new(u64::from_be_bytes(random.to_be_bytes()))
    });

    // One scheduled task at a time, keyed on the phase. Leaving a phase
    // drops its handle, which cancels the underlying JS timer before the
    // next phase schedules anything.
    {
        let game = game.clone();
        let phase = game.phase;
        use_effect_with_deps(
            move |&phase| {
                let task = match phase {
                    Phase::Reveal => {
                        let game = game.clone();
                        Some(TimerHandle::timeout(game::REVEAL_MILLIS, move || {
                            game.dispatch(GameAction::RevealOver)
                        }))
                    }
                    Phase::Selecting => {
                        let game = game.clone();
                        Some(TimerHandle::interval(game::TICK_MILLIS, move || {
                            game.dispatch(GameAction::Tick)
                        }))
                    }
                    Phase::Advancing => {
                        let game = game.clone();
                        Some(TimerHandle::timeout(game::ADVANCE_MILLIS, move || {
                            game.dispatch(GameAction::Advance)
                        }))
                    }
                    _ => None,
                };
                move || drop(task)
            },
            phase,
        );
    }

    let window = web_sys::window().unwrap();
    let grid_size = game.config().grid_size;
    let cell_size = board_size / grid_size as f64;

    let toggle_at = {
        let game = game.clone();
        move |client_x: f64, client_y: f64| {
            let x = (client_x - left) / cell_size;
            let y = (client_y - top) / cell_size;
            if x < 0. || y < 0. || x >= grid_size as f64 || y >= grid_size as f64 {
                return;
            }
            let index = y as usize * grid_size + x as usize;
            game.dispatch(GameAction::Toggle(index));
        }
    };

    let cloned_toggle_at = toggle_at.clone();
    let onmousedown = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        cloned_toggle_at(event.client_x() as f64, event.client_y() as f64);
    });

    let ontouchstart = Callback::from(move |event: web_sys::TouchEvent| {
        let touches = event.target_touches();
        for i in 0..touches.length() {
            if let Some(touch) = touches.item(i) {
                toggle_at(touch.client_x() as f64, touch.client_y() as f64);
            }
        }
    });

    let (onmousedown, ontouchstart) = if window.navigator().max_touch_points() > 0 {
        (Callback::from(|_| ()), ontouchstart)
    } else {
        (onmousedown, Callback::from(|_| ()))
    };

    let cloned_game = game.clone();
    let onsubmit = Callback::from(move |_| cloned_game.dispatch(GameAction::Submit));
    let cloned_game = game.clone();
    let onrestart = Callback::from(move |_| cloned_game.dispatch(GameAction::Restart));

    let revealed = game.phase == Phase::Reveal;
    let cells = (0..game.config().total_cells())
        .map(|index| {
            let glyph = if revealed && game.positions.targets.contains(&index) {
                Glyph::Wolf
            } else if revealed && game.positions.decoys.contains(&index) {
                Glyph::Raccoon
            } else {
                Glyph::Empty
            };
            CellView {
                x: (index % grid_size) as f64,
                y: (index / grid_size) as f64,
                glyph,
                selected: game.selected.contains(&index),
            }
        })
        .collect::<Vec<_>>();

    let mut status = Vec::new();
    if game.phase == Phase::Selecting {
        if let Some(evaluation) = game.last_evaluation {
            status.push(format!(
                "✅ {} out of {} wolves ❌ {} wrong ({}/{} tries)",
                evaluation.correct,
                game.positions.targets.len(),
                evaluation.wrong,
                game::MAX_ATTEMPTS - game.attempts_left,
                game::MAX_ATTEMPTS,
            ));
        }
    }
    if let Some(outcome) = game.outcome {
        status.push(outcome.message());
    }

    html! {
        <div
            class="game"
            style={format!("top: {}px; left: {}px;", top, left)}
            onmousedown={onmousedown}
            ontouchstart={ontouchstart}>
            <Board
                cell_size={cell_size}
                grid_size={grid_size}
                cells={cells}
                time_left={game.time_left}
                attempts_left={game.attempts_left}
                status={status}
                phase={game.phase}
                onsubmit={onsubmit}
                onrestart={onrestart} />
        </div>
    }
}
