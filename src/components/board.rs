use super::button::Button;
use super::cell::{Cell, Glyph};
use crate::game::Phase;
use yew::prelude::*;

/// One grid cell prepared for rendering.
#[derive(Clone, Copy, PartialEq)]
pub struct CellView {
    pub x: f64,
    pub y: f64,
    pub glyph: Glyph,
    pub selected: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub cell_size: f64,
    pub grid_size: usize,
    pub cells: Vec<CellView>,
    pub time_left: u32,
    pub attempts_left: u32,
    pub status: Vec<String>,
    pub phase: Phase,
    pub onsubmit: Callback<web_sys::MouseEvent>,
    pub onrestart: Callback<web_sys::MouseEvent>,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props {
        cell_size,
        grid_size,
        cells,
        time_left,
        attempts_left,
        status,
        phase,
        onsubmit,
        onrestart,
    } = props;
    let board_size = *grid_size as f64 * cell_size;
    let width = board_size.to_string();
    let height = (board_size * 1.3).to_string();
    let line_height = board_size / 16.;
    let font_size = format!("{}px", line_height);

    let cells = cells.iter().map(|cell| {
        let &CellView {
            x,
            y,
            glyph,
            selected,
        } = cell;
        html! {
            <Cell x={x} y={y} size={*cell_size} glyph={glyph} selected={selected} />
        }
    });

    let hud = if *phase == Phase::Idle {
        html! {}
    } else {
        html! {
            <text x="0" y={(board_size + line_height).to_string()} class="text">
                {format!("Time left: {}s | Attempts left: {}", time_left, attempts_left)}
            </text>
        }
    };

    let status = status.iter().enumerate().map(|(row, line)| {
        let y = (board_size + line_height * (row + 2) as f64).to_string();
        html! {
            <text x="0" y={y} class="text">{line.clone()}</text>
        }
    });

    let button = {
        let x = board_size / 2.;
        let y = board_size * 1.25;
        let font_size = format!("{}px", board_size / 12.);
        match phase {
            Phase::Idle => html! {
                <Button x={x} y={y} font_size={font_size} onclick={onrestart.clone()}>
                    {"LET'S BEGIN"}
                </Button>
            },
            Phase::Selecting => html! {
                <Button x={x} y={y} font_size={font_size} onclick={onsubmit.clone()}>
                    {"SUBMIT"}
                </Button>
            },
            Phase::Won | Phase::Lost => html! {
                <Button x={x} y={y} font_size={font_size} onclick={onrestart.clone()}>
                    {"🔁 PLAY AGAIN"}
                </Button>
            },
            _ => html! {},
        }
    };

    html! {
        <svg width={width} height={height} font-size={font_size}>
            {for cells}
            {hud}
            {for status}
            {button}
        </svg>
    }
}
