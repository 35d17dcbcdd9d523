use crate::game::{DECOY_EMOJI, TARGET_EMOJI};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Glyph {
    Empty,
    Wolf,
    Raccoon,
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub glyph: Glyph,
    pub selected: bool,
}

#[function_component(Cell)]
pub fn cell(props: &Props) -> Html {
    let Props {
        x,
        y,
        size,
        glyph,
        selected,
    } = props.clone();
    let x = x * size;
    let y = y * size;

    let class = if selected { "cell selected" } else { "cell" };
    let rect = html! {
        <rect
            x={x.to_string()}
            y={y.to_string()}
            width={size.to_string()}
            height={size.to_string()}
            class={class} />
    };

    let symbol = match glyph {
        Glyph::Empty => None,
        Glyph::Wolf => Some(TARGET_EMOJI),
        Glyph::Raccoon => Some(DECOY_EMOJI),
    };

    match symbol {
        Some(symbol) => {
            let cx = (x + size / 2.).to_string();
            let cy = (y + size / 2.).to_string();
            let font_size = format!("{}px", size * 0.6);
            html! {
                <>
                    {rect}
                    <text
                        x={cx}
                        y={cy}
                        font-size={font_size}
                        dominant-baseline="central"
                        text-anchor="middle">
                        {symbol.to_string()}
                    </text>
                </>
            }
        }
        None => rect,
    }
}
