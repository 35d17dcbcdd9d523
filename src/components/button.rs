use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub x: f64,
    pub y: f64,
    pub font_size: String,
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<web_sys::MouseEvent>,
}

/// SVG text button with a border fitted to the rendered label.
#[function_component(Button)]
pub fn button(props: &Props) -> Html {
    let Props {
        x,
        y,
        font_size,
        children,
        onclick,
    } = props;

    let frame = use_state(|| html! {<></>});
    let label_ref = use_node_ref();

    let cloned_frame = frame.clone();
    use_effect_with_deps(
        move |label_ref| {
            if let Some(label) = label_ref.cast::<web_sys::SvgGraphicsElement>() {
                if let Ok(bbox) = label.get_b_box() {
                    let x = (bbox.x() - 4.).to_string();
                    let y = (bbox.y() - 2.).to_string();
                    let width = (bbox.width() + 8.).to_string();
                    let height = (bbox.height() + 4.).to_string();
                    cloned_frame.set(html! {
                        <rect x={x} y={y} width={width} height={height} class="button-frame" />
                    })
                }
            }
            || ()
        },
        label_ref.clone(),
    );

    html! {
        <>
            {(*frame).clone()}
            <text
                x={x.to_string()}
                y={y.to_string()}
                font-size={font_size.clone()}
                onclick={onclick}
                class="button"
                dominant-baseline="middle"
                text-anchor="middle"
                ref={label_ref}>
                {for children.iter()}
            </text>
        </>
    }
}
