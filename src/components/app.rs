use super::game::Game;
use yew::prelude::*;

fn fit_with_aspect_ratio(
    width: f64,
    height: f64,
    aspect_width: f64,
    aspect_height: f64,
) -> (f64, f64) {
    if width * aspect_height > height * aspect_width {
        (height * aspect_width / aspect_height, height)
    } else {
        (width, width * aspect_height / aspect_width)
    }
}

pub struct App {
    board_size: f64,
    left: f64,
    top: f64,
}

pub enum Msg {
    Resize((f64, f64, f64)),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            board_size: 400.,
            left: 0.,
            top: 0.,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resize((board_size, left, top)) => {
                #[allow(clippy::float_cmp)]
                let should_render =
                    (self.board_size, self.left, self.top) != (board_size, left, top);
                self.board_size = board_size;
                self.left = left;
                self.top = top;
                should_render
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>) -> bool {
        false
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let window = web_sys::window().unwrap();
        let width = window.inner_width().unwrap().as_f64().unwrap();
        let height = window.inner_height().unwrap().as_f64().unwrap();

        // The board is square, with room below for the HUD and buttons.
        let (resized_width, resized_height) =
            fit_with_aspect_ratio(width - 20., height - 20., 10., 13.);
        let board_size = resized_width;
        let left = (width - resized_width) / 2.;
        let top = (height - resized_height) / 2.;

        ctx.link()
            .callback(Msg::Resize)
            .emit((board_size, left, top));
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <Game board_size={self.board_size} left={self.left} top={self.top} />
            </div>
        }
    }
}
