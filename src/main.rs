mod components;
mod game;
mod timer;

fn main() {
    console_error_panic_hook::set_once();
    // The level table is a compile-time constant; a bad entry is a defect
    // caught before the first frame, not a runtime condition.
    game::validate_levels().expect("invalid level table");
    yew::start_app::<components::app::App>();
}
