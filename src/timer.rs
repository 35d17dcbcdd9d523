use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A scheduled callback on the browser event loop. Dropping the handle
/// cancels the underlying JS timer, so a stale tick can never fire after
/// the phase that scheduled it has ended.
pub struct TimerHandle {
    id: i32,
    repeating: bool,
    _closure: Closure<dyn FnMut()>,
}

impl TimerHandle {
    pub fn timeout(millis: i32, func: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(func) as Box<dyn FnMut()>);
        let id = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .unwrap();
        TimerHandle {
            id,
            repeating: false,
            _closure: closure,
        }
    }

    pub fn interval(millis: i32, func: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(func) as Box<dyn FnMut()>);
        let id = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .unwrap();
        TimerHandle {
            id,
            repeating: true,
            _closure: closure,
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let window = web_sys::window().unwrap();
        if self.repeating {
            window.clear_interval_with_handle(self.id);
        } else {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
