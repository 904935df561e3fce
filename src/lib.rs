mod app;
mod callbacks;
mod draw;
mod logger;

use std::{cell::RefCell, rc::Rc};

use app::App;
use sim::Config;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

pub const CANVAS_ID: &str = "fireworks-canvas";

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

fn document() -> web_sys::Document {
    window()
        .document()
        .expect("should have a document on window")
}

/// Finds the display canvas, or creates one at the end of `<body>`.
fn canvas() -> Result<HtmlCanvasElement, JsValue> {
    if let Some(element) = document().get_element_by_id(CANVAS_ID) {
        return Ok(element.dyn_into::<HtmlCanvasElement>()?);
    }

    let canvas = document()
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;

    canvas.set_id(CANVAS_ID);

    document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&canvas)?;

    Ok(canvas)
}

/// Reads the JSON in the canvas's `data-config` attribute, falling back to defaults.
fn load_config(canvas: &HtmlCanvasElement) -> Config {
    let Some(source) = canvas.dataset().get("config") else {
        return Config::default();
    };

    match serde_json::from_str::<Config>(&source) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{}. Using defaults.", err);
                Config::default()
            }
        },
        Err(err) => {
            log::warn!("Failed to parse data-config: {}. Using defaults.", err);
            Config::default()
        }
    }
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init();

    let canvas = Rc::new(canvas()?);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

    let app = App::new(load_config(&canvas), callbacks::viewport(), seed)?;
    let config = app.config().clone();
    let app = Rc::new(RefCell::new(app));

    callbacks::on_resize(&app, &canvas);

    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let app = app.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            {
                let mut app = app.borrow_mut();

                app.tick();

                if let Err(err) = app.draw(&context) {
                    log::error!("failed to draw frame: {:?}", err);
                }
            }

            if let Some(closure) = f.borrow().as_ref() {
                request_animation_frame(closure);
            }
        }));

        if let Some(closure) = g.borrow().as_ref() {
            request_animation_frame(closure);
        }
    }

    {
        let app = app.clone();
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            callbacks::on_click(&app, &target, event);
        });
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| {
            callbacks::on_resize(&app, &canvas);
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let buttons = document().query_selector_all("[data-theme]")?;

        for index in 0..buttons.length() {
            let Some(button) = buttons.item(index) else {
                continue;
            };
            let button = button.dyn_into::<HtmlElement>()?;
            let Some(name) = button.dataset().get("theme") else {
                continue;
            };

            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::MouseEvent| {
                callbacks::on_theme(&app, &name);
            });
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        log::debug!("wired {} theme buttons", buttons.length());
    }

    if let Some(interval) = config.auto_launch_ms {
        let app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            callbacks::on_auto_launch(&app);
        });
        window().set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval.min(i32::MAX as u32) as i32,
        )?;
        closure.forget();
    }

    if let Some(delay) = config.opening_delay_ms {
        let app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            callbacks::on_opening_launch(&app);
        });
        window().set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay.min(i32::MAX as u32) as i32,
        )?;
        closure.forget();
    }

    Ok(())
}
