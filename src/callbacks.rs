use std::{cell::RefCell, rc::Rc};

use sim::Point;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::{app::App, window};

/// Size of the browser viewport in CSS pixels.
pub fn viewport() -> Point {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);
    let height = window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);

    Point(width, height)
}

/// Stretches the canvas over the viewport and keeps the simulation bounds in sync.
pub fn on_resize(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
    let bounds = viewport();

    canvas.set_width(bounds.0 as u32);
    canvas.set_height(bounds.1 as u32);

    app.borrow_mut()
        .on_resize(Point(canvas.width() as f64, canvas.height() as f64));
}

pub fn on_click(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement, event: MouseEvent) {
    let bound = canvas.get_bounding_client_rect();

    let x = event.client_x() as f64 - bound.left();
    let y = event.client_y() as f64 - bound.top();

    // the canvas may be scaled by CSS
    let scale_x = if bound.width() > 0.0 {
        canvas.width() as f64 / bound.width()
    } else {
        1.0
    };
    let scale_y = if bound.height() > 0.0 {
        canvas.height() as f64 / bound.height()
    } else {
        1.0
    };

    app.borrow_mut().on_click(Point(x * scale_x, y * scale_y));
}

pub fn on_theme(app: &Rc<RefCell<App>>, name: &str) {
    app.borrow_mut().on_theme(name);
}

pub fn on_auto_launch(app: &Rc<RefCell<App>>) {
    app.borrow_mut().on_auto_launch();
}

pub fn on_opening_launch(app: &Rc<RefCell<App>>) {
    log::debug!("opening launch");
    app.borrow_mut().on_opening_launch();
}
