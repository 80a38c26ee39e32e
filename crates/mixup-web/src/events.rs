use crate::input;
use mixup_core::{DragRouter, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub router: Rc<RefCell<DragRouter>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let css = input::pointer_canvas_css(&ev, &w.canvas);
        let mut scene = w.scene.borrow_mut();
        let Some(world_y) = input::pointer_world_y(&scene, &w.canvas, css) else {
            return;
        };
        let grabbed =
            w.router
                .borrow_mut()
                .pointer_down(&mut scene, ev.pointer_id() as i64, css.x, world_y);
        if let Some(row) = grabbed {
            log::info!("[pointer] begin drag on {}", row.label());
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.router.borrow().active_row().is_none() {
            return;
        }
        let css = input::pointer_canvas_css(&ev, &w.canvas);
        let mut scene = w.scene.borrow_mut();
        w.router
            .borrow_mut()
            .pointer_move(&mut scene, ev.pointer_id() as i64, css.x);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event_name: &'static str) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let css = input::pointer_canvas_css(&ev, &w.canvas);
        let mut scene = w.scene.borrow_mut();
        let mut router = w.router.borrow_mut();
        if event_name == "pointercancel" {
            router.pointer_cancel(&mut scene, ev.pointer_id() as i64, css.x);
        } else {
            router.pointer_up(&mut scene, ev.pointer_id() as i64, css.x);
        }
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>) {
    match ev.key().as_str() {
        "r" | "R" => scene.borrow_mut().shuffle(&mut rand::thread_rng()),
        "0" | "Home" => {
            scene.borrow_mut().reset();
            ev.prevent_default();
        }
        _ => {}
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &scene);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
