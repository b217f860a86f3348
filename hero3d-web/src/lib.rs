/// hero3d Web - canvas 2D host for the hero background
///
/// Owns the canvas, subscribes to pointer-move and resize, and drives the
/// frame loop from `requestAnimationFrame` until unmounted.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hero3d_core::{DrawSurface, FrameDriver, LoopState, Projected, SceneConfig, Segment, Style, Viewport};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

/// Canvas 2D context as a drawing surface
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_disc(&mut self, center: Projected, radius: f64, style: &Style) {
        self.ctx.set_global_alpha(style.alpha);
        self.ctx.set_fill_style_str(&style.color.to_hex());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn stroke_segments(&mut self, segments: &[Segment], style: &Style) {
        self.ctx.set_global_alpha(style.alpha);
        self.ctx.set_stroke_style_str(&style.color.to_hex());
        self.ctx.set_line_width(style.line_width);
        self.ctx.begin_path();
        for segment in segments {
            self.ctx.move_to(segment.start.x, segment.start.y);
            self.ctx.line_to(segment.end.x, segment.end.y);
        }
        self.ctx.stroke();
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Live loop state, present only while mounted
struct Running {
    window: Window,
    driver: Rc<RefCell<FrameDriver>>,
    frame: FrameSlot,
    frame_request: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
}

impl Running {
    fn teardown(self) {
        self.driver.borrow_mut().stop();

        if let Some(id) = self.frame_request.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        );

        // The frame closure holds its own slot; taking it breaks the cycle
        self.frame.borrow_mut().take();
    }
}

/// Hero background bound to one canvas.
///
/// If the canvas or its 2D context is unavailable the handle is inert: no
/// animation, no error.
#[wasm_bindgen]
pub struct HeroBackground {
    running: Option<Running>,
}

#[wasm_bindgen]
impl HeroBackground {
    /// Start animating on `canvas`
    pub fn mount(canvas: HtmlCanvasElement) -> Result<HeroBackground, JsValue> {
        let Some(window) = web_sys::window() else {
            log::debug!("no window; hero background not started");
            return Ok(Self::inert());
        };
        let Some(ctx) = context_2d(&canvas) else {
            log::debug!("2d context unavailable; hero background not started");
            return Ok(Self::inert());
        };
        let Some(viewport) = fit_to_window(&window, &canvas) else {
            log::debug!("window size unavailable; hero background not started");
            return Ok(Self::inert());
        };

        let mut rng = SmallRng::seed_from_u64(entropy_seed());
        let driver = Rc::new(RefCell::new(FrameDriver::new(
            viewport,
            SceneConfig::default(),
            &mut rng,
        )));

        let on_resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            let driver = driver.clone();
            Closure::wrap(Box::new(move || {
                if let Some(viewport) = fit_to_window(&window, &canvas) {
                    driver.borrow_mut().resize(viewport);
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let on_mouse_move = {
            let driver = driver.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                driver
                    .borrow_mut()
                    .pointer_moved(f64::from(event.client_x()), f64::from(event.client_y()));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback(
            "mousemove",
            on_mouse_move.as_ref().unchecked_ref(),
        )?;

        let frame: FrameSlot = Rc::new(RefCell::new(None));
        let frame_request = Rc::new(Cell::new(None));
        {
            let slot = frame.clone();
            let window = window.clone();
            let driver = driver.clone();
            let frame_request = frame_request.clone();
            let mut surface = CanvasSurface { ctx };
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame_request.set(None);
                if driver.borrow_mut().tick(&mut surface) == LoopState::Stopped {
                    return;
                }
                if let Some(callback) = slot.borrow().as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(id) => frame_request.set(Some(id)),
                        Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        if let Some(callback) = frame.borrow().as_ref() {
            let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
            frame_request.set(Some(id));
        }

        log::info!(
            "hero background mounted at {}x{}",
            viewport.width,
            viewport.height
        );

        Ok(Self {
            running: Some(Running {
                window,
                driver,
                frame,
                frame_request,
                on_resize,
                on_mouse_move,
            }),
        })
    }

    /// Start animating on the canvas with the given element id
    pub fn mount_by_id(id: &str) -> Result<HeroBackground, JsValue> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        match canvas {
            Some(canvas) => Self::mount(canvas),
            None => {
                log::debug!("no canvas #{id}; hero background not started");
                Ok(Self::inert())
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Cancel the pending frame and remove listeners
    pub fn unmount(&mut self) {
        if let Some(running) = self.running.take() {
            running.teardown();
        }
    }
}

impl HeroBackground {
    fn inert() -> Self {
        Self { running: None }
    }
}

impl Drop for HeroBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Size the canvas to the window and return the new viewport
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Some(Viewport::new(width, height))
}

fn entropy_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}
