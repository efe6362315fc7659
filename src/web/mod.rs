//! Browser host: finds or creates the page elements, owns the single live
//! game, forwards DOM events into it and drives it from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window, window};

use crate::config::GameConfig;
use crate::error::HostError;
use crate::game::grid::tile_count;
use crate::game::{BestScore, Direction, FrameScheduler, GameState, Session, Signal, StepOutcome};
use crate::{clog, cwarn};

mod render;
mod storage;

pub use storage::LocalStorageStore;

/// Text labels outside the canvas.
struct Labels {
    score: Element,
    best: Element,
}

impl Labels {
    fn show_score(&self, score: u32) {
        self.score.set_text_content(Some(&format!("Score: {score}")));
    }

    fn show_best(&self, best: u32) {
        self.best.set_text_content(Some(&format!("Best: {best}")));
    }
}

struct App {
    config: GameConfig,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    side: u32,
    session: Session<LocalStorageStore>,
    scheduler: FrameScheduler,
    rng: StdRng,
    labels: Labels,
}

impl App {
    /// One animation frame: apply a pending restart, maybe tick, maybe draw.
    fn frame(&mut self, now: f64) {
        if self.session.apply_restart(&mut self.rng) {
            self.scheduler.reset();
            self.labels.show_score(0);
            clog!("restart");
        }

        let decision = self.scheduler.poll(now);
        if decision.advance {
            let outcome = self.session.tick(&mut self.rng);
            self.after_step(outcome);
        }
        if decision.render {
            let frame = render::Frame {
                ctx: &self.ctx,
                side: self.side as f64,
                cell: self.config.cell_size as f64,
                interpolation: self.scheduler.interpolation(now),
                best: self.session.best().get(),
                new_record: self.session.new_record(),
            };
            render::draw(&frame, self.session.state());
        }
    }

    fn after_step(&mut self, outcome: StepOutcome) {
        let score = self.session.state().score();
        match outcome {
            StepOutcome::Ate => self.labels.show_score(score),
            StepOutcome::Crashed => {
                self.labels.show_score(score);
                if self.session.new_record() {
                    self.labels.show_best(score);
                    clog!("game over: new record {score}");
                } else {
                    clog!("game over: score {score}, best {}", self.session.best().get());
                }
            }
            StepOutcome::Idle | StepOutcome::Moved | StepOutcome::Over => {}
        }
    }

    fn resize(&mut self, win: &Window) {
        let (vw, vh) = viewport(win, &self.config);
        let side = self.config.canvas_side(vw, vh);
        if side != self.side {
            self.side = side;
            self.canvas.set_width(side);
            self.canvas.set_height(side);
            let state = self.session.state_mut();
            state.resize(tile_count(side, self.config.cell_size));
            clog!("resize: canvas {side}px, {} tiles", state.tile_count());
        }
        self.scheduler.set_tick_interval(self.config.tick_interval_ms(vw));
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

fn dispatch(signal: Signal) {
    with_app(|app| app.session.state_mut().signal(signal));
}

pub fn start(config: GameConfig) -> Result<(), HostError> {
    if APP.with(|cell| cell.borrow().is_some()) {
        cwarn!("game already running");
        return Ok(());
    }
    let win = window().ok_or(HostError::NoWindow)?;
    let doc = win.document().ok_or(HostError::NoDocument)?;

    let canvas = ensure_canvas(&doc, &config.canvas_id)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(HostError::NoContext)?
        .dyn_into()
        .map_err(|_| HostError::NoContext)?;

    let (vw, vh) = viewport(&win, &config);
    let side = config.canvas_side(vw, vh);
    canvas.set_width(side);
    canvas.set_height(side);

    let mut rng = StdRng::from_entropy();
    let state = GameState::new(tile_count(side, config.cell_size), config.start_cell(), &mut rng);
    let scheduler = FrameScheduler::new(config.tick_interval_ms(vw), config.target_fps);
    let best = BestScore::new(LocalStorageStore::open(&config.storage_key));
    let labels = Labels {
        score: ensure_label(&doc, &config.score_id, "top:10px; left:12px;")?,
        best: ensure_label(&doc, &config.best_id, "top:10px; right:12px;")?,
    };
    labels.show_score(0);
    labels.show_best(best.get());
    clog!(
        "snake: {side}px canvas, {} tiles, tick {}ms, best {}",
        state.tile_count(),
        scheduler.tick_interval_ms(),
        best.get()
    );

    install_listeners(&win, &doc, &canvas, &config)?;
    let app = App {
        config,
        canvas,
        ctx,
        side,
        session: Session::new(state, best),
        scheduler,
        rng,
        labels,
    };
    APP.with(|cell| cell.replace(Some(app)));
    start_loop();
    Ok(())
}

fn viewport(win: &Window, config: &GameConfig) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64());
    let h = win.inner_height().ok().and_then(|v| v.as_f64());
    (w.unwrap_or(config.max_canvas), h.unwrap_or(config.max_canvas))
}

fn ensure_canvas(doc: &Document, id: &str) -> Result<HtmlCanvasElement, HostError> {
    if let Some(el) = doc.get_element_by_id(id) {
        return el.dyn_into().map_err(|_| HostError::NotACanvas(id.to_string()));
    }
    let c: HtmlCanvasElement = doc
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| HostError::NotACanvas(id.to_string()))?;
    c.set_id(id);
    c.set_attribute("style", "display:block; margin:48px auto 0; background:#111; border:2px solid #333; touch-action:none;")?;
    doc.body().ok_or(HostError::NoBody)?.append_child(&c)?;
    Ok(c)
}

fn ensure_label(doc: &Document, id: &str, position: &str) -> Result<Element, HostError> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(id);
    div.set_attribute(
        "style",
        &format!("position:fixed; {position} font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45;"),
    )?;
    doc.body().ok_or(HostError::NoBody)?.append_child(&div)?;
    Ok(div)
}

fn install_listeners(
    win: &Window,
    doc: &Document,
    canvas: &HtmlCanvasElement,
    config: &GameConfig,
) -> Result<(), HostError> {
    // Keyboard: arrows/WASD steer, any key restarts after game over
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let signal = crate::game::input::signal_for_key(&evt.key());
            if matches!(signal, Signal::Turn(_)) {
                // keep arrows from scrolling the page
                evt.prevent_default();
            }
            dispatch(signal);
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Tap or click on the board
    for kind in ["touchstart", "mousedown"] {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            if evt.type_() == "touchstart" {
                // suppress the emulated mousedown that follows
                evt.prevent_default();
            }
            dispatch(Signal::Any);
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // On-screen direction pad, if the page provides one
    let dirs = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    for (id, dir) in config.button_ids.iter().zip(dirs) {
        let Some(button) = doc.get_element_by_id(id) else {
            continue;
        };
        for kind in ["touchstart", "mousedown"] {
            let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
                if evt.type_() == "touchstart" {
                    evt.prevent_default();
                }
                dispatch(Signal::Turn(dir));
            }) as Box<dyn FnMut(_)>);
            button.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }

    // Resize: refit the canvas and clamp everything onto the new grid
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            if let Some(w) = window() {
                with_app(|app| app.resize(&w));
            }
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_app(|app| app.frame(ts));
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
