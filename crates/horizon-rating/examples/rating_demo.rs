//! Horizon Rating Demo
//!
//! Two screens wired to a `RatingView`'s public properties:
//! - Screen 1: an editable half-star rating with a delegate printing updates
//! - Screen 2: a read-only whole-star display of the last submitted rating
//!
//! Rendering is left to the host; each frame's display list is summarized on
//! the console instead.
//!
//! Run with: cargo run -p horizon-rating --example rating_demo
//! Set `RUST_LOG=horizon_rating=debug` to watch touch and layout tracing.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use horizon_rating::prelude::*;

/// Where the active rating view sits in the window.
const VIEW_FRAME: Rect = Rect::new(40.0, 80.0, 400.0, 64.0);

/// Prints every user-driven change and remembers the submitted value.
#[derive(Default)]
struct ConsoleDelegate {
    submitted: Mutex<Option<f64>>,
}

impl RatingViewDelegate for ConsoleDelegate {
    fn rating_is_updating(&self, _view: &RatingView, rating: f64) {
        println!("  rating... {rating:.1}");
    }

    fn rating_did_update(&self, _view: &RatingView, rating: f64) {
        println!("Submitted rating: {rating:.1}");
        *self.submitted.lock() = Some(rating);
    }
}

struct App {
    window: Option<Arc<Window>>,
    /// Screen 1: editable input.
    input: RatingView,
    /// Screen 2: read-only summary.
    summary: RatingView,
    /// Which screen is shown.
    screen: usize,
    delegate: Arc<ConsoleDelegate>,
    touches: TouchInputHandler,
    cursor: Point,
    left_pressed: bool,
}

impl App {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let delegate = Arc::new(ConsoleDelegate::default());
        let empty = Image::new(64, 64)?;
        let full = Image::new(64, 64)?;

        let mut input = RatingView::new()
            .with_mode(RatingMode::Half)
            .with_empty_image(empty.clone())
            .with_full_image(full.clone())
            .with_rating(2.5)
            .with_delegate(&delegate);
        input.set_geometry(VIEW_FRAME);

        let config = RatingViewConfig::from_toml_str(
            r#"
            max_rating = 5
            mode = "whole"
            editable = false
            content_mode = "fit"
            "#,
        )?;
        let mut summary = RatingView::from_config(&config);
        summary.set_empty_image(Some(empty));
        summary.set_full_image(Some(full));
        summary.set_geometry(VIEW_FRAME);

        input.rating_updated.connect(|rating| {
            tracing::info!(rating, "rating_updated signal");
        });

        Ok(Self {
            window: None,
            input,
            summary,
            screen: 0,
            delegate,
            touches: TouchInputHandler::new(),
            cursor: Point::ZERO,
            left_pressed: false,
        })
    }

    fn active_view(&mut self) -> &mut RatingView {
        if self.screen == 0 {
            &mut self.input
        } else {
            &mut self.summary
        }
    }

    fn switch_screen(&mut self) {
        self.screen = (self.screen + 1) % 2;
        if self.screen == 1
            && let Some(rating) = *self.delegate.submitted.lock()
        {
            self.summary.set_rating(rating);
        }
        println!("Screen {}", self.screen + 1);
    }

    fn dispatch(&mut self, mut event: WidgetEvent) {
        let view = self.active_view();
        if view.event(&mut event)
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }

    fn render(&mut self) {
        let screen = self.screen;
        let view = self.active_view();
        view.layout_if_needed();

        let mut list = DisplayList::new();
        let mut ctx = PaintContext::new(&mut list, view.size());
        view.paint(&mut ctx);

        println!(
            "[screen {}] rating {:.1} of {}, {} draw commands",
            screen + 1,
            view.rating(),
            view.max_rating(),
            list.len()
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Horizon Rating Demo")
            .with_inner_size(LogicalSize::new(480.0, 224.0));
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let local = |window_pos: Point| window_pos - VIEW_FRAME.origin;

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.render(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                let buttons = if self.left_pressed {
                    MouseButton::Left.mask()
                } else {
                    0
                };
                let cursor = self.cursor;
                self.dispatch(WidgetEvent::MouseMove(MouseMoveEvent::new(
                    local(cursor),
                    cursor,
                    buttons,
                )));
            }
            WindowEvent::MouseInput {
                state,
                button: WinitMouseButton::Left,
                ..
            } => {
                let cursor = self.cursor;
                let event = match state {
                    ElementState::Pressed => {
                        self.left_pressed = true;
                        WidgetEvent::MousePress(MousePressEvent::new(
                            MouseButton::Left,
                            local(cursor),
                            cursor,
                        ))
                    }
                    ElementState::Released => {
                        self.left_pressed = false;
                        WidgetEvent::MouseRelease(MouseReleaseEvent::new(
                            MouseButton::Left,
                            local(cursor),
                            cursor,
                        ))
                    }
                };
                self.dispatch(event);
            }
            WindowEvent::Touch(touch) => {
                let mut event = self.touches.handle_touch(&touch);
                event.map_to_local(VIEW_FRAME.origin);
                self.dispatch(WidgetEvent::Touch(event));
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Tab) => self.switch_screen(),
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    _ => return,
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Horizon Rating Demo");
    println!("  Drag or tap across the stars to rate (screen 1)");
    println!("  Tab    - Switch screens");
    println!("  Escape - Quit");
    println!();

    let event_loop = EventLoop::new()?;
    let mut app = App::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
