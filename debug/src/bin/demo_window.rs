//! Windowed demo viewer: DemoHost drives the active demo, WindowPresenter draws it.
//! Tab switches to the next demo. Set DEMO_GALLERY_DEMO to pick the first one.
//! Run: cargo run -p debug --bin demo_window

use std::time::Instant;

use demo_api::{MouseState, UiData};
use gallery_host::{DemoHost, HostConfig, WindowPresenter};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

struct App {
    window: Option<winit::window::Window>,
    presenter: Option<WindowPresenter>,
    host: DemoHost,
    ui: UiData,
    started: Instant,
    last_frame: Instant,
}

impl App {
    fn new(host: DemoHost) -> Self {
        let now = Instant::now();
        let ui = UiData { viewport_size: host.config().viewport_size, ..UiData::default() };
        Self { window: None, presenter: None, host, ui, started: now, last_frame: now }
    }

    fn update_title(&self) {
        if let Some(w) = &self.window {
            let demo = self.host.active_name().unwrap_or("no demo");
            w.set_title(&format!("Demo gallery: {} (Tab for next)", demo));
        }
    }

    fn redraw(&mut self) {
        let window = match &self.window {
            Some(w) => w,
            None => return,
        };
        let phys = window.inner_size();
        let now = Instant::now();
        self.ui = UiData {
            viewport_size: (phys.width.max(1), phys.height.max(1)),
            delta_time: (now - self.last_frame).as_secs_f32(),
            elapsed: (now - self.started).as_secs_f32(),
            frame_index: self.ui.frame_index + 1,
            ..self.ui.clone()
        };
        self.last_frame = now;

        if self.presenter.is_none() {
            match WindowPresenter::from_window(window, self.host.config().gallery.clone()) {
                Ok(p) => self.presenter = Some(p),
                Err(e) => {
                    log::error!("WindowPresenter::from_window failed: {}", e);
                    return;
                }
            }
        }
        let (raw_window, raw_display) = match (window.window_handle(), window.display_handle()) {
            (Ok(wh), Ok(dh)) => (wh.as_raw(), dh.as_raw()),
            _ => return,
        };
        let output = match self.host.run_frame(&self.ui, None) {
            Ok(o) => o,
            Err(e) => {
                log::error!("frame failed: {}", e);
                return;
            }
        };
        if let Some(presenter) = &mut self.presenter {
            if let Err(e) = presenter.render_to_window(&output.draw_list, self.ui.viewport_size, raw_window, raw_display) {
                log::warn!("present failed: {}", e);
            }
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let (w, h) = self.host.config().viewport_size;
        let attrs = winit::window::WindowAttributes::default()
            .with_title("Demo gallery")
            .with_inner_size(winit::dpi::PhysicalSize::new(w, h));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
                self.update_title();
            }
            Err(e) => {
                log::error!("create window failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => {
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            WindowEvent::Focused(focused) => self.ui.focused = focused,
            WindowEvent::CursorMoved { position, .. } => {
                self.ui.mouse.position = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => self.ui.mouse = MouseState::default(),
            WindowEvent::MouseInput { state, button, .. } => {
                let down = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.ui.mouse.left_down = down,
                    MouseButton::Right => self.ui.mouse.right_down = down,
                    _ => {}
                }
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent { logical_key: Key::Named(NamedKey::Tab), state: ElementState::Pressed, .. },
                ..
            } => {
                if let Err(e) = self.host.select_next() {
                    log::warn!("switching demo failed: {}", e);
                }
                self.update_title();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let host = DemoHost::new(HostConfig::from_env())?;
    let event_loop = winit::event_loop::EventLoop::new()?;
    let mut app = App::new(host);
    event_loop.run_app(&mut app)?;
    Ok(())
}
