use std::sync::Arc;
use std::time::{Duration, Instant};

use game_core::{Command, Config, Game, Params, Score};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::assets::Assets;
use crate::error::ClientError;
use crate::input::map_key;
use crate::renderer::Renderer;

pub const WINDOW_TITLE: &str = "Bar mover";

pub fn window_title(score: &Score) -> String {
    format!("{} - {} : {}", WINDOW_TITLE, score.left, score.right)
}

/// Top-left corner that centers a window of `window` size on a monitor
fn centered_position(
    monitor_pos: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (i64::from(monitor) - i64::from(window)) / 2;
    PhysicalPosition::new(
        monitor_pos.x + offset(monitor_size.width, window.width) as i32,
        monitor_pos.y + offset(monitor_size.height, window.height) as i32,
    )
}

/// Held key repeats only make sense for paddle movement
fn accepts_repeat(command: Command) -> bool {
    matches!(command, Command::PaddleUp | Command::PaddleDown)
}

pub struct App {
    game: Game,
    assets: Assets,
    renderer: Option<Renderer>,
    last_frame: Option<Instant>,
    last_score: Score,
    error: Option<ClientError>,
}

impl App {
    pub fn new(config: Config, assets: Assets) -> Self {
        Self {
            game: Game::new(config),
            assets,
            renderer: None,
            last_frame: None,
            last_score: Score::new(),
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ClientError) {
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_renderer(&self, event_loop: &ActiveEventLoop) -> Result<Renderer, ClientError> {
        let config = &self.game.config;
        let size = PhysicalSize::new(config.screen_width as u32, config.screen_height as u32);
        let mut attributes = Window::default_attributes()
            .with_title(window_title(&self.game.score))
            .with_inner_size(size)
            .with_resizable(false);
        // Some platforms (Wayland) report no monitor and place windows themselves
        if let Some(monitor) = event_loop.primary_monitor() {
            attributes =
                attributes.with_position(centered_position(monitor.position(), monitor.size(), size));
        }
        let window = Arc::new(event_loop.create_window(attributes)?);
        log::info!(
            "Window created: {}x{}",
            config.screen_width,
            config.screen_height
        );

        pollster::block_on(Renderer::new(window, &self.assets, config))
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, command: Command, repeat: bool) {
        if repeat && !accepts_repeat(command) {
            return;
        }
        self.game.handle(command);
        if self.game.should_quit() {
            log::info!("Quit requested, exiting.");
            event_loop.exit();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(prev) => now.duration_since(prev).as_secs_f32(),
            None => Params::FIXED_DT,
        };
        self.last_frame = Some(now);

        self.game.frame(dt);
        let snapshot = self.game.snapshot();

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(e) = renderer.draw(&snapshot) {
            self.fail(event_loop, e);
            return;
        }

        if snapshot.score != self.last_score {
            renderer.window.set_title(&window_title(&snapshot.score));
            self.last_score = snapshot.score;
        }

        if self.game.fsm.slow_motion() {
            std::thread::sleep(Duration::from_millis(self.game.config.slow_motion_delay_ms));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        match self.create_renderer(event_loop) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = &self.renderer {
            renderer.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.reconfigure();
                }
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(command) = map_key(key_code) {
                        self.on_key(event_loop, command, event.repeat);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
