use std::time::Instant;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use mixup_core::{ray_plane_z, DragRouter, GpuState, Scene, SceneConfig};

// Touch ids from winit start at 0, so the mouse gets its own id.
const MOUSE_POINTER_ID: i64 = -1;

struct App<'w> {
    window: &'w Window,
    gpu: GpuState<'w>,
    scene: Scene,
    router: DragRouter,
    cursor: PhysicalPosition<f64>,
    last_frame: Instant,
}

impl<'w> App<'w> {
    /// Horizontal pointer position in logical pixels, the unit drag sensitivity is tuned for.
    fn logical_x(&self, pos: PhysicalPosition<f64>) -> f32 {
        (pos.x / self.window.scale_factor()) as f32
    }

    fn pointer_down(&mut self, pointer_id: i64, pos: PhysicalPosition<f64>) {
        let (width, height) = self.gpu.size();
        let (ro, rd) = self.scene.camera.screen_to_world_ray(
            width as f32,
            height as f32,
            pos.x as f32,
            pos.y as f32,
        );
        let Some(hit) = ray_plane_z(ro, rd, 0.0) else {
            return;
        };
        let x = self.logical_x(pos);
        if let Some(row) = self.router.pointer_down(&mut self.scene, pointer_id, x, hit.y) {
            log::info!("[mouse] begin drag on {}", row.label());
        }
    }

    fn pointer_move(&mut self, pointer_id: i64, pos: PhysicalPosition<f64>) {
        let x = self.logical_x(pos);
        self.router.pointer_move(&mut self.scene, pointer_id, x);
    }

    fn pointer_up(&mut self, pointer_id: i64, pos: PhysicalPosition<f64>) {
        let x = self.logical_x(pos);
        self.router.pointer_up(&mut self.scene, pointer_id, x);
    }

    fn touch(&mut self, touch: Touch) {
        let id = touch.id as i64;
        match touch.phase {
            TouchPhase::Started => self.pointer_down(id, touch.location),
            TouchPhase::Moved => self.pointer_move(id, touch.location),
            TouchPhase::Ended => self.pointer_up(id, touch.location),
            TouchPhase::Cancelled => {
                let x = self.logical_x(touch.location);
                self.router.pointer_cancel(&mut self.scene, id, x);
            }
        }
    }

    fn key(&mut self, event: &KeyEvent, elwt: &EventLoopWindowTarget<()>) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match &event.logical_key {
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => {
                self.scene.shuffle(&mut rand::thread_rng());
            }
            Key::Character(c) if c.as_str() == "0" => self.scene.reset(),
            Key::Named(NamedKey::Home) => self.scene.reset(),
            Key::Named(NamedKey::Escape) => elwt.exit(),
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.scene.camera.set_viewport(width, height);
    }

    fn frame(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.scene.tick(dt);
        match self.gpu.render(&self.scene) {
            Ok(()) => self.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory; exiting");
                elwt.exit();
            }
            Err(e) => log::warn!("[gpu] frame skipped: {e}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let scene = Scene::new(&SceneConfig::default())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Mix & Match (native)")
        .build(&event_loop)?;
    let size = window.inner_size();
    let gpu = pollster::block_on(GpuState::new(&window, size.width, size.height))?;

    let mut app = App {
        window: &window,
        gpu,
        scene,
        router: DragRouter::new(),
        cursor: PhysicalPosition::new(0.0, 0.0),
        last_frame: Instant::now(),
    };
    app.scene.camera.set_viewport(size.width, size.height);
    log::info!("[native] drag a row to spin it; R shuffles, 0 resets, Esc quits");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.resize(size.width, size.height),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = position;
                app.pointer_move(MOUSE_POINTER_ID, position);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => app.pointer_down(MOUSE_POINTER_ID, app.cursor),
                ElementState::Released => app.pointer_up(MOUSE_POINTER_ID, app.cursor),
            },
            WindowEvent::Touch(touch) => app.touch(touch),
            WindowEvent::KeyboardInput { event, .. } => app.key(&event, elwt),
            _ => {}
        },
        Event::AboutToWait => app.frame(elwt),
        _ => {}
    })?;
    Ok(())
}
