//! Desktop window frontend: shows frames with `pixels` and captures clicks with `winit`.
//!
//! Controls: left click zooms in, right click zooms out, `R` resets, `Esc`/`Q` or closing the
//! window quits.

use crate::errors::{InputError, RenderError};
use crate::formatter::Captions;
use crate::input::{Interaction, PointerInput};
use crate::model::ViewWindow;
use crate::render::{Frame, Renderer};
use log::{debug, error};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

pub struct WindowFrontend {
    // declared before `window` so the surface is dropped first
    pixels: Pixels,
    window: Window,
    event_loop: EventLoop<()>,
    buffer_size: (u32, u32),
    cursor: Option<PhysicalPosition<f64>>,
}

fn surface_err(err: impl std::fmt::Display) -> RenderError {
    RenderError::Surface(err.to_string())
}

impl WindowFrontend {
    pub fn open(width: u32, height: u32) -> Result<Self, RenderError> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title("Mandelbrot Set")
            .with_inner_size(PhysicalSize::new(width, height))
            .with_min_inner_size(PhysicalSize::new(64, 48))
            .build(&event_loop)
            .map_err(surface_err)?;

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let pixels = Pixels::new(width, height, surface_texture).map_err(surface_err)?;

        Ok(Self {
            pixels,
            window,
            event_loop,
            buffer_size: (width, height),
            cursor: None,
        })
    }
}

impl Renderer for WindowFrontend {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let (width, height) = frame.image.dimensions();
        if self.buffer_size != (width, height) {
            self.pixels
                .resize_buffer(width, height)
                .map_err(surface_err)?;
            self.buffer_size = (width, height);
        }

        for (dst, src) in self
            .pixels
            .frame_mut()
            .chunks_exact_mut(4)
            .zip(frame.image.pixels())
        {
            dst[..3].copy_from_slice(&src.0);
            dst[3] = 0xff;
        }

        self.window.set_title(&Captions(frame.view()).to_string());
        self.pixels.render().map_err(surface_err)?;
        self.window.request_redraw();
        Ok(())
    }
}

impl PointerInput for WindowFrontend {
    /// Pump window events until a click, a key we care about, or the window closes.
    fn next_interaction(&mut self, window: &ViewWindow) -> Result<Interaction, InputError> {
        let mut result = None;
        let pixels = &mut self.pixels;
        let cursor = &mut self.cursor;
        let win = &self.window;

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            let mut finish = |outcome: Result<Interaction, InputError>| {
                result = Some(outcome);
                *control_flow = ControlFlow::Exit;
            };

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => finish(Ok(Interaction::Cancel)),
                    WindowEvent::CursorMoved { position, .. } => *cursor = Some(position),
                    WindowEvent::CursorLeft { .. } => *cursor = None,
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button,
                        ..
                    } => {
                        let Some(position) = *cursor else {
                            debug!("{button:?} click ignored: no cursor position yet");
                            return;
                        };
                        let Ok((col, row)) =
                            pixels.window_pos_to_pixel((position.x as f32, position.y as f32))
                        else {
                            return;
                        };
                        let (x, y) = window.pixel_to_plane(col as f64, row as f64);
                        debug!("{button:?} click at pixel ({col}, {row}) -> ({x}, {y})");
                        match button {
                            MouseButton::Left => finish(Ok(Interaction::ZoomIn { x, y })),
                            MouseButton::Right => finish(Ok(Interaction::ZoomOut { x, y })),
                            _ => {}
                        }
                    }
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(key),
                                ..
                            },
                        ..
                    } => match key {
                        VirtualKeyCode::Escape | VirtualKeyCode::Q => {
                            finish(Ok(Interaction::Cancel))
                        }
                        VirtualKeyCode::R => finish(Ok(Interaction::Reset)),
                        _ => {}
                    },
                    WindowEvent::Resized(size) => {
                        if let Err(e) = pixels.resize_surface(size.width.max(1), size.height.max(1))
                        {
                            error!("resize surface error: {e}");
                        }
                        win.request_redraw();
                    }
                    _ => {}
                },
                Event::RedrawRequested(_) => {
                    if let Err(e) = pixels.render() {
                        finish(Err(InputError::Unavailable(e.to_string())));
                    }
                }
                _ => {}
            }
        });

        result.unwrap_or_else(|| {
            Err(InputError::Unavailable(
                "event loop exited without an interaction".to_string(),
            ))
        })
    }
}
