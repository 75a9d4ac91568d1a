//! SDL2 window that displays a rendered [`Framebuffer`].
//!
//! Only built with the `window` feature.

use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::framebuffer::{Framebuffer, PixelSink};

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: u64 = 1000 / FPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

fn window_error(e: impl ToString) -> RenderError {
    RenderError::Window(e.to_string())
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(window_error)?;
        let video_subsystem = sdl_context.video().map_err(window_error)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(window_error)?;

        let canvas = window.into_canvas().build().map_err(window_error)?;
        let event_pump = sdl_context.event_pump().map_err(window_error)?;

        Ok(Self {
            canvas,
            event_pump,
            width,
            height,
        })
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => return WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32),
                _ => {}
            }
        }
        WindowEvent::None
    }

    /// Shows `framebuffer` stretched over the window until the user closes
    /// it or presses Escape.
    pub fn show(&mut self, framebuffer: &Framebuffer) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();
        // Byte order R, G, B, A on little-endian targets
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::ABGR8888,
                framebuffer.width(),
                framebuffer.height(),
            )
            .map_err(window_error)?;
        texture
            .update(None, framebuffer.as_bytes(), framebuffer.width() as usize * 4)
            .map_err(window_error)?;

        loop {
            match self.poll_events() {
                WindowEvent::Quit => return Ok(()),
                WindowEvent::Resize(w, h) => {
                    debug!(width = w, height = h, "Window resized");
                    self.width = w;
                    self.height = h;
                }
                WindowEvent::None => {}
            }

            self.canvas.clear();
            self.canvas
                .copy(&texture, None, Some(Rect::new(0, 0, self.width, self.height)))
                .map_err(window_error)?;
            self.canvas.present();
            std::thread::sleep(Duration::from_millis(FRAME_TARGET_TIME));
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
