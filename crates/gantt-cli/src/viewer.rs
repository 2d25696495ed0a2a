// File: crates/gantt-cli/src/viewer.rs
// Summary: Window that shows the rendered chart via RGBA blit (CPU) using winit + softbuffer.
// Re-renders at the window size on resize; Escape or closing the window exits.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use gantt_core::{GanttChart, RenderOptions};
use tracing::{debug, error};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

pub fn run(chart: GanttChart, opts: RenderOptions) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(chart.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut draw = move |w: u32, h: u32| -> Result<()> {
        let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
            return Ok(());
        };
        surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

        let mut frame_opts = opts.clone();
        frame_opts.width = w as i32;
        frame_opts.height = h as i32;
        let (rgba, _, _, _) = chart.render_to_rgba8(&frame_opts)?;

        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            // softbuffer expects 0RGB
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow!("present: {e}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                    ..
                } => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    debug!(width = size.width, height = size.height, "viewer resized");
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = draw(size.width, size.height) {
                    error!("viewer draw failed: {e:#}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
