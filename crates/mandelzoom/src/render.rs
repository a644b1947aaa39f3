//! Turning a [`View`] into a coloured raster, and the collaborators that display it.

use crate::errors::{RenderError, ViewError};
use crate::formatter::{self, Captions};
use crate::grid::{Evaluation, SampleGrid};
use crate::model::{IterationPolicy, View, ViewWindow};
use crate::palette::Palette;
use image::RgbImage;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Raster size and evaluation settings shared by every render of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub policy: IterationPolicy,
    pub evaluation: Evaluation,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            policy: IterationPolicy::default(),
            evaluation: Evaluation::default(),
        }
    }
}

/// One fully rendered view: the raster plus what was actually drawn.
#[derive(Debug, Clone)]
pub struct Frame {
    pub window: ViewWindow,
    pub grid: SampleGrid,
    pub palette: Palette,
    pub image: RgbImage,
}

impl Frame {
    pub fn render(view: &View, options: &RenderOptions) -> Result<Self, ViewError> {
        let window = view.window(options.width, options.height)?;
        let max_iter = options.policy.max_iter(view.zoom);
        debug!(
            "rendering {view}: x {:?}, y {:?}, max_iter {max_iter}",
            window.x_range, window.y_range
        );

        let grid = SampleGrid::evaluate(&window, max_iter, options.evaluation);
        let palette = Palette::for_budget(max_iter);

        // grid rows run upwards from y_min, raster rows run downwards from the top edge
        let mut image = RgbImage::new(window.width, window.height);
        for (grid_row, samples) in grid.rows().enumerate() {
            let row = window.height - 1 - grid_row as u32;
            for (col, &escape) in samples.iter().enumerate() {
                image.put_pixel(col as u32, row, palette.color(escape, max_iter));
            }
        }

        Ok(Self {
            window,
            grid,
            palette,
            image,
        })
    }

    pub fn view(&self) -> &View {
        &self.window.view
    }

    pub fn max_iter(&self) -> u32 {
        self.grid.max_iter()
    }

    /// Discrete colour level of every sample, in grid order.
    pub fn levels(&self) -> Vec<u32> {
        self.grid
            .cells()
            .iter()
            .map(|&escape| self.palette.level_of(escape, self.max_iter()))
            .collect()
    }

    pub fn title(&self) -> String {
        formatter::title(self.view())
    }

    pub fn x_label(&self) -> String {
        formatter::x_label(self.view())
    }

    pub fn y_label(&self) -> String {
        formatter::y_label(self.view())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        self.image.save(path.as_ref())?;
        Ok(())
    }
}

/// Something that can show a rendered frame to the user.
pub trait Renderer {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Writes every presented frame as `frame_NNNN.png` into a directory.
pub struct PngRenderer {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Renderer for PngRenderer {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let path = self
            .dir
            .join(format!("frame_{:04}.png", self.written.len()));
        frame.save_png(&path)?;
        info!("{} -> {}", Captions(frame.view()), path.display());
        self.written.push(path);
        Ok(())
    }
}
