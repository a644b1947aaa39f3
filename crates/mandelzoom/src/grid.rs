//! Uniform sampling of a [`ViewWindow`] and escape-time evaluation of every sample.

use crate::escape::{escape_time, Escape};
use crate::model::ViewWindow;
use num_complex::Complex64;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    Sequential,
    #[default]
    Parallel,
}

/// `width x height` escape results, stored row by row.
///
/// Row `r` holds the samples at the `r`-th imaginary coordinate counted from the *lower* end of
/// the window's imaginary range; column `c` is the `c`-th real coordinate from the left.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    max_iter: u32,
    cells: Vec<Escape>,
}

impl SampleGrid {
    pub fn evaluate(window: &ViewWindow, max_iter: u32, evaluation: Evaluation) -> Self {
        let xs: Vec<f64> = window.x_samples().collect();
        let ys: Vec<f64> = window.y_samples().collect();
        let width = xs.len();

        let mut cells = vec![Escape::Bounded(max_iter); width * ys.len()];
        let fill_row = |(row, out): (usize, &mut [Escape])| {
            let cy = ys[row];
            for (cell, &cx) in out.iter_mut().zip(&xs) {
                *cell = escape_time(Complex64::new(cx, cy), max_iter);
            }
        };

        if width > 0 {
            match evaluation {
                Evaluation::Sequential => {
                    cells.chunks_exact_mut(width).enumerate().for_each(fill_row)
                }
                Evaluation::Parallel => cells
                    .par_chunks_exact_mut(width)
                    .enumerate()
                    .for_each(fill_row),
            }
        }

        Self {
            width: window.width,
            height: window.height,
            max_iter,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    pub fn get(&self, col: u32, row: u32) -> Option<Escape> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Escape]> {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Escape] {
        &self.cells
    }

    pub fn bounded_count(&self) -> usize {
        self.cells.iter().filter(|e| e.is_bounded()).count()
    }
}
