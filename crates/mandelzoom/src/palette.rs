//! Colour mapping from escape counts to a fixed gradient.

use crate::escape::Escape;
use image::Rgb;

/// Dark blue, through violet and magenta, to orange and yellow.
pub const GRADIENT_STOPS: [[u8; 3]; 9] = [
    [0x00, 0x00, 0x33],
    [0x0c, 0x10, 0x78],
    [0x3b, 0x0f, 0x9c],
    [0x6a, 0x1b, 0xb0],
    [0x9c, 0x17, 0x9e],
    [0xd0, 0x1c, 0x8b],
    [0xf0, 0x56, 0x4c],
    [0xfb, 0x9b, 0x06],
    [0xf9, 0xe7, 0x21],
];

/// The gradient resampled to a fixed number of discrete levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    /// Linearly interpolate `stops` (evenly spaced) into `levels` colours.
    pub fn from_stops(stops: &[[u8; 3]], levels: u32) -> Self {
        let levels = levels.max(1) as usize;

        let colors = match stops {
            [] => vec![Rgb([0, 0, 0]); levels],
            [only] => vec![Rgb(*only); levels],
            _ => (0..levels)
                .map(|i| {
                    let t = if levels == 1 {
                        0.0
                    } else {
                        i as f64 / (levels - 1) as f64
                    };
                    sample(stops, t)
                })
                .collect(),
        };

        Self { colors }
    }

    /// The default gradient with one level per iteration of the budget.
    pub fn for_budget(max_iter: u32) -> Self {
        Self::from_stops(&GRADIENT_STOPS, max_iter)
    }

    pub fn levels(&self) -> u32 {
        self.colors.len() as u32
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Discrete level for an iteration count in `0..=max_iter`.
    ///
    /// Counts are normalised over `[0, max_iter]` and bucketed into the palette's levels, so with
    /// `max_iter` levels the level is simply the count, with `max_iter` folded into the last one.
    pub fn level(&self, count: u32, max_iter: u32) -> u32 {
        let last = self.levels() - 1;
        if max_iter == 0 {
            return last;
        }
        let level = count as u64 * self.levels() as u64 / max_iter as u64;
        level.min(last as u64) as u32
    }

    /// Level for an escape result; bounded points always map to the last level.
    pub fn level_of(&self, escape: Escape, max_iter: u32) -> u32 {
        if escape.is_bounded() {
            return self.levels() - 1;
        }
        self.level(escape.count(), max_iter)
    }

    pub fn color(&self, escape: Escape, max_iter: u32) -> Rgb<u8> {
        self.colors[self.level_of(escape, max_iter) as usize]
    }
}

fn sample(stops: &[[u8; 3]], t: f64) -> Rgb<u8> {
    let position = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
    let index = (position.floor() as usize).min(stops.len() - 2);
    let frac = position - index as f64;

    let (a, b) = (stops[index], stops[index + 1]);
    let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac).round() as u8;
    Rgb([mix(0), mix(1), mix(2)])
}
