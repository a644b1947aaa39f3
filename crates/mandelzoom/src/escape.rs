//! Escape-time evaluation of the Mandelbrot recurrence `z <- z^2 + c`, starting at `z = 0`.

use num_complex::Complex64;

/// Radius beyond which an orbit is guaranteed to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `|z_n|` exceeded [`ESCAPE_RADIUS`] at iteration `n`.
    Escaped(u32),

    /// The orbit stayed within the radius for the whole budget.
    Bounded(u32),
}

impl Escape {
    /// Scalar intensity used for colouring: the escape iteration, or the budget when bounded.
    pub fn count(&self) -> u32 {
        match *self {
            Self::Escaped(n) | Self::Bounded(n) => n,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }
}

/// Iterate `c` for at most `max_iter` steps and report when (if ever) the orbit escaped.
///
/// The modulus of `z_n` is checked before computing `z_{n+1}`, so the first escape that can be
/// observed is at iteration 1 (`z_0` is always the origin).
pub fn escape_time(c: Complex64, max_iter: u32) -> Escape {
    let radius_sq = ESCAPE_RADIUS * ESCAPE_RADIUS;
    let mut z = Complex64::new(0.0, 0.0);

    for n in 0..max_iter {
        if z.norm_sqr() > radius_sq {
            return Escape::Escaped(n);
        }
        z = z * z + c;
    }

    Escape::Bounded(max_iter)
}
