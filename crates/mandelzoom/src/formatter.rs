//! Title and axis captions for a rendered view.
//!
//! The captions describe the view that was actually drawn, e.g.:
//! ```text
//! Mandelbrot Set (Zoom: 2.0x)
//! Real (centre: 0.100000)
//! Imaginary (centre: 0.200000)
//! ```

use crate::model::View;
use std::fmt;

pub fn title(view: &View) -> String {
    format!("Mandelbrot Set (Zoom: {:.1}x)", view.zoom)
}

pub fn x_label(view: &View) -> String {
    format!("Real (centre: {:.6})", view.center_x)
}

pub fn y_label(view: &View) -> String {
    format!("Imaginary (centre: {:.6})", view.center_y)
}

/// All three captions on one line, for window titles and log output.
pub struct Captions<'a>(pub &'a View);

impl fmt::Display for Captions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            title(self.0),
            x_label(self.0),
            y_label(self.0)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn initial_captions() {
        let view = View::INITIAL;
        assert_eq!(title(&view), "Mandelbrot Set (Zoom: 1.0x)");
        assert_eq!(x_label(&view), "Real (centre: -0.500000)");
        assert_eq!(y_label(&view), "Imaginary (centre: 0.000000)");
    }

    #[test]
    fn deep_zoom_captions() {
        let view = View::new(-0.743643887, 0.131825904, 1024.0);
        assert_eq!(title(&view), "Mandelbrot Set (Zoom: 1024.0x)");
        assert_eq!(x_label(&view), "Real (centre: -0.743644)");
        assert_eq!(y_label(&view), "Imaginary (centre: 0.131826)");
        assert_eq!(
            Captions(&view).to_string(),
            "Mandelbrot Set (Zoom: 1024.0x) | Real (centre: -0.743644) | Imaginary (centre: 0.131826)"
        );
    }
}
