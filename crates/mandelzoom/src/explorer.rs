//! Click-to-zoom interaction loop.
//!
//! The explorer renders a view, waits for one interaction, derives the next view from it and
//! renders again, until it is cancelled. Exactly one render is in flight at any time.

use crate::errors::{InputError, RenderError};
use crate::formatter::Captions;
use crate::input::{Interaction, PointerInput};
use crate::model::{View, ViewWindow};
use crate::render::{Frame, RenderOptions, Renderer};
use log::{info, warn};

// everything in this file uses [`RenderError`] as error type
type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// A frame for the current view is on screen.
    Rendered,
    /// Blocked on the input collaborator.
    AwaitingClick,
    /// Cancelled; no further renders happen.
    Terminated,
}

/// Next view after `interaction`, or `None` when the loop should stop.
pub fn next_view(view: &View, home: &View, interaction: Interaction) -> Option<View> {
    match interaction {
        Interaction::ZoomIn { x, y } => Some(view.zoom_in_at(x, y)),
        Interaction::ZoomOut { x, y } => Some(view.zoom_out_at(x, y)),
        Interaction::Reset => Some(*home),
        Interaction::Cancel => None,
    }
}

/// Both collaborators of the loop. Implemented by anything that is a [`Renderer`] and a
/// [`PointerInput`] at once, e.g. a window.
pub trait Frontend: Renderer + PointerInput {}

impl<T: Renderer + PointerInput> Frontend for T {}

/// Pairs an independent renderer and input source into a [`Frontend`].
pub struct Headless<R, I> {
    pub renderer: R,
    pub input: I,
}

impl<R, I> Headless<R, I> {
    pub fn new(renderer: R, input: I) -> Self {
        Self { renderer, input }
    }
}

impl<R: Renderer, I> Renderer for Headless<R, I> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.renderer.present(frame)
    }
}

impl<R, I: PointerInput> PointerInput for Headless<R, I> {
    fn next_interaction(
        &mut self,
        window: &ViewWindow,
    ) -> std::result::Result<Interaction, InputError> {
        self.input.next_interaction(window)
    }
}

pub struct Explorer<F: Frontend> {
    frontend: F,
    options: RenderOptions,
    home: View,
    view: View,
    state: State,
    frame: Frame,
    renders: usize,
}

impl<F: Frontend> Explorer<F> {
    /// Render `home` once and hand it to the frontend.
    pub fn start(mut frontend: F, home: View, options: RenderOptions) -> Result<Self> {
        let frame = Frame::render(&home, &options)?;
        frontend.present(&frame)?;
        info!("start: {}", Captions(&home));

        Ok(Self {
            frontend,
            options,
            home,
            view: home,
            state: State::Rendered,
            frame,
            renders: 1,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The frame currently on screen.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Wait for one interaction and act on it.
    ///
    /// An unavailable input source counts as a cancellation. Rendering errors (including a view
    /// that degenerates after too many zoom steps) are returned; the previous view and frame stay
    /// current and the state goes back to [`State::Rendered`].
    pub fn step(&mut self) -> Result<State> {
        if self.state == State::Terminated {
            return Ok(self.state);
        }

        self.state = State::AwaitingClick;
        let interaction = match self.frontend.next_interaction(&self.frame.window) {
            Ok(interaction) => interaction,
            Err(err) => {
                warn!("{err}, stopping");
                Interaction::Cancel
            }
        };

        let Some(view) = next_view(&self.view, &self.home, interaction) else {
            info!("cancelled at {}", self.view);
            self.state = State::Terminated;
            return Ok(self.state);
        };

        let rendered = Frame::render(&view, &self.options)
            .map_err(RenderError::from)
            .and_then(|frame| self.frontend.present(&frame).map(|()| frame));
        let frame = match rendered {
            Ok(frame) => frame,
            Err(err) => {
                // the previous frame is still on screen
                self.state = State::Rendered;
                return Err(err);
            }
        };
        info!("{interaction}: {}", Captions(&view));

        self.view = view;
        self.frame = frame;
        self.renders += 1;
        self.state = State::Rendered;
        Ok(self.state)
    }

    /// Step until cancelled and return the last view shown.
    pub fn run(&mut self) -> Result<View> {
        while self.step()? != State::Terminated {}
        Ok(self.view)
    }
}
