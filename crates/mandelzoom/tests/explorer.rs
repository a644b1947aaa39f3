use mandelzoom::errors::{InputError, RenderError, ViewError};
use mandelzoom::explorer::{Explorer, Headless, State};
use mandelzoom::grid::Evaluation;
use mandelzoom::input::{Interaction, PointerInput, ScriptedInput};
use mandelzoom::model::{View, ViewWindow};
use mandelzoom::render::{Frame, PngRenderer, RenderOptions, Renderer};

/// Keeps the views and captions of every presented frame.
#[derive(Default)]
struct Recorder {
    views: Vec<View>,
    titles: Vec<String>,
    budgets: Vec<u32>,
}

impl Renderer for Recorder {
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.views.push(*frame.view());
        self.titles.push(frame.title());
        self.budgets.push(frame.max_iter());
        Ok(())
    }
}

/// Presents the first `ok` frames, then fails.
struct Flaky {
    ok: usize,
    presented: usize,
}

impl Renderer for Flaky {
    fn present(&mut self, _frame: &Frame) -> Result<(), RenderError> {
        if self.presented == self.ok {
            return Err(RenderError::Surface("surface lost".to_string()));
        }
        self.presented += 1;
        Ok(())
    }
}

/// An input source that has gone away.
struct Unplugged;

impl PointerInput for Unplugged {
    fn next_interaction(&mut self, _window: &ViewWindow) -> Result<Interaction, InputError> {
        Err(InputError::Unavailable("device unplugged".to_string()))
    }
}

fn options() -> RenderOptions {
    RenderOptions {
        width: 40,
        height: 30,
        evaluation: Evaluation::Sequential,
        ..RenderOptions::default()
    }
}

fn explorer(script: Vec<Interaction>) -> Explorer<Headless<Recorder, ScriptedInput>> {
    let frontend = Headless::new(Recorder::default(), ScriptedInput::new(script));
    Explorer::start(frontend, View::INITIAL, options()).unwrap()
}

#[test]
fn initial_render() {
    let explorer = explorer(vec![]);

    assert_eq!(explorer.state(), State::Rendered);
    assert_eq!(explorer.renders(), 1);
    assert_eq!(explorer.frontend().renderer.views, vec![View::INITIAL]);
    assert_eq!(
        explorer.frontend().renderer.titles,
        vec!["Mandelbrot Set (Zoom: 1.0x)".to_string()]
    );
}

#[test]
fn click_zooms_and_rerenders() {
    let mut explorer = explorer(vec![Interaction::ZoomIn { x: 0.1, y: 0.2 }]);

    assert_eq!(explorer.step().unwrap(), State::Rendered);
    assert_eq!(*explorer.view(), View::new(0.1, 0.2, 2.0));
    assert_eq!(explorer.frame().view(), &View::new(0.1, 0.2, 2.0));
    assert_eq!(explorer.renders(), 2);
    assert_eq!(
        explorer.frontend().renderer.titles.last().unwrap(),
        "Mandelbrot Set (Zoom: 2.0x)"
    );
}

#[test]
fn cancel_terminates_without_render() {
    let mut explorer = explorer(vec![
        Interaction::Cancel,
        Interaction::ZoomIn { x: 0.0, y: 0.0 },
    ]);

    assert_eq!(explorer.step().unwrap(), State::Terminated);
    assert_eq!(explorer.renders(), 1);

    // terminated is final
    assert_eq!(explorer.step().unwrap(), State::Terminated);
    assert_eq!(explorer.renders(), 1);
    assert_eq!(explorer.frontend().input.remaining(), 1);
}

#[test]
fn unavailable_input_is_cancellation() {
    let frontend = Headless::new(Recorder::default(), Unplugged);
    let mut explorer = Explorer::start(frontend, View::INITIAL, options()).unwrap();

    assert_eq!(explorer.run().unwrap(), View::INITIAL);
    assert_eq!(explorer.state(), State::Terminated);
    assert_eq!(explorer.renders(), 1);
}

#[test]
fn full_session() {
    let mut explorer = explorer(vec![
        Interaction::ZoomIn { x: -0.75, y: 0.1 },
        Interaction::ZoomIn { x: -0.745, y: 0.11 },
        Interaction::ZoomOut { x: -0.74, y: 0.12 },
        Interaction::Reset,
        Interaction::ZoomIn { x: 0.25, y: 0.0 },
    ]);

    let last = explorer.run().unwrap();
    assert_eq!(last, View::new(0.25, 0.0, 2.0));
    assert_eq!(explorer.state(), State::Terminated);

    let recorder = explorer.into_frontend().renderer;
    assert_eq!(
        recorder.views,
        vec![
            View::INITIAL,
            View::new(-0.75, 0.1, 2.0),
            View::new(-0.745, 0.11, 4.0),
            View::new(-0.74, 0.12, 2.0),
            View::INITIAL,
            View::new(0.25, 0.0, 2.0),
        ]
    );
    assert_eq!(recorder.budgets, vec![120, 140, 180, 140, 120, 140]);
}

#[test]
fn budget_caps_at_deep_zoom() {
    let clicks = (0..6).map(|_| Interaction::ZoomIn { x: -0.745, y: 0.11 });
    let mut explorer = explorer(clicks.collect());
    explorer.run().unwrap();

    let recorder = &explorer.frontend().renderer;
    assert_eq!(recorder.views.last().unwrap().zoom, 64.0);
    assert_eq!(recorder.budgets, vec![120, 140, 180, 260, 420, 500, 500]);
}

#[test]
fn degenerate_start_fails_fast() {
    let frontend = Headless::new(Recorder::default(), ScriptedInput::default());
    let result = Explorer::start(frontend, View::new(-0.5, 0.0, 0.0), options());
    assert!(matches!(result, Err(RenderError::View(_))));
}

#[test]
fn replay_writes_pngs() {
    let dir = std::env::temp_dir().join(format!("mandelzoom-replay-{}", std::process::id()));
    let renderer = PngRenderer::new(&dir).unwrap();
    let frontend = Headless::new(
        renderer,
        ScriptedInput::new([
            "0.1,0.2".parse::<Interaction>().unwrap(),
            "out:0,0".parse::<Interaction>().unwrap(),
        ]),
    );

    let mut explorer = Explorer::start(frontend, View::INITIAL, options()).unwrap();
    explorer.run().unwrap();

    let written = explorer.frontend().renderer.written().to_vec();
    assert_eq!(written.len(), 3);
    assert!(written[2].ends_with("frame_0002.png"));

    let image = image::open(&written[1]).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (40, 30));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_present_keeps_previous_frame() {
    let frontend = Headless::new(
        Flaky { ok: 1, presented: 0 },
        ScriptedInput::new([Interaction::ZoomIn { x: 0.1, y: 0.2 }]),
    );
    let mut explorer = Explorer::start(frontend, View::INITIAL, options()).unwrap();

    assert!(matches!(explorer.step(), Err(RenderError::Surface(_))));
    assert_eq!(explorer.state(), State::Rendered);
    assert_eq!(*explorer.view(), View::INITIAL);
    assert_eq!(explorer.frame().view(), &View::INITIAL);
    assert_eq!(explorer.renders(), 1);

    // the loop can carry on afterwards; the script is exhausted so it cancels
    assert_eq!(explorer.step().unwrap(), State::Terminated);
}

#[test]
fn zooming_out_until_degenerate_reports_error() {
    let steps = (0..1100).map(|_| Interaction::ZoomOut { x: -0.5, y: 0.0 });
    let mut explorer = explorer(steps.collect());

    let err = explorer.run().unwrap_err();
    assert!(matches!(err, RenderError::View(ViewError::NonPositiveZoom(z)) if z == 0.0));
    assert_eq!(explorer.state(), State::Rendered);
    assert!(explorer.view().zoom > 0.0);
    assert_eq!(explorer.renders(), explorer.frontend().renderer.views.len());
}
