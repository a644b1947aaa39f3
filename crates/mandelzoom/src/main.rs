use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use mandelzoom::explorer::{Explorer, Headless};
use mandelzoom::formatter::Captions;
use mandelzoom::grid::Evaluation;
use mandelzoom::input::{Interaction, ScriptedInput};
use mandelzoom::model::{IterationPolicy, View};
use mandelzoom::render::{Frame, PngRenderer, RenderOptions};
use std::path::PathBuf;

/// Mandelzoom — click-to-zoom Mandelbrot explorer
#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window; left click zooms in, right click zooms out, R resets, Esc quits
    #[clap(aliases = &["run"])]
    Explore {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Render a single view to a PNG file
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Output PNG path
        #[arg(short, long, default_value = "mandelbrot.png")]
        output: PathBuf,
    },

    /// Replay a sequence of interactions and write every frame as a PNG
    Replay {
        #[command(flatten)]
        view: ViewArgs,

        /// Output directory for frame_NNNN.png files
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,

        /// Interactions: 'x,y' or 'in:x,y' (zoom in), 'out:x,y' (zoom out), 'reset', 'quit'
        #[arg(allow_hyphen_values = true)]
        steps: Vec<Interaction>,
    },
}

#[derive(Args, Debug, Clone)]
struct ViewArgs {
    /// Raster width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Real part of the starting centre
    #[arg(long, default_value_t = -0.5, allow_hyphen_values = true)]
    center_x: f64,

    /// Imaginary part of the starting centre
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    center_y: f64,

    /// Starting zoom factor
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Evaluate the grid on one thread
    #[arg(long)]
    sequential: bool,
}

impl ViewArgs {
    fn view(&self) -> View {
        View::new(self.center_x, self.center_y, self.zoom)
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            policy: IterationPolicy::default(),
            evaluation: if self.sequential {
                Evaluation::Sequential
            } else {
                Evaluation::Parallel
            },
        }
    }
}

#[cfg(feature = "window")]
fn explore(args: &ViewArgs) -> anyhow::Result<()> {
    use mandelzoom::window::WindowFrontend;

    let frontend = WindowFrontend::open(args.width, args.height).context("cannot open window")?;
    let mut explorer = Explorer::start(frontend, args.view(), args.options())?;
    let last = explorer.run()?;
    info!("{} views rendered, last {}", explorer.renders(), Captions(&last));
    Ok(())
}

#[cfg(not(feature = "window"))]
fn explore(_args: &ViewArgs) -> anyhow::Result<()> {
    anyhow::bail!("built without the `window` feature; use `render` or `replay` instead")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Explore { view } => explore(&view)?,

        Commands::Render { view, output } => {
            let frame = Frame::render(&view.view(), &view.options())?;
            frame
                .save_png(&output)
                .with_context(|| format!("cannot write {}", output.display()))?;
            println!("{} -> {}", Captions(frame.view()), output.display());
        }

        Commands::Replay {
            view,
            output,
            steps,
        } => {
            let renderer = PngRenderer::new(&output)
                .with_context(|| format!("cannot create {}", output.display()))?;
            let frontend = Headless::new(renderer, ScriptedInput::new(steps));
            let mut explorer = Explorer::start(frontend, view.view(), view.options())?;
            let last = explorer.run()?;

            for path in explorer.frontend().renderer.written() {
                println!("{}", path.display());
            }
            info!("last view {}", Captions(&last));
        }
    }

    Ok(())
}
