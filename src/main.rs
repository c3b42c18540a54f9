use anyhow::Context;
use clap::{ArgAction, Parser};

use pixelpad::app::{DisplayBackend, PaintApp};
use pixelpad::config::Config;
use pixelpad::draw::Color;
use pixelpad::input::{PointerEvent, Tool};
use pixelpad::util::Vec2;

#[derive(Parser, Debug)]
#[command(name = "pixelpad")]
#[command(version, about = "In-application raster paint surface with an HSV color wheel")]
struct Cli {
    /// Run a scripted demo session against a logging display backend
    #[arg(long, short = 'd', action = ArgAction::SetTrue)]
    demo: bool,

    /// Override the configured canvas width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Override the configured canvas height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,
}

/// Display backend that logs uploads instead of driving a real surface.
struct LoggingBackend {
    uploads: usize,
}

impl DisplayBackend for LoggingBackend {
    fn upload_pixels(&mut self, width: u32, height: u32, pixels: &[Color]) {
        self.uploads += 1;
        let painted = pixels.iter().filter(|p| p.a > 0.0).count();
        log::debug!("Upload #{}: {width}x{height}, {painted} painted pixels", self.uploads);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    log::info!(
        "pixelpad {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("PIXELPAD_GIT_HASH")
    );

    if cli.demo {
        run_demo(&cli)?;
    } else {
        // No flags: show usage
        println!("pixelpad: raster paint surface with an HSV color wheel");
        println!();
        println!("Usage:");
        println!("  pixelpad --demo     Run a scripted paint session and print a report");
        println!("  pixelpad --help     Show help");
        println!();
        println!("The canvas engine is a library; embed it via the pixelpad crate");
        println!("and drive it with your host's pointer events and display backend.");
        println!("Configuration lives at ~/.config/pixelpad/config.toml.");
    }

    Ok(())
}

/// Scripted smoke-test session: paint a stroke, bucket-fill the outside,
/// pick a color back, and report what happened.
fn run_demo(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(width) = cli.width {
        anyhow::ensure!(width > 0, "--width must be positive");
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        anyhow::ensure!(height > 0, "--height must be positive");
        config.canvas.height = height;
    }

    let width = config.canvas.width as f64;
    let height = config.canvas.height as f64;

    let mut app = PaintApp::new(&config, Box::new(LoggingBackend { uploads: 0 }));
    app.tick();

    // Saturate the wheel selection (bottom-right of the SV rect at hue 0:
    // pure red), then drag a horizontal stroke across the middle.
    let sv_half = config.picker.sv_rect_size * 0.5;
    app.wheel_mut().on_sv_press(Vec2::new(sv_half, sv_half));

    app.push_event(PointerEvent::Press {
        pos: Vec2::new(width * 0.2, height * 0.5),
        over_canvas: true,
    });
    app.tick();
    for step in 1..=8 {
        let t = step as f64 / 8.0;
        app.push_event(PointerEvent::Motion {
            pos: Vec2::new(width * (0.2 + 0.6 * t), height * 0.5),
        });
        app.tick();
    }
    app.push_event(PointerEvent::Release);
    app.tick();

    // Bucket-fill the untouched region from the top-left corner.
    let ring_pos = app.wheel().hue_wheel().hue_to_position(2.0 / 3.0)
        * (config.picker.hue_wheel_size * 0.45);
    app.wheel_mut().on_hue_press(ring_pos);
    app.select_tool(Tool::Bucket);
    app.push_event(PointerEvent::Press {
        pos: Vec2::new(0.0, 0.0),
        over_canvas: true,
    });
    app.tick();

    // Pick the stroke color back into the wheel.
    app.select_tool(Tool::ColorPicker);
    app.push_event(PointerEvent::Press {
        pos: Vec2::new(width * 0.5, height * 0.5),
        over_canvas: true,
    });
    app.tick();

    let painted = app
        .canvas()
        .pixels()
        .iter()
        .filter(|p| p.a > 0.0)
        .count();
    let picked = app.wheel().selected_color();

    println!("Demo complete:");
    println!(
        "  canvas:        {}x{}",
        app.canvas().width(),
        app.canvas().height()
    );
    println!("  painted:       {painted} pixels");
    println!(
        "  picked color:  r={:.2} g={:.2} b={:.2} a={:.2}",
        picked.r, picked.g, picked.b, picked.a
    );

    Ok(())
}
