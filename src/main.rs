use clap::{Parser, ValueEnum};
use fractal_canvas::{
    Command, Explorer, Point, Screen, MAX_ITERATIONS_CAP, MIN_ITERATIONS,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ScreenArg {
    Uv,
    Mandelbrot,
    MandelbrotTinted,
    MandelbrotHue,
    Cubic,
    Functions,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Uv => Screen::UvGrid,
            ScreenArg::Mandelbrot => Screen::MandelbrotGreyscale,
            ScreenArg::MandelbrotTinted => Screen::MandelbrotTinted,
            ScreenArg::MandelbrotHue => Screen::MandelbrotHue,
            ScreenArg::Cubic => Screen::Cubic,
            ScreenArg::Functions => Screen::Functions,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct ZoomRect {
    from: Point,
    to: Point,
}

fn parse_zoom_rect(raw: &str) -> Result<ZoomRect, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("expected x1,y1,x2,y2 but got '{}'", raw));
    }

    let mut values = [0.0; 4];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {}", part, e))?;
    }

    Ok(ZoomRect {
        from: Point {
            x: values[0],
            y: values[1],
        },
        to: Point {
            x: values[2],
            y: values[3],
        },
    })
}

#[derive(Parser)]
#[command(name = "fractal_canvas")]
#[command(about = "Multithreaded escape-time and warp-function art renderer")]
struct Args {
    /// Screen to render
    #[arg(long, value_enum, default_value = "mandelbrot")]
    screen: ScreenArg,

    #[arg(long, default_value_t = 1024)]
    width: u32,

    #[arg(long, default_value_t = 1024)]
    height: u32,

    /// Worker threads (defaults to the available parallelism)
    #[arg(long)]
    workers: Option<u32>,

    /// Iteration budget; rounded up to a power of two and clamped to 1..=1024
    #[arg(long, default_value_t = 32)]
    iterations: u32,

    /// Function variant index for the functions screen
    #[arg(long, default_value_t = 0)]
    variant: usize,

    /// Zoom rectangle to replay before rendering, as x1,y1,x2,y2 in window
    /// pixels; may be given multiple times to zoom repeatedly
    #[arg(long = "zoom", value_parser = parse_zoom_rect)]
    zooms: Vec<ZoomRect>,

    /// Output path; a .ppm extension selects PPM, anything else is PNG
    #[arg(long, default_value = "output/fractal.png")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let workers = args.workers.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(4)
    });

    let screen = Screen::from(args.screen);
    let mut explorer = Explorer::new(args.width, args.height, workers)?;
    explorer.apply(Command::SelectScreen(screen));
    explorer.apply(Command::CycleFunctionVariant(args.variant as i32));

    let target = args
        .iterations
        .clamp(MIN_ITERATIONS, MAX_ITERATIONS_CAP)
        .next_power_of_two();
    while explorer.max_iterations() < target {
        explorer.apply(Command::IncreaseIterations);
    }
    while explorer.max_iterations() > target {
        explorer.apply(Command::DecreaseIterations);
    }

    for rect in &args.zooms {
        explorer.apply(Command::ZoomToRect {
            from: rect.from,
            to: rect.to,
        });
    }

    println!("Rendering {}...", screen.display_name());
    println!("Image size: {}x{}", args.width, args.height);
    println!("Max iterations: {}", explorer.max_iterations());
    println!("Workers: {}", workers);
    println!("Zoom depth: {}", explorer.zoom_depth());

    let start = Instant::now();
    let coverage = explorer
        .render_if_dirty()?
        .expect("a fresh explorer is dirty");
    println!("Duration:   {:?}", start.elapsed());

    if !coverage.is_complete() {
        eprintln!(
            "warning: worker partition left {} trailing pixels unrendered",
            coverage.skipped
        );
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match args.output.extension().and_then(|ext| ext.to_str()) {
        Some("ppm") => fractal_canvas::write_ppm(explorer.canvas(), &args.output)?,
        _ => fractal_canvas::write_png(explorer.canvas(), &args.output)?,
    }
    println!("Saved to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zoom_rect_valid() {
        let rect = parse_zoom_rect("10,20,30.5,40").unwrap();

        assert_eq!(rect.from, Point { x: 10.0, y: 20.0 });
        assert_eq!(rect.to, Point { x: 30.5, y: 40.0 });
    }

    #[test]
    fn test_parse_zoom_rect_rejects_wrong_arity() {
        assert!(parse_zoom_rect("10,20,30").is_err());
        assert!(parse_zoom_rect("10,20,30,40,50").is_err());
    }

    #[test]
    fn test_parse_zoom_rect_rejects_non_numeric() {
        assert!(parse_zoom_rect("10,20,abc,40").is_err());
    }

    #[test]
    fn test_screen_arg_maps_to_all_screens() {
        assert_eq!(Screen::from(ScreenArg::Uv), Screen::UvGrid);
        assert_eq!(Screen::from(ScreenArg::Mandelbrot), Screen::MandelbrotGreyscale);
        assert_eq!(Screen::from(ScreenArg::MandelbrotHue), Screen::MandelbrotHue);
        assert_eq!(Screen::from(ScreenArg::Functions), Screen::Functions);
    }

    #[test]
    fn test_every_screen_is_reachable_from_the_cli() {
        let mapped: Vec<Screen> = ScreenArg::value_variants()
            .iter()
            .map(|&arg| Screen::from(arg))
            .collect();

        for screen in Screen::ALL {
            assert!(
                mapped.contains(screen),
                "{} has no CLI flag value",
                screen.display_name()
            );
        }
    }

    #[test]
    fn test_cli_args_parse() {
        let args = Args::parse_from([
            "fractal_canvas",
            "--screen",
            "cubic",
            "--width",
            "320",
            "--height",
            "200",
            "--iterations",
            "100",
            "--zoom",
            "10,10,200,150",
            "--output",
            "frame.ppm",
        ]);

        assert_eq!(args.screen, ScreenArg::Cubic);
        assert_eq!(args.width, 320);
        assert_eq!(args.height, 200);
        assert_eq!(args.zooms.len(), 1);
        assert_eq!(args.output, PathBuf::from("frame.ppm"));
    }
}
