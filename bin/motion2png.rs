use carousel::prelude::*;
use clap::Parser;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use std::path::PathBuf;

/// Renders a circular or elliptic motion animation to PNG
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Trace an ellipse instead of a circle
    #[arg(long, short)]
    elliptic: bool,

    /// Circle radius in meters (0.1 to 2.0 on the sliders)
    #[arg(long, short, default_value = "1.0")]
    radius: f32,

    /// Semi-major axis in meters, elliptic only (0.1 to 2.0)
    #[arg(long, short('a'), default_value = "1.0")]
    semi_major: f32,

    /// Semi-minor axis in meters, elliptic only (0.1 to 2.0)
    #[arg(long, short('b'), default_value = "0.5")]
    semi_minor: f32,

    /// Linear velocity in m/s (0.1 to 1.0 circular, 0.1 to 5.0 elliptic)
    #[arg(long, short, default_value = "1.0")]
    velocity: f32,

    /// Number of animation ticks
    #[arg(long, short, default_value = "100")]
    frames: u32,

    /// Simulated seconds per tick
    #[arg(long, default_value = "0.1")]
    dt: f32,

    /// Output image width in pixels
    #[arg(long, short, default_value = "800")]
    width: u32,

    /// Destination filepath for PNG
    #[arg(long, short, default_value = "/tmp/motion.png")]
    out: PathBuf,
}

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OUTLINE: Rgba<u8> = Rgba([200, 200, 200, 255]);
const TRAJECTORY: Rgba<u8> = Rgba([40, 70, 220, 255]);
const POSITION_MARKER: Rgba<u8> = Rgba([30, 160, 60, 255]);
const ACCEL_VECTOR: Rgba<u8> = Rgba([220, 40, 40, 255]);

struct PngRenderer {
    img: RgbaImage,
    half_span: f32,
    prev: Option<Vec2>,
    marker: Option<Vec2>,
    accel: Option<(Vec2, Vec2)>,
    title: String,
}

impl PngRenderer {
    fn new(width: u32, half_span: f32) -> Self {
        PngRenderer {
            img: RgbaImage::from_pixel(width, width, BACKGROUND),
            half_span,
            prev: None,
            marker: None,
            accel: None,
            title: String::new(),
        }
    }

    fn to_img(&self, p: Vec2) -> (f32, f32) {
        let w = self.img.width() as f32;
        let x = linmap(p.x, -self.half_span, self.half_span, 0.0, w - 1.0);
        let y = linmap(p.y, -self.half_span, self.half_span, w - 1.0, 0.0);
        (x, y)
    }

    fn polyline(&mut self, points: &[Vec2], color: Rgba<u8>) {
        for pair in points.windows(2) {
            let a = self.to_img(pair[0]);
            let b = self.to_img(pair[1]);
            draw_line_segment_mut(&mut self.img, a, b, color);
        }
    }

    fn finish(mut self, out: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        if let Some((tail, tip)) = self.accel {
            let tail = self.to_img(tail);
            let tip = self.to_img(tip);
            draw_line_segment_mut(&mut self.img, tail, tip, ACCEL_VECTOR);
        }

        if let Some(marker) = self.marker {
            let (mx, my) = self.to_img(marker);
            draw_filled_circle_mut(&mut self.img, (mx as i32, my as i32), 6, POSITION_MARKER);
        }

        if !self.title.is_empty() {
            println!("{}", self.title);
        }

        self.img.save(out)?;
        Ok(())
    }
}

impl Render for PngRenderer {
    fn draw(&mut self, frame: &Frame) {
        if let Some(prev) = self.prev {
            let a = self.to_img(prev);
            let b = self.to_img(frame.position);
            draw_line_segment_mut(&mut self.img, a, b, TRAJECTORY);
        }
        self.prev = Some(frame.position);
        self.marker = Some(frame.position);
        self.accel = Some(frame.accel_vector);
        self.title = frame.title.clone();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    dbg!(&args);

    let params = if args.elliptic {
        MotionParams::Elliptic {
            semi_major: args.semi_major,
            semi_minor: args.semi_minor,
            velocity: args.velocity,
        }
    } else {
        MotionParams::Circular {
            radius: args.radius,
            velocity: args.velocity,
        }
    };

    let model = params.build()?;
    let mut controller = InteractionController::with_dt(model, args.dt);

    let mut renderer = PngRenderer::new(args.width, model.extent() * 1.25);
    renderer.polyline(&model.outline(200), OUTLINE);

    controller.run(args.frames, &mut renderer);

    renderer.finish(&args.out)?;

    println!("Wrote {}", args.out.display());

    Ok(())
}
