use super::*;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas::new(w, h).unwrap()).unwrap()
}

#[test]
fn rejects_oversized_canvas() {
    let canvas = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(CpuSurface::new(canvas).is_err());
}

#[test]
fn fresh_surface_reads_back_transparent() {
    let mut s = surface(8, 4);
    let frame = s.read_pixels();
    assert_eq!(frame.width, 8);
    assert_eq!(frame.height, 4);
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn solid_fill_covers_rect() {
    let mut s = surface(16, 16);
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Paint::Solid(Rgba8::rgb(255, 0, 0)));
    let frame = s.read_pixels();
    assert_eq!(frame.pixel(8, 8), Some([255, 0, 0, 255]));
}

#[test]
fn clear_discards_previous_drawing() {
    let mut s = surface(8, 8);
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Paint::Solid(Rgba8::BLACK));
    s.clear();
    let frame = s.read_pixels();
    assert_eq!(frame.pixel(4, 4), Some([0, 0, 0, 0]));
}

#[test]
fn vertical_gradient_runs_top_to_bottom() {
    let mut s = surface(4, 100);
    s.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 100.0),
        Paint::VerticalGradient {
            y0: 0.0,
            y1: 100.0,
            top: Rgba8::rgb(0, 0, 0),
            bottom: Rgba8::rgb(255, 255, 255),
        },
    );
    let frame = s.read_pixels();
    let top = frame.pixel(2, 2).unwrap();
    let bottom = frame.pixel(2, 97).unwrap();
    assert!(top[0] < 32, "top {top:?}");
    assert!(bottom[0] > 223, "bottom {bottom:?}");
}

#[test]
fn non_finite_geometry_is_dropped() {
    let mut s = surface(8, 8);
    s.fill_rect(
        Rect::new(0.0, 0.0, f64::NAN, 8.0),
        Paint::Solid(Rgba8::BLACK),
    );
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((f64::INFINITY, 4.0));
    s.stroke_path(&path, Stroke::new(Rgba8::BLACK, 2.0));
    let frame = s.read_pixels();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn measure_text_is_positive_with_or_without_fonts() {
    let mut s = surface(8, 8);
    let style = TextStyle::new(crate::model::config::FontFamily::Arial, 16.0, Rgba8::BLACK);
    let size = s.measure_text("Dataset", &style);
    assert!(size.width > 0.0);
    assert!(size.height > 0.0);
}
