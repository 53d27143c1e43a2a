use super::*;

#[test]
fn canvas_validation() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(600, 400).unwrap();
    assert_eq!(c, Canvas::DEFAULT);
    assert_eq!(c.rgba_len(), 600 * 400 * 4);
    assert_eq!(c.center(), Point::new(300.0, 200.0));
}
