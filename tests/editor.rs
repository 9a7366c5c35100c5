use inpaint_mask::config::{Config, ResizePolicy};
use inpaint_mask::draw::{MASK_BLACK, MASK_WHITE, Raster};
use inpaint_mask::output::save_mask;
use inpaint_mask::util::Point;
use inpaint_mask::{BrushMode, DisplayGeometry, ExportedMask, MaskEditor, PriorMask, SourceImage};
use tempfile::TempDir;

fn gradient_source(width: i32, height: i32) -> SourceImage {
    let mut raster = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u32;
            let g = (y * 255 / height.max(1)) as u32;
            raster.pixels_mut()[(y * width + x) as usize] = 0xFF00_0000 | (r << 16) | (g << 8) | 0x40;
        }
    }
    SourceImage::from_raster(&raster).unwrap()
}

fn editor_with(config: &Config, width: i32, height: i32, prior: Option<PriorMask>) -> MaskEditor {
    let mut editor = MaskEditor::new(config);
    editor.open(gradient_source(width, height), prior);
    editor.layout(width as u32, height as u32).unwrap();
    editor
}

fn editor(width: i32, height: i32) -> MaskEditor {
    editor_with(&Config::default(), width, height, None)
}

fn export(editor: &mut MaskEditor) -> ExportedMask {
    editor.export_mask().unwrap().expect("surfaces laid out")
}

fn segment_distance(c: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return c.distance(a);
    }
    let t = (((c.x - a.x) * dx + (c.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    c.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

fn path_distance(c: Point, path: &[Point]) -> f64 {
    if path.len() == 1 {
        return c.distance(path[0]);
    }
    path.windows(2)
        .map(|w| segment_distance(c, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn export_matches_stroke_footprint_across_diameters() {
    let path = vec![
        Point::new(40.0, 50.0),
        Point::new(160.0, 70.0),
        Point::new(200.0, 180.0),
        Point::new(60.0, 200.0),
    ];

    for diameter in [5.0, 18.0, 47.0, 90.0, 150.0] {
        let mut editor = editor(260, 240);
        editor.brush.set_diameter(diameter);
        editor.stroke_path(&path).unwrap();
        let mask = export(&mut editor);
        let radius = diameter / 2.0;

        for y in (0..240).step_by(2) {
            for x in (0..260).step_by(2) {
                let d = path_distance(Point::new(x as f64 + 0.5, y as f64 + 0.5), &path);
                if d <= radius - 1.5 {
                    assert!(mask.is_selected(x, y), "d={diameter}: ({x},{y}) dist {d:.2}");
                } else if d >= radius + 1.5 {
                    assert!(!mask.is_selected(x, y), "d={diameter}: ({x},{y}) dist {d:.2}");
                }
            }
        }
        assert!(
            mask.raster()
                .pixels()
                .iter()
                .all(|&p| p == MASK_WHITE || p == MASK_BLACK)
        );
    }
}

#[test]
fn clear_after_any_state_is_all_black() {
    let mut editor = editor(180, 120);
    editor.stroke_path(&[Point::new(0.0, 0.0), Point::new(180.0, 120.0)]).unwrap();
    editor.invert().unwrap();
    editor.clear().unwrap();

    let mask = export(&mut editor);
    assert_eq!(mask.geometry(), DisplayGeometry { width: 180, height: 120 });
    assert!(mask.raster().pixels().iter().all(|&p| p == MASK_BLACK));
}

#[test]
fn invert_twice_is_identity_on_export() {
    let mut editor = editor(150, 150);
    editor.brush.set_diameter(12.0);
    editor
        .stroke_path(&[Point::new(10.0, 140.0), Point::new(75.0, 10.0), Point::new(140.0, 140.0)])
        .unwrap();
    let original = export(&mut editor);

    editor.invert().unwrap();
    editor.invert().unwrap();
    assert_eq!(export(&mut editor), original);
}

#[test]
fn saved_mask_reopens_identically_from_disk() {
    let temp = TempDir::new().unwrap();
    let mut first = editor(320, 200);
    first.brush.set_diameter(60.0);
    first.stroke_path(&[Point::new(30.0, 30.0), Point::new(290.0, 170.0)]).unwrap();
    first.invert().unwrap();
    let exported = export(&mut first);

    let path = temp.path().join("masks/mask.png");
    save_mask(&exported, &path).unwrap();

    let prior = PriorMask::from_path(&path).unwrap();
    let mut reopened = editor_with(&Config::default(), 320, 200, Some(prior));
    assert_eq!(export(&mut reopened).raster(), exported.raster());
}

#[test]
fn erase_over_unpainted_area_changes_nothing() {
    let mut editor = editor(200, 200);
    editor.start_stroke(Point::new(30.0, 30.0)).unwrap();
    editor.end_stroke();
    let overlay = editor.overlay_snapshot().unwrap().unwrap();
    let mask = export(&mut editor);

    editor.brush.mode = BrushMode::Erase;
    editor.stroke_path(&[Point::new(120.0, 120.0), Point::new(190.0, 150.0)]).unwrap();
    assert_eq!(editor.overlay_snapshot().unwrap().unwrap(), overlay);
    assert_eq!(export(&mut editor), mask);
}

#[test]
fn erasing_same_path_with_same_brush_removes_all_selection() {
    let paths = [
        vec![Point::new(50.0, 100.0), Point::new(150.0, 100.0)],
        vec![Point::new(20.3, 31.7), Point::new(170.9, 88.2), Point::new(60.4, 180.6)],
        vec![Point::new(99.5, 99.5)],
    ];
    for diameter in [5.0, 13.0, 40.0] {
        for path in &paths {
            let mut editor = editor(200, 200);
            editor.brush.set_diameter(diameter);
            editor.stroke_path(path).unwrap();
            assert!(export(&mut editor).selected_count() > 0);

            editor.brush.mode = BrushMode::Erase;
            editor.stroke_path(path).unwrap();
            let mask = export(&mut editor);
            assert_eq!(mask.selected_count(), 0, "d={diameter} path {path:?}");
            assert_eq!(editor.overlay_snapshot().unwrap().unwrap().coverage(), 0);
        }
    }
}

#[test]
fn dot_on_400_by_300_source() {
    let mut editor = editor(400, 300);
    editor.brush.set_diameter(40.0);
    editor.start_stroke(Point::new(100.0, 100.0)).unwrap();
    editor.end_stroke();

    let mask = export(&mut editor);
    assert_eq!((mask.width(), mask.height()), (400, 300));
    assert!(mask.is_selected(100, 100));
    assert!(!mask.is_selected(0, 0));
    for y in 0..300 {
        for x in 0..400 {
            let d = Point::new(x as f64 + 0.5, y as f64 + 0.5).distance(Point::new(100.0, 100.0));
            if d <= 18.0 {
                assert!(mask.is_selected(x, y), "({x},{y}) inside disc");
            } else if d >= 22.0 {
                assert!(!mask.is_selected(x, y), "({x},{y}) outside disc");
            }
        }
    }
}

#[test]
fn full_coverage_then_invert_is_black() {
    let mut editor = editor(400, 300);
    editor.brush.set_diameter(150.0);
    for y in [0.0, 100.0, 200.0, 300.0] {
        editor.stroke_path(&[Point::new(0.0, y), Point::new(400.0, y)]).unwrap();
    }
    assert_eq!(export(&mut editor).selected_count(), 400 * 300);

    editor.invert().unwrap();
    let mask = export(&mut editor);
    assert_eq!(mask.selected_count(), 0);
    assert!(mask.raster().pixels().iter().all(|&p| p == MASK_BLACK));
}

#[test]
fn resize_before_first_stroke_gives_transparent_overlay() {
    let mut editor = MaskEditor::new(&Config::default());
    editor.open(gradient_source(400, 300), None);
    assert_eq!(editor.layout(0, 0).unwrap(), None);
    editor.start_stroke(Point::new(10.0, 10.0)).unwrap();

    editor.layout(400, 300).unwrap();
    editor.layout(1000, 150).unwrap();
    let overlay = editor.overlay_snapshot().unwrap().unwrap();
    assert_eq!((overlay.width(), overlay.height()), (200, 150));
    assert_eq!(overlay.coverage(), 0);

    editor.start_stroke(Point::new(100.0, 75.0)).unwrap();
    assert!(export(&mut editor).is_selected(100, 75));
}

#[test]
fn resize_before_first_stroke_reseeds_from_prior() {
    let mut prior = Raster::filled(400, 300, MASK_BLACK);
    for y in 0..150 {
        for x in 0..200 {
            prior.pixels_mut()[(y * 400 + x) as usize] = MASK_WHITE;
        }
    }
    let mut editor = editor_with(&Config::default(), 400, 300, Some(PriorMask::from_raster(prior)));
    editor.layout(200, 150).unwrap();

    let mask = export(&mut editor);
    assert_eq!((mask.width(), mask.height()), (200, 150));
    assert_eq!(mask.selected_count(), 100 * 75);
    assert!(mask.is_selected(50, 40));
    assert!(!mask.is_selected(150, 40));
}

#[test]
fn preserve_policy_keeps_edits_across_resize() {
    let mut editor = editor(200, 100);
    editor.brush.set_diameter(20.0);
    editor.start_stroke(Point::new(50.0, 50.0)).unwrap();
    editor.end_stroke();

    editor.layout(400, 200).unwrap();
    let mask = export(&mut editor);
    assert_eq!((mask.width(), mask.height()), (400, 200));
    assert!(mask.is_selected(100, 100));
    assert!(!mask.is_selected(300, 100));
}

#[test]
fn reseed_policy_drops_edits_across_resize() {
    let mut config = Config::default();
    config.surface.resize_policy = ResizePolicy::Reseed;
    let mut editor = editor_with(&config, 200, 100, None);
    editor.start_stroke(Point::new(50.0, 50.0)).unwrap();
    editor.end_stroke();

    editor.layout(400, 200).unwrap();
    assert_eq!(export(&mut editor).selected_count(), 0);
}

#[test]
fn unready_editor_ignores_everything() {
    let mut editor = MaskEditor::new(&Config::default());
    editor.start_stroke(Point::new(1.0, 1.0)).unwrap();
    editor.continue_stroke(Point::new(2.0, 2.0)).unwrap();
    editor.end_stroke();
    editor.invert().unwrap();
    editor.clear().unwrap();
    assert!(editor.export_mask().unwrap().is_none());
    assert!(editor.render_preview().unwrap().is_none());

    let mut called = false;
    assert!(!editor.save(|_| called = true).unwrap());
    assert!(!called);
}

#[test]
fn save_emits_single_mask_and_close_emits_nothing() {
    let mut editor = editor(64, 64);
    editor.start_stroke(Point::new(32.0, 32.0)).unwrap();
    editor.end_stroke();

    let mut calls = Vec::new();
    assert!(editor.save(|mask| calls.push(mask)).unwrap());
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].filename(), "mask.png");
    assert!(!calls[0].png_bytes().is_empty());
    assert!(calls[0].is_selected(32, 32));

    let mut closed = editor_with(&Config::default(), 64, 64, None);
    closed.start_stroke(Point::new(32.0, 32.0)).unwrap();
    closed.close();
}
