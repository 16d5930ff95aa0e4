use fl_core::resolver::resolve_fields;
use fl_core::selection::KeySelector;
use fl_core::types::{BlockType, EntityType, LinkKind, Region};
use fl_render::overlay::{
    confidence_label, render_overlay, render_region, LineStyle, OverlayOptions, EDGE_RED,
    MARKER_GREEN, OUTLINE_BLACK,
};
use fl_render::projection::ImageSize;
use fl_render::surface::{DrawCall, PixelPoint, PixelRect, RecordingSurface, Stroke};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Ids of the `region` debug events seen by the subscriber.
#[derive(Clone, Default)]
struct LoggedRegions(Arc<Mutex<Vec<String>>>);

#[derive(Default)]
struct RegionEvent {
    message: String,
    id: String,
}

impl Visit for RegionEvent {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "id" => self.id = format!("{value:?}"),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for LoggedRegions {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut seen = RegionEvent::default();
        event.record(&mut seen);
        if seen.message == "region" {
            self.0.lock().expect("events lock").push(seen.id);
        }
    }
}

const PAGE: ImageSize = ImageSize {
    width: 1000,
    height: 500,
};

fn key(id: &str, child: &str, value: &str) -> Region {
    Region::new(id, BlockType::KeyValueSet)
        .with_entity(EntityType::Key)
        .with_link(LinkKind::Child, &[child])
        .with_link(LinkKind::Value, &[value])
}

fn value(id: &str, child: &str) -> Region {
    Region::new(id, BlockType::KeyValueSet)
        .with_entity(EntityType::Value)
        .with_link(LinkKind::Child, &[child])
}

fn two_dates() -> Vec<Region> {
    vec![
        Region::new("d1", BlockType::Word).with_text("Date"),
        Region::new("d2", BlockType::Word).with_text("Date"),
        key("k1", "d1", "v1"),
        key("k2", "d2", "v2"),
        value("v1", "x1"),
        value("v2", "x2"),
        Region::new("x1", BlockType::Word)
            .with_text("01/07/2022")
            .with_confidence(87.9)
            .with_bounding_box(0.25, 0.10, 0.30, 0.05),
        Region::new("x2", BlockType::Word)
            .with_text("01/08/2022")
            .with_confidence(42.2)
            .with_bounding_box(0.5, 0.5, 0.1, 0.1),
    ]
}

#[test]
fn repeated_date_keys_draw_two_rectangles() {
    let fields = resolve_fields(&two_dates());
    assert_eq!(fields.get("Date").map(<[Region]>::len), Some(2));

    let mut surface = RecordingSurface::new();
    render_overlay(
        &fields,
        &KeySelector::contains("date"),
        PAGE,
        &mut surface,
        &OverlayOptions::default(),
    );

    assert_eq!(
        surface.rects(),
        vec![
            PixelRect {
                x: 250,
                y: 50,
                width: 300,
                height: 25,
            },
            PixelRect {
                x: 500,
                y: 250,
                width: 100,
                height: 50,
            },
        ]
    );
    assert_eq!(
        surface.texts(),
        vec![
            (PixelPoint { x: 250, y: 50 }, "87"),
            (PixelPoint { x: 500, y: 250 }, "42"),
        ]
    );
}

#[test]
fn non_matching_selector_draws_nothing() {
    let fields = resolve_fields(&two_dates());
    let mut surface = RecordingSurface::new();

    render_overlay(
        &fields,
        &KeySelector::contains("signature"),
        PAGE,
        &mut surface,
        &OverlayOptions::default(),
    );
    assert!(surface.calls.is_empty());
}

#[test]
fn repeated_renders_issue_identical_calls() {
    let regions = two_dates();
    let fields = resolve_fields(&regions);
    let options = OverlayOptions::default();

    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    render_overlay(&fields, &KeySelector::All, PAGE, &mut first, &options);
    render_overlay(&fields, &KeySelector::All, PAGE, &mut second, &options);

    assert_eq!(first, second);
    assert_eq!(resolve_fields(&regions), fields);
}

#[test]
fn line_regions_draw_closed_polygons() {
    let line = Region::new("l1", BlockType::Line).with_polygon(&[
        (0.1, 0.1),
        (0.5, 0.1),
        (0.5, 0.2),
        (0.1, 0.2),
    ]);
    let mut surface = RecordingSurface::new();

    render_region(&line, PAGE, &mut surface, &OverlayOptions::default());
    assert_eq!(
        surface.calls,
        vec![DrawCall::Polygon(
            vec![
                PixelPoint { x: 100, y: 50 },
                PixelPoint { x: 500, y: 50 },
                PixelPoint { x: 500, y: 100 },
                PixelPoint { x: 100, y: 100 },
            ],
            Stroke::new(1, OUTLINE_BLACK),
        )]
    );
}

#[test]
fn line_verticals_draw_left_and_right_edges() {
    let line = Region::new("l1", BlockType::Line).with_polygon(&[
        (0.1, 0.1),
        (0.5, 0.1),
        (0.5, 0.2),
        (0.1, 0.2),
    ]);
    let options = OverlayOptions {
        line_style: LineStyle::Verticals,
        ..OverlayOptions::default()
    };
    let mut surface = RecordingSurface::new();

    render_region(&line, PAGE, &mut surface, &options);
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Line(
                PixelPoint { x: 100, y: 50 },
                PixelPoint { x: 100, y: 100 },
                Stroke::new(2, MARKER_GREEN),
            ),
            DrawCall::Line(
                PixelPoint { x: 500, y: 50 },
                PixelPoint { x: 500, y: 100 },
                Stroke::new(2, EDGE_RED),
            ),
        ]
    );
}

#[test]
fn short_polygons_draw_no_verticals() {
    let line = Region::new("l1", BlockType::Line).with_polygon(&[(0.1, 0.1), (0.5, 0.1)]);
    let options = OverlayOptions {
        line_style: LineStyle::Verticals,
        ..OverlayOptions::default()
    };
    let mut surface = RecordingSurface::new();

    render_region(&line, PAGE, &mut surface, &options);
    assert!(surface.calls.is_empty());
}

#[test]
fn regions_without_markers_draw_nothing() {
    let mut surface = RecordingSurface::new();
    for region in [
        Region::new("s", BlockType::SelectionElement).with_bounding_box(0.1, 0.1, 0.1, 0.1),
        Region::new("c", BlockType::Cell).with_bounding_box(0.1, 0.1, 0.1, 0.1),
        Region::new("o", BlockType::Other("LAYOUT_TEXT".to_string())),
    ] {
        render_region(&region, PAGE, &mut surface, &OverlayOptions::default());
    }
    assert!(surface.calls.is_empty());
}

#[test]
fn word_without_confidence_draws_box_only() {
    let word = Region::new("w", BlockType::Word).with_bounding_box(0.0, 0.0, 0.5, 0.5);
    let mut surface = RecordingSurface::new();

    render_region(&word, PAGE, &mut surface, &OverlayOptions::default());
    assert_eq!(surface.rects().len(), 1);
    assert!(surface.texts().is_empty());
}

#[test]
fn confidence_label_truncates() {
    assert_eq!(confidence_label(99.99), "99");
    assert_eq!(confidence_label(0.4), "0");
    assert_eq!(confidence_label(100.0), "100");
}

#[test]
fn each_marked_value_region_is_logged_once() {
    let fields = resolve_fields(&two_dates());
    let logged = LoggedRegions::default();
    let subscriber = tracing_subscriber::registry().with(logged.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut surface = RecordingSurface::new();
        render_overlay(
            &fields,
            &KeySelector::contains("date"),
            PAGE,
            &mut surface,
            &OverlayOptions::default(),
        );
        render_overlay(
            &fields,
            &KeySelector::contains("signature"),
            PAGE,
            &mut surface,
            &OverlayOptions::default(),
        );
    });

    let ids = logged.0.lock().expect("events lock").clone();
    assert_eq!(ids, vec!["x1".to_string(), "x2".to_string()]);
}
