use fl_core::diagnostics::{cell_position, describe_entities, describe_links, log_region};
use fl_core::types::{BlockType, EntityType, LinkKind, Region};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

type Fields = BTreeMap<String, String>;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<Fields>>>);

struct FieldVisitor<'a>(&'a mut Fields);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.0.lock().expect("events lock").push(fields);
    }
}

fn logged(region: &Region) -> Fields {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());
    tracing::subscriber::with_default(subscriber, || log_region(region));

    let mut events = captured.0.lock().expect("events lock").clone();
    assert_eq!(events.len(), 1, "one event per region");
    events.remove(0)
}

#[test]
fn links_are_described_by_kind_and_ids() {
    let region = Region::new("k1", BlockType::KeyValueSet)
        .with_link(LinkKind::Child, &["w1", "w2"])
        .with_link(LinkKind::Value, &["v1"]);

    assert_eq!(describe_links(&region), "CHILD[w1,w2]; VALUE[v1]");
    assert_eq!(describe_links(&Region::new("w", BlockType::Word)), "none");
}

#[test]
fn entities_are_joined() {
    let region = Region::new("k1", BlockType::KeyValueSet)
        .with_entity(EntityType::Key)
        .with_entity(EntityType::ColumnHeader);
    assert_eq!(describe_entities(&region), "KEY,COLUMN_HEADER");
}

#[test]
fn cell_position_only_for_cells() {
    let mut cell = Region::new("c1", BlockType::Cell);
    cell.row_index = Some(4);
    cell.column_span = Some(2);

    let position = cell_position(&cell).expect("cell position");
    assert_eq!(position.row, Some(4));
    assert_eq!(position.column_span, Some(2));
    assert!(cell_position(&Region::new("w1", BlockType::Word)).is_none());
}

#[test]
fn region_event_carries_structured_fields() {
    let region = Region::new("k1", BlockType::KeyValueSet)
        .with_text("Date")
        .with_confidence(91.5)
        .with_entity(EntityType::Key)
        .with_link(LinkKind::Child, &["w1", "w2"])
        .with_link(LinkKind::Value, &["v1"])
        .with_bounding_box(0.25, 0.1, 0.3, 0.05);

    let fields = logged(&region);
    assert_eq!(fields["message"], "region");
    assert_eq!(fields["id"], "k1");
    assert_eq!(fields["block_type"], "KEY_VALUE_SET");
    assert_eq!(fields["text"], "Date");
    assert_eq!(fields["links"], "CHILD[w1,w2]; VALUE[v1]");
    assert_eq!(fields["entity_types"], "KEY");
    assert!(fields.contains_key("confidence"));
    assert!(fields["bounding_box"].starts_with("left=0.2500 top=0.1000"));
    assert!(!fields.contains_key("cell"));
}

#[test]
fn page_event_omits_confidence() {
    let region = Region::new("p1", BlockType::Page).with_confidence(99.0);

    let fields = logged(&region);
    assert_eq!(fields["block_type"], "PAGE");
    assert!(!fields.contains_key("confidence"));
    assert_eq!(fields["links"], "none");
}

#[test]
fn cell_event_carries_position() {
    let mut cell = Region::new("c1", BlockType::Cell).with_confidence(80.0);
    cell.row_index = Some(4);
    cell.column_index = Some(1);
    cell.column_span = Some(2);

    let fields = logged(&cell);
    assert_eq!(fields["cell"], "row=4 column=1 row_span=- column_span=2");
    assert!(fields.contains_key("confidence"));
}
