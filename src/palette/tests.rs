use super::*;
use crate::dom::Rect;
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Fixture {
    doc: Document,
    dispatcher: Dispatcher,
    widget: PaletteWidget,
}

fn page() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.create_element(ElementKind::Div);
    doc.add_class(container, "color-palette").unwrap();
    doc.set_bounds(container, Rect::new(10, 10, 0, 0)).unwrap();
    let output = doc.create_element(ElementKind::Paragraph);
    doc.add_class(output, "output").unwrap();
    doc.append(root, &[container, output]).unwrap();
    (doc, container, output)
}

fn create_fixture(count: usize) -> Fixture {
    let (mut doc, container, output) = page();
    let mut dispatcher = Dispatcher::new();
    let mut rng = StdRng::seed_from_u64(42);
    let widget = PaletteWidget::init(
        &mut doc,
        &mut dispatcher,
        container,
        output,
        count,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap();
    Fixture {
        doc,
        dispatcher,
        widget,
    }
}

fn click(fixture: &mut Fixture, target: NodeId) {
    let mut event = Event::new(EventType::Click, target);
    fixture.dispatcher.dispatch(&mut fixture.doc, &mut event);
}

fn color_attr(doc: &Document, swatch: NodeId) -> String {
    doc.element(swatch)
        .and_then(|e| e.data(COLOR_DATA_KEY))
        .unwrap()
        .to_string()
}

#[test]
fn init_creates_requested_number_of_swatches() {
    for count in [1, 7, 60] {
        let fixture = create_fixture(count);
        assert_eq!(fixture.widget.swatches(&fixture.doc).len(), count);
        assert_eq!(
            fixture.doc.children(fixture.widget.container()).len(),
            count
        );
    }
}

#[test]
fn init_registers_exactly_one_listener() {
    let fixture = create_fixture(60);
    assert_eq!(fixture.dispatcher.total_listeners(), 1);
    assert_eq!(
        fixture.dispatcher.listener_count(fixture.widget.container()),
        1
    );
    for swatch in fixture.widget.swatches(&fixture.doc) {
        assert_eq!(fixture.dispatcher.listener_count(swatch), 0);
    }
}

#[test]
fn swatches_carry_matching_background_and_data_color() {
    let fixture = create_fixture(30);
    for swatch in fixture.widget.swatches(&fixture.doc) {
        let element = fixture.doc.element(swatch).unwrap();
        let attr = element.data(COLOR_DATA_KEY).unwrap();
        assert_eq!(attr.len(), 7);
        assert!(attr.starts_with('#'));
        assert!(attr[1..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(
            element.style.background_color.map(|c| c.to_string()),
            Some(attr.to_string())
        );
        assert!(element.has_class(SWATCH_CLASS));
        assert_eq!(element.kind, ElementKind::Button);
    }
}

#[test]
fn click_on_swatch_updates_output() {
    let mut fixture = create_fixture(12);
    let swatches = fixture.widget.swatches(&fixture.doc);

    for &swatch in &swatches {
        click(&mut fixture, swatch);
        let color = color_attr(&fixture.doc, swatch);
        assert_eq!(
            fixture.widget.output_text(&fixture.doc),
            format!("Selected color: {color}")
        );
        assert_eq!(
            fixture.widget.selected_color(&fixture.doc).map(|c| c.to_string()),
            Some(color)
        );
    }
}

#[test]
fn click_on_container_leaves_output_untouched() {
    let mut fixture = create_fixture(5);
    let first = fixture.widget.swatches(&fixture.doc)[0];
    click(&mut fixture, first);
    let before = fixture.doc.element(fixture.widget.output()).cloned();

    let container = fixture.widget.container();
    click(&mut fixture, container);

    assert_eq!(fixture.doc.element(fixture.widget.output()).cloned(), before);
}

#[test]
fn click_before_any_selection_keeps_output_empty() {
    let mut fixture = create_fixture(5);
    let container = fixture.widget.container();
    click(&mut fixture, container);
    assert_eq!(fixture.widget.output_text(&fixture.doc), "");
    assert_eq!(fixture.widget.selected_color(&fixture.doc), None);
}

#[test]
fn clicking_same_swatch_twice_is_idempotent() {
    let mut fixture = create_fixture(5);
    let swatch = fixture.widget.swatches(&fixture.doc)[3];

    click(&mut fixture, swatch);
    let first = fixture.doc.element(fixture.widget.output()).cloned();
    click(&mut fixture, swatch);
    let second = fixture.doc.element(fixture.widget.output()).cloned();

    assert_eq!(first, second);
}

#[test]
fn swatch_added_later_is_handled_by_existing_listener() {
    let mut fixture = create_fixture(4);
    let color = HexColor::new(0x12, 0xab, 0xef);
    let added = fixture.widget.add_swatch(&mut fixture.doc, color).unwrap();

    assert_eq!(fixture.dispatcher.total_listeners(), 1);
    assert_eq!(fixture.widget.swatches(&fixture.doc).len(), 5);

    click(&mut fixture, added);
    assert_eq!(
        fixture.widget.output_text(&fixture.doc),
        "Selected color: #12abef"
    );
    assert_eq!(fixture.widget.selected_color(&fixture.doc), Some(color));
}

#[test]
fn non_button_children_are_ignored() {
    let mut fixture = create_fixture(2);
    let label = fixture.doc.create_element(ElementKind::Span);
    fixture
        .doc
        .append_child(fixture.widget.container(), label)
        .unwrap();

    click(&mut fixture, label);

    assert_eq!(fixture.widget.output_text(&fixture.doc), "");
    assert_eq!(fixture.widget.swatches(&fixture.doc).len(), 2);
}

#[test]
fn buttons_without_valid_color_are_ignored() {
    let mut fixture = create_fixture(2);
    let container = fixture.widget.container();
    let bare = fixture.doc.create_element(ElementKind::Button);
    let broken = fixture.doc.create_element(ElementKind::Button);
    fixture
        .doc
        .set_data(broken, COLOR_DATA_KEY, "#1000000")
        .unwrap();
    fixture.doc.append(container, &[bare, broken]).unwrap();

    click(&mut fixture, bare);
    click(&mut fixture, broken);

    assert_eq!(fixture.widget.selected_color(&fixture.doc), None);
}

#[test]
fn init_rejects_missing_references() {
    let (mut doc, container, output) = page();
    let mut dispatcher = Dispatcher::new();
    let mut rng = StdRng::seed_from_u64(1);
    let detached = doc.create_element(ElementKind::Div);

    let err = PaletteWidget::init(
        &mut doc,
        &mut dispatcher,
        detached,
        output,
        3,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, PaletteError::MissingContainer(_)));

    let err = PaletteWidget::init(
        &mut doc,
        &mut dispatcher,
        container,
        NodeId(999),
        3,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, PaletteError::MissingOutput(_)));

    let err = PaletteWidget::init(
        &mut doc,
        &mut dispatcher,
        container,
        output,
        0,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, PaletteError::EmptyPalette));

    assert_eq!(dispatcher.total_listeners(), 0);
    assert!(doc.children(container).is_empty());
}

#[test]
fn mount_resolves_selectors() {
    let (mut doc, container, output) = page();
    let mut dispatcher = Dispatcher::new();
    let mut rng = StdRng::seed_from_u64(3);

    let widget = PaletteWidget::mount(
        &mut doc,
        &mut dispatcher,
        ".color-palette",
        ".output",
        6,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(widget.container(), container);
    assert_eq!(widget.output(), output);

    let err = PaletteWidget::mount(
        &mut doc,
        &mut dispatcher,
        ".nope",
        ".output",
        6,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "palette container '.nope' not found");
}

#[test]
fn reinitialize_replaces_swatches_and_keeps_listener() {
    let mut fixture = create_fixture(10);
    let old = fixture.widget.swatches(&fixture.doc);
    let mut rng = StdRng::seed_from_u64(99);

    fixture
        .widget
        .reinitialize(&mut fixture.doc, 4, &mut rng)
        .unwrap();

    let new = fixture.widget.swatches(&fixture.doc);
    assert_eq!(new.len(), 4);
    assert!(new.iter().all(|id| !old.contains(id)));
    assert_eq!(fixture.dispatcher.total_listeners(), 1);

    click(&mut fixture, new[2]);
    let expected = color_attr(&fixture.doc, new[2]);
    assert_eq!(
        fixture.widget.output_text(&fixture.doc),
        format!("Selected color: {expected}")
    );

    assert!(matches!(
        fixture.widget.reinitialize(&mut fixture.doc, 0, &mut rng),
        Err(PaletteError::EmptyPalette)
    ));
}

#[test]
fn reinitialize_keeps_other_container_children() {
    let (mut doc, container, _) = page();
    let root = doc.root();
    let inner_output = doc.create_element(ElementKind::Paragraph);
    let label = doc.create_element(ElementKind::Span);
    doc.append(container, &[label, inner_output]).unwrap();
    let mut dispatcher = Dispatcher::new();
    let mut rng = StdRng::seed_from_u64(17);
    let widget = PaletteWidget::init(
        &mut doc,
        &mut dispatcher,
        container,
        inner_output,
        5,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap();
    let first = widget.swatches(&doc)[0];
    let selected = color_attr(&doc, first);
    dispatcher.dispatch(&mut doc, &mut Event::new(EventType::Click, first));

    widget.reinitialize(&mut doc, 3, &mut rng).unwrap();

    assert!(doc.contains(root, inner_output));
    assert!(doc.contains(root, label));
    assert!(!doc.contains(root, first));
    assert_eq!(widget.swatches(&doc).len(), 3);
    assert_eq!(&doc.children(container)[..2], &[label, inner_output]);
    assert_eq!(
        widget.output_text(&doc),
        format!("Selected color: {selected}")
    );
}

#[test]
fn init_refuses_container_with_a_palette() {
    let mut fixture = create_fixture(3);
    let container = fixture.widget.container();
    let output = fixture.widget.output();
    let mut rng = StdRng::seed_from_u64(4);

    let err = PaletteWidget::init(
        &mut fixture.doc,
        &mut fixture.dispatcher,
        container,
        output,
        2,
        PaletteLayout::default(),
        &mut rng,
    )
    .unwrap_err();

    assert!(matches!(err, PaletteError::AlreadyMounted(id) if id == container));
    assert_eq!(fixture.widget.swatches(&fixture.doc).len(), 3);
    assert_eq!(fixture.dispatcher.total_listeners(), 1);
}

#[test]
fn detach_stops_handling_clicks() {
    let mut fixture = create_fixture(3);
    assert!(fixture.widget.detach(&mut fixture.dispatcher));
    assert!(!fixture.widget.detach(&mut fixture.dispatcher));

    let swatch = fixture.widget.swatches(&fixture.doc)[0];
    click(&mut fixture, swatch);
    assert_eq!(fixture.widget.output_text(&fixture.doc), "");
}

#[test]
fn layout_places_swatches_inside_container() {
    let fixture = create_fixture(25);
    let container = fixture.doc.element(fixture.widget.container()).unwrap().bounds;
    let output = fixture.doc.element(fixture.widget.output()).unwrap().bounds;

    assert_eq!((container.x, container.y), (10, 10));
    for swatch in fixture.widget.swatches(&fixture.doc) {
        let rect = fixture.doc.element(swatch).unwrap().bounds;
        assert!(container.contains(rect.x, rect.y));
        assert!(container.contains(rect.x + rect.w - 1, rect.y + rect.h - 1));
        assert_eq!(fixture.doc.hit_test(rect.x + 1, rect.y + 1), Some(swatch));
    }
    assert!(output.y >= container.y + container.h);
}

#[test]
fn swatch_color_reads_data_attribute() {
    let fixture = create_fixture(3);
    let swatch = fixture.widget.swatches(&fixture.doc)[1];
    assert_eq!(
        fixture.widget.swatch_color(&fixture.doc, 1).map(|c| c.to_string()),
        Some(color_attr(&fixture.doc, swatch))
    );
    assert_eq!(fixture.widget.swatch_color(&fixture.doc, 3), None);
}
