//! End-to-end tests for named-area grid layouts.

use composer::{
    Anchor, Cell, ComposerConfig, Container, Fill, GridBagBuilder, GridConstraint, LayoutError,
    LayoutKind, Node, Pane, Placement, Widget,
};

fn label(id: &str) -> Widget {
    Widget::label(id).id(id).finalize().unwrap()
}

/// Host-side container that only keeps what a layout manager would see.
#[derive(Default)]
struct RecordingHost {
    layout: Option<LayoutKind>,
    placed: Vec<(String, GridConstraint)>,
}

impl Container for RecordingHost {
    fn set_layout(&mut self, layout: LayoutKind) {
        self.layout = Some(layout);
    }

    fn add(&mut self, node: Node, placement: Placement) {
        if let (Node::Widget(w), Placement::Grid(c)) = (node, placement) {
            self.placed.push((w.id().to_owned(), c));
        }
    }
}

#[test]
fn three_row_form_produces_expected_constraints() {
    let mut pane = Pane::new();
    let mut grid = pane.grid_bag_layout();
    grid.define_grid(["A B B B", "C D D D", "X Y Y Y"]).unwrap();
    for area in ["A", "B", "C", "D", "X", "Y"] {
        grid.cell(area, Cell::new(label(area))).unwrap();
    }
    drop(grid);

    let constraints: Vec<&GridConstraint> = pane
        .children()
        .iter()
        .filter_map(|c| c.grid_constraint())
        .collect();
    assert_eq!(constraints.len(), 6);

    let columns: Vec<usize> = constraints.iter().map(|c| c.column).collect();
    let rows: Vec<usize> = constraints.iter().map(|c| c.row).collect();
    let column_spans: Vec<usize> = constraints.iter().map(|c| c.column_span).collect();
    let row_spans: Vec<usize> = constraints.iter().map(|c| c.row_span).collect();
    assert_eq!(columns, [0, 1, 0, 1, 0, 1]);
    assert_eq!(rows, [0, 0, 1, 1, 2, 2]);
    assert_eq!(column_spans, [1, 3, 1, 3, 1, 3]);
    assert_eq!(row_spans, [1, 1, 1, 1, 1, 1]);

    let weight_x: Vec<f64> = constraints.iter().map(|c| c.weight_x).collect();
    let weight_y: Vec<f64> = constraints.iter().map(|c| c.weight_y).collect();
    assert_eq!(weight_x, [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    assert_eq!(weight_y, [0.0, 0.0, 0.0, 0.0, 1.0, 1.0]);

    for c in constraints {
        assert_eq!(c.anchor, Anchor::NorthWest);
        assert_eq!(c.fill, Fill::NONE);
    }
}

#[test]
fn only_edge_regions_stretch() {
    let mut pane = Pane::new();
    let mut grid = pane.grid_bag_layout();
    grid.define_grid(["A B B B", "C D D D"]).unwrap();
    for area in ["a", "b", "c", "d"] {
        grid.cell(area, Cell::new(label(area))).unwrap();
    }
    drop(grid);

    let weights: Vec<(&str, f64, f64)> = pane
        .children()
        .iter()
        .map(|c| {
            let w = c.node.as_widget().unwrap();
            let g = c.grid_constraint().unwrap();
            (w.id(), g.weight_x, g.weight_y)
        })
        .collect();
    assert_eq!(
        weights,
        [
            ("a", 0.0, 0.0),
            ("b", 1.0, 0.0),
            ("c", 0.0, 1.0),
            ("d", 1.0, 1.0),
        ]
    );
}

#[test]
fn spanning_column_area() {
    let mut pane = Pane::new();
    let mut grid = pane.grid_bag_layout();
    grid.define_grid(["A B B B", "W K K K", "W Z Z Z", "E F G H"])
        .unwrap();
    grid.cell("w", Cell::new(label("w")).anchor(Anchor::Center).fill(Fill::VERTICAL))
        .unwrap();
    let w = grid.region("W").unwrap();
    assert_eq!((w.start_row, w.end_row, w.row_span()), (1, 2, 2));
    drop(grid);

    let c = pane.children()[0].grid_constraint().unwrap();
    assert_eq!((c.column, c.row, c.column_span, c.row_span), (0, 1, 1, 2));
    assert_eq!((c.weight_x, c.weight_y), (0.0, 0.0));
    assert_eq!(c.fill, Fill::VERTICAL);
}

#[test]
fn host_container_receives_placements() {
    let mut host = RecordingHost::default();
    let mut grid = GridBagBuilder::new(&mut host, &ComposerConfig::default());
    grid.define_grid(["left right"])
        .unwrap()
        .cell("LEFT", Cell::new(label("l")))
        .unwrap()
        .cell("right", Cell::new(label("r")).fill(Fill::BOTH))
        .unwrap();
    drop(grid);

    assert_eq!(host.layout, Some(LayoutKind::GridBag));
    assert_eq!(host.placed.len(), 2);
    assert_eq!(host.placed[0].0, "l");
    assert_eq!(host.placed[1].1.column, 1);
    assert_eq!(host.placed[1].1.fill, Fill::BOTH);
}

#[test]
fn errors_abort_without_partial_state() {
    let mut pane = Pane::new();
    let mut grid = pane.grid_bag_layout();
    grid.define_grid(["A B"]).unwrap();
    grid.cell("A", Cell::new(label("a"))).unwrap();

    assert_eq!(grid.define_grid(["A B"]).unwrap_err(), LayoutError::DuplicateGrid);
    assert_eq!(
        grid.cell("C", Cell::new(label("c"))).unwrap_err(),
        LayoutError::UnknownArea("C".into())
    );
    assert_eq!(
        grid.cell("a", Cell::new(label("a2"))).unwrap_err(),
        LayoutError::DuplicateCell("A".into())
    );
    drop(grid);

    assert_eq!(pane.children().len(), 1);
    assert!(pane.find("a").is_some());
}

#[test]
fn widget_errors_convert_into_layout_errors() {
    fn build(pane: &mut Pane) -> composer::Result<()> {
        let spinner = Widget::integer_spinner(composer::widget::NumberRange::new(5, 1, 1, 3))
            .finalize()?;
        pane.grid_bag_layout()
            .define_grid(["A"])?
            .cell("A", Cell::new(spinner))?;
        Ok(())
    }

    let mut pane = Pane::new();
    assert!(matches!(build(&mut pane), Err(LayoutError::Widget(_))));
    assert!(pane.children().is_empty());
}

#[test]
fn nested_grid_inside_border_layout() {
    let mut form = Pane::new().with_id("form");
    form.grid_bag_layout()
        .define_grid(["A B"])
        .unwrap()
        .cell("A", Cell::new(label("cpf-label")))
        .unwrap()
        .cell(
            "B",
            Cell::new(
                Widget::formatted_text_field("###.###.###-##", "12345678901")
                    .id("cpf")
                    .finalize()
                    .unwrap(),
            ),
        )
        .unwrap();

    let mut toolbar = Pane::new().with_id("toolbar");
    toolbar
        .flow_layout()
        .widget(Widget::button("Save").id("save").finalize().unwrap());

    let mut window = Pane::new();
    window
        .border_layout()
        .north(toolbar)
        .unwrap()
        .center(form)
        .unwrap();

    let cpf = window.find("cpf").unwrap();
    assert_eq!(cpf.formatted_text().as_deref(), Some("123.456.789-01"));
    assert!(matches!(window.placement_of("cpf"), Some(Placement::Grid(_))));
    assert!(matches!(window.placement_of("save"), Some(Placement::Flow)));
}

#[test]
fn split_layout_with_grouped_radios() {
    let mut choices = Pane::new().with_id("choices");
    choices
        .flow_layout()
        .widget(Widget::radio("Female", true).id("f").group("sex").finalize().unwrap())
        .widget(Widget::radio("Male", true).id("m").group("sex").finalize().unwrap());

    let mut form = Pane::new().with_id("form");
    form.grid_bag_layout()
        .define_grid(["A"])
        .unwrap()
        .cell("A", Cell::new(label("name")))
        .unwrap();

    let mut window = Pane::new();
    let mut split = window.horizontal_split_layout();
    split.first(choices).unwrap().second(form).unwrap();
    assert_eq!(
        split.first(Pane::new()).unwrap_err(),
        LayoutError::DuplicateSlot { slot: "first" }
    );
    drop(split);

    let checked: Vec<&str> = window
        .find_group("sex")
        .into_iter()
        .filter(|w| w.is_checked())
        .map(Widget::id)
        .collect();
    assert_eq!(checked, ["f"]);
    assert!(matches!(window.placement_of("name"), Some(Placement::Grid(_))));
    assert!(matches!(window.layout(), LayoutKind::Split(_)));
}
