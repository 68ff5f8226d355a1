//! Registration Form Demo: a window described with nested layout builders.
//!
//! Demonstrates:
//! - Border layout with a toolbar and a form
//! - Named-area grid with padding, spans and fill modes
//! - Box layout with radio groups and fillers
//! - Split layout with a collapsible divider
//! - Id and group lookups on the finished tree
//!
//! Run with `RUST_LOG=composer=debug` to see every placement.

use composer::widget::{NumberRange, SelectionMode};
use composer::{Anchor, BoxAlignment, Cell, Fill, Node, Pane, Placement, Widget};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut window = Pane::new().with_id("window");

    // Toolbar
    let mut toolbar = window.child().with_id("toolbar");
    toolbar
        .horizontal_box_layout()
        .widget(Widget::icon_button("New", "icons/new.png").id("new").tooltip("New record").finalize()?)
        .filler(4)
        .widget(Widget::icon_button("Save", "icons/save.png").id("save").tooltip("Save record").finalize()?);

    // Sex selection, exclusive within the "sex" group
    let mut sex = window.child().with_id("sex");
    sex.vertical_box_layout()
        .align_x(BoxAlignment::Left)
        .widget(Widget::radio("Female", true).id("female").group("sex").finalize()?)
        .filler(2)
        .widget(Widget::radio("Male", false).id("male").group("sex").finalize()?);

    // Form
    let mut form = window.child().with_id("form");
    let mut grid = form.grid_bag_layout();
    grid.padding(2, 5, 2, 5).define_grid([
        "A B B B",
        "C D D D",
        "X Y Y Y",
        "W K K K",
        "W Z Z Z",
        "I J J J",
        "E F G H",
    ])?;
    grid.cell("A", Cell::new(Widget::label("CPF:").finalize()?))?
        .cell("B", Cell::new(Widget::text_field(15, "").id("cpf").finalize()?))?
        .cell("C", Cell::new(Widget::label("Name:").finalize()?))?
        .cell(
            "D",
            Cell::new(Widget::text_field(40, "").id("name").finalize()?).fill(Fill::HORIZONTAL),
        )?
        .cell("X", Cell::new(Widget::label("ZIP:").finalize()?))?
        .cell(
            "Y",
            Cell::new(Widget::formatted_text_field("#####-###", "20540006").id("zip").finalize()?),
        )?
        .cell("W", Cell::new(Widget::label("Sex:").finalize()?).anchor(Anchor::West))?
        .cell(
            "K",
            Cell::new(
                Widget::combo_box(["Single", "Married", "Divorced"])
                    .id("status")
                    .finalize()?,
            ),
        )?
        .cell(
            "Z",
            Cell::new(
                Widget::list(["Reading", "Music", "Sports"], SelectionMode::Multiple)
                    .id("hobbies")
                    .finalize()?,
            )
            .fill(Fill::BOTH),
        )?
        .cell("I", Cell::new(Widget::label("Age:").finalize()?))?
        .cell(
            "J",
            Cell::new(Widget::integer_spinner(NumberRange::new(0, 130, 1, 30)).id("age").finalize()?),
        )?
        .cell("E", Cell::new(Widget::checkbox("Newsletter", true).id("news").finalize()?))?
        .cell("F", Cell::new(Widget::button("Clear").id("clear").finalize()?))?
        .cell("G", Cell::new(Widget::button("Cancel").id("cancel").finalize()?))?
        .cell("H", Cell::new(Widget::button("Ok").id("ok").finalize()?).anchor(Anchor::East))?;
    drop(grid);

    let mut content = window.child().with_id("content");
    content
        .horizontal_split_layout()
        .split_location(120)
        .one_touch_expandable(true)
        .first(sex)?
        .second(form)?;

    window.border_layout().north(toolbar)?.center(content)?;

    // Walk the finished tree
    print_tree(&window, 0);

    if let Some(zip) = window.find("zip") {
        println!("zip shows as {:?}", zip.formatted_text().unwrap_or_default());
    }
    let sex_ids: Vec<&str> = window.find_group("sex").iter().map(|w| w.id()).collect();
    println!("sex group: {sex_ids:?}");

    Ok(())
}

fn print_tree(pane: &Pane, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}pane '{}' {:?}", pane.id(), pane.layout());
    for child in pane.children() {
        match &child.node {
            Node::Pane(p) => print_tree(p, depth + 1),
            Node::Widget(w) => {
                let placement = match &child.placement {
                    Placement::Grid(c) => format!(
                        "grid col={} row={} span={}x{} weight=({}, {})",
                        c.column, c.row, c.column_span, c.row_span, c.weight_x, c.weight_y
                    ),
                    other => format!("{other:?}"),
                };
                let scrolled = if child.is_scrolled() { " [scroll]" } else { "" };
                println!("{indent}  {} '{}' {placement}{scrolled}", w.kind().name(), w.id());
            }
            Node::Filler { width, height } => println!("{indent}  filler {width}x{height}"),
        }
    }
}
