//! Widgets: what gets placed into panes.
//!
//! Widgets are built in two phases. A [`WidgetBuilder`] accumulates
//! identity, tooltip, state flags and the kind-specific settings; nothing is
//! checked until [`WidgetBuilder::finalize`] validates the lot and produces
//! an immutable [`Widget`]. Only finalized widgets can be placed.
//!
//! # Example
//!
//! ```
//! use composer::Widget;
//!
//! let field = Widget::text_field(15, "")
//!     .id("cpf")
//!     .tooltip("Taxpayer number")
//!     .finalize()
//!     .unwrap();
//! assert_eq!(field.id(), "cpf");
//! assert!(field.kind().is_editable());
//! ```

mod kind;
pub mod mask;

pub use kind::{NumberRange, Orientation, SelectionMode, SliderConfig, WidgetKind};

use crate::error::WidgetError;

/// A finalized widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    kind: WidgetKind,
    id: String,
    group: String,
    tooltip: String,
    enabled: bool,
    visible: bool,
}

impl Widget {
    /// Start a push button.
    pub fn button(label: impl Into<String>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::Button {
            label: label.into(),
            icon: None,
        })
    }

    /// Start a button showing an icon resource.
    pub fn icon_button(label: impl Into<String>, icon: impl Into<String>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::Button {
            label: label.into(),
            icon: Some(icon.into()),
        })
    }

    /// Start a static label.
    pub fn label(text: impl Into<String>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::Label { text: text.into() })
    }

    /// Start a single-line text field `columns` characters wide.
    pub fn text_field(columns: u16, text: impl Into<String>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::TextField {
            columns,
            text: text.into(),
        })
    }

    /// Start a text field constrained by an input mask.
    pub fn formatted_text_field(mask: impl Into<String>, text: impl Into<String>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::FormattedTextField {
            mask: mask.into(),
            text: text.into(),
        })
    }

    /// Start a multi-line text area.
    pub fn text_area(rows: u16, columns: u16, text: impl Into<String>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::TextArea {
            rows,
            columns,
            text: text.into(),
        })
    }

    /// Start a check box.
    pub fn checkbox(label: impl Into<String>, checked: bool) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::Checkbox {
            label: label.into(),
            checked,
        })
    }

    /// Start a radio button. Give it a [`group`](WidgetBuilder::group) to
    /// make it exclusive with the radios of that group placed in the same
    /// pane: only the first one placed checked stays checked.
    pub fn radio(label: impl Into<String>, checked: bool) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::RadioButton {
            label: label.into(),
            checked,
        })
    }

    /// Start a combo box.
    pub fn combo_box<I, S>(items: I) -> WidgetBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WidgetBuilder::new(WidgetKind::ComboBox {
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Start a selection list showing five rows.
    pub fn list<I, S>(items: I, selection: SelectionMode) -> WidgetBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WidgetBuilder::new(WidgetKind::List {
            items: items.into_iter().map(Into::into).collect(),
            selection,
            visible_rows: 5,
        })
    }

    /// Start a table with the given column headers.
    pub fn table<I, S>(columns: I, selection: SelectionMode) -> WidgetBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WidgetBuilder::new(WidgetKind::Table {
            columns: columns.into_iter().map(Into::into).collect(),
            selection,
            column_widths: Vec::new(),
        })
    }

    /// Start an integer spinner.
    pub fn integer_spinner(range: NumberRange<i64>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::IntegerSpinner(range))
    }

    /// Start a floating-point spinner.
    pub fn double_spinner(range: NumberRange<f64>) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::DoubleSpinner(range))
    }

    /// Start a slider.
    pub fn slider(config: SliderConfig) -> WidgetBuilder {
        WidgetBuilder::new(WidgetKind::Slider(config))
    }

    /// Kind and kind-specific settings.
    pub const fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Identifier used for lookups; empty if unset.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Group name; empty if unset.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Tooltip text; empty if unset.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Whether the widget accepts input.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the widget is shown.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Initial state of a check box or radio button.
    pub const fn is_checked(&self) -> bool {
        self.kind.is_checked()
    }

    /// Whether checking this widget unchecks the rest of its group.
    pub fn is_exclusive(&self) -> bool {
        matches!(self.kind, WidgetKind::RadioButton { .. }) && !self.group.is_empty()
    }

    pub(crate) fn uncheck(&mut self) {
        self.kind.uncheck();
    }

    /// Text shown by a formatted text field, with mask literals applied.
    pub fn formatted_text(&self) -> Option<String> {
        match &self.kind {
            WidgetKind::FormattedTextField { mask: m, text } => mask::apply(m, text),
            _ => None,
        }
    }
}

/// Accumulates widget settings until [`finalize`](Self::finalize).
#[derive(Debug, Clone)]
#[must_use = "a widget builder does nothing until finalized"]
pub struct WidgetBuilder {
    kind: WidgetKind,
    id: String,
    group: String,
    tooltip: String,
    enabled: bool,
    visible: bool,
}

impl WidgetBuilder {
    /// Start from a kind with default state: enabled, visible, no id.
    pub const fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            id: String::new(),
            group: String::new(),
            tooltip: String::new(),
            enabled: true,
            visible: true,
        }
    }

    /// Set the lookup identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the group name.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Enable or disable input.
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show or hide.
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Edit kind-specific settings in place.
    pub fn configure(mut self, f: impl FnOnce(&mut WidgetKind)) -> Self {
        f(&mut self.kind);
        self
    }

    /// Validate and freeze.
    pub fn finalize(self) -> Result<Widget, WidgetError> {
        self.kind.validate()?;
        Ok(Widget {
            kind: self.kind,
            id: self.id,
            group: self.group,
            tooltip: self.tooltip,
            enabled: self.enabled,
            visible: self.visible,
        })
    }
}
