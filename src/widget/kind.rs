//! Widget kinds and their kind-specific settings.

use crate::error::WidgetError;

use super::mask;

/// Slider orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Bottom to top.
    Vertical,
}

/// Row selection policy for lists and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One row at a time.
    #[default]
    Single,
    /// One contiguous range.
    SingleInterval,
    /// Any set of rows.
    Multiple,
}

/// Bounds, step and initial value of a numeric widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange<T> {
    /// Lowest value.
    pub min: T,
    /// Highest value.
    pub max: T,
    /// Increment per step.
    pub step: T,
    /// Initial value.
    pub value: T,
}

impl<T> NumberRange<T> {
    /// Create a range.
    pub const fn new(min: T, max: T, step: T, value: T) -> Self {
        Self { min, max, step, value }
    }
}

impl Default for NumberRange<i64> {
    fn default() -> Self {
        Self::new(1, 10, 1, 5)
    }
}

impl Default for NumberRange<f64> {
    fn default() -> Self {
        Self::new(1.0, 10.0, 1.0, 5.0)
    }
}

impl<T> NumberRange<T>
where
    T: Copy + PartialOrd + Default + Into<f64>,
{
    fn check(&self, widget: &'static str) -> Result<(), WidgetError> {
        let in_bounds = self.min <= self.value && self.value <= self.max;
        if in_bounds && self.step > T::default() {
            return Ok(());
        }
        Err(WidgetError::OutOfRange {
            widget,
            min: self.min.into(),
            max: self.max.into(),
            step: self.step.into(),
            value: self.value.into(),
        })
    }
}

/// Settings of a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Direction of travel.
    pub orientation: Orientation,
    /// Lowest value.
    pub min: i32,
    /// Highest value.
    pub max: i32,
    /// Initial value.
    pub value: i32,
    /// Spacing of minor ticks.
    pub minor_tick: i32,
    /// Spacing of major ticks.
    pub major_tick: i32,
    /// Draw tick marks.
    pub paint_ticks: bool,
    /// Draw tick labels.
    pub paint_labels: bool,
    /// Fixed width in pixels, if any.
    pub width: Option<u16>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            min: 1,
            max: 100,
            value: 50,
            minor_tick: 1,
            major_tick: 10,
            paint_ticks: true,
            paint_labels: true,
            width: None,
        }
    }
}

/// The closed set of widgets the builder layer knows how to place.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// Push button.
    Button {
        /// Caption.
        label: String,
        /// Icon resource path.
        icon: Option<String>,
    },
    /// Static text.
    Label {
        /// Displayed text.
        text: String,
    },
    /// Single-line text input.
    TextField {
        /// Preferred width in characters.
        columns: u16,
        /// Initial text.
        text: String,
    },
    /// Single-line input constrained by a mask.
    FormattedTextField {
        /// Input mask, see [`mask`](super::mask).
        mask: String,
        /// Initial raw value.
        text: String,
    },
    /// Multi-line text input.
    TextArea {
        /// Visible rows.
        rows: u16,
        /// Visible columns.
        columns: u16,
        /// Initial text.
        text: String,
    },
    /// Two-state check box.
    Checkbox {
        /// Caption.
        label: String,
        /// Initial state.
        checked: bool,
    },
    /// Mutually exclusive option within its group.
    RadioButton {
        /// Caption.
        label: String,
        /// Initial state.
        checked: bool,
    },
    /// Drop-down choice.
    ComboBox {
        /// Choices.
        items: Vec<String>,
    },
    /// Scrollable list of items.
    List {
        /// Items.
        items: Vec<String>,
        /// Selection policy.
        selection: SelectionMode,
        /// Rows visible without scrolling.
        visible_rows: u16,
    },
    /// Scrollable table.
    Table {
        /// Column headers.
        columns: Vec<String>,
        /// Selection policy.
        selection: SelectionMode,
        /// Preferred column widths, by position.
        column_widths: Vec<u16>,
    },
    /// Integer spinner.
    IntegerSpinner(NumberRange<i64>),
    /// Floating-point spinner.
    DoubleSpinner(NumberRange<f64>),
    /// Slider.
    Slider(SliderConfig),
}

impl WidgetKind {
    /// Short name of the kind, used in logs and errors.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Button { .. } => "button",
            Self::Label { .. } => "label",
            Self::TextField { .. } => "text field",
            Self::FormattedTextField { .. } => "formatted text field",
            Self::TextArea { .. } => "text area",
            Self::Checkbox { .. } => "checkbox",
            Self::RadioButton { .. } => "radio button",
            Self::ComboBox { .. } => "combo box",
            Self::List { .. } => "list",
            Self::Table { .. } => "table",
            Self::IntegerSpinner(_) => "integer spinner",
            Self::DoubleSpinner(_) => "double spinner",
            Self::Slider(_) => "slider",
        }
    }

    /// Placed inside a scroll viewport.
    pub const fn is_scrollable(&self) -> bool {
        matches!(self, Self::List { .. } | Self::Table { .. })
    }

    /// Accepts typed text.
    pub const fn is_editable(&self) -> bool {
        matches!(
            self,
            Self::TextField { .. } | Self::FormattedTextField { .. } | Self::TextArea { .. }
        )
    }

    /// Holds an on/off state.
    pub const fn is_toggle(&self) -> bool {
        matches!(self, Self::Checkbox { .. } | Self::RadioButton { .. })
    }

    /// Initial on/off state of a toggle; `false` for every other kind.
    pub const fn is_checked(&self) -> bool {
        match self {
            Self::Checkbox { checked, .. } | Self::RadioButton { checked, .. } => *checked,
            _ => false,
        }
    }

    pub(crate) fn uncheck(&mut self) {
        if let Self::Checkbox { checked, .. } | Self::RadioButton { checked, .. } = self {
            *checked = false;
        }
    }

    /// Lets the user pick among items.
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::ComboBox { .. } | Self::List { .. } | Self::Table { .. })
    }

    /// Validate kind-specific settings.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn validate(&self) -> Result<(), WidgetError> {
        match self {
            Self::IntegerSpinner(range) => {
                let as_float = NumberRange::new(
                    range.min as f64,
                    range.max as f64,
                    range.step as f64,
                    range.value as f64,
                );
                as_float.check(self.name())
            }
            Self::DoubleSpinner(range) => range.check(self.name()),
            Self::Slider(config) => {
                NumberRange::new(config.min, config.max, 1, config.value).check(self.name())
            }
            Self::FormattedTextField { mask: m, text } => {
                if text.is_empty() || mask::apply(m, text).is_some() {
                    Ok(())
                } else {
                    Err(WidgetError::MaskMismatch {
                        mask: m.clone(),
                        value: text.clone(),
                    })
                }
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let list = WidgetKind::List {
            items: vec!["a".into()],
            selection: SelectionMode::Single,
            visible_rows: 5,
        };
        assert!(list.is_scrollable());
        assert!(list.is_selectable());
        assert!(!list.is_editable());

        let field = WidgetKind::TextField { columns: 10, text: String::new() };
        assert!(field.is_editable());
        assert!(!field.is_scrollable());

        let mut radio = WidgetKind::RadioButton { label: "x".into(), checked: true };
        assert!(radio.is_toggle());
        assert!(radio.is_checked());
        radio.uncheck();
        assert!(!radio.is_checked());
        assert!(!field.is_checked());
    }

    #[test]
    fn test_spinner_range_checked() {
        let ok = WidgetKind::IntegerSpinner(NumberRange::default());
        assert!(ok.validate().is_ok());

        let bad = WidgetKind::IntegerSpinner(NumberRange::new(1, 10, 1, 11));
        assert!(matches!(
            bad.validate(),
            Err(WidgetError::OutOfRange { widget: "integer spinner", .. })
        ));

        let zero_step = WidgetKind::DoubleSpinner(NumberRange::new(0.0, 1.0, 0.0, 0.5));
        assert!(zero_step.validate().is_err());
    }

    #[test]
    fn test_slider_range_checked() {
        assert!(WidgetKind::Slider(SliderConfig::default()).validate().is_ok());
        let bad = SliderConfig { min: 10, max: 0, ..SliderConfig::default() };
        assert!(WidgetKind::Slider(bad).validate().is_err());
    }

    #[test]
    fn test_mask_checked() {
        let ok = WidgetKind::FormattedTextField {
            mask: "#####-###".into(),
            text: "20540006".into(),
        };
        assert!(ok.validate().is_ok());

        let empty = WidgetKind::FormattedTextField { mask: "###".into(), text: String::new() };
        assert!(empty.validate().is_ok());

        let bad = WidgetKind::FormattedTextField { mask: "###".into(), text: "12a".into() };
        assert_eq!(
            bad.validate(),
            Err(WidgetError::MaskMismatch { mask: "###".into(), value: "12a".into() })
        );
    }
}
