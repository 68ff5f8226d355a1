//! Input masks for formatted text fields.
//!
//! Mask characters:
//!
//! | Char | Accepts |
//! |------|---------|
//! | `#`  | digit |
//! | `U`  | letter (shown upper-case) |
//! | `L`  | letter (shown lower-case) |
//! | `?`  | letter |
//! | `A`  | letter or digit |
//! | `H`  | hex digit |
//! | `*`  | anything |
//! | `'`  | next char is a literal |
//!
//! Any other char is a literal that the field displays but the user never
//! types.

/// One position in a parsed mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit,
    Upper,
    Lower,
    Letter,
    Alphanumeric,
    Hex,
    Any,
    Literal(char),
}

impl Slot {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Upper | Self::Lower | Self::Letter => c.is_alphabetic(),
            Self::Alphanumeric => c.is_alphanumeric(),
            Self::Hex => c.is_ascii_hexdigit(),
            Self::Any => true,
            Self::Literal(l) => c == l,
        }
    }

    fn render(self, c: char) -> char {
        match self {
            Self::Upper => c.to_uppercase().next().unwrap_or(c),
            Self::Lower => c.to_lowercase().next().unwrap_or(c),
            _ => c,
        }
    }
}

fn parse(mask: &str) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(mask.len());
    let mut chars = mask.chars();
    while let Some(c) = chars.next() {
        let slot = match c {
            '#' => Slot::Digit,
            'U' => Slot::Upper,
            'L' => Slot::Lower,
            '?' => Slot::Letter,
            'A' => Slot::Alphanumeric,
            'H' => Slot::Hex,
            '*' => Slot::Any,
            '\'' => match chars.next() {
                Some(escaped) => Slot::Literal(escaped),
                None => break,
            },
            other => Slot::Literal(other),
        };
        slots.push(slot);
    }
    slots
}

/// Number of characters a user types to fill the mask.
fn placeholder_count(slots: &[Slot]) -> usize {
    slots.iter().filter(|s| !matches!(s, Slot::Literal(_))).count()
}

/// Render a raw value (no literals) through the mask.
///
/// Returns `None` if the value does not fit. A value that already contains
/// the literals is accepted as well.
///
/// ```
/// use composer::widget::mask;
/// assert_eq!(mask::apply("#####-###", "20540006").as_deref(), Some("20540-006"));
/// assert_eq!(mask::apply("#####-###", "20540-006").as_deref(), Some("20540-006"));
/// assert_eq!(mask::apply("#####-###", "2054000"), None);
/// ```
pub fn apply(mask: &str, value: &str) -> Option<String> {
    let slots = parse(mask);
    apply_raw(&slots, value).or_else(|| apply_formatted(&slots, value))
}

fn apply_raw(slots: &[Slot], value: &str) -> Option<String> {
    if value.chars().count() != placeholder_count(slots) {
        return None;
    }
    let mut out = String::with_capacity(slots.len());
    let mut input = value.chars();
    for slot in slots {
        match *slot {
            Slot::Literal(l) => out.push(l),
            s => {
                let c = input.next().filter(|&c| s.accepts(c))?;
                out.push(s.render(c));
            }
        }
    }
    Some(out)
}

fn apply_formatted(slots: &[Slot], value: &str) -> Option<String> {
    if value.chars().count() != slots.len() {
        return None;
    }
    slots
        .iter()
        .zip(value.chars())
        .map(|(slot, c)| slot.accepts(c).then(|| slot.render(c)))
        .collect()
}
