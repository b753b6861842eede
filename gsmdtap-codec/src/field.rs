//! Decoded fields
//!
//! The decoder produces a flat, append-only list of [`Field`]s. Nesting is
//! expressed with a `depth` so a renderer can rebuild the protocol tree
//! without the decoder owning any tree structure.

use std::fmt;
use std::ops::Range;

/// Typed value attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain number
    Uint(u64),
    /// Enumerated code and its resolved name
    Enum {
        /// Raw code
        value: u32,
        /// Name from the value table
        name: &'static str,
    },
    /// Text such as digit strings or network names
    Text(String),
    /// Raw octets
    Bytes(Vec<u8>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::Enum { value, name } => write!(f, "{name} ({value})"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bytes(b) => f.write_str(&hex::encode(b)),
        }
    }
}

/// What a field represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// DTAP header (discriminator, TI, message type)
    Header,
    /// Information element heading; its details follow one level deeper
    Element,
    /// Sub-field of an element
    Detail,
    /// Octets left over after a complete parse
    Extraneous,
    /// Encoding the decoder recognises but does not support
    Unsupported,
    /// Range handed to, or reported on behalf of, a sub-decoder
    Embedded,
    /// Marker for the fault that stopped decoding
    Fault,
}

/// One decoded field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Frame byte range covered by the field
    pub range: Range<usize>,
    /// Rendered label
    pub label: String,
    /// Optional typed value
    pub value: Option<FieldValue>,
    /// Field kind
    pub kind: FieldKind,
    /// Tree depth, 0 for top level
    pub depth: u8,
}

impl Field {
    /// Creates a field without a typed value.
    pub fn new(range: Range<usize>, label: impl Into<String>, kind: FieldKind, depth: u8) -> Self {
        Self {
            range,
            label: label.into(),
            value: None,
            kind,
            depth,
        }
    }

    /// Attaches a typed value.
    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Number of octets covered.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// True for zero-length fields (presence-only markers).
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str("    ")?;
        }
        f.write_str(&self.label)
    }
}

/// Append-only field list with a current nesting depth.
#[derive(Debug, Default, Clone)]
pub struct FieldList {
    fields: Vec<Field>,
    depth: u8,
}

impl FieldList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field at the current depth and returns its index.
    pub fn push(&mut self, range: Range<usize>, label: impl Into<String>, kind: FieldKind) -> usize {
        self.fields.push(Field::new(range, label, kind, self.depth));
        self.fields.len() - 1
    }

    /// Appends a field with a typed value at the current depth.
    pub fn push_value(
        &mut self,
        range: Range<usize>,
        label: impl Into<String>,
        kind: FieldKind,
        value: FieldValue,
    ) -> usize {
        self.fields
            .push(Field::new(range, label, kind, self.depth).with_value(value));
        self.fields.len() - 1
    }

    /// Opens a subtree: subsequent fields are one level deeper.
    pub fn enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// Closes the innermost subtree.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current depth.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Mutable access to an already pushed field.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Fields pushed so far.
    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been pushed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the list.
    pub fn into_vec(self) -> Vec<Field> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_tracking() {
        let mut list = FieldList::new();
        list.push(0..1, "Header", FieldKind::Header);
        list.enter();
        list.push(1..2, "Detail", FieldKind::Detail);
        list.leave();
        list.leave();
        list.push(2..3, "Next", FieldKind::Element);

        let fields = list.into_vec();
        assert_eq!(fields[0].depth, 0);
        assert_eq!(fields[1].depth, 1);
        assert_eq!(fields[2].depth, 0);
    }

    #[test]
    fn test_field_display_indents() {
        let field = Field::new(3..4, "Cause value", FieldKind::Detail, 2);
        assert_eq!(field.to_string(), "        Cause value");
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(FieldValue::Uint(7).to_string(), "7");
        assert_eq!(
            FieldValue::Enum {
                value: 16,
                name: "Normal call clearing"
            }
            .to_string(),
            "Normal call clearing (16)"
        );
        assert_eq!(FieldValue::Bytes(vec![0xab, 0x01]).to_string(), "ab01");
    }

    #[test]
    fn test_get_mut_rewrites_label() {
        let mut list = FieldList::new();
        let idx = list.push(0..2, "Cause", FieldKind::Element);
        list.get_mut(idx).unwrap().label.push_str(" - (Normal call clearing)");
        assert_eq!(list.as_slice()[0].label, "Cause - (Normal call clearing)");
    }
}
