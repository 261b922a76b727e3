use crate::Value;
use indexmap::IndexMap;

/// How an association field is edited in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditMode {
    /// A detached widget (select box, identifier input)
    Standard,

    /// The related admin's form is embedded inline
    Inline,

    /// A plain textual reference to the related object
    List,
}

impl EditMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inline => "inline",
            Self::List => "list",
        }
    }
}

/// Context-specific rendering and behavior options for one field.
///
/// The well-known options are typed; `extra` carries anything else, and the
/// rendering layer may augment it with transient view state after the
/// description is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    /// Logical option code; defaults to the field name during normalization
    pub code: Option<String>,

    /// Display label; defaults to the field name during normalization
    pub label: Option<String>,

    /// Explicit template override; wins over every table lookup
    pub template: Option<String>,

    /// Association edit mode; the form builder defaults this to `Standard`
    pub edit: Option<EditMode>,

    /// Minimum related-record count for inline collections
    pub min: Option<usize>,

    /// Current filter value
    pub filter_value: Option<Value>,

    /// Options forwarded to the filter implementation
    pub filter_options: Option<IndexMap<String, Value>>,

    /// Options forwarded to the filter's inner field widget
    pub filter_field_options: Option<IndexMap<String, Value>>,

    /// Named filter kind override; resolved through the filter registry
    pub filter_field_widget: Option<String>,

    /// Named widget kind override; resolved through the widget registry
    pub form_field_widget: Option<String>,

    /// Everything else, including transient view state
    pub extra: IndexMap<String, Value>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective edit mode; `Standard` when unset.
    pub fn edit_mode(&self) -> EditMode {
        self.edit.unwrap_or(EditMode::Standard)
    }
}
