//! Modal dialog state for the UI.

use crate::logic::StagedFields;
use crate::state::types::{FieldName, RecordId};

/// Working copy of the edit form shown in [`Modal::EditFlight`].
///
/// Holds the raw text of every field so partially typed values (such as a
/// half-entered date) survive between key presses. The edit session keeps
/// the last valid staged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// Record being edited.
    pub id: RecordId,
    /// Raw field text, indexed like [`FieldName::ALL`].
    pub inputs: Vec<String>,
    /// Index of the highlighted field.
    pub selected: usize,
    /// Last validation or parse error, shown under the form.
    pub error: Option<String>,
}

impl EditForm {
    /// What: Seed the form from the session's staged fields.
    ///
    /// Inputs:
    /// - `id`: Record under edit
    /// - `staged`: Staged values to display
    ///
    /// Output:
    /// - Form with the first field highlighted and no error.
    #[must_use]
    pub fn from_staged(id: RecordId, staged: &StagedFields) -> Self {
        Self {
            id,
            inputs: FieldName::ALL.iter().map(|f| staged.value(*f)).collect(),
            selected: 0,
            error: None,
        }
    }

    /// Field under the cursor.
    #[must_use]
    pub fn selected_field(&self) -> FieldName {
        FieldName::ALL[self.selected.min(FieldName::ALL.len() - 1)]
    }

    /// Raw text of `field`.
    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        self.inputs
            .get(field_index(field))
            .map_or("", String::as_str)
    }

    /// Mutable raw text of the highlighted field.
    pub fn selected_value_mut(&mut self) -> Option<&mut String> {
        let idx = field_index(self.selected_field());
        self.inputs.get_mut(idx)
    }

    /// Move the cursor down, wrapping.
    pub const fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FieldName::ALL.len();
    }

    /// Move the cursor up, wrapping.
    pub const fn select_prev(&mut self) {
        self.selected = (self.selected + FieldName::ALL.len() - 1) % FieldName::ALL.len();
    }
}

/// Position of `field` in [`FieldName::ALL`].
#[must_use]
pub fn field_index(field: FieldName) -> usize {
    FieldName::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

/// Whether `field` is edited by cycling through known values instead of typing.
#[must_use]
pub const fn is_choice_field(field: FieldName) -> bool {
    matches!(
        field,
        FieldName::Origin | FieldName::Destination | FieldName::Airline | FieldName::Status
    )
}

/// Active modal dialog, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No dialog.
    #[default]
    None,
    /// Informational alert with a non-interactive message.
    Alert {
        /// Text to display.
        message: String,
    },
    /// Key binding overview.
    Help,
    /// Edit form for one flight.
    EditFlight(EditForm),
}
