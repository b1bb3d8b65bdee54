//! Required-field checks for the contact form.

/// Fields the submit handler inspects.
pub const REQUIRED_FIELD_SELECTOR: &str = "input[required], textarea[required]";

/// Forms carrying this class handle their own submission and are skipped.
pub const OPT_OUT_FORM_CLASS: &str = "greet-form";

/// Class of the inline message inserted after an invalid field.
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

/// Border and text color used to flag invalid fields.
pub const INVALID_COLOR: &str = "#f72585";

/// Outcome for a single required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// The field has non-whitespace content.
    Filled,
    /// The field is empty or whitespace only.
    Missing,
}

impl FieldState {
    /// Classify a raw field value.
    pub fn of(value: &str) -> Self {
        if is_blank(value) {
            FieldState::Missing
        } else {
            FieldState::Filled
        }
    }
}

/// Empty after trimming the characters a browser's `String.prototype.trim` strips.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_trimmed_by_browser).is_empty()
}

/// ECMAScript `WhiteSpace` and `LineTerminator`. Unlike `char::is_whitespace`
/// this excludes U+0085 and includes U+FEFF.
fn is_trimmed_by_browser(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// What a submit does to the `.error-message` node following a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorNodeAction {
    /// Missing field without a message: insert one right after it.
    Insert,
    /// Missing field already followed by a message: leave it.
    Keep,
    /// Filled field still followed by a message: remove it.
    Remove,
    /// Filled field without a message.
    Nothing,
}

/// Decide the error node change for one field on one submit attempt.
pub fn error_node_action(state: FieldState, has_error_sibling: bool) -> ErrorNodeAction {
    match (state, has_error_sibling) {
        (FieldState::Missing, false) => ErrorNodeAction::Insert,
        (FieldState::Missing, true) => ErrorNodeAction::Keep,
        (FieldState::Filled, true) => ErrorNodeAction::Remove,
        (FieldState::Filled, false) => ErrorNodeAction::Nothing,
    }
}

/// Per-field results of one submit attempt, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    states: Vec<FieldState>,
}

impl ValidationReport {
    /// Check every value. Nothing is cached between attempts.
    pub fn check<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            states: values.into_iter().map(FieldState::of).collect(),
        }
    }

    /// Results in the order the values were given.
    pub fn states(&self) -> &[FieldState] {
        &self.states
    }

    /// True when no field is missing, including when there are no fields.
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    /// Index of the field that should receive focus.
    pub fn first_invalid(&self) -> Option<usize> {
        self.states
            .iter()
            .position(|state| *state == FieldState::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(is_blank("\u{feff} \u{a0}"));
        assert!(!is_blank("  hi "));
    }

    #[test]
    fn trims_the_same_set_as_the_browser() {
        assert!(is_blank("\u{2028}\u{2029}\u{3000}\u{b}\u{c}"));
        assert!(is_blank("\u{2003}\u{202f}"));
        // NEL is Unicode whitespace but not trimmed by browsers.
        assert!(!is_blank("\u{85}"));
        assert!(!is_blank("\u{200b}"));
    }

    #[test]
    fn error_node_follows_field_state() {
        assert_eq!(error_node_action(FieldState::Missing, false), ErrorNodeAction::Insert);
        assert_eq!(error_node_action(FieldState::Missing, true), ErrorNodeAction::Keep);
        assert_eq!(error_node_action(FieldState::Filled, true), ErrorNodeAction::Remove);
        assert_eq!(error_node_action(FieldState::Filled, false), ErrorNodeAction::Nothing);
    }

    #[test]
    fn report_points_at_first_missing_field() {
        let report = ValidationReport::check(["Ada", " ", "ada@example.com", ""]);
        assert!(!report.is_valid());
        assert_eq!(report.first_invalid(), Some(1));
        assert_eq!(report.states()[3], FieldState::Missing);
        assert_eq!(report.states()[2], FieldState::Filled);
    }

    #[test]
    fn form_without_required_fields_is_valid() {
        let report = ValidationReport::check(std::iter::empty());
        assert!(report.is_valid());
        assert_eq!(report.first_invalid(), None);
    }
}
