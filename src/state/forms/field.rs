//! Form field value objects

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("valid regex"));

/// Validation rule attached to a field, with the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace
    Required(&'static str),
    /// Non-empty value must look like `local@domain`
    Email(&'static str),
    /// Non-empty value must be a `YYYY-MM-DD` date
    Date(&'static str),
}

impl Rule {
    /// Error message if `value` breaks this rule
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let trimmed = value.trim();
        match *self {
            Rule::Required(msg) => trimmed.is_empty().then_some(msg),
            Rule::Email(msg) => {
                (!trimmed.is_empty() && !EMAIL_PATTERN.is_match(trimmed)).then_some(msg)
            }
            Rule::Date(msg) => (!trimmed.is_empty()
                && NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err())
            .then_some(msg),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed set of options, or nothing picked yet
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub rules: Vec<Rule>,
    /// Message from the last failed validation
    pub error: Option<&'static str>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_multiline,
            rules: Vec::new(),
            error: None,
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
            rules: Vec::new(),
            error: None,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the value as text; choice fields give the selected option or ""
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i).copied())
                .unwrap_or(""),
        }
    }

    /// Trimmed value, or `None` when blank
    pub fn optional_text(&self) -> Option<String> {
        let value = self.as_text().trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
            self.revalidate();
        }
    }

    /// Remove the last character, or drop the selection of a choice field
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { selected, .. } => *selected = None,
        }
        self.revalidate();
    }

    /// Select the next option, starting from the first
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = Some(selected.map_or(0, |i| (i + 1) % options.len()));
                self.revalidate();
            }
        }
    }

    /// Select the previous option, starting from the last
    pub fn prev_choice(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if !options.is_empty() {
                let last = options.len() - 1;
                *selected = Some(selected.map_or(last, |i| if i == 0 { last } else { i - 1 }));
                self.revalidate();
            }
        }
    }

    /// Clear the field value and any error
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
        self.error = None;
    }

    /// Run every rule, keeping the first failure. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        let value = self.as_text();
        self.error = self.rules.iter().find_map(|rule| rule.check(value));
        self.error.is_none()
    }

    /// Re-check a field that is already showing an error
    fn revalidate(&mut self) {
        if self.error.is_some() {
            self.validate();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let mark = if Some(i) == *selected { "(•)" } else { "( )" };
                    format!("{mark} {option}")
                })
                .collect::<Vec<_>>()
                .join("   "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rules {
        use super::*;

        #[test]
        fn test_required_rejects_blank() {
            let rule = Rule::Required("Name is required");
            assert_eq!(rule.check(""), Some("Name is required"));
            assert_eq!(rule.check("   "), Some("Name is required"));
            assert_eq!(rule.check("Amina"), None);
        }

        #[test]
        fn test_email_pattern() {
            let rule = Rule::Email("Invalid email address");
            assert_eq!(rule.check("a@b"), None);
            assert_eq!(rule.check("amina@example.com"), None);
            assert_eq!(rule.check("amina"), Some("Invalid email address"));
            assert_eq!(rule.check("a @b"), Some("Invalid email address"));
        }

        #[test]
        fn test_email_skips_empty() {
            assert_eq!(Rule::Email("bad").check(""), None);
        }

        #[test]
        fn test_date_format() {
            let rule = Rule::Date("Invalid date");
            assert_eq!(rule.check("2024-03-01"), None);
            assert_eq!(rule.check(""), None);
            assert_eq!(rule.check("2024-02-30"), Some("Invalid date"));
            assert_eq!(rule.check("01/03/2024"), Some("Invalid date"));
        }
    }

    mod text_field {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text("name", "Name", false);
            field.push_char('A');
            field.push_char('b');
            field.pop_char();
            assert_eq!(field.as_text(), "A");
        }

        #[test]
        fn test_validate_keeps_first_failure() {
            let mut field = FormField::text("email", "Email", false)
                .with_rule(Rule::Required("Email is required"))
                .with_rule(Rule::Email("Invalid email address"));
            assert!(!field.validate());
            assert_eq!(field.error, Some("Email is required"));
        }

        #[test]
        fn test_typing_clears_error() {
            let mut field =
                FormField::text("name", "Name", false).with_rule(Rule::Required("Name is required"));
            field.validate();
            field.push_char('S');
            assert_eq!(field.error, None);
        }

        #[test]
        fn test_typing_without_error_does_not_validate() {
            let mut field = FormField::text("email", "Email", false)
                .with_rule(Rule::Email("Invalid email address"));
            field.push_char('x');
            assert_eq!(field.error, None);
        }

        #[test]
        fn test_optional_text() {
            let mut field = FormField::text("message", "Message", true);
            assert_eq!(field.optional_text(), None);
            field.push_char(' ');
            assert_eq!(field.optional_text(), None);
            field.push_char('h');
            assert_eq!(field.optional_text(), Some("h".to_string()));
        }

        #[test]
        fn test_clear_resets_error() {
            let mut field =
                FormField::text("name", "Name", false).with_rule(Rule::Required("Name is required"));
            field.validate();
            field.clear();
            assert_eq!(field.error, None);
            assert_eq!(field.as_text(), "");
        }
    }

    mod choice_field {
        use super::*;

        const OPTIONS: &[&str] = &["virtual", "in-person"];

        #[test]
        fn test_starts_unselected() {
            let field = FormField::choice("type", "Type", OPTIONS);
            assert!(field.is_choice());
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_next_choice_cycles() {
            let mut field = FormField::choice("type", "Type", OPTIONS);
            field.next_choice();
            assert_eq!(field.as_text(), "virtual");
            field.next_choice();
            assert_eq!(field.as_text(), "in-person");
            field.next_choice();
            assert_eq!(field.as_text(), "virtual");
        }

        #[test]
        fn test_prev_choice_starts_at_last() {
            let mut field = FormField::choice("type", "Type", OPTIONS);
            field.prev_choice();
            assert_eq!(field.as_text(), "in-person");
        }

        #[test]
        fn test_typing_is_ignored() {
            let mut field = FormField::choice("type", "Type", OPTIONS);
            field.push_char('x');
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_backspace_drops_selection() {
            let mut field = FormField::choice("slot", "Slot", OPTIONS);
            field.next_choice();
            field.pop_char();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_required_choice() {
            let mut field = FormField::choice("type", "Type", OPTIONS)
                .with_rule(Rule::Required("Please select consultation type"));
            assert!(!field.validate());
            field.next_choice();
            assert!(field.error.is_none());
        }

        #[test]
        fn test_display_marks_selection() {
            let mut field = FormField::choice("type", "Type", OPTIONS);
            field.next_choice();
            assert_eq!(field.display_value(), "(•) virtual   ( ) in-person");
        }
    }
}
