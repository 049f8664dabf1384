//! Password feedback on the registration and login pages.
//!
//! The hints are cosmetic: they colour a message under the field and
//! show or hide the eye toggle. Nothing here authenticates anyone.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest password accepted.
pub const MIN_LENGTH: usize = 5;

pub const MISMATCH_MESSAGE: &str = "As senhas não conferem";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap_or_else(|e| panic!("email pattern: {e}"))
});

/// Feedback level for the typed password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordFeedback {
    /// Nothing typed; message and eye toggle are hidden.
    Empty,
    /// Red: too short.
    Weak,
    /// Yellow: long enough but lacks an upper- or lower-case letter.
    MissingCase,
    /// Green.
    Valid,
}

impl PasswordFeedback {
    pub fn message(self) -> &'static str {
        match self {
            PasswordFeedback::Empty => "",
            PasswordFeedback::Weak => "A senha deve ter no mínimo 5 caracteres",
            PasswordFeedback::MissingCase => "Use maiúscula e minúscula",
            PasswordFeedback::Valid => "Senha válida",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PasswordFeedback::Empty => "msg-senha",
            PasswordFeedback::Weak => "msg-senha msg-vermelha visivel",
            PasswordFeedback::MissingCase => "msg-senha msg-amarela visivel",
            PasswordFeedback::Valid => "msg-senha msg-verde visivel",
        }
    }
}

/// Grade a password as it is typed.
///
/// The length is counted in chars, not UTF-16 code units, so a character
/// outside the Basic Multilingual Plane counts once toward the minimum.
pub fn password_feedback(password: &str) -> PasswordFeedback {
    if password.is_empty() {
        return PasswordFeedback::Empty;
    }
    if password.chars().count() < MIN_LENGTH {
        return PasswordFeedback::Weak;
    }
    let upper = password.chars().any(|c| c.is_ascii_uppercase());
    let lower = password.chars().any(|c| c.is_ascii_lowercase());
    if !(upper && lower) {
        return PasswordFeedback::MissingCase;
    }
    PasswordFeedback::Valid
}

/// Registration rule: at least five characters with both letter cases.
pub fn is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Custom validity message for the confirmation field.
pub fn confirmation_error(password: &str, confirm: &str) -> Option<&'static str> {
    (password != confirm).then_some(MISMATCH_MESSAGE)
}

/// Show/hide state of a password field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    /// Value of the input's `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Hidden => "password",
            Visibility::Shown => "text",
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// A password field with its eye toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordField {
    value: String,
    visibility: Visibility,
}

impl PasswordField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Update the typed value. Clearing the field hides it again.
    pub fn set_value(&mut self, value: String) {
        if value.is_empty() {
            self.visibility = Visibility::Hidden;
        }
        self.value = value;
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggle();
    }

    /// The eye toggle is displayed only while something is typed.
    pub fn toggle_visible(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn feedback(&self) -> PasswordFeedback {
        password_feedback(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_progression() {
        assert_eq!(password_feedback(""), PasswordFeedback::Empty);
        assert_eq!(password_feedback("Ab"), PasswordFeedback::Weak);
        assert_eq!(password_feedback("abcd"), PasswordFeedback::Weak);
        assert_eq!(password_feedback("abcde"), PasswordFeedback::MissingCase);
        assert_eq!(password_feedback("ABCDE"), PasswordFeedback::MissingCase);
        assert_eq!(password_feedback("12345"), PasswordFeedback::MissingCase);
        assert_eq!(password_feedback("Abcde"), PasswordFeedback::Valid);
    }

    #[test]
    fn test_feedback_messages_and_colours() {
        assert_eq!(PasswordFeedback::Empty.message(), "");
        assert_eq!(PasswordFeedback::Empty.css_class(), "msg-senha");
        assert!(PasswordFeedback::Weak.css_class().contains("msg-vermelha"));
        assert!(PasswordFeedback::MissingCase.css_class().contains("msg-amarela"));
        assert!(PasswordFeedback::Valid.css_class().contains("msg-verde"));
        assert_eq!(PasswordFeedback::Valid.message(), "Senha válida");
    }

    #[test]
    fn test_length_counts_chars() {
        // Four chars, eight UTF-16 units
        assert_eq!(password_feedback("😀😀😀😀"), PasswordFeedback::Weak);
        assert_eq!(password_feedback("😀😀😀aB"), PasswordFeedback::Valid);
    }

    #[test]
    fn test_feedback_accented_letters_are_not_cases() {
        assert_eq!(password_feedback("Éééééé"), PasswordFeedback::MissingCase);
        assert!(is_strong("Éééééé"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana.silva@salao.com.br"));
        assert!(is_valid_email("a_b-c@x.io"));
        assert!(!is_valid_email("ana@salao"));
        assert!(!is_valid_email("ana salao@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(confirmation_error("Abcde", "Abcde"), None);
        assert_eq!(confirmation_error("Abcde", "abcde"), Some(MISMATCH_MESSAGE));
    }

    #[test]
    fn test_field_toggle_and_reset() {
        let mut field = PasswordField::default();
        assert!(!field.toggle_visible());

        field.set_value("Segredo1".to_string());
        assert!(field.toggle_visible());
        field.toggle_visibility();
        assert_eq!(field.visibility().input_type(), "text");

        field.set_value(String::new());
        assert_eq!(field.visibility(), Visibility::Hidden);
        assert_eq!(field.feedback(), PasswordFeedback::Empty);
    }
}
