//! Form submission helpers.

/// Label shown on a generic submit button while its form is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// Label shown on add-to-cart buttons while the request is in flight.
pub const ADDING_LABEL: &str = "Adding...";

/// Label shown on add-to-cart buttons once the add went through.
pub const ADDED_LABEL: &str = "Added!";

pub const REMOVING_LABEL: &str = "Removing...";

/// How long a button holds its success label before it resets.
pub const SUCCESS_HOLD_MS: u64 = 1500;

/// Blocks submission until every required field has a value.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    required: Vec<String>,
    validated: bool,
}

impl FormValidator {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            validated: false,
        }
    }

    /// Check submitted fields. On failure returns the names of the required
    /// fields that are missing or blank. Either way the form is marked as
    /// validated so the markup shows feedback.
    pub fn validate<'a, I>(&mut self, fields: I) -> Result<(), Vec<String>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.validated = true;

        let filled: Vec<&str> = fields
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| !filled.contains(&name.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    pub fn was_validated(&self) -> bool {
        self.validated
    }

    /// Class list of the form element.
    pub fn class(&self) -> &'static str {
        if self.validated {
            "needs-validation was-validated"
        } else {
            "needs-validation"
        }
    }
}

/// Disabled-with-spinner state of a submit button.
///
/// A request that went through may hold a success label for a while
/// before `finish` restores the original one. The button stays disabled
/// meanwhile.
#[derive(Debug, Clone, Default)]
pub struct ButtonLoading {
    original: Option<String>,
    succeeded: bool,
}

impl ButtonLoading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state. Returns the label to show, or `None` when
    /// already loading (the click is a duplicate).
    pub fn begin(&mut self, current_label: &str, loading_label: &str) -> Option<String> {
        if self.original.is_some() {
            return None;
        }
        self.original = Some(current_label.to_string());
        Some(loading_label.to_string())
    }

    /// Switch from loading to success. Returns the label to show, or
    /// `None` when the button was not loading.
    pub fn succeed(&mut self, success_label: &str) -> Option<String> {
        if self.original.is_none() || self.succeeded {
            return None;
        }
        self.succeeded = true;
        Some(success_label.to_string())
    }

    /// Leave the loading or success state, returning the label to restore.
    pub fn finish(&mut self) -> Option<String> {
        self.succeeded = false;
        self.original.take()
    }

    pub fn is_loading(&self) -> bool {
        self.original.is_some()
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_fields() {
        let mut form = FormValidator::new(["email", "address"]);
        assert!(!form.was_validated());

        let result = form.validate([("email", "a@b.c"), ("address", "   ")]);
        assert_eq!(result, Err(vec!["address".to_string()]));
        assert!(form.was_validated());
        assert_eq!(form.class(), "needs-validation was-validated");
    }

    #[test]
    fn test_all_fields_present() {
        let mut form = FormValidator::new(["email"]);
        assert_eq!(form.validate([("email", "a@b.c"), ("note", "")]), Ok(()));
    }

    #[test]
    fn test_absent_field_is_missing() {
        let mut form = FormValidator::new(["email"]);
        assert_eq!(form.validate(Vec::<(&str, &str)>::new()), Err(vec!["email".to_string()]));
    }

    #[test]
    fn test_button_loading_cycle() {
        let mut button = ButtonLoading::new();
        assert_eq!(button.begin("Add to Cart", ADDING_LABEL).as_deref(), Some("Adding..."));
        assert!(button.is_loading());
        assert_eq!(button.begin("Adding...", ADDING_LABEL), None);

        assert_eq!(button.finish().as_deref(), Some("Add to Cart"));
        assert!(!button.is_loading());
        assert_eq!(button.finish(), None);
    }

    #[test]
    fn test_button_success_hold() {
        let mut button = ButtonLoading::new();
        assert_eq!(button.succeed(ADDED_LABEL), None);

        button.begin("Add to Cart", ADDING_LABEL);
        assert_eq!(button.succeed(ADDED_LABEL).as_deref(), Some("Added!"));
        assert!(button.is_success());
        assert!(button.is_loading());
        assert_eq!(button.succeed(ADDED_LABEL), None);
        assert_eq!(button.begin("Added!", ADDING_LABEL), None);

        assert_eq!(button.finish().as_deref(), Some("Add to Cart"));
        assert!(!button.is_success());
        assert!(!button.is_loading());
    }

    #[test]
    fn test_remove_button_blocks_second_click() {
        let mut button = ButtonLoading::new();
        assert_eq!(button.begin("Remove", REMOVING_LABEL).as_deref(), Some("Removing..."));
        assert_eq!(button.begin("Removing...", REMOVING_LABEL), None);
        assert!(button.is_loading());
        assert!(!button.is_success());

        // A failed remove puts the row back as it was.
        assert_eq!(button.finish().as_deref(), Some("Remove"));
        assert_eq!(button.begin("Remove", REMOVING_LABEL).as_deref(), Some("Removing..."));
    }
}
