/// Key under which the explicit light/dark choice is persisted.
pub const THEME_KEY: &str = "darkMode";
/// Marker class toggled on the root element for `dark:` utility variants.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The persisted value is a JSON boolean.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Persisted choice first, then the OS preference, then light.
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: Option<bool>) -> Self {
        stored.unwrap_or_else(|| Self::from_dark(system_prefers_dark.unwrap_or(false)))
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = match self.toggled() {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "fa-solid fa-moon",
            Self::Dark => "fa-solid fa-sun",
        }
    }
}

/// OS preference changes only apply while the user has never chosen.
pub fn follows_system(stored: Option<Theme>) -> bool {
    stored.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolution_order_is_stored_then_system_then_light() {
        assert_eq!(Theme::resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), Some(false)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn stored_values_are_booleans() {
        assert_eq!(Theme::from_stored("true"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(" false "), Some(Theme::Light));
        assert_eq!(Theme::from_stored("dark"), None);
        assert_eq!(Theme::Dark.as_stored(), "true");
    }

    #[test]
    fn system_changes_only_apply_without_explicit_choice() {
        assert!(follows_system(None));
        assert!(!follows_system(Some(Theme::Light)));
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }

    proptest! {
        #[test]
        fn double_toggle_is_identity_on_state_and_stored_value(start in any::<bool>()) {
            let theme = Theme::from_dark(start);
            let twice = theme.toggled().toggled();
            prop_assert_eq!(twice, theme);
            prop_assert_eq!(Theme::from_stored(twice.as_stored()), Some(theme));
        }
    }
}
