//! Page titles derived from component names.

/// Product name appended to every page title.
pub const TITLE_SUFFIX: &str = "YCS 물류 시스템";

/// Turn an upper-camel-case component name into a page title.
///
/// A space goes in front of every ASCII uppercase letter, the words `Page` and
/// `Component` are dropped, and the product suffix is appended.
pub fn derive_title(component_name: &str) -> String {
    let mut spaced = String::with_capacity(component_name.len() + 8);
    for c in component_name.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let title = spaced
        .trim()
        .replace("Page", "")
        .replace("Component", "");

    format!("{} - {}", title.trim(), TITLE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercase_name_is_only_suffixed() {
        assert_eq!(derive_title("login"), "login - YCS 물류 시스템");
    }

    #[test]
    fn splits_words_and_strips_page() {
        assert_eq!(derive_title("AdminOrderPage"), "Admin Order - YCS 물류 시스템");
    }

    #[test]
    fn strips_component_suffix() {
        assert_eq!(
            derive_title("NavigationComponent"),
            "Navigation - YCS 물류 시스템"
        );
    }

    #[test]
    fn inner_page_word_leaves_double_space() {
        assert_eq!(derive_title("MyPageList"), "My  List - YCS 물류 시스템");
    }

    #[test]
    fn degenerate_name_yields_bare_suffix() {
        assert_eq!(derive_title("Page"), " - YCS 물류 시스템");
        assert_eq!(derive_title(""), " - YCS 물류 시스템");
    }
}
