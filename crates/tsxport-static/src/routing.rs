//! Output locations derived from component names.

use std::path::{Path, PathBuf};

/// Words that mark a component as a common page.
const COMMON_KEYWORDS: &[&str] = &[
    "login",
    "signup",
    "find",
    "dashboard",
    "mypage",
    "faq",
    "notice",
    "workflow",
    "pagelist",
];

/// Words that mark a component as a shared layout piece.
const SHARED_KEYWORDS: &[&str] = &["navigation", "footer"];

/// Output folder a component is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFolder {
    Admin,
    Partner,
    Order,
    Common,
    Components,
}

impl OutputFolder {
    /// Folder path relative to the output root.
    pub fn as_path(&self) -> &'static str {
        match self {
            OutputFolder::Admin => "pages/admin",
            OutputFolder::Partner => "pages/partner",
            OutputFolder::Order => "pages/order",
            OutputFolder::Common => "pages/common",
            OutputFolder::Components => "components",
        }
    }
}

/// Classify a component by the substrings of its lowercased name.
///
/// The first matching category wins: admin, partner, order/payment, common
/// page keywords, navigation/footer. Everything else is a common page.
pub fn classify_folder(component_name: &str) -> OutputFolder {
    let name = component_name.to_lowercase();

    if name.contains("admin") {
        OutputFolder::Admin
    } else if name.contains("partner") {
        OutputFolder::Partner
    } else if name.contains("order") || name.contains("payment") {
        OutputFolder::Order
    } else if COMMON_KEYWORDS.iter().any(|k| name.contains(k)) {
        OutputFolder::Common
    } else if SHARED_KEYWORDS.iter().any(|k| name.contains(k)) {
        OutputFolder::Components
    } else {
        OutputFolder::Common
    }
}

/// Convert a component name to a hyphenated lowercase file stem.
///
/// `AdminOrderPage` becomes `admin-order`. A name that reduces to nothing
/// becomes `index`.
pub fn to_file_name(component_name: &str) -> String {
    let mut hyphenated = String::with_capacity(component_name.len() + 8);
    for c in component_name.chars() {
        if c.is_ascii_uppercase() {
            hyphenated.push('-');
        }
        hyphenated.push(c);
    }

    let name = hyphenated.to_lowercase();
    let name = name
        .trim_matches('-')
        .replace("page", "")
        .replace("--", "-");
    let name = name.trim_matches('-');

    if name.is_empty() {
        "index".to_string()
    } else {
        name.to_string()
    }
}

/// Full output path for a component under `output_root`.
pub fn output_path(output_root: &Path, component_name: &str) -> PathBuf {
    output_root
        .join(classify_folder(component_name).as_path())
        .join(format!("{}.html", to_file_name(component_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_by_precedence() {
        assert_eq!(classify_folder("AdminBar"), OutputFolder::Admin);
        assert_eq!(classify_folder("AdminOrderPage"), OutputFolder::Admin);
        assert_eq!(classify_folder("PartnerDashboard"), OutputFolder::Partner);
        assert_eq!(classify_folder("PaymentPage"), OutputFolder::Order);
        assert_eq!(classify_folder("FooterLogin"), OutputFolder::Common);
        assert_eq!(classify_folder("Footer"), OutputFolder::Components);
        assert_eq!(classify_folder("Navigation"), OutputFolder::Components);
        assert_eq!(classify_folder("Foo"), OutputFolder::Common);
    }

    #[test]
    fn hyphenates_and_strips_page() {
        assert_eq!(to_file_name("AdminOrderPage"), "admin-order");
        assert_eq!(to_file_name("LoginPage"), "login");
        assert_eq!(to_file_name("MyPageList"), "my-list");
        assert_eq!(to_file_name("FAQ"), "f-a-q");
        assert_eq!(to_file_name("Foo"), "foo");
        assert_eq!(to_file_name("Page"), "index");
    }

    #[test]
    fn builds_full_output_path() {
        let root = Path::new("html");

        assert_eq!(
            output_path(root, "AdminBar"),
            PathBuf::from("html/pages/admin/admin-bar.html")
        );
        assert_eq!(
            output_path(root, "Foo"),
            PathBuf::from("html/pages/common/foo.html")
        );
        assert_eq!(
            output_path(root, "Navigation"),
            PathBuf::from("html/components/navigation.html")
        );
    }
}
