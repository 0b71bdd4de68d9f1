//! Stylesheet resolution for output documents.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Options controlling the per-document stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct StyleOptions {
    /// Append rules for recognised utility classes used in the body
    pub utilities: bool,

    /// Minify the final CSS with lightningcss
    pub minify: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            utilities: true,
            minify: false,
        }
    }
}

/// Stylesheet utilities.
pub struct StyleResolver;

impl StyleResolver {
    /// The fixed stylesheet shared by every document.
    pub fn base_css() -> &'static str {
        BASE_CSS
    }

    /// Rules for the utility classes referenced by `class="..."` attributes in
    /// `body`, in first-seen order. Unknown classes are ignored.
    pub fn utility_css(body: &str) -> String {
        static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#"class=(?:"([^"]*)"|'([^']*)')"#)
                .expect("Invalid class attribute regex")
        });

        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for caps in CLASS_ATTR_RE.captures_iter(body) {
            let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
                continue;
            };

            for class in value.as_str().split_whitespace() {
                if !seen.insert(class) {
                    continue;
                }
                if let Some((_, declaration)) =
                    UTILITY_CLASSES.iter().find(|(name, _)| *name == class)
                {
                    rules.push(format!(".{class} {{ {declaration} }}"));
                }
            }
        }

        rules.join("\n")
    }

    /// Build the stylesheet for one document body.
    pub fn resolve(body: &str, options: StyleOptions) -> String {
        let mut css = BASE_CSS.to_string();

        if options.utilities {
            let utilities = Self::utility_css(body);
            if !utilities.is_empty() {
                tracing::debug!("Expanded {} utility classes", utilities.lines().count());
                css.push_str("\n/* Utility classes */\n");
                css.push_str(&utilities);
                css.push('\n');
            }
        }

        if options.minify {
            match Self::minify_css(&css) {
                Ok(minified) => return minified,
                Err(e) => tracing::warn!("Keeping unminified CSS: {}", e),
            }
        }

        css
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

/// Tailwind-style utility classes with a direct CSS equivalent.
const UTILITY_CLASSES: &[(&str, &str)] = &[
    ("flex", "display: flex;"),
    ("flex-col", "flex-direction: column;"),
    ("items-center", "align-items: center;"),
    ("justify-center", "justify-content: center;"),
    ("justify-between", "justify-content: space-between;"),
    ("p-4", "padding: 16px;"),
    ("p-6", "padding: 24px;"),
    ("mb-4", "margin-bottom: 16px;"),
    ("mb-6", "margin-bottom: 24px;"),
    ("text-center", "text-align: center;"),
    ("font-bold", "font-weight: bold;"),
    ("text-lg", "font-size: 18px;"),
    ("text-xl", "font-size: 20px;"),
    ("text-2xl", "font-size: 24px;"),
    ("bg-white", "background-color: white;"),
    ("bg-blue-500", "background-color: rgb(59 130 246);"),
    ("text-white", "color: white;"),
    ("text-blue-600", "color: rgb(37 99 235);"),
    ("rounded-lg", "border-radius: 8px;"),
    ("shadow-lg", "box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);"),
    ("min-h-screen", "min-height: 100vh;"),
];

const BASE_CSS: &str = r#"body {
  margin: 0;
  padding: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 20px;
}

.card {
  background: white;
  border-radius: 8px;
  padding: 20px;
  box-shadow: 0 2px 4px rgba(0,0,0,0.1);
  margin-bottom: 20px;
}

.button {
  padding: 10px 20px;
  border-radius: 6px;
  border: none;
  cursor: pointer;
  font-weight: 500;
  transition: all 0.3s;
}

.button-primary {
  background: rgb(59 130 246);
  color: white;
}

.button-primary:hover {
  background: rgb(37 99 235);
}

.form-group {
  margin-bottom: 20px;
}

.form-label {
  display: block;
  margin-bottom: 8px;
  font-weight: 500;
}

.form-input {
  width: 100%;
  padding: 10px;
  border: 1px solid #ddd;
  border-radius: 6px;
  font-size: 16px;
}

.grid {
  display: grid;
  gap: 20px;
}

.grid-cols-2 {
  grid-template-columns: repeat(2, 1fr);
}

@media (max-width: 768px) {
  .grid-cols-2 {
    grid-template-columns: 1fr;
  }
}
"#;
