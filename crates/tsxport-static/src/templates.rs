//! Template engine for rendering output documents.

use minijinja::{context, Environment};

/// Context for rendering a page template.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    /// Inline stylesheet
    pub styles: String,
    /// Translated body HTML
    pub content: String,
    /// Runtime script (JavaScript)
    pub script: String,
    /// External stylesheet hrefs
    pub stylesheets: Vec<String>,
    /// External script srcs, loaded before the runtime
    pub scripts: Vec<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the page template registered.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render a complete document.
    pub fn render_page(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &context.title,
            styles => &context.styles,
            content => &context.content,
            script => &context.script,
            stylesheets => &context.stylesheets,
            scripts => &context.scripts,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  {% for href in stylesheets %}<link rel="stylesheet" href="{{ href }}">
  {% endfor %}<style>
{{ styles | safe }}
  </style>
</head>
<body>
  <div id="root">
{{ content | safe }}
  </div>

  {% for src in scripts %}<script src="{{ src }}"></script>
  {% endfor %}<script>
{{ script | safe }}
  </script>
</body>
</html>
"##;
