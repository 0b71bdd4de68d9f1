//! JSX-to-HTML markup translation.
//!
//! The translator is an ordered list of whole-text regex substitutions. None of
//! the rules understand nesting, so the output is a best-effort normalisation of
//! flat, one-expression-per-binding markup. Rule order is significant: later
//! rules see the output of earlier ones.
//!
//! Two mapping passes run ahead of the numbered rules. They turn the UI
//! library's components into plain tags and icon components into text glyphs.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// UI library components and the plain tag and class each one becomes.
pub const UI_COMPONENTS: &[(&str, &str, &str)] = &[
    ("Card", "div", "card"),
    ("CardContent", "div", "card-content"),
    ("CardHeader", "div", "card-header"),
    ("CardTitle", "h3", "card-title"),
    ("Button", "button", "btn"),
    ("Badge", "span", "badge"),
    ("Input", "input", "form-input"),
    ("Separator", "hr", "separator"),
    ("Table", "table", "table"),
    ("TableBody", "tbody", "table-body"),
    ("TableCell", "td", "table-cell"),
    ("TableHead", "th", "table-head"),
    ("TableHeader", "thead", "table-header"),
    ("TableRow", "tr", "table-row"),
    ("Alert", "div", "alert"),
    ("AlertDescription", "div", "alert-description"),
];

/// Icon components and their text replacements.
pub const ICONS: &[(&str, &str)] = &[
    ("Search", "🔍"),
    ("Home", "🏠"),
    ("User", "👤"),
    ("Package", "📦"),
    ("FileText", "📄"),
    ("CreditCard", "💳"),
    ("Settings", "⚙️"),
    ("HelpCircle", "❓"),
    ("UserPlus", "👥"),
    ("LogIn", "🔑"),
    ("Shield", "🛡️"),
    ("Truck", "🚛"),
    ("Building2", "🏢"),
    ("BarChart3", "📊"),
    ("Clock", "⏰"),
    ("Eye", "👁️"),
    ("ArrowLeft", "←"),
    ("ExternalLink", "🔗"),
    ("Info", "ℹ️"),
    ("CheckCircle", "✅"),
    ("AlertCircle", "⚠️"),
    ("Copy", "📋"),
    ("Database", "🗄️"),
    ("Bell", "🔔"),
    ("Calendar", "📅"),
    ("Phone", "📞"),
    ("DollarSign", "💰"),
    ("TrendingUp", "📈"),
    ("AlertTriangle", "⚠️"),
    ("ArrowRight", "→"),
    ("Menu", "☰"),
];

static COMPONENT_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    // <Name attrs>, <Name attrs /> or </Name>
    Regex::new(r"<(/?)([A-Z][A-Za-z0-9]*)([^>]*)>").expect("Invalid component tag regex")
});

static ICON_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Z][A-Za-z0-9]*)[^>]*/>").expect("Invalid icon tag regex")
});

static CLASS_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(className|class)="([^"]*)""#).expect("Invalid class value regex")
});

static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"className=").expect("Invalid className regex"));

static ON_CLICK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"onClick=\{([^}]*)\}").expect("Invalid onClick regex"));

static ON_CHANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"onChange=\{([^}]*)\}").expect("Invalid onChange regex"));

static ON_SUBMIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"onSubmit=\{([^}]*)\}").expect("Invalid onSubmit regex"));

static INTERPOLATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // {name} or {a.b.c} - identifiers and dots only
    Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*)\}")
        .expect("Invalid interpolation regex")
});

static CONDITIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // {cond && ( ... )}
    Regex::new(r"\{([^}]*)\s*&&\s*\(([\s\S]*?)\)\}").expect("Invalid conditional regex")
});

static LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    // {source.map((item) => ( ... ))} or {source.map(item => ( ... ))}
    Regex::new(
        r"\{([^}]*?)\.map\(\s*(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*=>\s*\([\s\S]*?\)\)\}",
    )
    .expect("Invalid list regex")
});

static SELF_CLOSING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z][\w.:-]*)([^>]*?)\s*/>").expect("Invalid self-closing regex")
});

/// Translate an extracted JSX fragment into HTML.
///
/// Applies, in order: UI components, icons, class attribute, event bindings,
/// interpolations, conditionals, lists, self-closing tags.
pub fn translate(fragment: &str) -> String {
    let html = map_ui_components(fragment);
    let html = map_icons(&html);
    let html = rewrite_class_names(&html);
    let html = rewrite_event_bindings(&html);
    let html = rewrite_interpolations(&html);
    let html = rewrite_conditionals(&html);
    let html = rewrite_lists(&html);
    expand_self_closing(&html)
}

/// `<Card className="x">` becomes `<div className="card x">`, closing tags
/// follow. Components missing from [`UI_COMPONENTS`] are left alone.
pub fn map_ui_components(html: &str) -> String {
    COMPONENT_TAG_RE
        .replace_all(html, |caps: &Captures| {
            let Some((_, tag, class)) = UI_COMPONENTS.iter().find(|(name, _, _)| *name == &caps[2])
            else {
                return caps[0].to_string();
            };

            if !caps[1].is_empty() {
                return format!("</{tag}>");
            }

            let attrs = &caps[3];
            if CLASS_VALUE_RE.is_match(attrs) {
                let attrs = CLASS_VALUE_RE.replace(attrs, |c: &Captures| {
                    format!(r#"{}="{class} {}""#, &c[1], &c[2])
                });
                format!("<{tag}{attrs}>")
            } else {
                format!(r#"<{tag} class="{class}"{attrs}>"#)
            }
        })
        .into_owned()
}

/// Self-closing icon components become `<span class="icon">glyph</span>`.
pub fn map_icons(html: &str) -> String {
    ICON_TAG_RE
        .replace_all(html, |caps: &Captures| {
            match ICONS.iter().find(|(name, _)| *name == &caps[1]) {
                Some((_, glyph)) => format!(r#"<span class="icon">{glyph}</span>"#),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Rule 1: `className=` becomes `class=`.
pub fn rewrite_class_names(html: &str) -> String {
    CLASS_NAME_RE.replace_all(html, "class=").into_owned()
}

/// Rule 2: `onClick={f}` becomes `onclick="f()"`; change and submit handlers
/// receive the event object.
pub fn rewrite_event_bindings(html: &str) -> String {
    let html = ON_CLICK_RE.replace_all(html, r#"onclick="${1}()""#);
    let html = ON_CHANGE_RE.replace_all(&html, r#"onchange="${1}(event)""#);
    ON_SUBMIT_RE
        .replace_all(&html, r#"onsubmit="${1}(event)""#)
        .into_owned()
}

/// Rule 3: `{user.name}` becomes a `data-key` placeholder span.
pub fn rewrite_interpolations(html: &str) -> String {
    INTERPOLATION_RE
        .replace_all(html, r#"<span data-key="${1}"></span>"#)
        .into_owned()
}

/// Rule 4: `{cond && ( ... )}` becomes a conditional container that keeps its children.
pub fn rewrite_conditionals(html: &str) -> String {
    CONDITIONAL_RE
        .replace_all(html, r#"<div class="conditional" data-condition="${1}">${2}</div>"#)
        .into_owned()
}

/// Rule 5: `{items.map(item => ( ... ))}` becomes an empty list container.
pub fn rewrite_lists(html: &str) -> String {
    LIST_RE
        .replace_all(html, r#"<div class="list-container" data-source="${1}"></div>"#)
        .into_owned()
}

/// Rule 6: `<tag attrs />` becomes `<tag attrs></tag>`.
pub fn expand_self_closing(html: &str) -> String {
    SELF_CLOSING_RE
        .replace_all(html, |caps: &Captures| {
            format!("<{}{}></{}>", &caps[1], &caps[2], &caps[1])
        })
        .into_owned()
}
