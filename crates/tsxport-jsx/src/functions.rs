//! Local handler functions captured as standalone stubs.

use regex::Regex;
use std::sync::LazyLock;

/// Names defined by the runtime script itself; source functions with these
/// names are not re-emitted.
pub const RUNTIME_FUNCTIONS: &[&str] = &[
    "navigateTo",
    "handleLogin",
    "handleLogout",
    "initComponent",
    "updateUI",
    "setState",
];

static ARROW_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // const name = (params) => {   |   const name = async param => {
    Regex::new(
        r"const\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?(\([^)]*\)|[A-Za-z_$][\w$]*)\s*=>\s*\{",
    )
    .expect("Invalid arrow function regex")
});

static FUNCTION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // function name(params) {   - lowercase names only, components are PascalCase
    Regex::new(r"\bfunction\s+([a-z_$][\w$]*)\s*(\([^)]*\))\s*(?::\s*[^{;]+)?\{")
        .expect("Invalid function declaration regex")
});

static FIRST_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?\s*([A-Za-z_$][\w$]*)").expect("Invalid parameter regex")
});

/// A handler function re-emitted as `function name(event) { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionStub {
    /// Function name
    pub name: String,

    /// Name of the first declared parameter, if any
    pub param: Option<String>,

    /// Body text between the outer braces
    pub body: String,
}

/// Find local function declarations and capture their bodies.
///
/// Bodies are delimited by a brace-depth scan, so nested blocks are kept.
/// Declarations with unbalanced braces, PascalCase names (component
/// definitions) and names owned by the runtime are skipped. The first
/// declaration of a name wins.
pub fn extract_function_stubs(source: &str) -> Vec<FunctionStub> {
    let mut headers: Vec<(usize, usize, String, String)> = Vec::new();

    for caps in ARROW_HEADER_RE.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        headers.push((
            whole.start(),
            whole.end() - 1,
            caps[1].to_string(),
            caps[2].to_string(),
        ));
    }

    for caps in FUNCTION_HEADER_RE.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        headers.push((
            whole.start(),
            whole.end() - 1,
            caps[1].to_string(),
            caps[2].to_string(),
        ));
    }

    headers.sort_by_key(|(start, ..)| *start);

    let mut stubs: Vec<FunctionStub> = Vec::new();

    for (_, open, name, params) in headers {
        if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            continue;
        }

        if RUNTIME_FUNCTIONS.contains(&name.as_str()) {
            tracing::debug!("Skipping {} - name is reserved by the runtime", name);
            continue;
        }

        if stubs.iter().any(|s| s.name == name) {
            tracing::debug!("Skipping duplicate declaration of {}", name);
            continue;
        }

        let Some(close) = find_block_end(source, open) else {
            tracing::debug!("Skipping {} - unbalanced braces in body", name);
            continue;
        };

        let param = FIRST_PARAM_RE
            .captures(params.trim())
            .map(|c| c[1].to_string());

        stubs.push(FunctionStub {
            name,
            param,
            body: source[open + 1..close].trim().to_string(),
        });
    }

    stubs
}

/// Given the byte index of an opening `{`, return the index of its matching `}`.
///
/// String literals, template literals and comments are skipped while counting.
pub fn find_block_end(text: &str, open: usize) -> Option<usize> {
    if text.as_bytes().get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut chars = text[open..].char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            '"' | '\'' | '`' => {
                // Skip to the closing quote, honouring escapes. Only template
                // literals span lines; a stray quote in JSX text ends at the newline.
                while let Some((_, inner)) = chars.next() {
                    if inner == '\\' {
                        chars.next();
                    } else if inner == c || (inner == '\n' && c != '`') {
                        break;
                    }
                }
            }
            '/' => match chars.peek() {
                Some((_, '/')) => {
                    for (_, inner) in chars.by_ref() {
                        if inner == '\n' {
                            break;
                        }
                    }
                }
                Some((_, '*')) => {
                    chars.next();
                    let mut prev = '\0';
                    for (_, inner) in chars.by_ref() {
                        if prev == '*' && inner == '/' {
                            break;
                        }
                        prev = inner;
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn captures_flat_arrow_function() {
        let stubs = extract_function_stubs("const handleClick = () => { setOpen(true); };");

        assert_eq!(
            stubs,
            vec![FunctionStub {
                name: "handleClick".to_string(),
                param: None,
                body: "setOpen(true);".to_string(),
            }]
        );
    }

    #[test]
    fn captures_nested_blocks() {
        let source = r#"
const handleSubmit = async (e) => {
  if (!email) {
    setError('이메일을 입력하세요');
    return;
  }
  navigateTo('dashboard', { userType: 'general' });
};
"#;

        let stubs = extract_function_stubs(source);

        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].name, "handleSubmit");
        assert_eq!(stubs[0].param.as_deref(), Some("e"));
        assert!(stubs[0].body.starts_with("if (!email) {"));
        assert!(stubs[0]
            .body
            .ends_with("navigateTo('dashboard', { userType: 'general' });"));
    }

    #[test]
    fn braces_in_strings_and_comments_are_ignored() {
        let source = "const log = (msg) => {\n  // closing } here\n  console.log(`}${msg}`, '}');\n};";

        let stubs = extract_function_stubs(source);

        assert_eq!(stubs.len(), 1);
        assert!(stubs[0].body.ends_with("console.log(`}${msg}`, '}');"));
    }

    #[test]
    fn apostrophe_in_jsx_text_does_not_swallow_block() {
        let source = "const renderTip = () => {\n  return <p>Don't panic</p>;\n};\nconst save = () => { api('x'); };\nconst load = () => { fetch('y'); };";

        let stubs = extract_function_stubs(source);
        let names: Vec<&str> = stubs.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["renderTip", "save", "load"]);
        assert_eq!(stubs[0].body, "return <p>Don't panic</p>;");
    }

    #[test]
    fn template_literal_may_span_lines() {
        let source = "{ const t = `a\n}\nb`; }";

        assert_eq!(find_block_end(source, 0), Some(source.len() - 1));
    }

    #[test]
    fn finds_inner_handlers_but_not_components() {
        let source = r#"
export default function OrderPage() {
  const [step, setStep] = useState(1);
  const next = () => { setStep(step + 1); };
  function reset() { setStep(1); }
  return (<div />);
}
const Badge = ({ label }) => { return label; };
"#;

        let names: Vec<String> = extract_function_stubs(source)
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["next".to_string(), "reset".to_string()]);
    }

    #[test]
    fn skips_runtime_names_and_unbalanced_bodies() {
        let source = "const navigateTo = (p) => { go(p); };\nconst broken = () => { if (x) {";

        assert!(extract_function_stubs(source).is_empty());
    }

    #[test]
    fn bare_parameter_is_recorded() {
        let stubs = extract_function_stubs("const onPick = item => { setItem(item); };");

        assert_eq!(stubs[0].param.as_deref(), Some("item"));
    }

    #[test]
    fn block_end_requires_opening_brace() {
        assert_eq!(find_block_end("abc", 0), None);
        assert_eq!(find_block_end("{a{b}c}", 0), Some(6));
        assert_eq!(find_block_end("{a{b}c}", 2), Some(4));
    }
}
