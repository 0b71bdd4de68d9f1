//! `useState` initial values.

use regex::Regex;
use std::sync::LazyLock;

static USE_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // const [name, setName] = useState(init);  (optionally useState<T>(init))
    Regex::new(r"const\s*\[(\w+),\s*(set\w+)\]\s*=\s*useState(?:<.*?>)?\((.*?)\);")
        .expect("Invalid useState regex")
});

/// A single state variable and its initial value as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    /// State variable name
    pub name: String,

    /// Setter function name
    pub setter: String,

    /// Initial value, already in literal form
    pub value: String,
}

/// Ordered state variables found in a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<StateEntry>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan source text for `useState` declarations.
    pub fn from_source(source: &str) -> Self {
        let mut table = Self::new();

        for cap in USE_STATE_RE.captures_iter(source) {
            table.insert(StateEntry {
                name: cap[1].to_string(),
                setter: cap[2].to_string(),
                value: classify_initializer(&cap[3]),
            });
        }

        table
    }

    /// Insert an entry. A repeated name keeps its position and takes the new value.
    pub fn insert(&mut self, entry: StateEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    /// Look up the initial value of a state variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a single object literal for the runtime script.
    ///
    /// Keys are JSON strings, values are emitted as their literal text.
    /// Non-ASCII text is kept as is.
    pub fn to_literal(&self) -> String {
        let fields = self
            .entries
            .iter()
            .map(|e| format!("{}: {}", serde_json::Value::from(e.name.as_str()), e.value))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{{{fields}}}")
    }
}

/// Turn a raw `useState` argument into literal text.
///
/// Anything that is not empty, a keyword, or an array/object literal is quoted,
/// numbers included.
pub fn classify_initializer(raw: &str) -> String {
    let raw = raw.trim();

    match raw {
        "" => "\"\"".to_string(),
        "null" | "true" | "false" => raw.to_string(),
        _ if raw.starts_with('[') || raw.starts_with('{') => raw.to_string(),
        _ => serde_json::Value::from(raw).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_initializer_is_quoted() {
        let table = StateTable::from_source("const [count, setCount] = useState(0);");

        assert_eq!(table.get("count"), Some("\"0\""));
        assert_eq!(table.to_literal(), r#"{"count": "0"}"#);
    }

    #[test]
    fn array_initializer_passes_through() {
        let table = StateTable::from_source("const [items, setItems] = useState([]);");

        assert_eq!(table.get("items"), Some("[]"));
    }

    #[test]
    fn classifies_each_kind() {
        assert_eq!(classify_initializer(""), "\"\"");
        assert_eq!(classify_initializer("null"), "null");
        assert_eq!(classify_initializer("true"), "true");
        assert_eq!(classify_initializer("false"), "false");
        assert_eq!(classify_initializer("{ page: 1 }"), "{ page: 1 }");
        assert_eq!(classify_initializer("loading"), "\"loading\"");
        assert_eq!(classify_initializer("'ko'"), "\"'ko'\"");
        assert_eq!(classify_initializer(r#""all""#), r#""\"all\"""#);
    }

    #[test]
    fn keeps_declaration_order_and_setters() {
        let source = r#"
export default function SignupPage() {
  const [email, setEmail] = useState('');
  const [agreed, setAgreed] = useState(false);
  const [user, setUser] = useState<User | null>(null);
  const [tags, setTags] = useState<string[]>(['신규']);
"#;

        let table = StateTable::from_source(source);
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["email", "agreed", "user", "tags"]);
        assert_eq!(table.entries()[0].setter, "setEmail");
        assert_eq!(
            table.to_literal(),
            r#"{"email": "''", "agreed": false, "user": null, "tags": ['신규']}"#
        );
    }

    #[test]
    fn empty_table_serializes_to_empty_object() {
        let table = StateTable::from_source("export const Footer = () => null;");

        assert!(table.is_empty());
        assert_eq!(table.to_literal(), "{}");
    }

    #[test]
    fn repeated_name_keeps_first_position() {
        let source = "const [a, setA] = useState(1);\nconst [b, setB] = useState(2);\nconst [a, setA] = useState(3);";

        let table = StateTable::from_source(source);

        assert_eq!(table.len(), 2);
        assert_eq!(table.to_literal(), r#"{"a": "3", "b": "2"}"#);
    }
}
