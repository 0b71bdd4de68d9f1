//! Runtime script generator.
//!
//! Every output document carries the same small runtime: a state store, a
//! props store fed by the hosting frame, cross-frame messaging helpers and a
//! DOM refresh that fills `data-key` placeholders. Component-specific code
//! (setter shims and handler stubs) is appended after it.

use crate::functions::FunctionStub;
use crate::state::StateTable;

/// Generate the complete runtime script for one component.
pub fn generate_runtime_script(state: &StateTable, stubs: &[FunctionStub]) -> String {
    let state_literal = state.to_literal();
    let setters = generate_setter_shims(state, stubs);
    let handlers = generate_function_stubs(stubs);

    format!(
        r#"// Component state
let state = {state_literal};
let props = {{}};

// Application state pushed by the hosting frame
window.addEventListener('message', (event) => {{
  if (event.data && event.data.type === 'APP_STATE') {{
    props.user = event.data.user;
    props.orderId = event.data.orderId;
    props.userType = event.data.userType;
    initComponent();
  }}
}});

// Page navigation
function navigateTo(page, options = {{}}) {{
  if (window.parent !== window) {{
    window.parent.postMessage({{
      type: 'NAVIGATE',
      page: page,
      options: options
    }}, '*');
    return;
  }}

  // Opened directly, outside the hosting frame
  const url = page.includes('.html') ? page : `${{page}}.html`;
  const params = new URLSearchParams();
  if (options.orderId) params.set('orderId', options.orderId);
  if (options.userType) params.set('userType', options.userType);
  const query = params.toString();
  window.location.href = query ? `${{url}}?${{query}}` : url;
}}

function handleLogin(user) {{
  window.parent.postMessage({{
    type: 'LOGIN',
    user: user
  }}, '*');
}}

function handleLogout() {{
  window.parent.postMessage({{
    type: 'LOGOUT'
  }}, '*');
}}

// Copy state and props into data-key placeholders
function updateUI() {{
  for (const key in state) {{
    document.querySelectorAll(`[data-key="${{key}}"]`).forEach((el) => {{
      if (typeof state[key] === 'object') {{
        el.textContent = JSON.stringify(state[key]);
      }} else {{
        el.textContent = state[key];
      }}
    }});
  }}

  for (const key in props) {{
    document.querySelectorAll(`[data-key="${{key}}"]`).forEach((el) => {{
      const value = props[key];
      if (typeof value === 'object' && value !== null) {{
        el.textContent = value.name ? value.name : JSON.stringify(value);
      }} else {{
        el.textContent = value;
      }}
    }});
  }}
}}

function setState(updates) {{
  state = {{ ...state, ...updates }};
  updateUI();
}}

function initComponent() {{
  updateUI();
}}

document.addEventListener('DOMContentLoaded', () => {{
  initComponent();
}});
{setters}{handlers}"#
    )
}

/// A `setX(value)` shim per state entry that merges into the store.
/// Entries whose setter is already a captured stub are left to the stub.
fn generate_setter_shims(state: &StateTable, stubs: &[FunctionStub]) -> String {
    state
        .entries()
        .iter()
        .filter(|e| !stubs.iter().any(|s| s.name == e.setter))
        .map(|e| {
            format!(
                "\nfunction {setter}(value) {{\n  setState({{ {name}: value }});\n}}\n",
                setter = e.setter,
                name = e.name,
            )
        })
        .collect()
}

fn generate_function_stubs(stubs: &[FunctionStub]) -> String {
    stubs
        .iter()
        .map(|stub| {
            let alias = match stub.param.as_deref() {
                Some(param) if param != "event" => format!("  const {param} = event;\n"),
                _ => String::new(),
            };

            format!(
                "\nfunction {name}(event) {{\n  if (event && typeof event.preventDefault === 'function') event.preventDefault();\n{alias}  {body}\n}}\n",
                name = stub.name,
                body = stub.body,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateEntry;

    fn sample_state() -> StateTable {
        let mut state = StateTable::new();
        state.insert(StateEntry {
            name: "email".to_string(),
            setter: "setEmail".to_string(),
            value: "\"\"".to_string(),
        });
        state
    }

    #[test]
    fn embeds_state_literal_and_protocol() {
        let script = generate_runtime_script(&sample_state(), &[]);

        assert!(script.contains(r#"let state = {"email": ""};"#));
        assert!(script.contains("let props = {};"));
        assert!(script.contains("event.data.type === 'APP_STATE'"));
        assert!(script.contains("type: 'NAVIGATE'"));
        assert!(script.contains("type: 'LOGIN'"));
        assert!(script.contains("type: 'LOGOUT'"));
        assert!(script.contains("}, '*');"));
        assert!(script.contains("[data-key=\"${key}\"]"));
        assert!(script.contains("state = { ...state, ...updates };"));
    }

    #[test]
    fn emits_setter_shims() {
        let script = generate_runtime_script(&sample_state(), &[]);

        assert!(script.contains("function setEmail(value) {\n  setState({ email: value });\n}"));
    }

    #[test]
    fn stub_replaces_setter_shim_of_same_name() {
        let stubs = vec![FunctionStub {
            name: "setEmail".to_string(),
            param: Some("value".to_string()),
            body: "setState({ email: value.trim() });".to_string(),
        }];

        let script = generate_runtime_script(&sample_state(), &stubs);

        assert_eq!(script.matches("function setEmail(").count(), 1);
        assert!(script.contains("const value = event;"));
    }

    #[test]
    fn stubs_suppress_default_action() {
        let stubs = vec![FunctionStub {
            name: "handleSubmit".to_string(),
            param: Some("event".to_string()),
            body: "navigateTo('dashboard');".to_string(),
        }];

        let script = generate_runtime_script(&StateTable::new(), &stubs);

        assert!(script.contains(
            "function handleSubmit(event) {\n  if (event && typeof event.preventDefault === 'function') event.preventDefault();\n  navigateTo('dashboard');\n}"
        ));
        assert!(!script.contains("const event = event;"));
    }

    #[test]
    fn navigation_falls_back_to_location_outside_frame() {
        let script = generate_runtime_script(&StateTable::new(), &[]);

        let framed = script.find("if (window.parent !== window) {").unwrap();
        let post = script.find("type: 'NAVIGATE'").unwrap();
        let fallback = script.find("window.location.href = query").unwrap();
        assert!(framed < post && post < fallback);

        assert!(script.contains("page.includes('.html') ? page : `${page}.html`"));
        assert!(script.contains("if (options.orderId) params.set('orderId', options.orderId);"));
        assert!(script.contains("if (options.userType) params.set('userType', options.userType);"));
        assert!(script.contains("window.location.href = query ? `${url}?${query}` : url;"));
    }
}
