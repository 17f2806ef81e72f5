use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// Modern style bundling
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

ul {
  list-style: disc;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS
);
