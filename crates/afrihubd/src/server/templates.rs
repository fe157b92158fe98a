//! Page templates, compiled into the binary.

use super::*;

/// Every page template, by name.
const TEMPLATES: [(&str, &str); 5] = [
  ("layout.html", include_str!("../../templates/layout.html")),
  ("index.html", include_str!("../../templates/index.html")),
  ("paper.html", include_str!("../../templates/paper.html")),
  ("admin.html", include_str!("../../templates/admin.html")),
  ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// A template environment with every page loaded.
pub fn environment() -> Result<Environment<'static>> {
  let mut env = Environment::new();
  for (name, source) in TEMPLATES {
    env.add_template(name, source)?;
  }
  trace!("Loaded {} page templates", TEMPLATES.len());
  Ok(env)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_all_templates_compile() {
    let env = environment().unwrap();
    for (name, _) in TEMPLATES {
      assert!(env.get_template(name).is_ok(), "{name} did not load");
    }
  }
}
