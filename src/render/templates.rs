use serde::Serialize;
use tera::{Context, Tera};

/// A page's named HTML templates. Names end in `.html`, so every
/// interpolated value is HTML-escaped.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new(sources: &[(&str, &str)]) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }

    /// Renders `name` with every field of `value` at the top level.
    pub fn render_value<T: Serialize>(&self, name: &str, value: &T) -> Result<String, tera::Error> {
        let context = Context::from_serialize(value)?;
        self.render(name, &context)
    }
}
