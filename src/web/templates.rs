use anyhow::{Context, Result};
use tera::Tera;

/// Wraps the tera instance loaded at startup. Templates are compiled
/// once; rendering is read-only and cheap to share.
#[derive(Clone)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new(glob: &str) -> Result<Self> {
        let tera = Tera::new(glob).context("failed to load templates")?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &tera::Context) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("failed to render {template}"))
    }
}
