// ABOUTME: Include-aware template renderer built on Handlebars
// ABOUTME: Wraps engine failures in file-annotated errors and drives the include directive

use std::error::Error as _;
use std::path::Path;
use std::sync::{Arc, Mutex};

use handlebars::{Handlebars, RenderError as HbRenderError, Template};
use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::{Result, TemplateError};
use super::include::{self, IncludeState};
use crate::source::{self, FsSource, TemplateSource};

/// Renders templates from a [`TemplateSource`], resolving `include`
/// directives recursively. Rendering is synchronous and depth-first; each
/// call to [`Renderer::render_file`] builds its own Handlebars registry and
/// include state, so a shared `Renderer` can serve concurrent renders.
pub struct Renderer {
    source: Arc<dyn TemplateSource>,
}

impl Renderer {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self { source }
    }

    pub fn from_source<S: TemplateSource + 'static>(source: S) -> Self {
        Self::new(Arc::new(source))
    }

    /// Convenience constructor reading templates from a directory.
    pub fn from_dir(root: impl AsRef<Path>) -> Self {
        Self::from_source(FsSource::with_root(root.as_ref()))
    }

    /// Render the named template against a data context. This is the only
    /// entry point that starts an include-tracking invocation.
    pub fn render_file(&self, name: &str, data: &JsonValue) -> Result<String> {
        debug!("rendering template '{}'", name);
        let text = source::load(self.source.as_ref(), name, name)?;
        self.render_str(&text, data, name)
    }

    /// Render already-loaded template text. `file_name` attributes errors and
    /// seeds the include state; without include directives this is a plain
    /// pass-through to the engine.
    pub fn render_str(&self, text: &str, data: &JsonValue, file_name: &str) -> Result<String> {
        let state = Arc::new(Mutex::new(IncludeState::new(file_name)));

        let mut registry = Handlebars::new();
        include::register(&mut registry, Arc::clone(&self.source), Arc::clone(&state));

        render_frame(&registry, text, data, file_name, &state)
    }

    /// Validate the named template's syntax without rendering it. Includes
    /// are not followed; they are ordinary directives at parse time.
    pub fn check(&self, name: &str) -> Result<()> {
        let text = source::load(self.source.as_ref(), name, name)?;
        Template::compile(&text).map_err(|err| TemplateError::Parse {
            file: name.to_string(),
            detail: err.to_string(),
        })?;
        Ok(())
    }
}

/// Render one template frame. Used both for the top-level template and for
/// every nested include, so failures at any level are classified with the
/// file active in that frame.
pub(crate) fn render_frame(
    registry: &Handlebars<'_>,
    text: &str,
    data: &JsonValue,
    file: &str,
    state: &Mutex<IncludeState>,
) -> Result<String> {
    // Surface syntax failures as parse errors before evaluation.
    if let Err(err) = Template::compile(text) {
        return Err(TemplateError::Parse {
            file: file.to_string(),
            detail: err.to_string(),
        });
    }

    registry
        .render_template(text, data)
        .map_err(|err| classify(state, file, err))
}

/// Map a Handlebars failure to the typed taxonomy. A typed error recorded by
/// a directive frame deeper in the render takes precedence; it was built with
/// the failing file before the stack unwound.
///
/// The `Compile` arm covers render-phase failures caused by a template
/// compilation error. With every frame pre-compiled in [`render_frame`] and
/// no partials registered, it is rarely reachable; it exists to keep syntax,
/// compilation, and evaluation failures distinct at the API boundary.
fn classify(state: &Mutex<IncludeState>, file: &str, err: HbRenderError) -> TemplateError {
    if let Some(inner) = include::lock(state).failure.take() {
        return inner;
    }

    let detail = err.to_string();
    let is_template_error = err
        .source()
        .map_or(false, |cause| cause.downcast_ref::<handlebars::TemplateError>().is_some());

    if is_template_error {
        TemplateError::Compile {
            file: file.to_string(),
            detail,
        }
    } else {
        TemplateError::Render {
            file: file.to_string(),
            detail,
        }
    }
}
