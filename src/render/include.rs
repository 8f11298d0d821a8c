// ABOUTME: The include directive and its per-invocation state tracking
// ABOUTME: Loads sub-templates, enforces the depth bound, and splices rendered fragments

use std::sync::{Arc, Mutex, MutexGuard};

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderError as HbRenderError,
};
use tracing::trace;

use super::engine::render_frame;
use super::error::TemplateError;
use crate::source::{self, TemplateSource};

/// Maximum number of nested active includes within one top-level render.
pub const MAX_INCLUDE_DEPTH: u32 = 30;

/// Mutable state scoped to a single top-level render invocation.
///
/// `current_file` names the template being evaluated right now, for error
/// attribution. Only the top of the conceptual filename stack is tracked;
/// each include saves the previous name and restores it on unwind. `failure`
/// carries the first typed error raised inside a directive frame out through
/// Handlebars' string-based error channel, so the caller receives the variant
/// built at the failing frame rather than a flattened message.
#[derive(Debug)]
pub(crate) struct IncludeState {
    pub(crate) current_file: String,
    pub(crate) depth: u32,
    pub(crate) failure: Option<TemplateError>,
}

impl IncludeState {
    pub(crate) fn new(root_file: &str) -> Self {
        Self {
            current_file: root_file.to_string(),
            depth: 0,
            failure: None,
        }
    }
}

pub(crate) fn lock(state: &Mutex<IncludeState>) -> MutexGuard<'_, IncludeState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Record a typed failure in the invocation state and produce the Handlebars
/// error that aborts the current render. The first failure wins; frames
/// re-recording a propagated error find the slot empty because the
/// classifier takes it back out at each level.
fn fail(state: &Mutex<IncludeState>, err: TemplateError) -> HbRenderError {
    let message = err.to_string();
    let mut st = lock(state);
    if st.failure.is_none() {
        st.failure = Some(err);
    }
    HbRenderError::new(message)
}

/// The `include` directive. One instance is registered per top-level render
/// invocation, capturing that invocation's source and state, so concurrent
/// renders never observe each other's current file or depth.
pub(crate) struct IncludeHelper {
    source: Arc<dyn TemplateSource>,
    state: Arc<Mutex<IncludeState>>,
}

pub(crate) fn register(
    registry: &mut Handlebars<'_>,
    source: Arc<dyn TemplateSource>,
    state: Arc<Mutex<IncludeState>>,
) {
    registry.register_helper("include", Box::new(IncludeHelper { source, state }));
}

impl HelperDef for IncludeHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        use handlebars::JsonRender;

        // Arity is checked before anything is loaded.
        let params = h.params();
        if params.len() != 1 {
            let file = lock(&self.state).current_file.clone();
            return Err(fail(
                &self.state,
                TemplateError::Arity {
                    expected: 1,
                    got: params.len(),
                    file,
                },
            ));
        }
        let name = params[0].value().render();

        let (prev_file, prev_depth) = {
            let st = lock(&self.state);
            (st.current_file.clone(), st.depth)
        };

        let text = match source::load(self.source.as_ref(), &name, &prev_file) {
            Ok(text) => text,
            Err(err) => return Err(fail(&self.state, err.into())),
        };

        // Bound the nesting before rendering the new level, so a template
        // that includes itself fails on its first over-limit activation.
        let depth = prev_depth + 1;
        if depth > MAX_INCLUDE_DEPTH {
            return Err(fail(
                &self.state,
                TemplateError::DepthExceeded {
                    limit: MAX_INCLUDE_DEPTH,
                    file: prev_file,
                },
            ));
        }

        {
            let mut st = lock(&self.state);
            st.current_file = name.clone();
            st.depth = depth;
        }
        trace!("including '{}' from '{}' at depth {}", name, prev_file, depth);

        // Sub-render against the same root context. The failing frame builds
        // its error message before unwinding, so state is restored on both
        // paths without losing attribution.
        let rendered = render_frame(r, &text, ctx.data(), &name, &self.state);

        {
            let mut st = lock(&self.state);
            st.current_file = prev_file;
            st.depth = prev_depth;
        }

        let fragment = match rendered {
            Ok(fragment) => fragment,
            Err(err) => return Err(fail(&self.state, err)),
        };

        // Already rendered; write raw so the fragment is not escaped again.
        out.write(&fragment)?;
        Ok(())
    }
}
