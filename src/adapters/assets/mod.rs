//! Embedded server templates.

mod asset_collect;
mod template_engine;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::domain::AppError;

use self::asset_collect::collect_asset_sources;
use self::template_engine::{build_template_environment, render_template_by_name};

static SERVER_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/server");

/// Compiled set of server templates, loaded once per run.
pub struct ServerTemplates {
    env: Environment<'static>,
}

impl ServerTemplates {
    pub fn load() -> Result<Self, AppError> {
        let sources = collect_asset_sources(&SERVER_ASSET_DIR)?;
        if sources.is_empty() {
            return Err(AppError::InternalError("Server templates are empty".into()));
        }
        let env = build_template_environment(&sources)?;
        Ok(Self { env })
    }

    pub fn render(&self, template_name: &str, ctx: &Value) -> Result<String, AppError> {
        render_template_by_name(&self.env, template_name, ctx)
    }

    #[cfg(test)]
    pub fn contains(&self, template_name: &str) -> bool {
        self.env.get_template(template_name).is_ok()
    }
}
