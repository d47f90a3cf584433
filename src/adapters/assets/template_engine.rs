use minijinja::{AutoEscape, Environment, Value};

use crate::domain::AppError;

use super::asset_collect::AssetSourceFile;

/// Build an environment with every `.j2` source registered under its relative path.
///
/// Generated files are source code, not markup, so auto-escaping is off.
pub fn build_template_environment(
    sources: &[AssetSourceFile],
) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for source in sources.iter().filter(|source| source.is_template()) {
        env.add_template(source.template_name(), source.content).map_err(|e| {
            AppError::TemplateRender {
                template: source.template_name().to_string(),
                details: e.to_string(),
            }
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| AppError::TemplateRender {
        template: template_name.to_string(),
        details: e.to_string(),
    })?;

    template.render(ctx).map_err(|e| AppError::TemplateRender {
        template: template_name.to_string(),
        details: e.to_string(),
    })
}
