//! Pure artifact rendering: resource descriptor + config in, file text out.

use minijinja::{Value, context};

use crate::adapters::ServerTemplates;
use crate::domain::http_surface::{
    ACCESS_TOKEN_TTL, AUTH_MOUNT_PREFIX, DEFAULT_PAGE_LIMIT, DELETE_NOT_FOUND_MESSAGE,
    DELETE_SUCCESS_MESSAGE, REFRESH_TOKEN_TTL, resource_routes,
};
use crate::domain::layout::{AUTH_STEM, ROUTES_DIR};
use crate::domain::{
    AppError, ArtifactKind, AuthPart, FixedFile, GeneratorConfig, ResourceDescriptor,
    mount_statement,
};

/// Renders every artifact kind from the embedded templates.
///
/// Rendering does no I/O and is deterministic: the same descriptor and
/// config always produce byte-identical text.
pub struct ArtifactRenderer {
    templates: ServerTemplates,
    config: GeneratorConfig,
}

impl ArtifactRenderer {
    pub fn new(config: GeneratorConfig) -> Result<Self, AppError> {
        Ok(Self { templates: ServerTemplates::load()?, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render the text of one artifact for `descriptor`.
    pub fn render(
        &self,
        kind: ArtifactKind,
        descriptor: &ResourceDescriptor,
    ) -> Result<String, AppError> {
        let ctx = self.context_for(descriptor);
        self.templates.render(template_name(kind), &ctx)
    }

    fn context_for(&self, descriptor: &ResourceDescriptor) -> Value {
        let name = descriptor.name();
        context! {
            name => name.as_str(),
            fields => descriptor.fields(),
            routes => resource_routes(name),
            page_limit => DEFAULT_PAGE_LIMIT,
            not_found_message => DELETE_NOT_FOUND_MESSAGE,
            deleted_message => DELETE_SUCCESS_MESSAGE,
            mount => mount_statement(name),
            auth_mount => auth_mount_statement(),
            access_token_ttl => ACCESS_TOKEN_TTL,
            refresh_token_ttl => REFRESH_TOKEN_TTL,
            token_issuance => self.config.auth.token_issuance,
            port => self.config.server.port,
            cors_origins => &self.config.server.cors_origins,
            database_uri => &self.config.environment.database_uri,
        }
    }
}

/// Mount statement for the fixed auth router.
pub fn auth_mount_statement() -> String {
    format!("app.use(\"{}\", require(\"./{}/{}\"));", AUTH_MOUNT_PREFIX, ROUTES_DIR, AUTH_STEM)
}

fn template_name(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Schema => "models/resource.js.j2",
        ArtifactKind::Handler => "controllers/resource.js.j2",
        ArtifactKind::RouteTable => "routes/resource.js.j2",
        ArtifactKind::AuthBundle(AuthPart::Schema) => "models/auth.js.j2",
        ArtifactKind::AuthBundle(AuthPart::Handler) => "controllers/auth.js.j2",
        ArtifactKind::AuthBundle(AuthPart::Routes) => "routes/auth.js.j2",
        ArtifactKind::EntryPoint => "index.js.j2",
        ArtifactKind::FixedFile(file) => match file {
            FixedFile::DatabaseConnector => "config/mongoose.js.j2",
            FixedFile::Manifest => "package.json.j2",
            FixedFile::EnvTemplate => "env.j2",
            FixedFile::Dockerfile => "Dockerfile.j2",
            FixedFile::DockerIgnore => "dockerignore.j2",
            FixedFile::Compose => "docker-compose.yml.j2",
            FixedFile::GitIgnore => "gitignore.j2",
        },
    }
}
