//! Built-in blueprint: a GraphQL microservices monorepo.
//!
//! This is the one blueprint `stackgen` ships. It is assembled from a fixed
//! backend unit list plus a frontend unit and shared root subtrees, with all
//! file bodies embedded at compile time in [`payloads`].
//!
//! The compose descriptor is composed here, not looped over in the template:
//! one service-block template is rendered per backend unit, the blocks are
//! concatenated, and the result is bound to the skeleton's `{{services}}`
//! placeholder. Rendering is single-pass, so the bound blocks are never
//! re-scanned.

pub mod payloads;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stackgen_core::domain::{
    Binding, Blueprint, DirectorySpec, DomainError, FileTemplate, TemplateSource, Unit,
};

/// Backend units, in generation order. Each gets port `base_port + index`.
pub const BACKEND_SERVICES: [&str; 4] = [
    "model-service",
    "user-management",
    "search-service",
    "notification-service",
];

/// Tunable knobs for the built-in blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintSettings {
    pub project_name: String,
    #[serde(default = "defaults::base_port")]
    pub base_port: u16,
    #[serde(default = "defaults::frontend_port")]
    pub frontend_port: u16,
    #[serde(default = "defaults::postgres_port")]
    pub postgres_port: u16,
}

mod defaults {
    pub fn base_port() -> u16 {
        4001
    }
    pub fn frontend_port() -> u16 {
        3000
    }
    pub fn postgres_port() -> u16 {
        5432
    }
}

impl BlueprintSettings {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            base_port: defaults::base_port(),
            frontend_port: defaults::frontend_port(),
            postgres_port: defaults::postgres_port(),
        }
    }
}

/// Build the built-in blueprint for the given settings.
///
/// Fails only if a payload references a placeholder the bindings here do not
/// supply, which would be a bug in this module.
pub fn default_blueprint(settings: &BlueprintSettings) -> Result<Blueprint, DomainError> {
    let mut blueprint = Blueprint::new(&settings.project_name);

    for (index, name) in BACKEND_SERVICES.iter().enumerate() {
        blueprint = blueprint.unit(backend_unit(name, index, settings));
    }
    blueprint = blueprint.unit(frontend_unit(settings));

    let blueprint = blueprint
        .root_dirs(DirectorySpec::new([
            "libraries/{schema-registry,service-client,logger}/src",
            "infrastructure/{database,scripts}",
        ]))
        .root_file(static_file(".gitignore", ".gitignore", payloads::GITIGNORE))
        .root_file(static_file("README.md", "README.md", payloads::README_MD))
        .root_file(static_file(
            ".env.example",
            ".env.example",
            payloads::ENV_EXAMPLE,
        ))
        .root_file(static_file(
            "init.sql",
            "infrastructure/database/init.sql",
            payloads::INIT_SQL,
        ))
        .root_file(static_file(
            "docker-compose.yml",
            "docker-compose.yml",
            payloads::COMPOSE_SKELETON,
        ))
        .root_binding(root_binding(settings)?);

    debug!(
        units = blueprint.units.len(),
        templates = blueprint.template_count(),
        "Built-in blueprint assembled"
    );
    Ok(blueprint)
}

// ── Unit assembly ─────────────────────────────────────────────────────────────

fn backend_unit(name: &str, index: usize, settings: &BlueprintSettings) -> Unit {
    Unit::new(name)
        .dirs(DirectorySpec::new(["{{service_name}}/{src,tests,config}"]))
        .binding(backend_binding(name, index, settings))
        .template(static_file(
            "package.json",
            "{{service_name}}/package.json",
            payloads::SERVICE_PACKAGE_JSON,
        ))
        .template(static_file(
            "index.js",
            "{{service_name}}/src/index.js",
            payloads::SERVICE_INDEX_JS,
        ))
        .template(static_file(
            "schema.js",
            "{{service_name}}/src/schema.js",
            payloads::SERVICE_SCHEMA_JS,
        ))
        .template(static_file(
            "default.json",
            "{{service_name}}/config/default.json",
            payloads::SERVICE_CONFIG_JSON,
        ))
        .template(static_file(
            "Dockerfile",
            "{{service_name}}/Dockerfile",
            payloads::SERVICE_DOCKERFILE,
        ))
}

fn frontend_unit(settings: &BlueprintSettings) -> Unit {
    let binding = Binding::new()
        .with("project_name", &settings.project_name)
        .with("port", settings.frontend_port.to_string());

    Unit::new("frontend")
        .dirs(DirectorySpec::new([
            "frontend/src/{components,pages}",
            "frontend/public",
        ]))
        .binding(binding)
        .template(static_file(
            "package.json",
            "frontend/package.json",
            payloads::FRONTEND_PACKAGE_JSON,
        ))
        .template(static_file(
            "index.jsx",
            "frontend/src/index.jsx",
            payloads::FRONTEND_INDEX_JSX,
        ))
        .template(static_file(
            "Home.jsx",
            "frontend/src/pages/Home.jsx",
            payloads::FRONTEND_HOME_JSX,
        ))
        .template(static_file(
            "index.html",
            "frontend/public/index.html",
            payloads::FRONTEND_INDEX_HTML,
        ))
}

// ── Bindings ──────────────────────────────────────────────────────────────────

fn backend_binding(name: &str, index: usize, settings: &BlueprintSettings) -> Binding {
    Binding::new()
        .with("service_name", name)
        .with("port", (settings.base_port + index as u16).to_string())
        .with("project_name", &settings.project_name)
}

fn root_binding(settings: &BlueprintSettings) -> Result<Binding, DomainError> {
    Ok(Binding::new()
        .with("project_name", &settings.project_name)
        .with("base_port", settings.base_port.to_string())
        .with("frontend_port", settings.frontend_port.to_string())
        .with("postgres_port", settings.postgres_port.to_string())
        .with("services", compose_services(settings)?))
}

/// Render one compose service block per backend unit and join them.
fn compose_services(settings: &BlueprintSettings) -> Result<String, DomainError> {
    let mut blocks = Vec::with_capacity(BACKEND_SERVICES.len());
    for (index, name) in BACKEND_SERVICES.iter().enumerate() {
        let binding = backend_binding(name, index, settings);
        blocks.push(binding.render("docker-compose.yml", payloads::COMPOSE_SERVICE_BLOCK)?);
    }
    Ok(blocks.join("\n").trim_end_matches('\n').to_string())
}

fn static_file(name: &str, dest: &str, body: &'static str) -> FileTemplate {
    FileTemplate::new(name, dest, TemplateSource::Static(body))
}
