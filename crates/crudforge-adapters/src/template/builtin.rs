//! The backend skeleton shipped inside the binary.

use tracing::debug;

use crudforge_core::{
    application::ports::TemplateSource,
    domain::{ProjectTemplate, RelativePath},
    error::{ForgeError, ForgeResult},
};

macro_rules! embed {
    ($path:literal) => {
        (
            $path,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../../templates/backend/",
                $path
            )),
        )
    };
}

const TEMPLATE_NAME: &str = "backend";

/// Every skeleton file, as `(relative path, content)`.
const FILES: &[(&str, &str)] = &[
    embed!(".env.example"),
    embed!("_gitignore"),
    embed!("package.json"),
    embed!("tsconfig.json"),
    embed!("src/server.ts"),
    embed!("src/types/http.d.ts"),
    embed!("src/core/ORM/ORMTypes.ts"),
    embed!("src/core/http/HttpType.ts"),
    embed!("src/core/http/ResponsiveAdapter.ts"),
    embed!("src/core/services/ServiceResult.ts"),
    embed!("src/infra/Context/AsyncContext.ts"),
    embed!("src/infra/Routes/routesBarrel.ts"),
    embed!("src/infra/Routes/routesEngine.ts"),
    embed!("src/infra/Supabase/SupabaseConnection.ts"),
    embed!("src/modules/Health/Health.router.ts"),
    embed!("src/modules/Health/index.ts"),
    embed!("src/utils/crudTasks.ts"),
    embed!("src/utils/env.ts"),
    embed!("src/utils/genericController.ts"),
    embed!("src/utils/genericRepository.ts"),
    embed!("src/utils/http.ts"),
    embed!("src/utils/pipe.ts"),
    embed!("src/utils/task.ts"),
    embed!("src/utils/validator.ts"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplate;

impl BuiltinTemplate {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for BuiltinTemplate {
    fn load(&self) -> ForgeResult<ProjectTemplate> {
        let mut template = ProjectTemplate::new(TEMPLATE_NAME);
        for (path, content) in FILES {
            let path = RelativePath::try_new(*path).map_err(ForgeError::Domain)?;
            template.add_file(path, *content);
        }
        template.validate().map_err(ForgeError::Domain)?;
        debug!(files = template.files().len(), "Loaded built-in template");
        Ok(template)
    }

    fn describe(&self) -> String {
        format!("built-in {TEMPLATE_NAME} template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudforge_core::domain::{BARREL_PATH, RouteBarrel};

    fn content(template: &ProjectTemplate, path: &str) -> String {
        template
            .files()
            .iter()
            .find(|f| f.path.to_string() == path)
            .map(|f| f.content.clone())
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[test]
    fn builtin_template_is_valid() {
        let template = BuiltinTemplate::new().load().unwrap();
        assert_eq!(template.files().len(), FILES.len());
    }

    #[test]
    fn barrel_has_route_aggregate() {
        let template = BuiltinTemplate::new().load().unwrap();
        let barrel = RouteBarrel::parse(&content(&template, BARREL_PATH));
        assert!(barrel.has_aggregate());
        assert!(barrel.references("healthRoutes"));
    }

    #[test]
    fn instantiation_renames_gitignore_and_sets_name() {
        let files = BuiltinTemplate::new().load().unwrap().instantiate("loja-api").unwrap();
        assert!(files.iter().any(|f| f.path.to_string() == ".gitignore"));
        let manifest = files
            .iter()
            .find(|f| f.path.to_string() == "package.json")
            .unwrap();
        assert!(manifest.content.contains(r#""name": "loja-api""#));
        assert!(manifest.content.contains(r#""gen": "crudforge gen""#));
    }

    #[test]
    fn repository_factory_takes_client_explicitly() {
        let template = BuiltinTemplate::new().load().unwrap();
        let repo = content(&template, "src/utils/genericRepository.ts");
        assert!(repo.contains("client: SupabaseClient,"));
    }
}
