//! Schema-independent module files: repository, service, controller, router
//! and index.

use crate::domain::entities::descriptor::DomainDescriptor;

/// Identifier path segment accepted by the generated routes.
const ID_PATTERN: &str = r"([\\w-]+)";

/// HTTP method, path and controller handler of one generated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestRoute {
    List,
    Show,
    Create,
    Update,
    Delete,
}

impl RestRoute {
    pub const ALL: [Self; 5] = [Self::List, Self::Show, Self::Create, Self::Update, Self::Delete];

    pub const fn method(self) -> &'static str {
        match self {
            Self::List | Self::Show => "GET",
            Self::Create => "POST",
            Self::Update => "PUT",
            Self::Delete => "DELETE",
        }
    }

    pub const fn handler(self) -> &'static str {
        match self {
            Self::List => "getAll",
            Self::Show => "getById",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    const fn addresses_member(self) -> bool {
        matches!(self, Self::Show | Self::Update | Self::Delete)
    }

    /// Route-map key, e.g. `PUT:/clientes/([\\w-]+)`.
    pub fn key(self, segment: &str) -> String {
        if self.addresses_member() {
            format!("{}:/{segment}/{ID_PATTERN}", self.method())
        } else {
            format!("{}:/{segment}", self.method())
        }
    }
}

pub fn generate_repository(domain: &DomainDescriptor, table: &str) -> String {
    let pascal = domain.pascal();
    let camel = domain.camel();
    format!(
        "import {{ getSupabaseClient }} from \"../../infra/Supabase/SupabaseConnection\";
import {{ makeSupabaseRepository }} from \"../../utils/genericRepository\";
import type {{ I{pascal}Row }} from \"./{pascal}.type\";

const TABLE_NAME = \"{table}\";

export const {camel}Repo = makeSupabaseRepository<I{pascal}Row>(getSupabaseClient(), {{
\ttableName: TABLE_NAME,
\tprimaryKey: \"id\",
}});
"
    )
}

pub fn generate_service(domain: &DomainDescriptor) -> String {
    let pascal = domain.pascal();
    format!(
        "import type {{ ICrudService }} from \"../../core/http/HttpType\";
import type {{ IRepository }} from \"../../core/ORM/ORMTypes\";
import {{ failure, success }} from \"../../core/services/ServiceResult\";
import {{ taskFindById, taskUpdate }} from \"../../utils/crudTasks\";
import {{ asyncPipe }} from \"../../utils/pipe\";
import {{ chain, map, tryTask }} from \"../../utils/task\";
import {{ ensureFound }} from \"../../utils/validator\";
import type {{
\tI{pascal},
\tI{pascal}DTO,
\tI{pascal}Row,
}} from \"./{pascal}.type\";
import {{ mapDTOToRow, mapRowToDomain }} from \"./{pascal}.utils\";

export const make{pascal}Service = (
\trepo: IRepository<I{pascal}Row>,
): ICrudService<I{pascal}, I{pascal}DTO> => ({{
\tfindAll: () =>
\t\tasyncPipe(
\t\t\ttryTask(() => repo.findAll(), \"Failed to list records\")(),
\t\t\tmap((rows) => rows.map(mapRowToDomain)),
\t\t),

\tfindById: (id) =>
\t\tasyncPipe(
\t\t\ttryTask(() => repo.findById(id), \"Failed to load record\")(),
\t\t\tchain((row) =>
\t\t\t\trow ? success(\"OK\", row) : failure(\"NOT_FOUND\", \"Record not found\"),
\t\t\t),
\t\t\tmap(mapRowToDomain),
\t\t),

\tcreate: (dto) =>
\t\tasyncPipe(
\t\t\tsuccess(\"OK\", dto),
\t\t\tmap((input) => mapDTOToRow(input)),
\t\t\tchain((row) => tryTask(() => repo.create(row), \"Failed to create record\")()),
\t\t\tmap(mapRowToDomain),
\t\t),

\tupdate: (id, dto) =>
\t\tasyncPipe(
\t\t\ttaskFindById(repo, id, \"Failed to load record\")(),
\t\t\tchain(ensureFound(\"Record not found for update\")),
\t\t\tchain(() =>
\t\t\t\ttaskUpdate(repo, id, mapDTOToRow(dto, id), \"Failed to save changes\")(),
\t\t\t),
\t\t\tmap(mapRowToDomain),
\t\t),

\tdelete: (id) =>
\t\tasyncPipe(
\t\t\ttryTask(() => repo.delete(id), \"Failed to delete record\")(),
\t\t\tmap(() => true),
\t\t),
}});
"
    )
}

pub fn generate_controller(domain: &DomainDescriptor) -> String {
    let pascal = domain.pascal();
    let camel = domain.camel();
    format!(
        "import {{ createGenericController }} from \"../../utils/genericController\";
import {{ {camel}Repo }} from \"./{pascal}.repository\";
import {{ make{pascal}Service }} from \"./{pascal}.service\";

const service = make{pascal}Service({camel}Repo);
export const {camel}Controller = createGenericController(service);
"
    )
}

pub fn generate_router(domain: &DomainDescriptor) -> String {
    let pascal = domain.pascal();
    let camel = domain.camel();
    let segment = domain.route_segment();
    let entries: String = RestRoute::ALL
        .iter()
        .map(|r| format!("\t\"{}\": {camel}Controller.{},\n", r.key(&segment), r.handler()))
        .collect();

    format!(
        "import type {{ RouteMap }} from \"../../utils/http\";
import {{ {camel}Controller }} from \"./{pascal}.controller\";

export const {routes}: RouteMap = {{
{entries}}};
",
        routes = domain.routes_symbol(),
    )
}

pub fn generate_index(domain: &DomainDescriptor) -> String {
    let pascal = domain.pascal();
    format!("export * from \"./{pascal}.router\";\nexport * from \"./{pascal}.type\";\n")
}
