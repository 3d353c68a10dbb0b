//! End-to-end tests for `crudforge gen` and `crudforge new`.

mod common;

use std::fs;

use predicates::prelude::*;

use common::{Workspace, crudforge};

const PRODUTO_FILES: [&str; 7] = [
    "Produto.type.ts",
    "Produto.utils.ts",
    "Produto.repository.ts",
    "Produto.service.ts",
    "Produto.controller.ts",
    "Produto.router.ts",
    "index.ts",
];

// ── gen ───────────────────────────────────────────────────────────────────────

#[test]
fn test_gen_without_interface_uses_skeleton() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["gen", "Produto", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using the skeleton schema"))
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS public.app_produto"))
        .stdout(predicate::str::contains("  nome TEXT NOT NULL,"))
        .stdout(predicate::str::contains("  ativo BOOLEAN DEFAULT true NOT NULL,"));

    for file in PRODUTO_FILES {
        assert!(
            ws.api().join("src/modules/Produto").join(file).is_file(),
            "missing {file}"
        );
    }
    let types = ws.module_file("Produto", "Produto.type.ts");
    assert!(types.contains("export interface IProduto"));
    assert!(types.contains("nome"));

    let barrel = ws.barrel();
    assert!(barrel.contains("import { produtoRoutes } from \"../../modules/Produto\";"));
    assert!(barrel.contains("\t...produtoRoutes,"));
    assert!(barrel.contains("\t...healthRoutes,"));
}

#[test]
fn test_gen_with_interface_and_prefix() {
    let ws = Workspace::new();
    ws.write_types(
        "src/types/crm/cliente.ts",
        "export interface ICliente {\n  id: string;\n  nomeCompleto: string;\n  limiteCredito: number;\n  ativo?: boolean;\n  createdAt: Date;\n}\n",
    );

    ws.cmd()
        .args(["gen", "Cliente", "--prefix=crm_", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using interface ICliente"))
        .stdout(predicate::str::contains("public.crm_cliente"))
        .stdout(predicate::str::contains("  nome_completo TEXT NOT NULL,"))
        .stdout(predicate::str::contains("  limite_credito NUMERIC NOT NULL,"))
        .stdout(predicate::str::contains("  ativo BOOLEAN,"));

    let types = ws.module_file("Cliente", "Cliente.type.ts");
    assert!(types.contains("nomeCompleto"));
    assert!(types.contains("nome_completo"));
    let repository = ws.module_file("Cliente", "Cliente.repository.ts");
    assert!(repository.contains("crm_cliente"));
}

#[test]
fn test_gen_path_flag_overrides_search_root() {
    let ws = Workspace::new();
    ws.write_types(
        "web/types/pedido.ts",
        "export interface Pedido {\n  numero: number;\n}\n",
    );

    ws.cmd()
        .args(["gen", "Pedido", "--path=../web/types", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using interface Pedido"))
        .stdout(predicate::str::contains("  numero NUMERIC NOT NULL,"));
}

#[test]
fn test_gen_no_db_prints_sql_without_executing() {
    let ws = Workspace::new();

    ws.cmd()
        .env("SUPABASE_URL", "http://127.0.0.1:9")
        .env("SUPABASE_KEY", "secret")
        .args(["gen", "Produto", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENABLE ROW LEVEL SECURITY"))
        .stdout(predicate::str::contains("SQL was not executed"));
}

#[test]
fn test_gen_quiet_still_prints_sql() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["-q", "gen", "Produto", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE IF NOT EXISTS public.app_produto"))
        .stdout(predicate::str::contains("using the skeleton schema").not())
        .stdout(predicate::str::contains("Registered produtoRoutes").not());

    assert!(ws.barrel().contains("\t...produtoRoutes,"));
}

#[test]
fn test_gen_without_credentials_warns_but_succeeds() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["gen", "Produto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL not executed"))
        .stdout(predicate::str::contains("SUPABASE_URL"));
}

#[test]
fn test_gen_keeps_registered_barrel_unchanged() {
    let ws = Workspace::new();
    let registered = common::BARREL
        .replace(
            "import { prefixRoutes",
            "import { produtoRoutes } from \"../../modules/Produto\";\nimport { prefixRoutes",
        )
        .replace("\t...healthRoutes,\n", "\t...healthRoutes,\n\t...produtoRoutes,\n");
    fs::write(ws.barrel_path(), &registered).unwrap();

    ws.cmd()
        .args(["gen", "Produto", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));

    assert_eq!(ws.barrel(), registered);
}

#[test]
fn test_gen_twice_fails_without_changes() {
    let ws = Workspace::new();
    ws.cmd().args(["gen", "Produto", "--no-db"]).assert().success();

    let types_path = ws.api().join("src/modules/Produto/Produto.type.ts");
    fs::write(&types_path, "// edited by hand\n").unwrap();
    let barrel = ws.barrel();

    ws.cmd()
        .args(["gen", "Produto", "--no-db"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(types_path).unwrap(), "// edited by hand\n");
    assert_eq!(ws.barrel(), barrel);
}

#[test]
fn test_gen_skeleton_flag_ignores_interfaces() {
    let ws = Workspace::new();
    ws.write_types("src/types/produto.ts", "export interface IProduto {\n  preco: number;\n}\n");

    ws.cmd()
        .args(["gen", "Produto", "--skeleton", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  nome TEXT NOT NULL,"))
        .stdout(predicate::str::contains("preco").not());
}

#[test]
fn test_gen_json_output() {
    let ws = Workspace::new();

    let assert = ws
        .cmd()
        .args(["--output-format", "json", "gen", "Produto", "--no-db"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["domain"], "Produto");
    assert_eq!(report["table"], "app_produto");
    assert_eq!(report["barrel"], "patched");
    assert_eq!(report["ddl"]["status"], "skipped");
    assert_eq!(report["files"].as_array().unwrap().len(), 7);
}

#[test]
fn test_gen_config_prefix_from_local_file() {
    let ws = Workspace::new();
    fs::write(
        ws.api().join("crudforge.toml"),
        "[generate]\ntable_prefix = \"loja_\"\n",
    )
    .unwrap();

    ws.cmd()
        .args(["gen", "Produto", "--no-db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public.loja_produto"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn test_new_project_from_builtin_template() {
    let temp = tempfile::TempDir::new().unwrap();

    crudforge(temp.path(), temp.path())
        .args(["new", "my-api", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'my-api' created!"))
        .stdout(predicate::str::contains("cd my-api"));

    let root = temp.path().join("my-api");
    assert!(root.join(".gitignore").is_file());
    assert!(!root.join("_gitignore").exists());
    assert!(root.join("src/infra/Routes/routesBarrel.ts").is_file());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-api");
    assert_eq!(manifest["version"], "1.0.0");
}

#[test]
fn test_new_then_gen_registers_routes() {
    let temp = tempfile::TempDir::new().unwrap();
    crudforge(temp.path(), temp.path())
        .args(["new", "shop", "--skip-install"])
        .assert()
        .success();

    let root = temp.path().join("shop");
    crudforge(&root, temp.path())
        .args(["gen", "Produto", "--no-db"])
        .assert()
        .success();

    let barrel = fs::read_to_string(root.join("src/infra/Routes/routesBarrel.ts")).unwrap();
    assert!(barrel.contains("\t...produtoRoutes,"));
}

#[test]
fn test_new_from_template_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    let template = temp.path().join("tpl");
    fs::create_dir_all(&template).unwrap();
    fs::write(template.join("package.json"), "{\"name\": \"tpl\", \"version\": \"0.0.1\"}").unwrap();
    fs::write(template.join("_gitignore"), "node_modules\n").unwrap();

    crudforge(temp.path(), temp.path())
        .args(["new", "custom", "--skip-install", "--template"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("template directory"));

    assert!(temp.path().join("custom/.gitignore").is_file());
}
