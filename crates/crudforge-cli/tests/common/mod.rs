//! Shared fixtures for the CLI end-to-end tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const BARREL: &str = "import { healthRoutes } from \"../../modules/Health\";
import { prefixRoutes, type RouteMap } from \"../../utils/http\";

const internalRoutes: RouteMap = {
\t...healthRoutes,
};

export const routes: RouteMap = prefixRoutes(internalRoutes, \"/api\");
";

/// `<tmp>/api` is the backend root, `<tmp>/src/types` the default types dir.
pub struct Workspace {
    pub temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let ws = Self { temp };
        fs::create_dir_all(ws.barrel_path().parent().unwrap()).unwrap();
        fs::write(ws.barrel_path(), BARREL).unwrap();
        ws
    }

    pub fn api(&self) -> PathBuf {
        self.temp.path().join("api")
    }

    pub fn barrel_path(&self) -> PathBuf {
        self.api().join("src/infra/Routes/routesBarrel.ts")
    }

    pub fn barrel(&self) -> String {
        fs::read_to_string(self.barrel_path()).unwrap()
    }

    pub fn module_file(&self, pascal: &str, file: &str) -> String {
        fs::read_to_string(self.api().join("src/modules").join(pascal).join(file)).unwrap()
    }

    pub fn write_types(&self, relative: &str, content: &str) {
        let path = self.temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// `crudforge` running inside the backend root.
    pub fn cmd(&self) -> Command {
        crudforge(&self.api(), self.temp.path())
    }
}

/// `crudforge` with config, credentials and colour isolated from the host.
#[allow(deprecated)]
pub fn crudforge(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crudforge").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_KEY")
        .env_remove("CRUDFORGE_TEMPLATE_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}
