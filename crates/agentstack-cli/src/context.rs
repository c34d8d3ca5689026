use agentstack_runtime::AgentStack;
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Resolved global flags plus the lazily opened workspace.
///
/// Commands that never touch the catalog (`submit`, `subscribe`) never pay
/// for loading it.
pub struct ExecutionContext {
    data_dir: PathBuf,
    catalog_override: Option<String>,
    stack: OnceCell<AgentStack>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, catalog_override: Option<String>) -> Self {
        Self {
            data_dir,
            catalog_override,
            stack: OnceCell::new(),
        }
    }

    pub fn stack(&self) -> Result<&AgentStack> {
        self.stack.get_or_try_init(|| {
            let stack = AgentStack::open(self.data_dir.clone(), self.catalog_override.as_deref())?;
            Ok(stack)
        })
    }
}
