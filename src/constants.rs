// Module for constants and default values

/// Base path of the admin workflow REST surface.
pub const ADMIN_WORKFLOWS_PATH: &str = "/admin/workflows";

/// Generic toast shown after a successful create or update.
pub const SUCCESS_MESSAGE: &str = "Success!";

/// Toast shown after a successful delete.
pub const WORKFLOW_DELETED_MESSAGE: &str = "Workflow deleted!";

/// How long a toast stays on screen before it is removed.
pub const TOAST_DISMISS_MS: u32 = 4_000;
