//! Output Rendering
//!
//! Summaries printed on stdout once a command finishes. Logs go to stderr.

use std::path::Path;

use crate::application::DeployResult;
use crate::domain::value_objects::AppEngineEnvironment;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    skip: &'static str,
    write: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            skip: "○",
            write: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            skip: "[ ]",
            write: "->",
        }
    }
}

/// Renders command results
pub trait ResultRenderer {
    fn render_stage(
        &self,
        staging_directory: &Path,
        environment: AppEngineEnvironment,
        skipped: bool,
    ) -> String;

    /// `operation` names the command ("deploy", "deployCron", ...)
    fn render_deploy(&self, operation: &str, result: &DeployResult) -> String;
}

/// Text renderer
pub struct TextRenderer {
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

impl ResultRenderer for TextRenderer {
    fn render_stage(
        &self,
        staging_directory: &Path,
        environment: AppEngineEnvironment,
        skipped: bool,
    ) -> String {
        let icons = self.icons();
        if skipped {
            return format!("{} Staging skipped (packaging is not war or jar)", icons.skip);
        }
        format!(
            "{} Staged to {} ({} environment)",
            icons.check,
            staging_directory.display(),
            environment
        )
    }

    fn render_deploy(&self, operation: &str, result: &DeployResult) -> String {
        let icons = self.icons();
        if result.is_skipped() {
            return format!(
                "{} {} skipped (packaging is not war or jar)",
                icons.skip, operation
            );
        }

        let mut out = format!("{} {} complete\n", icons.check, operation);
        if let Some(project) = &result.project_id {
            out.push_str(&format!("\n  Project: {}\n", project));
        }
        out.push_str(&format!(
            "  Version: {}\n",
            result.version.as_deref().unwrap_or("(generated)")
        ));
        if !result.deployables.is_empty() {
            out.push_str(&format!("\n  Deployed ({}):\n", result.deployables.len()));
            for path in &result.deployables {
                out.push_str(&format!("    {} {}\n", icons.write, path.display()));
            }
        }
        out.trim_end().to_string()
    }
}

/// JSON renderer
pub struct JsonRenderer;

impl ResultRenderer for JsonRenderer {
    fn render_stage(
        &self,
        staging_directory: &Path,
        environment: AppEngineEnvironment,
        skipped: bool,
    ) -> String {
        let json = serde_json::json!({
            "operation": "stage",
            "environment": environment,
            "skipped": skipped,
            "staging_directory": staging_directory.display().to_string(),
        });
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    fn render_deploy(&self, operation: &str, result: &DeployResult) -> String {
        let json = serde_json::json!({
            "operation": operation,
            "skipped": result.is_skipped(),
            "project_id": result.project_id,
            "version": result.version,
            "deployables": result
                .deployables
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        });
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
