use super::types::ExtractStatus;

/// Operator-facing line for a materializer milestone.
pub fn status_line(status: &ExtractStatus) -> String {
    match status {
        ExtractStatus::CreatedBaseFolder(path) => {
            format!("✓ Created base folder: {}", path.display())
        }
        ExtractStatus::ScriptWritten(_) => "✓ Extracted PowerShell script".into(),
        ExtractStatus::TemplateWritten(_) => "✓ Extracted Power BI Governance Model".into(),
        ExtractStatus::ConfigWritten { .. } => "✓ Extracted configuration files".into(),
    }
}
