use mdrop_core::FileEntry;

use crate::bootstrap::AppDeps;

/// `<icon> <name>`
pub fn format_entry(entry: &FileEntry) -> String {
    format!("{} {}", entry.kind.icon(), entry.name)
}

#[tracing::instrument(name = "command.list_files", skip_all)]
pub async fn list_files(deps: &AppDeps) -> anyhow::Result<()> {
    let entries = deps.list_files.execute().await?;
    if entries.is_empty() {
        println!("No files yet");
        return Ok(());
    }
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdrop_core::{FileName, PreviewKind};

    #[test]
    fn test_format_entry_uses_kind_icon() {
        let entry = FileEntry::new(FileName::new("report.pdf").unwrap());
        assert_eq!(
            format_entry(&entry),
            format!("{} report.pdf", PreviewKind::Pdf.icon())
        );
    }
}
