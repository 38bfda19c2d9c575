//! Implementation of the `argo-helper list` command.

use argo_helper_adapters::InMemoryStore;
use argo_helper_core::{
    application::{TemplateInfo, TemplateService},
    domain::ResourceType,
    error::ArgoError,
};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(Box::new(InMemoryStore::with_builtin()?));
    service.verify_catalog()?;
    let templates = service.list()?;

    let format = if super::wants_json(&output) {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_rows(&templates) {
                output.data(&line)?;
            }
            output.print("")?;
            output.header("Resource types (argo-helper new <TYPE>):")?;
            for resource_type in ResourceType::ALL {
                output.data(&format!("  {:<16}  {}", resource_type.as_str(), resource_type.kind()))?;
            }
        }
        ListFormat::Json => {
            // Straight to stdout so the array stays parseable even in quiet mode.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| ArgoError::Internal {
                message: format!("failed to serialise template list: {e}"),
            })?;
            output.data(&json)?;
        }
        ListFormat::List => {
            for t in &templates {
                output.data(&t.name)?;
            }
        }
        ListFormat::Csv => {
            for line in csv_rows(&templates) {
                output.data(&line)?;
            }
        }
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            format!(
                "  {:<width$}  {:<6}  {}",
                t.name,
                t.version,
                t.description,
                width = width
            )
        })
        .collect()
}

fn csv_rows(templates: &[TemplateInfo]) -> Vec<String> {
    let mut rows = vec!["name,version,placeholders".to_string()];
    rows.extend(
        templates
            .iter()
            .map(|t| format!("{},{},{}", t.name, t.version, t.placeholders.join(" "))),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TemplateInfo> {
        vec![
            TemplateInfo {
                name: "chart".into(),
                version: "1.0.0".into(),
                description: "Helm chart metadata".into(),
                placeholders: vec!["PROJECT_NAME".into(), "CREATED_DATE".into()],
            },
            TemplateInfo {
                name: "helmignore".into(),
                version: "1.0.0".into(),
                description: "Helm ignore patterns".into(),
                placeholders: vec![],
            },
        ]
    }

    #[test]
    fn table_columns_are_aligned() {
        let rows = table_rows(&sample());
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("  chart       1.0.0"));
        assert!(rows[1].starts_with("  helmignore  1.0.0"));
    }

    #[test]
    fn csv_has_header_and_space_separated_placeholders() {
        let rows = csv_rows(&sample());
        assert_eq!(rows[0], "name,version,placeholders");
        assert_eq!(rows[1], "chart,1.0.0,PROJECT_NAME CREATED_DATE");
        assert_eq!(rows[2], "helmignore,1.0.0,");
    }
}
