//! Template domain model.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Template (Entity)                                          │
//! │  ├── TemplateName    - closed catalog key                   │
//! │  ├── version / description                                  │
//! │  ├── placeholders    - declared {{VARIABLES}}               │
//! │  └── TemplateSource  - the text itself                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "payments"  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The templates are Helm charts, so their text is full of `{{ ... }}`
//! expressions that must survive rendering untouched. Substitution only
//! replaces the exact `{{KEY}}` forms of the declared [`Placeholder`]s.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    entities::parameters::ResolvedParameters, error::DomainError,
};

// ── TemplateName ─────────────────────────────────────────────────────────────

/// Key of a template in the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateName {
    Helmignore,
    Chart,
    Values,
    Helpers,
    Project,
    Readme,
    ExampleApp,
    ExampleApplicationSet,
    DevValues,
    ProdValues,
    ApplicationSet,
}

impl TemplateName {
    pub const ALL: [TemplateName; 11] = [
        TemplateName::Helmignore,
        TemplateName::Chart,
        TemplateName::Values,
        TemplateName::Helpers,
        TemplateName::Project,
        TemplateName::Readme,
        TemplateName::ExampleApp,
        TemplateName::ExampleApplicationSet,
        TemplateName::DevValues,
        TemplateName::ProdValues,
        TemplateName::ApplicationSet,
    ];

    pub const fn id(&self) -> &'static str {
        match self {
            Self::Helmignore => "helmignore",
            Self::Chart => "chart",
            Self::Values => "values",
            Self::Helpers => "helpers",
            Self::Project => "project",
            Self::Readme => "readme",
            Self::ExampleApp => "example-app",
            Self::ExampleApplicationSet => "example-applicationset",
            Self::DevValues => "dev-values",
            Self::ProdValues => "prod-values",
            Self::ApplicationSet => "applicationset",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.id() == s)
            .ok_or_else(|| DomainError::InvalidTemplate {
                template: s.to_string(),
                reason: "no such template in the catalog".into(),
            })
    }
}

// ── Placeholder ──────────────────────────────────────────────────────────────

/// A substitution variable a template may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placeholder {
    ProjectName,
    ResourceName,
    CreatedDate,
}

impl Placeholder {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ProjectName => "PROJECT_NAME",
            Self::ResourceName => "RESOURCE_NAME",
            Self::CreatedDate => "CREATED_DATE",
        }
    }

    /// The literal text replaced during rendering, e.g. `{{PROJECT_NAME}}`.
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.key())
    }
}

// ── TemplateSource ───────────────────────────────────────────────────────────

/// Template text: borrowed from the binary or owned when loaded elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// A versioned, named text template from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: TemplateName,
    pub version: &'static str,
    pub description: &'static str,
    pub placeholders: Vec<Placeholder>,
    pub source: TemplateSource,
}

impl Template {
    pub fn new(name: TemplateName, source: TemplateSource) -> Self {
        Self {
            name,
            version: "1.0.0",
            description: "",
            placeholders: Vec::new(),
            source,
        }
    }

    pub fn version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        if !self.placeholders.contains(&placeholder) {
            self.placeholders.push(placeholder);
        }
        self
    }

    /// A template must have content, and every placeholder it declares
    /// must actually occur in that content.
    pub fn validate(&self) -> Result<(), DomainError> {
        let text = self.source.as_str();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidTemplate {
                template: self.name.to_string(),
                reason: "template has no content".into(),
            });
        }

        for placeholder in &self.placeholders {
            if !text.contains(&placeholder.token()) {
                return Err(DomainError::InvalidTemplate {
                    template: self.name.to_string(),
                    reason: format!("declares {} but never uses it", placeholder.token()),
                });
            }
        }

        Ok(())
    }
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Context for template rendering.
///
/// A **Value Object** holding the substitution values. The creation date is
/// always supplied by the caller; nothing here reads the clock, so the same
/// context renders the same template to byte-identical output.
///
/// | Variable        | Example        | Source                       |
/// |-----------------|----------------|------------------------------|
/// | `PROJECT_NAME`  | "payments"     | init form / `--project`      |
/// | `RESOURCE_NAME` | "my-apps"      | new-resource form / argument |
/// | `CREATED_DATE`  | "2026-10-19"   | injected `Clock`             |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<Placeholder, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying every value the given parameters can provide.
    pub fn for_parameters(params: &ResolvedParameters, created: NaiveDate) -> Self {
        let ctx = Self::new().with_created_date(created);
        match params {
            ResolvedParameters::Init(p) => ctx.with(Placeholder::ProjectName, p.project_name()),
            ResolvedParameters::NewResource(p) => {
                ctx.with(Placeholder::ResourceName, p.resource_name())
            }
        }
    }

    /// Add a variable, consuming self and returning the new context.
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.variables.insert(placeholder, value.into());
        self
    }

    pub fn with_created_date(self, date: NaiveDate) -> Self {
        self.with(Placeholder::CreatedDate, date.format("%Y-%m-%d").to_string())
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.variables.get(&placeholder).map(String::as_str)
    }

    /// Render a template by replacing its declared placeholders.
    ///
    /// # Edge Cases
    ///
    /// - a declared placeholder without a value → [`DomainError::MissingVariable`]
    /// - `{{UNKNOWN}}` or Helm's `{{ .Values.x }}` → left as-is
    /// - variables the template did not declare are ignored
    /// - substituted values are never scanned again, so a value that looks
    ///   like a token stays literal
    pub fn render(&self, template: &Template) -> Result<String, DomainError> {
        let substitutions = template
            .placeholders
            .iter()
            .map(|placeholder| {
                self.get(*placeholder)
                    .map(|value| (placeholder.token(), value))
                    .ok_or_else(|| DomainError::MissingVariable {
                        template: template.name.to_string(),
                        placeholder: placeholder.key(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut rest = template.source.as_str();
        let mut result = String::with_capacity(rest.len());
        loop {
            let next = substitutions
                .iter()
                .filter_map(|(token, value)| rest.find(token.as_str()).map(|at| (at, token, value)))
                .min_by_key(|(at, ..)| *at);
            let Some((at, token, value)) = next else {
                break;
            };
            result.push_str(&rest[..at]);
            result.push_str(value);
            rest = &rest[at + token.len()..];
        }
        result.push_str(rest);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Template {
        Template::new(
            TemplateName::Chart,
            TemplateSource::Static("name: {{PROJECT_NAME}}\ncreated: {{CREATED_DATE}}\n"),
        )
        .placeholder(Placeholder::ProjectName)
        .placeholder(Placeholder::CreatedDate)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn renders_declared_placeholders() {
        let ctx = RenderContext::new()
            .with(Placeholder::ProjectName, "payments")
            .with_created_date(date());

        let out = ctx.render(&chart()).unwrap();
        assert_eq!(out, "name: payments\ncreated: 2026-10-19\n");
    }

    #[test]
    fn helm_expressions_survive() {
        let template = Template::new(
            TemplateName::ApplicationSet,
            TemplateSource::Static(
                "name: {{RESOURCE_NAME}}\nrepoURL: {{ .Values.global.repoURL }}\npath: '{{ \"{{ path }}\" }}'\n",
            ),
        )
        .placeholder(Placeholder::ResourceName);

        let out = RenderContext::new()
            .with(Placeholder::ResourceName, "my-apps")
            .render(&template)
            .unwrap();

        assert!(out.contains("name: my-apps"));
        assert!(out.contains("{{ .Values.global.repoURL }}"));
        assert!(out.contains("'{{ \"{{ path }}\" }}'"));
    }

    #[test]
    fn missing_variable_is_an_error() {
        let ctx = RenderContext::new().with(Placeholder::ProjectName, "payments");
        let err = ctx.render(&chart()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingVariable {
                template: "chart".into(),
                placeholder: "CREATED_DATE",
            }
        );
    }

    #[test]
    fn values_that_look_like_tokens_stay_literal() {
        let ctx = RenderContext::new()
            .with(Placeholder::ProjectName, "{{CREATED_DATE}}")
            .with_created_date(date());

        let out = ctx.render(&chart()).unwrap();
        assert_eq!(out, "name: {{CREATED_DATE}}\ncreated: 2026-10-19\n");
    }

    #[test]
    fn rendering_is_repeatable() {
        let ctx = RenderContext::new()
            .with(Placeholder::ProjectName, "payments")
            .with_created_date(date());
        assert_eq!(ctx.render(&chart()).unwrap(), ctx.render(&chart()).unwrap());
    }

    #[test]
    fn validate_rejects_unused_declaration() {
        let template = Template::new(TemplateName::Readme, TemplateSource::Static("# Title\n"))
            .placeholder(Placeholder::ProjectName);
        assert!(matches!(
            template.validate(),
            Err(DomainError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty() {
        let template = Template::new(TemplateName::Readme, TemplateSource::Owned("  \n".into()));
        assert!(template.validate().is_err());
    }

    #[test]
    fn template_name_round_trips_through_id() {
        for name in TemplateName::ALL {
            assert_eq!(name.id().parse::<TemplateName>().unwrap(), name);
        }
    }
}
