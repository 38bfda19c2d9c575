//! The template catalog compiled into the binary.
//!
//! Every file the scaffolder writes comes from one of these texts. They are
//! Helm chart sources, so most `{{ ... }}` in them belong to Helm and pass
//! through rendering untouched; only `{{PROJECT_NAME}}`, `{{RESOURCE_NAME}}`
//! and `{{CREATED_DATE}}` are substituted.

use argo_helper_core::domain::{Placeholder, Template, TemplateName, TemplateSource};

const VERSION: &str = "1.0.0";

/// Every built-in template, in catalog order.
pub fn all_templates() -> Vec<Template> {
    TemplateName::ALL.into_iter().map(builtin).collect()
}

/// The built-in template for one catalog entry.
pub fn builtin(name: TemplateName) -> Template {
    use Placeholder::*;

    let (text, description, placeholders): (&'static str, &'static str, &[Placeholder]) =
        match name {
            TemplateName::Helmignore => (HELMIGNORE, "Patterns Helm ignores when packaging", &[]),
            TemplateName::Chart => (
                CHART,
                "Chart metadata for the repository",
                &[ProjectName, CreatedDate],
            ),
            TemplateName::Values => (VALUES, "Default chart values", &[ProjectName]),
            TemplateName::Helpers => (HELPERS, "Shared label and naming helpers", &[]),
            TemplateName::Project => (PROJECT, "ArgoCD AppProject", &[]),
            TemplateName::Readme => (README, "Repository overview", &[ProjectName]),
            TemplateName::ExampleApp => (EXAMPLE_APP, "Example ArgoCD Application", &[]),
            TemplateName::ExampleApplicationSet => (
                EXAMPLE_APPLICATIONSET,
                "Example git-directory ApplicationSet",
                &[],
            ),
            TemplateName::DevValues => {
                (DEV_VALUES, "Development environment values", &[ProjectName])
            }
            TemplateName::ProdValues => {
                (PROD_VALUES, "Production environment values", &[ProjectName])
            }
            TemplateName::ApplicationSet => (
                APPLICATIONSET,
                "Standalone ApplicationSet manifest",
                &[ResourceName],
            ),
        };

    placeholders.iter().fold(
        Template::new(name, TemplateSource::Static(text))
            .version(VERSION)
            .description(description),
        |template, p| template.placeholder(*p),
    )
}

// ── Repository skeleton ──────────────────────────────────────────────────────

const HELMIGNORE: &str = r##"# Patterns to ignore when building packages.
*.tgz
*.lock
.DS_Store
.git/
.gitignore
.vscode/
*.swp
*.bak
"##;

const CHART: &str = r##"apiVersion: v2
name: {{PROJECT_NAME}}
description: ArgoCD applications and projects for {{PROJECT_NAME}}
type: application
version: 0.1.0
appVersion: "1.0.0"
maintainers:
  - name: {{PROJECT_NAME}} Team
created: {{CREATED_DATE}}
"##;

const VALUES: &str = r##"# Default values for {{PROJECT_NAME}} ArgoCD applications

# Global settings
global:
  environment: dev
  project: {{PROJECT_NAME}}
  repoURL: ""  # Set this to your Git repository URL
  targetRevision: HEAD

# ArgoCD Project settings
project:
  description: "{{PROJECT_NAME}} ArgoCD Project"
  sourceRepos:
    - "*"  # Adjust based on your security requirements
  destinations:
    - namespace: "*"
      server: "https://kubernetes.default.svc"
  clusterResourceWhitelist:
    - group: "*"
      kind: "*"

# Application defaults
applications:
  defaults:
    syncPolicy:
      automated:
        prune: true
        selfHeal: true
      syncOptions:
        - CreateNamespace=true
"##;

const HELPERS: &str = r##"{{/*
Common labels
*/}}
{{- define "common.labels" -}}
app.kubernetes.io/managed-by: argocd
app.kubernetes.io/instance: {{ .Release.Name }}
app.kubernetes.io/part-of: {{ .Values.global.project }}
{{- end }}

{{/*
Generate application name
*/}}
{{- define "common.appName" -}}
{{- $name := default .Chart.Name .Values.nameOverride -}}
{{- printf "%s-%s" .Values.global.project $name | trunc 63 | trimSuffix "-" -}}
{{- end -}}

{{/*
Generate project name
*/}}
{{- define "common.projectName" -}}
{{- printf "%s" .Values.global.project -}}
{{- end -}}
"##;

const PROJECT: &str = r##"{{- $projectName := include "common.projectName" . -}}
apiVersion: argoproj.io/v1alpha1
kind: AppProject
metadata:
  name: {{ $projectName }}
  namespace: argocd
  labels:
    {{- include "common.labels" . | nindent 4 }}
spec:
  description: {{ .Values.project.description }}
  sourceRepos:
  {{- range .Values.project.sourceRepos }}
    - {{ . }}
  {{- end }}
  destinations:
  {{- range .Values.project.destinations }}
    - namespace: {{ .namespace }}
      server: {{ .server }}
  {{- end }}
  clusterResourceWhitelist:
  {{- range .Values.project.clusterResourceWhitelist }}
    - group: {{ .group }}
      kind: {{ .kind }}
  {{- end }}
"##;

const README: &str = r##"# {{PROJECT_NAME}} ArgoCD Repository

This repository contains the ArgoCD applications and projects for the {{PROJECT_NAME}} project, structured as a Helm chart.

## Structure

- `custom-resources/`: Contains Custom Resource Definitions (CRDs) if needed
- `values/`: Contains environment-specific values files
- `templates/`:
  - `apps/`: Application templates
  - `projects/`: Project templates
  - `_helpers.tpl`: Common template helpers
- `values.yaml`: Default values
- `Chart.yaml`: Chart metadata

## Usage

1. Update the `values.yaml` file with your repository URL and other settings
2. Add your application templates in `templates/apps/`
3. Add environment-specific values in `values/`
4. Use `helm template` to generate manifests or commit to your ArgoCD repository

## Adding New Applications

Create a new application template in `templates/apps/` following this pattern:

```yaml
apiVersion: argoproj.io/v1alpha1
kind: Application
metadata:
  name: {{ include "common.appName" . }}
  namespace: argocd
spec:
  project: {{ include "common.projectName" . }}
  source:
    repoURL: {{ .Values.global.repoURL }}
    targetRevision: {{ .Values.global.targetRevision }}
    path: apps/your-app
  destination:
    server: {{ .Values.destination.server }}
    namespace: {{ .Values.destination.namespace }}
  syncPolicy:
    {{- toYaml .Values.applications.defaults.syncPolicy | nindent 4 }}
```
"##;

// ── Examples ─────────────────────────────────────────────────────────────────

const EXAMPLE_APP: &str = r##"apiVersion: argoproj.io/v1alpha1
kind: Application
metadata:
  name: {{ include "common.appName" . }}-example
  namespace: argocd
  labels:
    {{- include "common.labels" . | nindent 4 }}
spec:
  project: {{ include "common.projectName" . }}
  source:
    repoURL: {{ .Values.global.repoURL }}
    targetRevision: {{ .Values.global.targetRevision }}
    path: apps/example-app
  destination:
    server: "{{ .Values.destination.server | default "https://kubernetes.default.svc" }}"
    namespace: example
  syncPolicy:
    {{- toYaml .Values.applications.defaults.syncPolicy | nindent 4 }}
"##;

const EXAMPLE_APPLICATIONSET: &str = r##"apiVersion: argoproj.io/v1alpha1
kind: ApplicationSet
metadata:
  name: {{ include "common.projectName" . }}-apps
  namespace: argocd
spec:
  generators:
    - git:
        repoURL: {{ .Values.global.repoURL }}
        revision: {{ .Values.global.targetRevision }}
        directories:
          - path: apps/*
  template:
    metadata:
      name: '{{ "{{path.basename}}" }}'
      labels:
        {{- include "common.labels" . | nindent 8 }}
    spec:
      project: {{ include "common.projectName" . }}
      source:
        repoURL: {{ .Values.global.repoURL }}
        targetRevision: {{ .Values.global.targetRevision }}
        path: '{{ "{{path}}" }}'
      destination:
        server: {{ .Values.destination.server | default "https://kubernetes.default.svc" }}
        namespace: '{{ "{{path.basename}}" }}'
      syncPolicy:
        {{- toYaml .Values.applications.defaults.syncPolicy | nindent 8 }}
"##;

const DEV_VALUES: &str = r##"# Development environment values for {{PROJECT_NAME}}

global:
  environment: dev

# Override specific application values for development
"##;

const PROD_VALUES: &str = r##"# Production environment values for {{PROJECT_NAME}}

global:
  environment: prod

# Override specific application values for production
# Make sure to be careful with production configurations
"##;

// ── Resources ────────────────────────────────────────────────────────────────

const APPLICATIONSET: &str = r##"apiVersion: argoproj.io/v1alpha1
kind: ApplicationSet
metadata:
  name: {{RESOURCE_NAME}}
  namespace: argocd
spec:
  generators:
    - git:
        repoURL: {{ .Values.global.repoURL }}
        revision: {{ .Values.global.targetRevision }}
        directories:
          - path: apps/*
  template:
    metadata:
      name: '{{ "{{ path.basename }}" }}'
      labels:
        {{- include "common.labels" . | nindent 8 }}
    spec:
      project: {{ include "common.projectName" . }}
      source:
        repoURL: {{ .Values.global.repoURL }}
        targetRevision: {{ .Values.global.targetRevision }}
        path: '{{ "{{ path }}" }}'
      destination:
        server: {{ .Values.destination.server | default "https://kubernetes.default.svc" }}
        namespace: '{{ "{{ path.basename }}" }}'
      syncPolicy:
        {{- toYaml .Values.applications.defaults.syncPolicy | nindent 8 }}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_is_valid() {
        for template in all_templates() {
            template
                .validate()
                .unwrap_or_else(|e| panic!("{}: {e}", template.name));
        }
    }

    #[test]
    fn catalog_is_complete_and_ordered() {
        let names: Vec<_> = all_templates().into_iter().map(|t| t.name).collect();
        assert_eq!(names, TemplateName::ALL.to_vec());
    }

    #[test]
    fn helm_only_templates_declare_nothing() {
        assert!(builtin(TemplateName::Helpers).placeholders.is_empty());
        assert!(builtin(TemplateName::Project).placeholders.is_empty());
    }

    #[test]
    fn applicationset_names_the_resource() {
        let template = builtin(TemplateName::ApplicationSet);
        assert!(template.source.as_str().contains("  name: {{RESOURCE_NAME}}\n"));
        assert_eq!(template.placeholders, vec![Placeholder::ResourceName]);
    }
}
