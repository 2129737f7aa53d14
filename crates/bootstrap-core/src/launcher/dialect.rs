//! Rendering directives into a concrete script language

use super::Directive;
use crate::runtime::powershell::quote;

/// Target syntax for the launcher
pub trait ScriptDialect {
    /// Comment line(s) placed above the generated body
    fn header(&self, framework: &str, version: &str) -> String;

    /// One line of script for a directive
    fn render(&self, directive: &Directive) -> String;
}

/// PowerShell launcher syntax. Paths resolve against the launcher's own folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerShell;

impl PowerShell {
    fn script_path(path: &std::path::Path) -> String {
        format!(
            "(Join-Path $PSScriptRoot {})",
            quote(&path.to_string_lossy().replace('\\', "/"))
        )
    }

    /// `${global:NAME}`, with `}` and backticks escaped, so any setting name parses
    fn global_variable(name: &str) -> String {
        let mut escaped = String::with_capacity(name.len());
        for c in name.chars() {
            if matches!(c, '`' | '}') {
                escaped.push('`');
            }
            escaped.push(c);
        }
        format!("${{global:{}}}", escaped)
    }
}

impl ScriptDialect for PowerShell {
    fn header(&self, framework: &str, version: &str) -> String {
        format!(
            "# Generated by bootstrap for {} {}.\n# Do not edit: this file is rewritten on every run.\n",
            framework, version
        )
    }

    fn render(&self, directive: &Directive) -> String {
        match directive {
            Directive::Import { package } => format!("Import-Module -Name {}", quote(package)),
            Directive::Assign { name, value } => {
                format!("{} = {}", Self::global_variable(name), quote(value))
            }
            Directive::Load { script } => format!(". {}", Self::script_path(script)),
            Directive::Invoke { script } => format!("& {}", Self::script_path(script)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_each_directive() {
        let ps = PowerShell;
        assert_eq!(
            ps.render(&Directive::Import {
                package: "Pester".to_string()
            }),
            "Import-Module -Name 'Pester'"
        );
        assert_eq!(
            ps.render(&Directive::Assign {
                name: "MODE".to_string(),
                value: "it's fast".to_string()
            }),
            "${global:MODE} = 'it''s fast'"
        );
        assert_eq!(
            ps.render(&Directive::Load {
                script: PathBuf::from("modules/tools/init.ps1")
            }),
            ". (Join-Path $PSScriptRoot 'modules/tools/init.ps1')"
        );
        assert_eq!(
            ps.render(&Directive::Invoke {
                script: PathBuf::from("scripts/main.ps1")
            }),
            "& (Join-Path $PSScriptRoot 'scripts/main.ps1')"
        );
    }

    #[test]
    fn test_assign_keeps_unusual_setting_names_parseable() {
        let ps = PowerShell;
        assert_eq!(
            ps.render(&Directive::assign("log-level", "debug")),
            "${global:LOG-LEVEL} = 'debug'"
        );
        assert_eq!(
            ps.render(&Directive::assign("output dir", "C:/out")),
            "${global:OUTPUT DIR} = 'C:/out'"
        );
        assert_eq!(
            ps.render(&Directive::Assign {
                name: "ODD}`NAME".to_string(),
                value: "x".to_string()
            }),
            "${global:ODD`}``NAME} = 'x'"
        );
    }
}
