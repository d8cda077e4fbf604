//! Rendering of user-facing errors in the selected log format.

use bebopc_flags::{COMPILER_NAME, LogFormatter};
use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Serialize)]
struct Diagnostic<'a> {
    severity: Severity,
    message: &'a str,
}

/// Formats one diagnostic line (without a trailing newline).
///
/// `structured` yields `{"severity":"error","message":"..."}`; `msbuild`
/// yields `bebopc : error : ...`.
pub fn render(format: LogFormatter, severity: Severity, message: &str) -> String {
    match format {
        LogFormatter::Structured => serde_json::to_string(&Diagnostic { severity, message })
            .unwrap_or_else(|_| format!("{}: {message}", severity.as_str())),
        LogFormatter::MSBuild => {
            format!("{COMPILER_NAME} : {} : {message}", severity.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_structured_is_json() {
        let line = render(
            LogFormatter::Structured,
            Severity::Error,
            "Commandline flag 'cs' was not assigned a value.",
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(
            value["message"],
            "Commandline flag 'cs' was not assigned a value."
        );
    }

    #[test]
    fn test_render_structured_escapes_quotes() {
        let line = render(LogFormatter::Structured, Severity::Warning, "say \"hi\"");
        assert_eq!(line, r#"{"severity":"warning","message":"say \"hi\""}"#);
    }

    #[test]
    fn test_render_msbuild() {
        let line = render(
            LogFormatter::MSBuild,
            Severity::Error,
            "No commandline flags found.",
        );
        assert_eq!(line, "bebopc : error : No commandline flags found.");
    }
}
