use super::patterns::template_name_pattern;
use crate::errors::IappError;

/// Returns the name declared on the `sys application template` header, without any
/// `/Partition/` prefix.
///
/// # Errors
///
/// Returns `IappError::TemplateNameNotFound` if there is no header, or the name holds characters
/// other than word characters, dots and hyphens.
pub fn extract_name(text: &str) -> Result<String, IappError> {
    template_name_pattern()
        .captures(text)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str().to_owned())
        .ok_or(IappError::TemplateNameNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_variants() {
        for (text, want) in [
            ("sys application template good_templ {", "good_templ"),
            ("sys application template good.dot.templ {", "good.dot.templ"),
            ("sys application template good.-dot-hyphen.templ{", "good.-dot-hyphen.templ"),
            ("sys application template /Common/good_slashes_templ {", "good_slashes_templ"),
            ("sys application template\n  spaced {", "spaced"),
        ] {
            assert_eq!(extract_name(text), Ok(want.to_owned()), "input: {text}");
        }
    }

    #[test]
    fn test_bad_names() {
        for text in [
            "sys application template bad#name {",
            "sys application template {",
            "ltm virtual not_a_template {",
            "sys application template missing_brace",
        ] {
            assert_eq!(
                extract_name(text),
                Err(IappError::TemplateNameNotFound),
                "input: {text}"
            );
        }
    }
}
