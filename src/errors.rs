use thiserror::Error;

/// `IappError` is the base error for all iapprs errors. Every variant is terminal for the parse
/// that produced it -- nothing is retried and no partial result is handed back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IappError {
    /// The template text handed to the parser was empty.
    #[error("template empty or none value")]
    EmptyTemplate,
    /// A brace delimited body never returned to balance before the end of the text.
    #[error("curly brace mismatch in section '{section}'")]
    CurlyBraceMismatch {
        /// The section (or script) being scanned when the text ran out.
        section: String,
    },
    /// The start of a section (or script) body could not be located.
    #[error("section '{section}' not found in template")]
    SectionNotFound {
        /// The section (or script) that was searched for.
        section: String,
    },
    /// The `sys application template <name> {` header did not match.
    #[error("template name not found")]
    TemplateNameNotFound,
    /// A list valued attribute was neither a braced list nor the bare `none` token.
    #[error("tcl list for '{attribute}' is malformed, value: '{value}'")]
    MalformedTclList {
        /// The attribute or section holding the list.
        attribute: String,
        /// The offending raw value.
        value: String,
    },
    /// A parsed template could not be encoded to json or yaml.
    #[error("failed serializing parsed template, error: {details}")]
    Serialization {
        /// Details from the underlying encoder.
        details: String,
    },
}

impl IappError {
    /// Returns true if this error only means "the thing was not there" -- the condition optional
    /// sections and script blocks treat as a skip rather than a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SectionNotFound { .. })
    }

    pub(crate) fn section_not_found(section: &str) -> Self {
        Self::SectionNotFound {
            section: section.to_owned(),
        }
    }

    pub(crate) fn curly_brace_mismatch(section: &str) -> Self {
        Self::CurlyBraceMismatch {
            section: section.to_owned(),
        }
    }

    pub(crate) fn malformed_tcl_list(
        attribute: &str,
        value: &str,
    ) -> Self {
        Self::MalformedTclList {
            attribute: attribute.to_owned(),
            value: value.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_the_only_skippable_error() {
        assert!(IappError::section_not_found("macro").is_not_found());
        assert!(!IappError::curly_brace_mismatch("macro").is_not_found());
        assert!(!IappError::EmptyTemplate.is_not_found());
        assert!(!IappError::TemplateNameNotFound.is_not_found());
    }

    #[test]
    fn test_error_messages_name_the_section() {
        assert_eq!(
            IappError::section_not_found("presentation").to_string(),
            "section 'presentation' not found in template"
        );
        assert_eq!(
            IappError::curly_brace_mismatch("implementation").to_string(),
            "curly brace mismatch in section 'implementation'"
        );
    }
}
