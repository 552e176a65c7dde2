use super::attributes::extract_attributes;
use super::name::extract_name;
use super::scripts::extract_scripts;
use super::sections::extract_sections;
use crate::errors::IappError;
use crate::template::ParsedTemplate;
use log::{
    debug,
    info,
};

/// The working state threaded through the extraction steps -- the text left to search and the
/// template built up so far. Every step excises what it extracts from `text`.
pub struct Scratch {
    /// Text not yet claimed by an earlier step.
    pub text: String,
    /// The template accumulated so far.
    pub template: ParsedTemplate,
}

type Step = fn(Scratch) -> Result<Scratch, IappError>;

/// Extraction steps, in the order they must run: scripts first so their bodies never match as
/// sections, sections before attributes so section bodies never match as attributes.
const STEPS: [(&str, Step); 3] = [
    ("scripts", extract_scripts),
    ("sections", extract_sections),
    ("attributes", extract_attributes),
];

/// The iapp template `Parser` -- holds the raw template text and turns it into a
/// `ParsedTemplate`.
#[derive(Debug, Clone)]
pub struct Parser {
    template_str: String,
}

impl Parser {
    /// Returns a new `Parser` for the given template text.
    ///
    /// # Errors
    ///
    /// Returns `IappError::EmptyTemplate` if `template_str` is empty.
    pub fn new(template_str: &str) -> Result<Self, IappError> {
        if template_str.is_empty() {
            return Err(IappError::EmptyTemplate);
        }

        Ok(Self {
            template_str: template_str.to_owned(),
        })
    }

    /// Returns the raw template text the parser was created with.
    #[must_use]
    pub fn template_str(&self) -> &str {
        &self.template_str
    }

    /// Parse the template. Each call works on its own scratch copy of the text, the parser itself
    /// is never modified.
    ///
    /// # Errors
    ///
    /// Returns `IappError::TemplateNameNotFound` if the header is missing,
    /// `IappError::SectionNotFound` if a required section is missing,
    /// `IappError::CurlyBraceMismatch` if any body is unbalanced, and
    /// `IappError::MalformedTclList` if a list valued field can not be parsed.
    pub fn parse(&self) -> Result<ParsedTemplate, IappError> {
        let name = extract_name(&self.template_str)?;

        debug!("parsing template '{name}'");

        let scratch = Scratch {
            text: self.template_str.clone(),
            template: ParsedTemplate::new(&name),
        };

        let scratch = STEPS.iter().try_fold(scratch, |scratch, (phase, step)| {
            debug!("template '{name}' extracting {phase}");

            step(scratch)
        })?;

        info!(
            "template '{name}' parsed, {} section(s), {} attribute(s), {} script(s)",
            scratch.template.actions.definition.len(),
            scratch.template.attributes.len(),
            scratch.template.scripts.as_ref().map_or(0, Vec::len)
        );

        Ok(scratch.template)
    }
}

/// Convenience function to build a `Parser` and parse the given template text in one go.
///
/// # Errors
///
/// Returns any error `Parser::new` or `Parser::parse` can return.
pub fn parse_template(template_str: &str) -> Result<ParsedTemplate, IappError> {
    Parser::new(template_str)?.parse()
}
