use super::constants::{
    Field,
    Requirement,
    TEMPLATE_SECTIONS,
};
use super::parser::Scratch;
use super::scanner::{
    find_section_end,
    find_section_start,
};
use super::tcl::to_value;
use crate::errors::IappError;
use crate::util::strings::excise;
use log::{
    debug,
    trace,
};

/// Extracts every known definition section, in table order, into `actions.definition`.
///
/// # Errors
///
/// Returns `IappError::SectionNotFound` for a missing required section, or any error from
/// scanning or converting a section that is present.
pub fn extract_sections(scratch: Scratch) -> Result<Scratch, IappError> {
    TEMPLATE_SECTIONS.iter().try_fold(scratch, extract_section)
}

fn extract_section(
    mut scratch: Scratch,
    field: &Field,
) -> Result<Scratch, IappError> {
    let start = match find_section_start(&scratch.text, field.name) {
        Ok(start) => start,
        Err(err) if err.is_not_found() && field.requirement == Requirement::Optional => {
            debug!("optional section '{}' not present, skipping", field.name);

            return Ok(scratch);
        }
        Err(err) => return Err(err),
    };

    let end = find_section_end(&scratch.text, field.name, start)?;

    let value = to_value(
        field,
        scratch.text.get(start + 1..end).unwrap_or_default().trim(),
    )?;

    trace!(
        "extracted section '{}' as '{}' spanning {start}..={end}",
        field.name,
        field.key
    );

    scratch
        .template
        .actions
        .definition
        .insert(field.key.to_owned(), value);
    scratch.text = excise(&scratch.text, start, end + 1);

    Ok(scratch)
}
