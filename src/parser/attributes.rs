use super::constants::{
    Field,
    TEMPLATE_ATTRS,
};
use super::parser::Scratch;
use super::patterns::attribute_pattern;
use super::tcl::to_value;
use crate::errors::IappError;
use crate::util::strings::excise;
use log::trace;

/// Extracts every known top level attribute still present in the (section free) scratch text.
/// Missing attributes are skipped.
///
/// # Errors
///
/// Returns `IappError::MalformedTclList` if a list valued attribute can not be parsed.
pub fn extract_attributes(scratch: Scratch) -> Result<Scratch, IappError> {
    TEMPLATE_ATTRS.iter().try_fold(scratch, extract_attribute)
}

fn extract_attribute(
    mut scratch: Scratch,
    field: &Field,
) -> Result<Scratch, IappError> {
    let pattern = attribute_pattern(field.name);

    let Some(caps) = pattern.captures(&scratch.text) else {
        return Ok(scratch);
    };

    let (Some(line), Some(raw)) = (caps.get(0), caps.name("value")) else {
        return Ok(scratch);
    };

    let (start, end) = (line.start(), line.end());
    let value = to_value(field, raw.as_str().trim())?;

    trace!("extracted attribute '{}' as '{}'", field.name, field.key);

    scratch
        .template
        .attributes
        .insert(field.key.to_owned(), value);
    scratch.text = excise(&scratch.text, start, end);

    Ok(scratch)
}
