use super::parser::Scratch;
use super::patterns::cli_script_pattern;
use super::scanner::{
    find_section_end,
    find_section_start,
};
use crate::errors::IappError;
use crate::template::Script;
use crate::util::strings::excise;
use log::{
    debug,
    trace,
};

/// Pulls every `cli script <name> { ... }` block out of the scratch text, in file order. Each
/// block is excised (braces included) before the next header is searched for, so matches are
/// always made against the current text.
///
/// # Errors
///
/// Returns `IappError::CurlyBraceMismatch` if a script body never closes.
pub fn extract_scripts(mut scratch: Scratch) -> Result<Scratch, IappError> {
    let mut search_from: usize = 0;

    loop {
        let Some(remaining) = scratch.text.get(search_from..) else {
            break;
        };

        let Some(caps) = cli_script_pattern().captures(remaining) else {
            break;
        };

        let (Some(header), Some(name)) = (caps.get(0), caps.name("name")) else {
            break;
        };

        let header_start = search_from + header.start();
        let header_end = search_from + header.end();
        let name = name.as_str().to_owned();

        let located = scratch
            .text
            .get(header_start..)
            .ok_or_else(|| IappError::section_not_found(&name))
            .and_then(|t| find_section_start(t, &name));

        let start = match located {
            Ok(start) => header_start + start,
            Err(err) if err.is_not_found() => {
                debug!("script '{name}' body not found, skipping");

                search_from = header_end;

                continue;
            }
            Err(err) => return Err(err),
        };

        let end = find_section_end(&scratch.text, &name, start)?;

        let body = scratch
            .text
            .get(start + 1..end)
            .unwrap_or_default()
            .trim()
            .to_owned();

        trace!("extracted script '{name}' spanning {start}..={end}");

        scratch.template.push_script(Script { name, script: body });
        scratch.text = excise(&scratch.text, start, end + 1);
    }

    Ok(scratch)
}
