use super::constants::{
    CLOSE_BRACE,
    ESCAPE,
    OPEN_BRACE,
    QUOTE,
};
use super::patterns::section_start_pattern;
use crate::errors::IappError;
use log::trace;

/// Returns the byte index of the opening brace of the named section (or script) body -- the
/// first place the name is followed by optional whitespace and a `{`.
///
/// # Errors
///
/// Returns `IappError::SectionNotFound` if the name is not followed by a brace anywhere in `text`.
/// Callers decide if that is fatal.
pub fn find_section_start(
    text: &str,
    section: &str,
) -> Result<usize, IappError> {
    section_start_pattern(section)
        .find(text)
        .map(|m| m.end() - OPEN_BRACE.len_utf8())
        .ok_or_else(|| IappError::section_not_found(section))
}

/// Returns the byte index of the brace closing the body opened at `section_start`.
///
/// Braces inside double quotes do not count. A backslash only keeps the character after it from
/// toggling the quote state, nothing else about escaping is checked.
///
/// # Errors
///
/// Returns `IappError::CurlyBraceMismatch` if the text runs out (or a stray closing brace shows
/// up) before the braces balance.
pub fn find_section_end(
    text: &str,
    section: &str,
    section_start: usize,
) -> Result<usize, IappError> {
    let body = text
        .get(section_start..)
        .ok_or_else(|| IappError::curly_brace_mismatch(section))?;

    let mut brace_count: usize = 0;
    let mut in_quote = false;
    let mut in_escape = false;

    for (idx, c) in body.char_indices() {
        let escaped = in_escape;
        in_escape = c == ESCAPE && !escaped;

        if c == QUOTE {
            if !escaped {
                in_quote = !in_quote;
            }

            continue;
        }

        if in_quote {
            continue;
        }

        if c == OPEN_BRACE {
            brace_count += 1;
        } else if c == CLOSE_BRACE {
            brace_count = brace_count
                .checked_sub(1)
                .ok_or_else(|| IappError::curly_brace_mismatch(section))?;

            if brace_count == 0 {
                trace!("section '{section}' closes at index {}", section_start + idx);

                return Ok(section_start + idx);
            }
        }
    }

    Err(IappError::curly_brace_mismatch(section))
}
