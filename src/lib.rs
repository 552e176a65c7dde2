#![deny(clippy::all)]
#![deny(clippy::cargo)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![deny(clippy::perf)]
#![deny(clippy::style)]
#![deny(clippy::suspicious)]
#![deny(missing_docs)]
#![warn(clippy::multiple_crate_versions)]
// restriction is wild, but some good things for consistency in there, rather would allow things
// explicitly so any new lints pop up and annoy if they get added and then can decide to keep or
// ditch them!
#![warn(clippy::restriction)]
#![allow(clippy::implicit_return)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::question_mark_used)]
#![allow(clippy::separated_literal_suffix)]
#![allow(clippy::missing_inline_in_public_items)]
#![allow(clippy::exhaustive_enums)]
#![allow(clippy::exhaustive_structs)]
#![allow(clippy::self_named_module_files)]
#![allow(clippy::multiple_inherent_impl)]
#![allow(clippy::partial_pub_fields)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::blanket_clippy_restriction_lints)]
#![allow(clippy::std_instead_of_core)]
#![allow(clippy::single_char_lifetime_names)]
#![allow(clippy::missing_trait_methods)]
#![allow(clippy::as_conversions)]
#![allow(clippy::shadow_unrelated)]
#![allow(clippy::unwrap_in_result)]
#![allow(clippy::pub_use)]
#![allow(clippy::arithmetic_side_effects)]

//! iapprs parses bigip iapp templates (`.tmpl` files) into the structured form the bigip rest api
//! expects when creating a `sys application template`.
//!
//! ```no_run
//! let text = std::fs::read_to_string("f5.http.tmpl").expect("readable template");
//! let template = iapprs::parser::parse_template(&text).expect("valid template");
//!
//! println!("{}", template.to_json_pretty().expect("encodable template"));
//! ```

/// iapprs errors.
pub mod errors;

/// The template parser -- a pipeline that pulls the name, `cli script` blocks, definition
/// sections and top level attributes out of raw template text.
pub mod parser;

/// Module containing the parsed template objects -- that is, objects that are returned from a
/// successful parse and serialized for the rest api.
pub mod template;

/// iapprs utilities.
pub(crate) mod util {
    /// Some string helpers.
    pub(crate) mod strings;
}

pub use errors::IappError;
pub use parser::{
    parse_template,
    Parser,
};
pub use template::{
    ParsedTemplate,
    Script,
    Value,
};
