extern crate iapprs;

use env_logger::{
    Builder,
    Target,
};
use iapprs::parser::Parser;
use log::LevelFilter;
use std::{
    env,
    fs,
    process,
};

// flip this on to see each extraction step as it happens
const ENABLE_LOGGING: bool = false;
const DEFAULT_TEMPLATE_PATH: &str = "tests/fixtures/full.tmpl";

/// Enable (or not) some logging for our example.
fn enable_logging() {
    if !ENABLE_LOGGING {
        return;
    }

    env::set_var("RUST_LOG", "TRACE");

    let mut builder = Builder::from_default_env();

    builder.target(Target::Stdout);
    builder.filter_level(LevelFilter::Trace);

    builder.init();
}

/// Read a template file (first argument, or the bundled fixture), parse it, and print the rest api
/// payload as json.
fn main() {
    enable_logging();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_owned());

    let text = fs::read_to_string(&path).expect("failed reading template file");

    let parser = Parser::new(&text).expect("template file is empty");

    let template = match parser.parse() {
        Ok(template) => template,
        Err(err) => {
            eprintln!("failed parsing template '{path}', fix the syntax and resubmit: {err}");

            process::exit(1);
        }
    };

    println!(
        "parsed template '{}' with {} definition section(s)",
        template.name,
        template.actions.definition.len()
    );

    println!(
        "{}",
        template
            .to_json_pretty()
            .expect("failed encoding template as json")
    );
}
