mod error;

use error::Error;
use mathcheck_compute::canonicalize::get_canonicalizer;
use mathcheck_parser::ast::{Entity, ExpectedKind};
use mathcheck_parser::parser::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, IsTerminal, Read};

/// Parses and canonicalizes the given input string, returning the normalized entity and its
/// normal form.
fn parse_canonicalize(input: &str) -> Result<(Entity, Entity), Error> {
    let entity = Parser::new(input).parse_entity(ExpectedKind::Any)?;
    let canonicalizer = get_canonicalizer(entity.kind());
    let normalized = canonicalizer.normalize(&entity)?;
    let normal = canonicalizer.normal_form(&normalized)?;
    Ok((normalized, normal))
}

/// Parses and canonicalizes the input, printing the success or failure.
fn read_canonicalize(input: &str) {
    match parse_canonicalize(input) {
        Ok((normalized, normal)) => {
            println!("normalized:  {}", normalized);
            println!("normal form: {}", normal);
            if let Entity::Expression(expr) = &normal {
                if let Some(degree) = expr.degree() {
                    println!("degree:      {}", degree);
                }
            }
        }
        Err(err) => err.report_to_stderr(input),
    }
}

fn main() {
    if !io::stdin().is_terminal() {
        // read input from stdin, one entity per line
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            read_canonicalize(line);
        }
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            read_canonicalize(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
