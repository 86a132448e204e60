use std::io::{stdout, Write};

use crossterm::style::Stylize;

use entrench::{
    base::specific::BeliefBase,
    builder::ChangeOk,
    config::OrderValue,
    structures::expression::Expr,
    types::err::{OrderError, ParseError},
};

mod parse_args;

fn main() {
    let matches = parse_args::cli().get_matches();

    let filter = match matches.get_flag("debug") {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    };
    env_logger::Builder::new().filter_level(filter).init();

    let mut base = BeliefBase::default();

    print_help();

    loop {
        let Some(action) = prompt("Select action: ") else {
            break;
        };

        match action.as_str() {
            "r" => {
                let Some((expr, order)) = formula_and_order() else {
                    continue;
                };
                match base.revise(&expr, order, true) {
                    Ok(ChangeOk::Applied) => println!("Revised by {expr}."),
                    Ok(ChangeOk::Contradiction) => {
                        println!("{expr} is a contradiction, the base is unchanged.")
                    }
                    Err(OrderError::OutOfRange) => {
                        println!("An order must be a value from 0 to 1.")
                    }
                }
            }

            "a" => {
                let Some((expr, order)) = formula_and_order() else {
                    continue;
                };
                match base.add(&expr, order) {
                    Ok(_) => println!("Set {expr} to order {order}."),
                    Err(OrderError::OutOfRange) => {
                        println!("An order must be a value from 0 to 1.")
                    }
                }
            }

            "d" => {
                let Some(expr) = formula() else {
                    continue;
                };
                println!("The degree of {expr} is {}.", base.degree(&expr));
            }

            "e" => {
                base.clear();
                println!("Emptied the base.");
            }

            "p" => println!("{base}"),

            "h" => print_help(),

            "q" => break,

            _ => println!("Unrecognised action {action:?}, h lists the actions."),
        }
    }
}

fn print_help() {
    println!("Actions:");
    println!("  {}  revise the base by a formula at an order", "r".bold());
    println!("  {}  add a belief without re-ranking the base", "a".bold());
    println!("  {}  show the degree of belief of a formula", "d".bold());
    println!("  {}  empty the base", "e".bold());
    println!("  {}  print the base", "p".bold());
    println!("  {}  print this help", "h".bold());
    println!("  {}  quit", "q".bold());
    println!();
    println!(
        "Formulas are built from atoms with ~ & | -> <-> and parentheses, e.g. {}.",
        "rain -> wet".italic()
    );
}

/// A line of input in response to `query`, trimmed, or None once input is closed.
fn prompt(query: &str) -> Option<String> {
    print!("{}", query.bold());
    stdout().flush().unwrap();

    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_owned()),
    }
}

fn formula() -> Option<Expr> {
    let text = prompt("Formula: ")?;
    match text.parse::<Expr>() {
        Ok(expr) => Some(expr),
        Err(error) => {
            report_parse_error(&text, error);
            None
        }
    }
}

fn formula_and_order() -> Option<(Expr, OrderValue)> {
    let expr = formula()?;
    let text = prompt("Order (a value from 0 to 1): ")?;
    match text.parse::<OrderValue>() {
        Ok(order) => Some((expr, order)),
        Err(_) => {
            println!("Unable to read an order from {text:?}.");
            None
        }
    }
}

fn report_parse_error(text: &str, error: ParseError) {
    match error {
        ParseError::Empty => println!("No formula given."),
        ParseError::UnexpectedCharacter(position) => {
            println!("Unexpected character at position {position} of {text:?}.")
        }
        ParseError::UnbalancedParenthesis(position) => {
            println!("Expected a closing parenthesis at position {position} of {text:?}.")
        }
        ParseError::MissingOperand(position) => {
            println!("An operand is missing at position {position} of {text:?}.")
        }
        ParseError::TrailingInput(position) => {
            println!("Unable to read past position {position} of {text:?}.")
        }
    }
}
