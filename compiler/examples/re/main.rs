use std::io::{self, BufRead};

use thompson_compiler::{compile, parser::parse, postfix::to_postfix};

const USAGE: &str = "re [--debug] PATTERN";

fn main() -> Result<(), String> {
    env_logger::init();

    let (debug, args) = std::env::args()
        .skip(1)
        .fold((false, vec![]), |(debug, mut args), arg| {
            if arg == "--debug" || arg == "-d" {
                (true, args)
            } else {
                args.push(arg);
                (debug, args)
            }
        });

    let pattern = match args.as_slice() {
        [pattern] => Ok(pattern.as_str()),
        _ => Err(USAGE.to_string()),
    }?;

    let automaton = compile(pattern).map_err(|e| e.to_string())?;

    if debug {
        let postfix = parse(pattern.trim())
            .map(|tokens| to_postfix(&tokens).to_string())
            .map_err(|e| e.to_string())?;

        println!(
            "DEBUG
--------
postfix: {}
--------
{}--------
",
            postfix, automaton
        )
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) if thompson_runtime::matches(&automaton, &line) => println!("{}", line),
            Ok(_) => continue,
            Err(e) => return Err(format!("{}", e)),
        }
    }

    Ok(())
}
