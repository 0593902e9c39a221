// Formuline: single-line formula interpreter

use std::process;

use formuline::run;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("formuline");
        eprintln!("Error: No formula provided");
        eprintln!();
        eprintln!("Usage: {} '<ident> = <expression>'", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} 'A = 2 + 3 * 4'", program_name);
        eprintln!("  {} 'B = (8 / 10) + 9'", program_name);
        process::exit(1);
    }

    // Join the remaining arguments so an unquoted formula still works.
    let source = args[1..].join(" ");

    match run(&source) {
        Ok((name, value)) => println!("{} = {}", name, value),
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Some(column) = err.column() {
                eprintln!("  {}", source);
                eprintln!("  {}^", " ".repeat(column.saturating_sub(1)));
            }
            process::exit(1);
        }
    }
}
