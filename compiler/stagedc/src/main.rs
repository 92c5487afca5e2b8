//! Staged C Container Generator CLI

use stagedc::commands::{generate_file, parse_gen_options, show_names};

fn main() {
    stagedc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "gen" => {
            if args.len() < 3 {
                eprintln!("Usage: stagedc gen <manifest.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <path>          Output header (default: stdout)");
                eprintln!("  --prefix=<p>       Override the manifest prefix");
                eprintln!("  --no-arena         Omit the core.h arena preamble");
                std::process::exit(1);
            }

            let result = parse_gen_options(&args[2..]).and_then(|options| generate_file(&options));
            if let Err(e) = result {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "names" => {
            if args.len() != 4 {
                eprintln!("Usage: stagedc names <prefix> <type>");
                eprintln!();
                eprintln!("Use \"\" for an empty prefix.");
                std::process::exit(1);
            }

            match show_names(&args[2], &args[3]) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stagedc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Staged C container generator");
    println!();
    println!("Usage: stagedc <command> [options]");
    println!();
    println!("Commands:");
    println!("  gen <manifest.json>    Emit a C header for every request in the manifest");
    println!("  names <prefix> <type>  Show the identifier spellings derived for a type");
    println!("  help                   Show this message");
    println!("  version                Show version information");
    println!();
    println!("Set RUST_LOG=staged_codegen=debug to trace emission.");
}
