//! Interactive password checker REPL.
//!
//! Each input line is first screened by the threat monitor; only clean input
//! reaches the strength checks. A blocked origin terminates the session with
//! a non-zero exit status.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use secrecy::SecretString;

use pwd_guard::{analyze_password, StrengthRating, ThreatMonitor, Verdict};

const EXIT_COMMAND: &str = "exit";

fn main() -> ExitCode {
    // External list when present, built-in fallback otherwise.
    if let Err(err) = pwd_guard::init_blacklist() {
        eprintln!("Weak-password file unavailable ({err}); using built-in list.");
        pwd_guard::init_builtin_blacklist();
    }

    let monitor = ThreatMonitor::new();

    println!("The best password checker in the city");
    println!("#################");
    println!("Please enter a password!");
    println!("(Type '{EXIT_COMMAND}' to quit)\n");

    let stdin = io::stdin();
    loop {
        println!("Enter password");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        }
        let input = line.trim_end_matches(['\r', '\n']);

        if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            println!("Bye!");
            println!("\n{}", monitor.stats());
            break;
        }

        match monitor.classify(input) {
            Verdict::BlockedNow => {
                eprintln!("ACCESS DENIED - ORIGIN BLOCKED!");
                eprintln!("The program will now exit.");
                return ExitCode::FAILURE;
            }
            Verdict::WarnedFirstOffense => continue,
            Verdict::Clean => {}
        }

        let password = SecretString::new(input.to_string().into());
        let analysis = analyze_password(&password);

        println!("\n--- Password analysis ---");
        println!("Password: {input}");
        println!(
            "Minimum length ({} characters): {}",
            pwd_guard::MIN_LENGTH,
            mark(analysis.length_ok)
        );
        println!("Contains digit: {}", mark(analysis.has_digit));
        println!("Upper and lower case: {}", mark(analysis.has_mixed_case));
        println!("Special character: {}", mark(analysis.has_special));
        println!(
            "Known weak password: {}",
            if analysis.is_weak { "YES" } else { "no" }
        );
        println!("Character groups: {}/4", analysis.group_count);

        match analysis.rating() {
            StrengthRating::Strong => println!("\nSTRONG PASSWORD! All criteria met."),
            StrengthRating::Medium => println!("\nMEDIUM PASSWORD. Could be stronger."),
            StrengthRating::Weak => println!("\nWEAK PASSWORD! Please improve it."),
        }

        println!("\n{}\n", "=".repeat(40));
    }

    ExitCode::SUCCESS
}

fn mark(ok: bool) -> &'static str {
    if ok { "ok" } else { "MISSING" }
}
