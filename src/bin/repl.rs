use d20_notation::Evaluator;
use std::io::{self, BufRead, Write};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let evaluator = Evaluator::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        match evaluator.roll(&line) {
            Ok(r) => println!("{}", r),
            Err(why) => eprintln!("Error: {}", why),
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
