use clsweep::Config;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match clsweep::run(&Config::default()) {
        Ok(report) => {
            if report.all_passed() {
                println!("Matrix-vector multiplication successful.");
            } else {
                println!("Matrix-vector multiplication unsuccessful.");
            }
        }
        Err(err) => {
            eprintln!("clsweep: {err}");
            process::exit(1);
        }
    }
}
