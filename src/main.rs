use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use ratsum::args::Output;
use ratsum::report::exec;
use std::{fs::File, io};

fn main() -> Result<()> {
    // The report may go to stdout, so log lines go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ratsum::args::parsed();

    match args.output {
        Output::Stdout => {
            let stdout = io::stdout();
            if stdout.is_terminal() {
                exec(&args.files, stdout.lock())?;
            } else {
                exec(&args.files, io::BufWriter::new(stdout.lock()))?;
            }
        }
        Output::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Can't create file: {}", path.display()))?;
            exec(&args.files, io::BufWriter::new(file))?;
        }
    }
    Ok(())
}
