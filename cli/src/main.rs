use actorpath::logging::init_tracing;
use actorpath::{ActorPathApp, Args};
use clap::Parser;

fn main() {
    let Args {
        command,
        no_color,
        verbose,
    } = Args::parse();

    init_tracing(verbose);
    let app = ActorPathApp::new(!no_color, verbose);

    if let Err(error) = app.run(command) {
        eprintln!("{}", app.colors().error(&format!("❌ Error: {error:#}")));
        std::process::exit(1);
    }
}
