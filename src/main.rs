use std::process;

use basic_functions::demo;
use basic_functions::logging::init_logging;

fn main() {
    init_logging();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    if let Err(e) = demo::run(&mut writer) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
