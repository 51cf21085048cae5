//! sched2ics main entrypoint.

use sched2ics::run;
use sched2ics::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
