//! dfsflow main entrypoint.

use dfsflow::run;
use dfsflow::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
