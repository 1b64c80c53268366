//! Walk from the museum entrance to the cafe.
//!
//! Run: cargo run --bin museum

use roompath_paths::find_path;

const ROOMS: [&str; 4] = ["Entrance", "Hall", "Gallery", "Cafe"];
const DOORS: [(&str, &str); 3] = [
    ("Entrance", "Hall"),
    ("Hall", "Gallery"),
    ("Gallery", "Cafe"),
];

fn main() {
    match find_path(ROOMS, DOORS, "Entrance", "Cafe") {
        Ok(path) => println!("{path:?}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
