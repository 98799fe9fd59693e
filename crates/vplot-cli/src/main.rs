//! plotsvg - plot SVG line paths on a cable plotter.

fn main() {
    if let Err(e) = vplot_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
