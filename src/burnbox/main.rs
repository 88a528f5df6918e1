use burnbox::error::UNAVAILABLE_MESSAGE;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if e.is_unavailable() {
            eprintln!("{}", UNAVAILABLE_MESSAGE);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
