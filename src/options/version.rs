use colored::Colorize;

pub fn show() {
    println!(
        "{} v{}",
        env!("CARGO_PKG_NAME").bright_green(),
        env!("CARGO_PKG_VERSION").bright_white()
    );
}
