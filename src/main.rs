// No console window on Windows; the resolver reports through message boxes.
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

fn main() {
    std::process::exit(view_source_resolver::app::cli::run());
}
