fn main() {
    if let Err(e) = stencil_ls_cli::run() {
        eprintln!("stencil-ls: {}", e);
        std::process::exit(1);
    }
}
