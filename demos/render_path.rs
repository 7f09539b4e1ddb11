use pathcode::RenderOptions;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pathcode=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut minified = false;
    let mut input = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--minified" | "-m" => minified = true,
            _ => input = Some(arg),
        }
    }
    let input = input.unwrap_or_else(|| "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2z".to_string());

    let options = RenderOptions {
        minified,
        ..RenderOptions::default()
    };
    match pathcode::path_to_code(&input, &options) {
        Ok(code) => println!("{}", code),
        Err(e) => eprintln!("{:?}", e),
    }
}
