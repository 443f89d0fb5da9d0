use synastry_core::{build_chart, score};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Example usage
    let user = match build_chart("1990-01-01", "12:00", "New York, NY") {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let partner = match build_chart("1985-07-13", "06:30", "London, UK") {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("{}", user);
    println!();
    println!("{}", partner);
    println!();
    println!("Compatibility: {:.2}", score(&user, &partner));
}
