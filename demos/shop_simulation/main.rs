use shopsim::core::input::ShopInput;
use shopsim::simulate;
use std::io::Read;

fn main() -> Result<(), String> {
    env_logger::init();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Failed to read input: {}", e))?;

    let (config, service_time, rest_time) = ShopInput::parse(&input)
        .and_then(ShopInput::into_parts)
        .map_err(|e| e.to_string())?;
    log::info!(
        "Simulating {} customers across {} servers and {} self-checkouts",
        config.arrival_times.len(),
        config.servers,
        config.self_checkouts
    );

    let output = simulate(&config, service_time, rest_time).map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}
