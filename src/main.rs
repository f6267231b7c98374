#[cfg(target_os = "espidf")]
fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("Element Patterns - ESP32");
    if let Err(e) = element_patterns::esp32::run() {
        log::error!("Firmware stopped: {e}");
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> std::process::ExitCode {
    use element_patterns::config::Config;
    use element_patterns::mock;

    env_logger::init();

    let result = Config::from_env()
        .map_err(|e| e.to_string())
        .and_then(|config| mock::run_interactive_terminal(&config).map_err(|e| e.to_string()));

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}
