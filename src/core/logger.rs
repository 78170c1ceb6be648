use log::LevelFilter;

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn setup_logging(verbose: u8) {
    env_logger::Builder::from_default_env()
        .filter_level(level_for(verbose))
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}
