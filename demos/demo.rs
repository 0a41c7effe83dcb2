//! Quick tour of the qol helpers.
//!
//! Run with `cargo run --example demo`.

use qol::{
    num_parse, parse_date, random_colour, sleep, ColourFormat, DateFormat, Delimiter, LogLevel,
    Logger,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut logger = Logger::new();
    logger.new_log(LogLevel::Log, "demo", "starting");

    for format in [
        ColourFormat::Hex,
        ColourFormat::Rgb,
        ColourFormat::Cmyk,
        ColourFormat::Hsv,
        ColourFormat::Hsl,
    ] {
        println!("{:?}: {}", format, random_colour(format));
    }

    logger.log(LogLevel::Log, "colours", "all five notations printed");
    logger.proc_time();

    let parts = parse_date(21, 2, 2, 2023);
    println!("{}", parts.format(DateFormat::Lll, false));
    println!("{}", parts.format(DateFormat::Nsl, true));

    println!("{}", num_parse(9_876_543.21, Delimiter::Comma));
    println!("{}", num_parse(9_876_543.21, Delimiter::Punct));

    logger.log(LogLevel::Log, "sleep", "simulating a slow call");
    if let Err(err) = sleep(150, false).await {
        logger.log(LogLevel::Error, "sleep", &err.to_string());
    }
    logger.proc_time();

    logger.exec_time();
}
