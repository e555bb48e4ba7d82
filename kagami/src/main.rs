use clap::Parser;

use kagami::{
    app::{render_headless, Args, InitialSettings, Window},
    kagami_error, kagami_info,
};

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("kagami.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(why) = setup_logger(args.log_level.into()) {
        panic!("{}", why);
    };
    kagami_info!("Log level {}", args.log_level);

    let settings = match InitialSettings::from_args(&args) {
        Ok(settings) => settings,
        Err(why) => {
            kagami_error!("{}", why);
            eprintln!("{}", why);
            std::process::exit(1);
        }
    };

    if let Some(output) = settings.output.clone() {
        if let Err(why) = render_headless(&output, settings) {
            kagami_error!("{}", why);
            std::process::exit(1);
        }
    } else {
        match Window::new("kagami", settings) {
            Ok(window) => window.main_loop(),
            Err(why) => {
                kagami_error!("{}", why);
                std::process::exit(1);
            }
        }
    }
}
