use jotnotes_desktop::{app, open_notebook, settings};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = settings::load_settings();
    if !settings::settings_file_path().exists() {
        if let Err(e) = settings::save_settings(&settings) {
            log::warn!("{e}");
        }
    }

    let notebook = match open_notebook(Path::new(&settings.database_path)) {
        Ok(notebook) => notebook,
        Err(e) => {
            log::error!("failed to open {}: {e}", settings.database_path);
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match app::run(notebook, settings.theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("window error: {e}");
            ExitCode::FAILURE
        }
    }
}
