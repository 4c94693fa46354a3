// SPDX-License-Identifier: MPL-2.0
use cam_lens::api::device::{self, DeviceReport};
use cam_lens::api::ApiClient;
use cam_lens::app::{self, paths, Flags};
use cam_lens::config::{self, Config, PanelConfig};
use cam_lens::error::Error;
use cam_lens::i18n::fluent::I18n;
use std::path::PathBuf;
use std::process::ExitCode;

/// What the process was asked to do.
enum Command {
    Gui,
    InitConfig,
    Device(DeviceCommand),
}

/// Device-side API calls run without opening a window.
enum DeviceCommand {
    CheckTrigger,
    Upload(PathBuf),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (flags, command) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Gui => match app::run(flags) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!("application error: {err}");
                ExitCode::FAILURE
            }
        },
        Command::InitConfig => {
            let (_, i18n) = load_settings(&flags);
            init_config(&i18n)
        }
        Command::Device(device_command) => run_device(device_command, flags),
    }
}

fn parse_args() -> Result<(Flags, Command), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let check_trigger = args.contains("--check-trigger");
    let init_config = args.contains("--init-config");
    let upload: Option<PathBuf> = args.opt_value_from_str("--upload")?;

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_url: args.opt_value_from_str("--api-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    let command = if init_config {
        Command::InitConfig
    } else if let Some(path) = upload {
        Command::Device(DeviceCommand::Upload(path))
    } else if check_trigger {
        Command::Device(DeviceCommand::CheckTrigger)
    } else {
        Command::Gui
    };

    Ok((flags, command))
}

/// Applies the config dir override, then loads settings and translations.
fn load_settings(flags: &Flags) -> (Config, I18n) {
    paths::init_cli_override(flags.config_dir.clone());

    let (file_config, warning) = config::load();
    let i18n = I18n::new(flags.lang.clone(), &file_config);
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }
    (file_config, i18n)
}

fn run_device(command: DeviceCommand, flags: Flags) -> ExitCode {
    let (file_config, i18n) = load_settings(&flags);
    let panel = PanelConfig::resolve(&file_config, flags.api_url);
    let client = ApiClient::new(&panel);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = runtime.block_on(async {
        match &command {
            DeviceCommand::CheckTrigger => device::poll_trigger(&client).await,
            DeviceCommand::Upload(path) => device::upload_file(&client, path).await,
        }
    });

    match outcome {
        Ok(DeviceReport::TriggerPending(pending)) => {
            println!("{pending}");
            let key = if pending {
                "cli-trigger-pending"
            } else {
                "cli-trigger-idle"
            };
            eprintln!("{}", i18n.tr(key));
            ExitCode::SUCCESS
        }
        Ok(DeviceReport::Uploaded { url }) => {
            println!("{url}");
            eprintln!("{}", i18n.tr_with_args("cli-upload-done", &[("url", &url)]));
            ExitCode::SUCCESS
        }
        Err(Error::Api(err)) => {
            eprintln!("{} ({err})", i18n.tr(err.i18n_key()));
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Writes a default `settings.toml`, refusing to overwrite an existing one.
fn init_config(i18n: &I18n) -> ExitCode {
    let Some(path) = config::config_path() else {
        eprintln!("{}", Error::Config("no config directory available".into()));
        return ExitCode::FAILURE;
    };

    if path.exists() {
        let path = path.display().to_string();
        eprintln!("{}", i18n.tr_with_args("cli-config-exists", &[("path", &path)]));
        return ExitCode::FAILURE;
    }

    match config::save(&Config::default()) {
        Ok(()) => {
            let path = path.display().to_string();
            println!("{}", i18n.tr_with_args("cli-config-written", &[("path", &path)]));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
