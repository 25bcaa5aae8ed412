use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use xcui_driver::wda::types::Orientation;
use xcui_driver::wda::{WdaClient, DEFAULT_WDA_PORT};
use xcui_driver::{Capabilities, XcuiDriver};

#[derive(Parser)]
#[command(name = "xcui-driver")]
#[command(version = "0.1.0")]
#[command(about = "XCUITest automation driver for WebDriverAgent", long_about = None)]
struct Cli {
    /// Base URL of a running WebDriverAgent (e.g. http://localhost:8100)
    #[arg(long, global = true)]
    wda_url: Option<String>,

    /// WebDriverAgent port on localhost
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Device UDID. Defaults to the booted simulator.
    #[arg(short, long, global = true)]
    udid: Option<String>,

    /// Target is a physical device rather than a simulator
    #[arg(long, global = true)]
    real_device: bool,

    /// Capability file (YAML or JSON)
    #[arg(short, long, global = true)]
    caps: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether WebDriverAgent is up and ready
    Status,

    /// Print the active application's window size
    Window,

    /// Print screen scale, status bar and viewport metrics
    Screen,

    /// Save a screenshot as PNG
    Screenshot {
        /// Output path (timestamped name in the current directory if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the UI hierarchy
    Source,

    /// Lock the screen
    Lock,

    /// Unlock the screen
    Unlock,

    /// Press a hardware button (home, volumeUp, volumeDown)
    Press {
        /// Button name
        name: String,
    },

    /// Simulate a Touch ID check (simulators only)
    TouchId {
        /// Play a non-matching finger
        #[arg(long)]
        fail: bool,
    },

    /// Toggle the simulator's Touch ID enrollment state
    EnrollTouchId,

    /// Send the frontmost app to the background
    Background {
        /// Seconds until the agent brings the app back
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// Manage applications by bundle ID
    App {
        #[command(subcommand)]
        command: AppCommands,
    },

    /// Type text on the device
    Keys {
        /// Text to type
        text: String,
    },

    /// Open a URL on the device
    Url {
        /// URL to open
        url: String,
    },

    /// Activate Siri with a spoken-text equivalent
    Siri {
        /// Text Siri should act on
        text: String,
    },

    /// Get or set the device orientation
    Orientation {
        /// "portrait" or "landscape"; prints the current orientation if omitted
        value: Option<String>,
    },

    /// Read or replace the simulator pasteboard
    Pasteboard {
        /// New content; prints the current content if omitted
        #[arg(short, long)]
        set: Option<String>,
    },

    /// Print device and battery information
    Info,
}

#[derive(Subcommand)]
enum AppCommands {
    /// Launch an app
    Launch {
        bundle_id: String,

        /// Launch argument (repeatable)
        #[arg(long = "arg")]
        args: Vec<String>,

        /// KEY=VALUE environment entry (repeatable)
        #[arg(long = "env")]
        env: Vec<String>,
    },

    /// Bring an installed app to the foreground
    Activate { bundle_id: String },

    /// Terminate a running app
    Terminate { bundle_id: String },

    /// Query an app's state
    State { bundle_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut caps = build_capabilities(&cli)?;
    let base_url = resolve_base_url(&cli, &caps);
    let client = Arc::new(WdaClient::new(base_url.clone()));

    // Status talks to the agent directly; everything else runs through a
    // driver session.
    if matches!(cli.command, Commands::Status) {
        return print_status(&client, &base_url).await;
    }

    // Running the enrollment command from the CLI is the permission the
    // capability normally grants.
    if matches!(cli.command, Commands::EnrollTouchId) {
        caps.allow_touch_id_enroll = true;
    }

    let mut driver = XcuiDriver::new(client);
    driver.create_session(caps)?;

    match cli.command {
        Commands::Status => unreachable!("handled above"),

        Commands::Window => {
            let size = driver.window_rect().await?;
            println!("{} Window size: {}x{}", "✓".green(), size.width, size.height);
        }

        Commands::Screen => {
            let screen = driver.screen_info().await?;
            println!("{} Screen scale: {}", "✓".green(), screen.scale);
            println!(
                "  Status bar: {}x{}",
                screen.status_bar_size.width, screen.status_bar_size.height
            );
            let viewport = driver.viewport_rect().await?;
            println!(
                "  Viewport: {}x{} at ({}, {})",
                viewport.width, viewport.height, viewport.left, viewport.top
            );
        }

        Commands::Screenshot { output } => {
            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "screenshot-{}.png",
                    chrono::Local::now().format("%Y%m%d-%H%M%S")
                ))
            });
            driver
                .screenshot_to_file(&path)
                .await
                .with_context(|| format!("Failed to save screenshot to {}", path.display()))?;
            println!(
                "{} Screenshot saved: {}",
                "✓".green(),
                path.display().to_string().cyan()
            );
        }

        Commands::Source => {
            println!("{}", driver.source().await?);
        }

        Commands::Lock => {
            driver.lock().await?;
            println!("{} Screen locked", "✓".green());
        }

        Commands::Unlock => {
            driver.unlock().await?;
            println!("{} Screen unlocked", "✓".green());
        }

        Commands::Press { name } => {
            driver.press_button(&name).await?;
            println!("{} Pressed {}", "✓".green(), name.cyan());
        }

        Commands::TouchId { fail } => {
            driver.touch_id(Some(!fail)).await?;
            println!(
                "{} Simulated {} Touch ID check",
                "✓".green(),
                if fail { "a failing" } else { "a matching" }
            );
        }

        Commands::EnrollTouchId => {
            driver.toggle_enroll_touch_id().await?;
            println!("{} Toggled Touch ID enrollment", "✓".green());
        }

        Commands::Background { duration } => {
            driver
                .background(duration.map(Duration::from_secs_f64))
                .await?;
            println!("{} App sent to background", "✓".green());
        }

        Commands::App { command } => match command {
            AppCommands::Launch {
                bundle_id,
                args,
                env,
            } => {
                let env = parse_env_entries(&env)?;
                driver.launch_app(&bundle_id, &args, &env).await?;
                println!("{} Launched {}", "✓".green(), bundle_id.cyan());
            }
            AppCommands::Activate { bundle_id } => {
                driver.activate_app(&bundle_id).await?;
                println!("{} Activated {}", "✓".green(), bundle_id.cyan());
            }
            AppCommands::Terminate { bundle_id } => {
                if driver.terminate_app(&bundle_id).await? {
                    println!("{} Terminated {}", "✓".green(), bundle_id.cyan());
                } else {
                    println!("{} {} was not running", "○".yellow(), bundle_id.cyan());
                }
            }
            AppCommands::State { bundle_id } => {
                let state = driver.query_app_state(&bundle_id).await?;
                println!("{} {} is {:?}", "✓".green(), bundle_id.cyan(), state);
            }
        },

        Commands::Keys { text } => {
            driver.send_keys(&text).await?;
            println!("{} Typed {} characters", "✓".green(), text.chars().count());
        }

        Commands::Url { url } => {
            driver.open_url(&url).await?;
            println!("{} Opened {}", "✓".green(), url.cyan());
        }

        Commands::Siri { text } => {
            driver.siri_command(&text).await?;
            println!("{} Sent to Siri: {}", "✓".green(), text.cyan());
        }

        Commands::Orientation { value } => match value {
            Some(value) => {
                let orientation: Orientation =
                    value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                driver.set_orientation(orientation).await?;
                println!("{} Orientation set to {:?}", "✓".green(), orientation);
            }
            None => {
                let orientation = driver.orientation().await?;
                println!("{} Orientation: {:?}", "✓".green(), orientation);
            }
        },

        Commands::Pasteboard { set } => match set {
            Some(content) => {
                driver.set_pasteboard(&content).await?;
                println!("{} Pasteboard updated", "✓".green());
            }
            None => {
                println!("{}", driver.get_pasteboard().await?);
            }
        },

        Commands::Info => {
            let info = driver.device_info().await?;
            println!("{} Device info:", "✓".green());
            println!("  Name: {}", info.name.cyan());
            println!("  Model: {}", info.model);
            println!("  UDID: {}", info.uuid);
            println!("  Time zone: {}", info.time_zone);
            println!("  Locale: {}", info.current_locale);
            println!("  Simulator: {}", info.is_simulator);

            let battery = driver.battery_info().await?;
            if battery.level >= 0.0 {
                println!(
                    "  Battery: {:.0}% ({:?})",
                    battery.level * 100.0,
                    battery.state
                );
            }
        }
    }

    driver.delete_session();
    Ok(())
}

/// Merge capability-file values with the connection flags. Flags win.
fn build_capabilities(cli: &Cli) -> anyhow::Result<Capabilities> {
    let mut caps = match cli.caps {
        Some(ref path) => Capabilities::from_file(path)
            .with_context(|| format!("Failed to load capabilities from {}", path.display()))?,
        None => Capabilities::default(),
    };

    if let Some(ref udid) = cli.udid {
        caps.udid = Some(udid.clone());
    }
    if cli.real_device {
        caps.real_device = true;
    }
    Ok(caps)
}

/// Pick the agent base URL: explicit flags first, then capability values,
/// then the default port.
fn resolve_base_url(cli: &Cli, caps: &Capabilities) -> String {
    if let Some(ref url) = cli.wda_url {
        return url.clone();
    }
    if let Some(port) = cli.port {
        return format!("http://localhost:{}", port);
    }
    if let Some(ref url) = caps.web_driver_agent_url {
        return url.clone();
    }
    format!(
        "http://localhost:{}",
        caps.wda_local_port.unwrap_or(DEFAULT_WDA_PORT)
    )
}

async fn print_status(client: &WdaClient, base_url: &str) -> anyhow::Result<()> {
    match client.status().await {
        Ok(status) => {
            let glyph = if status.ready {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("{} WebDriverAgent at {}", glyph, base_url.cyan());
            println!("  Ready: {}", status.ready);
            if !status.message.is_empty() {
                println!("  Message: {}", status.message);
            }
            if let Some(id) = status.session_id {
                println!("  Session: {}", id);
            }
            Ok(())
        }
        Err(e) => {
            println!(
                "{} WebDriverAgent not reachable at {}",
                "✗".red(),
                base_url.cyan()
            );
            Err(e.into())
        }
    }
}

fn parse_env_entries(entries: &[String]) -> anyhow::Result<HashMap<String, String>> {
    let mut env = HashMap::new();
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Environment entry '{}' is not KEY=VALUE", entry))?;
        env.insert(key.to_string(), value.to_string());
    }
    Ok(env)
}
