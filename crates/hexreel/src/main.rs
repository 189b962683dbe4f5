use clap::Parser;
use hexreel::config::{self, Overrides};
use hexreel::gui::app::AppModel;
use hexreel::gui::scene::Scene;
use hexreel::sys::runtime;
use hexring::device::DeviceClass;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "hexreel", version, about, long_about = None)]
struct Cli {
    /// Force a layout instead of following the window width (compact or full)
    #[arg(short = 'd', long)]
    device: Option<DeviceClass>,

    /// Seed for the background shapes and the initial spin direction
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Write the default config file if missing, print its path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let overrides = Overrides {
        device: cli.device,
        seed: cli.seed,
    };
    let scene = Scene::new(config::load_or_default(), overrides);

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    // clap already consumed the arguments; GTK must not see them
    let app = RelmApp::new("org.hexreel.landing").with_args(Vec::new());
    app.run::<AppModel>((scene, rx));
    Ok(())
}
