#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use webgpu_sandbox::{Config, DemoKind, config};

/// Runs one of the WebGPU sandbox demos in a native window.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "webgpu-sandbox", version, about)]
struct Cli {
    /// Demo to run, see --list
    #[arg(default_value_t = DemoKind::Triangle)]
    demo: DemoKind,

    /// List the available demos and exit
    #[arg(short, long)]
    list: bool,

    /// MSAA sample count (1 or 4), defaults to the demo's own
    #[arg(short, long)]
    samples: Option<u32>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    height: u32,

    /// Image under assets/ for the textured cube
    #[arg(short, long, value_name = "FILE")]
    texture: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            demo: cli.demo,
            sample_count: cli.samples,
            width: cli.width,
            height: cli.height,
            texture: cli.texture,
            ..Config::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.list {
        for kind in DemoKind::ALL {
            println!("{:<18} {}", kind.name(), kind.title());
        }
        return Ok(());
    }
    webgpu_sandbox::run(cli.into())
}

// The web build starts demos through `webgpu_sandbox::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
