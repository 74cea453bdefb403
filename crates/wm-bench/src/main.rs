use std::io;
use std::time::{Duration, Instant};

use chat_wm::config::WmConfig;
use chat_wm::host::{Session, WindowCommands};
use chat_wm::input::PointerEvent;
use chat_wm::layout::Viewport;
use chat_wm::window::WindowManager;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "wm-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Headless benchmark for session churn, organize and drag throughput"
)]
struct BenchCli {
    /// Concurrent sessions kept in the host list.
    #[arg(short = 's', long = "sessions", value_name = "COUNT", default_value_t = 50)]
    sessions: usize,

    /// Iterations per scenario.
    #[arg(short = 'r', long = "rounds", value_name = "COUNT", default_value_t = 1_000)]
    rounds: usize,

    /// Pointer moves per drag gesture.
    #[arg(long = "moves", value_name = "COUNT", default_value_t = 60)]
    moves: usize,

    #[arg(long = "width", value_name = "PX", default_value_t = 1920)]
    width: u32,

    #[arg(long = "height", value_name = "PX", default_value_t = 1080)]
    height: u32,
}

impl BenchCli {
    fn viewport(&self) -> Result<Viewport, String> {
        if self.width < 640 || self.height < 480 {
            return Err("viewport must be at least 640x480".to_string());
        }
        Ok(Viewport::new(self.width, self.height))
    }
}

struct Scenario {
    name: &'static str,
    ops: u64,
    elapsed: Duration,
}

impl Scenario {
    fn per_op_us(&self) -> f64 {
        if self.ops == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1_000_000.0 / self.ops as f64
    }

    fn report(&self) -> String {
        indoc::formatdoc!(
            r#"
            {name}: {ops} ops in {elapsed:.2} ms ({per_op:.2} us/op)"#,
            name = self.name,
            ops = self.ops,
            elapsed = self.elapsed.as_secs_f64() * 1_000.0,
            per_op = self.per_op_us(),
        )
    }
}

fn sessions(range: std::ops::Range<u64>) -> Vec<Session<u64>> {
    range
        .map(|id| Session::new(id, format!("customer {id}"), "benchmark chat"))
        .collect()
}

/// Slide the session list one id per round so every sync provisions one
/// window and drops another.
fn bench_churn(cli: &BenchCli, viewport: Viewport) -> Scenario {
    let mut wm = WindowManager::new(WmConfig::default(), viewport);
    let count = cli.sessions as u64;
    let start = Instant::now();
    for round in 0..cli.rounds as u64 {
        wm.sync_sessions(sessions(round..round + count));
        let _ = wm.take_host_events();
    }
    Scenario {
        name: "sync churn",
        ops: cli.rounds as u64,
        elapsed: start.elapsed(),
    }
}

fn bench_organize(cli: &BenchCli, viewport: Viewport) -> Scenario {
    let mut wm = WindowManager::new(WmConfig::default(), viewport);
    wm.sync_sessions(sessions(0..cli.sessions as u64));
    let start = Instant::now();
    for _ in 0..cli.rounds {
        wm.organize_windows();
    }
    Scenario {
        name: "organize",
        ops: cli.rounds as u64,
        elapsed: start.elapsed(),
    }
}

fn bench_drag(cli: &BenchCli, viewport: Viewport) -> Scenario {
    let mut wm = WindowManager::new(WmConfig::default(), viewport);
    wm.sync_sessions(sessions(0..cli.sessions as u64));
    let mut ops = 0u64;
    let start = Instant::now();
    for round in 0..cli.rounds {
        let Some(top) = wm.render_plan().floating.last().map(|view| view.rect) else {
            break;
        };
        let (x, y) = (top.x + 20, top.y + 20);
        wm.handle_pointer(PointerEvent::down(x, y));
        let dir = if round % 2 == 0 { 1 } else { -1 };
        for step in 1..=cli.moves as i32 {
            wm.handle_pointer(PointerEvent::moved(x + dir * step, y + step % 7));
        }
        wm.handle_pointer(PointerEvent::up(x, y));
        let _ = wm.take_host_events();
        ops += cli.moves as u64 + 2;
    }
    Scenario {
        name: "drag",
        ops,
        elapsed: start.elapsed(),
    }
}

fn main() -> io::Result<()> {
    let cli = BenchCli::parse();
    let viewport = cli
        .viewport()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    println!(
        "{} sessions, {} rounds, {}x{} viewport",
        cli.sessions, cli.rounds, viewport.width, viewport.height
    );
    for scenario in [
        bench_churn(&cli, viewport),
        bench_organize(&cli, viewport),
        bench_drag(&cli, viewport),
    ] {
        println!("{}", scenario.report());
    }
    Ok(())
}
