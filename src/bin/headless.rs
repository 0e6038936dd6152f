use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use chip8_vm::machine::Machine;

const TIMER_HZ: u64 = 60;

/// The program options.
#[derive(StructOpt)]
struct Opt {
    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Instructions to execute per 60 Hz timer tick
    #[structopt(long, default_value = "12")]
    cycles_per_frame: u32,

    /// Stop after this many frames instead of running forever
    #[structopt(long)]
    frames: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.input);
    let program = std::fs::read(&opt.input)?;

    // Load instructions into machine memory
    let mut machine = Machine::new();
    machine.load(&program)?;

    // Start execution. With no frontend there is nothing to present and no
    // keys to report, so a program that waits for a key will idle forever.
    let frame_duration = Duration::from_millis(1_000 / TIMER_HZ);
    let mut frame = 0;
    loop {
        if opt.frames.map_or(false, |max| frame >= max) {
            break;
        }
        for _ in 0..opt.cycles_per_frame {
            machine.step()?;
        }
        machine.tick();
        machine.clear_dirty();
        frame += 1;
        std::thread::sleep(frame_duration);
    }

    Ok(())
}
