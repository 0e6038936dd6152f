use std::path::PathBuf;
use std::time::{Duration, Instant};

use structopt::StructOpt;

use chip8_vm::machine::Machine;

mod crossterm_io;
mod key_buffer;
mod key_manager;

use crossterm::event::KeyCode;
use crossterm_io::{key_to_hex, CrosstermScreen};
use key_manager::KeyManager;

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
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.input);
    let program = std::fs::read(&opt.input)?;

    // Load instructions into machine memory
    let mut machine = Machine::new();
    machine.load(&program)?;

    let key_manager = KeyManager::new();
    let mut screen = CrosstermScreen::new();

    let frame_duration = Duration::from_millis(1_000 / TIMER_HZ);
    loop {
        let frame_start = Instant::now();

        // Report held keys to the machine
        let held = key_manager.held_keys();
        if held.contains(&KeyCode::Char('q')) {
            break;
        }
        let mut held_by_code = [false; 16];
        for key in held {
            if let Some(code) = key_to_hex(key) {
                held_by_code[code as usize] = true;
            }
        }
        for code in 0..16u8 {
            if held_by_code[code as usize] {
                machine.press_key(code);
            } else {
                machine.release_key(code);
            }
        }

        // Run the CPU, then the timers
        for _ in 0..opt.cycles_per_frame {
            machine.step()?;
        }
        if machine.tick() {
            screen.beep();
        }

        // Present a frame if anything changed
        if let Some(frame) = machine.frame() {
            screen.present(&frame);
            machine.clear_dirty();
        }

        if let Some(rest) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}
